/*!
    Shared types for the ffmpeg crate ecosystem.

    This crate defines the vocabulary of the ecosystem, the types that cross crate
    boundaries. It has no dependency on FFmpeg, making it lightweight and enabling
    consumers to depend on it without pulling in FFmpeg bindings.
*/

mod packet;
mod time;

pub use self::packet::{Packet, StreamType};
pub use self::time::{MediaDuration, Pts, Rational};
