/*!
    Packet timestamp restamping for the ffmpeg crate ecosystem.

    Sits between a source and a sink and rewrites packet PTS/DTS so downstream
    muxers and encoders see a clean timeline per stream, whatever offsets or
    gaps the original source had. Two strategies are provided:

    - [`StartFromZero`] shifts each stream by a fixed offset so it starts at 0.
    - [`WithPacketDuration`] ignores source timestamps and chains declared
      packet durations from 0.

    Both keep each packet's PTS - DTS lead and one timeline per stream index,
    and can be shared between threads.

    # Example

    ```
    use ffmpeg_restamp::{Restamper, StartFromZero};
    use ffmpeg_types::{MediaDuration, Packet, Pts, Rational, StreamType};

    let restamper = StartFromZero::new();
    let mut packet = Packet::new(
        Vec::new(),
        Some(Pts(105)),
        Some(Pts(100)),
        MediaDuration(10),
        Rational::new(1, 1000),
        true,
        StreamType::Video,
    );
    restamper.restamp(&mut packet);

    assert_eq!(packet.dts, Some(Pts(0)));
    assert_eq!(packet.pts, Some(Pts(5)));
    ```
*/

mod config;
mod duration;
mod error;
mod offset;
mod packet;
mod restamper;
mod state;
mod strategy;

pub use self::config::RestampConfig;
pub use self::duration::{LastPacket, WithPacketDuration};
pub use self::error::ParseError;
pub use self::offset::{StartFromZero, WithOffset};
pub use self::packet::TimestampedPacket;
pub use self::restamper::Restamper;
pub use self::state::StreamStates;
pub use self::strategy::{PacketRestamper, RestamperKind};
