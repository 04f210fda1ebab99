/*!
    Encoded packet type.
*/

use crate::{MediaDuration, Pts, Rational};

/**
    The kind of elementary stream a packet belongs to.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamType {
    Video,
    Audio,
}

/**
    An encoded media packet.

    Packets carry compressed data plus the timing needed to decode and present
    it. Timestamps are expressed in `time_base` units and are optional, since
    some containers omit them.
*/
#[derive(Clone, Debug)]
pub struct Packet {
    /// Compressed payload.
    pub data: Vec<u8>,
    /// Presentation timestamp.
    pub pts: Option<Pts>,
    /// Decode timestamp.
    pub dts: Option<Pts>,
    /// Packet duration.
    pub duration: MediaDuration,
    /// Time base for `pts`, `dts` and `duration`.
    pub time_base: Rational,
    /// Whether this packet starts a keyframe.
    pub is_keyframe: bool,
    /// Kind of stream this packet belongs to.
    pub stream_type: StreamType,
    /// Index of the stream this packet belongs to. Each index is an independent timeline.
    pub stream_index: usize,
}

impl Packet {
    /**
        Create a new packet on stream index 0.

        Use [`Packet::with_stream_index`] when the source carries more than one stream.
    */
    pub fn new(
        data: Vec<u8>,
        pts: Option<Pts>,
        dts: Option<Pts>,
        duration: MediaDuration,
        time_base: Rational,
        is_keyframe: bool,
        stream_type: StreamType,
    ) -> Self {
        Self {
            data,
            pts,
            dts,
            duration,
            time_base,
            is_keyframe,
            stream_type,
            stream_index: 0,
        }
    }

    /**
        Set the stream index this packet belongs to.
    */
    pub fn with_stream_index(mut self, stream_index: usize) -> Self {
        self.stream_index = stream_index;
        self
    }

    /**
        Returns true if the packet carries no payload (e.g. a flush packet).
    */
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /**
        Returns the payload size in bytes.
    */
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
