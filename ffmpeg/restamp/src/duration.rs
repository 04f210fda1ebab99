/*!
    Duration chained restamper.
*/

use tracing::{debug, trace};

use crate::packet::{TimestampedPacket, shift_to};
use crate::restamper::Restamper;
use crate::state::StreamStates;

/**
    What a stream remembers about its previous packet.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastPacket {
    /// Restamped DTS of the previous packet.
    pub dts: i64,
    /// Declared duration of the previous packet, as received.
    pub duration: i64,
}

impl LastPacket {
    /**
        The DTS the next packet on this stream will receive.
    */
    pub fn next_dts(&self) -> i64 {
        self.dts.wrapping_add(self.duration)
    }
}

/**
    Restamper that rebuilds each stream's timeline from packet durations.

    The first packet of a stream gets DTS 0, and every later packet gets the
    previous packet's DTS plus its declared duration. Original timestamps only
    contribute the PTS - DTS lead. Zero durations are not corrected: the next
    packet repeats the previous DTS.
*/
#[derive(Debug, Default)]
pub struct WithPacketDuration {
    last: StreamStates<LastPacket>,
}

impl WithPacketDuration {
    pub fn new() -> Self {
        Self {
            last: StreamStates::new(),
        }
    }

    /**
        The record kept for a stream's previous packet, if any.
    */
    pub fn last_packet(&self, stream_index: usize) -> Option<LastPacket> {
        self.last.get(stream_index)
    }

    /**
        The DTS the next packet on a stream will receive, if the stream has been seen.
    */
    pub fn next_dts(&self, stream_index: usize) -> Option<i64> {
        self.last_packet(stream_index).map(|last| last.next_dts())
    }
}

impl Restamper for WithPacketDuration {
    fn restamp(&self, packet: &mut dyn TimestampedPacket) {
        let stream_index = packet.stream_index();
        let duration = packet.duration();
        let (dts, first) = self.last.update(stream_index, |last| {
            let dts = last.map_or(0, |last| last.next_dts());
            (LastPacket { dts, duration }, (dts, last.is_none()))
        });
        if first {
            debug!(stream_index, duration, "started duration chained timeline");
        }

        let (old_pts, old_dts) = (packet.pts(), packet.dts());
        shift_to(packet, dts);
        trace!(
            stream_index,
            pts = old_pts,
            dts = old_dts,
            new_pts = packet.pts(),
            new_dts = dts,
            "restamped packet"
        );
    }
}
