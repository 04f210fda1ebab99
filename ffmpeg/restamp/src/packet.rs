/*!
    Packet accessor contract.
*/

use ffmpeg_types::{Packet, Pts};

/**
    A packet whose timestamps can be rewritten in place.

    Values are tick counts in the packet's stream time base. Restampers only
    ever read the four values and write PTS/DTS back; payload and every other
    field are left alone.
*/
pub trait TimestampedPacket {
    /// Index of the logical stream (independent timeline) this packet belongs to.
    fn stream_index(&self) -> usize;
    fn pts(&self) -> i64;
    fn dts(&self) -> i64;
    fn duration(&self) -> i64;
    fn set_pts(&mut self, pts: i64);
    fn set_dts(&mut self, dts: i64);
}

/**
    Missing timestamps fall back to each other: a packet without DTS reads as
    its PTS and vice versa. A packet with neither reads as 0. Restamping always
    leaves both timestamps set.
*/
impl TimestampedPacket for Packet {
    fn stream_index(&self) -> usize {
        self.stream_index
    }

    fn pts(&self) -> i64 {
        self.pts.or(self.dts).map_or(0, |pts| pts.0)
    }

    fn dts(&self) -> i64 {
        self.dts.or(self.pts).map_or(0, |dts| dts.0)
    }

    fn duration(&self) -> i64 {
        self.duration.0
    }

    fn set_pts(&mut self, pts: i64) {
        self.pts = Some(Pts(pts));
    }

    fn set_dts(&mut self, dts: i64) {
        self.dts = Some(Pts(dts));
    }
}

/**
    Move the packet's DTS to `dts`, keeping its PTS - DTS lead unchanged.

    Wrapping arithmetic keeps this total for sentinel or extreme inputs.
*/
pub(crate) fn shift_to(packet: &mut dyn TimestampedPacket, dts: i64) {
    let delta = packet.pts().wrapping_sub(packet.dts());
    packet.set_dts(dts);
    packet.set_pts(dts.wrapping_add(delta));
}
