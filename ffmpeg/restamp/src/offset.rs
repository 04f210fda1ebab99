/*!
    Offset based restampers.
*/

use std::fmt;

use tracing::{debug, trace};

use crate::packet::{TimestampedPacket, shift_to};
use crate::restamper::Restamper;
use crate::state::StreamStates;

/**
    Restamper that shifts each stream by a fixed offset.

    The offset is computed by `compute` from the first packet seen on a stream
    and reused unchanged for every later packet on that stream. Spacing between
    packets and the PTS - DTS lead are preserved exactly.
*/
pub struct WithOffset<F> {
    offsets: StreamStates<i64>,
    compute: F,
}

impl<F> WithOffset<F>
where
    F: Fn(&dyn TimestampedPacket) -> i64 + Send + Sync,
{
    pub fn new(compute: F) -> Self {
        Self {
            offsets: StreamStates::new(),
            compute,
        }
    }
}

impl<F> WithOffset<F> {
    /**
        The offset cached for a stream, if a packet has been seen on it.
    */
    pub fn offset(&self, stream_index: usize) -> Option<i64> {
        self.offsets.get(stream_index)
    }

    /**
        All cached offsets, sorted by stream index.
    */
    pub fn offsets(&self) -> Vec<(usize, i64)> {
        self.offsets.snapshot()
    }
}

impl<F> Restamper for WithOffset<F>
where
    F: Fn(&dyn TimestampedPacket) -> i64 + Send + Sync,
{
    fn restamp(&self, packet: &mut dyn TimestampedPacket) {
        let stream_index = packet.stream_index();
        let (offset, computed) = self
            .offsets
            .get_or_insert_with(stream_index, || (self.compute)(&*packet));
        if computed {
            debug!(stream_index, offset, "computed restamp offset");
        }

        let (pts, dts) = (packet.pts(), packet.dts());
        shift_to(packet, dts.wrapping_add(offset));
        trace!(
            stream_index,
            pts,
            dts,
            new_pts = packet.pts(),
            new_dts = packet.dts(),
            "restamped packet"
        );
    }
}

impl<F> fmt::Debug for WithOffset<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithOffset")
            .field("offsets", &self.offsets)
            .finish_non_exhaustive()
    }
}

type OffsetFn = fn(&dyn TimestampedPacket) -> i64;

fn negated_dts(packet: &dyn TimestampedPacket) -> i64 {
    packet.dts().wrapping_neg()
}

/**
    Restamper that makes every stream start at zero.

    The first packet of each stream gets DTS 0; later packets keep their
    original distance from it.
*/
#[derive(Debug)]
pub struct StartFromZero {
    inner: WithOffset<OffsetFn>,
}

impl StartFromZero {
    pub fn new() -> Self {
        Self {
            inner: WithOffset::new(negated_dts as OffsetFn),
        }
    }

    /**
        The offset applied to a stream (minus its first DTS), if seen.
    */
    pub fn offset(&self, stream_index: usize) -> Option<i64> {
        self.inner.offset(stream_index)
    }

    /**
        All cached offsets, sorted by stream index.
    */
    pub fn offsets(&self) -> Vec<(usize, i64)> {
        self.inner.offsets()
    }
}

impl Default for StartFromZero {
    fn default() -> Self {
        Self::new()
    }
}

impl Restamper for StartFromZero {
    fn restamp(&self, packet: &mut dyn TimestampedPacket) {
        self.inner.restamp(packet);
    }
}
