/*!
    The restamper contract.
*/

use std::sync::Arc;

use crate::packet::TimestampedPacket;

/**
    Something that rewrites packet timestamps in place.

    One instance keeps an independent timeline per stream index and may be
    shared across threads, typically one producer per stream. Calls for
    different stream indices need no ordering relative to each other.
    Calls for the same stream index must arrive in packet order: packets are
    never buffered or reordered, and out of order input silently produces a
    wrong timeline. If two threads race on the first packet of a stream, the
    one that takes the state lock first defines that stream's starting point.
*/
pub trait Restamper: Send + Sync {
    /**
        Rewrite the packet's PTS and DTS. Never fails.
    */
    fn restamp(&self, packet: &mut dyn TimestampedPacket);

    /**
        Restamp a run of packets in order.
    */
    fn restamp_all<P>(&self, packets: &mut [P])
    where
        Self: Sized,
        P: TimestampedPacket,
    {
        for packet in packets {
            self.restamp(packet);
        }
    }
}

impl<R: Restamper + ?Sized> Restamper for Arc<R> {
    fn restamp(&self, packet: &mut dyn TimestampedPacket) {
        (**self).restamp(packet);
    }
}

impl<R: Restamper + ?Sized> Restamper for Box<R> {
    fn restamp(&self, packet: &mut dyn TimestampedPacket) {
        (**self).restamp(packet);
    }
}
