//! Property-based tests for the restampers.
//!
//! These check the timeline invariants over arbitrary packet sequences, including
//! several streams interleaved through one restamper instance.

use std::collections::HashMap;

use ffmpeg_restamp::{PacketRestamper, Restamper, RestamperKind, StartFromZero, WithPacketDuration};
use ffmpeg_types::{MediaDuration, Packet, Pts, Rational, StreamType};
use proptest::prelude::*;

/// (stream index, pts, dts, duration) for one source packet.
type Input = (usize, i64, i64, i64);

fn packet((stream_index, pts, dts, duration): Input) -> Packet {
    Packet::new(
        Vec::new(),
        Some(Pts(pts)),
        Some(Pts(dts)),
        MediaDuration(duration),
        Rational::new(1, 90000),
        false,
        StreamType::Video,
    )
    .with_stream_index(stream_index)
}

fn timestamps(packet: &Packet) -> (i64, i64) {
    (packet.pts.unwrap().0, packet.dts.unwrap().0)
}

fn arb_inputs() -> impl Strategy<Value = Vec<Input>> {
    prop::collection::vec(
        (0usize..4, -1_000_000i64..1_000_000, -1_000_000i64..1_000_000, 0i64..10_000),
        1..64,
    )
}

fn restamp_each(restamper: &dyn Restamper, inputs: &[Input]) -> Vec<(i64, i64)> {
    inputs
        .iter()
        .map(|input| {
            let mut p = packet(*input);
            restamper.restamp(&mut p);
            timestamps(&p)
        })
        .collect()
}

proptest! {
    #[test]
    fn delta_is_preserved(inputs in arb_inputs()) {
        for kind in RestamperKind::ALL {
            let restamper = PacketRestamper::new(kind);
            let out = restamp_each(&restamper, &inputs);
            for ((_, pts, dts, _), (new_pts, new_dts)) in inputs.iter().zip(out) {
                prop_assert_eq!(new_pts - new_dts, pts - dts);
            }
        }
    }

    #[test]
    fn first_packet_of_each_stream_starts_at_zero(inputs in arb_inputs()) {
        for kind in RestamperKind::ALL {
            let restamper = PacketRestamper::new(kind);
            let out = restamp_each(&restamper, &inputs);
            let mut seen = HashMap::new();
            for ((stream_index, ..), (_, new_dts)) in inputs.iter().zip(out) {
                if seen.insert(*stream_index, ()).is_none() {
                    prop_assert_eq!(new_dts, 0);
                }
            }
        }
    }

    #[test]
    fn offset_is_constant_per_stream(inputs in arb_inputs()) {
        let restamper = StartFromZero::new();
        let out = restamp_each(&restamper, &inputs);
        let mut shifts = HashMap::new();
        for ((stream_index, _, dts, _), (_, new_dts)) in inputs.iter().zip(out) {
            let shift = *shifts.entry(*stream_index).or_insert(new_dts - dts);
            prop_assert_eq!(new_dts - dts, shift);
            prop_assert_eq!(restamper.offset(*stream_index), Some(shift));
        }
    }

    #[test]
    fn dts_chains_previous_duration(inputs in arb_inputs()) {
        let restamper = WithPacketDuration::new();
        let out = restamp_each(&restamper, &inputs);
        let mut previous: HashMap<usize, (i64, i64)> = HashMap::new();
        for ((stream_index, _, _, duration), (_, new_dts)) in inputs.iter().zip(out) {
            if let Some((prev_dts, prev_duration)) = previous.get(stream_index) {
                prop_assert_eq!(new_dts, prev_dts + prev_duration);
            }
            previous.insert(*stream_index, (new_dts, *duration));
        }
    }

    #[test]
    fn streams_do_not_affect_each_other(inputs in arb_inputs()) {
        for kind in RestamperKind::ALL {
            let shared = PacketRestamper::new(kind);
            let interleaved = restamp_each(&shared, &inputs);

            // Each stream through its own instance gives the same output.
            for stream_index in 0..4 {
                let own: Vec<Input> = inputs
                    .iter()
                    .copied()
                    .filter(|(index, ..)| *index == stream_index)
                    .collect();
                let alone = restamp_each(&PacketRestamper::new(kind), &own);
                let together: Vec<(i64, i64)> = inputs
                    .iter()
                    .zip(&interleaved)
                    .filter(|((index, ..), _)| *index == stream_index)
                    .map(|(_, out)| *out)
                    .collect();
                prop_assert_eq!(alone, together);
            }
        }
    }
}
