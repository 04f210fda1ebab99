use serde::{Deserialize, Serialize};

use crate::strategy::{PacketRestamper, RestamperKind};

/**
    Configuration for the restamping stage of a pipeline.

    Only selects the strategy; the strategies themselves take no options.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestampConfig {
    /// Which strategy to build.
    pub strategy: RestamperKind,
}

impl RestampConfig {
    /**
        Configuration that makes every stream start at zero.
    */
    pub fn start_from_zero() -> Self {
        Self {
            strategy: RestamperKind::StartFromZero,
        }
    }

    /**
        Configuration that rebuilds timelines from packet durations.
    */
    pub fn with_packet_duration() -> Self {
        Self {
            strategy: RestamperKind::WithPacketDuration,
        }
    }

    /**
        Build a fresh restamper. Each call returns an independent instance.
    */
    pub fn build(&self) -> PacketRestamper {
        PacketRestamper::new(self.strategy)
    }
}
