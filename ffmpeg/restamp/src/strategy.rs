/*!
    Selecting a restamping strategy.
*/

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::duration::WithPacketDuration;
use crate::error::ParseError;
use crate::offset::StartFromZero;
use crate::packet::TimestampedPacket;
use crate::restamper::Restamper;

/**
    The available restamping strategies.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestamperKind {
    /// Shift each stream so its first DTS is 0. See [`StartFromZero`].
    #[default]
    StartFromZero,
    /// Rebuild each stream from declared packet durations. See [`WithPacketDuration`].
    WithPacketDuration,
}

impl RestamperKind {
    pub const ALL: [Self; 2] = [Self::StartFromZero, Self::WithPacketDuration];

    /**
        Parse a strategy name. Case and surrounding whitespace are ignored,
        and `-` may be used in place of `_`.
    */
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|kind| kind.to_name() == name)
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::StartFromZero => "start_from_zero",
            Self::WithPacketDuration => "with_packet_duration",
        }
    }
}

impl fmt::Display for RestamperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for RestamperKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "restamper",
            value: s.to_owned(),
        })
    }
}

/**
    A restamper of any built-in strategy.

    Pipelines that pick the strategy at runtime hold this (or an
    `Arc<dyn Restamper>`) instead of a concrete type.
*/
#[derive(Debug)]
pub enum PacketRestamper {
    StartFromZero(StartFromZero),
    WithPacketDuration(WithPacketDuration),
}

impl PacketRestamper {
    /**
        Create a fresh restamper with no per-stream state.
    */
    pub fn new(kind: RestamperKind) -> Self {
        match kind {
            RestamperKind::StartFromZero => Self::StartFromZero(StartFromZero::new()),
            RestamperKind::WithPacketDuration => {
                Self::WithPacketDuration(WithPacketDuration::new())
            }
        }
    }

    pub fn kind(&self) -> RestamperKind {
        match self {
            Self::StartFromZero(_) => RestamperKind::StartFromZero,
            Self::WithPacketDuration(_) => RestamperKind::WithPacketDuration,
        }
    }
}

impl Restamper for PacketRestamper {
    fn restamp(&self, packet: &mut dyn TimestampedPacket) {
        match self {
            Self::StartFromZero(restamper) => restamper.restamp(packet),
            Self::WithPacketDuration(restamper) => restamper.restamp(packet),
        }
    }
}

impl From<RestamperKind> for PacketRestamper {
    fn from(kind: RestamperKind) -> Self {
        Self::new(kind)
    }
}

impl From<StartFromZero> for PacketRestamper {
    fn from(restamper: StartFromZero) -> Self {
        Self::StartFromZero(restamper)
    }
}

impl From<WithPacketDuration> for PacketRestamper {
    fn from(restamper: WithPacketDuration) -> Self {
        Self::WithPacketDuration(restamper)
    }
}
