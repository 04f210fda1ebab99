/*!
    Timestamp and time base types.
*/

use std::fmt;
use std::time::Duration;

/**
    A rational number, used for stream time bases.

    A time base of `1/90000` means one timestamp tick is 1/90000th of a second.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /**
        Returns the value as a float. A zero denominator yields `0.0`.
    */
    pub fn to_f64(self) -> f64 {
        if self.den == 0 {
            return 0.0;
        }
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/**
    A presentation or decode timestamp, in time base units.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pts(pub i64);

impl Pts {
    /**
        Convert to wall-clock time using the given time base.

        Negative timestamps clamp to zero.
    */
    pub fn to_duration(self, time_base: Rational) -> Duration {
        if time_base.den == 0 {
            return Duration::ZERO;
        }
        let secs = self.0 as f64 * time_base.num as f64 / time_base.den as f64;
        if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        }
    }
}

/**
    A packet duration, in time base units.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MediaDuration(pub i64);

impl MediaDuration {
    pub const ZERO: Self = Self(0);

    /**
        Convert to wall-clock time using the given time base.
    */
    pub fn to_duration(self, time_base: Rational) -> Duration {
        Pts(self.0).to_duration(time_base)
    }
}
