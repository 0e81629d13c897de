//! Time units of the decomposition hierarchy
//!
//! Every unit carries its canonical name, the short token used by duration
//! literals, a fixed ratio to microseconds and its Russian noun forms. Years
//! and weeks are fixed-ratio approximations (365 and 7 days), not calendar
//! units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DurafmtError;
use crate::grammar::NounForms;

const MICROS_PER_MILLI: u128 = 1_000;
const MICROS_PER_SECOND: u128 = 1_000 * MICROS_PER_MILLI;
const MICROS_PER_MINUTE: u128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u128 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: u128 = 24 * MICROS_PER_HOUR;
const MICROS_PER_WEEK: u128 = 7 * MICROS_PER_DAY;
const MICROS_PER_YEAR: u128 = 365 * MICROS_PER_DAY;

/// Noun forms indexed by [`Unit::index`].
static GRAMMAR: [NounForms; 8] = [
    NounForms::new("год", "года", "лет"),
    NounForms::new("неделя", "недели", "недель"),
    NounForms::new("день", "дня", "дней"),
    NounForms::new("час", "часа", "часов"),
    NounForms::new("минута", "минуты", "минут"),
    NounForms::new("секунда", "секунды", "секунд"),
    NounForms::new("миллисекунда", "миллисекунды", "миллисекунд"),
    NounForms::new("микросекунда", "микросекунды", "микросекунд"),
];

/// A unit of the fixed decomposition hierarchy.
///
/// Ordering follows declaration order, so `Unit::Years` is the smallest
/// value and the coarsest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// 365 days
    Years,
    /// 7 days
    Weeks,
    /// 24 hours
    Days,
    /// 60 minutes
    Hours,
    /// 60 seconds
    Minutes,
    /// 1000 milliseconds
    Seconds,
    /// 1000 microseconds
    Milliseconds,
    /// Finest resolution of the engine
    Microseconds,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Self; 8] = [
        Self::Years,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
    ];

    /// Canonical lowercase name, e.g. `"hours"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
        }
    }

    /// Abbreviated suffix, e.g. `"h"` or `"µs"`.
    ///
    /// Only `µs`, `ms`, `s`, `m` and `h` are accepted by the literal parser;
    /// the coarser tokens exist for zero-phrase matching.
    #[must_use]
    pub const fn short_token(self) -> &'static str {
        match self {
            Self::Years => "y",
            Self::Weeks => "w",
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "µs",
        }
    }

    /// Length of one unit in microseconds.
    #[must_use]
    pub const fn micros(self) -> u128 {
        match self {
            Self::Years => MICROS_PER_YEAR,
            Self::Weeks => MICROS_PER_WEEK,
            Self::Days => MICROS_PER_DAY,
            Self::Hours => MICROS_PER_HOUR,
            Self::Minutes => MICROS_PER_MINUTE,
            Self::Seconds => MICROS_PER_SECOND,
            Self::Milliseconds => MICROS_PER_MILLI,
            Self::Microseconds => 1,
        }
    }

    /// Russian noun forms for this unit.
    #[must_use]
    pub fn forms(self) -> &'static NounForms {
        &GRAMMAR[self.index()]
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DurafmtError;

    /// Parses a canonical unit name. Names are case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|unit| unit.name() == name).ok_or_else(|| {
            debug!(name, "unknown unit name");
            DurafmtError::unknown_unit(name)
        })
    }
}
