//! Human-readable Russian phrases for signed durations.
//!
//! The crate turns a duration into a phrase such as `"2 недели 18 часов 22
//! минуты 3 секунды"`, choosing the noun form each numeral requires (1 час,
//! 2 часа, 5 часов).
//!
//! # Pipeline
//!
//! - [`literal`]: parses duration literals (`"3h4m5s"`, `"-1.5s"`) and writes
//!   the canonical literal of a value
//! - [`decompose`]: splits the absolute microsecond count into years, weeks,
//!   days, hours, minutes, seconds, milliseconds and microseconds
//! - [`grammar`]: picks the singular, "few" or "many" noun form for a count
//! - [`format`]: the [`FormattedDuration`] handle that renders phrases, with
//!   unit-ceiling and term-count truncation
//! - [`config`]: serializable truncation settings
//!
//! ## Usage
//!
//! ```rust
//! use chrono::TimeDelta;
//! use durafmt_ru::{FormattedDuration, Unit};
//!
//! let mut duration = FormattedDuration::from_string("354h22m3s").unwrap();
//! assert_eq!(duration.render(), "2 недели 18 часов 22 минуты 3 секунды");
//! assert_eq!(duration.limit_first_n(2).render(), "2 недели 18 часов");
//! assert_eq!(
//!     duration.limit_first_n(0).limit_to_unit(Some(Unit::Days)).render(),
//!     "14 дней 18 часов 22 минуты 3 секунды"
//! );
//!
//! let short = FormattedDuration::from_duration_short(TimeDelta::seconds(-100));
//! assert_eq!(short.to_string(), "-1 минута");
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod config;
pub mod decompose;
pub mod error;
pub mod format;
pub mod grammar;
pub mod literal;
pub mod units;

// Re-export commonly used types
// ------------------------
pub use config::{FormatConfig, FormatConfigBuilder};
pub use decompose::Decomposition;
pub use error::{DurafmtError, DurafmtResult, LiteralError};
pub use format::FormattedDuration;
pub use grammar::{select_form, NounForms, PluralForm};
pub use literal::{parse_literal, to_literal};
pub use units::Unit;
