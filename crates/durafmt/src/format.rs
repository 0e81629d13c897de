//! Human-readable Russian duration phrases
//!
//! A [`FormattedDuration`] pairs a duration with the literal it came from and
//! two truncation settings. Rendering decomposes the absolute value into
//! units, picks the agreeing noun for each non-zero count and joins the terms
//! with single spaces:
//!
//! ```
//! use chrono::TimeDelta;
//! use durafmt_ru::FormattedDuration;
//!
//! let phrase = FormattedDuration::from_duration(TimeDelta::hours(8759)).render();
//! assert_eq!(phrase, "52 недели 23 часа");
//! ```
//!
//! Two rules depend on the original literal rather than on the value: a
//! leading `-` prefixes the phrase with a minus sign, and a zero duration is
//! reported in the unit the literal was written in (`"0h"` renders
//! `"0 часов"`). Handles built from a value use its canonical literal (see
//! [`crate::literal::to_literal`]).

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use tracing::{debug, trace};

use crate::config::FormatConfig;
use crate::decompose::Decomposition;
use crate::error::{DurafmtError, DurafmtResult};
use crate::literal::{micros_of, parse_literal, to_literal};
use crate::units::Unit;

/// A duration with its formatting options
///
/// Setters mutate the handle in place and return it for chaining. Rendering
/// never touches the stored duration, so a handle can be rendered any number
/// of times, including from several threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDuration {
    duration: TimeDelta,
    input: String,
    unit_limit: Option<Unit>,
    term_limit: usize,
}

impl FormattedDuration {
    /// Wrap a duration with no unit or term limit.
    #[must_use]
    pub fn from_duration(duration: TimeDelta) -> Self {
        Self::new(duration, to_literal(micros_of(duration)), 0)
    }

    /// Wrap a duration, keeping only the leading term.
    ///
    /// Same as `from_duration(duration)` followed by `limit_first_n(1)`.
    #[must_use]
    pub fn from_duration_short(duration: TimeDelta) -> Self {
        Self::new(duration, to_literal(micros_of(duration)), 1)
    }

    /// Parse a duration literal such as `"3h4m5s"` or `"-1.5s"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use durafmt_ru::FormattedDuration;
    ///
    /// let duration = FormattedDuration::from_string("354h22m3s").unwrap();
    /// assert_eq!(duration.render(), "2 недели 18 часов 22 минуты 3 секунды");
    /// assert_eq!(FormattedDuration::from_string("-0s").unwrap().render(), "-0 секунд");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DurafmtError::NoUnit`] for exactly `"0"` or `"-0"`, and
    /// [`DurafmtError::Parse`] for text outside the literal grammar (see
    /// [`crate::literal`]).
    pub fn from_string(input: &str) -> DurafmtResult<Self> {
        Self::parse_with_limit(input, 0)
    }

    /// Parse a duration literal, keeping only the leading term.
    ///
    /// # Errors
    ///
    /// Same as [`FormattedDuration::from_string`].
    pub fn from_string_short(input: &str) -> DurafmtResult<Self> {
        Self::parse_with_limit(input, 1)
    }

    /// Set or clear (`None`) the coarsest unit the phrase may contain.
    ///
    /// Longer durations collapse into the ceiling unit: 87593183 seconds
    /// limited to hours render as `"24331 час 26 минут 23 секунды"`.
    pub fn limit_to_unit(&mut self, unit: Option<Unit>) -> &mut Self {
        self.unit_limit = unit;
        self
    }

    /// Set the unit ceiling by canonical name; `""` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`DurafmtError::UnknownUnit`] when `name` is neither empty nor
    /// a canonical unit name. The handle is left unchanged.
    pub fn limit_to_unit_name(&mut self, name: &str) -> DurafmtResult<&mut Self> {
        let unit = if name.is_empty() { None } else { Some(name.parse::<Unit>()?) };
        Ok(self.limit_to_unit(unit))
    }

    /// Keep at most `n` terms of the phrase; `0` means unlimited.
    pub fn limit_first_n(&mut self, n: usize) -> &mut Self {
        self.term_limit = n;
        self
    }

    /// Apply both settings of `config`.
    pub fn apply_config(&mut self, config: &FormatConfig) -> &mut Self {
        self.unit_limit = config.unit_limit;
        self.term_limit = config.term_limit;
        self
    }

    /// Current settings of this handle.
    #[must_use]
    pub const fn config(&self) -> FormatConfig {
        FormatConfig { unit_limit: self.unit_limit, term_limit: self.term_limit }
    }

    /// The duration exactly as constructed.
    #[must_use]
    pub const fn raw_duration(&self) -> TimeDelta {
        self.duration
    }

    /// The literal the handle was built from.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Coarsest unit the phrase may contain.
    #[must_use]
    pub const fn unit_limit(&self) -> Option<Unit> {
        self.unit_limit
    }

    /// Maximum number of terms (0 = unlimited).
    #[must_use]
    pub const fn term_limit(&self) -> usize {
        self.term_limit
    }

    /// Render the phrase.
    #[must_use]
    pub fn render(&self) -> String {
        let micros = micros_of(self.duration);
        trace!(
            micros = %micros,
            unit_limit = ?self.unit_limit,
            term_limit = self.term_limit,
            "rendering duration phrase"
        );

        let mut phrase = String::new();
        if self.input.starts_with('-') {
            phrase.push('-');
        }

        if micros == 0 {
            phrase.push_str(&zero_phrase(&self.input));
        } else {
            let parts = Decomposition::new(micros.unsigned_abs(), self.unit_limit);
            phrase.push_str(&terms(&parts));
        }

        keep_first_terms(phrase, self.term_limit)
    }

    fn new(duration: TimeDelta, input: String, term_limit: usize) -> Self {
        Self { duration, input, unit_limit: None, term_limit }
    }

    fn parse_with_limit(input: &str, term_limit: usize) -> DurafmtResult<Self> {
        if input == "0" || input == "-0" {
            debug!(input, "duration literal has no unit");
            return Err(DurafmtError::no_unit(input));
        }

        let duration = parse_literal(input)
            .inspect_err(|e| debug!(input, error = %e, "rejected duration literal"))?;

        Ok(Self::new(duration, input.to_string(), term_limit))
    }
}

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for FormattedDuration {
    type Err = DurafmtError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_string(input)
    }
}

impl From<TimeDelta> for FormattedDuration {
    fn from(duration: TimeDelta) -> Self {
        Self::from_duration(duration)
    }
}

/// Non-zero counts as `"<count> <noun>"`, coarsest first.
fn terms(parts: &Decomposition) -> String {
    parts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(unit, count)| format!("{count} {}", unit.forms().pick(count)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"0 <many form>"` of the unit whose token the literal spells as
/// `-?0<token>`, or nothing when no token matches.
fn zero_phrase(input: &str) -> String {
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    Unit::ALL
        .into_iter()
        .find(|unit| unsigned.strip_prefix('0') == Some(unit.short_token()))
        .map(|unit| format!("0 {}", unit.forms().many()))
        .unwrap_or_default()
}

fn keep_first_terms(phrase: String, limit: usize) -> String {
    if limit == 0 {
        return phrase;
    }
    phrase.split(' ').take(limit.saturating_mul(2)).collect::<Vec<_>>().join(" ")
}
