//! Russian numeral agreement
//!
//! A noun following a numeral takes one of three forms depending on the last
//! one or two digits of the numeral:
//!
//! | Count | Form | Example |
//! |-------|------|---------|
//! | 1, 21, 31, 101 (not 11) | Singular | 21 час |
//! | 2-4, 22-24 (not 12-14) | Few | 3 часа |
//! | everything else, 11-14 | Many | 12 часов |

/// The three noun forms selected by a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralForm {
    /// 1, 21, 31...
    Singular,
    /// 2, 3, 4, 22, 23, 24...
    Few,
    /// 0, 5-20, 25-30...
    Many,
}

/// Selects the noun form required after `count`.
#[must_use]
pub const fn select_form(count: u128) -> PluralForm {
    let last = count % 10;
    let last_two = count % 100;

    if last == 1 && last_two != 11 {
        PluralForm::Singular
    } else if matches!(last, 2..=4) && !matches!(last_two, 12..=14) {
        PluralForm::Few
    } else {
        PluralForm::Many
    }
}

/// Noun forms of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForms {
    singular: &'static str,
    few: &'static str,
    many: &'static str,
}

impl NounForms {
    /// Create a grammar entry.
    #[must_use]
    pub const fn new(singular: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { singular, few, many }
    }

    /// The noun for the given form.
    #[must_use]
    pub const fn get(&self, form: PluralForm) -> &'static str {
        match form {
            PluralForm::Singular => self.singular,
            PluralForm::Few => self.few,
            PluralForm::Many => self.many,
        }
    }

    /// The noun agreeing with `count`.
    #[must_use]
    pub const fn pick(&self, count: u128) -> &'static str {
        self.get(select_form(count))
    }

    /// The "many" form, also used for zero.
    #[must_use]
    pub const fn many(&self) -> &'static str {
        self.many
    }
}
