//! Unit decomposition
//!
//! Splits an absolute microsecond count into per-unit counts by floor
//! division, coarsest unit first. A unit ceiling stops the coarser units from
//! being computed at all, so their share funnels into the ceiling unit.

use crate::units::Unit;

/// Per-unit counts of a decomposed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decomposition {
    counts: [u128; 8],
}

impl Decomposition {
    /// Decompose `micros` with `ceiling` as the coarsest computed unit.
    ///
    /// `None` and `Some(Unit::Years)` both compute all eight units.
    #[must_use]
    pub fn new(micros: u128, ceiling: Option<Unit>) -> Self {
        let ceiling = ceiling.unwrap_or(Unit::Years);
        let mut counts = [0; 8];
        let mut remaining = micros;

        for unit in Unit::ALL.into_iter().filter(|unit| *unit >= ceiling) {
            let ratio = unit.micros();
            let count = remaining / ratio;
            remaining -= count * ratio;
            counts[unit.index()] = count;
        }

        Self { counts }
    }

    /// Count computed for `unit` (zero above the ceiling).
    #[must_use]
    pub fn count(&self, unit: Unit) -> u128 {
        self.counts[unit.index()]
    }

    /// `(unit, count)` pairs, coarsest first, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, u128)> + '_ {
        Unit::ALL.into_iter().map(move |unit| (unit, self.count(unit)))
    }

    /// Whether every count is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Sum of `count * ratio` over all units.
    #[must_use]
    pub fn total_micros(&self) -> u128 {
        self.iter().map(|(unit, count)| count * unit.micros()).sum()
    }
}
