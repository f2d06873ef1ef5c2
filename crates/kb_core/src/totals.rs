//! Running totals for one rendering pass.
//!
//! Starts at zero and only grows. The renderer owns one `Totals` per pass and
//! hands it back with the rendered lines, so there is no shared state.

use crate::entities::Counts;
use crate::errors::CoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub pass: u64,
    pub fail: u64,
    pub warn: u64,
    pub info: u64,
}

impl Totals {
    pub const fn zero() -> Self {
        Self { pass: 0, fail: 0, warn: 0, info: 0 }
    }

    /// Add one test's counters. On overflow the accumulator is left untouched.
    pub fn add(&mut self, c: &Counts) -> Result<(), CoreError> {
        let next = Totals {
            pass: checked(self.pass, c.pass, "pass")?,
            fail: checked(self.fail, c.fail, "fail")?,
            warn: checked(self.warn, c.warn, "warn")?,
            info: checked(self.info, c.info, "info")?,
        };
        *self = next;
        Ok(())
    }
}

#[inline]
fn checked(a: u64, b: u64, field: &'static str) -> Result<u64, CoreError> {
    a.checked_add(b).ok_or(CoreError::Overflow { field })
}
