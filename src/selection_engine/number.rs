//! Integer generation, either from entropy or from a reproducible seed.
//!
//! ## Seeded mode
//!
//! A seed drives a 32-bit linear congruential generator:
//!
//! ```text
//! seed' = (1664525 * seed + 1013904223) rem 2^32
//! value = min + |seed'| mod (max - min + 1)
//! ```
//!
//! `rem` is the truncated remainder, so a negative seed stays negative along
//! the chain.
//!
//! [`random_int`] is pure: it never stores `seed'`. Whoever owns the seed calls
//! [`lcg_step`] (or [`SeedCursor::advance`]) to move on to the next draw.
//! Seeded mode is reproducible and therefore predictable; it must never be
//! used where secure randomness is expected.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::selection_engine::error::{PickerError, PickerResult};

pub const LCG_MULTIPLIER: i128 = 1_664_525;
pub const LCG_INCREMENT: i128 = 1_013_904_223;
const LCG_MODULUS: i128 = 1 << 32;

/// Advance `seed` by one linear congruential step.
///
/// The remainder is truncated, so it keeps the sign of `A * seed + C`: a
/// negative seed yields a value in `(-2^32, 0]`, any other seed a value in
/// `[0, 2^32)`. Draws take the absolute value.
pub fn lcg_step(seed: i64) -> i64 {
    // |A * seed + C| < 2^85, and the remainder always fits in an i64.
    ((LCG_MULTIPLIER * seed as i128 + LCG_INCREMENT) % LCG_MODULUS) as i64
}

/// Draw an integer in `[min, max]`.
///
/// Without a seed the value comes from the thread-local entropy-seeded
/// generator. With a seed the value is a pure function of `(min, max, seed)`.
pub fn random_int(min: i64, max: i64, seed: Option<i64>) -> PickerResult<i64> {
    if min > max {
        return Err(PickerError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }

    match seed {
        None => Ok(rand::thread_rng().gen_range(min..=max)),
        Some(seed) => {
            let next = lcg_step(seed);
            // i128 keeps `max - min + 1` exact across the whole i64 domain.
            let span = max as i128 - min as i128 + 1;
            let offset = (next as i128).abs() % span;
            Ok((min as i128 + offset) as i64)
        }
    }
}

// ---------------------------------------------------------------------------
// Seed ownership
// ---------------------------------------------------------------------------

/// The current seed of one chain of picks.
///
/// An absent seed never advances and keeps every draw non-deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedCursor {
    current: Option<i64>,
}

impl SeedCursor {
    pub fn new(seed: Option<i64>) -> Self {
        SeedCursor { current: seed }
    }

    pub fn current(&self) -> Option<i64> {
        self.current
    }

    pub fn is_seeded(&self) -> bool {
        self.current.is_some()
    }

    /// Move to the next seed in the chain; a no-op when unseeded.
    pub fn advance(&mut self) {
        if let Some(seed) = self.current {
            self.current = Some(lcg_step(seed));
        }
    }

    /// Draw from `[min, max]` with the current seed, then advance.
    pub fn draw(&mut self, min: i64, max: i64) -> PickerResult<i64> {
        let value = random_int(min, max, self.current)?;
        self.advance();
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Number picker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberPickerOptions {
    pub seed: Option<i64>,
    /// When `false`, a seeded picker repeats the same value forever.
    pub advance_seed: bool,
}

impl Default for NumberPickerOptions {
    fn default() -> Self {
        NumberPickerOptions { seed: None, advance_seed: true }
    }
}

impl NumberPickerOptions {
    pub fn seeded(seed: i64) -> Self {
        NumberPickerOptions { seed: Some(seed), ..Self::default() }
    }
}

/// Repeatedly draws integers from a fixed `[min, max]` range.
#[derive(Debug, Clone)]
pub struct NumberPicker {
    min: i64,
    max: i64,
    seed: SeedCursor,
    options: NumberPickerOptions,
}

impl NumberPicker {
    pub fn create(min: i64, max: i64, options: NumberPickerOptions) -> PickerResult<Self> {
        if min > max {
            return Err(PickerError::InvalidRange { min, max });
        }
        Ok(NumberPicker { min, max, seed: SeedCursor::new(options.seed), options })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn seed(&self) -> Option<i64> {
        self.seed.current()
    }

    pub fn pick(&mut self) -> PickerResult<i64> {
        let value = random_int(self.min, self.max, self.seed.current())?;
        if self.options.advance_seed {
            self.seed.advance();
        }
        trace!(value, seed = ?self.seed.current(), "picked number");
        Ok(value)
    }
}
