//! Bench knobs read from the environment.
//!
//! `PDFGRID_BENCH_TIER=full` adds the 100k-box inputs and longer sampling;
//! `PDFGRID_BENCH_SEED` fixes the generated page layout.

use std::env;

const DEFAULT_SEED: u64 = 0x5EED_B0C5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

impl BenchTier {
    pub fn from_env() -> Self {
        match env::var("PDFGRID_BENCH_TIER").as_deref() {
            Ok("full") => BenchTier::Full,
            _ => BenchTier::Quick,
        }
    }

    /// Box counts for list-sized inputs.
    pub fn box_counts(self) -> &'static [usize] {
        match self {
            BenchTier::Quick => &[1_000, 10_000],
            BenchTier::Full => &[1_000, 10_000, 100_000],
        }
    }
}

/// Seed for the glyph layout; unparsable values fall back to the default.
pub fn layout_seed() -> u64 {
    env::var("PDFGRID_BENCH_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED)
}
