//! Rolling history of distance samples
//!
//! Append-only during a run; the trend chart only ever sees the trailing
//! display window. Older samples stay in the buffer but are not drawn.

use crate::constants::history::{DISPLAY_WINDOW, IDLE_BASELINE_LEN, RUN_SEED_LEN};
use crate::constants::signal::BASELINE_CM;

/// Ordered sequence of samples produced by the current run
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: Vec<f64>,
}

impl HistoryBuffer {
    /// Flat baseline shown while no run is in progress
    pub fn idle_baseline() -> Self {
        Self {
            samples: vec![BASELINE_CM; IDLE_BASELINE_LEN],
        }
    }

    /// Baseline seeded at the start of a run
    pub fn run_seed() -> Self {
        Self {
            samples: vec![BASELINE_CM; RUN_SEED_LEN],
        }
    }

    /// Append one sample
    pub fn push(&mut self, sample: f64) {
        self.samples.push(sample);
    }

    /// Total samples held, including ones scrolled out of the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Trailing display window (at most `DISPLAY_WINDOW` samples, original order)
    pub fn window(&self) -> &[f64] {
        let start = self.samples.len().saturating_sub(DISPLAY_WINDOW);
        &self.samples[start..]
    }
}
