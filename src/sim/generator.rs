//! Phased signal generator for the simulated backrest-distance signal
//!
//! One run walks a fixed 101-step script: a stable baseline, a linear drift
//! away from the backrest, a noisy alert plateau, and a linear recovery back
//! to baseline. The deterministic component is a pure function of the step
//! index; noise is drawn from an injected seedable RNG so tests can pin the
//! sequence.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::constants::signal::{
    BASELINE_CM, LAST_STEP, PEAK_CM, PLATEAU_END, PLATEAU_NOISE_STD, RAMP_SLOPE, RISING_END,
    STABLE_END, STABLE_NOISE_STD,
};

/// Scripted segment of a run, derived purely from the step index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Steps 0-20: resting at the baseline
    Stable,
    /// Steps 21-50: linear drift away from the backrest
    Rising,
    /// Steps 51-70: noisy plateau at peak distance
    AlertPlateau,
    /// Steps 71-100: linear recovery toward the baseline
    Falling,
}

/// Banner style attached to each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Alert,
    Info,
}

impl Phase {
    /// Phase governing the given step; boundaries are half-open as scripted
    /// (20/50/70 close their phases, 21/51/71 open the next).
    pub fn for_step(step: u32) -> Self {
        debug_assert!(step <= LAST_STEP);
        if step <= STABLE_END {
            Phase::Stable
        } else if step <= RISING_END {
            Phase::Rising
        } else if step <= PLATEAU_END {
            Phase::AlertPlateau
        } else {
            Phase::Falling
        }
    }

    /// Banner severity shown while this phase is active
    pub fn severity(self) -> Severity {
        match self {
            Phase::Stable => Severity::Success,
            Phase::Rising => Severity::Warning,
            Phase::AlertPlateau => Severity::Alert,
            Phase::Falling => Severity::Info,
        }
    }

    /// Banner text shown while this phase is active
    pub fn status_message(self) -> &'static str {
        match self {
            Phase::Stable => "Status: monitoring stable. Posture correct.",
            Phase::Rising => "Status: losing contact with the backrest...",
            Phase::AlertPlateau => "ALERT: correct your position immediately.",
            Phase::Falling => "Status: correction in progress. Returning to safe zone.",
        }
    }
}

/// Noise-free component of the signal at the given step
pub fn deterministic_sample(step: u32) -> f64 {
    match Phase::for_step(step) {
        Phase::Stable => BASELINE_CM,
        Phase::Rising => BASELINE_CM + (step - STABLE_END) as f64 * RAMP_SLOPE,
        Phase::AlertPlateau => PEAK_CM,
        Phase::Falling => PEAK_CM - (step - PLATEAU_END) as f64 * RAMP_SLOPE,
    }
}

/// Generates one distance sample per step of the scripted run
pub struct SignalGenerator {
    rng: StdRng,
    stable_noise: Normal<f64>,
    plateau_noise: Normal<f64>,
}

impl SignalGenerator {
    /// Create a generator with a fixed seed (reproducible noise)
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        // Constant positive sigmas, so construction cannot fail
        let stable_noise =
            Normal::new(0.0, STABLE_NOISE_STD).expect("stable noise stddev is positive");
        let plateau_noise =
            Normal::new(0.0, PLATEAU_NOISE_STD).expect("plateau noise stddev is positive");
        Self {
            rng,
            stable_noise,
            plateau_noise,
        }
    }

    /// Produce the sample for `step`: the deterministic component plus
    /// phase-dependent noise (ramps carry no noise).
    pub fn generate(&mut self, step: u32) -> f64 {
        let base = deterministic_sample(step);
        match Phase::for_step(step) {
            Phase::Stable => base + self.stable_noise.sample(&mut self.rng),
            Phase::AlertPlateau => base + self.plateau_noise.sample(&mut self.rng),
            Phase::Rising | Phase::Falling => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::signal::RUN_SAMPLES;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(Phase::for_step(0), Phase::Stable);
        assert_eq!(Phase::for_step(20), Phase::Stable);
        assert_eq!(Phase::for_step(21), Phase::Rising);
        assert_eq!(Phase::for_step(50), Phase::Rising);
        assert_eq!(Phase::for_step(51), Phase::AlertPlateau);
        assert_eq!(Phase::for_step(70), Phase::AlertPlateau);
        assert_eq!(Phase::for_step(71), Phase::Falling);
        assert_eq!(Phase::for_step(100), Phase::Falling);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(Phase::Stable.severity(), Severity::Success);
        assert_eq!(Phase::Rising.severity(), Severity::Warning);
        assert_eq!(Phase::AlertPlateau.severity(), Severity::Alert);
        assert_eq!(Phase::Falling.severity(), Severity::Info);
    }

    #[test]
    fn test_rising_ramp_is_exact() {
        // 10 + (35 - 20) * 16/30 = 18.0
        assert_eq!(deterministic_sample(35), 18.0);
        // Ramp tops out at the peak exactly
        assert!((deterministic_sample(50) - 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_falling_ramp_returns_to_baseline() {
        assert!((deterministic_sample(100) - 10.0).abs() < 1e-12);
        // Midpoint of the recovery
        let expected = 26.0 - 15.0 * (16.0 / 30.0);
        assert!((deterministic_sample(85) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ramps_carry_no_noise() {
        let mut generator = SignalGenerator::seeded(7);
        for step in [21, 35, 50, 71, 85, 100] {
            assert_eq!(generator.generate(step), deterministic_sample(step));
        }
    }

    #[test]
    fn test_stable_samples_stay_near_baseline() {
        let mut generator = SignalGenerator::seeded(42);
        for step in 0..=20 {
            let sample = generator.generate(step);
            // 5 sigma band around the baseline
            assert!((sample - 10.0).abs() < 5.0 * 0.2, "step {step}: {sample}");
        }
    }

    #[test]
    fn test_plateau_samples_stay_near_peak() {
        let mut generator = SignalGenerator::seeded(42);
        for step in 51..=70 {
            let sample = generator.generate(step);
            assert!((sample - 26.0).abs() < 5.0 * 0.5, "step {step}: {sample}");
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = SignalGenerator::seeded(1234);
        let mut b = SignalGenerator::seeded(1234);
        for step in 0..RUN_SAMPLES as u32 {
            assert_eq!(a.generate(step), b.generate(step));
        }
    }
}
