//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Simulated distance signal parameters
pub mod signal {
    /// Resting distance to the backrest (cm)
    pub const BASELINE_CM: f64 = 10.0;

    /// Peak distance reached during the alert plateau (cm)
    pub const PEAK_CM: f64 = 26.0;

    /// Slope of the drift/recovery ramps (cm per step)
    pub const RAMP_SLOPE: f64 = 16.0 / 30.0;

    /// Last step of the stable phase
    pub const STABLE_END: u32 = 20;

    /// Last step of the rising (drift) phase
    pub const RISING_END: u32 = 50;

    /// Last step of the alert plateau
    pub const PLATEAU_END: u32 = 70;

    /// Last step of a run (steps are 0..=LAST_STEP, 101 in total)
    pub const LAST_STEP: u32 = 100;

    /// Number of samples produced by one full run
    pub const RUN_SAMPLES: usize = (LAST_STEP + 1) as usize;

    /// Noise standard deviation while the posture is stable (cm)
    pub const STABLE_NOISE_STD: f64 = 0.2;

    /// Noise standard deviation on the alert plateau (cm)
    pub const PLATEAU_NOISE_STD: f64 = 0.5;
}

/// Reference threshold bounds (sidebar slider)
pub mod threshold {
    /// Minimum configurable reference distance (cm)
    pub const MIN_CM: u32 = 5;

    /// Maximum configurable reference distance (cm)
    pub const MAX_CM: u32 = 25;

    /// Default reference distance (cm)
    pub const DEFAULT_CM: u32 = 12;
}

/// History buffer sizing
pub mod history {
    /// Number of trailing samples shown on the trend chart
    pub const DISPLAY_WINDOW: usize = 50;

    /// Baseline entries seeded at the start of a run
    pub const RUN_SEED_LEN: usize = 20;

    /// Flat baseline entries shown while idle
    pub const IDLE_BASELINE_LEN: usize = 50;
}

/// Run pacing
pub mod timing {
    use std::time::Duration;

    /// Wall-clock interval between simulation steps
    pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

    /// Repaint request cadence while a run is active
    pub const REPAINT_INTERVAL: Duration = Duration::from_millis(25);
}

/// Static 8-hour workday summary fixture (mock values by design)
pub mod summary {
    /// Hourly tick labels for the workday area chart
    pub const HOUR_LABELS: [&str; 8] = [
        "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
    ];

    /// Hourly activity values for the workday area chart
    pub const HOUR_VALUES: [f64; 8] = [8.0, 9.0, 11.0, 14.0, 10.0, 15.0, 18.0, 12.0];

    /// Mock cumulative metric: hours seated
    pub const SEATED_HOURS: f64 = 7.2;

    /// Mock cumulative metric: posture alerts raised
    pub const ALERT_COUNT: u32 = 12;

    /// Mock cumulative metric: share of time with correct posture (%)
    pub const CORRECT_SHARE_PCT: f64 = 78.0;

    /// Mock cumulative metric: longest correct-posture streak (minutes)
    pub const LONGEST_STREAK_MIN: u32 = 52;
}

/// UI layout defaults
pub mod layout {
    /// Sidebar (controls) default width
    pub const SIDEBAR_WIDTH: f32 = 230.0;

    /// Live metrics strip height
    pub const METRICS_HEIGHT: f32 = 90.0;

    /// Summary block height
    pub const SUMMARY_HEIGHT: f32 = 220.0;

    /// Minimum trend plot height
    pub const MIN_PLOT_HEIGHT: f32 = 200.0;
}
