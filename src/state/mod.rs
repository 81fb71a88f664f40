//! Application state management
//!
//! This module organizes the ErgoScope application state into logical
//! components: the run configuration, the run state machine, and the
//! view/UI state the panels read and mutate.

mod ui;
mod view;

pub use ui::UiState;
pub use view::ViewState;

use chrono::{DateTime, Local};

use crate::config::RunConfig;
use crate::constants::signal::BASELINE_CM;
use crate::sim::{DisplayFrame, RunController};

/// Main application state container
pub struct AppState {
    /// Run configuration (threshold, optional seed)
    pub config: RunConfig,

    /// Run orchestration state machine
    pub run: RunController,

    /// Presence flag from the (simulated) IR sensor; constant in this version
    pub presence: bool,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,

    /// When the most recent run finished
    pub last_completed: Option<DateTime<Local>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: RunConfig::default(),
            run: RunController::new(),
            presence: true,
            view: ViewState::default(),
            ui: UiState::default(),
            last_completed: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the live display frame for the current state: latest sample
    /// while a run has stepped, otherwise the idle baseline value.
    pub fn display_frame(&self) -> DisplayFrame {
        let sample = self
            .run
            .latest()
            .map(|output| output.sample)
            .unwrap_or(BASELINE_CM);
        DisplayFrame::build(
            sample,
            self.presence,
            self.run.history().window(),
            self.config.threshold(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Posture;

    #[test]
    fn test_idle_frame_uses_baseline() {
        let state = AppState::new();
        let frame = state.display_frame();

        assert_eq!(frame.distance_cm, 10.0);
        assert!(frame.presence);
        assert_eq!(frame.posture, Posture::Correct); // 10 < 12
        assert_eq!(frame.user_series.len(), 50);
        assert!(frame.user_series.iter().all(|p| p[1] == 10.0));
        assert!(frame.reference_series.iter().all(|p| p[1] == 12.0));
    }

    #[test]
    fn test_frame_tracks_threshold_config() {
        let mut state = AppState::new();
        state.config.threshold_cm = 8;
        let frame = state.display_frame();
        // Baseline 10 is at or above an 8 cm threshold
        assert_eq!(frame.posture, Posture::BadPosture);
        assert_eq!(frame.delta_cm, 2.0);
    }
}
