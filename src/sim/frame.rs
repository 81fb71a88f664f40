//! Display frame: everything the live panels draw, as a plain value
//!
//! The UI never computes on its own; it renders a `DisplayFrame` built from
//! the latest sample, the presence flag, the history window, and the
//! configured threshold. Building a frame twice from the same inputs yields
//! the same frame, so the live region can be unit tested without a UI host.

/// Posture classification against the reference threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    Correct,
    BadPosture,
}

impl Posture {
    pub fn label(self) -> &'static str {
        match self {
            Posture::Correct => "CORRECT",
            Posture::BadPosture => "BAD POSTURE",
        }
    }
}

/// Strict less-than comparison; a sample equal to the threshold counts as
/// bad posture.
pub fn classify(sample: f64, threshold: f64) -> Posture {
    if sample < threshold {
        Posture::Correct
    } else {
        Posture::BadPosture
    }
}

/// One frame of the live display region
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    /// Latest distance sample (cm)
    pub distance_cm: f64,
    /// Presence detected by the (simulated) IR sensor
    pub presence: bool,
    /// Classification of the latest sample
    pub posture: Posture,
    /// Signed distance to the threshold; negative means under it
    pub delta_cm: f64,
    /// Windowed history, re-indexed from 0 for the chart
    pub user_series: Vec<[f64; 2]>,
    /// Constant threshold series aligned with `user_series`
    pub reference_series: Vec<[f64; 2]>,
}

impl DisplayFrame {
    /// Build a frame from the raw inputs. Pure: no hidden counters, no
    /// ambient state.
    pub fn build(sample: f64, presence: bool, window: &[f64], threshold: f64) -> Self {
        let user_series: Vec<[f64; 2]> = window
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();
        let reference_series: Vec<[f64; 2]> = (0..window.len())
            .map(|i| [i as f64, threshold])
            .collect();

        Self {
            distance_cm: sample,
            presence,
            posture: classify(sample, threshold),
            delta_cm: sample - threshold,
            user_series,
            reference_series,
        }
    }

    /// Distance formatted the way the metrics panel shows it
    pub fn distance_label(&self) -> String {
        format!("{:.1} cm", self.distance_cm)
    }

    /// Presence rendered as a binary label
    pub fn presence_label(&self) -> &'static str {
        if self.presence { "DETECTED" } else { "NONE" }
    }

    /// Signed delta formatted for the evaluation metric
    pub fn delta_label(&self) -> String {
        format!("{:+.1} cm", self.delta_cm)
    }
}
