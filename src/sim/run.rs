//! Run orchestration state machine
//!
//! A run is `Idle` until explicitly started, walks steps 0..=100 paced by the
//! step interval, and drops back to `Idle` unconditionally once step 100 has
//! been produced. There is no cancel path. Pacing is driven by caller-supplied
//! instants instead of a blocking sleep, so the egui frame loop (or a test
//! with synthetic instants) decides when time advances.

use std::time::{Duration, Instant};

use crate::constants::signal::LAST_STEP;
use crate::constants::timing::STEP_INTERVAL;
use crate::sim::generator::{Phase, Severity, SignalGenerator};
use crate::sim::history::HistoryBuffer;

/// Current state of the run state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running { next_step: u32 },
}

/// Result of producing one simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub step: u32,
    pub sample: f64,
    pub phase: Phase,
}

/// Outcome of a single `tick` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// No run in progress
    Idle,
    /// Run in progress but the step interval has not elapsed yet
    Pending,
    /// One step was produced
    Stepped(StepOutput),
    /// The final step was produced and the run returned to idle
    Finished(StepOutput),
}

/// Drives the generator and history through one run at a time
pub struct RunController {
    state: RunState,
    generator: Option<SignalGenerator>,
    history: HistoryBuffer,
    latest: Option<StepOutput>,
    last_step_at: Option<Instant>,
    step_interval: Duration,
    completed: bool,
}

impl RunController {
    pub fn new() -> Self {
        Self::with_interval(STEP_INTERVAL)
    }

    /// Controller with a custom step interval (tests use zero)
    pub fn with_interval(step_interval: Duration) -> Self {
        Self {
            state: RunState::Idle,
            generator: None,
            history: HistoryBuffer::idle_baseline(),
            latest: None,
            last_step_at: None,
            step_interval,
            completed: false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    /// True once a run has finished and no new run has started since
    pub fn has_completed_run(&self) -> bool {
        self.completed
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Latest produced step, if a run has stepped at least once
    pub fn latest(&self) -> Option<StepOutput> {
        self.latest
    }

    /// Start a fresh run. Resets the history to the run seed baseline and
    /// swaps in a new generator. Ignored while a run is already in progress.
    pub fn start(&mut self, seed: Option<u64>) {
        if self.is_running() {
            return;
        }
        self.generator = Some(match seed {
            Some(seed) => SignalGenerator::seeded(seed),
            None => SignalGenerator::from_entropy(),
        });
        self.history = HistoryBuffer::run_seed();
        self.latest = None;
        self.last_step_at = None;
        self.completed = false;
        self.state = RunState::Running { next_step: 0 };
    }

    /// Advance at most one step if the interval has elapsed since the last
    /// one. The first step of a run fires immediately.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let RunState::Running { next_step } = self.state else {
            return Tick::Idle;
        };

        if let Some(last) = self.last_step_at {
            if now.duration_since(last) < self.step_interval {
                return Tick::Pending;
            }
        }

        // Generator is always present while running; `start` installed it.
        let generator = self.generator.as_mut().expect("generator present while running");
        let sample = generator.generate(next_step);
        let output = StepOutput {
            step: next_step,
            sample,
            phase: Phase::for_step(next_step),
        };
        self.history.push(sample);
        self.latest = Some(output);
        self.last_step_at = Some(now);

        if next_step == LAST_STEP {
            self.state = RunState::Idle;
            self.completed = true;
            Tick::Finished(output)
        } else {
            self.state = RunState::Running {
                next_step: next_step + 1,
            };
            Tick::Stepped(output)
        }
    }

    /// Banner shown for the current state: the active phase while running,
    /// the final success banner after a completed run, otherwise the idle
    /// instruction.
    pub fn banner(&self) -> (Severity, &'static str) {
        match (self.state, self.latest) {
            (RunState::Running { .. }, Some(output)) => {
                (output.phase.severity(), output.phase.status_message())
            }
            (RunState::Running { .. }, None) => {
                (Phase::Stable.severity(), Phase::Stable.status_message())
            }
            (RunState::Idle, _) if self.completed => (
                Severity::Success,
                "Test finished successfully. Postural hygiene recovered.",
            ),
            (RunState::Idle, _) => (
                Severity::Info,
                "Press Start to run the 10-second biofeedback test.",
            ),
        }
    }
}

impl Default for RunController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::signal::RUN_SAMPLES;
    use crate::sim::generator::deterministic_sample;

    fn drive_full_run(controller: &mut RunController) -> Vec<StepOutput> {
        let mut now = Instant::now();
        let mut outputs = Vec::new();
        controller.start(Some(99));
        loop {
            match controller.tick(now) {
                Tick::Stepped(out) => outputs.push(out),
                Tick::Finished(out) => {
                    outputs.push(out);
                    break;
                }
                Tick::Pending => {}
                Tick::Idle => panic!("run ended early"),
            }
            now += Duration::from_millis(1);
        }
        outputs
    }

    #[test]
    fn test_full_run_produces_101_samples() {
        let mut controller = RunController::with_interval(Duration::ZERO);
        let outputs = drive_full_run(&mut controller);

        assert_eq!(outputs.len(), RUN_SAMPLES);
        assert_eq!(outputs.first().map(|o| o.step), Some(0));
        assert_eq!(outputs.last().map(|o| o.step), Some(100));
        // Final step lands back on the baseline exactly
        assert_eq!(deterministic_sample(100), 10.0);
        assert_eq!(outputs.last().map(|o| o.sample), Some(10.0));
    }

    #[test]
    fn test_run_returns_to_idle_with_success_banner() {
        let mut controller = RunController::with_interval(Duration::ZERO);
        drive_full_run(&mut controller);

        assert_eq!(controller.state(), RunState::Idle);
        assert!(controller.has_completed_run());
        let (severity, _) = controller.banner();
        assert_eq!(severity, Severity::Success);
    }

    #[test]
    fn test_idle_banner_before_first_run() {
        let controller = RunController::new();
        let (severity, message) = controller.banner();
        assert_eq!(severity, Severity::Info);
        assert!(message.contains("Press Start"));
    }

    #[test]
    fn test_tick_respects_step_interval() {
        let mut controller = RunController::with_interval(Duration::from_millis(100));
        let start = Instant::now();
        controller.start(Some(1));

        // First step fires immediately
        assert!(matches!(controller.tick(start), Tick::Stepped(_)));
        // Within the interval nothing advances
        assert_eq!(
            controller.tick(start + Duration::from_millis(40)),
            Tick::Pending
        );
        // Once the interval elapses the next step fires
        assert!(matches!(
            controller.tick(start + Duration::from_millis(100)),
            Tick::Stepped(_)
        ));
    }

    #[test]
    fn test_start_resets_history_to_run_seed() {
        let mut controller = RunController::with_interval(Duration::ZERO);
        assert_eq!(controller.history().len(), 50);

        controller.start(Some(5));
        assert_eq!(controller.history().len(), 20);

        drive_full_run_after_start(&mut controller);
        // 20 seed entries + 101 produced samples
        assert_eq!(controller.history().len(), 121);
        assert_eq!(controller.history().window().len(), 50);
    }

    fn drive_full_run_after_start(controller: &mut RunController) {
        let mut now = Instant::now();
        loop {
            match controller.tick(now) {
                Tick::Finished(_) | Tick::Idle => break,
                _ => now += Duration::from_millis(1),
            }
        }
    }

    #[test]
    fn test_start_is_ignored_while_running() {
        let mut controller = RunController::with_interval(Duration::ZERO);
        controller.start(Some(1));
        let now = Instant::now();
        controller.tick(now);
        controller.tick(now + Duration::from_millis(1));
        let len_before = controller.history().len();

        controller.start(Some(2));
        assert_eq!(controller.history().len(), len_before);
        assert!(controller.is_running());
    }

    #[test]
    fn test_running_banner_follows_phase() {
        let mut controller = RunController::with_interval(Duration::ZERO);
        controller.start(Some(3));
        let mut now = Instant::now();

        // Step 0 is stable
        controller.tick(now);
        assert_eq!(controller.banner().0, Severity::Success);

        // Drive into the rising phase (steps 1..=21)
        for _ in 0..21 {
            now += Duration::from_millis(1);
            controller.tick(now);
        }
        assert_eq!(controller.banner().0, Severity::Warning);

        // Drive into the alert plateau (through step 51)
        for _ in 0..30 {
            now += Duration::from_millis(1);
            controller.tick(now);
        }
        assert_eq!(controller.banner().0, Severity::Alert);
    }
}
