//! Simulation core
//!
//! This module organizes the simulated biofeedback pipeline into focused
//! components: the phased signal generator, the rolling history buffer, the
//! pure display-frame builder, and the run state machine that paces them.

mod frame;
mod generator;
mod history;
mod run;

pub use frame::{DisplayFrame, Posture, classify};
pub use generator::{Phase, Severity, SignalGenerator, deterministic_sample};
pub use history::HistoryBuffer;
pub use run::{RunController, RunState, StepOutput, Tick};
