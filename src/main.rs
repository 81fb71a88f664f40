#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Application shell
mod app;

// Run configuration and persistence
mod config;

// Application constants
mod constants;

// Error handling
mod error;

// Simulation core: generator, history, frame, run state machine
mod sim;

// Application state modules
mod state;

// Dashboard panels
mod ui;

use app::ErgoScope;

fn main() {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "ErgoScope - Ergonomic Control Panel",
        options,
        Box::new(|_| Ok(Box::new(ErgoScope::default()))),
    )
    .unwrap();
}
