mod banner;
mod controls;
mod help_dialog;
mod metrics;
mod summary;
mod trend;

pub use banner::render_banner;
pub use controls::render_controls;
pub use help_dialog::render_help_dialog;
pub use metrics::render_metrics;
pub use summary::render_summary;
pub use trend::render_trend;
