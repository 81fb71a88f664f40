//! View and visualization state

/// View state manages display options for the dashboard panels
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Grid visibility on the trend chart
    pub show_grid: bool,

    /// Legend visibility on the charts
    pub show_legend: bool,

    /// Static workday summary block visibility
    pub show_summary: bool,

    /// Show help panel
    pub show_help: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_grid: true,
            show_legend: true,
            show_summary: true,
            show_help: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
