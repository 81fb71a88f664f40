//! UI interaction state

/// UI state manages transient interaction state and error surfacing
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in the status bar
    pub error_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
