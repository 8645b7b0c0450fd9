//! Diagnostic channel for load failures

/// Message shown to the user when employee data cannot be read
pub const FETCH_FAILED_ALERT: &str = "Failed to fetch employee data";

/// Sink for load failures
pub trait Diagnostics {
    /// Record the error for developers
    fn report(&mut self, error: &str);

    /// Raise a blocking alert for the user
    fn alert(&mut self, message: &str);
}

/// Browser console and `window.alert`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDiagnostics;

impl Diagnostics for BrowserDiagnostics {
    fn report(&mut self, error: &str) {
        web_sys::console::error_2(&"Error fetching employees data:".into(), &error.into());
    }

    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
