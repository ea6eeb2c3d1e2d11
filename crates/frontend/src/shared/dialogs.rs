//! Blocking browser dialogs.

/// Show `window.alert`. Silently does nothing outside a browser window.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Show `window.prompt`; `None` when cancelled or no window is available.
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}
