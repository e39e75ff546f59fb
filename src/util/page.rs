//! Host page helpers.

/// Path of the page hosting the widget (`location.pathname`), or `/` when
/// there is no browser window.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}
