//! Third-party page scripts loaded alongside the widget.
//!
//! The cookie-consent banner and the tag manager are opaque external
//! scripts: we only insert their `<script>` elements into `<head>`, once per
//! page, and never wait on them. The tag-manager bootstrap also defines the
//! `window.gtag` function that [`super::analytics::GtagSink`] reports
//! through.

#[cfg(test)]
#[path = "scripts_test.rs"]
mod scripts_test;

pub const COOKIE_CONSENT_SCRIPT_ID: &str = "cookie-consent";
pub const TAG_MANAGER_SCRIPT_ID: &str = "tag-manager";
pub const TAG_MANAGER_BOOTSTRAP_ID: &str = "tag-manager-bootstrap";

/// URL of the asynchronous tag-manager loader for `tag_id`.
pub fn tag_manager_src(tag_id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={tag_id}")
}

/// Inline bootstrap defining `dataLayer`/`gtag` and recording the initial
/// `js` and `config` calls. `None` if `tag_id` is unsafe to embed.
pub fn tag_manager_bootstrap(tag_id: &str) -> Option<String> {
    if !crate::config::is_valid_tag_id(tag_id) {
        return None;
    }
    Some(format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{tag_id}');"
    ))
}

/// Append the cookie-consent script unless it is already on the page.
pub fn install_cookie_consent(src: &str) {
    #[cfg(feature = "csr")]
    {
        if append_script(COOKIE_CONSENT_SCRIPT_ID, Some(src), None, false) {
            log::debug!("cookie consent script added");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = src;
    }
}

/// Define `gtag` and append the tag-manager loader unless already present.
pub fn install_tag_manager(tag_id: &str) {
    let Some(bootstrap) = tag_manager_bootstrap(tag_id) else {
        log::warn!("skipping tag manager: invalid id {tag_id:?}");
        return;
    };

    #[cfg(feature = "csr")]
    {
        append_script(TAG_MANAGER_BOOTSTRAP_ID, None, Some(&bootstrap), false);
        append_script(TAG_MANAGER_SCRIPT_ID, Some(&tag_manager_src(tag_id)), None, true);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = bootstrap;
    }
}

/// Insert a `<script>` into `<head>`. Returns `false` when an element with
/// `id` already exists or the document is unavailable.
#[cfg(feature = "csr")]
fn append_script(id: &str, src: Option<&str>, text: Option<&str>, is_async: bool) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    if document.get_element_by_id(id).is_some() {
        return false;
    }
    let Some(head) = document.head() else {
        return false;
    };
    let Ok(script) = document.create_element("script") else {
        return false;
    };
    let script = script.unchecked_into::<web_sys::HtmlScriptElement>();

    script.set_id(id);
    if let Some(src) = src {
        script.set_src(src);
    }
    if let Some(text) = text {
        script.set_text(text).ok();
    }
    script.set_async(is_async);
    head.append_child(&script).is_ok()
}
