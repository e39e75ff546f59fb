use super::*;

#[test]
fn tag_manager_src_embeds_id() {
    assert_eq!(tag_manager_src("G-TEST123"), "https://www.googletagmanager.com/gtag/js?id=G-TEST123");
}

#[test]
fn bootstrap_defines_gtag_and_configures_id() {
    let script = tag_manager_bootstrap("G-TEST123").unwrap();
    assert!(script.contains("window.dataLayer = window.dataLayer || [];"));
    assert!(script.contains("function gtag(){dataLayer.push(arguments);}"));
    assert!(script.contains("gtag('js', new Date());"));
    assert!(script.contains("gtag('config', 'G-TEST123');"));
}

#[test]
fn bootstrap_rejects_injection() {
    assert_eq!(tag_manager_bootstrap("G-1'); alert(1); ('"), None);
    assert_eq!(tag_manager_bootstrap(""), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn installers_are_noops_outside_browser() {
    install_cookie_consent("https://consent.example.test/script.js");
    install_tag_manager("G-TEST123");
    install_tag_manager("not valid!");
}
