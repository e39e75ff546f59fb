use super::*;

fn text(s: &str) -> Segment {
    Segment::Text(s.to_owned())
}

fn link(t: &str, href: &str) -> Segment {
    Segment::Link { text: t.to_owned(), href: href.to_owned() }
}

// =============================================================
// segments
// =============================================================

#[test]
fn plain_text_is_single_segment() {
    assert_eq!(segments("Hello there."), vec![text("Hello there.")]);
}

#[test]
fn empty_text_has_no_segments() {
    assert!(segments("").is_empty());
}

#[test]
fn link_in_answer_becomes_anchor() {
    assert_eq!(
        segments("It is [a thing](https://example.com)."),
        vec![text("It is "), link("a thing", "https://example.com"), text(".")]
    );
}

#[test]
fn multiple_links_are_all_substituted() {
    assert_eq!(
        segments("[one](/a) and [two](https://b.example)"),
        vec![link("one", "/a"), text(" and "), link("two", "https://b.example")]
    );
}

#[test]
fn html_is_kept_as_literal_text() {
    let raw = "<img src=x onerror=alert(1)> <b>bold</b>";
    assert_eq!(segments(raw), vec![text(raw)]);
}

#[test]
fn link_label_is_not_interpreted() {
    assert_eq!(segments("[<b>x</b>](/x)"), vec![link("<b>x</b>", "/x")]);
}

#[test]
fn unmatched_brackets_stay_text() {
    assert_eq!(segments("see [docs] (here) and [x]("), vec![text("see [docs] (here) and [x](")]);
}

#[test]
fn empty_label_or_url_is_not_a_link() {
    assert_eq!(segments("[](/x) [x]()"), vec![text("[](/x) [x]()")]);
}

#[test]
fn label_may_contain_open_bracket() {
    assert_eq!(segments("[a [b](c)"), vec![link("a [b", "c")]);
}

#[test]
fn javascript_link_is_left_literal() {
    let raw = "click [me](javascript:alert(1)) now";
    assert_eq!(segments(raw), vec![text(raw)]);
}

#[test]
fn unsafe_link_does_not_hide_later_links() {
    assert_eq!(
        segments("[bad](data:text/html,x) [good](https://ok.example)"),
        vec![text("[bad](data:text/html,x) "), link("good", "https://ok.example")]
    );
}

#[test]
fn multibyte_text_around_links() {
    assert_eq!(
        segments("→ [café](/menu) ✓"),
        vec![text("→ "), link("café", "/menu"), text(" ✓")]
    );
}

// =============================================================
// safe_href
// =============================================================

#[test]
fn web_mail_and_relative_hrefs_are_safe() {
    for href in ["https://example.com", "HTTP://example.com", "mailto:a@b.c", "/docs/", "page.html#x", "#top", "a?b=c:d"] {
        assert_eq!(safe_href(href).as_deref(), Some(href), "{href} should be allowed");
    }
}

#[test]
fn script_and_data_hrefs_are_unsafe() {
    for href in ["javascript:alert(1)", " JavaScript:void(0)", "data:text/html,x", "vbscript:x", ""] {
        assert!(safe_href(href).is_none(), "{href} should be rejected");
    }
}

#[test]
fn control_characters_cannot_hide_a_script_scheme() {
    for href in ["java\tscript:alert(1)", "java\nscript:alert(1)", "\u{1}javascript:alert(1)", "java\rscript:x", "\u{0}\u{1f} javascript:x"] {
        assert!(safe_href(href).is_none(), "{href:?} should be rejected");
    }
}

#[test]
fn control_character_script_links_render_as_text() {
    for answer in ["[x](java\tscript:alert(1))", "[x](java\nscript:alert(1))", "[x](\u{1}javascript:alert(1))"] {
        let segs = segments(answer);
        assert!(segs.iter().all(|s| matches!(s, Segment::Text(_))), "{answer:?} produced a link: {segs:?}");
    }
}

#[test]
fn emitted_href_is_normalised() {
    assert_eq!(safe_href(" https://ex\tample.com/\n ").as_deref(), Some("https://example.com/"));
    assert_eq!(segments("[a](\u{1}/docs\t/)"), vec![link("a", "/docs/")]);
}

#[test]
fn other_control_characters_reject_the_link() {
    assert!(safe_href("/docs\u{7}/page").is_none());
    assert!(safe_href("https://ex\u{0}ample.com").is_none());
}
