use hubby_core::{classify, is_status_url, parse_status_url, StatusHost, UrlValidity};
use pretty_assertions::assert_eq;

#[test]
fn accepts_twitter_and_x_status_links() {
    assert!(is_status_url("https://twitter.com/user/status/12345"));
    assert!(is_status_url("https://x.com/user/status/999"));
    assert!(is_status_url("http://www.twitter.com/someone/status/1"));
    assert!(is_status_url("https://www.x.com/a_b/status/42?s=20"));
}

#[test]
fn rejects_other_hosts_and_shapes() {
    assert!(!is_status_url("https://example.com/user/status/1"));
    assert!(!is_status_url("https://twitter.com/user"));
    assert!(!is_status_url("https://twitter.com/user/status/"));
    assert!(!is_status_url("https://twitter.com//status/1"));
    assert!(!is_status_url("ftp://twitter.com/user/status/1"));
    assert!(!is_status_url("twitter.com/user/status/1"));
}

#[test]
fn match_is_case_insensitive() {
    assert!(is_status_url("HTTPS://TWITTER.COM/User/STATUS/7"));
    assert!(is_status_url("Https://X.Com/user/Status/7"));
}

#[test]
fn case_folding_is_ascii_only() {
    // U+017F LATIN SMALL LETTER LONG S folds to 's' under Unicode rules.
    assert!(!is_status_url("https://x.com/user/\u{17f}tatus/7"));
}

#[test]
fn status_id_must_be_ascii_digits() {
    // Arabic-Indic digits.
    assert!(!is_status_url("https://x.com/user/status/\u{661}\u{662}"));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert!(is_status_url("   https://x.com/user/status/999 \n"));
    assert!(!is_status_url("   \t\n"));
    assert!(!is_status_url(""));
}

#[test]
fn link_embedded_in_text_still_matches() {
    assert!(is_status_url("look: https://twitter.com/user/status/12345 wow"));
}

#[test]
fn classify_distinguishes_empty_from_invalid() {
    assert_eq!(classify(""), UrlValidity::Empty);
    assert_eq!(classify("   "), UrlValidity::Empty);
    assert_eq!(classify("not a url"), UrlValidity::Invalid);
    assert_eq!(classify("https://x.com/u/status/1"), UrlValidity::Valid);
}

#[test]
fn parse_extracts_handle_and_id() {
    let parsed = parse_status_url(" https://x.com/jack/status/20 ").expect("valid link");
    assert_eq!(parsed.host, StatusHost::X);
    assert_eq!(parsed.handle, "jack");
    assert_eq!(parsed.status_id, "20");
    assert_eq!(parsed.canonical(), "https://twitter.com/jack/status/20");

    let parsed = parse_status_url("https://www.Twitter.com/jack/status/20").expect("valid link");
    assert_eq!(parsed.host, StatusHost::Twitter);
}

#[test]
fn parse_agrees_with_predicate() {
    let samples = [
        "",
        "https://twitter.com/user/status/12345",
        "https://x.com/user/status/999",
        "https://example.com/user/status/1",
        "https://x.com/user/status/abc",
        "  http://www.x.com/u/status/5/photo/1  ",
    ];
    for sample in samples {
        assert_eq!(
            parse_status_url(sample).is_some(),
            is_status_url(sample),
            "sample {sample:?}"
        );
    }
}

#[test]
fn byte_order_mark_is_trimmed_like_whitespace() {
    assert_eq!(classify("\u{feff}"), UrlValidity::Empty);
    assert_eq!(classify(" \u{feff}\t"), UrlValidity::Empty);
    assert!(is_status_url("\u{feff}https://x.com/user/status/999\u{feff}"));
    assert_eq!(
        parse_status_url("\u{feff}https://x.com/user/status/999")
            .map(|parsed| parsed.status_id),
        Some("999".to_string())
    );
}
