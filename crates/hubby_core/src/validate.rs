use once_cell::sync::Lazy;
use regex::Regex;

/// Twitter/X status link. Unanchored, so surrounding text is tolerated.
/// Case folding is ASCII-only and the id is ASCII digits only.
static STATUS_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u:https?://(?:www\.)?(twitter|x)\.com/)([^/]+)(?i-u:/status/)([0-9]+)")
        .expect("status url pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlValidity {
    #[default]
    Empty,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusHost {
    Twitter,
    X,
}

/// The parts of a status link the download form cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUrl {
    pub host: StatusHost,
    pub handle: String,
    pub status_id: String,
}

impl StatusUrl {
    /// `x.com` links are rewritten to `twitter.com`, matching what the
    /// download endpoint does on its side.
    pub fn canonical(&self) -> String {
        format!(
            "https://twitter.com/{}/status/{}",
            self.handle, self.status_id
        )
    }
}

/// Trims the way the page's `String.prototype.trim` does, which also strips
/// U+FEFF.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn is_status_url(raw: &str) -> bool {
    let trimmed = trim_input(raw);
    !trimmed.is_empty() && STATUS_URL_REGEX.is_match(trimmed)
}

pub fn classify(raw: &str) -> UrlValidity {
    if trim_input(raw).is_empty() {
        UrlValidity::Empty
    } else if is_status_url(raw) {
        UrlValidity::Valid
    } else {
        UrlValidity::Invalid
    }
}

pub fn parse_status_url(raw: &str) -> Option<StatusUrl> {
    let caps = STATUS_URL_REGEX.captures(trim_input(raw))?;
    let host = if caps[1].eq_ignore_ascii_case("x") {
        StatusHost::X
    } else {
        StatusHost::Twitter
    };
    Some(StatusUrl {
        host,
        handle: caps[2].to_string(),
        status_id: caps[3].to_string(),
    })
}
