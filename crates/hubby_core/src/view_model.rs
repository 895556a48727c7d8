#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStyle {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLabel {
    /// Whatever markup the page rendered the button with.
    #[default]
    Idle,
    /// Spinner followed by "Processing...".
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitButtonView {
    pub enabled: bool,
    pub label: ButtonLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Danger,
    Warning,
    Info,
    Success,
}

impl AlertKind {
    /// Bootstrap contextual class, e.g. `alert-danger`.
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Danger => "alert-danger",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
            AlertKind::Success => "alert-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub kind: AlertKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub url_field: FieldStyle,
    pub submit_button: SubmitButtonView,
    /// Visible with this text when `Some`, hidden when `None`.
    pub cookie_file_label: Option<String>,
    pub status: Option<StatusView>,
}
