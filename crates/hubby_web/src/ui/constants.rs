pub const URL_INPUT: &str = "url";
pub const COOKIE_FILE_INPUT: &str = "cookie-file";
pub const COOKIE_FILE_NAME: &str = "cookie-file-name";
pub const DOWNLOAD_FORM: &str = "twitter-download-form";
pub const DOWNLOAD_BUTTON: &str = "download-button";
pub const STATUS_MESSAGE: &str = "status-message";
pub const CONFIG_SCRIPT: &str = "hubby-config";

pub const CLASS_VALID: &str = "is-valid";
pub const CLASS_INVALID: &str = "is-invalid";
pub const CLASS_ALERT: &str = "alert";
pub const CLASS_SPINNER: &str = "spinner-border spinner-border-sm spinner-border-x";
pub const PROCESSING_TEXT: &str = " Processing...";

/// DOM ids the controller binds to. Defaults match the server-rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub url_input: String,
    pub cookie_file_input: String,
    pub cookie_file_name: String,
    pub form: String,
    pub submit_button: String,
    pub status_message: String,
    pub config_script: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            url_input: URL_INPUT.to_string(),
            cookie_file_input: COOKIE_FILE_INPUT.to_string(),
            cookie_file_name: COOKIE_FILE_NAME.to_string(),
            form: DOWNLOAD_FORM.to_string(),
            submit_button: DOWNLOAD_BUTTON.to_string(),
            status_message: STATUS_MESSAGE.to_string(),
            config_script: CONFIG_SCRIPT.to_string(),
        }
    }
}
