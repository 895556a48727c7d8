use hubby_web::ui::constants::ElementIds;
use hubby_web::WebError;

#[test]
fn default_ids_match_page_markup() {
    let ids = ElementIds::default();

    assert_eq!(ids.url_input, "url");
    assert_eq!(ids.cookie_file_input, "cookie-file");
    assert_eq!(ids.cookie_file_name, "cookie-file-name");
    assert_eq!(ids.form, "twitter-download-form");
    assert_eq!(ids.submit_button, "download-button");
    assert_eq!(ids.status_message, "status-message");
    assert_eq!(ids.config_script, "hubby-config");
}

#[test]
fn errors_name_the_offending_element() {
    let missing = WebError::MissingElement {
        id: "download-button".to_string(),
    };
    assert_eq!(missing.to_string(), "element #download-button not found");

    let wrong = WebError::WrongElementType {
        id: "url".to_string(),
        expected: "input",
    };
    assert_eq!(wrong.to_string(), "element #url has the wrong type, expected input");

    let dom = WebError::Dom {
        op: "setTimeout",
        message: "blocked".to_string(),
    };
    assert_eq!(dom.to_string(), "setTimeout failed: blocked");
}
