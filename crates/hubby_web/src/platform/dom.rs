use hubby_core::ButtonLabel;
use hubby_logging::hubby_debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::dom_error;
use crate::ui::constants::{ElementIds, CLASS_SPINNER, PROCESSING_TEXT};
use crate::ui::render::DomCommand;
use crate::WebError;

/// Element handles captured once at startup.
pub(super) struct FormElements {
    pub(super) url: HtmlInputElement,
    pub(super) cookie_file: Option<HtmlInputElement>,
    cookie_file_name: Option<HtmlElement>,
    pub(super) form: HtmlFormElement,
    button: HtmlButtonElement,
    status: HtmlElement,
    /// Button markup as rendered by the server, restored for the idle label.
    idle_button_html: String,
}

impl FormElements {
    pub(super) fn bind(document: &Document, ids: &ElementIds) -> Result<Self, WebError> {
        let url = required::<HtmlInputElement>(document, &ids.url_input, "input")?;
        let form = required::<HtmlFormElement>(document, &ids.form, "form")?;
        let button = required::<HtmlButtonElement>(document, &ids.submit_button, "button")?;
        let status = required::<HtmlElement>(document, &ids.status_message, "HTML element")?;
        let cookie_file = optional::<HtmlInputElement>(document, &ids.cookie_file_input, "input")?;
        let cookie_file_name =
            optional::<HtmlElement>(document, &ids.cookie_file_name, "HTML element")?;
        let idle_button_html = button.inner_html();

        Ok(Self {
            url,
            cookie_file,
            cookie_file_name,
            form,
            button,
            status,
            idle_button_html,
        })
    }

    pub(super) fn url_value(&self) -> String {
        self.url.value()
    }

    pub(super) fn selected_file_name(&self) -> Option<String> {
        let files = self.cookie_file.as_ref()?.files()?;
        files.get(0).map(|file| file.name())
    }

    pub(super) fn apply(&self, document: &Document, command: &DomCommand) -> Result<(), WebError> {
        match command {
            DomCommand::SetUrlClass { class, present } => {
                self.url
                    .class_list()
                    .toggle_with_force(class, *present)
                    .map_err(dom_error("classList.toggle"))?;
            }
            DomCommand::SetButtonDisabled(disabled) => {
                self.button.set_disabled(*disabled);
            }
            DomCommand::SetButtonContent(ButtonLabel::Idle) => {
                self.button.set_inner_html(&self.idle_button_html);
            }
            DomCommand::SetButtonContent(ButtonLabel::Processing) => {
                let spinner = document
                    .create_element("span")
                    .map_err(dom_error("createElement"))?;
                spinner.set_class_name(CLASS_SPINNER);
                spinner
                    .set_attribute("role", "status")
                    .map_err(dom_error("setAttribute"))?;
                spinner
                    .set_attribute("aria-hidden", "true")
                    .map_err(dom_error("setAttribute"))?;
                let text = document.create_text_node(PROCESSING_TEXT);

                self.button.set_inner_html("");
                self.button
                    .append_child(&spinner)
                    .map_err(dom_error("appendChild"))?;
                self.button
                    .append_child(&text)
                    .map_err(dom_error("appendChild"))?;
            }
            DomCommand::SetCookieFileName { text, visible } => {
                let Some(label) = &self.cookie_file_name else {
                    return Ok(());
                };
                label.set_text_content(Some(text));
                label
                    .style()
                    .set_property("display", if *visible { "block" } else { "none" })
                    .map_err(dom_error("style.setProperty"))?;
            }
            DomCommand::ShowAlert { class_name, text } => {
                let alert = document
                    .create_element("div")
                    .map_err(dom_error("createElement"))?;
                alert.set_class_name(class_name);
                alert
                    .set_attribute("role", "alert")
                    .map_err(dom_error("setAttribute"))?;
                alert.set_text_content(Some(text));

                self.status.set_inner_html("");
                self.status
                    .append_child(&alert)
                    .map_err(dom_error("appendChild"))?;
            }
            DomCommand::ClearAlert => {
                self.status.set_inner_html("");
            }
        }
        Ok(())
    }
}

fn required<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, WebError> {
    lookup(document, id, expected)?.ok_or_else(|| WebError::MissingElement { id: id.to_string() })
}

fn optional<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<Option<T>, WebError> {
    let found = lookup(document, id, expected)?;
    if found.is_none() {
        hubby_debug!("optional element #{} absent", id);
    }
    Ok(found)
}

fn lookup<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<Option<T>, WebError> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    element
        .dyn_into::<T>()
        .map(Some)
        .map_err(|_| WebError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}
