use hubby_core::{ButtonLabel, FieldStyle, FormViewModel};

use super::constants::*;

/// Element-level change the DOM layer knows how to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetUrlClass { class: &'static str, present: bool },
    SetButtonDisabled(bool),
    SetButtonContent(ButtonLabel),
    /// Ignored when the page has no cookie file label.
    SetCookieFileName { text: String, visible: bool },
    /// Replaces the status container's content. `text` is inserted as text,
    /// never parsed as markup.
    ShowAlert { class_name: String, text: String },
    ClearAlert,
}

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &FormViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetUrlClass {
        class: CLASS_VALID,
        present: view.url_field == FieldStyle::Valid,
    });
    cmds.push(DomCommand::SetUrlClass {
        class: CLASS_INVALID,
        present: view.url_field == FieldStyle::Invalid,
    });

    cmds.push(DomCommand::SetButtonContent(view.submit_button.label));
    cmds.push(DomCommand::SetButtonDisabled(!view.submit_button.enabled));

    cmds.push(match &view.cookie_file_label {
        Some(name) => DomCommand::SetCookieFileName {
            text: name.clone(),
            visible: true,
        },
        None => DomCommand::SetCookieFileName {
            text: String::new(),
            visible: false,
        },
    });

    cmds.push(match &view.status {
        Some(status) => DomCommand::ShowAlert {
            class_name: format!("{} {}", CLASS_ALERT, status.kind.css_class()),
            text: status.text.clone(),
        },
        None => DomCommand::ClearAlert,
    });

    cmds
}
