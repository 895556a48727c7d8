use crate::{AlertKind, TimerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User typed into the URL field.
    UrlEdited(String),
    /// User pasted into the URL field; the value may not be updated yet.
    UrlPasted,
    /// Paste-settle timer fired with the field value read at that moment.
    PasteSettled { timer: TimerId, text: String },
    /// Cookie file input changed; `None` when the selection was cleared.
    CookieFileChanged(Option<String>),
    /// Form submit event with the current field value.
    SubmitRequested(String),
    /// Show a transient status message.
    ShowStatus { text: String, kind: AlertKind },
    /// Status-clear timer fired.
    StatusExpired(TimerId),
    /// Page came back from the back/forward cache.
    PageRestored,
    /// Fallback for placeholder wiring.
    NoOp,
}
