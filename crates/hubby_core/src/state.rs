use crate::view_model::{
    AlertKind, ButtonLabel, FieldStyle, FormViewModel, StatusView, SubmitButtonView,
};
use crate::{classify, FormConfig, TimerId, UrlValidity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: AlertKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    config: FormConfig,
    url_text: String,
    cookie_file: Option<String>,
    submitting: bool,
    status: Option<StatusMessage>,
    status_timer: Option<TimerId>,
    paste_timer: Option<TimerId>,
    next_timer: u64,
    dirty: bool,
}

impl FormState {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn url_text(&self) -> &str {
        &self.url_text
    }

    pub fn validity(&self) -> UrlValidity {
        classify(&self.url_text)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn pending_status_timer(&self) -> Option<TimerId> {
        self.status_timer
    }

    pub fn pending_paste_timer(&self) -> Option<TimerId> {
        self.paste_timer
    }

    pub fn view(&self) -> FormViewModel {
        let validity = self.validity();
        let url_field = match validity {
            UrlValidity::Empty => FieldStyle::Neutral,
            UrlValidity::Valid => FieldStyle::Valid,
            UrlValidity::Invalid => FieldStyle::Invalid,
        };
        let submit_button = if self.submitting {
            SubmitButtonView {
                enabled: false,
                label: ButtonLabel::Processing,
            }
        } else {
            SubmitButtonView {
                enabled: validity == UrlValidity::Valid,
                label: ButtonLabel::Idle,
            }
        };
        FormViewModel {
            url_field,
            submit_button,
            cookie_file_label: self.cookie_file.clone(),
            status: self.status.as_ref().map(|status| StatusView {
                text: status.text.clone(),
                kind: status.kind,
            }),
        }
    }

    /// Returns whether anything visible changed since the last call, and
    /// resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url_text(&mut self, text: String) {
        if text == self.url_text {
            return;
        }
        self.url_text = text;
        self.submitting = false;
        self.dirty = true;
    }

    pub(crate) fn set_cookie_file(&mut self, name: Option<String>) {
        let name = name.filter(|name| !name.is_empty());
        if name != self.cookie_file {
            self.cookie_file = name;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_submission(&mut self) {
        if !self.submitting {
            self.submitting = true;
            self.dirty = true;
        }
    }

    pub(crate) fn end_submission(&mut self) {
        if self.submitting {
            self.submitting = false;
            self.dirty = true;
        }
    }

    /// Replaces the status message, returning the timer that guarded the
    /// previous one and the timer that now guards the new one.
    pub(crate) fn replace_status(
        &mut self,
        message: StatusMessage,
    ) -> (Option<TimerId>, TimerId) {
        let previous = self.status_timer.take();
        let timer = self.allocate_timer();
        self.status = Some(message);
        self.status_timer = Some(timer);
        self.dirty = true;
        (previous, timer)
    }

    /// Clears the status message if `timer` still guards it.
    pub(crate) fn expire_status(&mut self, timer: TimerId) -> bool {
        if self.status_timer != Some(timer) {
            return false;
        }
        self.status_timer = None;
        if self.status.take().is_some() {
            self.dirty = true;
        }
        true
    }

    pub(crate) fn arm_paste_timer(&mut self) -> (Option<TimerId>, TimerId) {
        let previous = self.paste_timer.take();
        let timer = self.allocate_timer();
        self.paste_timer = Some(timer);
        (previous, timer)
    }

    pub(crate) fn settle_paste_timer(&mut self, timer: TimerId) -> bool {
        if self.paste_timer != Some(timer) {
            return false;
        }
        self.paste_timer = None;
        true
    }

    fn allocate_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }
}
