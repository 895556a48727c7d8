//! Hubby core: pure form-controller state machine and view-model helpers.
mod config;
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use config::{ConfigError, FormConfig, DEFAULT_INVALID_URL_MESSAGE};
pub use effect::{Effect, TimerId, TimerKind};
pub use msg::Msg;
pub use state::{FormState, StatusMessage};
pub use update::update;
pub use validate::{classify, is_status_url, parse_status_url, StatusHost, StatusUrl, UrlValidity};
pub use view_model::{
    AlertKind, ButtonLabel, FieldStyle, FormViewModel, StatusView, SubmitButtonView,
};
