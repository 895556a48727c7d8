use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hubby_core::{update, Effect, FormConfig, FormState, FormViewModel, Msg, TimerId, TimerKind};
use hubby_logging::{enter_event, hubby_debug, hubby_error, hubby_info, hubby_trace, hubby_warn};
use log::LevelFilter;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, PageTransitionEvent, Window};

use super::dom::FormElements;
use super::timers::TimerRegistry;
use super::{dom_error, logging};
use crate::ui::constants::ElementIds;
use crate::ui::render::render;
use crate::ui::submit::blocks_submission;
use crate::WebError;

/// Wires the form controller into the current page.
///
/// Failures are logged and leave the page as the server rendered it.
pub fn start() {
    logging::initialize(LevelFilter::Info);
    if let Err(err) = boot() {
        hubby_error!("form controller not started: {}", err);
    }
}

fn boot() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    if document.ready_state() != "loading" {
        return mount(window, document);
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = mount(window, document) {
            hubby_error!("form controller not started: {}", err);
        }
    });
    target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(dom_error("addEventListener"))
}

fn mount(window: Window, document: Document) -> Result<(), WebError> {
    let ids = ElementIds::default();
    let config = read_config(&document, &ids);
    let elements = FormElements::bind(&document, &ids)?;
    let controller = Controller::new(window, document, elements, config);

    controller.attach_listeners()?;
    controller.render_current();
    // Browsers may restore a typed value or a file selection on reload.
    controller.dispatch(Msg::UrlEdited(controller.elements.url_value()));
    controller.dispatch(Msg::CookieFileChanged(
        controller.elements.selected_file_name(),
    ));

    hubby_info!("form controller mounted on #{}", ids.form);
    Ok(())
}

fn read_config(document: &Document, ids: &ElementIds) -> FormConfig {
    let Some(text) = document
        .get_element_by_id(&ids.config_script)
        .and_then(|script| script.text_content())
    else {
        return FormConfig::default();
    };
    match FormConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            hubby_warn!("ignoring #{}: {}", ids.config_script, err);
            FormConfig::default()
        }
    }
}

struct Controller {
    window: Window,
    document: Document,
    elements: FormElements,
    state: RefCell<FormState>,
    timers: RefCell<TimerRegistry>,
    event_seq: Cell<u64>,
}

impl Controller {
    fn new(
        window: Window,
        document: Document,
        elements: FormElements,
        config: FormConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            window,
            document,
            elements,
            state: RefCell::new(FormState::new(config)),
            timers: RefCell::new(TimerRegistry::default()),
            event_seq: Cell::new(0),
        })
    }

    /// Runs one message through `update`, renders if anything visible
    /// changed and executes the effects. The effects are returned so event
    /// listeners can act on them synchronously.
    fn dispatch(self: &Rc<Self>, msg: Msg) -> Vec<Effect> {
        let seq = self.event_seq.get() + 1;
        self.event_seq.set(seq);
        let _scope = enter_event(seq);
        hubby_trace!("dispatch {:?}", msg);

        let (maybe_view, effects) = {
            let mut guard = self.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let view = state.view();
            let was_dirty = state.consume_dirty();
            *guard = state;
            (was_dirty.then_some(view), effects)
        };

        if let Some(view) = maybe_view {
            self.apply_view(&view);
        }
        for effect in &effects {
            self.run_effect(effect);
        }
        effects
    }

    fn render_current(&self) {
        let view = self.state.borrow().view();
        self.apply_view(&view);
    }

    fn apply_view(&self, view: &FormViewModel) {
        for command in render(view) {
            if let Err(err) = self.elements.apply(&self.document, &command) {
                hubby_warn!("render {:?}: {}", command, err);
            }
        }
    }

    fn run_effect(self: &Rc<Self>, effect: &Effect) {
        match effect {
            Effect::ScheduleTimer { timer, kind, delay } => {
                let (timer, kind) = (*timer, *kind);
                let weak = Rc::downgrade(self);
                let mut timers = self.timers.borrow_mut();
                timers.schedule(timer, *delay, move || {
                    if let Some(controller) = weak.upgrade() {
                        controller.on_timer(timer, kind);
                    }
                });
                hubby_trace!("{} scheduled in {:?} ({} pending)", timer, delay, timers.pending());
            }
            Effect::CancelTimer { timer } => {
                self.timers.borrow_mut().cancel(*timer);
            }
            Effect::PreventSubmission => {
                hubby_debug!("submission blocked: url did not validate");
            }
            Effect::AllowSubmission { target } => {
                hubby_info!(
                    "submitting status {} ({})",
                    target.status_id,
                    target.canonical()
                );
            }
        }
    }

    fn on_timer(self: &Rc<Self>, timer: TimerId, kind: TimerKind) {
        let _fired = self.timers.borrow_mut().take_fired(timer);
        let msg = match kind {
            TimerKind::PasteSettle => Msg::PasteSettled {
                timer,
                text: self.elements.url_value(),
            },
            TimerKind::StatusClear => Msg::StatusExpired(timer),
        };
        self.dispatch(msg);
    }

    fn attach_listeners(self: &Rc<Self>) -> Result<(), WebError> {
        let url: &EventTarget = self.elements.url.as_ref();

        let controller = Rc::clone(self);
        listen(url, "input", move |_| {
            controller.dispatch(Msg::UrlEdited(controller.elements.url_value()));
        })?;

        let controller = Rc::clone(self);
        listen(url, "paste", move |_| {
            controller.dispatch(Msg::UrlPasted);
        })?;

        if let Some(cookie_file) = &self.elements.cookie_file {
            let controller = Rc::clone(self);
            listen(cookie_file.as_ref(), "change", move |_| {
                controller.dispatch(Msg::CookieFileChanged(
                    controller.elements.selected_file_name(),
                ));
            })?;
        }

        let controller = Rc::clone(self);
        listen(self.elements.form.as_ref(), "submit", move |event| {
            let effects =
                controller.dispatch(Msg::SubmitRequested(controller.elements.url_value()));
            if blocks_submission(&effects) {
                event.prevent_default();
            }
        })?;

        let controller = Rc::clone(self);
        listen(self.window.as_ref(), "pageshow", move |event| {
            let restored = event
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(PageTransitionEvent::persisted);
            if restored {
                controller.dispatch(Msg::PageRestored);
            }
        })?;

        Ok(())
    }
}

/// Attaches a listener for the lifetime of the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(dom_error("addEventListener"))?;
    callback.forget();
    Ok(())
}
