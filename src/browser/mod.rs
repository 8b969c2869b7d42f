//! Browser binding (feature `browser`).
//!
//! Implements the surfaces over the page's elements, posts to the synthesis
//! endpoint with `fetch()`, and wires the page events to a [`Console`] that
//! lives for the rest of the page's lifetime.

mod dom;
mod fetch;

pub use dom::{DomForm, DomMedia, DomPlayerView};
pub use fetch::FetchTransport;

use crate::config::ConsoleConfig;
use crate::console::{Console, UiEvent};
use crate::request::GenerateOutcome;
use crate::synthesis::AudioFormat;
use crate::{Error, ErrorContext, Result};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlSelectElement};

pub type BrowserConsole = Console<FetchTransport, DomForm, DomMedia, DomPlayerView>;

/// Element ids and selectors the binding looks up.
pub mod ids {
    pub const TEXT: &str = "text";
    pub const VOICE: &str = "voice";
    pub const FORMAT: &str = "format";
    pub const TRIGGER: &str = "speak";
    pub const STATUS: &str = "status";
    pub const TRANSCRIPT: &str = "transcript";
    pub const AUDIO: &str = "audio";
    pub const PLAY_PAUSE: &str = "play-pause";
    pub const PROGRESS: &str = "progress";
    pub const CURRENT_TIME: &str = "current-time";
    pub const DURATION: &str = "duration";
    pub const VOLUME: &str = "volume";
    pub const DOWNLOAD_LINK: &str = "download-link";
    pub const DOWNLOAD_CONTAINER: &str = "download-container";
    pub const PANEL_SELECTOR: &str = ".audio-player";
    pub const PANEL_ACTIVE_CLASS: &str = "active";
}

pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::configuration("no document available"))
}

pub(crate) fn element<T: JsCast>(doc: &Document, id: &str) -> Result<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| {
            Error::configuration_with_context(
                "required element is missing",
                ErrorContext::new().with_field_path(id),
            )
        })?
        .dyn_into::<T>()
        .map_err(|_| {
            Error::configuration_with_context(
                "element has an unexpected type",
                ErrorContext::new().with_field_path(id),
            )
        })
}

/// Fill an empty selector with `options` and select `selected`.
fn populate_select(
    select: &HtmlSelectElement,
    options: &[(String, String)],
    selected: &str,
) -> Result<()> {
    if select.length() > 0 {
        return Ok(());
    }
    for (value, label) in options {
        let option = web_sys::HtmlOptionElement::new_with_text_and_value(label, value)
            .map_err(|e| Error::configuration(js_message(&e)))?;
        select
            .add_with_html_option_element(&option)
            .map_err(|e| Error::configuration(js_message(&e)))?;
    }
    select.set_value(selected);
    Ok(())
}

/// Mirror a failed generation on the browser's developer console.
fn report_failure(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("generation failed: {}", message)));
}

fn listen(
    target: &EventTarget,
    event: &str,
    console: &Rc<BrowserConsole>,
    make_event: impl Fn() -> UiEvent + 'static,
) -> Result<()> {
    let console = Rc::clone(console);
    let closure = Closure::<dyn FnMut()>::new(move || {
        let console = Rc::clone(&console);
        let ui_event = make_event();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(GenerateOutcome::Failed { message }) = console.dispatch(ui_event).await {
                report_failure(&message);
            }
        });
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| Error::configuration(js_message(&e)))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Look up the page elements, build the console and attach all listeners.
pub fn mount(config: &ConsoleConfig) -> Result<Rc<BrowserConsole>> {
    config.validate()?;
    let doc = document()?;

    let form = DomForm::find(&doc)?;
    let voices: Vec<(String, String)> = config
        .voices
        .iter()
        .map(|v| (v.id.clone(), v.label()))
        .collect();
    populate_select(form.voice_select(), &voices, &config.default_voice)?;
    let formats: Vec<(String, String)> = AudioFormat::ALL
        .iter()
        .map(|f| (f.as_str().to_string(), f.as_str().to_uppercase()))
        .collect();
    populate_select(form.format_select(), &formats, config.default_format.as_str())?;

    let media = DomMedia::find(&doc)?;
    let view = DomPlayerView::find(&doc)?;
    let transport = FetchTransport::new(config.endpoint_path.clone());

    let trigger: EventTarget = form.trigger().clone().into();
    let audio: EventTarget = media.element().clone().into();
    let play_pause: EventTarget = view.play_pause().clone().into();
    let progress = view.progress().clone();
    let volume: web_sys::HtmlInputElement = element(&doc, ids::VOLUME)?;

    let console = Rc::new(Console::assemble(config, transport, form, media, view));

    listen(&trigger, "click", &console, || UiEvent::Generate)?;
    listen(&play_pause, "click", &console, || UiEvent::TogglePlayback)?;
    listen(&audio, "timeupdate", &console, || UiEvent::TimeUpdate)?;
    listen(&audio, "loadedmetadata", &console, || UiEvent::MetadataLoaded)?;
    listen(&audio, "loadeddata", &console, || UiEvent::DataLoaded)?;
    listen(&audio, "ended", &console, || UiEvent::Ended)?;
    let progress_target: EventTarget = progress.clone().into();
    listen(&progress_target, "input", &console, move || {
        UiEvent::SeekInput(progress.value_as_number())
    })?;
    let volume_target: EventTarget = volume.clone().into();
    listen(&volume_target, "input", &console, move || {
        UiEvent::VolumeInput(volume.value_as_number())
    })?;

    tracing::debug!("console mounted");
    Ok(console)
}

/// JavaScript entry point: mount with the default configuration.
#[wasm_bindgen(js_name = mountConsole)]
pub fn mount_console() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount(&ConsoleConfig::default()).map(|_| ()).map_err(|e| {
        let message = e.to_string();
        web_sys::console::error_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })
}
