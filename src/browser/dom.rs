//! Surfaces backed by page elements.

use super::{element, ids, js_message};
use crate::surface::{FormSurface, MediaElement, PlayIcon, PlayerSurface};
use crate::{Error, Result};
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlMediaElement, HtmlSelectElement, HtmlTextAreaElement,
};

/// The text field may be a `<textarea>` or an `<input>`.
enum TextField {
    Area(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

pub struct DomForm {
    text: TextField,
    voice: HtmlSelectElement,
    format: HtmlSelectElement,
    trigger: HtmlButtonElement,
    status: Element,
    transcript: Option<Element>,
}

impl DomForm {
    pub fn find(doc: &Document) -> Result<Self> {
        let text_el: Element = element(doc, ids::TEXT)?;
        let text = match text_el.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => TextField::Area(area),
            Err(other) => TextField::Input(other.dyn_into::<HtmlInputElement>().map_err(|_| {
                Error::configuration_with_context(
                    "text field must be a textarea or input",
                    crate::ErrorContext::new().with_field_path(ids::TEXT),
                )
            })?),
        };
        Ok(Self {
            text,
            voice: element(doc, ids::VOICE)?,
            format: element(doc, ids::FORMAT)?,
            trigger: element(doc, ids::TRIGGER)?,
            status: element(doc, ids::STATUS)?,
            transcript: doc.get_element_by_id(ids::TRANSCRIPT),
        })
    }

    pub fn voice_select(&self) -> &HtmlSelectElement {
        &self.voice
    }

    pub fn format_select(&self) -> &HtmlSelectElement {
        &self.format
    }

    pub fn trigger(&self) -> &HtmlButtonElement {
        &self.trigger
    }
}

impl FormSurface for DomForm {
    fn text(&self) -> String {
        match &self.text {
            TextField::Area(area) => area.value(),
            TextField::Input(input) => input.value(),
        }
    }

    fn voice(&self) -> String {
        self.voice.value()
    }

    fn format(&self) -> String {
        self.format.value()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.trigger.set_disabled(!enabled);
    }

    fn set_status(&self, status: &str) {
        self.status.set_text_content(Some(status));
    }

    fn show_transcript(&self, transcript: Option<&str>) {
        if let Some(el) = &self.transcript {
            el.set_text_content(transcript);
        }
    }
}

pub struct DomMedia {
    audio: HtmlMediaElement,
}

impl DomMedia {
    pub fn find(doc: &Document) -> Result<Self> {
        Ok(Self {
            audio: element(doc, ids::AUDIO)?,
        })
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.audio
    }
}

#[async_trait(?Send)]
impl MediaElement for DomMedia {
    fn set_src(&self, url: &str) {
        self.audio.set_src(url);
    }

    fn src(&self) -> Option<String> {
        let src = self.audio.src();
        if src.is_empty() {
            None
        } else {
            Some(src)
        }
    }

    async fn play(&self) -> Result<()> {
        let promise = self
            .audio
            .play()
            .map_err(|e| Error::playback(js_message(&e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| Error::playback(js_message(&e)))?;
        Ok(())
    }

    fn pause(&self) {
        if let Err(e) = self.audio.pause() {
            tracing::warn!(error = %js_message(&e), "pause failed");
        }
    }

    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.audio.set_volume(volume);
    }
}

pub struct DomPlayerView {
    panel: Element,
    play_pause: HtmlElement,
    progress: HtmlInputElement,
    current_time: Element,
    duration: Element,
    download_link: HtmlAnchorElement,
    download_container: HtmlElement,
}

impl DomPlayerView {
    pub fn find(doc: &Document) -> Result<Self> {
        let panel = doc
            .query_selector(ids::PANEL_SELECTOR)
            .map_err(|e| Error::configuration(js_message(&e)))?
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "player panel is missing",
                    crate::ErrorContext::new().with_field_path(ids::PANEL_SELECTOR),
                )
            })?;
        Ok(Self {
            panel,
            play_pause: element(doc, ids::PLAY_PAUSE)?,
            progress: element(doc, ids::PROGRESS)?,
            current_time: element(doc, ids::CURRENT_TIME)?,
            duration: element(doc, ids::DURATION)?,
            download_link: element(doc, ids::DOWNLOAD_LINK)?,
            download_container: element(doc, ids::DOWNLOAD_CONTAINER)?,
        })
    }

    pub fn play_pause(&self) -> &HtmlElement {
        &self.play_pause
    }

    pub fn progress(&self) -> &HtmlInputElement {
        &self.progress
    }
}

impl PlayerSurface for DomPlayerView {
    fn set_play_icon(&self, icon: PlayIcon) {
        self.play_pause.set_text_content(Some(icon.glyph()));
    }

    fn set_progress(&self, percent: f64) {
        self.progress.set_value_as_number(percent);
    }

    fn set_elapsed_label(&self, text: &str) {
        self.current_time.set_text_content(Some(text));
    }

    fn set_duration_label(&self, text: &str) {
        self.duration.set_text_content(Some(text));
    }

    fn reveal_panel(&self) {
        if let Err(e) = self.panel.class_list().add_1(ids::PANEL_ACTIVE_CLASS) {
            tracing::warn!(error = %js_message(&e), "could not reveal player panel");
        }
    }

    fn offer_download(&self, href: &str, filename: &str) {
        if let Err(e) = self.download_container.style().set_property("display", "block") {
            tracing::warn!(error = %js_message(&e), "could not show download link");
        }
        self.download_link.set_href(href);
        self.download_link.set_download(filename);
    }
}
