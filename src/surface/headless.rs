//! In-memory surfaces for terminals and tests.
//!
//! They record what the controllers render so callers can inspect it
//! afterwards. `HeadlessMedia` has no decoder: `play()` flips the paused flag
//! and time only moves when [`HeadlessMedia::advance`] is called.

use super::{FormSurface, MediaElement, PlayIcon, PlayerSurface};
use crate::{Error, Result};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

#[derive(Debug)]
pub struct HeadlessForm {
    text: RefCell<String>,
    voice: RefCell<String>,
    format: RefCell<String>,
    trigger_enabled: Cell<bool>,
    trigger_history: RefCell<Vec<bool>>,
    status: RefCell<String>,
    transcript: RefCell<Option<String>>,
}

impl HeadlessForm {
    pub fn new(voice: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(String::new()),
            voice: RefCell::new(voice.into()),
            format: RefCell::new(format.into()),
            trigger_enabled: Cell::new(true),
            trigger_history: RefCell::new(Vec::new()),
            status: RefCell::new(String::new()),
            transcript: RefCell::new(None),
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }

    pub fn select_voice(&self, voice: impl Into<String>) {
        *self.voice.borrow_mut() = voice.into();
    }

    pub fn select_format(&self, format: impl Into<String>) {
        *self.format.borrow_mut() = format.into();
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled.get()
    }

    /// Every value the trigger's enabled flag was set to, in order.
    pub fn trigger_history(&self) -> Vec<bool> {
        self.trigger_history.borrow().clone()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    pub fn transcript(&self) -> Option<String> {
        self.transcript.borrow().clone()
    }
}

impl FormSurface for HeadlessForm {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn voice(&self) -> String {
        self.voice.borrow().clone()
    }

    fn format(&self) -> String {
        self.format.borrow().clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.trigger_enabled.set(enabled);
        self.trigger_history.borrow_mut().push(enabled);
    }

    fn set_status(&self, status: &str) {
        tracing::trace!(status, "status");
        *self.status.borrow_mut() = status.to_string();
    }

    fn show_transcript(&self, transcript: Option<&str>) {
        *self.transcript.borrow_mut() = transcript.map(str::to_string);
    }
}

/// A download affordance as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOffer {
    pub href: String,
    pub filename: String,
}

#[derive(Debug, Default)]
pub struct HeadlessPlayerView {
    icon: Cell<PlayIcon>,
    progress: Cell<f64>,
    elapsed: RefCell<String>,
    duration: RefCell<String>,
    panel_visible: Cell<bool>,
    download: RefCell<Option<DownloadOffer>>,
}

impl HeadlessPlayerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(&self) -> PlayIcon {
        self.icon.get()
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    pub fn elapsed_label(&self) -> String {
        self.elapsed.borrow().clone()
    }

    pub fn duration_label(&self) -> String {
        self.duration.borrow().clone()
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible.get()
    }

    pub fn download(&self) -> Option<DownloadOffer> {
        self.download.borrow().clone()
    }
}

impl PlayerSurface for HeadlessPlayerView {
    fn set_play_icon(&self, icon: PlayIcon) {
        self.icon.set(icon);
    }

    fn set_progress(&self, percent: f64) {
        self.progress.set(percent);
    }

    fn set_elapsed_label(&self, text: &str) {
        *self.elapsed.borrow_mut() = text.to_string();
    }

    fn set_duration_label(&self, text: &str) {
        *self.duration.borrow_mut() = text.to_string();
    }

    fn reveal_panel(&self) {
        self.panel_visible.set(true);
    }

    fn offer_download(&self, href: &str, filename: &str) {
        *self.download.borrow_mut() = Some(DownloadOffer {
            href: href.to_string(),
            filename: filename.to_string(),
        });
    }
}

#[derive(Debug)]
pub struct HeadlessMedia {
    src: RefCell<Option<String>>,
    paused: Cell<bool>,
    current_time: Cell<f64>,
    duration: Cell<f64>,
    volume: Cell<f64>,
    reject_play: RefCell<Option<String>>,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self {
            src: RefCell::new(None),
            paused: Cell::new(true),
            current_time: Cell::new(0.0),
            duration: Cell::new(f64::NAN),
            volume: Cell::new(1.0),
            reject_play: RefCell::new(None),
        }
    }
}

impl HeadlessMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend metadata for the current source has loaded.
    pub fn set_duration(&self, seconds: f64) {
        self.duration.set(seconds);
    }

    /// Move the playhead forward, stopping at the end like a real element.
    /// Returns true when the end was reached.
    pub fn advance(&self, seconds: f64) -> bool {
        let duration = self.duration.get();
        let next = self.current_time.get() + seconds;
        if duration.is_finite() && next >= duration {
            self.current_time.set(duration);
            self.paused.set(true);
            true
        } else {
            self.current_time.set(next);
            false
        }
    }

    /// Make subsequent `play()` calls fail with `reason`.
    pub fn reject_play(&self, reason: Option<&str>) {
        *self.reject_play.borrow_mut() = reason.map(str::to_string);
    }
}

#[async_trait(?Send)]
impl MediaElement for HeadlessMedia {
    fn set_src(&self, url: &str) {
        *self.src.borrow_mut() = Some(url.to_string());
        self.paused.set(true);
        self.current_time.set(0.0);
        self.duration.set(f64::NAN);
    }

    fn src(&self) -> Option<String> {
        self.src.borrow().clone()
    }

    async fn play(&self) -> Result<()> {
        if let Some(reason) = self.reject_play.borrow().as_ref() {
            return Err(Error::playback(reason.clone()));
        }
        if self.src.borrow().is_none() {
            return Err(Error::playback("no source loaded"));
        }
        self.paused.set(false);
        Ok(())
    }

    fn pause(&self) {
        self.paused.set(true);
    }

    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.current_time.set(seconds);
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_requires_a_source() {
        let media = HeadlessMedia::new();
        assert!(tokio_test::block_on(media.play()).is_err());

        media.set_src("/audio/a.mp3");
        tokio_test::block_on(media.play()).unwrap();
        assert!(!media.paused());
    }

    #[test]
    fn new_source_resets_playhead() {
        let media = HeadlessMedia::new();
        media.set_src("/audio/a.mp3");
        media.set_duration(12.0);
        media.advance(5.0);

        media.set_src("/audio/b.mp3");
        assert_eq!(media.current_time(), 0.0);
        assert!(media.duration().is_nan());
        assert!(media.paused());
    }

    #[test]
    fn advance_stops_at_end() {
        let media = HeadlessMedia::new();
        media.set_src("/audio/a.mp3");
        media.set_duration(3.0);
        assert!(!media.advance(1.0));
        assert!(media.advance(5.0));
        assert_eq!(media.current_time(), 3.0);
    }
}
