//! Player controller: everything that happens to the audio element after a
//! source has been handed over.
//!
//! Labels and the progress bar are recomputed from the element on every
//! event. The only mirrored state is the play icon, which is rewritten on
//! each state-changing action.

mod time;

pub use time::{format_time, progress_percent, seek_target};

use crate::surface::{MediaElement, PlayIcon, PlayerSurface};
use crate::synthesis::download_filename;
use crate::Result;
use std::cell::Cell;

/// Reachable player states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No source loaded yet; panel hidden.
    Idle,
    Paused,
    Playing,
}

pub struct PlayerController<M, V> {
    media: M,
    view: V,
    download_stem: String,
    panel_shown: Cell<bool>,
}

impl<M: MediaElement, V: PlayerSurface> PlayerController<M, V> {
    pub fn new(media: M, view: V, download_stem: impl Into<String>) -> Self {
        Self {
            media,
            view,
            download_stem: download_stem.into(),
            panel_shown: Cell::new(false),
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> PlayerState {
        if !self.panel_shown.get() {
            PlayerState::Idle
        } else if self.media.paused() {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Hand-off from the request controller: load `url`, start playback,
    /// reveal the panel and offer the download.
    ///
    /// If playback is refused the previous source is put back and the panel,
    /// download link and icon stay consistent with it.
    pub async fn load(&self, url: &str, format: &str) -> Result<()> {
        let previous = self.media.src();
        self.media.set_src(url);
        if let Err(e) = self.media.play().await {
            if let Some(previous) = previous.as_deref() {
                self.media.set_src(previous);
            }
            if self.panel_shown.get() {
                self.view
                    .set_play_icon(PlayIcon::for_paused(self.media.paused()));
            }
            return Err(e);
        }

        self.view.reveal_panel();
        self.panel_shown.set(true);
        self.view.set_play_icon(PlayIcon::Playing);
        self.view
            .offer_download(url, &download_filename(&self.download_stem, format));
        tracing::debug!(url, "audio source loaded");
        Ok(())
    }

    /// Flip between playing and paused. Returns the icon now shown.
    pub async fn toggle(&self) -> PlayIcon {
        if self.media.paused() {
            self.view.set_play_icon(PlayIcon::Playing);
            if let Err(e) = self.media.play().await {
                tracing::warn!(error = %e, "playback refused");
                let icon = PlayIcon::for_paused(self.media.paused());
                self.view.set_play_icon(icon);
                return icon;
            }
            PlayIcon::Playing
        } else {
            self.media.pause();
            self.view.set_play_icon(PlayIcon::Paused);
            PlayIcon::Paused
        }
    }

    /// Playback time moved: refresh progress bar and both labels.
    pub fn sync_time(&self) {
        let current = self.media.current_time();
        let duration = self.media.duration();
        self.view.set_progress(progress_percent(current, duration));
        self.view.set_elapsed_label(&format_time(current));
        self.view.set_duration_label(&format_time(duration));
    }

    /// Progress control dragged to `percent`. Returns the new playhead
    /// position, or None while the duration is unknown.
    pub fn seek(&self, percent: f64) -> Option<f64> {
        let target = seek_target(percent, self.media.duration())?;
        self.media.set_current_time(target);
        Some(target)
    }

    /// Volume slider moved. Values are clamped to [0, 1]; NaN is ignored.
    /// Returns the volume now in effect.
    pub fn set_volume(&self, value: f64) -> f64 {
        if value.is_nan() {
            tracing::warn!("ignoring NaN volume");
            return self.media.volume();
        }
        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            tracing::warn!(requested = value, applied = clamped, "volume clamped");
        }
        self.media.set_volume(clamped);
        clamped
    }

    pub fn on_metadata_loaded(&self) {
        self.view
            .set_duration_label(&format_time(self.media.duration()));
    }

    pub fn on_data_loaded(&self) {
        self.view.set_progress(0.0);
        self.view.set_elapsed_label("0:00");
    }

    /// Natural end of playback. No looping.
    pub fn on_ended(&self) {
        self.view.set_play_icon(PlayIcon::Paused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::headless::{HeadlessMedia, HeadlessPlayerView};

    fn player() -> PlayerController<HeadlessMedia, HeadlessPlayerView> {
        PlayerController::new(HeadlessMedia::new(), HeadlessPlayerView::new(), "tts_audio")
    }

    #[tokio::test]
    async fn load_starts_playback_and_reveals_panel() {
        let player = player();
        assert_eq!(player.state(), PlayerState::Idle);

        player.load("/audio/abc.wav", "wav").await.unwrap();

        assert_eq!(player.media().src().as_deref(), Some("/audio/abc.wav"));
        assert!(!player.media().paused());
        assert!(player.view().panel_visible());
        assert_eq!(player.view().icon(), PlayIcon::Playing);
        let offer = player.view().download().unwrap();
        assert_eq!(offer.href, "/audio/abc.wav");
        assert_eq!(offer.filename, "tts_audio.wav");
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[tokio::test]
    async fn refused_playback_keeps_panel_hidden() {
        let player = player();
        player.media().reject_play(Some("autoplay blocked"));

        let err = player.load("/audio/abc.mp3", "mp3").await.unwrap_err();
        assert_eq!(err.user_message(), "autoplay blocked");
        assert!(!player.view().panel_visible());
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[tokio::test]
    async fn refused_reload_restores_previous_source() {
        let player = player();
        player.load("/audio/first.mp3", "mp3").await.unwrap();
        player.media().reject_play(Some("autoplay blocked"));

        assert!(player.load("/audio/second.wav", "wav").await.is_err());

        assert_eq!(player.media().src().as_deref(), Some("/audio/first.mp3"));
        assert_eq!(player.state(), PlayerState::Paused);
        assert_eq!(player.view().icon(), PlayIcon::Paused);
        let offer = player.view().download().unwrap();
        assert_eq!(offer.href, "/audio/first.mp3");
        assert_eq!(offer.filename, "tts_audio.mp3");
    }

    #[tokio::test]
    async fn toggle_is_self_inverse() {
        let player = player();
        player.load("/audio/a.mp3", "mp3").await.unwrap();

        assert_eq!(player.toggle().await, PlayIcon::Paused);
        assert_eq!(player.state(), PlayerState::Paused);
        assert_eq!(player.toggle().await, PlayIcon::Playing);
        assert_eq!(player.view().icon(), PlayIcon::Playing);
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[tokio::test]
    async fn refused_toggle_resyncs_icon() {
        let player = player();
        player.load("/audio/a.mp3", "mp3").await.unwrap();
        player.toggle().await;
        player.media().reject_play(Some("decode error"));

        assert_eq!(player.toggle().await, PlayIcon::Paused);
        assert_eq!(player.view().icon(), PlayIcon::Paused);
    }

    #[tokio::test]
    async fn time_sync_and_seek() {
        let player = player();
        player.load("/audio/a.mp3", "mp3").await.unwrap();

        player.sync_time();
        assert_eq!(player.view().progress(), 0.0);
        assert_eq!(player.view().duration_label(), "0:00");

        player.media().set_duration(80.0);
        player.on_metadata_loaded();
        assert_eq!(player.view().duration_label(), "1:20");

        player.media().advance(20.0);
        player.sync_time();
        assert_eq!(player.view().progress(), 25.0);
        assert_eq!(player.view().elapsed_label(), "0:20");

        assert_eq!(player.seek(75.0), Some(60.0));
        assert_eq!(player.media().current_time(), 60.0);
    }

    #[test]
    fn seek_without_duration_is_ignored() {
        let player = player();
        player.media().set_current_time(4.0);
        assert_eq!(player.seek(50.0), None);
        assert_eq!(player.media().current_time(), 4.0);
    }

    #[test]
    fn volume_is_clamped() {
        let player = player();
        assert_eq!(player.set_volume(0.4), 0.4);
        assert_eq!(player.set_volume(1.7), 1.0);
        assert_eq!(player.set_volume(-0.2), 0.0);
        assert_eq!(player.set_volume(f64::NAN), 0.0);
        assert_eq!(player.media().volume(), 0.0);
    }

    #[tokio::test]
    async fn lifecycle_events() {
        let player = player();
        player.load("/audio/a.mp3", "mp3").await.unwrap();
        player.media().set_duration(10.0);
        player.media().advance(4.0);
        player.sync_time();

        player.on_data_loaded();
        assert_eq!(player.view().progress(), 0.0);
        assert_eq!(player.view().elapsed_label(), "0:00");

        assert!(player.media().advance(30.0));
        player.on_ended();
        assert_eq!(player.view().icon(), PlayIcon::Paused);
        assert_eq!(player.state(), PlayerState::Paused);
    }
}
