//! Rendering seams between the controllers and whatever displays them.
//!
//! Every method takes `&self`: the surfaces stand for page elements, which
//! are mutated through shared handles. Implementations exist for the browser
//! (`crate::browser`), for headless use ([`headless`]) and for tests.

pub mod headless;

use crate::Result;
use async_trait::async_trait;

/// Glyph on the play/pause control. Mirrors the media element's paused flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayIcon {
    /// Playback running; the control offers "pause".
    Playing,
    /// Playback stopped; the control offers "play".
    #[default]
    Paused,
}

impl PlayIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Playing => "\u{275A}\u{275A}",
            Self::Paused => "\u{25BA}",
        }
    }

    pub fn for_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }
}

/// Input form, trigger control and status line.
pub trait FormSurface {
    fn text(&self) -> String;
    fn voice(&self) -> String;
    fn format(&self) -> String;
    fn set_trigger_enabled(&self, enabled: bool);
    fn set_status(&self, status: &str);

    /// Text the endpoint actually spoke, when it differs from the input.
    fn show_transcript(&self, _transcript: Option<&str>) {}
}

/// Player panel widgets.
pub trait PlayerSurface {
    fn set_play_icon(&self, icon: PlayIcon);
    /// Progress bar value in percent.
    fn set_progress(&self, percent: f64);
    fn set_elapsed_label(&self, text: &str);
    fn set_duration_label(&self, text: &str);
    /// Make the player panel visible. Idempotent.
    fn reveal_panel(&self);
    fn offer_download(&self, href: &str, filename: &str);
}

/// The audio element. `duration` is NaN until metadata has loaded.
#[async_trait(?Send)]
pub trait MediaElement {
    fn set_src(&self, url: &str);
    fn src(&self) -> Option<String>;
    /// Start playback; resolves once the element accepted the request.
    async fn play(&self) -> Result<()>;
    fn pause(&self);
    fn paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_mirrors_paused_flag() {
        assert_eq!(PlayIcon::for_paused(true), PlayIcon::Paused);
        assert_eq!(PlayIcon::for_paused(false), PlayIcon::Playing);
        assert_eq!(PlayIcon::Playing.glyph(), "❚❚");
        assert_eq!(PlayIcon::Paused.glyph(), "►");
    }
}
