//! Composition root: one request controller, one player controller, and the
//! event routing between page and controllers.

use crate::config::ConsoleConfig;
use crate::player::PlayerController;
use crate::request::{GenerateOutcome, RequestController};
use crate::surface::{FormSurface, MediaElement, PlayerSurface};
use crate::synthesis::SynthesisTransport;

/// User input and media events the console reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Generate,
    TogglePlayback,
    TimeUpdate,
    /// Progress control moved to the given percent.
    SeekInput(f64),
    /// Volume slider moved to the given value.
    VolumeInput(f64),
    MetadataLoaded,
    DataLoaded,
    Ended,
}

pub struct Console<T, F, M, V> {
    request: RequestController<T, F>,
    player: PlayerController<M, V>,
}

impl<T, F, M, V> Console<T, F, M, V>
where
    T: SynthesisTransport,
    F: FormSurface,
    M: MediaElement,
    V: PlayerSurface,
{
    pub fn new(
        request: RequestController<T, F>,
        player: PlayerController<M, V>,
    ) -> Self {
        Self { request, player }
    }

    /// Assemble a console from its parts using `config` for player defaults.
    pub fn assemble(config: &ConsoleConfig, transport: T, form: F, media: M, view: V) -> Self {
        Self::new(
            RequestController::new(transport, form),
            PlayerController::new(media, view, config.download_stem.clone()),
        )
    }

    pub fn request(&self) -> &RequestController<T, F> {
        &self.request
    }

    pub fn player(&self) -> &PlayerController<M, V> {
        &self.player
    }

    pub async fn generate(&self) -> GenerateOutcome {
        self.request.generate(&self.player).await
    }

    /// Route one event. Only [`UiEvent::Generate`] produces an outcome.
    pub async fn dispatch(&self, event: UiEvent) -> Option<GenerateOutcome> {
        tracing::trace!(?event, "dispatch");
        match event {
            UiEvent::Generate => return Some(self.generate().await),
            UiEvent::TogglePlayback => {
                self.player.toggle().await;
            }
            UiEvent::TimeUpdate => self.player.sync_time(),
            UiEvent::SeekInput(percent) => {
                self.player.seek(percent);
            }
            UiEvent::VolumeInput(value) => {
                self.player.set_volume(value);
            }
            UiEvent::MetadataLoaded => self.player.on_metadata_loaded(),
            UiEvent::DataLoaded => self.player.on_data_loaded(),
            UiEvent::Ended => self.player.on_ended(),
        }
        None
    }
}
