//! Request controller: the "generate" action.
//!
//! Reads the form, performs one synthesis exchange and hands the resulting
//! locator to the player. The trigger control stays disabled for the whole
//! exchange, which is what serializes generation attempts.

mod guard;

pub use guard::TriggerGuard;

use crate::player::PlayerController;
use crate::surface::{FormSurface, MediaElement, PlayerSurface};
use crate::synthesis::{SynthesisRequest, SynthesisTransport};
use crate::Result;
use std::fmt;

/// Text of the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NeedsText,
    Generating,
    Ready,
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NeedsText => f.write_str("Please enter some text."),
            Status::Generating => f.write_str("Generating…"),
            Status::Ready => f.write_str("Ready."),
            Status::Failed(message) => write!(f, "Error: {}", message),
        }
    }
}

/// What a call to [`RequestController::generate`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Input was empty; nothing was sent.
    Rejected,
    Ready { url: String },
    Failed { message: String },
}

pub struct RequestController<T, F> {
    transport: T,
    form: F,
}

impl<T: SynthesisTransport, F: FormSurface> RequestController<T, F> {
    pub fn new(transport: T, form: F) -> Self {
        Self { transport, form }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn show(&self, status: &Status) {
        self.form.set_status(&status.to_string());
    }

    /// Run one generation attempt.
    ///
    /// On failure the player is left exactly as it was; only the status line
    /// changes. The trigger is re-enabled on every exit path.
    pub async fn generate<M, V>(&self, player: &PlayerController<M, V>) -> GenerateOutcome
    where
        M: MediaElement,
        V: PlayerSurface,
    {
        let text = self.form.text().trim().to_string();
        if text.is_empty() {
            self.show(&Status::NeedsText);
            return GenerateOutcome::Rejected;
        }

        let _guard = TriggerGuard::acquire(&self.form);
        self.show(&Status::Generating);

        let request = SynthesisRequest::new(text, self.form.voice(), self.form.format());
        tracing::info!(
            voice = %request.voice,
            format = %request.format,
            "generating speech"
        );
        match self.attempt(&request, player).await {
            Ok(url) => {
                tracing::info!(%url, "speech ready");
                self.show(&Status::Ready);
                GenerateOutcome::Ready { url }
            }
            Err(e) => {
                tracing::error!(error = %e, "generation failed");
                let message = e.user_message();
                self.show(&Status::Failed(message.clone()));
                GenerateOutcome::Failed { message }
            }
        }
    }

    async fn attempt<M, V>(
        &self,
        request: &SynthesisRequest,
        player: &PlayerController<M, V>,
    ) -> Result<String>
    where
        M: MediaElement,
        V: PlayerSurface,
    {
        let result = self.transport.synthesize(request).await?;
        let transcript = result.transcript.clone();
        let url = result.into_locator()?;
        player.load(&url, &request.format).await?;
        self.form.show_transcript(transcript.as_deref());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_texts() {
        assert_eq!(Status::NeedsText.to_string(), "Please enter some text.");
        assert_eq!(Status::Generating.to_string(), "Generating…");
        assert_eq!(Status::Ready.to_string(), "Ready.");
        assert_eq!(
            Status::Failed("Unknown error".to_string()).to_string(),
            "Error: Unknown error"
        );
    }
}
