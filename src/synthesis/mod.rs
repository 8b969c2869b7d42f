//! Synthesis endpoint: wire types, voice/format catalog and transports.

mod catalog;
#[cfg(feature = "native")]
mod client;
mod types;

pub use catalog::{default_voices, AudioFormat, Gender, Voice, DEFAULT_VOICE};
#[cfg(feature = "native")]
pub use client::{HttpSynthesisClient, HttpSynthesisClientBuilder};
pub use types::{download_filename, SynthesisRequest, SynthesisResult};

use crate::Result;
use async_trait::async_trait;

/// Default path of the synthesis endpoint relative to the page origin.
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/tts";

/// One request/response exchange with the synthesis endpoint.
///
/// Implementations resolve HTTP status and body parsing into a
/// [`SynthesisResult`] via [`SynthesisResult::from_response`], so every
/// transport fails the same way for the same answer.
#[async_trait(?Send)]
pub trait SynthesisTransport {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult>;
}
