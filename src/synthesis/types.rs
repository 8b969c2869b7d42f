//! Synthesis request and result records.

use super::catalog::AudioFormat;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};

/// Body of the POST to the synthesis endpoint. Built fresh per attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub format: String,
}

impl SynthesisRequest {
    pub fn new(
        text: impl Into<String>,
        voice: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
            format: format.into(),
        }
    }
}

/// Answer of the synthesis endpoint: `{ok, url?, error?}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Text actually spoken, when the endpoint rewrote the input (e.g. translated it).
    #[serde(default, alias = "urdu_text", skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl SynthesisResult {
    pub fn success(url: impl Into<String>) -> Self {
        Self {
            ok: true,
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Interpret a raw HTTP answer.
    ///
    /// A non-2xx status is a failure even when the body parses; its `error`
    /// field (or "Unknown error") becomes the message. An unparseable body
    /// is a failure too.
    pub fn from_response(status: u16, body: &[u8]) -> Result<Self> {
        let success = (200..300).contains(&status);
        match serde_json::from_slice::<SynthesisResult>(body) {
            Ok(result) if success => Ok(result),
            Ok(result) => Err(Error::remote(Some(status), result.error)),
            Err(_) if !success => Err(Error::remote(
                Some(status),
                Some(format!("Request failed with HTTP {}", status)),
            )),
            Err(e) => Err(Error::malformed_with_context(
                "synthesis endpoint returned an unreadable body",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("synthesis"),
            )),
        }
    }

    /// Resource locator of a successful result.
    pub fn into_locator(self) -> Result<String> {
        if !self.ok {
            return Err(Error::remote(None, self.error));
        }
        match self.url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(Error::malformed_with_context(
                "successful response did not include an audio url",
                ErrorContext::new()
                    .with_field_path("url")
                    .with_source("synthesis"),
            )),
        }
    }
}

/// Suggested download name for audio of the given format, e.g. "tts_audio.mp3".
///
/// Known formats use their canonical extension; anything else is used as typed.
pub fn download_filename(stem: &str, format: &str) -> String {
    let ext = AudioFormat::parse(format)
        .map(|f| f.as_str().to_string())
        .unwrap_or_else(|| format.trim().to_string());
    if ext.is_empty() {
        stem.to_string()
    } else {
        format!("{}.{}", stem, ext)
    }
}
