//! Voices and audio encodings offered by the synthesis endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_VOICE: &str = "alloy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A selectable voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub gender: Gender,
}

impl Voice {
    pub fn new(id: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            gender,
        }
    }

    /// Option label used by selectors, e.g. "alloy (Male)".
    pub fn label(&self) -> String {
        format!("{} ({:?})", self.id, self.gender)
    }
}

/// Voices the stock endpoint accepts.
pub fn default_voices() -> Vec<Voice> {
    use Gender::{Female, Male};
    [
        ("alloy", Male),
        ("ash", Male),
        ("ballad", Female),
        ("coral", Female),
        ("echo", Male),
        ("fable", Female),
        ("onyx", Male),
        ("nova", Female),
        ("sage", Female),
        ("shimmer", Female),
        ("verse", Male),
    ]
    .into_iter()
    .map(|(id, gender)| Voice::new(id, gender))
    .collect()
}

/// Supported audio encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
    Opus,
    Aac,
    Flac,
    Pcm,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 6] = [
        Self::Mp3,
        Self::Wav,
        Self::Opus,
        Self::Aac,
        Self::Flac,
        Self::Pcm,
    ];

    /// Wire identifier, also used as the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Pcm => "pcm",
        }
    }

    /// MIME type the audio is served with. Opus travels in an Ogg container.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Opus => "audio/ogg",
            Self::Aac => "audio/aac",
            Self::Flac => "audio/flac",
            Self::Pcm => "audio/pcm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
