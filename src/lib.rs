//! # tts-console
//!
//! Control surface for a text-to-speech endpoint.
//!
//! ## Overview
//!
//! A user types text, picks a voice and an audio format, and presses a
//! trigger. One JSON POST goes to the synthesis endpoint; the answer carries
//! a URL that is loaded into an audio element and offered for download. From
//! then on the player controller keeps the play icon, progress bar, time
//! labels and volume in step with the element.
//!
//! Execution is single-threaded and event driven. The only suspension point
//! is the network exchange, during which the trigger control stays disabled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tts_console::config::ConsoleConfig;
//! use tts_console::surface::headless::{HeadlessForm, HeadlessMedia, HeadlessPlayerView};
//! use tts_console::synthesis::HttpSynthesisClient;
//! use tts_console::Console;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> tts_console::Result<()> {
//!     let config = ConsoleConfig::default();
//!     let console = Console::assemble(
//!         &config,
//!         HttpSynthesisClient::from_config(&config)?,
//!         HeadlessForm::new("nova", "mp3"),
//!         HeadlessMedia::new(),
//!         HeadlessPlayerView::new(),
//!     );
//!     console.request().form().set_text("Hello there");
//!     let outcome = console.generate().await;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`synthesis`] | Wire types, voice/format catalog, HTTP transport |
//! | [`request`] | Request controller and trigger guard |
//! | [`player`] | Player controller and time formatting |
//! | [`surface`] | Rendering seams and headless implementations |
//! | [`console`] | Composition root and event routing |
//! | [`config`] | YAML/env configuration |
//! | `browser` | web-sys surfaces and fetch transport (feature `browser`) |

pub mod config;
pub mod console;
pub mod player;
pub mod request;
pub mod surface;
pub mod synthesis;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::ConsoleConfig;
pub use console::{Console, UiEvent};
pub use player::{format_time, PlayerController, PlayerState};
pub use request::{GenerateOutcome, RequestController, Status, TriggerGuard};
pub use surface::{FormSurface, MediaElement, PlayIcon, PlayerSurface};
pub use synthesis::{SynthesisRequest, SynthesisResult, SynthesisTransport};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, TransportError};
