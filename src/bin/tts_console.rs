//! tts-console: drive one synthesis request from the terminal
//!
//! Usage:
//!   tts-console speak --text <text> [--voice <id>] [--format <fmt>] [--config <file>] [--base-url <url>]
//!   tts-console voices [--config <file>]
//!   tts-console formats

use anyhow::{bail, Context};
use tts_console::surface::headless::{HeadlessForm, HeadlessMedia, HeadlessPlayerView};
use tts_console::synthesis::{AudioFormat, HttpSynthesisClient};
use tts_console::{Console, ConsoleConfig, GenerateOutcome};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "speak" => cmd_speak(&args[2..]),
        "voices" => cmd_voices(&args[2..]),
        "formats" => cmd_formats(),
        "version" | "--version" | "-V" => {
            println!("tts-console {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"tts-console: text-to-speech control surface

USAGE:
    tts-console <COMMAND> [OPTIONS]

COMMANDS:
    speak --text <text>         Synthesize speech and report the audio URL
        [--voice <id>]          Voice id (default from config)
        [--format <fmt>]        mp3, wav, opus, aac, flac or pcm
        [--config <file>]       YAML configuration file
        [--base-url <url>]      Origin of the synthesis endpoint
    voices [--config <file>]    List the voice catalog
    formats                     List audio formats
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    TTS_CONSOLE_BASE_URL        Origin of the synthesis endpoint
    TTS_CONSOLE_TIMEOUT_SECS    Request timeout (none by default)
    RUST_LOG                    Log filter (default: info)"#
    );
}

/// Pull `--name value` out of `args`.
fn flag<'a>(args: &'a [String], name: &str) -> anyhow::Result<Option<&'a str>> {
    match args.iter().position(|a| a == name) {
        Some(i) => match args.get(i + 1) {
            Some(value) => Ok(Some(value.as_str())),
            None => bail!("{name} requires a value"),
        },
        None => Ok(None),
    }
}

fn load_config(args: &[String]) -> anyhow::Result<ConsoleConfig> {
    let config = match flag(args, "--config")? {
        Some(path) => ConsoleConfig::from_path(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => ConsoleConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn cmd_speak(args: &[String]) -> anyhow::Result<()> {
    let mut config = load_config(args)?;
    if let Some(base_url) = flag(args, "--base-url")? {
        config.base_url = base_url.to_string();
    }
    let text = flag(args, "--text")?.unwrap_or_default();
    let voice = flag(args, "--voice")?
        .map(str::to_string)
        .unwrap_or_else(|| config.default_voice.clone());
    if config.voice(&voice).is_none() {
        tracing::warn!(%voice, "voice is not in the catalog; sending anyway");
    }
    let format = flag(args, "--format")?
        .map(str::to_string)
        .unwrap_or_else(|| config.default_format.to_string());

    let form = HeadlessForm::new(voice, format);
    form.set_text(text);
    let console = Console::assemble(
        &config,
        HttpSynthesisClient::from_config(&config)?,
        form,
        HeadlessMedia::new(),
        HeadlessPlayerView::new(),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(console.generate());

    let form = console.request().form();
    println!("{}", form.status());
    match outcome {
        GenerateOutcome::Ready { url } => {
            println!("url: {url}");
            if let Some(offer) = console.player().view().download() {
                println!("download as: {}", offer.filename);
            }
            if let Some(transcript) = form.transcript() {
                println!("spoken text: {transcript}");
            }
            Ok(())
        }
        GenerateOutcome::Rejected => bail!("nothing to synthesize"),
        GenerateOutcome::Failed { message } => bail!(message),
    }
}

fn cmd_voices(args: &[String]) -> anyhow::Result<()> {
    let config = load_config(args)?;
    for voice in &config.voices {
        let marker = if voice.id == config.default_voice { "*" } else { " " };
        println!("{marker} {}", voice.label());
    }
    Ok(())
}

fn cmd_formats() -> anyhow::Result<()> {
    for format in AudioFormat::ALL {
        println!("{:<5} {}", format.as_str(), format.mime_type());
    }
    Ok(())
}
