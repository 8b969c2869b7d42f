//! Shared fixtures for console integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use tts_console::surface::headless::{HeadlessForm, HeadlessMedia, HeadlessPlayerView};
use tts_console::{
    Console, ConsoleConfig, Error, Result, SynthesisRequest, SynthesisResult, SynthesisTransport,
};

/// Transport that replays canned answers and records what it was asked.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<SynthesisResult>>>,
    calls: RefCell<Vec<SynthesisRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Result<SynthesisResult>) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<SynthesisRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SynthesisTransport for ScriptedTransport {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        self.calls.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("no scripted reply left")))
    }
}

pub type TestConsole<T> = Console<T, HeadlessForm, HeadlessMedia, HeadlessPlayerView>;

pub fn console_with<T: SynthesisTransport>(transport: T) -> TestConsole<T> {
    Console::assemble(
        &ConsoleConfig::default(),
        transport,
        HeadlessForm::new("nova", "mp3"),
        HeadlessMedia::new(),
        HeadlessPlayerView::new(),
    )
}
