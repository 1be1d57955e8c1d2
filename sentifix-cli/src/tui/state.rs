use std::ops::ControlFlow;

use sentifix_core::{Fixer, SentimentCategory};
use tracing::debug;

/// Requests the shell can make of its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze,
    Clear,
    Exit,
}

/// Everything the shell shows, independent of how it is drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub input: String,
    pub sentiment_label: String,
    pub output: String,
    pub category: Option<SentimentCategory>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Applies one command. Commands run to completion, one at a time.
    pub fn dispatch(&mut self, command: Command, fixer: &Fixer) -> ControlFlow<()> {
        match command {
            Command::Analyze => {
                let analysis = fixer.analyze(&self.input);
                self.sentiment_label = analysis.label();
                self.output = analysis.message();
                self.category = Some(analysis.category());
                debug!(target: "fixer::analyze", label = %self.sentiment_label, "shell updated");
            }
            Command::Clear => {
                self.input.clear();
                self.sentiment_label.clear();
                self.output.clear();
                self.category = None;
            }
            Command::Exit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }
}
