use std::io;
use std::ops::ControlFlow;

use ansi_to_tui::IntoText;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::CrosstermBackend;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
    Frame, Terminal, TerminalOptions, Viewport,
};
use sentifix_core::{Fixer, SentimentCategory};
use tokio::time::{interval, Duration};

use super::input::{InputArea, UserAction};
use super::state::{AppState, Command};
use super::theme::{ansi_color, NEGATIVE_RED, NEUTRAL_YELLOW, POSITIVE_GREEN};

/// Rows of the inline viewport: label, result box, input box, helper and help.
const VIEWPORT_HEIGHT: u16 = 15;
const RESULT_HEIGHT: u16 = 5;

pub struct App<'a> {
    pub(crate) terminal: Option<Terminal<CrosstermBackend<io::Stdout>>>,
    pub(crate) fixer: Fixer,
    pub(crate) state: AppState,
    pub(crate) input: InputArea<'a>,
    pub(crate) commands: Vec<(String, String)>,
    pub(crate) exit: bool,
}

impl<'a> App<'a> {
    pub fn new(fixer: Fixer) -> Self {
        Self {
            terminal: None,
            fixer,
            state: AppState::new(),
            input: InputArea::new(),
            commands: Self::list_command(),
            exit: false,
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        let result = self.try_run().await;
        ratatui::restore();

        if let Err(e) = result {
            println!();
            eprintln!("{}\r\n", e);
        }

        println!();
        Ok(())
    }

    async fn try_run(&mut self) -> io::Result<()> {
        self.terminal = Some(ratatui::init_with_options(TerminalOptions {
            viewport: Viewport::Inline(VIEWPORT_HEIGHT)
        }));

        // ticks flush a pending Enter and expire helper messages
        let mut tick = interval(Duration::from_millis(100));
        let mut reader = crossterm::event::EventStream::new();

        while !self.exit {
            self.draw_ui()?;

            tokio::select! {
                crossterm_event = reader.next() => {
                    match crossterm_event {
                        Some(Ok(event)) => self.handle_crossterm_event(event)?,
                        Some(Err(e)) => return Err(e),
                        None => self.exit = true,
                    }
                }

                _ = tick.tick() => {
                    if let Some(action) = self.input.check_pending_enter() {
                        self.handle_user_action(action)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn dispatch(&mut self, command: Command) -> ControlFlow<()> {
        let flow = self.state.dispatch(command.clone(), &self.fixer);
        if command == Command::Clear {
            self.input.clear();
        }
        flow
    }

    fn handle_crossterm_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Resize( .. ) => {
                if let Some(ref mut terminal) = self.terminal {
                    terminal.clear()?;
                }
            }
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> io::Result<()> {
        if matches!(key_event.code, KeyCode::Char('c')) && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            if let ControlFlow::Break(()) = self.dispatch(Command::Exit) {
                self.exit = true;
            }
            return Ok(());
        }

        let action = self.input.handle_event(key_event);
        self.handle_user_action(action)
    }

    fn handle_user_action(&mut self, action: UserAction) -> io::Result<()> {
        match action {
            UserAction::Nope => {}
            UserAction::Analyze { input } => {
                self.state.set_input(input);
                let _ = self.dispatch(Command::Analyze);
                self.log_analysis()?;
            }
            UserAction::Clear => {
                let _ = self.dispatch(Command::Clear);
            }
            UserAction::UserAppCommand { command } => {
                self.handle_app_command(&command);
            }
        }
        Ok(())
    }

    /// Keeps a copy of each analysis in the terminal scrollback.
    fn log_analysis(&mut self) -> io::Result<()> {
        let color = ansi_color(self.category_color());
        let mut formatted = String::new();
        for line in self.state.input.lines() {
            formatted.push_str(&format!("\x1b[2m> {}\x1b[0m\n", line));
        }
        formatted.push_str(&format!("{}{}\x1b[0m\n", color, self.state.sentiment_label));
        formatted.push_str(&format!("{}\n", self.state.output));

        let line_count = formatted.lines().count() as u16;
        if let Some(ref mut terminal) = self.terminal {
            if let Ok(text) = formatted.into_text() {
                terminal.insert_before(line_count, |buf| {
                    Paragraph::new(text).render(buf.area, buf);
                })?;
            }
        }
        Ok(())
    }

    fn category_color(&self) -> (u8, u8, u8) {
        match self.state.category {
            Some(SentimentCategory::Positive) => POSITIVE_GREEN,
            Some(SentimentCategory::Negative) => NEGATIVE_RED,
            _ => NEUTRAL_YELLOW,
        }
    }

    fn draw_ui(&mut self) -> io::Result<()> {
        let Some(mut terminal) = self.terminal.take() else {
            return Ok(());
        };
        let result = terminal.draw(|frame| self.draw_frame(frame)).map(|_| ());
        self.terminal = Some(terminal);
        result
    }

    fn draw_frame(&mut self, frame: &mut Frame) {
        let [_, label, result, modal] = Layout::vertical([
            Constraint::Length(1), // padding
            Constraint::Length(1),
            Constraint::Length(RESULT_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        let (r, g, b) = self.category_color();
        frame.render_widget(
            Span::styled(self.state.sentiment_label.as_str(), Style::default().fg(Color::Rgb(r, g, b)).bold()),
            label,
        );

        self.draw_result(frame, result);
        self.input.draw(frame, modal);
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .padding(Padding { left: 1, right: 1, top: 0, bottom: 0 })
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(" result ", Style::default().fg(Color::DarkGray)));

        let output = Paragraph::new(self.state.output.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(output, area);
    }
}
