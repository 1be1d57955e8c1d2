use std::time::{Instant, Duration};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::Span,
    widgets::{Block, Borders, Padding},
    Frame,
};
use tui_textarea::{Input, TextArea};

use crate::tui::helper::HelpArea;

pub enum UserAction {
    Nope,
    Analyze {
        input: String
    },
    Clear,
    UserAppCommand {
        command: String
    }
}

pub struct InputArea<'a> {
    // input text
    input: TextArea<'a>,
    placeholder: String,

    // status bottom left
    last_keystroke_time: Option<Instant>,
    pending_enter: Option<Instant>,
    helper_msg: Option<String>,
    helper_set: Option<Instant>,
    helper_duration: Option<Duration>,
    escape_press_time: Option<Instant>,

    // bottom helper
    help: Option<HelpArea>,
}

impl Default for InputArea<'_> {
    fn default() -> Self {
        Self {
            input: TextArea::default(),
            placeholder: "type a post, enter to analyze, ? for help".to_string(),
            last_keystroke_time: None,
            pending_enter: None,
            helper_msg: None,
            helper_set: None,
            helper_duration: None,
            escape_press_time: None,
            help: None,
        }
    }
}

impl InputArea<'_> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn text(&self) -> String {
        self.input.lines().join("\n")
    }

    pub fn clear(&mut self) {
        self.input = TextArea::default();
        self.escape_press_time = None;
        self.helper_msg = None;
    }

    fn is_empty(&self) -> bool {
        self.input.lines().iter().all(|line| line.is_empty())
    }
}


/// status message bottom left
impl InputArea<'_> {
    pub fn alert_msg(&mut self, text: &str, duration: Duration) {
        self.helper_msg = Some(text.to_string());
        self.helper_set = Some(Instant::now());
        self.helper_duration = Some(duration);
    }

    /// An Enter followed by more keys within 100ms is part of a paste and
    /// becomes a newline. Otherwise it submits the input.
    pub fn check_pending_enter(&mut self) -> Option<UserAction> {
        let enter_time = self.pending_enter?;
        if enter_time.elapsed() < Duration::from_millis(100) {
            return None;
        }
        self.pending_enter = None;

        let input = self.text();
        if input.starts_with('/') {
            self.input = TextArea::default();
            return Some(UserAction::UserAppCommand {
                command: input
            });
        }
        Some(UserAction::Analyze {
            input
        })
    }

    fn check_helper_msg(&mut self) -> String {
        if let (Some(helper_time), Some(duration)) = (self.helper_set, self.helper_duration) {
            if helper_time.elapsed() >= duration {
                self.helper_msg = None;
                self.helper_set = None;
                self.helper_duration = None;
                return String::new();
            }
        }

        self.helper_msg.as_deref().unwrap_or("").to_string()
    }
}


/// event related
impl InputArea<'_> {
    pub fn handle_event(&mut self, key_event: KeyEvent) -> UserAction {
        let now = Instant::now();
        self.last_keystroke_time = Some(now);

        // Convert any pending Enter to newline
        if self.pending_enter.is_some() {
            self.pending_enter = None;
            self.insert_newline(key_event);
        }

        match key_event.code {
            KeyCode::Char('?') if self.is_empty() && self.help.is_none() => {
                self.help = Some(HelpArea);
            }
            KeyCode::Esc => {
                // second escape within 1 second clears everything
                if let Some(escape_time) = self.escape_press_time {
                    if escape_time.elapsed() < Duration::from_secs(1) {
                        self.clear();
                        return UserAction::Clear;
                    }
                }

                self.help = None;
                self.escape_press_time = Some(now);
                self.helper_set = Some(now);
                self.helper_duration = Some(Duration::from_secs(1));
                self.helper_msg = Some(" press esc again to clear".to_string());
            }
            KeyCode::Char('v') if key_event.modifiers.contains(KeyModifiers::CONTROL) || key_event.modifiers.contains(KeyModifiers::SUPER) => {
                // Ctrl+V or Cmd+V paste directly from clipboard
                if let Ok(mut ctx) = ClipboardContext::new() {
                    if let Ok(text) = ctx.get_contents() {
                        self.input.insert_str(text);
                        return UserAction::Nope;
                    }
                }
                let event: Input = Event::Key(key_event).into();
                self.input.input(event);
            }
            KeyCode::Enter => {
                // Alt+Enter creates a new line immediately
                if key_event.modifiers.contains(KeyModifiers::ALT) {
                    self.insert_newline(key_event);
                    return UserAction::Nope;
                }

                // Regular Enter - set pending and wait
                self.pending_enter = Some(now);
            }
            _ => {
                self.help = None;
                let event: Input = Event::Key(key_event).into();
                self.input.input(event);
            }
        }
        UserAction::Nope
    }

    fn insert_newline(&mut self, key_event: KeyEvent) {
        // plain Enter for TextArea, without modifiers
        let fake_event = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
            kind: key_event.kind,
            state: key_event.state,
        };
        let event: Input = Event::Key(fake_event).into();
        self.input.input(event);
    }
}


/// drawing logic
impl InputArea<'_> {
    pub fn help_height(&self) -> u16 {
        self.help.as_ref().map_or(0, |h| h.height())
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let [input_area, helper, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(self.help_height())
        ]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .padding(Padding { left: 1, right: 1, top: 0, bottom: 0 })
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(input_area);
        f.render_widget(block, input_area);

        let [pad, prompt] = Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
        f.render_widget(">", pad);

        self.input.set_placeholder_text(self.placeholder.clone());
        self.input.set_placeholder_style(Style::default().fg(Color::DarkGray));
        self.input.set_style(Style::default().fg(Color::White));
        self.input.set_cursor_style(Style::default()
            .fg(Color::White)
            .bg(if !self.is_empty() { Color::White } else { Color::Reset }));
        self.input.set_cursor_line_style(Style::default());
        f.render_widget(&self.input, prompt);

        let helper_text = self.check_helper_msg();
        f.render_widget(
            Span::styled(helper_text, Style::default().fg(Color::DarkGray).dim()),
            helper
        );

        if let Some(help) = &self.help {
            help.draw(f, help_area);
        }
    }
}
