use ansi_to_tui::IntoText;
use ratatui::{layout::Rect, style::{Color, Style, Stylize}, Frame};


pub struct HelpArea;

impl HelpArea {
    fn helper_msg(&self) -> String {
        [
            "  enter to analyze       alt+enter for a new line      tap esc twice to clear",
            "  /clear /exit commands  ctrl^v to paste               ctrl^c to exit",
        ].join("\n")
    }
}

impl HelpArea {
    pub fn height(&self) -> u16 {
        2
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let Ok(text) = self.helper_msg().into_text() else {
            return;
        };
        f.render_widget(text.style(Style::default().fg(Color::DarkGray).dim()), area);
    }
}
