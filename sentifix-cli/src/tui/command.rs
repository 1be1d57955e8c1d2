use std::ops::ControlFlow;
use std::time::Duration;

use crate::tui::state::Command;
use crate::tui::App;

impl App<'_> {
    pub(crate) fn list_command() -> Vec<(String, String)> {
        [
            ("/clear", "clear the input and the result"),
            ("/exit", "exit from the tui"),
        ]
        .into_iter()
        .map(|(cmd, desc)| (cmd.to_string(), desc.to_string()))
        .collect()
    }

    pub(crate) fn handle_app_command(&mut self, command: &str) {
        let cmd = command.split_whitespace().next().unwrap_or_default();

        let command = match cmd {
            "/clear" => Command::Clear,
            "/exit" => Command::Exit,
            _ => {
                let known: Vec<&str> = self.commands.iter().map(|(cmd, _)| cmd.as_str()).collect();
                self.input.alert_msg(&format!(" command unknown, try {}", known.join(" ")), Duration::from_secs(2));
                return;
            }
        };

        if let ControlFlow::Break(()) = self.dispatch(command) {
            self.exit = true;
        }
    }
}
