mod headless;
mod tui;

use std::io::{self, IsTerminal, Read};

use clap::{Parser, Subcommand};
use sentifix_core::logging::LoggingConfig;
use sentifix_core::resources::{ResourceManager, ResourceStatus};
use sentifix_core::{Fixer, SentifixConfig};

use crate::headless::AppHeadless;
use crate::tui::App;

#[derive(Parser)]
#[command(name = "sentifix", version, about = "Scores the sentiment of a post and rewrites negative adjectives")]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to analyze, skipping the interactive UI (stdin is read when piped)
    text: Vec<String>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Fail instead of downloading missing model data
    #[arg(long)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the model data
    Fetch {
        /// Download again even if already installed
        #[arg(long)]
        force: bool,
    },
    /// Show which model data is installed
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\x1b[31merror:\x1b[0m {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _ = LoggingConfig::from_env().init();

    let mut config = SentifixConfig::load_or_default()?;
    if args.offline {
        config.auto_download = false;
    }

    match args.command {
        Some(Commands::Fetch { force }) => {
            let manager = ResourceManager::from_config(&config)?;
            eprintln!("\x1b[2mdownloading model data into {}\x1b[0m", manager.data_dir().display());
            print_status(&manager.fetch(force).await?);
        }
        Some(Commands::Status) => {
            let manager = ResourceManager::from_config(&config)?;
            println!("data directory: {}", manager.data_dir().display());
            print_status(&manager.status());
        }
        None => {
            let text = if !args.text.is_empty() {
                Some(args.text.join(" "))
            } else if !io::stdin().is_terminal() {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Some(buffer)
            } else {
                None
            };

            match text {
                Some(text) => {
                    let fixer = Fixer::from_config(&config).await?;
                    AppHeadless::new(fixer).run(&text, args.json)?;
                }
                None => {
                    print!("{}", tui::theme::logo());
                    eprintln!("\x1b[2mloading models...\x1b[0m");
                    let fixer = Fixer::from_config(&config).await?;
                    App::new(fixer).run().await?;
                }
            }
        }
    }
    Ok(())
}

fn print_status(status: &[ResourceStatus]) {
    for resource in status {
        let (mark, note) = match (resource.present, resource.kind.is_required()) {
            (true, _) => ("\x1b[32m✓\x1b[0m", ""),
            (false, true) => ("\x1b[31m✗\x1b[0m", ""),
            (false, false) => ("\x1b[33m-\x1b[0m", " (optional, built-in lexicon used)"),
        };
        println!("  {} {:<32} {}{}", mark, resource.kind.name(), resource.path.display(), note);
    }
}
