mod app;
mod commands;
mod render;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arcana", about = "Magic card deck playground", version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Draw freshly generated cards and show them
    Draw {
        /// Title for the first drawn card (generated if absent)
        title: Option<String>,

        /// Number of cards to draw
        #[arg(long, default_value = "1")]
        count: usize,

        /// Show the cards face down
        #[arg(long)]
        flipped: bool,
    },

    /// Interactive deck session
    Session {
        /// Deal this many cards before the first prompt
        #[arg(long, default_value = "3")]
        cards: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    match cli.command {
        Command::Draw {
            title,
            count,
            flipped,
        } => {
            let mut app = app::App::new();
            commands::draw::run(&mut app, count, title.as_deref(), flipped, &cli.format, use_color)?;
        }
        Command::Session { cards } => {
            let mut app = app::App::new();
            commands::session::run(&mut app, cards, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
