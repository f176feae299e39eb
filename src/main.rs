mod common;
mod desktop;
mod layout;
mod theme;
mod ui;
mod welcome;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::ui::prelude::*;

/// mintwelcome main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit machine-readable JSON events
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show release and desktop information
    Info,

    /// Open a documentation or community resource
    Open {
        #[arg(value_enum)]
        resource: welcome::Resource,
    },

    /// Control whether the welcome dialog shows on login
    Autostart {
        #[command(subcommand)]
        command: welcome::AutostartCommands,
    },

    /// Appearance: accent color and dark mode
    Theme {
        #[command(subcommand)]
        command: theme::ThemeCommands,
    },

    /// Panel layout presets
    Layout {
        #[command(subcommand)]
        command: layout::LayoutCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    ui::set_debug_mode(cli.debug);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    ui::init(format, true);

    if let Err(err) = run(cli) {
        emit(
            Level::Error,
            "mintwelcome.error",
            &format!("{} {err:#}", char::from(NerdFont::Cross)),
            None,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info => welcome::handle_info_command(),
        Commands::Open { resource } => welcome::handle_open_command(resource),
        Commands::Autostart { command } => welcome::dispatch_autostart_command(command),
        Commands::Theme { command } => theme::dispatch_theme_command(command),
        Commands::Layout { command } => layout::dispatch_layout_command(command),
    }
}
