//! Tic-tac-toe GUI
//!
//! A graphical interface for two players sharing one screen.

use std::path::PathBuf;

use clap::Parser;
use tictactoe::config::AppConfig;
use tictactoe::ui::TicTacToeApp;

#[derive(Debug, Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Default name for the X player
    #[arg(long)]
    player1: Option<String>,

    /// Default name for the O player
    #[arg(long)]
    player2: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tictactoe::logging::init();
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(name) = args.player1 {
        config.players.first = name;
    }
    if let Some(name) = args.player2 {
        config.players.second = name;
    }
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run GUI: {e}"))
}
