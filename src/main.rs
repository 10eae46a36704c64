use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use rotate_connect_four::config::AppConfig;
use rotate_connect_four::game::{read_move, Board, Game, GameOutcome, Player};

/// Play rotating Connect Four from a board file.
#[derive(Debug, Parser)]
#[command(name = "rotate-connect-four", version, about = "Play Connect Four with row rotation")]
struct Cli {
    /// Board file to start from
    #[arg(value_name = "BOARD", required_unless_present = "print_config")]
    board: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the file the board is written to after each move
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }
    let board_path = cli.board.context("no board file given")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(output) = cli.output {
        config.game.output_path = output;
    }

    let text = fs::read_to_string(&board_path)
        .with_context(|| format!("reading board from {}", board_path.display()))?;
    let mut game = Game::from_text(&text)
        .with_context(|| format!("invalid board in {}", board_path.display()))?;
    info!(
        "loaded {}x{} board from {}",
        game.board().rows(),
        game.board().cols(),
        board_path.display()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    game.board().write_to(&mut out)?;

    while game.outcome().is_none() {
        let mv = loop {
            let mv = read_move(game.board(), &mut input, &mut out, config.input.max_line_len)?;
            if game.is_legal(mv) {
                break mv;
            }
        };
        game.play(mv)?;
        save_board(game.board(), &config.game.output_path)?;
        if config.game.show_board {
            game.board().write_to(&mut out)?;
        }
    }

    match game.outcome() {
        Some(GameOutcome::Winner(Player::X)) => writeln!(out, "Player x has won")?,
        Some(GameOutcome::Winner(Player::O)) => writeln!(out, "Player o has won")?,
        Some(GameOutcome::Draw) => writeln!(out, "Draw")?,
        None => {}
    }
    info!("game finished after {} moves", game.turns());
    Ok(())
}

fn save_board(board: &Board, path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = io::BufWriter::new(file);
    board
        .write_to(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing board to {}", path.display()))
}
