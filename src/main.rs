//! Gumshoe - Main Binary
//!
//! Text-driven detective investigation game

use clap::{Parser, Subcommand, ValueEnum};
use gumshoe_rs::{
    game::{
        script::{demo_script, INTRO},
        GameSnapshot, GameState, Session, VerbosityLevel,
    },
    undo::UndoPolicy,
    Result,
};
use std::io;
use std::path::PathBuf;

/// Undo policy for the session
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UndoPolicyArg {
    /// Undo permanently unwinds history
    Rewind,
    /// Reversals are re-logged as forward moves, so repeated undo toggles
    Relog,
}

impl From<UndoPolicyArg> for UndoPolicy {
    fn from(arg: UndoPolicyArg) -> Self {
        match arg {
            UndoPolicyArg::Rewind => UndoPolicy::Rewind,
            UndoPolicyArg::Relog => UndoPolicy::Relog,
        }
    }
}

/// Verbosity level for session output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "gumshoe")]
#[command(about = "Gumshoe - Detective Investigation Game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted backyard-mystery demo
    Demo {
        /// Verbosity level for session output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Undo policy for the session
        #[arg(long, value_enum, default_value = "rewind")]
        undo_policy: UndoPolicyArg,

        /// Write a JSON snapshot of the final session state
        #[arg(long, value_name = "FILE")]
        snapshot_output: Option<PathBuf>,
    },

    /// Play interactively, one command per line on stdin
    Play {
        /// Detective name
        #[arg(long, default_value = "Detective")]
        name: String,

        /// Verbosity level for session output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Undo policy for the session
        #[arg(long, value_enum, default_value = "rewind")]
        undo_policy: UndoPolicyArg,

        /// Resume from a JSON snapshot file
        #[arg(long, value_name = "SNAPSHOT_FILE")]
        start_from: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            verbosity,
            undo_policy,
            snapshot_output,
        } => run_demo(verbosity.into(), undo_policy.into(), snapshot_output),
        Commands::Play {
            name,
            verbosity,
            undo_policy,
            start_from,
        } => run_play(name, verbosity.into(), undo_policy.into(), start_from),
    }
}

fn run_demo(
    verbosity: VerbosityLevel,
    undo_policy: UndoPolicy,
    snapshot_output: Option<PathBuf>,
) -> Result<()> {
    let mut game = GameState::with_undo_policy("Detective", undo_policy);
    game.logger.set_verbosity(verbosity);
    game.logger.minimal(INTRO);

    let summary = {
        let mut session = Session::new(&mut game);
        session.run_script(&demo_script())
    };
    game.logger
        .minimal(&format!("Overall points: {}", summary.final_points));

    if let Some(path) = snapshot_output {
        GameSnapshot::new(game.clone(), summary.commands_run).save(&path)?;
        game.logger
            .minimal(&format!("Snapshot written to {}", path.display()));
    }

    Ok(())
}

fn run_play(
    name: String,
    verbosity: VerbosityLevel,
    undo_policy: UndoPolicy,
    start_from: Option<PathBuf>,
) -> Result<()> {
    let (mut game, resumed_commands) = match start_from {
        Some(path) => {
            let snapshot = GameSnapshot::load(&path)?;
            (snapshot.game_state, snapshot.commands_run)
        }
        None => (GameState::with_undo_policy(name, undo_policy), 0),
    };
    game.logger.set_verbosity(verbosity);

    if resumed_commands > 0 {
        game.logger
            .minimal(&format!("Resumed session ({resumed_commands} commands in)"));
    } else {
        game.logger.minimal(INTRO);
    }

    let stdin = io::stdin();
    let summary = Session::new(&mut game).run_interactive(stdin.lock())?;
    game.logger
        .minimal(&format!("Overall points: {}", summary.final_points));

    Ok(())
}
