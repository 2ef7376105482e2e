use std::{cell::RefCell, rc::Rc};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use tictactoe_engine::{
    console::{self, Console, ConsolePresenter, Prompt},
    tictactoe::{
        Game,
        player::{PlayerSpec, computer::Computer, human::Human},
    },
};

/// Terminal shared by every human player and the rematch question
type SharedConsole = Rc<RefCell<Console<std::io::StdinLock<'static>, std::io::Stdout>>>;

const COMPUTER_NAME: &str = "Computer";

/// Who sits on each side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans at the same terminal
    HumanVsHuman,
    /// Human plays crosses and moves first
    HumanVsComputer,
    /// Computer plays crosses and moves first
    ComputerVsHuman,
    /// Two computers
    ComputerVsComputer,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about)]
struct Args {
    /// Game mode, asked interactively when missing
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Seed for the computer players
    #[arg(short, long)]
    seed: Option<u64>,

    /// Display name of the crosses player
    #[arg(long, default_value = "Player X")]
    cross_name: String,

    /// Display name of the noughts player
    #[arg(long, default_value = "Player O")]
    nought_name: String,

    /// Do not clear the screen between rounds
    #[arg(long)]
    no_clear: bool,

    /// Play a single round without asking for a rematch
    #[arg(long)]
    once: bool,
}

/// Interactive mode menu
fn select_mode(terminal: &mut SharedConsole) -> Result<Mode> {
    terminal.tell("Welcome player!")?;
    loop {
        let answer = terminal
            .ask("Select mode (1: two players, 2: against the computer): ")?
            .context("Input closed before a mode was selected")?;
        match answer.trim() {
            "1" => return Ok(Mode::HumanVsHuman),
            "2" => return Ok(Mode::HumanVsComputer),
            other => terminal.tell(&format!("Unknown mode {other:?}"))?,
        }
    }
}

/// Build the player specifications for one round
fn seat_players(
    args: &Args,
    mode: Mode,
    terminal: &SharedConsole,
    round: u64,
) -> [PlayerSpec; 2] {
    let computer = |offset: u64| match args.seed {
        Some(seed) => Computer::seeded(seed.wrapping_add(2 * round + offset)),
        None => Computer::new(),
    };
    let human = || Human::new(terminal.clone());

    match mode {
        Mode::HumanVsHuman => [
            PlayerSpec::new(&args.cross_name, human()),
            PlayerSpec::new(&args.nought_name, human()),
        ],
        Mode::HumanVsComputer => [
            PlayerSpec::new(&args.cross_name, human()),
            PlayerSpec::new(COMPUTER_NAME, computer(0)),
        ],
        Mode::ComputerVsHuman => [
            PlayerSpec::new(COMPUTER_NAME, computer(0)),
            PlayerSpec::new(&args.nought_name, human()),
        ],
        Mode::ComputerVsComputer => [
            PlayerSpec::new(format!("{COMPUTER_NAME} X"), computer(0)),
            PlayerSpec::new(format!("{COMPUTER_NAME} O"), computer(1)),
        ],
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    if args.cross_name == args.nought_name {
        bail!("Both players are named {:?}", args.cross_name);
    }

    let mut terminal: SharedConsole = Rc::new(RefCell::new(Console::stdio()));
    let mut presenter = ConsolePresenter::stdout();

    if !args.no_clear {
        presenter.clear_screen()?;
    }
    let mode = match args.mode {
        Some(mode) => mode,
        None => select_mode(&mut terminal)?,
    };
    log::info!("Playing {mode:?}");

    for round in 0.. {
        let [first, second] = seat_players(&args, mode, &terminal, round);
        let mut game = Game::new(first, second);
        let status = game
            .play(&mut presenter)
            .with_context(|| format!("Round {} aborted", round + 1))?;
        log::info!("Round {} finished: {status}", round + 1);

        if args.once || !console::ask_replay(&mut terminal)? {
            break;
        }
        if !args.no_clear {
            presenter.clear_screen()?;
        }
    }

    Ok(())
}
