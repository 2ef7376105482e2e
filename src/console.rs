//! # Console Module
//!
//! Line oriented collaborators used around the engine.
//!
//! - [`Prompt`]: asks a question and reads one line of answer. Used by
//!   [`Human`](crate::tictactoe::player::human::Human) players and the rematch question.
//! - [`Presenter`]: renders the board and announces the outcome while
//!   [`Game::play`](crate::tictactoe::Game::play) drives the turns.

use std::{
    cell::RefCell,
    io::{self, BufRead, StdinLock, Stdout, Write},
    rc::Rc,
};

use crate::tictactoe::{
    GameStatus,
    board::{Board, InvalidMove},
    player::Player,
};

/// ANSI sequence clearing the terminal and moving the cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Input collaborator
pub trait Prompt {
    /// Show `message` and read one line.
    /// Returns `None` when the input is closed.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Show an informative line
    fn tell(&mut self, message: &str) -> io::Result<()>;
}

/// Several players may share a single terminal
impl<P: Prompt + ?Sized> Prompt for Rc<RefCell<P>> {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.borrow_mut().ask(message)
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        self.borrow_mut().tell(message)
    }
}

/// Prompt over a line reader and a writer
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }
}

/// Interpret the answer to the rematch question
pub fn wants_replay(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Ask whether another round should be played.
/// A closed input means no.
pub fn ask_replay<P: Prompt + ?Sized>(prompt: &mut P) -> io::Result<bool> {
    let answer = prompt.ask("\nWanna rematch? (\"yes\" to continue, anything else to stop): ")?;
    Ok(answer.as_deref().is_some_and(wants_replay))
}

/// Presentation collaborator
pub trait Presenter {
    /// Called before `player` is asked for a position
    fn show_turn(&mut self, board: &Board, player: &Player) -> io::Result<()>;

    /// Called when the position chosen by `player` was rejected
    fn show_rejected(&mut self, player: &Player, error: &InvalidMove) -> io::Result<()>;

    /// Called once the game reached a terminal status.
    /// `winner` is set on a victory.
    fn show_outcome(
        &mut self,
        board: &Board,
        status: GameStatus,
        winner: Option<&Player>,
    ) -> io::Result<()>;
}

/// Presenter writing the reference text rendering
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    writer: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        write!(self.writer, "{CLEAR_SCREEN}")?;
        self.writer.flush()
    }
}

impl ConsolePresenter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_turn(&mut self, board: &Board, player: &Player) -> io::Result<()> {
        writeln!(self.writer, "\n")?;
        write!(self.writer, "{board}")?;
        writeln!(self.writer, "Current player: {player}")
    }

    fn show_rejected(&mut self, _player: &Player, error: &InvalidMove) -> io::Result<()> {
        writeln!(self.writer, "{error}")
    }

    fn show_outcome(
        &mut self,
        board: &Board,
        status: GameStatus,
        winner: Option<&Player>,
    ) -> io::Result<()> {
        write!(self.writer, "{board}")?;
        writeln!(self.writer, "\nGame Over!")?;
        match (status, winner) {
            (GameStatus::Won(_), Some(player)) => writeln!(self.writer, "Winner: {player}")?,
            (GameStatus::Won(marker), None) => writeln!(self.writer, "Winner: Player {marker}")?,
            (GameStatus::Drawn, _) => writeln!(self.writer, "It's a draw!")?,
            (GameStatus::InProgress, _) => log::warn!("[Console] Outcome shown for a game in progress"),
        }
        self.writer.flush()
    }
}
