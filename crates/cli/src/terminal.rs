// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use log::warn;
use rand::rngs::StdRng;
use std::io;
use tokio::sync::mpsc;

use memory_core::{Config, GameSession, HandId, SessionState, TableCard, Visibility};

use crate::timer::TokioScheduler;

/// Width of a card cell on screen.
const CELL_WIDTH: u16 = 5;
/// First screen row of the cards grid.
const GRID_ROW: u16 = 2;

/// A cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// A player command read from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Move),
    Select,
    Flip,
    NewGame,
    Quit,
}

impl Command {
    fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let cmd = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Command::Move(Move::Left),
            KeyCode::Right | KeyCode::Char('l') => Command::Move(Move::Right),
            KeyCode::Up | KeyCode::Char('k') => Command::Move(Move::Up),
            KeyCode::Down | KeyCode::Char('j') => Command::Move(Move::Down),
            KeyCode::Char(' ') => Command::Select,
            KeyCode::Enter | KeyCode::Char('f') => Command::Flip,
            KeyCode::Char('n') => Command::NewGame,
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            _ => return None,
        };

        Some(cmd)
    }
}

/// The cards grid layout and cursor.
#[derive(Debug)]
struct Board {
    num_cards: usize,
    cols: usize,
    cursor: usize,
}

impl Board {
    /// Creates a square-ish board for `num_cards` cards.
    fn new(num_cards: usize) -> Self {
        let cols = (num_cards as f64).sqrt().ceil() as usize;
        Self {
            num_cards,
            cols: cols.max(1),
            cursor: 0,
        }
    }

    fn rows(&self) -> usize {
        self.num_cards.div_ceil(self.cols)
    }

    /// The screen column and row of the card at `index`.
    fn position(&self, index: usize) -> (u16, u16) {
        let col = (index % self.cols) as u16 * CELL_WIDTH;
        let row = GRID_ROW + (index / self.cols) as u16;
        (col, row)
    }

    /// Moves the cursor, moves that leave the grid are ignored.
    fn move_cursor(&mut self, mv: Move) {
        let (col, row) = (self.cursor % self.cols, self.cursor / self.cols);
        let target = match mv {
            Move::Left if col > 0 => self.cursor - 1,
            Move::Right if col + 1 < self.cols => self.cursor + 1,
            Move::Up if row > 0 => self.cursor - self.cols,
            Move::Down => self.cursor + self.cols,
            _ => self.cursor,
        };

        if target < self.num_cards {
            self.cursor = target;
        }
    }
}

/// Runs the terminal game loop.
pub async fn run(config: Config, rng: StdRng) -> Result<()> {
    let (fired_tx, fired_rx) = mpsc::channel(16);
    let session = GameSession::with_rng(config, TokioScheduler::new(fired_tx), rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = play(session, fired_rx, &mut stdout).await;

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

async fn play(
    mut session: GameSession<TokioScheduler>,
    mut fired_rx: mpsc::Receiver<HandId>,
    stdout: &mut io::Stdout,
) -> Result<()> {
    let mut board = Board::new(session.config().num_cards());
    let mut message = String::new();

    session.start()?;
    print_board(stdout, &session, &board, &message)?;

    let mut reader = EventStream::new();
    loop {
        tokio::select! {
            // The memorization timer has fired.
            Some(hand) = fired_rx.recv() => {
                session.conceal(hand)?;
            },
            // We have received an event from the terminal.
            res = reader.next() => {
                let Some(event) = res else {
                    break;
                };

                let Event::Key(key) = event? else {
                    continue;
                };

                match Command::from_key(key) {
                    Some(Command::Quit) => break,
                    Some(Command::NewGame) => {
                        session.start()?;
                        board.cursor = 0;
                        message.clear();
                    }
                    Some(Command::Move(mv)) => board.move_cursor(mv),
                    Some(Command::Select) => {
                        session.toggle_select(board.cursor)?;
                    }
                    Some(Command::Flip) => {
                        message = flip_selection(&mut session);
                    }
                    None => continue,
                }
            },
        };

        print_board(stdout, &session, &board, &message)?;
    }

    Ok(())
}

fn flip_selection(session: &mut GameSession<TokioScheduler>) -> String {
    if session.selection().is_empty() {
        return "Select some cards first".to_string();
    }

    match session.evaluate_selection() {
        Ok(points) if session.is_finished() => {
            let scores = session.scores();
            let outcome = if scores.player < scores.benchmark {
                "you beat the goal!"
            } else {
                "the goal wins this time."
            };
            format!("+{points} points, all cards flipped, {outcome}")
        }
        Ok(points) => format!("+{points} points"),
        Err(e) => {
            warn!("Evaluation failed: {e}");
            e.to_string()
        }
    }
}

fn print_board(
    w: &mut impl io::Write,
    session: &GameSession<TokioScheduler>,
    board: &Board,
    message: &str,
) -> Result<()> {
    queue!(w, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let status = match session.state() {
        SessionState::Memorizing | SessionState::Dealt => "Memorizing Time!".to_string(),
        _ => session.scores().to_string(),
    };
    queue!(w, style::PrintStyledContent(status.as_str().bold()))?;

    for (index, card) in session.cards().iter().enumerate() {
        let (col, row) = board.position(index);
        queue!(w, cursor::MoveTo(col, row))?;
        print_card(w, card, index == board.cursor)?;
    }

    let footer = GRID_ROW + board.rows() as u16 + 1;
    queue!(
        w,
        cursor::MoveTo(0, footer),
        style::PrintStyledContent(message.dark_green()),
        cursor::MoveTo(0, footer + 2),
        style::PrintStyledContent(
            "arrows move  space select  enter flip  n new game  q quit".dark_grey()
        )
    )?;

    w.flush()?;

    Ok(())
}

fn print_card(w: &mut impl io::Write, card: &TableCard, has_cursor: bool) -> Result<()> {
    let face = if card.is_shown() {
        card.card().to_string()
    } else {
        "▒▒".to_string()
    };

    let text = if has_cursor {
        format!("[{face}]")
    } else {
        format!(" {face} ")
    };

    let styled = match card.visibility() {
        Visibility::Revealed => text.as_str().yellow(),
        Visibility::Locked => text.as_str().dark_grey(),
        Visibility::FaceDown if card.is_selected() => text.as_str().reverse(),
        Visibility::FaceDown => text.as_str().white(),
    };

    queue!(w, style::PrintStyledContent(styled))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn board_layout() {
        let board = Board::new(30);
        assert_eq!(board.cols, 6);
        assert_eq!(board.rows(), 5);
        assert_eq!(board.position(0), (0, GRID_ROW));
        assert_eq!(board.position(7), (CELL_WIDTH, GRID_ROW + 1));

        let board = Board::new(5);
        assert_eq!(board.cols, 3);
        assert_eq!(board.rows(), 2);
    }

    #[test]
    fn cursor_stays_on_cards() {
        // 3 columns, the last row has cards 3 and 4.
        let mut board = Board::new(5);

        board.move_cursor(Move::Left);
        board.move_cursor(Move::Up);
        assert_eq!(board.cursor, 0);

        board.move_cursor(Move::Right);
        board.move_cursor(Move::Right);
        board.move_cursor(Move::Right);
        assert_eq!(board.cursor, 2);

        // No card below the last column.
        board.move_cursor(Move::Down);
        assert_eq!(board.cursor, 2);

        board.move_cursor(Move::Left);
        board.move_cursor(Move::Down);
        assert_eq!(board.cursor, 4);
        board.move_cursor(Move::Up);
        assert_eq!(board.cursor, 1);
    }

    #[test]
    fn key_commands() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            Command::from_key(key(KeyCode::Char(' '))),
            Some(Command::Select)
        );
        assert_eq!(Command::from_key(key(KeyCode::Enter)), Some(Command::Flip));
        assert_eq!(
            Command::from_key(key(KeyCode::Char('j'))),
            Some(Command::Move(Move::Down))
        );
        assert_eq!(Command::from_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Char('x'))), None);

        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(Command::from_key(release), None);
    }
}
