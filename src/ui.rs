//! Console rendering and input.

use std::io::{self, BufRead, Write};

use crate::board::Board;

/// Line-oriented input with a prompt, so a player can be driven from a
/// scripted source instead of stdin.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Stdin-backed input for the real game.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line)
    }
}

/// Render `board` as a numbered grid. Ship glyphs are masked to open
/// water while the board is hidden; hit and water marks always show.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..n {
        out.push_str(&format!("{:>2}  ", c + 1));
    }
    out.push('\n');
    for r in 0..n {
        out.push_str(&format!("{:>2} |", r + 1));
        for c in 0..n {
            let glyph = if board.hits().get(r, c).unwrap_or(false) {
                'X'
            } else if board.misses().get(r, c).unwrap_or(false) {
                '.'
            } else if !board.hidden() && board.ship_map().get(r, c).unwrap_or(false) {
                '■'
            } else {
                'O'
            };
            out.push_str(&format!(" {} |", glyph));
        }
        out.push('\n');
    }
    out
}
