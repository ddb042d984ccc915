use super::board::Board;
use super::types::{Mark, WinningLine};

pub const AI_WIN_SCORE: i32 = 10;
pub const HUMAN_WIN_SCORE: i32 = -10;

/// The 8 winning index triples: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let mark = board.get(line[0]);
        if mark == Mark::Empty {
            continue;
        }
        if board.get(line[1]) == mark && board.get(line[2]) == mark {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}

/// Score of the position: `AI_WIN_SCORE` if the AI completed a line,
/// `HUMAN_WIN_SCORE` if the human did, 0 otherwise. At most one player can
/// have a completed line on a reachable board, so scan order does not matter.
pub fn evaluate(board: &Board) -> i32 {
    match check_win(board) {
        Some(Mark::Ai) => AI_WIN_SCORE,
        Some(Mark::Human) => HUMAN_WIN_SCORE,
        _ => 0,
    }
}

pub fn is_terminal(board: &Board) -> bool {
    evaluate(board) != 0 || !board.has_empty_cell()
}
