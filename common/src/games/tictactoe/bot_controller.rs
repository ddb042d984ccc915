use rand::prelude::IndexedRandom;

use super::board::{Board, CELL_COUNT};
use super::types::Mark;
use super::win_detector::{AI_WIN_SCORE, HUMAN_WIN_SCORE, evaluate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotKind {
    Random,
    Minimax,
}

pub fn calculate_move(bot: BotKind, board: &Board) -> Option<usize> {
    match bot {
        BotKind::Random => calculate_random_move(board),
        BotKind::Minimax => {
            let mut scratch = board.clone();
            find_best_move(&mut scratch)
        }
    }
}

fn calculate_random_move(board: &Board) -> Option<usize> {
    let available_moves = board.available_moves();
    available_moves.choose(&mut rand::rng()).copied()
}

/// Picks the AI move with the highest minimax value, trying empty cells in
/// ascending index order. Strict comparison, so the lowest index wins ties.
/// Returns None on a full board; callers check for a terminal board first.
/// The board is restored to its input state before returning.
pub fn find_best_move(board: &mut Board) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for index in 0..CELL_COUNT {
        if board.get(index) != Mark::Empty {
            continue;
        }

        board.set(index, Mark::Ai);
        let score = minimax(board, 0, false);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exhaustive game-tree valuation. Won positions score AI_WIN_SCORE minus
/// depth (quicker wins rank higher) and lost ones HUMAN_WIN_SCORE plus depth
/// (losses get deferred as long as possible); a full board with no winner
/// is 0. Every probed cell is restored to Empty before the call returns.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    let score = evaluate(board);

    if score == AI_WIN_SCORE {
        return score - depth;
    }
    if score == HUMAN_WIN_SCORE {
        return score + depth;
    }
    if !board.has_empty_cell() {
        return 0;
    }

    if is_maximizing {
        // The win/draw base cases fire before an all-occupied loop, so
        // i32::MIN never escapes.
        let mut best = i32::MIN;
        for index in 0..CELL_COUNT {
            if board.get(index) != Mark::Empty {
                continue;
            }
            board.set(index, Mark::Ai);
            best = best.max(minimax(board, depth + 1, false));
            board.set(index, Mark::Empty);
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..CELL_COUNT {
            if board.get(index) != Mark::Empty {
                continue;
            }
            board.set(index, Mark::Human);
            best = best.min(minimax(board, depth + 1, true));
            board.set(index, Mark::Empty);
        }
        best
    }
}
