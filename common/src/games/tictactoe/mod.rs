mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_WIDTH, Board, CELL_COUNT};
pub use bot_controller::{BotKind, calculate_move, find_best_move, minimax};
pub use game_state::GameState;
pub use types::{FirstPlayerMode, GameStatus, Mark, WinningLine};
pub use win_detector::{
    AI_WIN_SCORE, HUMAN_WIN_SCORE, LINES, check_win, check_win_with_line, evaluate, is_terminal,
};
