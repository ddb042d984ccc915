use rand::Rng;

use super::board::Board;
use super::types::{FirstPlayerMode, GameStatus, Mark};
use super::win_detector::check_win;

/// One game of human-versus-AI tic-tac-toe. The board is the only mutable
/// state; status is recomputed after every applied move and terminal
/// statuses absorb (no further moves are accepted).
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(first_player_mode: FirstPlayerMode) -> Self {
        let first_mark = match first_player_mode {
            FirstPlayerMode::Human => Mark::Human,
            FirstPlayerMode::Ai => Mark::Ai,
            FirstPlayerMode::Random => {
                if rand::rng().random() {
                    Mark::Human
                } else {
                    Mark::Ai
                }
            }
        };

        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        self.board.place_mark(index, self.current_mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::Human => Mark::Ai,
            Mark::Ai => Mark::Human,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::Human => GameStatus::HumanWon,
                Mark::Ai => GameStatus::AiWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
