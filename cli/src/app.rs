use std::io::{self, BufRead, Write};
use std::time::Duration;

use common::games::tictactoe::{
    BOARD_WIDTH, Board, CELL_COUNT, GameState, GameStatus, Mark, calculate_move,
    check_win_with_line,
};
use common::log;

use crate::config::Config;

/// Runs one full game against the configured bot on stdin/stdout.
pub fn run_game(config: &Config) -> Result<GameStatus, String> {
    let mut state = GameState::new(config.first_player.into());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to Tic-Tac-Toe!");
    println!("You are X, the computer is O. Cells are numbered 1-9:");
    println!("{}", format_board(&state.board));

    while state.status == GameStatus::InProgress {
        if state.current_mark == Mark::Human {
            let index = prompt_human_move(&mut input, &state.board)?;
            state.place_mark(index)?;
        } else {
            println!("\nAI is making its move...");
            if config.ai_move_delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(config.ai_move_delay_ms as u64));
            }

            let index = calculate_move(config.bot.into(), &state.board)
                .ok_or_else(|| "Bot failed to produce a move".to_string())?;
            state.place_mark(index)?;
            log!("AI placed at cell {}", index + 1);
        }

        println!("{}", format_board(&state.board));
    }

    announce_result(&state, config);
    Ok(state.status)
}

/// Keeps prompting until the human enters a number 1-9 that points at an
/// empty cell. Bad input is never fatal.
fn prompt_human_move(input: &mut impl BufRead, board: &Board) -> Result<usize, String> {
    loop {
        print!("\nEnter your move (1-9): ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let mut line = String::new();
        let bytes_read = input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if bytes_read == 0 {
            return Err("Input stream closed".to_string());
        }

        let cell: usize = match line.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                println!("Please enter a number between 1 and 9.");
                continue;
            }
        };

        if cell < 1 || cell > CELL_COUNT {
            println!("Please enter a number between 1 and 9.");
            continue;
        }

        let index = cell - 1;
        if board.get(index) != Mark::Empty {
            println!("That cell is already taken.");
            continue;
        }

        return Ok(index);
    }
}

fn announce_result(state: &GameState, config: &Config) {
    match state.status {
        GameStatus::AiWon => println!("\nAI wins!"),
        GameStatus::HumanWon => println!("\nYou win!"),
        GameStatus::Draw => println!("\nIt's a draw!"),
        GameStatus::InProgress => unreachable!(),
    }

    if config.highlight_winning_line
        && let Some(line) = check_win_with_line(&state.board)
    {
        let cells: Vec<String> = line.cells.iter().map(|&i| (i + 1).to_string()).collect();
        println!("Winning line: cells {}", cells.join(", "));
    }
}

/// Renders the grid the way the prompt numbers it: empty cells show their
/// 1-based number, marked ones show X or O.
fn format_board(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_WIDTH {
        out.push('|');
        for col in 0..BOARD_WIDTH {
            let index = row * BOARD_WIDTH + col;
            let symbol = match board.get(index) {
                Mark::Human => "X".to_string(),
                Mark::Ai => "O".to_string(),
                Mark::Empty => (index + 1).to_string(),
            };
            out.push_str(&format!(" {} |", symbol));
        }
        if row + 1 < BOARD_WIDTH {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_board_shows_numbers() {
        let board = Board::new();
        let expected = "| 1 | 2 | 3 |\n| 4 | 5 | 6 |\n| 7 | 8 | 9 |";
        assert_eq!(format_board(&board), expected);
    }

    #[test]
    fn test_format_board_shows_marks() {
        let mut board = Board::new();
        board.place_mark(0, Mark::Human).unwrap();
        board.place_mark(4, Mark::Ai).unwrap();
        let expected = "| X | 2 | 3 |\n| 4 | O | 6 |\n| 7 | 8 | 9 |";
        assert_eq!(format_board(&board), expected);
    }

    #[test]
    fn test_prompt_skips_invalid_input() {
        let mut board = Board::new();
        board.place_mark(0, Mark::Human).unwrap();

        // Non-numeric, out of range, occupied, then a valid move.
        let mut input = "abc\n12\n1\n5\n".as_bytes();
        let index = prompt_human_move(&mut input, &board).unwrap();
        assert_eq!(index, 4);
    }

    #[test]
    fn test_prompt_errors_on_closed_input() {
        let board = Board::new();
        let mut input = "".as_bytes();
        assert!(prompt_human_move(&mut input, &board).is_err());
    }
}
