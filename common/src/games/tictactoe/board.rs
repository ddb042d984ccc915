use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const BOARD_WIDTH: usize = 3;

/// The 3x3 grid, cells indexed 0-8 row by row (index = row * 3 + col).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Callers pass indices that were already range-checked.
    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }
        if self.cells[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Resets a cell to Empty, undoing a speculative placement.
    pub fn clear_cell(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    // Unchecked write for the search's mutate-then-restore discipline.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|&cell| cell == Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.has_empty_cell());
        assert!(!board.is_full());
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_mark_fills_cell() {
        let mut board = Board::new();
        board.place_mark(4, Mark::Human).unwrap();
        assert_eq!(board.get(4), Mark::Human);
        assert!(!board.available_moves().contains(&4));
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place_mark(0, Mark::Human).unwrap();
        let result = board.place_mark(0, Mark::Ai);
        assert!(result.is_err());
        assert_eq!(board.get(0), Mark::Human);
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.place_mark(CELL_COUNT, Mark::Ai).is_err());
    }

    #[test]
    fn test_place_mark_rejects_empty_mark() {
        let mut board = Board::new();
        assert!(board.place_mark(0, Mark::Empty).is_err());
    }

    #[test]
    fn test_available_moves_ascending() {
        let mut board = Board::new();
        board.place_mark(3, Mark::Human).unwrap();
        board.place_mark(7, Mark::Ai).unwrap();
        assert_eq!(board.available_moves(), vec![0, 1, 2, 4, 5, 6, 8]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            let mark = if index % 2 == 0 { Mark::Human } else { Mark::Ai };
            board.place_mark(index, mark).unwrap();
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
