use crate::board::Board;
use crate::types::{BOARD_SIZE, GameStatus, Mark, Position};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_rows(board)
        .or_else(|| check_columns(board))
        .or_else(|| check_diagonals(board))
}

pub fn evaluate(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        _ => {
            if board.is_full() {
                GameStatus::Draw
            } else {
                GameStatus::InProgress
            }
        }
    }
}

fn check_rows(board: &Board) -> Option<Mark> {
    for row in 0..BOARD_SIZE {
        if let Some(mark) = line_winner(
            board,
            Position::new(row, 0),
            Position::new(row, 1),
            Position::new(row, 2),
        ) {
            return Some(mark);
        }
    }
    None
}

fn check_columns(board: &Board) -> Option<Mark> {
    for col in 0..BOARD_SIZE {
        if let Some(mark) = line_winner(
            board,
            Position::new(0, col),
            Position::new(1, col),
            Position::new(2, col),
        ) {
            return Some(mark);
        }
    }
    None
}

fn check_diagonals(board: &Board) -> Option<Mark> {
    line_winner(
        board,
        Position::new(0, 0),
        Position::new(1, 1),
        Position::new(2, 2),
    )
    .or_else(|| {
        line_winner(
            board,
            Position::new(0, 2),
            Position::new(1, 1),
            Position::new(2, 0),
        )
    })
}

fn line_winner(board: &Board, first: Position, second: Position, third: Position) -> Option<Mark> {
    let mark = board.get(first)?;
    if mark == Mark::Empty {
        return None;
    }
    if board.get(second) == Some(mark) && board.get(third) == Some(mark) {
        Some(mark)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_row_win_is_detected() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);

        assert_eq!(check_win(&board), Some(X));
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_bottom_row_win_is_detected() {
        let board = Board::from_rows([[X, X, E], [E, X, E], [O, O, O]]);

        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_column_win_is_detected() {
        let board = Board::from_rows([[X, O, E], [X, O, E], [E, O, X]]);

        assert_eq!(check_win(&board), Some(O));
        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_main_diagonal_win_is_detected() {
        let board = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);

        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_anti_diagonal_win_is_detected() {
        let board = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);

        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_partial_board_without_line_is_in_progress() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);

        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_on_full_board_is_not_a_draw() {
        let board = Board::from_rows([[X, O, O], [O, X, X], [O, X, X]]);

        assert_eq!(evaluate(&board), GameStatus::XWon);
    }
}
