use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move at row {row}, col {col}: cell occupied or out of range")]
    InvalidMove { row: usize, col: usize },
    #[error("no legal move: the board is full")]
    NoLegalMove,
    #[error("game is already over")]
    GameOver,
}
