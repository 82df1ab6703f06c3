use crate::board::Board;
use crate::error::GameError;
use crate::types::{GameStatus, Mark, Position};
use crate::win_detector::evaluate;

#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new(first_mark: Mark) -> Self {
        if first_mark == Mark::Empty {
            panic!("a game must start with X or O to move");
        }

        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        self.board.place(pos, self.current_mark)?;
        self.last_move = Some(pos);

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
