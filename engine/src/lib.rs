mod board;
mod bot_controller;
mod error;
mod game_state;
pub mod logger;
mod session_rng;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, WIN_SCORE, calculate_move};
pub use error::GameError;
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{BOARD_SIZE, Difficulty, GameStatus, Mark, Position};
pub use win_detector::{check_win, evaluate};
