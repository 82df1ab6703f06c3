use crate::board::Board;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Position};
use crate::win_detector::{check_win, evaluate};

pub const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, mark: Mark) -> Self {
        Self { board, mark }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            mark: state.current_mark,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<Position, GameError> {
    let chosen = match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => calculate_blocking_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    };
    chosen.ok_or(GameError::NoLegalMove)
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let moves = input.board.available_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

fn calculate_blocking_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let bot_mark = input.mark;
    let opponent_mark = bot_mark.opponent()?;
    let moves = input.board.available_moves();
    if moves.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(&input.board, bot_mark, &moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(&input.board, opponent_mark, &moves) {
        return Some(pos);
    }

    calculate_random_move(input, rng)
}

fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    let bot_mark = input.mark;
    let opponent_mark = bot_mark.opponent()?;
    let moves = input.board.available_moves();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in moves {
        let mut child = input.board;
        child.set(pos, bot_mark);

        let score = minimax(child, false, bot_mark, opponent_mark, i32::MIN, i32::MAX);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        let mut trial = *board;
        trial.set(pos, mark);
        if check_win(&trial) == Some(mark) {
            return Some(pos);
        }
    }
    None
}

fn minimax(
    board: Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let status = evaluate(&board);
    if let Some(winner) = status.winner() {
        // No depth term: a faster win scores the same as a slower one.
        return if winner == bot_mark {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }
    if status.is_terminal() {
        return 0;
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            let mut child = board;
            child.set(pos, bot_mark);
            let eval = minimax(child, false, bot_mark, opponent_mark, alpha, beta);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        if max_eval == i32::MIN { 0 } else { max_eval }
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            let mut child = board;
            child.set(pos, opponent_mark);
            let eval = minimax(child, true, bot_mark, opponent_mark, alpha, beta);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        if min_eval == i32::MAX { 0 } else { min_eval }
    }
}
