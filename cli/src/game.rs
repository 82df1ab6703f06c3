use std::io::{BufRead, Write};

use crate::config::FirstPlayer;
use crate::input::parse_cell;
use crate::ui;
use tictactoe_engine::{
    BotInput, Difficulty, GameState, GameStatus, Mark, Position, SessionRng, calculate_move,
};

pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

pub fn run(
    difficulty: Difficulty,
    first_player: FirstPlayer,
    rng: &mut SessionRng,
    input: &mut impl BufRead,
) -> Result<GameStatus, String> {
    let first_mark = match first_player {
        FirstPlayer::Human => HUMAN_MARK,
        FirstPlayer::Bot => BOT_MARK,
        FirstPlayer::Random => {
            if rng.random_bool() {
                HUMAN_MARK
            } else {
                BOT_MARK
            }
        }
    };

    let mut state = GameState::new(first_mark);
    println!("{}", ui::render_board(&state.board));

    while state.status == GameStatus::InProgress {
        let pos = if state.current_mark == HUMAN_MARK {
            prompt_for_move(&state, input)?
        } else {
            println!("AI is thinking...");
            let bot_input = BotInput::from_game_state(&state);
            calculate_move(difficulty, &bot_input, rng).map_err(|e| e.to_string())?
        };

        state.place_mark(pos).map_err(|e| e.to_string())?;
        println!("{}", ui::render_board(&state.board));
    }

    println!("{}", ui::result_message(state.status, HUMAN_MARK));
    Ok(state.status)
}

fn prompt_for_move(state: &GameState, input: &mut impl BufRead) -> Result<Position, String> {
    loop {
        print!("Your move (e.g., A1, B3): ");
        std::io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("Input ended before the game finished".to_string());
        }

        match parse_cell(&line) {
            Ok(pos) if state.board.is_empty(pos) => return Ok(pos),
            Ok(_) => println!("Cell taken. Try again."),
            Err(message) => println!("{}", message),
        }
    }
}
