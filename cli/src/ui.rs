use tictactoe_engine::{BOARD_SIZE, Board, GameStatus, Mark, Position};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("    1   2   3\n");
    for row in 0..BOARD_SIZE {
        out.push((b'A' + row as u8) as char);
        out.push_str(" | ");
        for col in 0..BOARD_SIZE {
            let mark = board.get(Position::new(row, col)).unwrap_or(Mark::Empty);
            out.push(mark.as_char());
            if col < BOARD_SIZE - 1 {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if row < BOARD_SIZE - 1 {
            out.push_str("  |---|---|---\n");
        }
    }
    out
}

pub fn result_message(status: GameStatus, human_mark: Mark) -> &'static str {
    match status.winner() {
        Some(mark) if mark == human_mark => "You win!",
        Some(_) => "AI wins!",
        None => "It's a draw!",
    }
}
