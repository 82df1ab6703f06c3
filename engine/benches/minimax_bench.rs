use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{
    Board, BotInput, Difficulty, GameState, GameStatus, Mark, Position, SessionRng, calculate_move,
};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_single_move_empty", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| {
            let input = BotInput::new(Board::new(), Mark::X);
            calculate_move(Difficulty::Hard, &input, &mut rng)
        });
    });
}

fn bench_minimax_midgame(c: &mut Criterion) {
    c.bench_function("minimax_single_move_midgame", |b| {
        let mut board = Board::new();
        let moves = [
            (0, 0, Mark::X),
            (1, 1, Mark::O),
            (0, 1, Mark::X),
            (0, 2, Mark::O),
        ];
        for (row, col, mark) in moves {
            board.place(Position::new(row, col), mark).unwrap();
        }
        let mut rng = SessionRng::new(42);

        b.iter(|| {
            let input = BotInput::new(board, Mark::X);
            calculate_move(Difficulty::Hard, &input, &mut rng)
        });
    });
}

fn bench_minimax_full_game(c: &mut Criterion) {
    c.bench_function("minimax_hard_vs_hard_full_game", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| {
            let mut state = GameState::new(Mark::X);
            while state.status == GameStatus::InProgress {
                let input = BotInput::from_game_state(&state);
                let pos = calculate_move(Difficulty::Hard, &input, &mut rng).unwrap();
                state.place_mark(pos).unwrap();
            }
            state.status
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_midgame,
    bench_minimax_full_game
);
criterion_main!(benches);
