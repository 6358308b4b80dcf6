use criterion::{black_box, criterion_group, criterion_main, Criterion};
use console_tetris::core::{Board, GameSnapshot, GameState, PieceBag};
use console_tetris::term::{FrameBuffer, GameView, Viewport};
use console_tetris::types::{GameAction, PieceKind, RotateDir};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut now_ms = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now_ms += 16;
            if state.game_over() {
                state = GameState::new(12345);
                now_ms = 0;
            }
            state.tick(black_box(now_ms));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_bag_draw(c: &mut Criterion) {
    let mut bag = PieceBag::new(12345);

    c.bench_function("bag_next_piece", |b| b.iter(|| black_box(bag.next_piece())));
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !state.move_horizontal(1) {
                while state.move_horizontal(-1) {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| state.rotate(black_box(RotateDir::Clockwise)))
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_to_top_out", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            while !state.game_over() {
                state.apply_action(GameAction::HardDrop);
            }
            state.score()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for _ in 0..5 {
        state.hard_drop();
    }
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_bag_draw,
    bench_move,
    bench_rotate,
    bench_hard_drop_game,
    bench_render
);
criterion_main!(benches);
