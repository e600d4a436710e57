criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        firing_classic_laser,
        listing_classic_legal_moves,
        playing_classic_turn,
        parsing_classic_layout,
}

fn firing_classic_laser(c: &mut criterion::Criterion) {
    let board = Layout::classic().board();
    c.bench_function("fire Blue laser across the classic board", |b| {
        b.iter(|| fire(Allegiance::Blue, &board))
    });
}

fn listing_classic_legal_moves(c: &mut criterion::Criterion) {
    let board = Layout::classic().board();
    c.bench_function("list every legal Red move", |b| {
        b.iter(|| board.legal(Allegiance::Red))
    });
}

fn playing_classic_turn(c: &mut criterion::Criterion) {
    let board = Layout::classic().board();
    let mv = board.legal(Allegiance::Red)[0];
    c.bench_function("play one full turn", |b| {
        b.iter(|| Game::new(board.clone()).play(mv))
    });
}

fn parsing_classic_layout(c: &mut criterion::Criterion) {
    c.bench_function("parse the classic layout", |b| b.iter(Layout::classic));
}

use laserchess::board::*;
use laserchess::layout::*;
use laserchess::rules::*;
