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
        building_standard_board,
        solving_memo_root,
        solving_memo_opening,
        building_full_table,
        replaying_table_openings,
}

use trigon::Arbitrary;
use trigon::HEIGHT;
use trigon::lattice::Board;
use trigon::search::Opening;
use trigon::search::Oracle;
use trigon::search::Solver;
use trigon::search::Table;

fn building_standard_board(c: &mut criterion::Criterion) {
    c.bench_function("build the standard lattice", |b| {
        b.iter(|| Board::new(HEIGHT))
    });
}

fn solving_memo_root(c: &mut criterion::Criterion) {
    let board = Board::new(HEIGHT).expect("standard lattice");
    let mut solver = Solver::new(&board);
    c.bench_function("memo solve from the empty lattice", |b| {
        b.iter(|| solver.evaluate(&Opening::new()))
    });
}

fn solving_memo_opening(c: &mut criterion::Criterion) {
    let board = Board::new(HEIGHT).expect("standard lattice");
    let mut solver = Solver::new(&board);
    c.bench_function("memo solve a random opening", |b| {
        b.iter(|| solver.evaluate(&Opening::random()))
    });
}

fn building_full_table(c: &mut criterion::Criterion) {
    let board = Board::new(HEIGHT).expect("standard lattice");
    c.bench_function("tabulate every lattice state", |b| {
        b.iter(|| Table::new(&board))
    });
}

fn replaying_table_openings(c: &mut criterion::Criterion) {
    let board = Board::new(HEIGHT).expect("standard lattice");
    let table = Table::new(&board);
    c.bench_function("replay a random opening against the table", |b| {
        b.iter(|| table.answer(&Opening::random()))
    });
}
