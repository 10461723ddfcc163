// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use understory_board::{Board, BoardOperations, BoardOptions};
use understory_pan_area::{PanBounds, StaticMeasurements, WheelInput};

const SIZES: StaticMeasurements = StaticMeasurements {
    screen: Size::new(1920.0, 1080.0),
    natural_content: Size::new(4000.0, 3000.0),
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn point(&mut self) -> Point {
        Point::new(
            self.next_f64() * SIZES.screen.width,
            self.next_f64() * SIZES.screen.height,
        )
    }
}

fn fitted_board() -> Board {
    let mut board = Board::new(BoardOptions::default().with_anchor_zoom_on_cursor(true));
    board.mount(0);
    board.poll(100, &SIZES);
    board.reset_to_native();
    board
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_area/bounds");
    let mut rng = Lcg(7);
    let offsets: Vec<Vec2> = (0..1_024)
        .map(|_| rng.point().to_vec2() * 4.0 - Vec2::new(4_000.0, 2_000.0))
        .collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("compute_and_correct", |b| {
        b.iter(|| {
            for (i, offset) in offsets.iter().enumerate() {
                let scale = 0.25 + (i % 16) as f64 * 0.25;
                let bounds = PanBounds::compute(scale, SIZES.natural_content, SIZES.screen);
                black_box(bounds.correction(*offset));
            }
        });
    });

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/drag");

    // Each drag step round-trips through the area: clamp, reduce, push back.
    for steps in [64usize, 512, 4_096] {
        let mut rng = Lcg(42);
        let path: Vec<Point> = (0..steps).map(|_| rng.point()).collect();
        group.throughput(Throughput::Elements(steps as u64));

        group.bench_with_input(BenchmarkId::from_parameter(steps), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut board = fitted_board();
                    board.toggle_drag_mode();
                    board
                },
                |mut board| {
                    board.pointer_down(path[0], 200);
                    for (i, pos) in path.iter().enumerate() {
                        board.pointer_move(*pos, 200 + i as u64);
                    }
                    board.pointer_up(200 + steps as u64);
                    black_box(board);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/wheel_zoom");

    for events in [64usize, 512] {
        let mut rng = Lcg(3);
        let inputs: Vec<WheelInput> = (0..events)
            .map(|i| {
                let dy = if i % 2 == 0 { 40.0 } else { -35.0 };
                WheelInput::new(rng.point(), Vec2::new(0.0, dy))
            })
            .collect();
        group.throughput(Throughput::Elements(events as u64));

        group.bench_with_input(BenchmarkId::from_parameter(events), &inputs, |b, inputs| {
            b.iter_batched(
                || {
                    let mut board = fitted_board();
                    board.toggle_zoom_mode();
                    board
                },
                |mut board| {
                    for (i, input) in inputs.iter().enumerate() {
                        board.wheel(input, 200 + i as u64);
                    }
                    black_box(board.minimap());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bounds, bench_drag, bench_wheel_zoom);
criterion_main!(benches);
