use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wiremesh::bench::{draw_edges, draw_line, Frame, Pixel};
use wiremesh::shapes;
use wiremesh::EdgeList;

const FRAME_WIDTH: u32 = 800;
const FRAME_HEIGHT: u32 = 600;

fn benchmark_single_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_line");

    // One segment per octant branch, plus the vertical fall-through cases.
    let segments = [
        ("octant1_shallow", (10, 10, 700, 200)),
        ("octant2_steep", (10, 10, 200, 580)),
        ("octant8_shallow_down", (10, 580, 700, 400)),
        ("octant7_steep_down", (10, 580, 200, 10)),
        ("vertical", (400, 10, 400, 580)),
        ("horizontal", (10, 300, 780, 300)),
    ];

    for (name, seg) in segments {
        group.bench_with_input(BenchmarkId::from_parameter(name), &seg, |b, &(x1, y1, x2, y2)| {
            let mut frame = Frame::new(FRAME_WIDTH, FRAME_HEIGHT);
            b.iter(|| {
                draw_line(
                    &mut frame,
                    Pixel::WHITE,
                    black_box(x1),
                    black_box(y1),
                    black_box(x2),
                    black_box(y2),
                );
            });
        });
    }

    group.finish();
}

fn benchmark_edge_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_list");

    let mut cube = EdgeList::new();
    shapes::add_cube(&mut cube, 200.0, 400.0, 0.0, 300.0, 300.0, 300.0);

    let mut circle = EdgeList::new();
    shapes::circle(
        &mut circle,
        400.0,
        300.0,
        0.0,
        250.0,
        2.0 * std::f32::consts::PI,
    );

    group.bench_function("cube_12_edges", |b| {
        let mut frame = Frame::new(FRAME_WIDTH, FRAME_HEIGHT);
        b.iter(|| draw_edges(&mut frame, black_box(&cube), Pixel::WHITE));
    });

    group.bench_function("circle_100_edges", |b| {
        let mut frame = Frame::new(FRAME_WIDTH, FRAME_HEIGHT);
        b.iter(|| draw_edges(&mut frame, black_box(&circle), Pixel::WHITE));
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_line, benchmark_edge_list);
criterion_main!(benches);
