//! Screen presenter benchmark: measure line-diff flush performance.
//!
//! Target: < 200µs for a full 200×50 redraw, near-zero for an identical
//! frame.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use redraft::{Line, Rgb, Screen, Style};

/// Build a frame of styled text rows; the seed varies content.
fn text_frame(width: u16, height: u16, seed: usize) -> Vec<Line> {
    let accent = Style::PLAIN.with_fg(Rgb::from_u32(0x9333EA));
    (0..height as usize)
        .map(|row| {
            let mut line = Line::new();
            let mut column = 0usize;
            let mut word = 0usize;
            while column < width as usize {
                let text = format!("w{}", (row * 31 + word * 7 + seed) % 997);
                if word % 5 == 0 {
                    line.push_styled(text.clone(), accent);
                } else {
                    line.push_plain(text.clone());
                }
                line.push_plain(" ");
                column += text.len() + 1;
                word += 1;
            }
            line
        })
        .collect()
}

fn present_first_frame(c: &mut Criterion) {
    let frame = text_frame(80, 24, 0);

    c.bench_function("present_80x24_first", |b| {
        b.iter(|| {
            let mut screen = Screen::new(80, 24);
            let mut out = Vec::with_capacity(16384);
            screen.present(black_box(&frame), &mut out)
        })
    });
}

fn present_identical_frame(c: &mut Criterion) {
    let frame = text_frame(200, 50, 0);
    let mut screen = Screen::new(200, 50);
    let mut warm = Vec::with_capacity(65536);
    screen
        .present(&frame, &mut warm)
        .expect("vec writer is infallible");

    c.bench_function("present_200x50_identical", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64);
            screen.present(black_box(&frame), &mut out)
        })
    });
}

fn present_single_row_change(c: &mut Criterion) {
    let frame_a = text_frame(200, 50, 0);
    let mut frame_b = frame_a.clone();
    frame_b[25] = {
        let mut line = Line::new();
        line.push_plain("a single changed row");
        line
    };

    let mut screen = Screen::new(200, 50);
    let mut warm = Vec::with_capacity(65536);
    screen
        .present(&frame_a, &mut warm)
        .expect("vec writer is infallible");

    // Alternate frames so every iteration redraws exactly one row.
    let mut flip = false;
    c.bench_function("present_200x50_single_row", |b| {
        b.iter(|| {
            flip = !flip;
            let frame = if flip { &frame_b } else { &frame_a };
            let mut out = Vec::with_capacity(4096);
            screen.present(black_box(frame), &mut out)
        })
    });
}

fn present_full_change(c: &mut Criterion) {
    let frame_a = text_frame(200, 50, 0);
    let frame_b = text_frame(200, 50, 1);

    let mut screen = Screen::new(200, 50);
    let mut warm = Vec::with_capacity(65536);
    screen
        .present(&frame_a, &mut warm)
        .expect("vec writer is infallible");

    let mut flip = false;
    c.bench_function("present_200x50_full_change", |b| {
        b.iter(|| {
            flip = !flip;
            let frame = if flip { &frame_b } else { &frame_a };
            let mut out = Vec::with_capacity(65536);
            screen.present(black_box(frame), &mut out)
        })
    });
}

fn present_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("present_by_size");

    for (width, height) in [(80u16, 24u16), (120, 40), (200, 50)] {
        let frame_a = text_frame(width, height, 0);
        let frame_b = text_frame(width, height, 1);
        let mut screen = Screen::new(width, height);
        let mut warm = Vec::with_capacity(65536);
        screen
            .present(&frame_a, &mut warm)
            .expect("vec writer is infallible");

        let mut flip = false;
        group.bench_with_input(
            BenchmarkId::new("full_change", format!("{width}x{height}")),
            &(frame_a, frame_b),
            |b, (fa, fb)| {
                b.iter(|| {
                    flip = !flip;
                    let frame = if flip { fb } else { fa };
                    let mut out = Vec::with_capacity(65536);
                    screen.present(black_box(frame), &mut out)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    present_first_frame,
    present_identical_frame,
    present_single_row_change,
    present_full_change,
    present_by_size,
);
criterion_main!(benches);
