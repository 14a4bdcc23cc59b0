// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use mandelbrot::escape::evaluate;
use mandelbrot::{palette, Gradient, RenderConfig, ScanlineRenderer};
use num::Complex;

fn small_config(threads: usize) -> RenderConfig {
    RenderConfig {
        width: 64,
        height: 48,
        smoothness: 2,
        max_iterations: 400,
        threads,
        ..RenderConfig::default()
    }
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate interior point", |b| {
        b.iter(|| evaluate(Complex::new(-0.1, 0.1), 800))
    });
}

fn bench_expand(c: &mut Criterion) {
    let hippi = palette::find("Hippi").unwrap();
    c.bench_function("expand Hippi to 6000", move |b| {
        b.iter(|| Gradient::expand(hippi, 6000.0))
    });
}

fn bench_render(c: &mut Criterion) {
    let config = small_config(1);
    let gradient = mandelbrot::gradient_for(&config).unwrap();
    let single = ScanlineRenderer::new(&config).unwrap();
    c.bench_function("render 128x96 single", move |b| {
        b.iter(|| single.render_single(&gradient))
    });

    let config = small_config(RenderConfig::default().threads);
    let gradient = mandelbrot::gradient_for(&config).unwrap();
    let pooled = ScanlineRenderer::new(&config).unwrap();
    c.bench_function("render 128x96 pooled", move |b| {
        b.iter(|| pooled.render(&gradient).unwrap())
    });
}

criterion_group!(benches, bench_evaluate, bench_expand, bench_render);
criterion_main!(benches);
