// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_ripple::config::{ConfigCascadeBuilder, ConfigOrigin, RippleOptions};
use understory_ripple::containment::{center_still_in_host_area, outer_point_still_in_host_radius};
use understory_ripple::{
    AnimationStep, Animator, BorderRadius, HostElement, HostGeometry, InputKind, Layer,
    LayerFrame, PlayerId, PointerInput, PointerListeners, Ripple, RippleConfig, Scheduler,
    TimerId,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn points_around(rect: Rect, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg(seed);
    let (w, h) = (rect.width(), rect.height());
    (0..n)
        .map(|_| {
            // Spill a little past the edges so both outcomes are exercised.
            Point::new(
                rect.x0 - 0.1 * w + rng.next_f64() * 1.2 * w,
                rect.y0 - 0.1 * h + rng.next_f64() * 1.2 * h,
            )
        })
        .collect()
}

fn bench_containment(c: &mut Criterion) {
    let hosts = [
        (
            "round",
            HostGeometry::measure(
                Rect::new(100.0, 100.0, 200.0, 200.0),
                &BorderRadius::parse("50%"),
            ),
        ),
        (
            "rect",
            HostGeometry::measure(
                Rect::new(0.0, 0.0, 320.0, 48.0),
                &BorderRadius::parse("4px"),
            ),
        ),
    ];
    let mut group = c.benchmark_group("containment");
    for (name, host) in &hosts {
        let points = points_around(host.rect, 4_096, 7);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::new("center_in_area", name), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .filter(|p| center_still_in_host_area(host, **p))
                    .count()
            });
        });
        group.bench_with_input(BenchmarkId::new("outer_in_radius", name), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .filter(|p| outer_point_still_in_host_radius(host, **p, black_box(24.0)))
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_measure_and_resolve(c: &mut Criterion) {
    c.bench_function("geometry/measure", |b| {
        b.iter(|| {
            HostGeometry::measure(
                black_box(Rect::new(10.0, 20.0, 330.0, 68.0)),
                &BorderRadius::parse(black_box("8px 8px / 4px 4px")),
            )
        });
    });

    let instance = RippleOptions::from_attributes([
        ("light", ""),
        ("tapLimit", "500"),
        ("fillTransition", "450ms cubic-bezier(0.4, 0, 0.2, 1)"),
    ]);
    let global = RippleOptions {
        splash_opacity: Some(0.6),
        ..RippleOptions::default()
    };
    let cascade = ConfigCascadeBuilder::new(RippleConfig::default())
        .push(ConfigOrigin::Global, global)
        .push(ConfigOrigin::Instance, instance)
        .build();
    c.bench_function("config/resolve", |b| b.iter(|| black_box(&cascade).resolve()));
}

struct NullHost;

impl HostElement for NullHost {
    type Id = u32;
    fn id(&self) -> u32 {
        1
    }
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }
    fn computed_border_radius(&self) -> String {
        "50%".into()
    }
    fn layer_rect(&self, _: Layer) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 40.0, 40.0))
    }
    fn attribute(&self, _: &str) -> Option<String> {
        None
    }
    fn add_class(&mut self, _: &str) {}
    fn remove_class(&mut self, _: &str) {}
    fn add_listeners(&mut self, _: PointerListeners) {}
    fn remove_listeners(&mut self, _: PointerListeners) {}
    fn mount_layer(&mut self, _: Layer) {}
    fn unmount_layer(&mut self, _: Layer) {}
    fn style_layer(&mut self, _: Layer, _: &LayerFrame) {}
}

#[derive(Default)]
struct NullAnimator(u64);

impl Animator for NullAnimator {
    fn build(&mut self, _: Layer, steps: &[AnimationStep]) -> PlayerId {
        black_box(steps);
        self.0 += 1;
        PlayerId(self.0)
    }
    fn play(&mut self, _: PlayerId) {}
    fn destroy(&mut self, _: PlayerId) {}
}

#[derive(Default)]
struct NullScheduler(u64);

impl Scheduler for NullScheduler {
    fn set_timeout(&mut self, _: u64) -> TimerId {
        self.0 += 1;
        TimerId(self.0)
    }
    fn clear_timeout(&mut self, _: TimerId) {}
}

fn bench_session(c: &mut Criterion) {
    let config = RippleConfig {
        delay_event: false,
        ..RippleConfig::default()
    };
    let mut ripple = Ripple::builder()
        .host(NullHost)
        .animator(NullAnimator::default())
        .scheduler(NullScheduler::default())
        .config(config)
        .listener(|e: &understory_ripple::RippleEvent<u32>| {
            black_box(e);
        })
        .build()
        .expect("collaborators supplied");
    let path = points_around(Rect::new(60.0, 60.0, 140.0, 140.0), 32, 11);
    let mut t = 0_u64;
    c.bench_function("session/down_drag_up", |b| {
        b.iter(|| {
            t += 1_000;
            ripple.pointer_down(PointerInput::new((100.0, 100.0), InputKind::Touch, t));
            for (i, p) in path.iter().enumerate() {
                ripple.pointer_move(PointerInput::new(*p, InputKind::Touch, t + i as u64));
            }
            ripple.pointer_up(PointerInput::new((100.0, 100.0), InputKind::Touch, t + 100));
        });
    });
}

criterion_group!(
    benches,
    bench_containment,
    bench_measure_and_resolve,
    bench_session
);
criterion_main!(benches);
