use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use clipfade::animation::{AnimationClip, ClipController, ClipRegistry, ControllerSettings};

fn registry() -> ClipRegistry {
    ClipRegistry::from_clips([
        AnimationClip::new("idle", 2.0),
        AnimationClip::new("salute", 1.5),
        AnimationClip::new("clapping", 1.2),
        AnimationClip::new("victory", 2.4),
    ])
    .expect("unique clip names")
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_controller");

    group.bench_function("tick_steady", |b| {
        let mut controller = ClipController::headless(registry(), ControllerSettings::default());
        controller.select("idle").expect("registered clip");
        controller.tick(1.0);
        b.iter(|| black_box(controller.tick(black_box(1.0 / 60.0)).len()));
    });

    group.bench_function("select_and_crossfade", |b| {
        let names = ["idle", "salute", "clapping", "victory"];
        let mut controller = ClipController::headless(registry(), ControllerSettings::default());
        let mut i = 0;
        b.iter(|| {
            controller.select(names[i % names.len()]).expect("registered clip");
            i += 1;
            for _ in 0..8 {
                black_box(controller.tick(1.0 / 60.0));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
