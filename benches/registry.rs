use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dragswap::{DragEvent, DragEventKind, DragRegistry, Element, ElementHandle};

const ELEMENT_COUNT: usize = 100;

fn seeded_elements() -> Vec<ElementHandle> {
    (0..ELEMENT_COUNT)
        .map(|i| {
            Element::new("div")
                .with_attribute("data-drag", "list")
                .with_attribute("id", format!("item-{i}"))
                .with_content(format!("content {i}"))
                .into_handle()
        })
        .collect()
}

fn bench_register(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("register", ELEMENT_COUNT),
        &ELEMENT_COUNT,
        |b, _| {
            b.iter_batched(
                seeded_elements,
                |elements| {
                    let mut registry = DragRegistry::new();
                    registry.register(black_box(elements)).expect("register");
                    registry
                },
                BatchSize::SmallInput,
            );
        },
    );
}

fn bench_full_gesture(c: &mut Criterion) {
    let elements = seeded_elements();
    let mut registry = DragRegistry::with_elements(elements.clone()).expect("register");
    let source = elements.first().expect("source").clone();
    let target = elements.last().expect("target").clone();
    c.bench_with_input(
        BenchmarkId::new("full_gesture", ELEMENT_COUNT),
        &ELEMENT_COUNT,
        |b, _| {
            b.iter(|| {
                for kind in [
                    DragEventKind::Start,
                    DragEventKind::Enter,
                    DragEventKind::Over,
                    DragEventKind::Drop,
                ] {
                    let element = match kind {
                        DragEventKind::Start => &source,
                        _ => &target,
                    };
                    let mut event = DragEvent::new(kind);
                    registry
                        .dispatch(black_box(element), &mut event)
                        .expect("dispatch");
                }
            });
        },
    );
}

criterion_group!(benches, bench_register, bench_full_gesture);
criterion_main!(benches);
