use criterion::{criterion_group, criterion_main, Criterion};
use perception_utils::{
    classifications_to_string, highest_prob_classification, to_label, Label, ObjectClassification,
};
use std::hint::black_box;

fn make_classifications(len: usize) -> Vec<ObjectClassification> {
    (0..len)
        .map(|i| {
            let label = Label::ALL[i % Label::COUNT];
            let probability = ((i * 37) % 101) as f64 / 100.0;
            ObjectClassification::new(label, probability)
        })
        .collect()
}

fn bench_selection(c: &mut Criterion) {
    let short = make_classifications(Label::COUNT);
    let long = make_classifications(1024);

    c.bench_function("highest_prob_classification_8", |b| {
        b.iter(|| black_box(highest_prob_classification(black_box(&short))));
    });
    c.bench_function("highest_prob_classification_1024", |b| {
        b.iter(|| black_box(highest_prob_classification(black_box(&long))));
    });
    c.bench_function("classifications_to_string_8", |b| {
        b.iter(|| black_box(classifications_to_string(black_box(&short))));
    });
}

fn bench_conversion(c: &mut Criterion) {
    c.bench_function("to_label_all_names", |b| {
        b.iter(|| {
            for label in Label::ALL {
                black_box(to_label(black_box(label.as_str())).ok());
            }
        });
    });
}

criterion_group!(benches, bench_selection, bench_conversion);
criterion_main!(benches);
