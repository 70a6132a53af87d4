use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dialstate::{ParsedNumber, PHONE_NUMBER_UTIL};

type TestEntity = (&'static str, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "US"),
        ("+1 650 253 0000 ext. 1234", "US"),
        ("+44 20 8765 4321", "GB"),
        ("020 8765 4321", "GB"),
        ("+49 89 1234567", "DE"),
        ("01 45 67 89 01", "FR"),
        ("02 12345678", "IT"),
        ("12345", "DE"),
    ]
}

fn convert_to_parsed_numbers(numbers: &[TestEntity]) -> Vec<ParsedNumber> {
    numbers
        .iter()
        .map(|s| PHONE_NUMBER_UTIL.parse(s.0, s.1, None).unwrap())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = convert_to_parsed_numbers(&setup_numbers());

    let mut group = c.benchmark_group("Formatting");

    let mut test = |style: &'static str, partial: bool| {
        group.bench_function(format!("format({style}, partial: {partial})"), |b| {
            b.iter(|| {
                for number in &numbers {
                    PHONE_NUMBER_UTIL.format(black_box(number), black_box(style), black_box(partial));
                }
            })
        });
    };

    test("default", false);
    test("default", true);
    test("dashes", false);

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
