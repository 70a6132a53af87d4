use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialstate::{NormalizeOptions, PHONE_NUMBER_UTIL};

// (number, locale)
type TestEntity = (&'static str, &'static str);

/// A mix of national, international and prefixed numbers, so one run
/// touches every shipped region and most handlers.
fn setup_parsing_data() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "en-US"),
        ("1 650 253 0000", "en-US"),
        ("*67 650 555 1212", "en-US"),
        ("011 49 89 1234567", "en-US"),
        ("+44 20 8765 4321", "en-GB"),
        ("020 8765 4321", "en-GB"),
        ("089 1234-56", "de-DE"),
        ("0151 12345678", "de-DE"),
        ("01 45 67 89 01", "fr-FR"),
        ("+590 590 12 34 56", "fr-FR"),
        ("02 12345678", "it-IT"),
        ("12345", "de-DE"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();
    // load every region once so the loop measures parsing only
    for (number, locale) in &numbers_to_parse {
        PHONE_NUMBER_UTIL.parse(number, locale, None).unwrap();
    }

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number, locale) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number), black_box(locale), None);
            }
        })
    });

    let parsed = numbers_to_parse
        .iter()
        .map(|(number, locale)| PHONE_NUMBER_UTIL.parse(number, locale, None).unwrap())
        .collect::<Vec<_>>();
    let roaming = NormalizeOptions {
        current_mcc: Some("262".to_owned()),
        assisted_dialing: true,
        ..NormalizeOptions::new("en-US")
    };

    group.bench_function("normalize()", |b| {
        b.iter(|| {
            for number in &parsed {
                let _ = PHONE_NUMBER_UTIL.normalize(black_box(number), black_box(&roaming));
            }
        })
    });

    group.bench_function("compare()", |b| {
        b.iter(|| {
            for pair in parsed.windows(2) {
                let _ = PHONE_NUMBER_UTIL.compare(black_box(&pair[0]), black_box(&pair[1]));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
