use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use cabrillo::{parser::parse, types::ParseMode};

fn synthetic_log(qsos: usize) -> String {
    let mut text = String::from(
        "START-OF-LOG: 3.0\n\
         CALLSIGN: W8UPD\n\
         CONTEST: CQ-WW-CW\n\
         CATEGORY-BAND: 20M\n\
         CATEGORY-MODE: CW\n\
         CLAIMED-SCORE: 12345\n",
    );
    for i in 0..qsos {
        text.push_str(&format!(
            "QSO: 14025 CW 2013-06-08 1805 W8UPD 599 {:03} K{}AA 599 001\n",
            i % 1000,
            i % 100
        ));
    }
    text.push_str("END-OF-LOG:\n");
    text
}

fn bench_header_only(c: &mut Criterion) {
    let text = synthetic_log(0);
    c.bench_function("parse_headers_only", |b| {
        b.iter(|| parse(&text, ParseMode::Strict).expect("parse"));
    });
}

fn bench_qso_volumes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_qsos");
    for n in [100usize, 1_000usize, 10_000usize] {
        let text = synthetic_log(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| parse(text, ParseMode::Strict).expect("parse"));
        });
    }
    group.finish();
}

fn bench_lenient_mode(c: &mut Criterion) {
    let text = synthetic_log(1_000);
    c.bench_function("parse_qsos_1k_lenient", |b| {
        b.iter(|| parse(&text, ParseMode::Lenient).expect("parse"));
    });
}

criterion_group!(benches, bench_header_only, bench_qso_volumes, bench_lenient_mode);
criterion_main!(benches);
