use criterion::{black_box, criterion_group, criterion_main, Criterion};
use currency_converter::core::currency::CurrencyCode;
use currency_converter::rates::table::StaticRateTable;
use currency_converter::service::conversion::ConversionService;
use currency_converter::simulation::flaky::FlakyRateSource;
use currency_converter::simulation::workload::{generate_requests, run_requests, WorkloadConfig};

fn rate_table() -> StaticRateTable {
    let mut table = StaticRateTable::new();
    let usd = CurrencyCode::new("USD");
    for (code, rate) in [("EUR", 0.92), ("BRL", 5.0), ("INR", 83.0), ("CNY", 7.2)] {
        table
            .set_rate(usd.clone(), CurrencyCode::new(code), rate)
            .expect("benchmark rates are positive");
    }
    table
}

fn workload(request_count: usize) -> WorkloadConfig {
    WorkloadConfig {
        request_count,
        currencies: vec![CurrencyCode::new("USD"), CurrencyCode::new("EUR")],
        seed: 1,
        ..Default::default()
    }
}

fn bench_convert_1000(c: &mut Criterion) {
    let requests = generate_requests(&workload(1_000));

    c.bench_function("convert_1000", |b| {
        b.iter(|| {
            let mut service = ConversionService::new(rate_table(), 1.1);
            run_requests(&mut service, black_box(&requests))
        })
    });
}

fn bench_convert_1000_flaky(c: &mut Criterion) {
    let requests = generate_requests(&workload(1_000));

    c.bench_function("convert_1000_flaky_25pct", |b| {
        b.iter(|| {
            let source = FlakyRateSource::new(rate_table(), 0.25, 1);
            let mut service = ConversionService::new(source, 1.1);
            run_requests(&mut service, black_box(&requests))
        })
    });
}

criterion_group!(benches, bench_convert_1000, bench_convert_1000_flaky);
criterion_main!(benches);
