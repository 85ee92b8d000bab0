use citydb_core::{aggregate, folds, select_where, CityQuery, Dataset, Record, Report};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const COUNTRIES: [&str; 6] = ["Germany", "Spain", " spain", "France", "Italy", "GERMANY"];

fn synthetic(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let temperature = if i % 17 == 0 {
                "n/a".to_string()
            } else {
                format!("{:.1}", (i % 300) as f64 / 10.0)
            };
            Record::new()
                .with("city", format!("City {i}"))
                .with("country", COUNTRIES[i % COUNTRIES.len()])
                .with("temperature", temperature)
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let ds = synthetic(100_000);

    c.bench_function("select_where spain above 12", |b| {
        b.iter(|| black_box(ds.cities_in_country_above(black_box("spain"), 12.0)))
    });

    c.bench_function("select_where always true", |b| {
        b.iter(|| black_box(select_where(|_| true, &ds)))
    });

    c.bench_function("aggregate numeric_mean", |b| {
        b.iter(|| black_box(aggregate("temperature", folds::numeric_mean, &ds)))
    });

    c.bench_function("report", |b| b.iter(|| black_box(Report::compute(&ds))));
}

fn bench_load(c: &mut Criterion) {
    let mut csv = String::from("city,country,temperature\n");
    for r in synthetic(20_000).iter() {
        csv.push_str(&format!(
            "{},{},{}\n",
            r.get_str("city").unwrap_or_default(),
            r.get_str("country").unwrap_or_default(),
            r.get_str("temperature").unwrap_or_default()
        ));
    }

    c.bench_function("from_reader 20k rows", |b| {
        b.iter(|| black_box(Dataset::from_reader(csv.as_bytes()).unwrap()))
    });
}

criterion_group!(benches, bench_queries, bench_load);
criterion_main!(benches);
