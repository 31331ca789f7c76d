use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use confview_core::client::ConfClient;
use confview_core::infrastructure_in_memory::InMemoryCacheStore;

fn seeded_client(host_count: usize) -> ConfClient {
    let store = Arc::new(InMemoryCacheStore::new());
    store.set_local_idc("bj");
    store.publish("/bench/conf", "value");
    store.publish("/bj/bench/conf", "bj-value");
    store.publish_children(
        "/bench/hosts",
        (0..host_count)
            .map(|i| (format!("host{i}"), format!("10.0.0.{i}:80")))
            .collect(),
    );
    ConfClient::attach(store).expect("in-memory attach")
}

fn bench_get_conf(c: &mut Criterion) {
    let client = seeded_client(8);

    c.bench_function("get_conf_idc_override", |b| {
        b.iter(|| client.get_conf(black_box("bench/conf"), None).unwrap())
    });

    c.bench_function("get_conf_global_fallback", |b| {
        b.iter(|| client.get_conf(black_box("bench/conf"), Some("gz")).unwrap())
    });
}

fn bench_get_host(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_host");

    for host_count in [2, 16, 128] {
        let client = seeded_client(host_count);
        group.bench_with_input(
            BenchmarkId::new("hosts", host_count),
            &host_count,
            |b, _| b.iter(|| client.get_host(black_box("bench/hosts"), None).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_get_conf, bench_get_host);
criterion_main!(benches);
