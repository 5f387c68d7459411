//! Throughput benchmarks for the ledger hot paths: versioned puts,
//! latest-wins reads, and the ban cascade over nested containers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cv_02_provenance::cascade::clean_inventory;
use cv_03_ledger_store::{InMemoryEngine, LedgerConfig, LedgerStore};
use serde_json::json;

fn bench_put(c: &mut Criterion) {
    let store = LedgerStore::new(InMemoryEngine::new(), LedgerConfig::default());
    let inventory = serde_json::to_vec(&json!([
        {"typeId": "minecraft:diamond_sword", "amount": 1, "lore": ["Origin: srv1"]},
        null,
        {"typeId": "minecraft:bread", "amount": 12, "lore": ["Origin: srv1"]}
    ]))
    .unwrap();

    c.bench_function("ledger_put", |b| {
        b.iter(|| store.put(black_box("alice"), black_box(&inventory), "srv1"))
    });
}

fn bench_get(c: &mut Criterion) {
    let store = LedgerStore::new(InMemoryEngine::new(), LedgerConfig::default());
    let inventory = serde_json::to_vec(&json!([{"typeId": "minecraft:apple", "amount": 3}])).unwrap();
    for _ in 0..50 {
        store.put("alice", &inventory, "srv1").unwrap();
    }

    c.bench_function("ledger_get_latest", |b| {
        b.iter(|| store.get(black_box("alice")).unwrap())
    });
}

fn bench_cascade(c: &mut Criterion) {
    let mut boxed = json!({"typeId": "minecraft:diamond", "amount": 1, "lore": ["Origin: srv1"]});
    for _ in 0..8 {
        boxed = json!({
            "typeId": "minecraft:shulker_box",
            "amount": 1,
            "lore": ["Origin: srv2"],
            "shulker_contents": [boxed]
        });
    }
    let inventory = serde_json::to_vec(&json!([boxed])).unwrap();

    c.bench_function("cascade_clean_nested", |b| {
        b.iter(|| clean_inventory(black_box(&inventory), "srv1"))
    });
}

criterion_group!(benches, bench_put, bench_get, bench_cascade);
criterion_main!(benches);
