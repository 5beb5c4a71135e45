//! Benchmarks for the configuration format and PSK derivation.
//!
//! Run with: `cargo bench -p wpa-core --bench format_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wpa_core::{apply, derive_psk, parse, serialize, Operation};

/// Builds a configuration with `n` network blocks.
fn config_with_networks(n: usize) -> String {
    let mut text = String::from(
        "ctrl_interface=DIR=/var/run/wpa_supplicant GROUP=netdev\nupdate_config=1\ncountry=GB\n",
    );
    for i in 0..n {
        text.push_str(&format!(
            "network={{\n\tssid=\"net-{i}\"\n\tpsk={}\n\tkey_mgmt=WPA-PSK\n}}\n",
            "ab".repeat(32)
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = config_with_networks(50);
    c.bench_function("parse_50_networks", |b| {
        b.iter(|| parse(black_box(&text)).expect("parse"))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let doc = parse(&config_with_networks(50)).expect("parse");
    c.bench_function("serialize_50_networks", |b| {
        b.iter(|| serialize(black_box(&doc)))
    });
}

/// PBKDF2 with 4096 rounds dominates every upsert.
fn bench_derive_psk(c: &mut Criterion) {
    c.bench_function("derive_psk", |b| {
        b.iter(|| derive_psk(black_box("password123"), black_box("Home")))
    });
}

fn bench_upsert_existing(c: &mut Criterion) {
    let doc = parse(&config_with_networks(50)).expect("parse");
    let op = Operation::Upsert {
        ssid: "net-25".to_string(),
        password: "password123".to_string(),
    };
    c.bench_function("upsert_existing_of_50", |b| {
        b.iter(|| {
            let mut d = doc.clone();
            apply(&mut d, black_box(&op)).expect("apply")
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_serialize,
    bench_derive_psk,
    bench_upsert_existing
);
criterion_main!(benches);
