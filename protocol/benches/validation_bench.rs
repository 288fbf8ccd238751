// Model benchmarks for xrpl-models.
//
// Covers builder construction, validation, wire encoding and decoding, and
// validation throughput over signer lists of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

use xrpl_models::prelude::*;

const ALICE: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";
const BOB: &str = "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX";
const ISSUER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

fn payment() -> Payment {
    Payment::builder()
        .account(ALICE)
        .destination(BOB)
        .amount(Amount::issued("USD", ISSUER, "1.5").unwrap())
        .send_max(Amount::xrp(2_000_000))
        .fee("12".parse().unwrap())
        .sequence(42)
        .memo(Memo::from_text("invoice 42").with_type("text/plain"))
        .build()
        .unwrap()
}

fn bench_build_payment(c: &mut Criterion) {
    c.bench_function("payment/build", |b| b.iter(payment));
}

fn bench_validate_payment(c: &mut Criterion) {
    let tx = payment();
    c.bench_function("payment/get_errors", |b| b.iter(|| tx.get_errors()));
}

fn bench_encode_payment(c: &mut Criterion) {
    let tx = payment();
    c.bench_function("payment/to_wire", |b| b.iter(|| tx.to_wire()));
}

fn bench_decode_payment(c: &mut Criterion) {
    let wire = Value::Object(payment().to_wire());
    c.bench_function("payment/from_json", |b| {
        b.iter(|| Transaction::from_json(&wire).unwrap());
    });
}

fn bench_validate_signer_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("signer_list_set/get_errors");

    for size in [1usize, 4, 8] {
        let entries: Vec<Value> = (0..size)
            .map(|i| {
                json!({"SignerEntry": {"Account": format!("rSigner{:02}", i), "SignerWeight": 1}})
            })
            .collect();
        let wire = json!({
            "TransactionType": "SignerListSet",
            "Account": ALICE,
            "SignerQuorum": size,
            "SignerEntries": entries,
        });
        let tx = Transaction::from_json(&wire).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tx, |b, tx| {
            b.iter(|| tx.get_errors());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_payment,
    bench_validate_payment,
    bench_encode_payment,
    bench_decode_payment,
    bench_validate_signer_list,
);
criterion_main!(benches);
