use std::collections::HashSet;

use instrumented_collections::collections::{InstrumentedSet, NaiveCountingSet, SetLike};
use instrumented_collections::properties::Properties;
use tracing::info;

// 転送ラッパ上のデコレータは、渡した要素数どおりに数える
fn instrumented_set_demo() {
    let mut s: InstrumentedSet<HashSet<&str>> = InstrumentedSet::default();
    s.insert_all(["Snap", "Crakle", "Pop"]);
    info!(add_count = s.add_count(), "instrumented set after bulk insert");
    // 3
    println!("{}", s.add_count());
}

// 継承流は一括挿入が上書きされた単一挿入を再入するため二重に数える
fn naive_counting_set_demo() {
    let mut s = NaiveCountingSet::new();
    s.insert_all(["Snap", "Crakle", "Pop"]);
    info!(add_count = s.add_count(), "naive counting set after bulk insert");
    // 6
    println!("{}", s.add_count());
}

// 生の get は既定値表を知らないため、property と結果が食い違う
fn default_value_divergence() {
    let mut def_p = Properties::new();
    def_p.set_property("key", "100");
    let p = Properties::with_defaults(def_p);

    let key = "key".to_string();
    // None
    println!("{:?}", p.get(&key).and_then(|v| v.downcast_ref::<String>()));
    // Ok(Some("100"))
    println!("{:?}", p.property(&key));
}

#[derive(PartialEq, Eq, Hash)]
struct Token(u32);

// 基底の生の挿入で契約外のキーを入れると、文字列専用アクセサが壊れる
fn raw_insertion_breaks_contract() {
    let mut p = Properties::new();
    p.put(Token(7), "value".to_string());
    // Err(KeyNotString)
    println!("{:?}", p.property(&Token(7)));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    instrumented_set_demo();
    naive_counting_set_demo();
    default_value_divergence();
    raw_insertion_breaks_contract();
}
