//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `agenda_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::rc::Rc;

use agenda_core::{MemorySlotStore, Store};

fn main() {
    let store = Store::open(Rc::new(MemorySlotStore::new()));
    println!("agenda_core version={}", agenda_core::core_version());
    println!(
        "events={} locations={} contacts={}",
        store.events().len(),
        store.locations().len(),
        store.contacts().len()
    );
}
