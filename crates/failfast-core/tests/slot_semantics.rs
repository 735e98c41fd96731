use std::sync::Arc;
use std::thread;

use failfast_core::Slot;
use proptest::prelude::*;

#[test]
fn set_then_get_returns_same_instance() {
    let slot = Slot::new(Arc::new(1_u32));
    let value = Arc::new(7_u32);
    slot.set(Arc::clone(&value));
    assert!(Arc::ptr_eq(&slot.get(), &value));
    assert!(Arc::ptr_eq(&slot.get(), &slot.get()));
}

#[test]
fn replace_keeps_previous_instance_alive() {
    let first = Arc::new(String::from("first"));
    let slot = Slot::new(Arc::clone(&first));
    let previous = slot.replace(Arc::new(String::from("second")));
    assert!(Arc::ptr_eq(&previous, &first));
    assert_eq!(first.as_str(), "first");
    assert_eq!(slot.get().as_str(), "second");
}

#[test]
fn concurrent_writers_never_tear() {
    let slot = Arc::new(Slot::new(Arc::new(0_u64)));
    let left = Arc::new(u64::MAX);
    let right = Arc::new(0x5555_5555_5555_5555_u64);

    let writers: Vec<_> = [Arc::clone(&left), Arc::clone(&right)]
        .into_iter()
        .map(|value| {
            let slot = Arc::clone(&slot);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    slot.set(Arc::clone(&value));
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().expect("writer thread");
    }

    let seen = thread::spawn({
        let slot = Arc::clone(&slot);
        move || slot.get()
    })
    .join()
    .expect("reader thread");
    assert!(Arc::ptr_eq(&seen, &left) || Arc::ptr_eq(&seen, &right));
}

proptest! {
    #[test]
    fn last_write_wins(values in proptest::collection::vec(any::<i64>(), 1..32)) {
        let slot = Slot::new(Arc::new(0_i64));
        let bound: Vec<Arc<i64>> = values.iter().copied().map(Arc::new).collect();
        for value in &bound {
            slot.set(Arc::clone(value));
        }
        let last = bound.last().expect("non-empty");
        prop_assert!(Arc::ptr_eq(&slot.get(), last));
    }
}
