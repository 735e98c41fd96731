use std::sync::Arc;
use std::thread;

use failfast::prelude::*;
use failfast::{FailFastHub, StandardChecker, StandardFailer, ThreadContractor};
use proptest::prelude::*;

fn standard_checker() -> Arc<StandardChecker> {
    Arc::new(StandardChecker::new(Arc::new(ThreadContractor::new())))
}

fn standard_failer() -> Arc<StandardFailer> {
    Arc::new(StandardFailer::new(Arc::new(ThreadContractor::new())))
}

fn assert_fail_fast<T: FailFast>(_hub: &T) {}

#[test]
fn default_hub_is_consistent() {
    let hub = FailFastHub::default();
    assert_fail_fast(&hub);
    let first = hub.checker();
    let second = hub.checker();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&hub.failer(), &hub.failer()));
}

#[test]
fn checker_round_trip_by_identity() {
    let hub = FailFastHub::default();
    let checker = standard_checker();
    hub.set_checker(Arc::clone(&checker));
    assert!(Arc::ptr_eq(&hub.checker(), &checker));
}

#[test]
fn checker_and_failer_slots_do_not_alias() {
    let hub = FailFastHub::default();
    let original_failer = hub.failer();
    let checker = standard_checker();
    hub.set_checker(Arc::clone(&checker));
    assert!(Arc::ptr_eq(&hub.failer(), &original_failer));

    let failer = standard_failer();
    hub.set_failer(Arc::clone(&failer));
    assert!(Arc::ptr_eq(&hub.checker(), &checker));
    assert!(Arc::ptr_eq(&hub.failer(), &failer));
}

#[test]
fn replaced_instances_stay_usable() {
    let hub = FailFastHub::default();
    let old = hub.checker();
    hub.set_checker(standard_checker());
    assert!(!Arc::ptr_eq(&hub.checker(), &old));
    assert!(!old.is_none("still alive", &Some(1)));
}

#[test]
fn concurrent_setters_leave_one_winner() {
    let hub = Arc::new(FailFastHub::default());
    let left = standard_checker();
    let right = standard_checker();

    let setters: Vec<_> = [Arc::clone(&left), Arc::clone(&right)]
        .into_iter()
        .map(|checker| {
            let hub = Arc::clone(&hub);
            thread::spawn(move || {
                for _ in 0..500 {
                    hub.set_checker(Arc::clone(&checker));
                }
            })
        })
        .collect();
    for setter in setters {
        setter.join().expect("setter thread");
    }

    let observed = {
        let hub = Arc::clone(&hub);
        thread::spawn(move || hub.checker())
            .join()
            .expect("reader thread")
    };
    assert!(Arc::ptr_eq(&observed, &left) || Arc::ptr_eq(&observed, &right));
}

proptest! {
    #[test]
    fn failer_last_write_wins(count in 1_usize..16) {
        let hub = FailFastHub::default();
        let failers: Vec<_> = (0..count).map(|_| standard_failer()).collect();
        for failer in &failers {
            hub.set_failer(Arc::clone(failer));
        }
        prop_assert!(Arc::ptr_eq(&hub.failer(), failers.last().expect("non-empty")));
    }
}
