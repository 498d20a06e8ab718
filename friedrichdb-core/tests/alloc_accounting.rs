//! Payload cells are allocated through the installed policy and all of them are
//! handed back when the tree is dropped.
//!
//! Kept in its own test binary: the policy is process-wide and fixed on first use.

use std::alloc::System;

use friedrichdb_core::{CountingAllocator, Field, install_allocator};

static COUNTER: CountingAllocator = CountingAllocator::new(System);

#[test]
fn every_payload_cell_is_released() {
    install_allocator(&COUNTER).unwrap();
    assert_eq!(COUNTER.live(), 0);

    // Inline kinds allocate nothing.
    let flag = Field::from(true);
    let nothing = Field::new();
    assert_eq!(COUNTER.total(), 0);
    drop((flag, nothing));

    let mut root = Field::new();
    root.emplace("a", 1).unwrap();
    root.emplace("b", 2).unwrap();
    root.emplace("name", "x").unwrap();
    let list: Field = [1, 2, 3].into_iter().collect();
    root.emplace("list", list).unwrap();

    // object + array + five numbers + one string
    assert_eq!(COUNTER.live(), 8);

    let previous = root.emplace("a", false).unwrap();
    assert_eq!(COUNTER.live(), 8);
    drop(previous);
    assert_eq!(COUNTER.live(), 7);

    drop(root);
    assert_eq!(COUNTER.live(), 0);

    let mut deep = Field::new();
    for _ in 0..100_000 {
        let mut outer = Field::new();
        outer.emplace_back(deep).unwrap();
        deep = outer;
    }
    assert_eq!(COUNTER.live(), 100_000);
    drop(deep);
    assert_eq!(COUNTER.live(), 0);
    assert_eq!(COUNTER.total(), 8 + 100_000);
}
