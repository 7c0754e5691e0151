/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_word16::{
    AtomicWord,
    LoadOrdering,
    SharedCell16,
    StoreOrdering,
};
use std::sync::atomic::AtomicU16;
use std::sync::Arc;
use std::thread;

fn exercise<T: AtomicWord<Value = u16>>(cell: &T) {
    cell.store(42);
    assert_eq!(cell.load(), 42);
    cell.store_with(7, StoreOrdering::Release);
    assert_eq!(cell.load_with(LoadOrdering::Acquire), 7);
    cell.store_with(0xFFFF, StoreOrdering::Relaxed);
    assert_eq!(cell.load_with(LoadOrdering::Relaxed), 0xFFFF);
}

// Test that both cell types implement the AtomicWord trait correctly
#[test]
fn test_atomic_word_shared_cell16() {
    exercise(&SharedCell16::new(0));
}

#[test]
fn test_atomic_word_std_atomic_u16() {
    exercise(&AtomicU16::new(0));
}

#[test]
fn test_atomic_word_trait_object() {
    let cells: Vec<Box<dyn AtomicWord<Value = u16>>> = vec![
        Box::new(SharedCell16::new(1)),
        Box::new(AtomicU16::new(2)),
    ];
    for cell in &cells {
        cell.store(0xABCD);
    }
    for cell in &cells {
        assert_eq!(cell.load(), 0xABCD);
    }
}

#[test]
fn test_atomic_word_across_threads() {
    fn publish<T: AtomicWord<Value = u16> + Send + Sync + 'static>(cell: Arc<T>) -> u16 {
        let writer = {
            let cell = cell.clone();
            thread::spawn(move || cell.store(0x1234))
        };
        writer.join().unwrap();
        cell.load()
    }

    assert_eq!(publish(Arc::new(SharedCell16::new(0))), 0x1234);
    assert_eq!(publish(Arc::new(AtomicU16::new(0))), 0x1234);
}
