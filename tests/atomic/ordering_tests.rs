/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_word16::{
    LoadOrdering,
    MemoryOrdering,
    OrderingError,
    StoreOrdering,
    DEFAULT_LOAD_ORDERING,
    DEFAULT_STORE_ORDERING,
};
use std::sync::atomic::Ordering;

#[test]
fn test_defaults_are_sequentially_consistent() {
    assert_eq!(DEFAULT_STORE_ORDERING, StoreOrdering::SeqCst);
    assert_eq!(DEFAULT_LOAD_ORDERING, LoadOrdering::SeqCst);
    assert_eq!(StoreOrdering::default(), StoreOrdering::SeqCst);
    assert_eq!(LoadOrdering::default(), LoadOrdering::SeqCst);
    assert_eq!(MemoryOrdering::default(), MemoryOrdering::SeqCst);
}

#[test]
fn test_store_ordering_from_memory_ordering() {
    assert_eq!(
        StoreOrdering::try_from(MemoryOrdering::Relaxed),
        Ok(StoreOrdering::Relaxed)
    );
    assert_eq!(
        StoreOrdering::try_from(MemoryOrdering::Release),
        Ok(StoreOrdering::Release)
    );
    assert_eq!(
        StoreOrdering::try_from(MemoryOrdering::SeqCst),
        Ok(StoreOrdering::SeqCst)
    );
}

#[test]
fn test_acquire_is_rejected_for_store() {
    assert_eq!(
        StoreOrdering::try_from(MemoryOrdering::Acquire),
        Err(OrderingError::InvalidForStore(MemoryOrdering::Acquire))
    );
}

#[test]
fn test_load_ordering_from_memory_ordering() {
    assert_eq!(
        LoadOrdering::try_from(MemoryOrdering::Relaxed),
        Ok(LoadOrdering::Relaxed)
    );
    assert_eq!(
        LoadOrdering::try_from(MemoryOrdering::Acquire),
        Ok(LoadOrdering::Acquire)
    );
    assert_eq!(
        LoadOrdering::try_from(MemoryOrdering::SeqCst),
        Ok(LoadOrdering::SeqCst)
    );
}

#[test]
fn test_release_is_rejected_for_load() {
    assert_eq!(
        LoadOrdering::try_from(MemoryOrdering::Release),
        Err(OrderingError::InvalidForLoad(MemoryOrdering::Release))
    );
}

#[test]
fn test_narrowed_orderings_widen_back() {
    for ordering in [
        StoreOrdering::Relaxed,
        StoreOrdering::Release,
        StoreOrdering::SeqCst,
    ] {
        assert_eq!(StoreOrdering::try_from(MemoryOrdering::from(ordering)), Ok(ordering));
    }
    for ordering in [
        LoadOrdering::Relaxed,
        LoadOrdering::Acquire,
        LoadOrdering::SeqCst,
    ] {
        assert_eq!(LoadOrdering::try_from(MemoryOrdering::from(ordering)), Ok(ordering));
    }
}

#[test]
fn test_conversion_to_std_ordering() {
    assert_eq!(Ordering::from(StoreOrdering::Relaxed), Ordering::Relaxed);
    assert_eq!(Ordering::from(StoreOrdering::Release), Ordering::Release);
    assert_eq!(Ordering::from(StoreOrdering::SeqCst), Ordering::SeqCst);
    assert_eq!(Ordering::from(LoadOrdering::Relaxed), Ordering::Relaxed);
    assert_eq!(Ordering::from(LoadOrdering::Acquire), Ordering::Acquire);
    assert_eq!(Ordering::from(LoadOrdering::SeqCst), Ordering::SeqCst);
}

#[test]
fn test_display() {
    assert_eq!(MemoryOrdering::Relaxed.to_string(), "relaxed");
    assert_eq!(MemoryOrdering::Acquire.to_string(), "acquire");
    assert_eq!(MemoryOrdering::Release.to_string(), "release");
    assert_eq!(MemoryOrdering::SeqCst.to_string(), "seq_cst");
    assert_eq!(StoreOrdering::Release.to_string(), "release");
    assert_eq!(LoadOrdering::Acquire.to_string(), "acquire");
}

#[test]
fn test_parse() {
    assert_eq!("relaxed".parse::<MemoryOrdering>(), Ok(MemoryOrdering::Relaxed));
    assert_eq!("Acquire".parse::<MemoryOrdering>(), Ok(MemoryOrdering::Acquire));
    assert_eq!(" RELEASE ".parse::<MemoryOrdering>(), Ok(MemoryOrdering::Release));
    assert_eq!("seq_cst".parse::<MemoryOrdering>(), Ok(MemoryOrdering::SeqCst));
    assert_eq!("SeqCst".parse::<MemoryOrdering>(), Ok(MemoryOrdering::SeqCst));
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        "acq_rel".parse::<MemoryOrdering>(),
        Err(OrderingError::Unknown("acq_rel".to_string()))
    );
    assert_eq!(
        "".parse::<MemoryOrdering>(),
        Err(OrderingError::Unknown(String::new()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        OrderingError::InvalidForStore(MemoryOrdering::Acquire).to_string(),
        "acquire ordering is not valid for a store"
    );
    assert_eq!(
        OrderingError::InvalidForLoad(MemoryOrdering::Release).to_string(),
        "release ordering is not valid for a load"
    );
    assert_eq!(
        OrderingError::Unknown("consume".to_string()).to_string(),
        "unknown memory ordering `consume`"
    );
}
