/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Word Trait
//!
//! Defines the common interface of word-sized cells that support atomic,
//! non-torn loads and stores, so code embedding the store primitive can be
//! generic over the cell type.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::AtomicU16;

use crate::atomic::ordering::{
    LoadOrdering,
    StoreOrdering,
    DEFAULT_LOAD_ORDERING,
    DEFAULT_STORE_ORDERING,
};
use crate::atomic::shared_cell16::SharedCell16;

/// Common trait for cells that are loaded and stored atomically.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicWord {
    /// The value type stored in the cell.
    type Value: Copy;

    /// Loads the current value with an explicit ordering.
    ///
    /// # Parameters
    ///
    /// * `ordering` - The ordering of the load.
    ///
    /// # Returns
    ///
    /// The current value.
    fn load_with(&self, ordering: LoadOrdering) -> Self::Value;

    /// Stores a new value with an explicit ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    /// * `ordering` - The ordering of the store.
    fn store_with(&self, value: Self::Value, ordering: StoreOrdering);

    /// Loads the current value.
    ///
    /// Uses `SeqCst` ordering by default.
    #[inline]
    fn load(&self) -> Self::Value {
        self.load_with(DEFAULT_LOAD_ORDERING)
    }

    /// Stores a new value.
    ///
    /// Uses `SeqCst` ordering by default.
    #[inline]
    fn store(&self, value: Self::Value) {
        self.store_with(value, DEFAULT_STORE_ORDERING);
    }
}

// Forward to the inherent methods so both `cell.store(v)` and
// `fn f<C: AtomicWord>(cell: &C)` work.

impl AtomicWord for SharedCell16 {
    type Value = u16;

    #[inline]
    fn load_with(&self, ordering: LoadOrdering) -> u16 {
        SharedCell16::load_with(self, ordering)
    }

    #[inline]
    fn store_with(&self, value: u16, ordering: StoreOrdering) {
        SharedCell16::store_with(self, value, ordering);
    }
}

impl AtomicWord for AtomicU16 {
    type Value = u16;

    #[inline]
    fn load_with(&self, ordering: LoadOrdering) -> u16 {
        AtomicU16::load(self, ordering.into())
    }

    #[inline]
    fn store_with(&self, value: u16, ordering: StoreOrdering) {
        AtomicU16::store(self, value, ordering.into());
    }
}
