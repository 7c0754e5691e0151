/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Write
//!
//! The store primitive: one atomic, non-torn write of a 16-bit value into a
//! caller-owned cell.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::ordering::StoreOrdering;
use crate::atomic::shared_cell16::SharedCell16;

/// Atomically writes `value` into `location`.
///
/// After the call, any concurrent or later atomic read of the cell observes
/// either the previous value or exactly `value`, never a mix of bytes from
/// both. The write is a single hardware store: it never blocks, allocates,
/// logs or fails.
///
/// # Memory Ordering
///
/// Uses `SeqCst` ordering. Callers that establish ordering through other
/// synchronization can opt into a weaker ordering with
/// [`atomic_write16_with`].
///
/// # Parameters
///
/// * `location` - The cell to write. Its type guarantees a live, 2-byte
///   aligned location.
/// * `value` - The value to store.
///
/// # Example
///
/// ```rust
/// use prism3_word16::{atomic_write16, SharedCell16};
///
/// let cell = SharedCell16::new(0);
/// atomic_write16(&cell, 0xABCD);
/// assert_eq!(cell.load(), 0xABCD);
/// ```
#[inline]
pub fn atomic_write16(location: &SharedCell16, value: u16) {
    location.store(value);
}

/// Atomically writes `value` into `location` with an explicit ordering.
///
/// Atomicity holds for every ordering; only the visibility of other memory
/// operations around the store differs.
///
/// # Parameters
///
/// * `location` - The cell to write.
/// * `value` - The value to store.
/// * `ordering` - `Relaxed`, `Release` or `SeqCst`.
#[inline]
pub fn atomic_write16_with(location: &SharedCell16, value: u16, ordering: StoreOrdering) {
    location.store_with(value, ordering);
}
