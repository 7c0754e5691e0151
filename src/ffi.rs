/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # C ABI
//!
//! Exports the store primitive under the unmangled symbol `atomic_write16`
//! for callers that only hold a raw address.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::{
    atomic_write16 as write16,
    SharedCell16,
};

/// Atomically writes `value` to the 16-bit word at `ptr`.
///
/// Equivalent to [`crate::atomic_write16`] with `SeqCst` ordering. The
/// address is not validated.
///
/// # Safety
///
/// Violating any of the following is undefined behaviour, which may show up
/// as a fault, silent memory corruption or apparent success:
///
/// * `ptr` is non-null and 2-byte aligned.
/// * `ptr` addresses two bytes that are allocated for the whole call.
/// * Every concurrent access to those bytes is atomic.
#[no_mangle]
pub unsafe extern "C" fn atomic_write16(ptr: *mut u16, value: u16) {
    // SAFETY: forwarded verbatim from this function's contract.
    let cell = unsafe { SharedCell16::from_ptr(ptr) };
    write16(cell, value);
}
