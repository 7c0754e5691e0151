/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-word16
//!
//! Atomic, non-torn 16-bit stores into caller-owned memory cells.
//!
//! A concurrent reader of a [`SharedCell16`] observes either the value
//! before a store or the value written by it, never a mix of bytes from
//! both. The crate is meant to be embedded in larger concurrent systems:
//! lock-free ring buffers, shared-memory control blocks, code pages patched
//! while another thread executes them.
//!
//! ## Design Goals
//!
//! - **Alignment by construction**: a `&SharedCell16` is always a valid
//!   2-byte aligned operand; raw addresses only enter through `unsafe`
//!   constructors with a documented contract
//! - **Explicit ordering**: `SeqCst` by default, `Release` and `Relaxed`
//!   through [`StoreOrdering`]
//! - **Nothing else**: one store, no allocation, no blocking, no logging on
//!   the store path
//!
//! ## Features
//!
//! - Cell type: `SharedCell16`
//! - Store primitive: `atomic_write16`, `atomic_write16_with`
//! - Orderings: `MemoryOrdering`, `StoreOrdering`, `LoadOrdering`
//! - C ABI export `atomic_write16` (cargo feature `ffi`, on by default)
//! - `serde` support for the ordering types (cargo feature `serde`)
//!
//! ## Example
//!
//! ```rust
//! use prism3_word16::{atomic_write16, SharedCell16};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cell = Arc::new(SharedCell16::new(0));
//! let mut handles = vec![];
//!
//! for value in [0xABCD, 0x1234] {
//!     let cell = cell.clone();
//!     handles.push(thread::spawn(move || atomic_write16(&cell, value)));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert!(matches!(cell.load(), 0xABCD | 0x1234));
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export the cell, the store primitive and the orderings
pub use atomic::{
    atomic_write16,
    atomic_write16_with,
    AtomicWord,
    LoadOrdering,
    MemoryOrdering,
    SharedCell16,
    StoreOrdering,
    DEFAULT_LOAD_ORDERING,
    DEFAULT_STORE_ORDERING,
};
pub use error::{
    CellError,
    OrderingError,
};
