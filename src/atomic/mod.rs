/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Cells
//!
//! Provides the aligned cell type, the store primitive and the explicit
//! memory orderings it accepts.
//!
//! # Features
//!
//! - Alignment guaranteed by construction through `SharedCell16`
//! - Sequentially-consistent default, explicit `Relaxed` / `Release` opt-in
//! - Zero-cost abstraction with inline methods
//!
//! # Author
//!
//! Haixing Hu

mod ordering;
mod shared_cell16;
mod traits;
mod write16;

pub use ordering::{
    LoadOrdering,
    MemoryOrdering,
    StoreOrdering,
    DEFAULT_LOAD_ORDERING,
    DEFAULT_STORE_ORDERING,
};
pub use shared_cell16::SharedCell16;
pub use traits::AtomicWord;
pub use write16::{
    atomic_write16,
    atomic_write16_with,
};
