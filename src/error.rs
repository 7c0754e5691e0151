/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Error types for the fallible helpers around the atomic store. The store
//! itself never fails.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

use crate::atomic::MemoryOrdering;

/// Rejection of a location offered as a 16-bit cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// The address is null.
    #[error("null pointer cannot address a 16-bit cell")]
    Null,

    /// The address is not a multiple of the cell alignment.
    #[error("address {address:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// The rejected address.
        address: usize,
        /// The required alignment in bytes.
        align: usize,
    },

    /// Fewer than two bytes remain in the buffer at the given offset.
    #[error("offset {offset} leaves fewer than 2 bytes in a buffer of {len} bytes")]
    OutOfBounds {
        /// The requested byte offset.
        offset: usize,
        /// The length of the buffer.
        len: usize,
    },
}

/// Rejection of a memory ordering for a particular access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// The ordering has no meaning for a store.
    #[error("{0} ordering is not valid for a store")]
    InvalidForStore(MemoryOrdering),

    /// The ordering has no meaning for a load.
    #[error("{0} ordering is not valid for a load")]
    InvalidForLoad(MemoryOrdering),

    /// The text does not name a memory ordering.
    #[error("unknown memory ordering `{0}`")]
    Unknown(String),
}
