/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Shared 16-bit Cell
//!
//! Provides a 2-byte, 2-byte-aligned memory cell that is only ever accessed
//! atomically, so concurrent readers never observe a torn value.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::mem;
use std::sync::atomic::AtomicU16;

use tracing::debug;

use crate::atomic::ordering::{
    LoadOrdering,
    StoreOrdering,
    DEFAULT_LOAD_ORDERING,
    DEFAULT_STORE_ORDERING,
};
use crate::error::CellError;

// A `&mut u16` must always be a valid `AtomicU16` address.
const _: () = assert!(mem::align_of::<u16>() == mem::align_of::<AtomicU16>());
const _: () = assert!(mem::size_of::<SharedCell16>() == 2);
const _: () = assert!(mem::align_of::<SharedCell16>() == 2);

/// A 16-bit memory cell shared across threads.
///
/// The cell is exactly 2 bytes wide and aligned to 2 bytes; both properties
/// are carried by the type, so every `&SharedCell16` is a valid operand for
/// a hardware 16-bit atomic store. The memory behind the cell is owned by
/// whoever created it: an owned `SharedCell16`, a borrowed `u16`, two bytes
/// of a caller buffer, or a raw address handed over by foreign code.
///
/// # Memory Ordering Strategy
///
/// - **Write operations** (`store`): `SeqCst` by default. Use `store_with`
///   to opt into `Release` or `Relaxed`.
/// - **Read operations** (`load`): `SeqCst` by default. Use `load_with` to
///   opt into `Acquire` or `Relaxed`.
///
/// No other operations are offered: this is a store primitive, not a
/// general atomic integer.
///
/// # Example
///
/// ```rust
/// use prism3_word16::SharedCell16;
///
/// let mut word = 0xFEEB_u16;
/// let cell = SharedCell16::from_mut(&mut word);
/// cell.store(0x9090);
/// assert_eq!(cell.load(), 0x9090);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct SharedCell16 {
    inner: AtomicU16,
}

impl SharedCell16 {
    /// Size of the cell in bytes.
    pub const SIZE: usize = mem::size_of::<AtomicU16>();

    /// Required alignment of the cell address in bytes.
    pub const ALIGN: usize = mem::align_of::<AtomicU16>();

    /// Creates a new owned cell.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self {
            inner: AtomicU16::new(value),
        }
    }

    /// Views an exclusively borrowed `u16` as a shared cell.
    ///
    /// The returned reference can be handed to any number of threads for
    /// the duration of the borrow.
    ///
    /// # Parameters
    ///
    /// * `value` - The word to view.
    ///
    /// # Returns
    ///
    /// A shared cell over the same memory.
    #[inline]
    pub fn from_mut(value: &mut u16) -> &Self {
        // SAFETY: a `&mut u16` is non-null, live for the borrow and aligned
        // to `align_of::<AtomicU16>()` (asserted above). The exclusive borrow
        // rules out non-atomic access while the view exists.
        unsafe { Self::from_ptr(value as *mut u16) }
    }

    /// Views a raw address as a shared cell without any check.
    ///
    /// # Safety
    ///
    /// This is a hard precondition, not a checked one. Violating any of the
    /// following is undefined behaviour:
    ///
    /// * `ptr` is non-null and a multiple of [`SharedCell16::ALIGN`].
    /// * `ptr` addresses two bytes that stay allocated for `'a`.
    /// * For `'a`, those bytes are only accessed through atomic operations.
    ///
    /// # Parameters
    ///
    /// * `ptr` - The address of the cell.
    ///
    /// # Returns
    ///
    /// A shared cell at `ptr`.
    #[inline]
    pub unsafe fn from_ptr<'a>(ptr: *mut u16) -> &'a Self {
        // SAFETY: `SharedCell16` is a transparent `AtomicU16`, which has the
        // same size and bit validity as `u16`; the caller guarantees the
        // rest.
        unsafe { &*(ptr as *const Self) }
    }

    /// Views a raw address as a shared cell, rejecting null and misaligned
    /// addresses.
    ///
    /// # Safety
    ///
    /// Alignment and nullness are checked. The caller still guarantees that
    /// `ptr` addresses two bytes that stay allocated for `'a` and are only
    /// accessed atomically meanwhile.
    ///
    /// # Parameters
    ///
    /// * `ptr` - The address of the cell.
    ///
    /// # Returns
    ///
    /// The cell, or `CellError::Null` / `CellError::Misaligned`.
    pub unsafe fn from_ptr_checked<'a>(ptr: *mut u16) -> Result<&'a Self, CellError> {
        check_address(ptr as usize)?;
        // SAFETY: alignment and nullness checked above, liveness and
        // exclusive atomic access are the caller's contract.
        Ok(unsafe { Self::from_ptr(ptr) })
    }

    /// Views two bytes of a caller buffer as a shared cell.
    ///
    /// This is the way to patch a word inside a larger block in place, such
    /// as an instruction in a code page or a flag in a control block.
    ///
    /// # Parameters
    ///
    /// * `bytes` - The buffer holding the cell.
    /// * `offset` - Byte offset of the cell inside `bytes`.
    ///
    /// # Returns
    ///
    /// The cell, or `CellError::OutOfBounds` if fewer than two bytes remain
    /// at `offset`, or `CellError::Misaligned` if `bytes[offset]` is not
    /// 2-byte aligned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_word16::SharedCell16;
    ///
    /// #[repr(C, align(2))]
    /// struct Page([u8; 4]);
    ///
    /// let mut page = Page([0x31, 0xC0, 0xEB, 0xFE]);
    /// let cell = SharedCell16::from_mut_bytes(&mut page.0, 2).unwrap();
    /// cell.store(u16::from_ne_bytes([0x90, 0x90]));
    /// assert_eq!(page.0, [0x31, 0xC0, 0x90, 0x90]);
    /// ```
    pub fn from_mut_bytes(bytes: &mut [u8], offset: usize) -> Result<&Self, CellError> {
        let len = bytes.len();
        let in_bounds = offset
            .checked_add(Self::SIZE)
            .is_some_and(|end| end <= len);
        if !in_bounds {
            debug!(offset, len, "rejected out-of-bounds 16-bit cell");
            return Err(CellError::OutOfBounds { offset, len });
        }
        let ptr = bytes[offset..].as_mut_ptr().cast::<u16>();
        check_address(ptr as usize)?;
        // SAFETY: two bytes at `ptr` lie inside `bytes`, the address is
        // aligned, and the exclusive borrow of `bytes` keeps them live and
        // free of non-atomic access for the returned lifetime.
        Ok(unsafe { Self::from_ptr(ptr) })
    }

    /// Stores a new value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `SeqCst` ordering. The store is atomic, publishes all earlier
    /// writes of this thread to acquiring readers, and takes part in the
    /// single total order of sequentially-consistent operations.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store(&self, value: u16) {
        self.store_with(value, DEFAULT_STORE_ORDERING);
    }

    /// Stores a new value with an explicit ordering.
    ///
    /// # Memory Ordering
    ///
    /// - `Relaxed`: atomic only. Other memory operations may be reordered
    ///   around the store.
    /// - `Release`: earlier writes of this thread are visible to any thread
    ///   that loads this value with `Acquire` or stronger.
    /// - `SeqCst`: `Release` plus the single total order.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    /// * `ordering` - The ordering of the store.
    #[inline]
    pub fn store_with(&self, value: u16, ordering: StoreOrdering) {
        self.inner.store(value, ordering.into());
    }

    /// Loads the current value.
    ///
    /// Uses `SeqCst` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self) -> u16 {
        self.load_with(DEFAULT_LOAD_ORDERING)
    }

    /// Loads the current value with an explicit ordering.
    ///
    /// # Parameters
    ///
    /// * `ordering` - The ordering of the load.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load_with(&self, ordering: LoadOrdering) -> u16 {
        self.inner.load(ordering.into())
    }

    /// Returns the address of the cell.
    #[inline]
    pub fn as_ptr(&self) -> *mut u16 {
        self.inner.as_ptr()
    }

    /// Returns a mutable reference to the value.
    ///
    /// The exclusive borrow proves that no other thread can access the
    /// cell, so no atomic operation is needed.
    #[inline]
    pub fn get_mut(&mut self) -> &mut u16 {
        self.inner.get_mut()
    }

    /// Consumes the cell and returns the value.
    #[inline]
    pub fn into_inner(self) -> u16 {
        self.inner.into_inner()
    }
}

/// Rejects null and misaligned cell addresses.
fn check_address(address: usize) -> Result<(), CellError> {
    if address == 0 {
        debug!("rejected null 16-bit cell");
        return Err(CellError::Null);
    }
    if address % SharedCell16::ALIGN != 0 {
        debug!(
            address,
            align = SharedCell16::ALIGN,
            "rejected misaligned 16-bit cell"
        );
        return Err(CellError::Misaligned {
            address,
            align: SharedCell16::ALIGN,
        });
    }
    Ok(())
}

impl Default for SharedCell16 {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u16> for SharedCell16 {
    #[inline]
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SharedCell16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCell16")
            .field("value", &self.load())
            .finish()
    }
}

impl fmt::Display for SharedCell16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.load())
    }
}
