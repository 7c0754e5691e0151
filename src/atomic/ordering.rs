/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Orderings
//!
//! Explicit memory ordering choices for the 16-bit cell.
//!
//! [`MemoryOrdering`] is the general parameter a host system carries around.
//! Before it reaches an access it is narrowed to [`StoreOrdering`] or
//! [`LoadOrdering`], which only contain the orderings that are meaningful
//! for that access. An acquire-store or a release-load therefore cannot be
//! expressed at the call site.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::Ordering;

use crate::error::OrderingError;

/// Ordering used by `atomic_write16` and `SharedCell16::store`.
pub const DEFAULT_STORE_ORDERING: StoreOrdering = StoreOrdering::SeqCst;

/// Ordering used by `SharedCell16::load`.
pub const DEFAULT_LOAD_ORDERING: LoadOrdering = LoadOrdering::SeqCst;

/// A memory ordering as chosen by the caller.
///
/// # Variants
///
/// - `Relaxed`: atomicity only. No happens-before edges with other memory
///   operations.
/// - `Acquire`: a load that synchronizes with the `Release` (or stronger)
///   store whose value it reads.
/// - `Release`: a store that makes all earlier writes of the storing thread
///   visible to an `Acquire` load reading the stored value.
/// - `SeqCst`: acquire or release semantics, plus participation in the
///   single total order of all sequentially-consistent operations.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemoryOrdering {
    /// No ordering constraints.
    Relaxed,
    /// Acquire semantics (loads only).
    Acquire,
    /// Release semantics (stores only).
    Release,
    /// Sequential consistency.
    #[default]
    SeqCst,
}

/// A memory ordering that is valid for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StoreOrdering {
    /// Atomicity only.
    Relaxed,
    /// Publishes earlier writes to acquiring readers.
    Release,
    /// Release plus the global total order.
    #[default]
    SeqCst,
}

/// A memory ordering that is valid for a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoadOrdering {
    /// Atomicity only.
    Relaxed,
    /// Observes writes published by a releasing store.
    Acquire,
    /// Acquire plus the global total order.
    #[default]
    SeqCst,
}

impl MemoryOrdering {
    /// Returns the textual name used by `Display` and `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            MemoryOrdering::Relaxed => "relaxed",
            MemoryOrdering::Acquire => "acquire",
            MemoryOrdering::Release => "release",
            MemoryOrdering::SeqCst => "seq_cst",
        }
    }
}

impl fmt::Display for MemoryOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryOrdering {
    type Err = OrderingError;

    /// Parses `relaxed`, `acquire`, `release` or `seq_cst`, ignoring ASCII
    /// case. `seqcst` is accepted as an alias of `seq_cst`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(MemoryOrdering::Relaxed),
            "acquire" => Ok(MemoryOrdering::Acquire),
            "release" => Ok(MemoryOrdering::Release),
            "seq_cst" | "seqcst" => Ok(MemoryOrdering::SeqCst),
            _ => Err(OrderingError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for StoreOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MemoryOrdering::from(*self).as_str())
    }
}

impl fmt::Display for LoadOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MemoryOrdering::from(*self).as_str())
    }
}

impl TryFrom<MemoryOrdering> for StoreOrdering {
    type Error = OrderingError;

    fn try_from(ordering: MemoryOrdering) -> Result<Self, Self::Error> {
        match ordering {
            MemoryOrdering::Relaxed => Ok(StoreOrdering::Relaxed),
            MemoryOrdering::Release => Ok(StoreOrdering::Release),
            MemoryOrdering::SeqCst => Ok(StoreOrdering::SeqCst),
            MemoryOrdering::Acquire => Err(OrderingError::InvalidForStore(ordering)),
        }
    }
}

impl TryFrom<MemoryOrdering> for LoadOrdering {
    type Error = OrderingError;

    fn try_from(ordering: MemoryOrdering) -> Result<Self, Self::Error> {
        match ordering {
            MemoryOrdering::Relaxed => Ok(LoadOrdering::Relaxed),
            MemoryOrdering::Acquire => Ok(LoadOrdering::Acquire),
            MemoryOrdering::SeqCst => Ok(LoadOrdering::SeqCst),
            MemoryOrdering::Release => Err(OrderingError::InvalidForLoad(ordering)),
        }
    }
}

impl From<StoreOrdering> for MemoryOrdering {
    #[inline]
    fn from(ordering: StoreOrdering) -> Self {
        match ordering {
            StoreOrdering::Relaxed => MemoryOrdering::Relaxed,
            StoreOrdering::Release => MemoryOrdering::Release,
            StoreOrdering::SeqCst => MemoryOrdering::SeqCst,
        }
    }
}

impl From<LoadOrdering> for MemoryOrdering {
    #[inline]
    fn from(ordering: LoadOrdering) -> Self {
        match ordering {
            LoadOrdering::Relaxed => MemoryOrdering::Relaxed,
            LoadOrdering::Acquire => MemoryOrdering::Acquire,
            LoadOrdering::SeqCst => MemoryOrdering::SeqCst,
        }
    }
}

impl From<StoreOrdering> for Ordering {
    #[inline]
    fn from(ordering: StoreOrdering) -> Self {
        match ordering {
            StoreOrdering::Relaxed => Ordering::Relaxed,
            StoreOrdering::Release => Ordering::Release,
            StoreOrdering::SeqCst => Ordering::SeqCst,
        }
    }
}

impl From<LoadOrdering> for Ordering {
    #[inline]
    fn from(ordering: LoadOrdering) -> Self {
        match ordering {
            LoadOrdering::Relaxed => Ordering::Relaxed,
            LoadOrdering::Acquire => Ordering::Acquire,
            LoadOrdering::SeqCst => Ordering::SeqCst,
        }
    }
}

// Deserialization goes through `FromStr` so configuration text accepts the
// same spellings as `parse`.

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MemoryOrdering {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StoreOrdering {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ordering = <MemoryOrdering as serde::Deserialize>::deserialize(deserializer)?;
        StoreOrdering::try_from(ordering).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LoadOrdering {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ordering = <MemoryOrdering as serde::Deserialize>::deserialize(deserializer)?;
        LoadOrdering::try_from(ordering).map_err(serde::de::Error::custom)
    }
}
