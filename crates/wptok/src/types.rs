//! # Common Types and Traits

use compact_str::CompactString;
use core::hash::Hash;
use num_traits::{FromPrimitive, ToPrimitive, Unsigned};
use std::fmt::Debug;

/// A type that can be used as a token id.
///
/// Ids are dense non-negative integers assigned in vocabulary order,
/// so any unsigned primitive wide enough for the vocabulary works.
pub trait TokenType:
    'static + Default + Debug + Clone + Copy + Hash + Send + Sync + Unsigned + FromPrimitive + ToPrimitive + Ord
{
}

impl<T> TokenType for T where
    T: 'static
        + Default
        + Debug
        + Clone
        + Copy
        + Hash
        + Send
        + Sync
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Ord
{
}

/// Token string to T map.
pub type TokenToIdMap<T> = ahash::AHashMap<CompactString, T>;

/// Never-split token set.
pub type NeverSplitSet = ahash::AHashSet<CompactString>;

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Check if a type is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}
