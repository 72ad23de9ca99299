#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod error;
pub mod linked_map;
pub mod list;
pub mod lru;
pub mod table;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

use core::num::NonZeroU32;

pub use error::Error;
pub use error::Result;
pub use linked_map::LinkedMap;
pub use list::List;
pub use lru::LruCache;
pub use table::HashTable;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A handle identifying an entry inside one of this crate's containers.
///
/// A `Ptr` is an opaque index into the arena of the container that issued it.
/// It provides O(1) access without a key lookup and stays valid until the
/// entry it names is removed: container growth (including hash-table bucket
/// expansion) never moves entries, so held handles survive it. Handles are
/// **non-generational** — once an entry is removed, its slot and handle may
/// be reused by a later insertion.
///
/// A handle is only meaningful together with the container that issued it.
/// Passing it to another container is memory-safe but yields an unrelated
/// entry or an error.
///
/// `Option<Ptr>` is the same size as `Ptr`.
///
/// # Examples
///
/// ```
/// use lash_map::LinkedMap;
///
/// let mut map = LinkedMap::new();
/// let (ptr, _) = map.insert_full("key", 42);
///
/// assert_eq!(map.ptr_get(ptr), Some(&42));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) const fn unchecked_from(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "index too large to fit in Ptr");
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) const fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
