#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type NodeMap<N, V> = HashMap<N, V>;
#[cfg(not(feature = "std"))]
pub(crate) type NodeMap<N, V> = BTreeMap<N, V>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait NodeKey: core::hash::Hash + Eq + Copy + core::fmt::Debug {}
#[cfg(feature = "std")]
impl<N: core::hash::Hash + Eq + Copy + core::fmt::Debug> NodeKey for N {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait NodeKey: Ord + Copy + core::fmt::Debug {}
#[cfg(not(feature = "std"))]
impl<N: Ord + Copy + core::fmt::Debug> NodeKey for N {}
