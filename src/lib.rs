//! Bijections of finite sets and the groups they form
//!
//! This crate enumerates every bijection of a finite set onto itself and provides the group of
//! these bijections under composition.
//!
//! Sets are represented by [`Domain`]s, which fix an order of their elements. All bijections of a
//! domain are enumerated by [`bijections_of`] using Heap's algorithm and can be retrieved by index
//! using [`find_nth_bijection`]. The [`Group`] trait describes groups in terms of a binary
//! operation, an identity and inverses, and [`BijectionGroup`] implements it for [`Mapping`]s, i.e.
//! function values, over a fixed carrier set.
//!
//! Enumeration takes time and space proportional to `n!` for `n` elements, this is only practical
//! for small sets.
//!
pub mod action;
pub mod bijection;
pub mod domain;
pub mod error;
pub mod group;
pub mod heap;
pub mod mapping;
pub mod sample;

pub use crate::bijection::{bijections_of, find_nth_bijection, Bijection, BijectionSet};
pub use crate::domain::Domain;
pub use crate::error::Error;
pub use crate::group::{BijectionGroup, Group};
pub use crate::mapping::Mapping;
