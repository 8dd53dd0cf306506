//! A blueprint of the FHE scheme exposed by `granite-core`.
//!
//! This module contains the traits any backend must implement: the [`entities`] module
//! specifies the data types of the scheme, and the [`engines`] module specifies the operators
//! acting on them. Backends are free to implement any subset of those traits; which backends
//! are compiled in is decided by cargo features, never at runtime.

pub mod engines;
pub mod entities;
