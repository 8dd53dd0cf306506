//! A module containing the backends of `granite-core`.
//!
//! A backend is an independently togglable bundle of entity and engine types implementing a
//! subset of the [`specification`](crate::specification). Backends are peers: a given
//! operation may be provided by zero, one or several backends at once, and the caller selects
//! an implementation by choosing which engine and entity types to instantiate. A backend
//! which is not compiled in (its `backend_*` feature being disabled) is entirely absent from
//! the library surface.

#[cfg(feature = "backend_default")]
pub mod default;

#[cfg(feature = "backend_fft")]
pub mod fft;
