#![deny(rustdoc::broken_intra_doc_links)]
//! Welcome to the `granite-core` documentation!
//!
//! # Fully Homomorphic Encryption
//!
//! This library contains low-level primitives which can be used to implement *fully
//! homomorphically encrypted* programs. In a nutshell, fully homomorphic encryption makes it
//! possible to perform arbitrary computations over encrypted data. With FHE, you can perform
//! computations without putting your trust in the hardware the computation runs on.
//!
//! # Architecture
//!
//! `granite-core` is a modular library based on two main components:
//!
//! + The [`specification`] module contains a blueprint (in the form of traits) of the FHE scheme
//!   exposed in `granite-core`.
//! + The [`backends`] module contains various implementations of the traits defined in the
//!   specification.
//!
//! Data objects of the scheme (we call them *entities*) and operators over those objects (we call
//! them *engines*) are both specified by traits, and backends are free to implement any subset of
//! them. Backends are selected at build time through cargo features, never at runtime.
//!
//! # Activating backends
//!
//! The different backends can be activated using the feature flags `backend_*`. The `default`
//! feature set activates the pure-CPU backends and the unix seeder:
//!
//! + `backend_default` activates the [`backends::default`] backend.
//! + `backend_default_parallel` activates the multithreaded engine of the default backend.
//! + `backend_default_serialization` activates the serialization engine of the default backend.
//! + `backend_fft` activates the [`backends::fft`] backend.
//! + `backend_fft_serialization` activates the serialization of fft entities.
//!
//! # Navigating the code
//!
//! If you are not familiar with the library, the best entry point is the [`specification`]
//! module documentation, which defines the vocabulary used everywhere else (entities, engines,
//! operation semantics, checked and unchecked entry points).
pub mod backends;
pub mod commons;
pub mod prelude;
pub mod specification;
