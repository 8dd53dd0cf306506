//! A module containing specifications of the FHE engines.
//!
//! In practice, __engines__ are types which implement:
//!
//! + The [`AbstractEngine`] super-trait.
//! + Any number of `*Engine` traits, one per operation they provide.
//!
//! An engine is a stateful object: it owns the side-resources needed to execute operations
//! (a randomness source, a scratch memory, a pool of threads), and two operations executed
//! through the same engine execute in call order. Engines are _not_ thread-safe: to operate
//! from multiple threads, use one engine per thread, or a backend specialized for internal
//! concurrency.
//!
//! # Operation semantics
//!
//! Every operation is exposed under one of three conventions, visible in the name of the
//! engine trait:
//!
//! + __Pure__ operations (no keyword in the name) take their inputs by reference, allocate a
//!   fresh output entity, and return it. They do not mutate their inputs, but pay an
//!   allocation on every call.
//! + __Discarding__ operations take their output entity as a mutable argument and overwrite
//!   it entirely, regardless of its previous content. They let latency-sensitive callers
//!   amortize allocations across repeated calls.
//! + __Fusing__ operations take their output entity as a mutable argument, and use its
//!   current content as one of the operands: the result is fused with the existing value
//!   (for instance, adding a ciphertext _into_ another one).
//!
//! # Checked and unchecked entry points
//!
//! Every operation exposes two entry points computing the same result:
//!
//! + The _checked_ entry point (for example
//!   [`LweCiphertextEncryptionEngine::encrypt_lwe_ciphertext`]) verifies all the documented
//!   preconditions of the operation, and returns a descriptive error without executing
//!   anything if one of them is violated.
//! + The _unchecked_ entry point (for example
//!   [`LweCiphertextEncryptionEngine::encrypt_lwe_ciphertext_unchecked`]) skips the
//!   verifications and executes the operation directly. It is an `unsafe fn`: if the caller
//!   violates a precondition, the behavior of the operation is undefined (it may produce
//!   incorrect results, corrupt memory, or crash).
//!
//! Both entry points share the same core routine: the checked one is defined as "verify the
//! preconditions, then call the unchecked one".
//!
//! # Errors
//!
//! The error type of an operation is generated by the `engine_error!` macro: a closed set
//! of generic precondition variants, which any backend implementing the operation may report,
//! plus one `Engine` variant wrapping the
//! [`EngineError`](`AbstractEngine::EngineError`) of the implementing backend.
use std::error::Error;

/// A macro generating the error type of an operation, from the name of the trait and the list
/// of generic precondition variants.
///
/// The generated type is an enum with one variant per precondition, plus an `Engine` variant
/// wrapping the error type of the engine implementing the operation.
macro_rules! engine_error {
    ($name:ident for $trait_:ident @) => {
        #[doc=concat!("An error used with the [`", stringify!($trait_), "`] trait.")]
        #[non_exhaustive]
        #[derive(Debug, Clone, Eq, PartialEq)]
        pub enum $name<EngineError: std::error::Error> {
            #[doc="_Specific_ error to the implementing engine."]
            Engine(EngineError),
        }
        impl<EngineError: std::error::Error> std::fmt::Display for $name<EngineError> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    Self::Engine(error) => write!(f, "Error occurred in the engine: {error}"),
                }
            }
        }
        impl<EngineError: std::error::Error> std::error::Error for $name<EngineError> {}
    };
    ($name:ident for $trait_:ident @ $($variants:ident => $description:literal),+) => {
        #[doc=concat!("An error used with the [`", stringify!($trait_), "`] trait.")]
        #[doc=""]
        #[doc="This type provides a `perform_generic_checks` function that does error checking \
        for the general cases, returning an `Ok(())` if the checks are valid, and an `Err(..)` \
        otherwise."]
        #[non_exhaustive]
        #[derive(Debug, Clone, Eq, PartialEq)]
        pub enum $name<EngineError: std::error::Error> {
            $(
                #[doc=$description]
                $variants,
            )*
            #[doc="_Specific_ error to the implementing engine."]
            Engine(EngineError),
        }
        impl<EngineError: std::error::Error> std::fmt::Display for $name<EngineError> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variants => write!(f, $description),
                    )*
                    Self::Engine(error) => write!(f, "Error occurred in the engine: {error}"),
                }
            }
        }
        impl<EngineError: std::error::Error> std::error::Error for $name<EngineError> {}
    };
}
pub(crate) use engine_error;

/// The top level abstraction for engines.
///
/// An `AbstractEngine` is nothing more than a type with an associated error type
/// [`EngineError`](`AbstractEngine::EngineError`) and a default constructor.
///
/// The error type encodes the failure cases _specific_ to the engine: the errors common to
/// every engine implementing a given operation are encoded in the operation error type
/// instead (see the `engine_error!` macro).
pub trait AbstractEngine: sealed::AbstractEngineSeal {
    // # Why put the error type in an abstract super trait ?
    //
    // This error is supposed to be reduced to only engine related errors, and not ones related
    // to the operations. For this reason, it is better for an engine to only have one error
    // shared among all the operations. If a variant of this error can only be triggered for a
    // single operation implemented by the engine, then it should probably be moved upstream,
    // in the operation-specific error.

    /// The error associated to the engine.
    type EngineError: Error;

    /// The constructor parameters type.
    type Parameters;

    /// A constructor for the engine.
    fn new(parameters: Self::Parameters) -> Result<Self, Self::EngineError>
    where
        Self: Sized;
}

pub(crate) mod sealed {
    pub trait AbstractEngineSeal {}
}

mod cleartext_creation;
mod cleartext_retrieval;
mod entity_deserialization;
mod entity_serialization;
mod glwe_ciphertext_creation;
mod glwe_ciphertext_trivial_encryption;
mod glwe_secret_key_generation;
mod glwe_to_lwe_secret_key_transformation;
mod lwe_bootstrap_key_conversion;
mod lwe_bootstrap_key_generation;
mod lwe_ciphertext_cleartext_discarding_multiplication;
mod lwe_ciphertext_cleartext_fusing_multiplication;
mod lwe_ciphertext_consuming_retrieval;
mod lwe_ciphertext_creation;
mod lwe_ciphertext_decryption;
mod lwe_ciphertext_discarding_addition;
mod lwe_ciphertext_discarding_bootstrap;
mod lwe_ciphertext_discarding_encryption;
mod lwe_ciphertext_discarding_keyswitch;
mod lwe_ciphertext_discarding_opposite;
mod lwe_ciphertext_encryption;
mod lwe_ciphertext_fusing_addition;
mod lwe_ciphertext_trivial_encryption;
mod lwe_ciphertext_vector_decryption;
mod lwe_ciphertext_vector_encryption;
mod lwe_ciphertext_vector_zero_encryption;
mod lwe_ciphertext_zero_encryption;
mod lwe_keyswitch_key_generation;
mod lwe_secret_key_generation;
mod plaintext_creation;
mod plaintext_retrieval;
mod plaintext_vector_creation;
mod plaintext_vector_retrieval;

pub use cleartext_creation::*;
pub use cleartext_retrieval::*;
pub use entity_deserialization::*;
pub use entity_serialization::*;
pub use glwe_ciphertext_creation::*;
pub use glwe_ciphertext_trivial_encryption::*;
pub use glwe_secret_key_generation::*;
pub use glwe_to_lwe_secret_key_transformation::*;
pub use lwe_bootstrap_key_conversion::*;
pub use lwe_bootstrap_key_generation::*;
pub use lwe_ciphertext_cleartext_discarding_multiplication::*;
pub use lwe_ciphertext_cleartext_fusing_multiplication::*;
pub use lwe_ciphertext_consuming_retrieval::*;
pub use lwe_ciphertext_creation::*;
pub use lwe_ciphertext_decryption::*;
pub use lwe_ciphertext_discarding_addition::*;
pub use lwe_ciphertext_discarding_bootstrap::*;
pub use lwe_ciphertext_discarding_encryption::*;
pub use lwe_ciphertext_discarding_keyswitch::*;
pub use lwe_ciphertext_discarding_opposite::*;
pub use lwe_ciphertext_encryption::*;
pub use lwe_ciphertext_fusing_addition::*;
pub use lwe_ciphertext_trivial_encryption::*;
pub use lwe_ciphertext_vector_decryption::*;
pub use lwe_ciphertext_vector_encryption::*;
pub use lwe_ciphertext_vector_zero_encryption::*;
pub use lwe_ciphertext_zero_encryption::*;
pub use lwe_keyswitch_key_generation::*;
pub use lwe_secret_key_generation::*;
pub use plaintext_creation::*;
pub use plaintext_retrieval::*;
pub use plaintext_vector_creation::*;
pub use plaintext_vector_retrieval::*;
