//! A module containing specifications of the FHE entities.
//!
//! In practice, __entities__ are types which implement:
//!
//! + The [`AbstractEntity`] super-trait.
//! + One of the `*Entity` traits.
//!
//! The associated [`AbstractEntity::Kind`] type encodes in the type system the kind of the
//! entity, that is, what abstract cryptographic object the type embodies. A concrete type can
//! be of a single kind: declaring a type which implements two different entity traits is a
//! compile-time error, since the two traits force different values for the `Kind` associated
//! type.

pub mod markers;

mod abstract_entity;
mod cleartext;
mod glwe_ciphertext;
mod glwe_secret_key;
mod lwe_bootstrap_key;
mod lwe_ciphertext;
mod lwe_ciphertext_vector;
mod lwe_keyswitch_key;
mod lwe_secret_key;
mod plaintext;
mod plaintext_vector;

pub use abstract_entity::*;
pub use cleartext::*;
pub use glwe_ciphertext::*;
pub use glwe_secret_key::*;
pub use lwe_bootstrap_key::*;
pub use lwe_ciphertext::*;
pub use lwe_ciphertext_vector::*;
pub use lwe_keyswitch_key::*;
pub use lwe_secret_key::*;
pub use plaintext::*;
pub use plaintext_vector::*;
