//! A module containing the entities of the default backend.

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
