use crate::specification::entities::markers::PlaintextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a plaintext.
///
/// A plaintext is the encoding of a message on the torus, ready to be encrypted.
pub trait PlaintextEntity: AbstractEntity<Kind = PlaintextKind> {}
