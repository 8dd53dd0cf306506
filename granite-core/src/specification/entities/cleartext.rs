use crate::specification::entities::markers::CleartextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a cleartext.
///
/// A cleartext is a raw message, not encoded on the torus. Cleartexts typically appear as the
/// second operand of an operation mixing encrypted and clear data, such as the multiplication
/// of a ciphertext by a clear integer.
pub trait CleartextEntity: AbstractEntity<Kind = CleartextKind> {}
