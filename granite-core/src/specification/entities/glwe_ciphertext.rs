use crate::commons::parameters::{GlweDimension, PolynomialSize};
use crate::specification::entities::markers::GlweCiphertextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a GLWE ciphertext.
///
/// # Formal Definition
///
/// ## GLWE Ciphertext
///
/// A GLWE ciphertext is an encryption of a polynomial plaintext. It is secure under the
/// hardness assumption called General Learning With Errors (GLWE).
///
/// We call $q$ the ciphertext modulus, $N$ the polynomial size and $k$ the GLWE dimension.
pub trait GlweCiphertextEntity: AbstractEntity<Kind = GlweCiphertextKind> {
    /// Returns the GLWE dimension of the ciphertext.
    fn glwe_dimension(&self) -> GlweDimension;

    /// Returns the polynomial size of the ciphertext.
    fn polynomial_size(&self) -> PolynomialSize;
}
