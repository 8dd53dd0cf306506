use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, GlweDimension, LweDimension, PolynomialSize,
};
use crate::specification::entities::markers::LweBootstrapKeyKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying an LWE bootstrap key.
///
/// A bootstrap key contains one GGSW ciphertext per bit of an input LWE secret key, each
/// encrypted under an output GLWE secret key. It makes it possible to homomorphically evaluate
/// a lookup table over an input ciphertext, while resetting its noise to a nominal level.
pub trait LweBootstrapKeyEntity: AbstractEntity<Kind = LweBootstrapKeyKind> {
    /// Returns the GLWE dimension of the key.
    fn glwe_dimension(&self) -> GlweDimension;

    /// Returns the size of the polynomials of the key.
    fn polynomial_size(&self) -> PolynomialSize;

    /// Returns the input LWE dimension of the key.
    fn input_lwe_dimension(&self) -> LweDimension;

    /// Returns the output LWE dimension of the key.
    fn output_lwe_dimension(&self) -> LweDimension {
        LweDimension(self.glwe_dimension().0 * self.polynomial_size().0)
    }

    /// Returns the number of decomposition levels of the key.
    fn decomposition_level_count(&self) -> DecompositionLevelCount;

    /// Returns the logarithm of the base used in the decomposition of the key.
    fn decomposition_base_log(&self) -> DecompositionBaseLog;
}
