use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, LweDimension,
};
use crate::specification::entities::markers::LweKeyswitchKeyKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying an LWE keyswitch key.
///
/// An LWE keyswitch key makes it possible to convert a ciphertext encrypted under a first key
/// into a ciphertext of the same message encrypted under a second key, without knowing either
/// of them.
pub trait LweKeyswitchKeyEntity: AbstractEntity<Kind = LweKeyswitchKeyKind> {
    /// Returns the input LWE dimension of the key.
    fn input_lwe_dimension(&self) -> LweDimension;

    /// Returns the output LWE dimension of the key.
    fn output_lwe_dimension(&self) -> LweDimension;

    /// Returns the number of decomposition levels of the key.
    fn decomposition_level_count(&self) -> DecompositionLevelCount;

    /// Returns the logarithm of the base used in the decomposition of the key.
    fn decomposition_base_log(&self) -> DecompositionBaseLog;
}
