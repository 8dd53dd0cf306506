use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweCiphertextEntity;

engine_error! {
    LweCiphertextCreationError for LweCiphertextCreationEngine @
    EmptyContainer => "The container used to create the LWE ciphertext is of length 0!"
}

impl<EngineError: std::error::Error> LweCiphertextCreationError<EngineError> {
    /// Validates the inputs
    pub fn perform_generic_checks(container_length: usize) -> Result<(), Self> {
        if container_length == 0 {
            return Err(Self::EmptyContainer);
        }
        Ok(())
    }
}

/// A trait for engines creating an LWE ciphertext from an arbitrary container.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation creates an LWE ciphertext from the
/// abstract `Container`. The container is interpreted as the concatenation of the mask and
/// the body of the ciphertext; its length must hence be the LWE dimension plus one.
///
/// Implementations of this trait for containers which do not own their memory (slices,
/// mutable slices) produce the _view_ entities: non-owning ciphertext wrappers over caller
/// memory. The lifetime of a view entity is bound to the buffer it borrows.
pub trait LweCiphertextCreationEngine<Container, Ciphertext>: AbstractEngine
where
    Ciphertext: LweCiphertextEntity,
{
    /// Creates an LWE ciphertext from an arbitrary container.
    fn create_lwe_ciphertext_from(
        &mut self,
        container: Container,
    ) -> Result<Ciphertext, LweCiphertextCreationError<Self::EngineError>>;

    /// Unsafely creates an LWE ciphertext from an arbitrary container.
    ///
    /// # Safety
    /// For the _general_ safety concerns regarding this operation, refer to the different
    /// variants of [`LweCiphertextCreationError`]. For safety concerns _specific_ to an
    /// engine, refer to the implementer safety section.
    unsafe fn create_lwe_ciphertext_from_unchecked(&mut self, container: Container)
        -> Ciphertext;
}
