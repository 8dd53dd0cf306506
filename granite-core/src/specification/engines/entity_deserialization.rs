use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::AbstractEntity;

engine_error! {
    EntityDeserializationError for EntityDeserializationEngine @
}

/// A trait for engines deserializing entities.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation deserializes the `serialized` type to an
/// `Entity` entity. A serialized blob produced by a different backend, a different entity
/// type, or an unknown version tag is rejected through the engine error.
pub trait EntityDeserializationEngine<Serialized, Entity>: AbstractEngine
where
    Entity: AbstractEntity,
{
    /// Deserializes an entity.
    fn deserialize(
        &mut self,
        serialized: Serialized,
    ) -> Result<Entity, EntityDeserializationError<Self::EngineError>>;

    /// Unsafely deserializes an entity.
    ///
    /// # Safety
    /// For the _general_ safety concerns regarding this operation, refer to the different
    /// variants of [`EntityDeserializationError`]. For safety concerns _specific_ to an
    /// engine, refer to the implementer safety section.
    unsafe fn deserialize_unchecked(&mut self, serialized: Serialized) -> Entity;
}
