use crate::specification::entities::markers::EntityKindMarker;
use std::fmt::Debug;

/// The top-level abstraction for entities of the FHE scheme.
///
/// An `AbstractEntity` type is nothing more than a type with an associated
/// [`Kind`](`AbstractEntity::Kind`) marker, encoding _what_ the entity is in the type system.
/// Every entity trait of this module further constrains the value of this marker: as a
/// consequence, a concrete type can embody at most one entity kind.
pub trait AbstractEntity: Debug {
    /// The _kind_ of the entity.
    type Kind: EntityKindMarker;
}
