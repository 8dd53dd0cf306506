use crate::specification::engines::sealed::AbstractEngineSeal;
use crate::specification::engines::AbstractEngine;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error which can occur in the execution of FHE operations, due to the default
/// serialization implementation.
#[derive(Debug)]
#[non_exhaustive]
pub enum DefaultSerializationError {
    Serialization(bincode::Error),
    Deserialization(bincode::Error),
    UnsupportedVersion,
}

impl Display for DefaultSerializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultSerializationError::Serialization(bincode_error) => {
                write!(f, "Failed to serialize entity: {bincode_error}")
            }
            DefaultSerializationError::Deserialization(bincode_error) => {
                write!(f, "Failed to deserialize entity: {bincode_error}")
            }
            DefaultSerializationError::UnsupportedVersion => {
                write!(
                    f,
                    "The version used to serialize the entity is not supported."
                )
            }
        }
    }
}

impl Error for DefaultSerializationError {}

/// The serialization engine exposed by the default backend.
///
/// Every serialized blob starts with a version tag specific to the entity type and precision:
/// the layout of an entity can evolve independently of the others, and a blob serialized by an
/// incompatible version of the library is rejected at deserialization time.
pub struct DefaultSerializationEngine;

impl AbstractEngineSeal for DefaultSerializationEngine {}

impl AbstractEngine for DefaultSerializationEngine {
    type EngineError = DefaultSerializationError;

    type Parameters = ();

    fn new(_parameters: Self::Parameters) -> Result<Self, Self::EngineError> {
        Ok(DefaultSerializationEngine)
    }
}

mod entity_deserialization;
mod entity_serialization;
