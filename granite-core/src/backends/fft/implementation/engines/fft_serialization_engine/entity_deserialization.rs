#![allow(clippy::missing_safety_doc)]

use crate::backends::fft::implementation::engines::{
    FftSerializationEngine, FftSerializationError,
};
use crate::backends::fft::implementation::entities::{
    FftFourierLweBootstrapKey32, FftFourierLweBootstrapKey32Version, FftFourierLweBootstrapKey64,
    FftFourierLweBootstrapKey64Version,
};
use crate::backends::fft::private::crypto::bootstrap::FourierLweBootstrapKey;
use crate::specification::engines::{
    EntityDeserializationEngine, EntityDeserializationError,
};
use aligned_vec::ABox;
use concrete_fft::c64;
use serde::Deserialize;

macro_rules! implement_deserialization {
    ($Entity:ident, $Version:ident, $doc:literal) => {
        #[doc = concat!("# Description:\nImplementation of [`EntityDeserializationEngine`] for \
        [`FftSerializationEngine`] that operates on ", $doc, ".")]
        impl EntityDeserializationEngine<&[u8], $Entity> for FftSerializationEngine {
            fn deserialize(
                &mut self,
                serialized: &[u8],
            ) -> Result<$Entity, EntityDeserializationError<Self::EngineError>> {
                #[derive(Deserialize)]
                struct DeserializableEntity {
                    version: $Version,
                    inner: FourierLweBootstrapKey<ABox<[c64]>>,
                }
                let deserialized: DeserializableEntity = bincode::deserialize(serialized)
                    .map_err(FftSerializationError::Deserialization)
                    .map_err(EntityDeserializationError::Engine)?;
                match deserialized {
                    DeserializableEntity {
                        version: $Version::Unsupported,
                        ..
                    } => Err(EntityDeserializationError::Engine(
                        FftSerializationError::UnsupportedVersion,
                    )),
                    DeserializableEntity {
                        version: $Version::V0,
                        inner,
                    } => Ok($Entity(inner)),
                }
            }

            unsafe fn deserialize_unchecked(&mut self, serialized: &[u8]) -> $Entity {
                self.deserialize(serialized).unwrap()
            }
        }
    };
}

implement_deserialization!(
    FftFourierLweBootstrapKey32,
    FftFourierLweBootstrapKey32Version,
    "a Fourier bootstrap key with 32 bits of precision"
);
implement_deserialization!(
    FftFourierLweBootstrapKey64,
    FftFourierLweBootstrapKey64Version,
    "a Fourier bootstrap key with 64 bits of precision"
);
