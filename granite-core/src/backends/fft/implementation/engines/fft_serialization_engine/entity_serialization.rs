#![allow(clippy::missing_safety_doc)]

use crate::backends::fft::implementation::engines::{
    FftSerializationEngine, FftSerializationError,
};
use crate::backends::fft::implementation::entities::{
    FftFourierLweBootstrapKey32, FftFourierLweBootstrapKey32Version, FftFourierLweBootstrapKey64,
    FftFourierLweBootstrapKey64Version,
};
use crate::backends::fft::private::crypto::bootstrap::FourierLweBootstrapKey;
use crate::specification::engines::{EntitySerializationEngine, EntitySerializationError};
use aligned_vec::ABox;
use concrete_fft::c64;
use serde::Serialize;

macro_rules! implement_serialization {
    ($Entity:ident, $Version:ident, $doc:literal) => {
        #[doc = concat!("# Description:\nImplementation of [`EntitySerializationEngine`] for \
        [`FftSerializationEngine`] that operates on ", $doc, ".")]
        impl EntitySerializationEngine<$Entity, Vec<u8>> for FftSerializationEngine {
            fn serialize(
                &mut self,
                entity: &$Entity,
            ) -> Result<Vec<u8>, EntitySerializationError<Self::EngineError>> {
                #[derive(Serialize)]
                struct SerializableEntity<'a> {
                    version: $Version,
                    inner: &'a FourierLweBootstrapKey<ABox<[c64]>>,
                }
                let serializable = SerializableEntity {
                    version: $Version::V0,
                    inner: &entity.0,
                };
                bincode::serialize(&serializable)
                    .map_err(FftSerializationError::Serialization)
                    .map_err(EntitySerializationError::Engine)
            }

            unsafe fn serialize_unchecked(&mut self, entity: &$Entity) -> Vec<u8> {
                self.serialize(entity).unwrap()
            }
        }
    };
}

implement_serialization!(
    FftFourierLweBootstrapKey32,
    FftFourierLweBootstrapKey32Version,
    "a Fourier bootstrap key with 32 bits of precision"
);
implement_serialization!(
    FftFourierLweBootstrapKey64,
    FftFourierLweBootstrapKey64Version,
    "a Fourier bootstrap key with 64 bits of precision"
);
