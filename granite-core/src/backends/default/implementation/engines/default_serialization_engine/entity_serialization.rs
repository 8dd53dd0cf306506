#![allow(clippy::missing_safety_doc)]

use crate::backends::default::implementation::engines::{
    DefaultSerializationEngine, DefaultSerializationError,
};
use crate::backends::default::implementation::entities::{
    Cleartext32, Cleartext32Version, Cleartext64, Cleartext64Version, GlweSecretKey32,
    GlweSecretKey32Version, GlweSecretKey64, GlweSecretKey64Version, LweBootstrapKey32,
    LweBootstrapKey32Version, LweBootstrapKey64, LweBootstrapKey64Version, LweCiphertext32,
    LweCiphertext32Version, LweCiphertext64, LweCiphertext64Version, LweCiphertextVector32,
    LweCiphertextVector32Version, LweCiphertextVector64, LweCiphertextVector64Version,
    LweKeyswitchKey32, LweKeyswitchKey32Version, LweKeyswitchKey64, LweKeyswitchKey64Version,
    LweSecretKey32, LweSecretKey32Version, LweSecretKey64, LweSecretKey64Version, Plaintext32,
    Plaintext32Version, Plaintext64, Plaintext64Version,
};
use crate::commons::crypto::bootstrap::StandardBootstrapKey as ImplStandardBootstrapKey;
use crate::commons::crypto::encoding::{
    Cleartext as ImplCleartext, Plaintext as ImplPlaintext,
};
use crate::commons::crypto::lwe::{
    LweCiphertext as ImplLweCiphertext, LweKeyswitchKey as ImplLweKeyswitchKey,
    LweList as ImplLweList,
};
use crate::commons::crypto::secret::{
    GlweSecretKey as ImplGlweSecretKey, LweSecretKey as ImplLweSecretKey,
};
use crate::specification::engines::{EntitySerializationEngine, EntitySerializationError};
use serde::Serialize;

macro_rules! implement_serialization {
    ($Entity:ident, $Version:ident, $Inner:ty, $doc:literal) => {
        #[doc = concat!("# Description:\nImplementation of [`EntitySerializationEngine`] for \
        [`DefaultSerializationEngine`] that operates on ", $doc, ".")]
        impl EntitySerializationEngine<$Entity, Vec<u8>> for DefaultSerializationEngine {
            fn serialize(
                &mut self,
                entity: &$Entity,
            ) -> Result<Vec<u8>, EntitySerializationError<Self::EngineError>> {
                #[derive(Serialize)]
                struct SerializableEntity<'a> {
                    version: $Version,
                    inner: &'a $Inner,
                }
                let serializable = SerializableEntity {
                    version: $Version::V0,
                    inner: &entity.0,
                };
                bincode::serialize(&serializable)
                    .map_err(DefaultSerializationError::Serialization)
                    .map_err(EntitySerializationError::Engine)
            }

            unsafe fn serialize_unchecked(&mut self, entity: &$Entity) -> Vec<u8> {
                self.serialize(entity).unwrap()
            }
        }
    };
}

implement_serialization!(
    Plaintext32,
    Plaintext32Version,
    ImplPlaintext<u32>,
    "a plaintext with 32 bits of precision"
);
implement_serialization!(
    Plaintext64,
    Plaintext64Version,
    ImplPlaintext<u64>,
    "a plaintext with 64 bits of precision"
);
implement_serialization!(
    Cleartext32,
    Cleartext32Version,
    ImplCleartext<u32>,
    "a cleartext with 32 bits of precision"
);
implement_serialization!(
    Cleartext64,
    Cleartext64Version,
    ImplCleartext<u64>,
    "a cleartext with 64 bits of precision"
);
implement_serialization!(
    LweCiphertext32,
    LweCiphertext32Version,
    ImplLweCiphertext<Vec<u32>>,
    "an LWE ciphertext with 32 bits of precision"
);
implement_serialization!(
    LweCiphertext64,
    LweCiphertext64Version,
    ImplLweCiphertext<Vec<u64>>,
    "an LWE ciphertext with 64 bits of precision"
);
implement_serialization!(
    LweCiphertextVector32,
    LweCiphertextVector32Version,
    ImplLweList<Vec<u32>>,
    "an LWE ciphertext vector with 32 bits of precision"
);
implement_serialization!(
    LweCiphertextVector64,
    LweCiphertextVector64Version,
    ImplLweList<Vec<u64>>,
    "an LWE ciphertext vector with 64 bits of precision"
);
implement_serialization!(
    LweSecretKey32,
    LweSecretKey32Version,
    ImplLweSecretKey<Vec<u32>>,
    "an LWE secret key with 32 bits of precision"
);
implement_serialization!(
    LweSecretKey64,
    LweSecretKey64Version,
    ImplLweSecretKey<Vec<u64>>,
    "an LWE secret key with 64 bits of precision"
);
implement_serialization!(
    GlweSecretKey32,
    GlweSecretKey32Version,
    ImplGlweSecretKey<Vec<u32>>,
    "a GLWE secret key with 32 bits of precision"
);
implement_serialization!(
    GlweSecretKey64,
    GlweSecretKey64Version,
    ImplGlweSecretKey<Vec<u64>>,
    "a GLWE secret key with 64 bits of precision"
);
implement_serialization!(
    LweKeyswitchKey32,
    LweKeyswitchKey32Version,
    ImplLweKeyswitchKey<Vec<u32>>,
    "an LWE keyswitch key with 32 bits of precision"
);
implement_serialization!(
    LweKeyswitchKey64,
    LweKeyswitchKey64Version,
    ImplLweKeyswitchKey<Vec<u64>>,
    "an LWE keyswitch key with 64 bits of precision"
);
implement_serialization!(
    LweBootstrapKey32,
    LweBootstrapKey32Version,
    ImplStandardBootstrapKey<Vec<u32>>,
    "an LWE bootstrap key with 32 bits of precision"
);
implement_serialization!(
    LweBootstrapKey64,
    LweBootstrapKey64Version,
    ImplStandardBootstrapKey<Vec<u64>>,
    "an LWE bootstrap key with 64 bits of precision"
);
