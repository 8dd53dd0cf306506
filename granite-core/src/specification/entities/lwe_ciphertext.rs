use crate::commons::parameters::LweDimension;
use crate::specification::entities::markers::LweCiphertextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying an LWE ciphertext.
///
/// # Formal Definition
///
/// ## LWE Ciphertext
///
/// An LWE ciphertext is an encryption of a plaintext. It is secure under the hardness
/// assumption called Learning With Errors (LWE). It is a specialization of
/// GLWE ciphertexts.
///
/// We call $q$ the ciphertext modulus and $n$ the LWE dimension.
///
/// We indicate an LWE ciphertext of a plaintext $\mathsf{pt} \in\mathbb{Z}\_q$ as the following
/// couple: $$\mathsf{ct} = \left( \vec{a} , b\right) \in \mathsf{LWE}^n\_{\vec{s}}(
/// \mathsf{pt} )\subseteq \mathbb{Z}\_q^{(n+1)}$$
pub trait LweCiphertextEntity: AbstractEntity<Kind = LweCiphertextKind> {
    /// Returns the LWE dimension of the ciphertext.
    fn lwe_dimension(&self) -> LweDimension;
}
