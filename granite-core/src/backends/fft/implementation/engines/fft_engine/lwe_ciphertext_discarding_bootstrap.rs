use crate::backends::default::{
    GlweCiphertext32, GlweCiphertext64, LweCiphertext32, LweCiphertext64,
};
use crate::backends::fft::implementation::engines::{FftEngine, FftError};
use crate::backends::fft::implementation::entities::{
    FftFourierLweBootstrapKey32, FftFourierLweBootstrapKey64,
};
use crate::backends::fft::private::crypto::bootstrap::bootstrap_scratch;
use crate::backends::fft::private::math::fft::Fft;
use crate::specification::engines::{
    LweCiphertextDiscardingBootstrapEngine, LweCiphertextDiscardingBootstrapError,
};
use crate::specification::entities::GlweCiphertextEntity;

/// # Description:
/// Implementation of [`LweCiphertextDiscardingBootstrapEngine`] for [`FftEngine`] that
/// operates on 32 bits integers.
impl
    LweCiphertextDiscardingBootstrapEngine<
        FftFourierLweBootstrapKey32,
        GlweCiphertext32,
        LweCiphertext32,
        LweCiphertext32,
    > for FftEngine
{
    /// # Example
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let (lwe_dim, glwe_dim, poly_size) = (LweDimension(4), GlweDimension(1), PolynomialSize(64));
    /// let (dec_lc, dec_bl) = (DecompositionLevelCount(3), DecompositionBaseLog(5));
    /// let noise = Variance(2_f64.powf(-25.));
    /// // Here a hard-set encoding is applied (shift by 20 bits)
    /// let input = 3_u32 << 20;
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut default_engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let mut fft_engine = FftEngine::new(())?;
    /// let lwe_sk: LweSecretKey32 = default_engine.generate_new_lwe_secret_key(lwe_dim)?;
    /// let glwe_sk: GlweSecretKey32 =
    ///     default_engine.generate_new_glwe_secret_key(glwe_dim, poly_size)?;
    /// let bsk: LweBootstrapKey32 =
    ///     default_engine.generate_new_lwe_bootstrap_key(&lwe_sk, &glwe_sk, dec_bl, dec_lc, noise)?;
    /// let fourier_bsk: FftFourierLweBootstrapKey32 = fft_engine.convert_lwe_bootstrap_key(&bsk)?;
    ///
    /// let lut = vec![3_u32 << 20; poly_size.0];
    /// let lut_as_plaintext_vector = default_engine.create_plaintext_vector_from(&lut)?;
    /// let acc = default_engine
    ///     .trivially_encrypt_glwe_ciphertext(glwe_dim.to_glwe_size(), &lut_as_plaintext_vector)?;
    ///
    /// let plaintext = default_engine.create_plaintext_from(&input)?;
    /// let input_ct = default_engine.encrypt_lwe_ciphertext(&lwe_sk, &plaintext, noise)?;
    /// let output_lwe_sk: LweSecretKey32 =
    ///     default_engine.generate_new_lwe_secret_key(LweDimension(glwe_dim.0 * poly_size.0))?;
    /// let mut output_ct = default_engine.zero_encrypt_lwe_ciphertext(&output_lwe_sk, noise)?;
    ///
    /// fft_engine.discard_bootstrap_lwe_ciphertext(&mut output_ct, &input_ct, &acc, &fourier_bsk)?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn discard_bootstrap_lwe_ciphertext(
        &mut self,
        output: &mut LweCiphertext32,
        input: &LweCiphertext32,
        acc: &GlweCiphertext32,
        bsk: &FftFourierLweBootstrapKey32,
    ) -> Result<(), LweCiphertextDiscardingBootstrapError<Self::EngineError>> {
        LweCiphertextDiscardingBootstrapError::perform_generic_checks(output, input, acc, bsk)?;
        FftError::perform_fft_checks(acc.polynomial_size())
            .map_err(LweCiphertextDiscardingBootstrapError::Engine)?;
        unsafe { self.discard_bootstrap_lwe_ciphertext_unchecked(output, input, acc, bsk) };
        Ok(())
    }

    unsafe fn discard_bootstrap_lwe_ciphertext_unchecked(
        &mut self,
        output: &mut LweCiphertext32,
        input: &LweCiphertext32,
        acc: &GlweCiphertext32,
        bsk: &FftFourierLweBootstrapKey32,
    ) {
        let fft = Fft::new(bsk.0.polynomial_size());
        let fft = fft.as_view();
        self.resize(
            bootstrap_scratch::<u32>(bsk.0.glwe_size(), bsk.0.polynomial_size(), fft)
                .unwrap()
                .unaligned_bytes_required(),
        );
        bsk.0
            .as_view()
            .bootstrap(&mut output.0, input.0.as_ref(), &acc.0, fft, self.stack());
    }
}

/// # Description:
/// Implementation of [`LweCiphertextDiscardingBootstrapEngine`] for [`FftEngine`] that
/// operates on 64 bits integers.
impl
    LweCiphertextDiscardingBootstrapEngine<
        FftFourierLweBootstrapKey64,
        GlweCiphertext64,
        LweCiphertext64,
        LweCiphertext64,
    > for FftEngine
{
    fn discard_bootstrap_lwe_ciphertext(
        &mut self,
        output: &mut LweCiphertext64,
        input: &LweCiphertext64,
        acc: &GlweCiphertext64,
        bsk: &FftFourierLweBootstrapKey64,
    ) -> Result<(), LweCiphertextDiscardingBootstrapError<Self::EngineError>> {
        LweCiphertextDiscardingBootstrapError::perform_generic_checks(output, input, acc, bsk)?;
        FftError::perform_fft_checks(acc.polynomial_size())
            .map_err(LweCiphertextDiscardingBootstrapError::Engine)?;
        unsafe { self.discard_bootstrap_lwe_ciphertext_unchecked(output, input, acc, bsk) };
        Ok(())
    }

    unsafe fn discard_bootstrap_lwe_ciphertext_unchecked(
        &mut self,
        output: &mut LweCiphertext64,
        input: &LweCiphertext64,
        acc: &GlweCiphertext64,
        bsk: &FftFourierLweBootstrapKey64,
    ) {
        let fft = Fft::new(bsk.0.polynomial_size());
        let fft = fft.as_view();
        self.resize(
            bootstrap_scratch::<u64>(bsk.0.glwe_size(), bsk.0.polynomial_size(), fft)
                .unwrap()
                .unaligned_bytes_required(),
        );
        bsk.0
            .as_view()
            .bootstrap(&mut output.0, input.0.as_ref(), &acc.0, fft, self.stack());
    }
}
