use crate::backends::default::{LweBootstrapKey32, LweBootstrapKey64};
use crate::backends::fft::implementation::engines::{FftEngine, FftError};
use crate::backends::fft::implementation::entities::{
    FftFourierLweBootstrapKey32, FftFourierLweBootstrapKey64,
};
use crate::backends::fft::private::crypto::bootstrap::{
    fill_with_forward_fourier_scratch, FourierLweBootstrapKey,
};
use crate::backends::fft::private::math::fft::Fft;
use crate::specification::engines::{
    LweBootstrapKeyConversionEngine, LweBootstrapKeyConversionError,
};
use crate::specification::entities::LweBootstrapKeyEntity;
use aligned_vec::avec;
use concrete_fft::c64;

/// # Description:
/// Implementation of [`LweBootstrapKeyConversionEngine`] for [`FftEngine`] that operates on
/// 32 bits integers. It converts a bootstrap key from the standard to the Fourier domain.
impl LweBootstrapKeyConversionEngine<LweBootstrapKey32, FftFourierLweBootstrapKey32>
    for FftEngine
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
    ///
    /// let fourier_bsk: FftFourierLweBootstrapKey32 = fft_engine.convert_lwe_bootstrap_key(&bsk)?;
    /// #
    /// assert_eq!(fourier_bsk.glwe_dimension(), glwe_dim);
    /// assert_eq!(fourier_bsk.polynomial_size(), poly_size);
    /// assert_eq!(fourier_bsk.input_lwe_dimension(), lwe_dim);
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn convert_lwe_bootstrap_key(
        &mut self,
        input: &LweBootstrapKey32,
    ) -> Result<FftFourierLweBootstrapKey32, LweBootstrapKeyConversionError<Self::EngineError>>
    {
        FftError::perform_fft_checks(input.polynomial_size())
            .map_err(LweBootstrapKeyConversionError::Engine)?;
        Ok(unsafe { self.convert_lwe_bootstrap_key_unchecked(input) })
    }

    unsafe fn convert_lwe_bootstrap_key_unchecked(
        &mut self,
        input: &LweBootstrapKey32,
    ) -> FftFourierLweBootstrapKey32 {
        let glwe_size = input.0.glwe_size();
        let polynomial_size = input.0.polynomial_size();
        let fourier = FourierLweBootstrapKey::from_container(
            avec![
                c64::default();
                input.0.key_size().0
                    * polynomial_size.0 / 2
                    * input.0.decomposition_level_count().0
                    * glwe_size.0
                    * glwe_size.0
            ]
            .into_boxed_slice(),
            input.0.key_size(),
            glwe_size,
            polynomial_size,
            input.0.decomposition_base_log(),
            input.0.decomposition_level_count(),
        );
        let mut output = FftFourierLweBootstrapKey32(fourier);
        let fft = Fft::new(polynomial_size);
        let fft = fft.as_view();
        self.resize(
            fill_with_forward_fourier_scratch(fft)
                .unwrap()
                .unaligned_bytes_required(),
        );
        output
            .0
            .as_mut_view()
            .fill_with_forward_fourier(&input.0, fft, self.stack());
        output
    }
}

/// # Description:
/// Implementation of [`LweBootstrapKeyConversionEngine`] for [`FftEngine`] that operates on
/// 64 bits integers. It converts a bootstrap key from the standard to the Fourier domain.
impl LweBootstrapKeyConversionEngine<LweBootstrapKey64, FftFourierLweBootstrapKey64>
    for FftEngine
{
    fn convert_lwe_bootstrap_key(
        &mut self,
        input: &LweBootstrapKey64,
    ) -> Result<FftFourierLweBootstrapKey64, LweBootstrapKeyConversionError<Self::EngineError>>
    {
        FftError::perform_fft_checks(input.polynomial_size())
            .map_err(LweBootstrapKeyConversionError::Engine)?;
        Ok(unsafe { self.convert_lwe_bootstrap_key_unchecked(input) })
    }

    unsafe fn convert_lwe_bootstrap_key_unchecked(
        &mut self,
        input: &LweBootstrapKey64,
    ) -> FftFourierLweBootstrapKey64 {
        let glwe_size = input.0.glwe_size();
        let polynomial_size = input.0.polynomial_size();
        let fourier = FourierLweBootstrapKey::from_container(
            avec![
                c64::default();
                input.0.key_size().0
                    * polynomial_size.0 / 2
                    * input.0.decomposition_level_count().0
                    * glwe_size.0
                    * glwe_size.0
            ]
            .into_boxed_slice(),
            input.0.key_size(),
            glwe_size,
            polynomial_size,
            input.0.decomposition_base_log(),
            input.0.decomposition_level_count(),
        );
        let mut output = FftFourierLweBootstrapKey64(fourier);
        let fft = Fft::new(polynomial_size);
        let fft = fft.as_view();
        self.resize(
            fill_with_forward_fourier_scratch(fft)
                .unwrap()
                .unaligned_bytes_required(),
        );
        output
            .0
            .as_mut_view()
            .fill_with_forward_fourier(&input.0, fft, self.stack());
        output
    }
}
