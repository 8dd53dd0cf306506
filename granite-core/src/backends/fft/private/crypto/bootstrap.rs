//! Bootstrap keys in the Fourier domain, and the programmable bootstrap.

use super::super::math::fft::{FftView, FourierPolynomialList};
use super::ggsw::{cmux, cmux_scratch, FourierGgswCiphertext};
use crate::commons::crypto::bootstrap::StandardBootstrapKey;
use crate::commons::crypto::glwe::GlweCiphertext;
use crate::commons::crypto::lwe::LweCiphertext;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, GlweSize, LweDimension, MonomialDegree,
    PolynomialSize,
};
use crate::commons::traits::{Container, ContainerMut, Split};
use crate::commons::utils::izip;
use aligned_vec::CACHELINE_ALIGN;
use concrete_fft::c64;
use dyn_stack::{DynStack, ReborrowMut, SizeOverflow, StackReq};

/// A bootstrap key in the Fourier domain: one Fourier GGSW ciphertext per bit of the input
/// LWE secret key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "backend_fft_serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(deserialize = "C: crate::commons::traits::IntoContainerOwned"))
)]
pub struct FourierLweBootstrapKey<C: Container<Element = c64>> {
    fourier: FourierPolynomialList<C>,
    key_size: LweDimension,
    glwe_size: GlweSize,
    decomposition_base_log: DecompositionBaseLog,
    decomposition_level_count: DecompositionLevelCount,
}

pub type FourierLweBootstrapKeyView<'a> = FourierLweBootstrapKey<&'a [c64]>;
pub type FourierLweBootstrapKeyMutView<'a> = FourierLweBootstrapKey<&'a mut [c64]>;

impl<C: Container<Element = c64>> FourierLweBootstrapKey<C> {
    pub fn from_container(
        data: C,
        key_size: LweDimension,
        glwe_size: GlweSize,
        polynomial_size: PolynomialSize,
        decomposition_base_log: DecompositionBaseLog,
        decomposition_level_count: DecompositionLevelCount,
    ) -> Self {
        assert_eq!(polynomial_size.0 % 2, 0);
        assert_eq!(
            data.container_len(),
            key_size.0 * polynomial_size.0 / 2
                * decomposition_level_count.0
                * glwe_size.0
                * glwe_size.0
        );
        FourierLweBootstrapKey {
            fourier: FourierPolynomialList {
                data,
                polynomial_size,
            },
            key_size,
            glwe_size,
            decomposition_base_log,
            decomposition_level_count,
        }
    }

    /// Return an iterator over the GGSW ciphertexts composing the key.
    pub fn into_ggsw_iter(self) -> impl DoubleEndedIterator<Item = FourierGgswCiphertext<C>>
    where
        C: Split,
    {
        let key_size = self.key_size;
        let polynomial_size = self.fourier.polynomial_size;
        let glwe_size = self.glwe_size;
        let decomposition_base_log = self.decomposition_base_log;
        let decomposition_level_count = self.decomposition_level_count;
        self.fourier.data.split_into(key_size.0).map(move |slice| {
            FourierGgswCiphertext::from_container(
                slice,
                glwe_size,
                polynomial_size,
                decomposition_base_log,
                decomposition_level_count,
            )
        })
    }

    pub fn key_size(&self) -> LweDimension {
        self.key_size
    }

    pub fn polynomial_size(&self) -> PolynomialSize {
        self.fourier.polynomial_size
    }

    pub fn glwe_size(&self) -> GlweSize {
        self.glwe_size
    }

    pub fn decomposition_base_log(&self) -> DecompositionBaseLog {
        self.decomposition_base_log
    }

    pub fn decomposition_level_count(&self) -> DecompositionLevelCount {
        self.decomposition_level_count
    }

    pub fn output_lwe_dimension(&self) -> LweDimension {
        LweDimension((self.glwe_size.0 - 1) * self.polynomial_size().0)
    }

    pub fn as_view(&self) -> FourierLweBootstrapKeyView<'_> {
        FourierLweBootstrapKeyView {
            fourier: FourierPolynomialList {
                data: self.fourier.data.as_ref(),
                polynomial_size: self.fourier.polynomial_size,
            },
            key_size: self.key_size,
            glwe_size: self.glwe_size,
            decomposition_base_log: self.decomposition_base_log,
            decomposition_level_count: self.decomposition_level_count,
        }
    }

    pub fn as_mut_view(&mut self) -> FourierLweBootstrapKeyMutView<'_>
    where
        C: AsMut<[c64]>,
    {
        FourierLweBootstrapKeyMutView {
            fourier: FourierPolynomialList {
                data: self.fourier.data.as_mut(),
                polynomial_size: self.fourier.polynomial_size,
            },
            key_size: self.key_size,
            glwe_size: self.glwe_size,
            decomposition_base_log: self.decomposition_base_log,
            decomposition_level_count: self.decomposition_level_count,
        }
    }
}

/// Return the required memory for
/// [`FourierLweBootstrapKeyMutView::fill_with_forward_fourier`].
pub fn fill_with_forward_fourier_scratch(fft: FftView<'_>) -> Result<StackReq, SizeOverflow> {
    fft.forward_scratch()
}

impl<'a> FourierLweBootstrapKeyMutView<'a> {
    /// Fill a bootstrapping key with the Fourier transform of a bootstrapping key in the
    /// standard domain.
    pub fn fill_with_forward_fourier<Scalar: UnsignedTorus, InputCont>(
        mut self,
        coef_bsk: &StandardBootstrapKey<InputCont>,
        fft: FftView<'_>,
        mut stack: DynStack<'_>,
    ) where
        InputCont: Container<Element = Scalar>,
    {
        for (fourier_ggsw, standard_ggsw) in
            izip!(self.as_mut_view().into_ggsw_iter(), coef_bsk.ggsw_iter())
        {
            fourier_ggsw.fill_with_forward_fourier(&standard_ggsw, fft, stack.rb_mut());
        }
    }
}

/// Return the required memory for [`FourierLweBootstrapKeyView::blind_rotate`].
pub fn blind_rotate_scratch<Scalar>(
    glwe_size: GlweSize,
    polynomial_size: PolynomialSize,
    fft: FftView<'_>,
) -> Result<StackReq, SizeOverflow> {
    StackReq::try_new_aligned::<Scalar>(glwe_size.0 * polynomial_size.0, CACHELINE_ALIGN)?
        .try_and(cmux_scratch::<Scalar>(glwe_size, polynomial_size, fft)?)
}

/// Return the required memory for [`FourierLweBootstrapKeyView::bootstrap`].
pub fn bootstrap_scratch<Scalar>(
    glwe_size: GlweSize,
    polynomial_size: PolynomialSize,
    fft: FftView<'_>,
) -> Result<StackReq, SizeOverflow> {
    blind_rotate_scratch::<Scalar>(glwe_size, polynomial_size, fft)?.try_and(
        StackReq::try_new_aligned::<Scalar>(glwe_size.0 * polynomial_size.0, CACHELINE_ALIGN)?,
    )
}

impl<'a> FourierLweBootstrapKeyView<'a> {
    /// Blind rotate the `lut` accumulator by the modulus-switched mask of the `lwe`
    /// ciphertext.
    pub fn blind_rotate<Scalar: UnsignedTorus, LutCont>(
        self,
        lut: &mut GlweCiphertext<LutCont>,
        lwe: &[Scalar],
        fft: FftView<'_>,
        mut stack: DynStack<'_>,
    ) where
        LutCont: ContainerMut<Element = Scalar>,
    {
        let (lwe_body, lwe_mask) = lwe.split_last().unwrap();

        let lut_poly_size = lut.polynomial_size();
        let monomial_degree = pbs_modulus_switch(*lwe_body, lut_poly_size);
        for mut poly in lut.as_mut_polynomial_list().polynomial_iter_mut() {
            poly.update_with_wrapping_unit_monomial_div(MonomialDegree(monomial_degree));
        }

        // We initialize the ct_0 used for the successive cmuxes
        let ct0 = lut;

        for (lwe_mask_element, bootstrap_key_ggsw) in
            izip!(lwe_mask.iter(), self.into_ggsw_iter())
        {
            if *lwe_mask_element != Scalar::ZERO {
                let stack = stack.rb_mut();
                // We copy ct_0 to ct_1
                let (mut ct1_data, stack) =
                    stack.collect_aligned(CACHELINE_ALIGN, ct0.as_ref().iter().copied());
                let mut ct1 = GlweCiphertext::from_container(&mut *ct1_data, lut_poly_size);

                // We rotate ct_1 by performing ct_1 <- ct_1 * X^{a_hat}
                for mut poly in ct1.as_mut_polynomial_list().polynomial_iter_mut() {
                    poly.update_with_wrapping_monic_monomial_mul(MonomialDegree(
                        pbs_modulus_switch(*lwe_mask_element, lut_poly_size),
                    ));
                }

                cmux(&mut *ct0, &mut ct1, bootstrap_key_ggsw, fft, stack);
            }
        }
    }

    /// Bootstrap the `lwe_in` ciphertext, using the `accumulator` as lookup table, and write
    /// the result to `lwe_out`.
    pub fn bootstrap<Scalar, OutputCont, AccCont>(
        self,
        lwe_out: &mut LweCiphertext<OutputCont>,
        lwe_in: &[Scalar],
        accumulator: &GlweCiphertext<AccCont>,
        fft: FftView<'_>,
        stack: DynStack<'_>,
    ) where
        Scalar: UnsignedTorus,
        OutputCont: ContainerMut<Element = Scalar>,
        AccCont: Container<Element = Scalar>,
    {
        let (mut local_accumulator_data, stack) =
            stack.collect_aligned(CACHELINE_ALIGN, accumulator.as_ref().iter().copied());
        let mut local_accumulator = GlweCiphertext::from_container(
            &mut *local_accumulator_data,
            accumulator.polynomial_size(),
        );
        self.blind_rotate(&mut local_accumulator, lwe_in, fft, stack);
        local_accumulator
            .as_view()
            .fill_lwe_with_sample_extraction(lwe_out, MonomialDegree(0));
    }
}

/// This function switches modulus for a single coefficient of a ciphertext, only in the
/// context of a PBS.
pub fn pbs_modulus_switch<Scalar: UnsignedTorus>(
    input: Scalar,
    poly_size: PolynomialSize,
) -> usize {
    // Start doing the right shift
    let mut output = input >> (Scalar::BITS - poly_size.log2().0 - 2);
    // Do the rounding
    output += output & Scalar::ONE;
    // Finish the right shift
    output >>= 1;
    output.cast_into()
}
