//! GGSW ciphertexts in the Fourier domain, and the external product.

use super::super::math::decomposition::TensorSignedDecompositionLendingIter;
use super::super::math::fft::{FftView, FourierPolynomial, FourierPolynomialList};
use crate::commons::crypto::ggsw::StandardGgswCiphertext;
use crate::commons::crypto::glwe::GlweCiphertext;
use crate::commons::math::decomposition::SignedDecomposer;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevel, DecompositionLevelCount, GlweSize, PolynomialSize,
};
use crate::commons::traits::{Container, Split};
use crate::commons::utils::izip;
use aligned_vec::CACHELINE_ALIGN;
use concrete_fft::c64;
use dyn_stack::{DynStack, ReborrowMut, SizeOverflow, StackReq};

/// A GGSW ciphertext in the Fourier domain.
///
/// The level matrices are stored in the same order as in the standard domain: levels in
/// increasing order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "backend_fft_serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(deserialize = "C: crate::commons::traits::IntoContainerOwned"))
)]
pub struct FourierGgswCiphertext<C: Container<Element = c64>> {
    fourier: FourierPolynomialList<C>,
    glwe_size: GlweSize,
    decomposition_base_log: DecompositionBaseLog,
    decomposition_level_count: DecompositionLevelCount,
}

/// A matrix containing a single level of the gadget decomposition, in the Fourier domain.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierGgswLevelMatrix<C: Container<Element = c64>> {
    data: C,
    glwe_size: GlweSize,
    polynomial_size: PolynomialSize,
    decomposition_level: DecompositionLevel,
}

/// A row of a GGSW level matrix, in the Fourier domain.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierGgswLevelRow<C: Container<Element = c64>> {
    data: C,
    glwe_size: GlweSize,
    polynomial_size: PolynomialSize,
}

pub type FourierGgswCiphertextView<'a> = FourierGgswCiphertext<&'a [c64]>;
pub type FourierGgswCiphertextMutView<'a> = FourierGgswCiphertext<&'a mut [c64]>;
pub type FourierGgswLevelMatrixView<'a> = FourierGgswLevelMatrix<&'a [c64]>;
pub type FourierGgswLevelRowView<'a> = FourierGgswLevelRow<&'a [c64]>;

impl<C: Container<Element = c64>> FourierGgswCiphertext<C> {
    pub fn from_container(
        data: C,
        glwe_size: GlweSize,
        polynomial_size: PolynomialSize,
        decomposition_base_log: DecompositionBaseLog,
        decomposition_level_count: DecompositionLevelCount,
    ) -> Self {
        assert_eq!(polynomial_size.0 % 2, 0);
        assert_eq!(
            data.container_len(),
            polynomial_size.0 / 2
                * glwe_size.0
                * glwe_size.0
                * decomposition_level_count.0
        );

        FourierGgswCiphertext {
            fourier: FourierPolynomialList {
                data,
                polynomial_size,
            },
            glwe_size,
            decomposition_base_log,
            decomposition_level_count,
        }
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

    pub fn as_view(&self) -> FourierGgswCiphertextView<'_> {
        FourierGgswCiphertextView {
            fourier: FourierPolynomialList {
                data: self.fourier.data.as_ref(),
                polynomial_size: self.fourier.polynomial_size,
            },
            glwe_size: self.glwe_size,
            decomposition_base_log: self.decomposition_base_log,
            decomposition_level_count: self.decomposition_level_count,
        }
    }

    pub fn as_mut_view(&mut self) -> FourierGgswCiphertextMutView<'_>
    where
        C: AsMut<[c64]>,
    {
        FourierGgswCiphertextMutView {
            fourier: FourierPolynomialList {
                data: self.fourier.data.as_mut(),
                polynomial_size: self.fourier.polynomial_size,
            },
            glwe_size: self.glwe_size,
            decomposition_base_log: self.decomposition_base_log,
            decomposition_level_count: self.decomposition_level_count,
        }
    }
}

impl<C: Container<Element = c64>> FourierGgswLevelMatrix<C> {
    pub fn new(
        data: C,
        glwe_size: GlweSize,
        polynomial_size: PolynomialSize,
        decomposition_level: DecompositionLevel,
    ) -> Self {
        assert_eq!(
            data.container_len(),
            polynomial_size.0 / 2 * glwe_size.0 * glwe_size.0
        );
        FourierGgswLevelMatrix {
            data,
            glwe_size,
            polynomial_size,
            decomposition_level,
        }
    }

    /// Return an iterator over the rows of the level matrix.
    pub fn into_rows(self) -> impl DoubleEndedIterator<Item = FourierGgswLevelRow<C>>
    where
        C: Split,
    {
        let row_count = self.glwe_size.0;
        let glwe_size = self.glwe_size;
        let polynomial_size = self.polynomial_size;
        self.data
            .split_into(row_count)
            .map(move |slice| FourierGgswLevelRow {
                data: slice,
                glwe_size,
                polynomial_size,
            })
    }

    pub fn decomposition_level(&self) -> DecompositionLevel {
        self.decomposition_level
    }
}

impl<C: Container<Element = c64>> FourierGgswLevelRow<C> {
    pub fn data(self) -> C {
        self.data
    }
}

impl<'a> FourierGgswCiphertextView<'a> {
    /// Return an iterator over the level matrices, levels in increasing order.
    pub fn into_levels(self) -> impl DoubleEndedIterator<Item = FourierGgswLevelMatrixView<'a>> {
        let glwe_size = self.glwe_size;
        let polynomial_size = self.fourier.polynomial_size;
        self.fourier
            .data
            .split_into(self.decomposition_level_count.0)
            .enumerate()
            .map(move |(i, slice)| {
                FourierGgswLevelMatrixView::new(
                    slice,
                    glwe_size,
                    polynomial_size,
                    DecompositionLevel(i + 1),
                )
            })
    }
}

/// Return the required memory for [`FourierGgswCiphertextMutView::fill_with_forward_fourier`].
pub fn fill_with_forward_fourier_scratch(fft: FftView<'_>) -> Result<StackReq, SizeOverflow> {
    fft.forward_scratch()
}

impl FourierGgswCiphertextMutView<'_> {
    /// Fill a GGSW ciphertext with the Fourier transform of a GGSW ciphertext in the standard
    /// domain.
    pub fn fill_with_forward_fourier<Scalar: UnsignedTorus, InputCont>(
        self,
        coef_ggsw: &StandardGgswCiphertext<InputCont>,
        fft: FftView<'_>,
        mut stack: DynStack<'_>,
    ) where
        InputCont: Container<Element = Scalar>,
    {
        debug_assert_eq!(coef_ggsw.polynomial_size(), self.fourier.polynomial_size);
        let fourier_poly_size = coef_ggsw.polynomial_size().0 / 2;

        for (fourier_poly, coef_poly) in izip!(
            self.fourier.data.chunks_exact_mut(fourier_poly_size),
            coef_ggsw.as_polynomial_list().polynomial_iter()
        ) {
            fft.forward_as_torus(
                FourierPolynomial { data: fourier_poly },
                coef_poly,
                stack.rb_mut(),
            );
        }
    }
}

/// Return the required memory for [`add_external_product_assign`].
pub fn add_external_product_assign_scratch<Scalar>(
    glwe_size: GlweSize,
    polynomial_size: PolynomialSize,
    fft: FftView<'_>,
) -> Result<StackReq, SizeOverflow> {
    let align = CACHELINE_ALIGN;
    let standard_scratch =
        StackReq::try_new_aligned::<Scalar>(glwe_size.0 * polynomial_size.0, align)?;
    let fourier_polynomial_size = polynomial_size.0 / 2;
    let fourier_scratch =
        StackReq::try_new_aligned::<c64>(glwe_size.0 * fourier_polynomial_size, align)?;
    let fourier_scratch_single = StackReq::try_new_aligned::<c64>(fourier_polynomial_size, align)?;

    let substack3 = fft.forward_scratch()?;
    let substack2 = substack3.try_and(fourier_scratch_single)?;
    let substack1 = substack2.try_and(standard_scratch)?;
    let substack0 = StackReq::try_any_of([
        substack1.try_and(standard_scratch)?,
        fft.backward_scratch()?,
    ])?;
    substack0.try_and(fourier_scratch)
}

/// Perform the external product of `ggsw` and `glwe`, and add the result to `out`.
pub fn add_external_product_assign<Scalar, OutputCont, InputCont>(
    out: &mut GlweCiphertext<OutputCont>,
    ggsw: FourierGgswCiphertextView<'_>,
    glwe: &GlweCiphertext<InputCont>,
    fft: FftView<'_>,
    stack: DynStack<'_>,
) where
    Scalar: UnsignedTorus,
    OutputCont: crate::commons::traits::ContainerMut<Element = Scalar>,
    InputCont: Container<Element = Scalar>,
{
    // we check that the polynomial sizes match
    debug_assert_eq!(ggsw.polynomial_size(), glwe.polynomial_size());
    debug_assert_eq!(ggsw.polynomial_size(), out.polynomial_size());
    // we check that the glwe sizes match
    debug_assert_eq!(ggsw.glwe_size(), glwe.glwe_size());
    debug_assert_eq!(ggsw.glwe_size(), out.glwe_size());

    let align = CACHELINE_ALIGN;
    let polynomial_size = ggsw.polynomial_size();
    let fourier_poly_size = polynomial_size.0 / 2;

    // we round the input mask and body
    let decomposer = SignedDecomposer::<Scalar>::new(
        ggsw.decomposition_base_log(),
        ggsw.decomposition_level_count(),
    );

    // The buffer accumulating the external product in the fourier domain.
    let (mut output_fft_buffer, mut substack0) = stack.make_aligned_with::<c64, _>(
        fourier_poly_size * ggsw.glwe_size().0,
        align,
        |_| c64::default(),
    );

    {
        // ------------------------------------------------------ EXTERNAL PRODUCT IN FOURIER
        // In this section, we perform the external product in the fourier domain, and
        // accumulate the result in the output_fft_buffer variable.
        let (mut decomposition, mut substack1) = TensorSignedDecompositionLendingIter::new(
            glwe.as_ref()
                .iter()
                .map(|s| decomposer.closest_representable(*s)),
            decomposer.base_log(),
            decomposer.level_count(),
            substack0.rb_mut(),
        );

        // We loop through the levels; the decomposition iterator yields the highest level
        // first, the level matrices are stored in increasing order.
        for ggsw_decomp_matrix in ggsw.into_levels().rev() {
            // We retrieve the decomposition of this level.
            let (glwe_level, _glwe_base_log, glwe_decomp_term) =
                decomposition.next_term().expect(
                    "decomposition and level matrices must have the same level count",
                );
            let (glwe_decomp_term, mut substack2) =
                substack1.rb_mut().collect_aligned(align, glwe_decomp_term);
            debug_assert_eq!(ggsw_decomp_matrix.decomposition_level(), glwe_level);
            let glwe_decomp_term =
                GlweCiphertext::from_container(&*glwe_decomp_term, polynomial_size);

            // For each level we have to add the result of the vector-matrix product between
            // the decomposition of the glwe, and the ggsw level matrix to the output. To do
            // so, we iteratively add to the output, the product between every line of the
            // matrix, and the corresponding (scalar) polynomial in the glwe decomposition:
            //
            //                ggsw_mat                        ggsw_mat
            //   glwe_dec   | - - - - | <        glwe_dec   | - - - - |
            //  | - - - | x | - - - - |         | - - - | x | - - - - | <
            //    ^         | - - - - |             ^       | - - - - |
            //
            //        t = 1                           t = 2                     ...

            for (ggsw_row, glwe_poly) in izip!(
                ggsw_decomp_matrix.into_rows(),
                glwe_decomp_term.as_polynomial_list().polynomial_iter()
            ) {
                let (mut fourier, substack3) =
                    substack2
                        .rb_mut()
                        .make_aligned_with::<c64, _>(fourier_poly_size, align, |_| {
                            c64::default()
                        });
                // We perform the forward fft transform for the glwe polynomial
                fft.forward_as_integer(
                    FourierPolynomial {
                        data: &mut *fourier,
                    },
                    glwe_poly,
                    substack3,
                );
                // Now we loop through the polynomials of the output, and add the
                // corresponding product of polynomials.
                update_with_fmadd(
                    &mut output_fft_buffer,
                    ggsw_row.data(),
                    &fourier,
                    fourier_poly_size,
                );
            }
        }
    }

    // -------------------------------------- TRANSFORMATION OF RESULT TO STANDARD DOMAIN
    // In this section, we bring the result from the fourier domain, back to the standard
    // domain, and add it to the output.
    //
    // We iterate over the polynomials in the output.
    for (mut out_poly, fourier_poly) in izip!(
        out.as_mut_polynomial_list().polynomial_iter_mut(),
        output_fft_buffer.chunks_exact(fourier_poly_size)
    ) {
        fft.add_backward_as_torus(
            out_poly.as_mut_view(),
            FourierPolynomial { data: fourier_poly },
            substack0.rb_mut(),
        );
    }
}

// Accumulates the pointwise product of the ggsw row polynomials with the fourier polynomial
// in the output buffer.
fn update_with_fmadd(
    output_fft_buffer: &mut [c64],
    lhs_polynomial_list: &[c64],
    fourier: &[c64],
    fourier_poly_size: usize,
) {
    for (output_fourier, ggsw_poly) in izip!(
        output_fft_buffer.chunks_exact_mut(fourier_poly_size),
        lhs_polynomial_list.chunks_exact(fourier_poly_size)
    ) {
        for (out, lhs, rhs) in izip!(output_fourier, ggsw_poly, fourier) {
            *out += *lhs * *rhs;
        }
    }
}

/// Return the required memory for [`cmux`].
pub fn cmux_scratch<Scalar>(
    glwe_size: GlweSize,
    polynomial_size: PolynomialSize,
    fft: FftView<'_>,
) -> Result<StackReq, SizeOverflow> {
    add_external_product_assign_scratch::<Scalar>(glwe_size, polynomial_size, fft)
}

/// This cmux mutates both ct1 and ct0. The result is in ct0 after the method was called.
pub fn cmux<Scalar, Cont0, Cont1>(
    ct0: &mut GlweCiphertext<Cont0>,
    ct1: &mut GlweCiphertext<Cont1>,
    ggsw: FourierGgswCiphertextView<'_>,
    fft: FftView<'_>,
    stack: DynStack<'_>,
) where
    Scalar: UnsignedTorus,
    Cont0: crate::commons::traits::ContainerMut<Element = Scalar>,
    Cont1: crate::commons::traits::ContainerMut<Element = Scalar>,
{
    for (c1, c0) in izip!(ct1.as_mut(), ct0.as_ref()) {
        *c1 = c1.wrapping_sub(*c0);
    }
    add_external_product_assign(ct0, ggsw, &ct1.as_view(), fft, stack);
}
