use super::*;
use crate::commons::math::polynomial::Polynomial;
use crate::commons::math::random::{RandomGenerable, Uniform};
use crate::commons::test_tools::new_random_generator;
use dyn_stack::{GlobalMemBuffer, ReborrowMut};

fn abs_diff<Scalar: UnsignedTorus>(a: Scalar, b: Scalar) -> Scalar {
    if a > b {
        a - b
    } else {
        b - a
    }
}

fn test_roundtrip<Scalar: UnsignedTorus + RandomGenerable<Uniform>>() {
    let mut generator = new_random_generator();
    for i in 5..=11 {
        let size = 1_usize << i;

        let fft = Fft::new(PolynomialSize(size));
        let fft = fft.as_view();

        let mut poly = Polynomial::allocate(Scalar::ZERO, PolynomialSize(size));
        let mut roundtrip = Polynomial::allocate(Scalar::ZERO, PolynomialSize(size));
        let mut fourier = FourierPolynomial {
            data: avec![c64::default(); size / 2].into_boxed_slice(),
        };

        for x in poly.as_mut().iter_mut() {
            *x = generator.random_uniform();
        }

        let mut mem = GlobalMemBuffer::new(
            fft.forward_scratch()
                .unwrap()
                .and(fft.backward_scratch().unwrap()),
        );
        let mut stack = DynStack::new(&mut mem);

        fft.forward_as_torus(fourier.as_mut_view(), poly.as_view(), stack.rb_mut());
        fft.backward_as_torus(roundtrip.as_mut_view(), fourier.as_view(), stack.rb_mut());

        for (expected, actual) in izip!(poly.as_ref().iter(), roundtrip.as_ref().iter()) {
            if Scalar::BITS == 32 {
                assert_eq!(abs_diff(*expected, *actual), Scalar::ZERO);
            } else {
                assert!(abs_diff(*expected, *actual) < (Scalar::ONE << (64 - 50)));
            }
        }
    }
}

fn test_product<Scalar: UnsignedTorus + RandomGenerable<Uniform>>() {
    fn convolution_naive<Scalar: UnsignedTorus>(
        out: &mut [Scalar],
        lhs: &[Scalar],
        rhs: &[Scalar],
    ) {
        assert_eq!(out.len(), lhs.len());
        assert_eq!(out.len(), rhs.len());
        let n = out.len();
        let mut full_prod = vec![Scalar::ZERO; 2 * n];
        for i in 0..n {
            for j in 0..n {
                full_prod[i + j] = full_prod[i + j].wrapping_add(lhs[i].wrapping_mul(rhs[j]));
            }
        }
        for i in 0..n {
            out[i] = full_prod[i].wrapping_sub(full_prod[i + n]);
        }
    }

    let mut generator = new_random_generator();
    for i in 5..=10 {
        for _ in 0..10 {
            let size = 1_usize << i;

            let fft = Fft::new(PolynomialSize(size));
            let fft = fft.as_view();

            let mut poly0 = Polynomial::allocate(Scalar::ZERO, PolynomialSize(size));
            let mut poly1 = Polynomial::allocate(Scalar::ZERO, PolynomialSize(size));

            let mut convolution_from_fft =
                Polynomial::allocate(Scalar::ZERO, PolynomialSize(size));
            let mut convolution_from_naive =
                Polynomial::allocate(Scalar::ZERO, PolynomialSize(size));

            let mut fourier0 = FourierPolynomial {
                data: avec![c64::default(); size / 2].into_boxed_slice(),
            };
            let mut fourier1 = FourierPolynomial {
                data: avec![c64::default(); size / 2].into_boxed_slice(),
            };

            for (x, y) in izip!(poly0.as_mut().iter_mut(), poly1.as_mut().iter_mut()) {
                *x = generator.random_uniform();
                *y = generator.random_uniform();
                if Scalar::BITS == 64 {
                    *x >>= 32;
                    *y >>= 32;
                } else {
                    *x >>= 16;
                    *y >>= 16;
                }
            }

            let mut mem = GlobalMemBuffer::new(
                fft.forward_scratch()
                    .unwrap()
                    .and(fft.backward_scratch().unwrap()),
            );
            let mut stack = DynStack::new(&mut mem);

            fft.forward_as_torus(fourier0.as_mut_view(), poly0.as_view(), stack.rb_mut());
            fft.forward_as_integer(fourier1.as_mut_view(), poly1.as_view(), stack.rb_mut());

            for (f0, f1) in izip!(&mut *fourier0.data, &*fourier1.data) {
                *f0 *= *f1;
            }

            fft.backward_as_torus(
                convolution_from_fft.as_mut_view(),
                fourier0.as_view(),
                stack.rb_mut(),
            );
            convolution_naive(
                convolution_from_naive.as_mut(),
                poly0.as_ref(),
                poly1.as_ref(),
            );

            for (expected, actual) in izip!(
                convolution_from_naive.as_ref().iter(),
                convolution_from_fft.as_ref().iter()
            ) {
                assert!(abs_diff(*expected, *actual) < (Scalar::ONE << (Scalar::BITS - 5)));
            }
        }
    }
}

#[test]
fn test_product_u32() {
    test_product::<u32>();
}

#[test]
fn test_product_u64() {
    test_product::<u64>();
}

#[test]
fn test_roundtrip_u32() {
    test_roundtrip::<u32>();
}

#[test]
fn test_roundtrip_u64() {
    test_roundtrip::<u64>();
}
