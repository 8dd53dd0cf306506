use crate::commons::math::decomposition::SignedDecomposer;
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevelCount};
use crate::commons::test_tools::{any_usize, random_usize_between};

fn test_decompose_recompose<T: UnsignedInteger>() {
    // Checks that the decomposing and recomposing a value brings the closest representable.
    for _ in 0..100_000 {
        let log_b = random_usize_between(2..T::BITS / 4);
        let level_max = random_usize_between(2..T::BITS / log_b - 1);
        let val = T::cast_from(any_usize() as u128);
        let decomposer = SignedDecomposer::<T>::new(
            DecompositionBaseLog(log_b),
            DecompositionLevelCount(level_max),
        );
        let rounded = decomposer.closest_representable(val);
        let recomposed = decomposer.recompose(decomposer.decompose(rounded)).unwrap();
        assert_eq!(rounded, recomposed);

        for term in decomposer.decompose(val) {
            assert!(1 <= term.level().0);
            assert!(term.level().0 <= level_max);
            let signed_term = term.value().into_signed();
            let half_basis = (T::ONE << (log_b - 1)).into_signed();
            assert!(-half_basis <= signed_term);
            assert!(signed_term <= half_basis);
        }
    }
}

#[test]
fn test_decompose_recompose_u32() {
    test_decompose_recompose::<u32>()
}

#[test]
fn test_decompose_recompose_u64() {
    test_decompose_recompose::<u64>()
}

fn test_round_to_closest_representable<T: UnsignedInteger>() {
    // Checks that the representable value obtained is the closest one: moving away from it by
    // half the smallest representable step changes the rounding.
    for _ in 0..100_000 {
        let log_b = random_usize_between(2..T::BITS / 4);
        let level_max = random_usize_between(2..T::BITS / log_b - 1);
        let bits = log_b * level_max;
        let val = T::cast_from(any_usize() as u128);
        let decomposer = SignedDecomposer::<T>::new(
            DecompositionBaseLog(log_b),
            DecompositionLevelCount(level_max),
        );
        let rounded = decomposer.closest_representable(val);
        // The rounded value must have its low bits null.
        assert_eq!(rounded << bits, T::ZERO);
        // The distance to the input is at most half the step.
        let step = T::ONE << (T::BITS - bits);
        let distance = rounded.wrapping_sub(val).into_signed();
        let half_step = (step >> 1).into_signed();
        assert!(distance <= half_step);
        assert!(-half_step <= distance);
    }
}

#[test]
fn test_round_to_closest_representable_u32() {
    test_round_to_closest_representable::<u32>()
}

#[test]
fn test_round_to_closest_representable_u64() {
    test_round_to_closest_representable::<u64>()
}
