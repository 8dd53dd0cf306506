//! A variant of the signed decomposition which decomposes a whole tensor of values level by
//! level, keeping the per-element states in caller-provided scratch memory.

use crate::commons::math::decomposition::decompose_one_level;
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevel, DecompositionLevelCount,
};
use aligned_vec::CACHELINE_ALIGN;
use dyn_stack::{DynArray, DynStack};

/// An iterator-like object which yields, level after level, the terms of the decomposition of
/// a whole tensor of values.
///
/// # Warning
///
/// The terms are yielded in reverse level order: the highest level comes first.
pub struct TensorSignedDecompositionLendingIter<'buffers, Scalar: UnsignedInteger> {
    // The base log of the decomposition
    base_log: usize,
    // The current level
    current_level: usize,
    // A mask which allows to compute the mod B of a value. For B=2^4, this guy is of the
    // form: ...0001111
    mod_b_mask: Scalar,
    // The internal states of each decomposition
    states: DynArray<'buffers, Scalar>,
}

impl<'buffers, Scalar: UnsignedInteger> TensorSignedDecompositionLendingIter<'buffers, Scalar> {
    /// Create a new decomposition from an iterator of values.
    ///
    /// The values must already be rounded to the closest representable, see
    /// [`SignedDecomposer::closest_representable`]
    /// (`crate::commons::math::decomposition::SignedDecomposer::closest_representable`).
    #[inline]
    pub fn new(
        input: impl Iterator<Item = Scalar>,
        base_log: DecompositionBaseLog,
        level: DecompositionLevelCount,
        stack: DynStack<'buffers>,
    ) -> (Self, DynStack<'buffers>) {
        let shift = Scalar::BITS - base_log.0 * level.0;
        let (states, stack) =
            stack.collect_aligned(CACHELINE_ALIGN, input.map(|i| i >> shift));
        (
            TensorSignedDecompositionLendingIter {
                base_log: base_log.0,
                current_level: level.0,
                mod_b_mask: (Scalar::ONE << base_log.0) - Scalar::ONE,
                states,
            },
            stack,
        )
    }

    /// Yield the next term of the decomposition of every element, if the decomposition is not
    /// over.
    #[inline]
    pub fn next_term(
        &mut self,
    ) -> Option<(
        DecompositionLevel,
        DecompositionBaseLog,
        impl Iterator<Item = Scalar> + '_,
    )> {
        // We check if the decomposition is over
        if self.current_level == 0 {
            return None;
        }
        let current_level = self.current_level;
        let base_log = self.base_log;
        let mod_b_mask = self.mod_b_mask;
        self.current_level -= 1;
        Some((
            DecompositionLevel(current_level),
            DecompositionBaseLog(base_log),
            self.states
                .iter_mut()
                .map(move |state| decompose_one_level(base_log, state, mod_b_mask)),
        ))
    }
}
