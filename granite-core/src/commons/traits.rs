//! A module containing the container abstraction used by the implementation types.
//!
//! Implementation types (ciphertexts, keys, lists) are generic over the storage they use: an
//! owned `Vec`, a borrowed slice (view entities), or an aligned box. The traits in this module
//! capture the few capabilities those storages must provide.

/// A trait for types holding a contiguous slice of elements.
pub trait Container: AsRef<[Self::Element]> {
    type Element;

    fn container_len(&self) -> usize {
        self.as_ref().len()
    }
}

/// A trait for [`Container`]s that also give mutable access to their elements.
pub trait ContainerMut: Container + AsMut<[Self::Element]> {}

impl<T> Container for [T] {
    type Element = T;
}

impl<T> ContainerMut for [T] {}

impl<T> Container for &[T] {
    type Element = T;
}

impl<T> Container for &mut [T] {
    type Element = T;
}

impl<T> ContainerMut for &mut [T] {}

impl<T> Container for Vec<T> {
    type Element = T;
}

impl<T> ContainerMut for Vec<T> {}

impl<T> Container for Box<[T]> {
    type Element = T;
}

impl<T> ContainerMut for Box<[T]> {}

#[cfg(feature = "backend_fft")]
impl<T> Container for aligned_vec::ABox<[T]> {
    type Element = T;
}

#[cfg(feature = "backend_fft")]
impl<T> ContainerMut for aligned_vec::ABox<[T]> {}

/// A trait for owned containers which can be built by collecting an iterator of elements.
pub trait IntoContainerOwned: ContainerMut {
    fn collect<I: Iterator<Item = Self::Element>>(iter: I) -> Self;
}

impl<T> IntoContainerOwned for Vec<T> {
    fn collect<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.collect()
    }
}

#[cfg(feature = "backend_fft")]
impl<T> IntoContainerOwned for aligned_vec::ABox<[T]> {
    fn collect<I: Iterator<Item = T>>(iter: I) -> Self {
        aligned_vec::AVec::from_iter(aligned_vec::CACHELINE_ALIGN, iter).into_boxed_slice()
    }
}

/// A trait for splitting a borrowed container into equally sized chunks, consuming the borrow.
///
/// This is how the implementation types hand out sub-entities (the GGSW ciphertexts of a
/// bootstrap key, the rows of a level matrix) without copying.
pub trait Split: Sized {
    type Chunks: DoubleEndedIterator<Item = Self> + ExactSizeIterator<Item = Self>;

    fn split_into(self, chunk_count: usize) -> Self::Chunks;
    fn split_at(self, mid: usize) -> (Self, Self);
}

impl<'a, T> Split for &'a [T] {
    type Chunks = core::slice::ChunksExact<'a, T>;

    fn split_into(self, chunk_count: usize) -> Self::Chunks {
        debug_assert_eq!(self.len() % chunk_count.max(1), 0);
        self.chunks_exact(self.len() / chunk_count)
    }

    fn split_at(self, mid: usize) -> (Self, Self) {
        (&self[..mid], &self[mid..])
    }
}

impl<'a, T> Split for &'a mut [T] {
    type Chunks = core::slice::ChunksExactMut<'a, T>;

    fn split_into(self, chunk_count: usize) -> Self::Chunks {
        debug_assert_eq!(self.len() % chunk_count.max(1), 0);
        let len = self.len();
        self.chunks_exact_mut(len / chunk_count)
    }

    fn split_at(self, mid: usize) -> (Self, Self) {
        self.split_at_mut(mid)
    }
}
