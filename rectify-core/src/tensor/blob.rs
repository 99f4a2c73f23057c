use crate::dtypes::Dtype;

/// A flat activation buffer paired with a gradient buffer of the same length.
///
/// Layers read activations from [Blob::data] in the forward pass and
/// gradients from [Blob::diff] in the backward pass. Kernels never see a
/// [Blob], only borrowed slices of it.
///
/// ```rust
/// # use rectify_core::prelude::*;
/// let mut blob = Blob::from_vec(vec![-1.0f32, 2.0]);
/// assert_eq!(blob.count(), 2);
/// assert_eq!(blob.diff(), &[0.0, 0.0]);
/// blob.diff_mut()[1] = 3.0;
/// let (data, diff) = blob.data_and_diff_mut();
/// diff[0] = data[1];
/// assert_eq!(blob.diff(), &[2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Blob<E> {
    data: Vec<E>,
    diff: Vec<E>,
}

impl<E: Dtype> Blob<E> {
    /// A blob with `count` zeroed activations and gradients.
    pub fn zeros(count: usize) -> Self {
        Self {
            data: vec![E::zero(); count],
            diff: vec![E::zero(); count],
        }
    }

    /// Takes ownership of `data` as the activations, with zeroed gradients.
    pub fn from_vec(data: Vec<E>) -> Self {
        let diff = vec![E::zero(); data.len()];
        Self { data, diff }
    }

    /// Resizes both buffers to `other.count()`, zero filling any new elements.
    pub fn reshape_like(&mut self, other: &Self) {
        let count = other.count();
        if count != self.count() {
            self.data.resize(count, E::zero());
            self.diff.resize(count, E::zero());
        }
    }
}

impl<E> Blob<E> {
    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[E] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [E] {
        &mut self.data
    }

    pub fn diff(&self) -> &[E] {
        &self.diff
    }

    pub fn diff_mut(&mut self) -> &mut [E] {
        &mut self.diff
    }

    /// Borrows the activations immutably and the gradients mutably at the same time.
    pub fn data_and_diff_mut(&mut self) -> (&[E], &mut [E]) {
        (&self.data, &mut self.diff)
    }
}
