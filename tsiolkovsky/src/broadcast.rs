//! Right-aligned singleton-expansion broadcasting.
//!
//! Two shapes are compared from the trailing dimension inward. A pair of
//! dimensions is compatible when they are equal or one of them is 1, and a
//! dimension missing from the shorter shape counts as 1. The broadcast shape
//! takes the larger size of each compatible pair.

use ndarray::{ArrayD, IxDyn, Zip};
use thiserror::Error;
use tracing::trace;

/// Two operand shapes that cannot be broadcast together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operands could not be broadcast together with shapes {left:?} and {right:?}")]
pub struct BroadcastError {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

/// Returns the shape produced by broadcasting `left` against `right`.
///
/// # Errors
///
/// Returns a [`BroadcastError`] if any aligned pair of dimensions differs and
/// neither is 1.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> Result<Vec<usize>, BroadcastError> {
    let ndim = left.len().max(right.len());
    let mut shape = vec![1; ndim];

    for (offset, dim) in shape.iter_mut().rev().enumerate() {
        let l = trailing(left, offset);
        let r = trailing(right, offset);
        *dim = match (l, r) {
            _ if l == r => l,
            (1, _) => r,
            (_, 1) => l,
            _ => {
                return Err(BroadcastError {
                    left: left.to_vec(),
                    right: right.to_vec(),
                });
            }
        };
    }

    Ok(shape)
}

/// Applies `f` element-wise over `left` and `right` after broadcasting both to
/// their common shape.
///
/// The inputs are only read; the result is a freshly allocated array.
///
/// # Errors
///
/// Returns a [`BroadcastError`] if the operand shapes are incompatible.
pub fn zip_with<F>(left: &ArrayD<f64>, right: &ArrayD<f64>, f: F) -> Result<ArrayD<f64>, BroadcastError>
where
    F: Fn(f64, f64) -> f64,
{
    let shape = broadcast_shape(left.shape(), right.shape())?;
    trace!(left = ?left.shape(), right = ?right.shape(), ?shape, "broadcasting operands");

    let mismatch = || BroadcastError {
        left: left.shape().to_vec(),
        right: right.shape().to_vec(),
    };
    let lhs = left.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let rhs = right.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;

    Ok(Zip::from(lhs).and(rhs).map_collect(|&a, &b| f(a, b)))
}

/// Size of the dimension `offset` places in from the end, or 1 if absent.
fn trailing(shape: &[usize], offset: usize) -> usize {
    shape
        .len()
        .checked_sub(offset + 1)
        .map_or(1, |index| shape[index])
}
