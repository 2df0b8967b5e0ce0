use ndarray::{Array, ArrayD, Dimension, arr0};

/// One of the four rocket equation quantities, either provided or absent.
///
/// A provided value is an array of any rank; a scalar is a rank-0 array and
/// broadcasts against anything. Exactly one operand per solve must be
/// [`Operand::Absent`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    Value(ArrayD<f64>),
    #[default]
    Absent,
}

impl Operand {
    /// Returns `true` if this operand is the quantity to solve for.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the shape of a provided value, or `None` if absent.
    #[must_use]
    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            Self::Value(value) => Some(value.shape()),
            Self::Absent => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Value(arr0(value).into_dyn())
    }
}

impl<D: Dimension> From<Array<f64, D>> for Operand {
    fn from(value: Array<f64, D>) -> Self {
        Self::Value(value.into_dyn())
    }
}

impl From<Vec<f64>> for Operand {
    fn from(value: Vec<f64>) -> Self {
        Array::from_vec(value).into()
    }
}
