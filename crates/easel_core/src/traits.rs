use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars by the estimators.
/// Must support basic arithmetic, debug printing, and conversion from f64.
///
/// Scalar functions themselves carry no named trait; they are passed
/// structurally as `impl Fn(T) -> T`.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}
