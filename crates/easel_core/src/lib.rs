pub mod finite_diff;
pub mod sampling;
pub mod taylor;
/// The `easel_core` crate provides the numerical engine behind the Easel
/// math-animation renderer. Everything here is a pure computation over scalar
/// functions; the renderer consumes the results as plain values.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction).
/// - **Finite Differences**: iterated symmetric-difference derivative estimates.
/// - **Taylor**: truncated polynomial approximants built from those estimates.
/// - **Sampling**: turning scalar functions into point sequences for graphing.
pub mod traits;
