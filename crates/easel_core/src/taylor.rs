use crate::finite_diff::{derivative, Stencil};
use serde::{Deserialize, Serialize};

/// A truncated Taylor approximant of a scalar function.
///
/// The coefficient for degree `k` is the estimated `k`-th derivative at
/// `center` divided by `k!`. Evaluation sums `c_k * x^k` over raw powers of
/// `x`, not `(x - center)^k`, so the polynomial only takes the classical
/// Taylor form when `center` is zero, the only center the current scenes
/// expand around.
// TODO: switch evaluation to powers of (x - center) once any scene expands
// away from the origin; doing it now would shift every rendered graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaylorPolynomial {
    center: f64,
    coefficients: Vec<f64>,
}

/// Builds the degree-`highest_term` Taylor approximant of `f` around
/// `center`.
///
/// Each coefficient comes from one [`derivative`] call at the default step
/// size, so estimator error compounds as `highest_term` grows. The degree-0
/// term is an order-0 estimate, i.e. exactly `f(center)`.
pub fn taylor_approximation(
    f: impl Fn(f64) -> f64,
    highest_term: usize,
    center: f64,
) -> TaylorPolynomial {
    let coefficients = (0..=highest_term)
        .map(|order| {
            let stencil = Stencil {
                order,
                ..Stencil::default()
            };
            derivative(&f, center, stencil) / factorial(order)
        })
        .collect();

    TaylorPolynomial {
        center,
        coefficients,
    }
}

impl TaylorPolynomial {
    /// Evaluates the approximant at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut total = 0.0;
        let mut power = 1.0;
        for &c in &self.coefficients {
            total += c * power;
            power *= x;
        }
        total
    }

    /// Consumes the polynomial into a plain function value, the shape the
    /// renderer expects for graphable curves.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 {
        move |x| self.evaluate(x)
    }

    /// The expansion point the derivatives were estimated at.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Coefficients by degree, constant term first. Always
    /// `highest_term + 1` entries.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

#[cfg(test)]
mod tests {
    use super::{factorial, taylor_approximation};

    #[test]
    fn constant_term_is_the_function_value() {
        let poly = taylor_approximation(f64::exp, 4, 0.0);
        assert_eq!(poly.coefficients()[0], 1.0);
        assert!((poly.evaluate(0.0) - 1.0).abs() < 1e-2);
    }

    #[test]
    fn quadratic_cosine_approximation_matches_near_zero() {
        // cos x ~ 1 - x^2/2; at x = 0.1 both sit near 0.995.
        let poly = taylor_approximation(f64::cos, 2, 0.0);
        let coeffs = poly.coefficients();
        assert_eq!(coeffs.len(), 3);
        assert_eq!(coeffs[0], 1.0);
        assert!(coeffs[1].abs() < 1e-9);
        assert!((coeffs[2] + 0.5).abs() < 1e-4);
        assert!((poly.evaluate(0.1) - (0.1f64).cos()).abs() < 1e-3);
    }

    #[test]
    fn quintic_sine_approximation_holds_at_one_half() {
        let poly = taylor_approximation(f64::sin, 5, 0.0);
        assert_eq!(poly.degree(), 5);
        assert!((poly.evaluate(0.5) - (0.5f64).sin()).abs() < 1e-3);
    }

    #[test]
    fn nonzero_center_keeps_raw_powers_of_x() {
        // For f(x) = x^2 around 1 the estimates are f(1) = 1, f'(1) = 2,
        // f''(1) = 2, giving 1 + 2x + x^2 under raw-power evaluation. The
        // recentered form would give x^2, i.e. 0 at the origin.
        let poly = taylor_approximation(|x| x * x, 2, 1.0);
        assert_eq!(poly.center(), 1.0);
        assert!((poly.evaluate(0.0) - 1.0).abs() < 1e-6);
        assert!((poly.evaluate(1.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn into_fn_agrees_with_evaluate() {
        let poly = taylor_approximation(f64::cos, 4, 0.0);
        let reference = poly.clone();
        let func = poly.into_fn();
        for &x in &[-1.0, -0.3, 0.0, 0.7, 2.0] {
            assert_eq!(func(x), reference.evaluate(x));
        }
    }

    #[test]
    fn factorial_scaling() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
    }
}
