use crate::taylor::taylor_approximation;
use anyhow::{bail, Result};
use serde::Serialize;

/// A scalar function evaluated over an axis range, ready to hand to the
/// renderer as a polyline.
#[derive(Debug, Clone, Serialize)]
pub struct SampledCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Samples `f` at `points` evenly spaced abscissae across `[x_min, x_max]`,
/// including both endpoints.
pub fn sample_uniform(
    f: impl Fn(f64) -> f64,
    x_min: f64,
    x_max: f64,
    points: usize,
) -> Result<SampledCurve> {
    if !x_min.is_finite() || !x_max.is_finite() {
        bail!("Sampling range must be finite.");
    }
    if x_min >= x_max {
        bail!("Sampling range is empty: x_min must be less than x_max.");
    }
    if points < 2 {
        bail!("Sampling requires at least two points.");
    }

    let step = (x_max - x_min) / (points - 1) as f64;
    let mut xs = Vec::with_capacity(points);
    let mut ys = Vec::with_capacity(points);
    for i in 0..points {
        // Pin the final abscissa; accumulated rounding can overshoot x_max.
        let x = if i == points - 1 {
            x_max
        } else {
            x_min + i as f64 * step
        };
        xs.push(x);
        ys.push(f(x));
    }

    Ok(SampledCurve { xs, ys })
}

/// Builds one sampled curve per requested Taylor order: the sweep a scene
/// plays when it morphs an approximation through increasing degrees.
pub fn sample_approximations(
    f: impl Fn(f64) -> f64,
    orders: &[usize],
    center: f64,
    x_min: f64,
    x_max: f64,
    points: usize,
) -> Result<Vec<SampledCurve>> {
    let mut curves = Vec::with_capacity(orders.len());
    for &order in orders {
        let poly = taylor_approximation(&f, order, center);
        curves.push(sample_uniform(|x| poly.evaluate(x), x_min, x_max, points)?);
    }
    Ok(curves)
}
