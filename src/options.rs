//! Control panel state of the scenes.
//!
//! All fields are public and every struct has a `Default` matching the
//! initial state of the corresponding demo.
use crate::Parametrization;
use core::f64::consts::PI;

/// Options of a [`PolylineScene`](crate::PolylineScene).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CurveOptions {
    pub parametrization: Parametrization,
    /// Number of points sampled along the curve.
    pub sample_count: usize,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            parametrization: Parametrization::Uniform,
            sample_count: 10,
        }
    }
}

/// Options of a [`PatchScene`](crate::PatchScene).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SurfaceOptions {
    pub parametrization: Parametrization,
    /// Sample intervals along `u`.
    pub slices: usize,
    /// Sample intervals along `v`.
    pub stacks: usize,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            parametrization: Parametrization::Uniform,
            slices: 8,
            stacks: 8,
        }
    }
}

/// Options of a [`CircleScene`](crate::CircleScene).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CircleOptions {
    /// `[x₀, y₀]`.
    pub center: [f64; 2],
    pub radius: f64,
    pub sample_count: usize,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            radius: 1.0,
            sample_count: 10,
        }
    }
}

/// Options of a [`SectorScene`](crate::SectorScene).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SectorOptions {
    /// Center `[x₀, y₀]` of the rim circle in the `z = 0` plane.
    pub center: [f64; 2],
    pub radius: f64,
    /// Height of the apex above the center.
    pub apex_height: f64,
    pub slices: usize,
    pub stacks: usize,
}

impl Default for SectorOptions {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            radius: 1.0,
            apex_height: 5.0,
            slices: 50,
            stacks: 2,
        }
    }
}

/// Generator of the initial [`PatchScene`](crate::PatchScene) control
/// net: `rows × cols` points evenly spread over `x_range × y_range`,
/// shifted so the ranges are centered on the origin, with
/// `z = amplitude · sin x · sin y` of the shifted coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WaveGridOptions {
    pub rows: usize,
    pub cols: usize,
    /// `[x_min, x_max]`.
    pub x_range: [f64; 2],
    /// `[y_min, y_max]`.
    pub y_range: [f64; 2],
    pub amplitude: f64,
}

impl Default for WaveGridOptions {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            x_range: [0.0, 3.0 * PI],
            y_range: [0.0, 3.0 * PI],
            amplitude: 1.5,
        }
    }
}
