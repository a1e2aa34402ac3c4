//! Transform specifications and recursion bounds, with validation run before
//! any drawing starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on recursion depth.
pub const DEFAULT_MAX_ITERATION_DEPTH: u32 = 400;
/// Default cap on the projected total number of shape-draw calls.
pub const DEFAULT_MAX_FUNCTION_CALLS: u64 = 10_000;
/// Default smallest size at which a shape is still drawn.
pub const DEFAULT_MIN_SIZE: f64 = 1.0;

/// Hard ceiling on `max_iteration_depth`. The recursion lives on the host
/// call stack, so a runaway depth cap is a stack overflow waiting to happen;
/// requests above this are rejected up front instead of crashing mid-draw.
pub const MAX_SUPPORTED_DEPTH: u32 = 16_384;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("starting size must be positive and finite, got {0}")]
    InvalidStartSize(f64),
    #[error("transform {index}: {reason}")]
    InvalidTransform { index: usize, reason: String },
    #[error("option {name} must be finite and non-negative, got {value}")]
    InvalidOption { name: &'static str, value: f64 },
    #[error(
        "max iteration depth {requested} exceeds the supported recursion limit {MAX_SUPPORTED_DEPTH}"
    )]
    DepthLimitUnsupported { requested: u32 },
}

/// One child branch of the recursion: how to derive a child drawing from the
/// shape just drawn.
///
/// Starting from the parent's pose, the heading is rotated by `angle`
/// degrees, the cursor is translated by `parent_size * x` along the rotated
/// heading and `parent_size * y` along its perpendicular, and a child of
/// size `parent_size * size` is drawn at that pose. Omitted fields take the
/// documented defaults when deserialized, so a JSON entry like
/// `{"size": 0.8}` is a pure shrink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformSpec {
    /// Offset along the (rotated) heading, as a fraction of the parent size.
    #[serde(default)]
    pub x: f64,
    /// Offset perpendicular to the heading, as a fraction of the parent size.
    #[serde(default)]
    pub y: f64,
    /// Child size as a fraction of the parent size. Zero is legal and
    /// terminates the branch; negative is rejected by validation.
    #[serde(default = "default_scale")]
    pub size: f64,
    /// Rotation applied to the heading before translating, in degrees.
    #[serde(default)]
    pub angle: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            size: 1.0,
            angle: 0.0,
        }
    }
}

impl TransformSpec {
    /// A pure shrink by `size`.
    pub fn scaled(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), DrawError> {
        let finite = |name: &str, value: f64| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(DrawError::InvalidTransform {
                    index,
                    reason: format!("{name} must be finite, got {value}"),
                })
            }
        };
        finite("x", self.x)?;
        finite("y", self.y)?;
        finite("size", self.size)?;
        finite("angle", self.angle)?;
        if self.size < 0.0 {
            return Err(DrawError::InvalidTransform {
                index,
                reason: format!("size must be non-negative, got {}", self.size),
            });
        }
        Ok(())
    }
}

/// Termination bounds for one top-level draw. Any `size` scale at or above
/// 1.0 never shrinks, so the depth and call caps must stay enabled; there is
/// deliberately no way to turn them off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DrawOptions {
    /// Hard cap on recursion depth (root call is depth 1).
    #[serde(default = "default_max_iteration_depth")]
    pub max_iteration_depth: u32,
    /// Cap on the projected total number of shape-draw calls for the whole
    /// recursion tree. Projection, not an exact count: see
    /// [`projected_calls`](crate::projected_calls).
    #[serde(default = "default_max_function_calls")]
    pub max_function_calls: u64,
    /// Branches shrink until their size drops below this, then stop.
    #[serde(default = "default_min_size")]
    pub min_size: f64,
}

fn default_max_iteration_depth() -> u32 {
    DEFAULT_MAX_ITERATION_DEPTH
}

fn default_max_function_calls() -> u64 {
    DEFAULT_MAX_FUNCTION_CALLS
}

fn default_min_size() -> f64 {
    DEFAULT_MIN_SIZE
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            max_iteration_depth: DEFAULT_MAX_ITERATION_DEPTH,
            max_function_calls: DEFAULT_MAX_FUNCTION_CALLS,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl DrawOptions {
    pub(crate) fn validate(&self) -> Result<(), DrawError> {
        if self.max_iteration_depth > MAX_SUPPORTED_DEPTH {
            return Err(DrawError::DepthLimitUnsupported {
                requested: self.max_iteration_depth,
            });
        }
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            return Err(DrawError::InvalidOption {
                name: "min_size",
                value: self.min_size,
            });
        }
        Ok(())
    }
}
