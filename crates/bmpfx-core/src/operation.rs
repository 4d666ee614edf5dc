//! Serializable transform selection and dispatch.
//!
//! [`Operation`] names one of the ten transforms together with its
//! parameters. Drivers build one (from CLI arguments, a JSON file, a menu
//! selection or a JS object) and call [`Operation::apply`].
//!
//! The serialized form is internally tagged:
//!
//! ```json
//! [
//!   { "op": "grayscale" },
//!   { "op": "enlarge", "x_scale": 2, "y_scale": 2 },
//!   { "op": "lighten", "factor": 0.5 }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filters;
use crate::pixel::Image;
use crate::transform::{self, TransformError};

/// One transform and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Vignette,
    Clarendon { factor: f64 },
    Grayscale,
    Rotate90,
    Rotate { turns: i32 },
    Enlarge { x_scale: u32, y_scale: u32 },
    HighContrast,
    Lighten { factor: f64 },
    Darken { factor: f64 },
    Posterize,
}

/// Parameters a menu-driven front end collects before picking an operation.
///
/// Only the fields the chosen operation needs are read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuParams {
    pub factor: f64,
    pub turns: i32,
    pub x_scale: u32,
    pub y_scale: u32,
}

impl Default for MenuParams {
    fn default() -> Self {
        Self {
            factor: 1.0,
            turns: 1,
            x_scale: 1,
            y_scale: 1,
        }
    }
}

impl Operation {
    /// Every operation in menu order, with default parameters.
    pub fn all() -> [Operation; 10] {
        let params = MenuParams::default();
        let mut ops = [Operation::Vignette; 10];
        for (slot, index) in ops.iter_mut().zip(1..=10) {
            if let Some(op) = Operation::from_menu_index(index, params) {
                *slot = op;
            }
        }
        ops
    }

    /// Map a 1-based menu selection to an operation.
    ///
    /// Returns `None` for indices outside 1..=10.
    pub fn from_menu_index(index: u32, params: MenuParams) -> Option<Self> {
        let op = match index {
            1 => Operation::Vignette,
            2 => Operation::Clarendon {
                factor: params.factor,
            },
            3 => Operation::Grayscale,
            4 => Operation::Rotate90,
            5 => Operation::Rotate {
                turns: params.turns,
            },
            6 => Operation::Enlarge {
                x_scale: params.x_scale,
                y_scale: params.y_scale,
            },
            7 => Operation::HighContrast,
            8 => Operation::Lighten {
                factor: params.factor,
            },
            9 => Operation::Darken {
                factor: params.factor,
            },
            10 => Operation::Posterize,
            _ => return None,
        };
        Some(op)
    }

    /// 1-based menu position.
    pub fn menu_index(&self) -> u32 {
        match self {
            Operation::Vignette => 1,
            Operation::Clarendon { .. } => 2,
            Operation::Grayscale => 3,
            Operation::Rotate90 => 4,
            Operation::Rotate { .. } => 5,
            Operation::Enlarge { .. } => 6,
            Operation::HighContrast => 7,
            Operation::Lighten { .. } => 8,
            Operation::Darken { .. } => 9,
            Operation::Posterize => 10,
        }
    }

    /// Human-readable label.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Vignette => "vignette",
            Operation::Clarendon { .. } => "clarendon",
            Operation::Grayscale => "grayscale",
            Operation::Rotate90 => "90 degree rotation",
            Operation::Rotate { .. } => "multiple 90 degree rotations",
            Operation::Enlarge { .. } => "enlarge",
            Operation::HighContrast => "high contrast",
            Operation::Lighten { .. } => "lighten",
            Operation::Darken { .. } => "darken",
            Operation::Posterize => "black, white, red, green, blue filter",
        }
    }

    /// Run the operation on `image`, returning a new image.
    ///
    /// # Errors
    ///
    /// Returns `TransformError` for rejected parameters (zero scale,
    /// non-finite factor).
    #[tracing::instrument(level = "debug", skip(image), fields(width = image.width(), height = image.height()))]
    pub fn apply(&self, image: &Image) -> Result<Image, TransformError> {
        let result = match *self {
            Operation::Vignette => filters::vignette(image),
            Operation::Clarendon { factor } => filters::clarendon(image, factor)?,
            Operation::Grayscale => filters::grayscale(image),
            Operation::Rotate90 => transform::rotate_90(image),
            Operation::Rotate { turns } => transform::rotate(image, turns),
            Operation::Enlarge { x_scale, y_scale } => transform::enlarge(image, x_scale, y_scale)?,
            Operation::HighContrast => filters::high_contrast(image),
            Operation::Lighten { factor } => filters::lighten(image, factor)?,
            Operation::Darken { factor } => filters::darken(image, factor)?,
            Operation::Posterize => filters::posterize(image),
        };
        debug!(
            out_width = result.width(),
            out_height = result.height(),
            "applied {}",
            self.name()
        );
        Ok(result)
    }
}

/// Apply `ops` in order, each to the previous result.
///
/// An empty list returns a copy of `image`.
pub fn apply_chain(image: &Image, ops: &[Operation]) -> Result<Image, TransformError> {
    let mut current = image.clone();
    for op in ops {
        current = op.apply(&current)?;
    }
    Ok(current)
}
