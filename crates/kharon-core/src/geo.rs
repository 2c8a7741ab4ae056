//! Geographic boxes (geofences)
//!
//! A box is written as four comma-separated decimals,
//! `"left,top,right,bottom"`, and is held as two corners: the top-left and
//! the bottom-right one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A pair of coordinates
pub type Corner = [f64; 2];

/// A rectangle given by its top-left and bottom-right corners.
///
/// Serializes as `[[x1, y1], [x2, y2]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBox(pub Corner, pub Corner);

impl GeoBox {
    pub fn new(top_left: Corner, bottom_right: Corner) -> Self {
        Self(top_left, bottom_right)
    }

    pub fn top_left(&self) -> Corner {
        self.0
    }

    pub fn bottom_right(&self) -> Corner {
        self.1
    }

    /// Parse the `"x1,y1,x2,y2"` string form
    pub fn parse(raw: &str) -> Option<Self> {
        let parts = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()?;
        match parts.as_slice() {
            [x1, y1, x2, y2] => Some(Self([*x1, *y1], [*x2, *y2])),
            _ => None,
        }
    }

    /// Read a box either from its string form or from `[[x1, y1], [x2, y2]]`
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Array(_) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    /// Whether `other` lies entirely inside this box (edges included).
    ///
    /// All four corner coordinates of the container are compared against
    /// the corresponding coordinates of the contained box.
    pub fn contains(&self, other: &GeoBox) -> bool {
        self.0[0] <= other.0[0]
            && self.0[1] <= other.0[1]
            && self.1[0] >= other.1[0]
            && self.1[1] >= other.1[1]
    }
}

impl From<GeoBox> for Value {
    fn from(geo_box: GeoBox) -> Self {
        serde_json::json!([geo_box.0, geo_box.1])
    }
}

impl fmt::Display for GeoBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.0[0], self.0[1], self.1[0], self.1[1])
    }
}
