//! Format reconciliation between the flat and nested legacy box encodings.
//!
//! Two producers write two different box shapes into the same field. Rather
//! than coupling them, every read site converts with [`to_nested_format`] /
//! [`to_flat_format`], and data crossing a serialization boundary goes through
//! [`normalize_for_boundary`] (or [`to_canonical`], which also collapses the
//! result to a plain [`Rect`]).
//!
//! Conversions trust the stored `width`/`height`. A nested box's corners are
//! relocated, never used to recompute its size.

#[cfg(test)]
#[path = "bbox_test.rs"]
mod bbox_test;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::GeometryConfig;
use crate::error::{Encoding, InvalidShapeError};
use crate::shape::{FlatBox, LegacyBox, NestedBox, Point, Rect, size_or_zero};

/// Convert either encoding to the nested form.
///
/// Nested input is returned unchanged. Flat input gets
/// `topLeft = (x, y)` and `bottomRight = (x + width, y + height)`.
#[must_use]
pub fn to_nested_format(b: impl Into<LegacyBox>) -> NestedBox {
    match b.into() {
        LegacyBox::Nested(nested) => nested,
        LegacyBox::Flat(flat) => NestedBox {
            top_left: Point::new(flat.x, flat.y),
            bottom_right: Point::new(flat.x + flat.width, flat.y + flat.height),
            width: flat.width,
            height: flat.height,
        },
    }
}

/// Convert either encoding to the flat form.
///
/// Flat input is returned unchanged. Nested input takes `x`/`y` from
/// `topLeft` and carries `width`/`height` through as stored; `bottomRight` is
/// dropped even if it disagrees with them.
#[must_use]
pub fn to_flat_format(b: impl Into<LegacyBox>) -> FlatBox {
    match b.into() {
        LegacyBox::Flat(flat) => flat,
        LegacyBox::Nested(nested) => FlatBox {
            x: nested.top_left.x,
            y: nested.top_left.y,
            width: nested.width,
            height: nested.height,
        },
    }
}

/// Nested box as it may arrive from outside. Size and `bottomRight` are
/// optional on the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NestedWire {
    top_left: Point,
    bottom_right: Option<Point>,
    #[serde(default, deserialize_with = "size_or_zero")]
    width: f64,
    #[serde(default, deserialize_with = "size_or_zero")]
    height: f64,
}

impl From<NestedWire> for NestedBox {
    fn from(w: NestedWire) -> Self {
        let bottom_right = w
            .bottom_right
            .unwrap_or_else(|| Point::new(w.top_left.x + w.width, w.top_left.y + w.height));
        NestedBox::new(w.top_left, bottom_right, w.width, w.height)
    }
}

/// Detect and decode a box arriving from an external source.
///
/// An object with a `topLeft` key is nested; otherwise an object with both
/// `x` and `y` keys is flat. Missing or `null` `width`/`height` read as `0`.
///
/// # Errors
///
/// Returns [`InvalidShapeError::UnrecognizedEncoding`] when the value has
/// neither a `topLeft` field nor both `x` and `y`, and
/// [`InvalidShapeError::Malformed`] when a recognized encoding holds
/// non-numeric coordinates.
pub fn normalize_for_boundary(value: &Value) -> Result<LegacyBox, InvalidShapeError> {
    let Some(obj) = value.as_object() else {
        warn!(kind = json_kind(value), "boundary box rejected: not an object");
        return Err(InvalidShapeError::UnrecognizedEncoding);
    };

    if obj.contains_key("topLeft") {
        let wire = NestedWire::deserialize(value).map_err(|source| {
            warn!(error = %source, "boundary box rejected: malformed nested box");
            InvalidShapeError::Malformed { encoding: Encoding::Nested, source }
        })?;
        debug!("boundary box accepted as nested");
        return Ok(LegacyBox::Nested(wire.into()));
    }

    if obj.contains_key("x") && obj.contains_key("y") {
        let flat = FlatBox::deserialize(value).map_err(|source| {
            warn!(error = %source, "boundary box rejected: malformed flat box");
            InvalidShapeError::Malformed { encoding: Encoding::Flat, source }
        })?;
        debug!("boundary box accepted as flat");
        return Ok(LegacyBox::Flat(flat));
    }

    warn!(keys = obj.len(), "boundary box rejected: no topLeft and no x/y pair");
    Err(InvalidShapeError::UnrecognizedEncoding)
}

/// Decode a boundary box straight to the canonical [`Rect`].
///
/// Stored size wins over corners. A nested box whose corners drift from its
/// size by more than `config.corner_tolerance` is still accepted but logged.
///
/// # Errors
///
/// Same as [`normalize_for_boundary`].
pub fn to_canonical(value: &Value, config: &GeometryConfig) -> Result<Rect, InvalidShapeError> {
    let decoded = normalize_for_boundary(value)?;
    if let LegacyBox::Nested(nested) = decoded {
        if !nested.is_consistent(config.corner_tolerance) {
            warn!(
                width = nested.width,
                height = nested.height,
                corner_width = nested.bottom_right.x - nested.top_left.x,
                corner_height = nested.bottom_right.y - nested.top_left.y,
                "nested box corners disagree with stored size; keeping stored size"
            );
        }
    }
    Ok(to_flat_format(decoded).into())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
