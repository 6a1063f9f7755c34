//! Shared numeric constants for the hotspot crate.

// ── Math ────────────────────────────────────────────────────────

/// 2π, the end angle of a full arc.
pub const FULL_TURN: f64 = 2.0 * std::f64::consts::PI;

/// Minimum vertex count for a polygon to enclose area.
pub const MIN_POLYGON_POINTS: usize = 3;

// ── Boundary reconciliation ─────────────────────────────────────

/// Default allowed drift between a nested box's corners and its stored size.
pub const DEFAULT_CORNER_TOLERANCE: f64 = 1e-6;

// ── Rendering ───────────────────────────────────────────────────

/// Global alpha restored after every shape.
pub const OPAQUE: f64 = 1.0;

// ── Environment keys ────────────────────────────────────────────

/// Overrides [`DEFAULT_CORNER_TOLERANCE`].
pub const ENV_CORNER_TOLERANCE: &str = "HOTSPOT_CORNER_TOLERANCE";

/// Selects the rectangle-to-circle fit (`inscribed` / `circumscribed`).
pub const ENV_CIRCLE_FIT: &str = "HOTSPOT_CIRCLE_FIT";
