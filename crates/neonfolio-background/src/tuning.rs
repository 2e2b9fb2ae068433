//! Backdrop tuning constants.
//!
//! Structural values (counts, probabilities, caps, lifetime ranges, wrap
//! and exit margins, the grid's row/column counts and easing) keep their
//! original values; distances and radii are sized for terminal-resolution
//! surfaces, where one logical pixel is half a character cell.

/// Number of background stars seeded at initialization.
pub const STAR_COUNT: usize = 120;

/// Stars wrap back to `-STAR_WRAP_MARGIN` once below `height + margin`.
pub const STAR_WRAP_MARGIN: f32 = 10.0;

/// Star radius range.
pub const STAR_SIZE_MIN: f32 = 0.2;
pub const STAR_SIZE_SPAN: f32 = 0.6;

/// Per-star speed range, logical pixels per frame.
pub const STAR_SPEED_MIN: f32 = 0.05;
pub const STAR_SPEED_SPAN: f32 = 0.2;

/// Downward drift per frame is `speed * STAR_FALL`.
pub const STAR_FALL: f32 = 0.6;

/// Maximum parallax offset applied to stars at full pointer deflection.
pub const STAR_DRIFT: f32 = 3.0;

/// Hard cap on concurrent shooting stars; a spawn is only considered while
/// the population is strictly below this.
pub const SHOOTING_STAR_CAP: usize = 4;

/// Per-frame spawn probability once below the cap.
pub const SHOOTING_STAR_CHANCE: f32 = 0.008;

/// Shooting stars spawn just outside a side edge...
pub const SHOOT_SPAWN_MARGIN: f32 = 12.0;

/// ...and are retired once outside the viewport by this much.
pub const SHOOT_EXIT_MARGIN: f32 = 60.0;

/// Shooting-star speed range, logical pixels per frame.
pub const SHOOT_SPEED_MIN: f32 = 1.2;
pub const SHOOT_SPEED_SPAN: f32 = 0.8;

/// Vertical velocity damping relative to horizontal.
pub const SHOOT_VY_FACTOR: f32 = 0.6;

/// Lifetime range in frames.
pub const SHOOT_LIFE_MIN: f32 = 80.0;
pub const SHOOT_LIFE_SPAN: f32 = 60.0;

/// Tail reaches back this many velocity steps.
pub const SHOOT_TAIL_STEPS: f32 = 3.0;
pub const SHOOT_TAIL_WIDTH: f32 = 1.0;
pub const SHOOT_HEAD_RADIUS: f32 = 0.9;

/// Aurora ribbon amplitude as a fraction of surface height, per band.
pub const RIBBON_AMP_BASE: f32 = 0.03;
pub const RIBBON_AMP_STEP: f32 = 0.02;

/// Radians of dominant wave phase across the full surface width, per band.
pub const RIBBON_CYCLES_BASE: f32 = 3.0;
pub const RIBBON_CYCLES_STEP: f32 = 1.2;

/// Gradient half-extent around a band's midline, fraction of height.
pub const RIBBON_BAND: f32 = 0.13;

/// Ribbon skirt below the midline, fraction of height.
pub const RIBBON_SKIRT: f32 = 0.2;

/// Sampling step along a ribbon, logical pixels.
pub const RIBBON_STEP: f32 = 2.0;

/// Horizontal perspective lines between horizon and bottom edge.
pub const GRID_ROWS: usize = 28;

/// Spokes on each side of the vanishing point.
pub const GRID_COLS: i32 = 20;

/// Spoke spacing along the bottom edge, fraction of width.
pub const GRID_SPACING_FRAC: f32 = 0.05;

/// Pointer sway of the vanishing point and horizon.
pub const GRID_SWAY_X: f32 = 10.0;
pub const GRID_SWAY_Y: f32 = 6.0;

/// Horizon height as a fraction of the surface.
pub const GRID_HORIZON_FRAC: f32 = 0.42;

/// Radial horizon glow inner radius.
pub const GLOW_INNER: f32 = 2.0;

/// Hex wireframe cell size and placement.
pub const HEX_SIZE: f32 = 14.0;
pub const HEX_SWAY: f32 = 10.0;
pub const HEX_PIVOT_DROP: f32 = 8.0;
pub const HEX_TOP_OFFSET: f32 = 7.0;

/// Scan line sweep in logical pixels per millisecond, wrapped by height.
pub const SCAN_SPEED: f32 = 0.1;
pub const SCAN_WIDTH: f32 = 1.5;

/// Per-frame glitch band probability and height range.
pub const GLITCH_CHANCE: f32 = 0.02;
pub const GLITCH_MIN_HEIGHT: f32 = 3.0;
pub const GLITCH_HEIGHT_SPAN: f32 = 6.0;
