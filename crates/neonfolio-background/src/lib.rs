//! Layered synthwave backdrop animation.
//!
//! [`BackgroundAnimator`] owns a small particle simulation (drifting
//! stars, shooting stars) and redraws a full scene every frame: background
//! gradient, parallax starfield, aurora ribbons, perspective ground grid,
//! rotating hex wireframe, shooting stars, a scan line, occasional glitch
//! bands, and a vignette. The host forwards resize and pointer events and
//! drives the frame loop; everything else lives in here.

mod animations;
mod animator;
mod palette;
mod tuning;

pub use animations::grid::GridLayout;
pub use animations::shooting::ShootingStar;
pub use animations::stars::Star;
pub use animator::BackgroundAnimator;
