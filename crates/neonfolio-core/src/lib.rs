//! Core types shared across the neonfolio workspace.
//!
//! This crate holds the plain data types the renderers and the host
//! exchange: colors, normalized pointer state, viewport geometry, skill
//! entries, and the animation speed setting. It has no dependencies so
//! every other crate can use it freely.

mod color;
mod skill;
mod speed;
mod state;

pub use color::{hsl_to_rgb, Rgba};
pub use skill::SkillItem;
pub use speed::AnimationSpeed;
pub use state::{PointerState, ViewportState};
