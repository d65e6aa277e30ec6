//! Animation Module
//!
//! Turns discrete retargets into smooth per-frame motion:
//!
//! - [`AnimationClock`]: elapsed time per [`Timeline`] (motion and gravity)
//! - [`integrator`]: the pure capped linear step
//! - [`Animated`]: the `{initial, current, target}` record of one quantity
//! - [`AnimationState`]: rotation, translation and gravity offset together

pub mod clock;
pub mod integrator;
pub mod state;
pub mod values;

pub use clock::{AnimationClock, Timeline};
pub use state::AnimationState;
pub use values::{Animated, AnimatedVector, Interpolatable};
