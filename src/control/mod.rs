//! Player commands and the speed accumulator they feed.

pub mod accumulator;
pub mod command;

pub use accumulator::{AxisCoupling, CommandAccumulator, SpeedState};
pub use command::{Axis, LanderCommand};
