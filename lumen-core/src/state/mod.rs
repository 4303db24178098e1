//! Display state
//!
//! Orientation, power mode, backlight and clip bookkeeping for one panel,
//! plus the control requests that change it. The state is explicit and
//! owned; no globals.

pub mod control;
pub mod machine;

pub use control::{
    Control, CONTROL_BACKLIGHT, CONTROL_CONTRAST, CONTROL_ORIENTATION, CONTROL_POWER,
};
pub use machine::{DisplayState, Orientation, PowerMode, BACKLIGHT_MAX};
