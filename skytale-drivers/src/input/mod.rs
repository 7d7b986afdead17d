//! Digital input drivers

mod button;
mod dip;

pub use button::GateButton;
pub use dip::DipSwitches;
