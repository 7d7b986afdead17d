//! Actuator drivers

mod buzzer;
mod servo;

pub use buzzer::Buzzer;
pub use servo::Servo;
