//! Hardware abstraction traits
//!
//! These traits define the interface between the node logic and the
//! hardware-specific drivers. Each capability is a struct constructed
//! once and passed into the acquisition or presentation loop - never an
//! ambient global.

pub mod radio;
pub mod switches;
pub mod token;

pub use radio::{RadioError, RadioTransport};
pub use switches::ConfigSwitches;
pub use token::{IdentityToken, TokenError, TokenReader, MAX_TOKEN_LEN};
