//! LED Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Farbmodell (RGB/HSV), Polarität, Pin-Prüfung und der RGB-LED Treiber.

#![no_std]

pub mod driver;
pub mod logic;
#[cfg(feature = "embedded-hal")]
pub mod pwm;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use driver::RgbLed;
pub use logic::hsv_to_rgb;
#[cfg(feature = "embedded-hal")]
pub use pwm::PwmChannels;
pub use traits::{ConfigError, LedError, PwmWriter};
pub use types::{Channel, HsvColor, LedConfig, PinId, PinTriple, Polarity, RgbColor};
