// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von led-core
pub use led_core::{
    ConfigError, HsvColor, LedConfig, LedError, PwmWriter, RgbColor, RgbLed, hsv_to_rgb,
};

use crate::config::{LED_BRIGHTNESS, LED_HUE};

/// Startfarbe aus der Build-Konfiguration (voll gesättigt)
pub const fn start_color() -> HsvColor {
    HsvColor::new(LED_HUE, 255, LED_BRIGHTNESS)
}
