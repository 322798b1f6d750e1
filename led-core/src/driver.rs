//! RGB-LED Treiber
//!
//! Hält die aktuelle Farbe und schreibt sie über einen [`PwmWriter`]
//! auf die drei Farbkanäle. Die Polarität (gemeinsame Kathode/Anode)
//! wird beim Erstellen festgelegt.

use crate::logic::hsv_to_rgb;
use crate::traits::{ConfigError, LedError, PwmWriter};
use crate::types::{Channel, HsvColor, LedConfig, RgbColor};

/// Treiber für eine einzelne RGB-LED mit drei PWM-Pins
///
/// `show()` und `hide()` setzen die Ausgänge bei jedem Aufruf neu,
/// ein "an/aus"-Zustand wird nicht gespeichert.
pub struct RgbLed<W: PwmWriter> {
    writer: W,
    config: LedConfig,
    color: RgbColor,
}

impl<W: PwmWriter> RgbLed<W> {
    /// Erstellt einen Treiber mit Weiß als Startfarbe
    ///
    /// Die Pin-Konfiguration wird hier einmalig geprüft. Schlägt die Prüfung
    /// fehl, gibt es keinen Treiber, also auch kein `show()`/`hide()`.
    pub fn new(writer: W, config: LedConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.pins.validate(|pin| writer.supports_pwm(pin)) {
            #[cfg(feature = "defmt")]
            defmt::warn!("RGB LED config rejected: {}", e);
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("RGB LED ready: {}", config);

        Ok(Self {
            writer,
            config,
            color: RgbColor::default(),
        })
    }

    /// Startfarbe als RGB
    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.set_color(color);
        self
    }

    /// Startfarbe als HSV
    pub fn with_hsv(mut self, color: HsvColor) -> Self {
        self.set_hsv(color);
        self
    }

    /// Startfarbe aus rohen Kanalwerten
    pub fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        self.with_color(RgbColor::new(r, g, b))
    }

    /// Speichert die Farbe, die Ausgänge ändern sich erst mit `show()`
    pub fn set_color(&mut self, color: RgbColor) {
        self.color = color;
    }

    /// Speichert eine HSV-Farbe (wird sofort nach RGB konvertiert)
    pub fn set_hsv(&mut self, color: HsvColor) {
        self.set_color(hsv_to_rgb(color));
    }

    /// Aktuell gespeicherte Farbe
    pub fn color(&self) -> RgbColor {
        self.color
    }

    /// Polarität und Pins, mit denen der Treiber erstellt wurde
    pub fn config(&self) -> &LedConfig {
        &self.config
    }

    /// Schreibt die aktuelle Farbe auf die Ausgänge
    pub fn show(&mut self) -> Result<(), LedError> {
        let RgbColor { r, g, b } = self.color;
        self.write_channel(Channel::Red, r)?;
        self.write_channel(Channel::Green, g)?;
        self.write_channel(Channel::Blue, b)
    }

    /// Schaltet alle drei Kanäle aus
    pub fn hide(&mut self) -> Result<(), LedError> {
        for channel in Channel::ALL {
            self.write_channel(channel, 0)?;
        }
        Ok(())
    }

    /// Gibt den Writer (und damit die Hardware) wieder frei
    pub fn release(self) -> W {
        self.writer
    }

    fn write_channel(&mut self, channel: Channel, value: u8) -> Result<(), LedError> {
        let pin = self.config.pins.pin(channel);
        self.writer.write(pin, self.config.polarity.duty(value))
    }
}
