//! Core Types für die RGB-LED-Steuerung
//!
//! Farbmodell (RGB/HSV), Polarität und Pin-Konfiguration.
//! Datenstrukturen ohne Hardware-Dependencies.

use rgb::RGB8;

use crate::logic::hsv_to_rgb;
use crate::traits::ConfigError;

/// Pin-Nummer eines PWM-Ausgangs (wie auf dem Board beschriftet)
pub type PinId = u8;

// ============================================================================
// Farbmodell
// ============================================================================

/// RGB-Farbe mit drei 8-Bit Kanälen (0-255)
///
/// Der Default ist Weiß (255, 255, 255), nicht Schwarz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Erstellt eine RGB-Farbe aus Rot-, Grün- und Blau-Anteil
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<RGB8> for RgbColor {
    fn from(color: RGB8) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<RgbColor> for RGB8 {
    fn from(color: RgbColor) -> Self {
        RGB8 {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// HSV-Farbe mit 8-Bit Festkomma-Kodierung
///
/// Der Farbkreis ist in 256 Schritte aufgeteilt (keine Grad-Angabe).
/// Der Default ist Weiß (h=0, s=0, v=255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsvColor {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl HsvColor {
    /// Erstellt eine HSV-Farbe aus Farbton, Sättigung und Helligkeit
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Voll gesättigter Farbton mit maximaler Helligkeit (s=255, v=255)
    pub const fn from_hue(h: u8) -> Self {
        Self::new(h, 255, 255)
    }

    /// Konvertiert explizit nach RGB (siehe [`hsv_to_rgb`])
    pub const fn to_rgb(self) -> RgbColor {
        hsv_to_rgb(self)
    }
}

impl Default for HsvColor {
    fn default() -> Self {
        Self::new(0, 0, 255)
    }
}

// ============================================================================
// Polarität
// ============================================================================

/// Verdrahtung der LED
///
/// Wird beim Erstellen des Treibers festgelegt und ist danach fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Gemeinsame Kathode: Duty-Cycle = Farbwert, aus = 0
    #[default]
    CommonCathode,
    /// Gemeinsame Anode: Duty-Cycle = 255 - Farbwert, aus = 255
    CommonAnode,
}

impl Polarity {
    /// Bildet einen Farbwert auf den Duty-Cycle des Ausgangs ab
    pub const fn duty(self, value: u8) -> u8 {
        match self {
            Polarity::CommonCathode => value,
            Polarity::CommonAnode => u8::MAX - value,
        }
    }

    /// Duty-Cycle für "LED aus"
    pub const fn off(self) -> u8 {
        self.duty(0)
    }
}

// ============================================================================
// Pin-Konfiguration
// ============================================================================

/// Farbkanal einer LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Die drei PWM-Pins einer RGB-LED
///
/// Die Pins müssen paarweise verschieden sein. `new()` prüft das zur
/// Laufzeit, `checked()` bereits beim Kompilieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinTriple {
    red: PinId,
    green: PinId,
    blue: PinId,
}

impl PinTriple {
    /// Erstellt ein Pin-Tripel, doppelte Pins werden abgelehnt
    pub const fn new(red: PinId, green: PinId, blue: PinId) -> Result<Self, ConfigError> {
        let pins = Self { red, green, blue };
        match pins.duplicate() {
            Some(pin) => Err(ConfigError::DuplicatePin { pin }),
            None => Ok(pins),
        }
    }

    /// Pin-Tripel mit Prüfung zur Compile-Zeit
    ///
    /// ```
    /// # use led_core::PinTriple;
    /// const PINS: PinTriple = PinTriple::checked::<9, 10, 11>();
    /// assert_eq!(PINS.blue(), 11);
    /// ```
    ///
    /// Doppelte Pins brechen den Build ab:
    ///
    /// ```compile_fail
    /// # use led_core::PinTriple;
    /// const PINS: PinTriple = PinTriple::checked::<1, 1, 2>();
    /// assert_eq!(PINS.red(), 1);
    /// ```
    pub const fn checked<const R: PinId, const G: PinId, const B: PinId>() -> Self {
        const {
            assert!(
                R != G && R != B && G != B,
                "RGB LED red, green, and blue pins must have different pin numbers"
            );
        }
        Self {
            red: R,
            green: G,
            blue: B,
        }
    }

    pub const fn red(&self) -> PinId {
        self.red
    }

    pub const fn green(&self) -> PinId {
        self.green
    }

    pub const fn blue(&self) -> PinId {
        self.blue
    }

    /// Pin für einen Farbkanal
    pub const fn pin(&self, channel: Channel) -> PinId {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Alle Prüfungen in einem Schritt: verschiedene Pins, jeder PWM-fähig
    ///
    /// `supports_pwm` kommt vom Board (siehe `PwmWriter::supports_pwm`).
    pub fn validate(&self, supports_pwm: impl Fn(PinId) -> bool) -> Result<(), ConfigError> {
        if let Some(pin) = self.duplicate() {
            return Err(ConfigError::DuplicatePin { pin });
        }

        for channel in Channel::ALL {
            let pin = self.pin(channel);
            if !supports_pwm(pin) {
                return Err(ConfigError::PinWithoutPwm { channel, pin });
            }
        }

        Ok(())
    }

    /// Prüft, ob die tatsächlich verdrahteten Pins (rot, grün, blau)
    /// zu diesem Tripel passen
    pub fn ensure_wired(&self, wired: [PinId; 3]) -> Result<(), ConfigError> {
        for (channel, actual) in Channel::ALL.into_iter().zip(wired) {
            let expected = self.pin(channel);
            if expected != actual {
                return Err(ConfigError::PinMismatch {
                    channel,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    const fn duplicate(&self) -> Option<PinId> {
        if self.red == self.green || self.red == self.blue {
            Some(self.red)
        } else if self.green == self.blue {
            Some(self.green)
        } else {
            None
        }
    }
}

/// Vollständige Konfiguration einer RGB-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    pub polarity: Polarity,
    pub pins: PinTriple,
}

impl LedConfig {
    pub const fn new(polarity: Polarity, pins: PinTriple) -> Self {
        Self { polarity, pins }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for RgbColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HsvColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "hsv({}, {}, {})", self.h, self.s, self.v)
    }
}
