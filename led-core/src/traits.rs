//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

use crate::types::{Channel, PinId};

/// Fehler-Typ für LED-Schreiboperationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed => write!(f, "PWM write failed"),
        }
    }
}

/// Konfigurationsfehler (Verdrahtung/Build), wird nie wiederholt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Zwei Farbkanäle teilen sich denselben Pin
    DuplicatePin { pin: PinId },
    /// Pin kann keinen variablen Duty-Cycle ausgeben
    PinWithoutPwm { channel: Channel, pin: PinId },
    /// Konfigurierter Pin passt nicht zum verdrahteten GPIO
    PinMismatch {
        channel: Channel,
        expected: PinId,
        actual: PinId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePin { pin } => {
                write!(f, "pin {pin} is assigned to more than one color channel")
            }
            Self::PinWithoutPwm { channel, pin } => {
                write!(f, "{} pin {pin} does not support PWM", channel.name())
            }
            Self::PinMismatch {
                channel,
                expected,
                actual,
            } => write!(
                f,
                "{} channel is configured for pin {expected} but wired to pin {actual}",
                channel.name()
            ),
        }
    }
}

/// Trait für PWM-Ausgänge einer RGB-LED
///
/// Abstrahiert `analogWrite`-artigen Zugriff: ein 8-Bit Duty-Cycle pro Pin.
///
/// # Implementierungen
/// - **Production:** `PwmChannels` über `embedded_hal::pwm::SetDutyCycle`
///   (ESP32 LEDC Peripheral)
/// - **Testing:** MockPwmWriter (in-memory Mock)
pub trait PwmWriter {
    /// Kann der Pin einen variablen Duty-Cycle ausgeben?
    fn supports_pwm(&self, pin: PinId) -> bool;

    /// Schreibt einen Duty-Cycle (0-255) auf den Pin
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, pin: PinId, duty: u8) -> Result<(), LedError>;
}

impl<W: PwmWriter + ?Sized> PwmWriter for &mut W {
    fn supports_pwm(&self, pin: PinId) -> bool {
        (**self).supports_pwm(pin)
    }

    fn write(&mut self, pin: PinId, duty: u8) -> Result<(), LedError> {
        (**self).write(pin, duty)
    }
}
