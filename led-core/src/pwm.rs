//! `embedded-hal` Adapter (optional feature)
//!
//! Verbindet drei `SetDutyCycle`-Kanäle (z.B. ESP32 LEDC) mit [`PwmWriter`].

use embedded_hal::pwm::SetDutyCycle;

use crate::traits::{LedError, PwmWriter};
use crate::types::{PinId, PinTriple};

/// Drei PWM-Kanäle, adressiert über ihre Pin-Nummern
///
/// Nur die drei übergebenen Pins gelten als PWM-fähig. Der 8-Bit
/// Duty-Cycle wird auf die Auflösung des Kanals skaliert.
pub struct PwmChannels<C> {
    pins: [PinId; 3],
    channels: [C; 3],
}

impl<C: SetDutyCycle> PwmChannels<C> {
    /// Kanäle in der Reihenfolge rot, grün, blau
    pub fn new(pins: PinTriple, red: C, green: C, blue: C) -> Self {
        Self {
            pins: [pins.red(), pins.green(), pins.blue()],
            channels: [red, green, blue],
        }
    }

    /// Gibt die Kanäle wieder frei (rot, grün, blau)
    pub fn into_inner(self) -> [C; 3] {
        self.channels
    }

    fn index(&self, pin: PinId) -> Option<usize> {
        self.pins.iter().position(|&p| p == pin)
    }
}

impl<C: SetDutyCycle> PwmWriter for PwmChannels<C> {
    fn supports_pwm(&self, pin: PinId) -> bool {
        self.index(pin).is_some()
    }

    fn write(&mut self, pin: PinId, duty: u8) -> Result<(), LedError> {
        let index = self.index(pin).ok_or(LedError::WriteFailed)?;
        self.channels[index]
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .map_err(|_| LedError::WriteFailed)
    }
}
