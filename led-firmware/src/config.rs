// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use led_core::{LedConfig, PinTriple, Polarity};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pins der drei LED-Beinchen (rot, grün, blau)
///
/// Muss zu den Peripherals passen, die main.rs an `init_ledc_writer()`
/// übergibt (GPIO4, GPIO5, GPIO6), sonst schlägt die Initialisierung fehl.
/// Doppelte Pins scheitern beim Kompilieren.
pub const LED_PINS: PinTriple = PinTriple::checked::<4, 5, 6>();

/// Verdrahtung der LED
/// Wird zur Build-Zeit aus LED_POLARITY geladen ("cathode" oder "anode")
/// Default: gemeinsame Kathode
pub const LED_POLARITY: Polarity = match option_env!("LED_POLARITY") {
    Some(value) => parse_polarity(value),
    None => Polarity::CommonCathode,
};

/// Vollständige LED-Konfiguration für den Treiber
pub const LED_CONFIG: LedConfig = LedConfig::new(LED_POLARITY, LED_PINS);

/// Farbton der Startfarbe (0-255, 0 = Rot)
/// Wird zur Build-Zeit aus LED_HUE geladen
pub const LED_HUE: u8 = match option_env!("LED_HUE") {
    Some(value) => parse_u8(value),
    None => 0,
};

/// Helligkeit der Startfarbe (HSV value, 0-255)
/// Gedimmt für Augenschonung, kann über LED_BRIGHTNESS überschrieben werden
pub const LED_BRIGHTNESS: u8 = match option_env!("LED_BRIGHTNESS") {
    Some(value) => parse_u8(value),
    None => 64,
};

/// PWM-Frequenz der LEDC-Kanäle in kHz
pub const PWM_FREQUENCY_KHZ: u32 = 1;

/// Blink-Intervall in Millisekunden (an und aus jeweils)
pub const BLINK_INTERVAL_MS: u64 = 1000;

// ============================================================================
// Parser für Build-Zeit Variablen
// ============================================================================

const fn parse_polarity(value: &str) -> Polarity {
    match value.as_bytes() {
        b"cathode" => Polarity::CommonCathode,
        b"anode" => Polarity::CommonAnode,
        _ => panic!("LED_POLARITY muss \"cathode\" oder \"anode\" sein"),
    }
}

const fn parse_u8(value: &str) -> u8 {
    match u8::from_str_radix(value, 10) {
        Ok(parsed) => parsed,
        Err(_) => panic!("LED_HUE/LED_BRIGHTNESS müssen im Bereich 0-255 liegen"),
    }
}
