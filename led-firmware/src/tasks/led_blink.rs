// LED Blink Task - Steuert die RGB LED über LEDC PWM
use defmt::{error, info};
use embassy_time::{Duration, Timer};

use led_core::{PwmWriter, RgbLed};

use crate::config::BLINK_INTERVAL_MS;
use crate::hal::StatusLed;

/// LED Blink Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Schaltet die LED abwechselnd an (`show()`) und aus (`hide()`).
/// Die Farbe wird beim Erstellen des Treibers gesetzt.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: PwmWriter` ermöglicht:
/// - Real Hardware (LedcPwmWriter) im Production-Code
/// - Mock Implementation (MockPwmWriter) in Tests
pub async fn led_blink_logic<W: PwmWriter>(mut led: RgbLed<W>) {
    let interval = Duration::from_millis(BLINK_INTERVAL_MS);
    info!("Blinking {} every {} ms", led.color(), BLINK_INTERVAL_MS);

    loop {
        if let Err(e) = led.show() {
            error!("Failed to show LED color: {}", e);
        }
        Timer::after(interval).await;

        if let Err(e) = led.hide() {
            error!("Failed to hide LED: {}", e);
        }
        Timer::after(interval).await;
    }
}

/// LED Blink Task - Embassy Task für parallele Ausführung
///
/// Der Treiber wird in main() erstellt (LEDC + Pin-Prüfung),
/// der Task übernimmt ihn und ruft `led_blink_logic()` auf.
#[embassy_executor::task]
pub async fn led_blink_task(led: StatusLed) {
    led_blink_logic(led).await;
}
