// LEDC PWM Writer für die RGB LED
//
// Konfiguriert einen LEDC Low-Speed Timer (8 Bit) und drei Kanäle.
// Die Kanäle werden über `led_core::PwmChannels` als PwmWriter genutzt.

use esp_hal::gpio::{DriveMode, Pin};
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use static_cell::StaticCell;

use led_core::{ConfigError, PinTriple, PwmChannels, RgbLed};

/// PwmWriter über drei LEDC-Kanäle
pub type LedcPwmWriter = PwmChannels<channel::Channel<'static, LowSpeed>>;

/// RGB LED Treiber wie er in der Firmware läuft
pub type StatusLed = RgbLed<LedcPwmWriter>;

/// Fehler bei der LEDC-Initialisierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum LedcInitError {
    /// GPIOs passen nicht zu `pins`
    Wiring(ConfigError),
    Timer,
    Channel,
}

/// Initialisiert LEDC und die drei Kanäle
///
/// Die Ausgänge starten mit Duty 0. Die GPIOs müssen zu `pins` passen,
/// da der Treiber die Kanäle über diese Pin-Nummern anspricht. Weichen
/// sie ab, gibt es `LedcInitError::Wiring` statt stiller Fehlverdrahtung.
///
/// # Parameter
/// - `ledc_peripheral`: LEDC Peripheral
/// - `pins`: Pin-Nummern (rot, grün, blau) aus config.rs
/// - `red`, `green`, `blue`: GPIO Peripherals der drei Farbkanäle
/// - `frequency_khz`: PWM-Frequenz
pub fn init_ledc_writer(
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    pins: PinTriple,
    red: impl PeripheralOutput<'static> + Pin,
    green: impl PeripheralOutput<'static> + Pin,
    blue: impl PeripheralOutput<'static> + Pin,
    frequency_khz: u32,
) -> Result<LedcPwmWriter, LedcInitError> {
    pins.ensure_wired([red.number(), green.number(), blue.number()])
        .map_err(LedcInitError::Wiring)?;

    // Kanäle referenzieren den Timer, daher müssen beide 'static sein
    static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
    static TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

    let ledc = LEDC.init(Ledc::new(ledc_peripheral));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let timer = TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(frequency_khz),
        })
        .map_err(|_| LedcInitError::Timer)?;
    let timer: &'static timer::Timer<'static, LowSpeed> = timer;

    let config = || channel::config::Config {
        timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    };

    let mut red = ledc.channel(channel::Number::Channel0, red);
    red.configure(config()).map_err(|_| LedcInitError::Channel)?;
    let mut green = ledc.channel(channel::Number::Channel1, green);
    green.configure(config()).map_err(|_| LedcInitError::Channel)?;
    let mut blue = ledc.channel(channel::Number::Channel2, blue);
    blue.configure(config()).map_err(|_| LedcInitError::Channel)?;

    Ok(PwmChannels::new(pins, red, green, blue))
}
