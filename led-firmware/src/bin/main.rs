// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use rgb_pwm_led::config::{LED_CONFIG, LED_PINS, PWM_FREQUENCY_KHZ};
use rgb_pwm_led::hal::init_ledc_writer;
use rgb_pwm_led::tasks::led_blink_task;
use rgb_pwm_led::{RgbLed, start_color};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den LED-Task.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LEDC PWM initialisieren: GPIO4/5/6 müssen zu LED_PINS passen
    let writer = init_ledc_writer(
        peripherals.LEDC,
        LED_PINS,
        peripherals.GPIO4,
        peripherals.GPIO5,
        peripherals.GPIO6,
        PWM_FREQUENCY_KHZ,
    )
    .expect("Failed to initialize LEDC PWM");

    // Treiber erstellen: Pin-Prüfung passiert hier, vor dem ersten show()
    let led = RgbLed::new(writer, LED_CONFIG)
        .expect("Invalid RGB LED configuration")
        .with_hsv(start_color());
    info!("RGB LED {} with color {}", LED_CONFIG.polarity, led.color());

    spawner.spawn(led_blink_task(led)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
