// Hardware Abstraction Layer (HAL) Module
//
// Kapselt die LEDC-Initialisierung. Der Treiber selbst (RgbLed)
// und der PwmWriter-Trait kommen aus led-core.

pub mod led_writer;

pub use led_writer::{LedcInitError, LedcPwmWriter, StatusLed, init_ledc_writer};
