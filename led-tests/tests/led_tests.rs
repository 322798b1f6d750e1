//! Integration Tests für LED Logic
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockPwmWriter

use embedded_hal::pwm::{ErrorKind, ErrorType, SetDutyCycle};
use led_core::{
    Channel, ConfigError, HsvColor, LedConfig, LedError, PinId, PinTriple, Polarity, PwmChannels,
    PwmWriter, RgbColor, RgbLed, hsv_to_rgb,
};
use rgb::RGB8;

// ============================================================================
// Mock PWM Writer
// ============================================================================

/// Pins 3, 5, 6, 9, 10, 11 wie beim Arduino Uno
const PWM_PINS: [PinId; 6] = [3, 5, 6, 9, 10, 11];

#[derive(Default)]
pub struct MockPwmWriter {
    pub writes: Vec<(PinId, u8)>,
    pub fail_next_write: bool,
}

impl MockPwmWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PwmWriter for MockPwmWriter {
    fn supports_pwm(&self, pin: PinId) -> bool {
        PWM_PINS.contains(&pin)
    }

    fn write(&mut self, pin: PinId, duty: u8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.writes.push((pin, duty));
        Ok(())
    }
}

const PINS: PinTriple = PinTriple::checked::<9, 10, 11>();

fn cathode_led() -> RgbLed<MockPwmWriter> {
    RgbLed::new(
        MockPwmWriter::new(),
        LedConfig::new(Polarity::CommonCathode, PINS),
    )
    .unwrap()
}

fn anode_led() -> RgbLed<MockPwmWriter> {
    RgbLed::new(
        MockPwmWriter::new(),
        LedConfig::new(Polarity::CommonAnode, PINS),
    )
    .unwrap()
}

// ============================================================================
// Tests: hsv_to_rgb()
// ============================================================================

#[test]
fn test_hsv_to_rgb_achromatic_for_every_value() {
    for h in 0..=u8::MAX {
        for v in [0, 1, 127, 128, 254, 255] {
            assert_eq!(hsv_to_rgb(HsvColor::new(h, 0, v)), RgbColor::new(v, v, v));
        }
    }
}

#[test]
fn test_hsv_to_rgb_is_deterministic() {
    for h in 0..=u8::MAX {
        let hsv = HsvColor::new(h, 200, 180);
        assert_eq!(hsv_to_rgb(hsv), hsv_to_rgb(hsv));
        assert_eq!(hsv.to_rgb(), hsv_to_rgb(hsv));
    }
}

#[test]
fn test_hsv_to_rgb_primary_colors() {
    assert_eq!(hsv_to_rgb(HsvColor::new(0, 255, 255)), RgbColor::RED);
    assert_eq!(
        hsv_to_rgb(HsvColor::new(85, 255, 255)),
        RgbColor::new(3, 255, 0)
    );
    assert_eq!(
        hsv_to_rgb(HsvColor::new(170, 255, 255)),
        RgbColor::new(0, 9, 255)
    );
}

#[test]
fn test_hsv_to_rgb_section_starts() {
    // Offset 0 im Abschnitt: t = 0, q = 254
    assert_eq!(hsv_to_rgb(HsvColor::from_hue(43)), RgbColor::new(254, 255, 0));
    assert_eq!(hsv_to_rgb(HsvColor::from_hue(86)), RgbColor::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(HsvColor::from_hue(129)), RgbColor::new(0, 254, 255));
    assert_eq!(hsv_to_rgb(HsvColor::from_hue(172)), RgbColor::new(0, 0, 255));
    assert_eq!(hsv_to_rgb(HsvColor::from_hue(215)), RgbColor::new(255, 0, 254));
}

#[test]
fn test_hsv_to_rgb_dim_value() {
    // p = 100 * (255 - 128) >> 8 = 49
    let rgb = hsv_to_rgb(HsvColor::new(0, 128, 100));
    assert_eq!(rgb.r, 100);
    assert_eq!(rgb.b, 49);
}

#[test]
fn test_hsv_default_is_white() {
    assert_eq!(hsv_to_rgb(HsvColor::default()), RgbColor::WHITE);
}

#[test]
fn test_rgb8_interop() {
    let hsv_red: RGB8 = HsvColor::from_hue(0).to_rgb().into();
    assert_eq!(hsv_red, RGB8 { r: 255, g: 0, b: 0 });

    let mut led = cathode_led().with_color(RgbColor::from(RGB8 { r: 10, g: 20, b: 30 }));
    led.show().unwrap();
    assert_eq!(led.color(), RgbColor::new(10, 20, 30));
    assert_eq!(led.release().writes, vec![(9, 10), (10, 20), (11, 30)]);
}

// ============================================================================
// Tests: RgbLed show()/hide()
// ============================================================================

#[test]
fn test_show_common_cathode_writes_each_channel() {
    let mut led = cathode_led();
    led.set_color(RgbColor::new(10, 20, 30));
    led.show().unwrap();

    assert_eq!(led.release().writes, vec![(9, 10), (10, 20), (11, 30)]);
}

#[test]
fn test_show_common_anode_inverts() {
    let mut led = anode_led();
    led.set_color(RgbColor::new(10, 20, 30));
    led.show().unwrap();

    assert_eq!(led.release().writes, vec![(9, 245), (10, 235), (11, 225)]);
}

#[test]
fn test_blue_pin_gets_blue_value() {
    let mut led = cathode_led().with_rgb(0, 77, 200);
    led.show().unwrap();

    let writes = led.release().writes;
    assert_eq!(writes[2], (11, 200));
}

#[test]
fn test_set_color_has_no_side_effect() {
    let mut led = cathode_led();
    led.set_color(RgbColor::new(1, 2, 3));
    led.set_hsv(HsvColor::from_hue(100));

    assert!(led.release().writes.is_empty());
}

#[test]
fn test_hide_ignores_color() {
    let mut cathode = cathode_led().with_color(RgbColor::new(10, 20, 30));
    cathode.hide().unwrap();
    assert_eq!(cathode.release().writes, vec![(9, 0), (10, 0), (11, 0)]);

    let mut anode = anode_led().with_color(RgbColor::BLACK);
    anode.hide().unwrap();
    assert_eq!(anode.release().writes, vec![(9, 255), (10, 255), (11, 255)]);
}

#[test]
fn test_show_and_hide_are_idempotent() {
    let mut led = anode_led().with_rgb(10, 20, 30);
    led.show().unwrap();
    led.show().unwrap();
    led.hide().unwrap();
    led.hide().unwrap();

    let writes = led.release().writes;
    assert_eq!(writes[0..3], writes[3..6]);
    assert_eq!(writes[6..9], writes[9..12]);
}

#[test]
fn test_initial_colors() {
    assert_eq!(cathode_led().color(), RgbColor::WHITE);
    assert_eq!(
        cathode_led().with_hsv(HsvColor::from_hue(0)).color(),
        RgbColor::RED
    );
    assert_eq!(
        cathode_led().with_rgb(1, 2, 3).color(),
        RgbColor::new(1, 2, 3)
    );
}

#[test]
fn test_show_propagates_write_failure() {
    let mut mock = MockPwmWriter::new();
    mock.fail_next_write = true;
    let mut led = RgbLed::new(&mut mock, LedConfig::new(Polarity::CommonCathode, PINS)).unwrap();

    // First show fails on the red channel
    assert_eq!(led.show(), Err(LedError::WriteFailed));

    // Second show succeeds
    assert_eq!(led.show(), Ok(()));
    assert_eq!(mock.writes, vec![(9, 255), (10, 255), (11, 255)]);
}

// ============================================================================
// Tests: Konfiguration
// ============================================================================

#[test]
fn test_duplicate_pins_rejected() {
    assert_eq!(
        PinTriple::new(9, 10, 9),
        Err(ConfigError::DuplicatePin { pin: 9 })
    );
}

#[test]
fn test_driver_rejects_pin_without_pwm() {
    let pins = PinTriple::new(9, 4, 11).unwrap();
    let result = RgbLed::new(
        MockPwmWriter::new(),
        LedConfig::new(Polarity::CommonAnode, pins),
    );

    assert!(matches!(
        result,
        Err(ConfigError::PinWithoutPwm {
            channel: Channel::Green,
            pin: 4
        })
    ));
}

#[test]
fn test_wired_pins_must_match_config() {
    assert_eq!(PINS.ensure_wired([9, 10, 11]), Ok(()));

    let err = PINS.ensure_wired([9, 10, 12]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::PinMismatch {
            channel: Channel::Blue,
            expected: 11,
            actual: 12
        }
    );
    assert_eq!(
        err.to_string(),
        "blue channel is configured for pin 11 but wired to pin 12"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::PinWithoutPwm {
        channel: Channel::Red,
        pin: 2,
    };
    assert_eq!(err.to_string(), "red pin 2 does not support PWM");
    assert_eq!(
        ConfigError::DuplicatePin { pin: 7 }.to_string(),
        "pin 7 is assigned to more than one color channel"
    );
}

// ============================================================================
// Tests: PwmChannels (embedded-hal Adapter)
// ============================================================================

/// SetDutyCycle Mock mit einstellbarer Auflösung
pub struct MockDutyCycle {
    pub max: u16,
    pub duty: Option<u16>,
    pub fail: bool,
}

impl MockDutyCycle {
    fn with_max(max: u16) -> Self {
        Self {
            max,
            duty: None,
            fail: false,
        }
    }
}

impl ErrorType for MockDutyCycle {
    type Error = ErrorKind;
}

impl SetDutyCycle for MockDutyCycle {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.duty = Some(duty);
        Ok(())
    }
}

#[test]
fn test_pwm_channels_8bit_passthrough() {
    let channels = PwmChannels::new(
        PINS,
        MockDutyCycle::with_max(255),
        MockDutyCycle::with_max(255),
        MockDutyCycle::with_max(255),
    );
    let mut led = RgbLed::new(channels, LedConfig::new(Polarity::CommonAnode, PINS))
        .unwrap()
        .with_rgb(10, 20, 30);
    led.show().unwrap();

    let [r, g, b] = led.release().into_inner();
    assert_eq!((r.duty, g.duty, b.duty), (Some(245), Some(235), Some(225)));
}

#[test]
fn test_pwm_channels_scales_to_resolution() {
    let mut channels = PwmChannels::new(
        PINS,
        MockDutyCycle::with_max(1023),
        MockDutyCycle::with_max(1023),
        MockDutyCycle::with_max(1023),
    );
    channels.write(9, 255).unwrap();
    channels.write(10, 0).unwrap();

    let [r, g, b] = channels.into_inner();
    assert_eq!(r.duty, Some(1023));
    assert_eq!(g.duty, Some(0));
    assert_eq!(b.duty, None);
}

#[test]
fn test_pwm_channels_only_knows_its_pins() {
    let mut channels = PwmChannels::new(
        PINS,
        MockDutyCycle::with_max(255),
        MockDutyCycle::with_max(255),
        MockDutyCycle::with_max(255),
    );

    assert!(channels.supports_pwm(10));
    assert!(!channels.supports_pwm(3));
    assert_eq!(channels.write(3, 10), Err(LedError::WriteFailed));
}

#[test]
fn test_pwm_channels_maps_hardware_error() {
    let mut blue = MockDutyCycle::with_max(255);
    blue.fail = true;
    let channels = PwmChannels::new(
        PINS,
        MockDutyCycle::with_max(255),
        MockDutyCycle::with_max(255),
        blue,
    );
    let mut led = RgbLed::new(channels, LedConfig::new(Polarity::CommonCathode, PINS)).unwrap();

    assert_eq!(led.hide(), Err(LedError::WriteFailed));
}
