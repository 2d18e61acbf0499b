// Hexabit Pedometer: Firmware Entry Point
//
// Boot sequence:
//   1. Bring up the shared I2C bus and the menu button.
//   2. Initialise the LIS3DH, DS3231 and (if fitted) the SSD1306 panel.
//      Missing peripherals are logged; the loop runs with what is present.
//   3. Show the About splash for one second.
//   4. Enter the polling loop, which never returns.
//
// Built for the host, the same loop runs against a simulated walk so the menu
// and step logic can be watched on a terminal.

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    use esp_idf_hal::gpio::{InputPin, PinDriver};
    use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_hal::prelude::*;

    use hexabit::config::*;
    use hexabit::drivers::button::Button;
    use hexabit::drivers::display::OledDisplay;
    use hexabit::drivers::imu::Lis3dh;
    use hexabit::drivers::rtc::Ds3231;
    use hexabit::drivers::serial::SerialSink;
    use hexabit::drivers::SharedBus;
    use hexabit::screen::ABOUT_LINES;
    use hexabit::Tracker;

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("Hexabit pedometer starting...");

    let config = TrackerConfig::default();

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // Button on D1 (GPIO3), external pull-up, active LOW.
    let button = PinDriver::input(peripherals.pins.gpio3.downgrade_input())?;

    // ---- I2C bus (shared between LIS3DH, DS3231 and OLED) -----------------
    let i2c_config = I2cConfig::new().baudrate(I2C_BAUDRATE_KHZ.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio6, // SDA
        peripherals.pins.gpio7, // SCL
        &i2c_config,
    )?;
    // The bus lives for the whole programme (embedded firmware never exits).
    let i2c_bus: SharedBus = Box::leak(Box::new(Mutex::new(i2c)));

    // ---- Devices ----------------------------------------------------------
    let imu = Lis3dh::new(i2c_bus);
    if !imu.is_connected() {
        log::error!("LIS3DH not found at 0x{:02X}", I2C_ADDR_LIS3DH);
    }
    if let Err(e) = imu.init() {
        log::error!("LIS3DH init failed: {}", e);
    }
    thread::sleep(Duration::from_millis(SENSOR_STARTUP_MS));

    let rtc = Ds3231::new(i2c_bus);
    if !rtc.is_connected() {
        log::error!("DS3231 not found at 0x{:02X}", I2C_ADDR_DS3231);
    } else if let Ok(true) = rtc.lost_power() {
        log::warn!("RTC lost power, time unavailable until it is set");
    }

    let mut panel = OledDisplay::new(i2c_bus, config.zero_pad_time);
    if !panel.is_connected() {
        log::error!("SSD1306 not found at 0x{:02X}", I2C_ADDR_OLED);
    }
    let mut oled = match panel.init() {
        Ok(()) => Some(panel),
        Err(e) => {
            log::error!("SSD1306 init failed, serial output only: {}", e);
            None
        }
    };

    // ---- About splash -----------------------------------------------------
    let mut serial = SerialSink::stdout(config.zero_pad_time);
    serial.print_lines(&ABOUT_LINES)?;
    if let Some(panel) = oled.as_mut() {
        if let Err(e) = panel.show_lines(&ABOUT_LINES) {
            log::error!("Display error: {}", e);
        }
    }
    thread::sleep(Duration::from_millis(BOOT_TEXT_DISPLAY_MS));

    log::info!("Boot complete, entering normal operation");
    let mut tracker = Tracker::new(config, imu, Button::new(button), rtc, (serial, oled));
    tracker.run()
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use hexabit::drivers::serial::SerialSink;
    use hexabit::screen::ABOUT_LINES;
    use hexabit::{ButtonInput, ClockSource, DateTime, MotionSource, Tracker, TrackerConfig};

    /// Sine-ish arm swing at roughly two steps per second.
    struct SimulatedWalk {
        tick: u32,
    }

    impl MotionSource for SimulatedWalk {
        fn read_axis(&mut self) -> Option<f32> {
            self.tick += 1;
            Some((self.tick as f32 * core::f32::consts::PI / 5.0).sin() * 0.8)
        }
    }

    /// Presses the button for two ticks every five seconds.
    struct ScriptedButton {
        tick: u32,
    }

    impl ButtonInput for ScriptedButton {
        fn is_pressed(&mut self) -> bool {
            self.tick += 1;
            self.tick % 50 < 2
        }
    }

    struct FixedClock;

    impl ClockSource for FixedClock {
        fn now(&mut self) -> Option<DateTime> {
            Some(DateTime {
                year: 2024,
                month: 1,
                day: 1,
                hour: 8,
                minute: 30,
                second: 0,
            })
        }
    }

    // RUST_LOG=info shows the mode changes, RUST_LOG=debug every step.
    env_logger::init();

    let config = TrackerConfig::default();
    let mut serial = SerialSink::stdout(config.zero_pad_time);
    serial.print_lines(&ABOUT_LINES)?;

    let mut tracker = Tracker::new(
        config,
        SimulatedWalk { tick: 0 },
        ScriptedButton { tick: 0 },
        FixedClock,
        serial,
    );
    tracker.run()
}
