// Hexabit Pedometer: Peripheral Drivers
//
// Register-level drivers over the shared I2C bus. The bus-facing halves only
// exist on the ESP-IDF target; register decoding and the frame buffer are
// plain Rust and build everywhere.

pub mod display;
pub mod imu;
pub mod rtc;
pub mod serial;

#[cfg(target_os = "espidf")]
pub mod button;

/// Thread-safe handle to a shared I2C bus.
#[cfg(target_os = "espidf")]
pub type SharedBus = &'static std::sync::Mutex<esp_idf_hal::i2c::I2cDriver<'static>>;

/// Lock the shared bus, surfacing a poisoned mutex as an error.
#[cfg(target_os = "espidf")]
pub(crate) fn lock_bus(
    bus: SharedBus,
) -> anyhow::Result<std::sync::MutexGuard<'static, esp_idf_hal::i2c::I2cDriver<'static>>> {
    bus.lock()
        .map_err(|_| anyhow::anyhow!("I2C bus mutex poisoned"))
}
