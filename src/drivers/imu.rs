// Hexabit Pedometer: LIS3DH Accelerometer Driver
//
// Register-level driver for the Grove LIS3DHTR over the shared I2C bus.
// Runs at 50 Hz, ±2 g, 12-bit high-resolution output.

use crate::config::ACCEL_SCALE_2G_HR;

// LIS3DH register addresses
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const CTRL_REG4: u8 = 0x23;
    pub const OUT_X_L: u8 = 0x28;
    /// OR into a register address to auto-increment during burst reads.
    pub const AUTO_INCREMENT: u8 = 0x80;

    pub const WHO_AM_I_EXPECTED: u8 = 0x33;
    /// ODR 50 Hz, normal power, X/Y/Z enabled.
    pub const CTRL_REG1_50HZ_XYZ: u8 = 0x47;
    /// Block data update, ±2 g, high resolution.
    pub const CTRL_REG4_BDU_2G_HR: u8 = 0x88;
}

/// Convert one little-endian, left-justified 12-bit output pair to g.
pub fn raw_to_g(lo: u8, hi: u8) -> f32 {
    (i16::from_le_bytes([lo, hi]) >> 4) as f32 / ACCEL_SCALE_2G_HR
}

#[cfg(target_os = "espidf")]
pub use device::Lis3dh;

#[cfg(target_os = "espidf")]
mod device {
    use super::{raw_to_g, reg};
    use crate::config::*;
    use crate::drivers::{lock_bus, SharedBus};
    use crate::tracker::MotionSource;

    pub struct Lis3dh {
        bus: SharedBus,
    }

    impl Lis3dh {
        pub fn new(bus: SharedBus) -> Self {
            Self { bus }
        }

        /// Verify the device is reachable on the I2C bus.
        pub fn is_connected(&self) -> bool {
            let Ok(mut bus) = lock_bus(self.bus) else {
                return false;
            };
            let mut buf = [0u8; 1];
            match bus.write_read(I2C_ADDR_LIS3DH, &[reg::WHO_AM_I], &mut buf, I2C_TIMEOUT_TICKS) {
                Ok(()) => buf[0] == reg::WHO_AM_I_EXPECTED,
                Err(_) => false,
            }
        }

        /// Enable all axes at 50 Hz, ±2 g, high resolution.
        pub fn init(&self) -> anyhow::Result<()> {
            let mut bus = lock_bus(self.bus)?;

            bus.write(
                I2C_ADDR_LIS3DH,
                &[reg::CTRL_REG1, reg::CTRL_REG1_50HZ_XYZ],
                I2C_TIMEOUT_TICKS,
            )?;
            bus.write(
                I2C_ADDR_LIS3DH,
                &[reg::CTRL_REG4, reg::CTRL_REG4_BDU_2G_HR],
                I2C_TIMEOUT_TICKS,
            )?;

            log::info!("LIS3DH initialised (50Hz, ±2g, high resolution)");
            Ok(())
        }

        /// X axis only; the step detector is single-axis.
        pub fn read_x(&self) -> anyhow::Result<f32> {
            let mut bus = lock_bus(self.bus)?;
            let mut raw = [0u8; 2];
            bus.write_read(
                I2C_ADDR_LIS3DH,
                &[reg::OUT_X_L | reg::AUTO_INCREMENT],
                &mut raw,
                I2C_TIMEOUT_TICKS,
            )?;
            Ok(raw_to_g(raw[0], raw[1]))
        }
    }

    impl MotionSource for Lis3dh {
        fn read_axis(&mut self) -> Option<f32> {
            match self.read_x() {
                Ok(x) => Some(x),
                Err(e) => {
                    log::warn!("IMU read error: {}", e);
                    None
                }
            }
        }
    }
}
