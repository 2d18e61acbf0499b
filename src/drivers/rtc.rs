// Hexabit Pedometer: DS3231 Real-Time Clock Driver
//
// Reads the BCD timekeeping registers over the shared I2C bus. A stopped
// oscillator (the chip lost power since it was last set) is reported as "no
// time" rather than a bogus date.

use crate::events::DateTime;

#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const STATUS: u8 = 0x0F;
    /// Oscillator Stop Flag.
    pub const STATUS_OSF: u8 = 0x80;
}

const HOUR_12H_MODE: u8 = 0x40;
const HOUR_PM: u8 = 0x20;

fn bcd_to_bin(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

/// Decode the seven timekeeping registers (0x00..=0x06). Returns `None` when
/// any field is out of range.
pub fn decode_time(regs: &[u8; 7]) -> Option<DateTime> {
    let second = bcd_to_bin(regs[0] & 0x7F);
    let minute = bcd_to_bin(regs[1] & 0x7F);
    let hour = if regs[2] & HOUR_12H_MODE != 0 {
        let h12 = bcd_to_bin(regs[2] & 0x1F) % 12;
        if regs[2] & HOUR_PM != 0 { h12 + 12 } else { h12 }
    } else {
        bcd_to_bin(regs[2] & 0x3F)
    };
    // regs[3] is the day of week, unused.
    let day = bcd_to_bin(regs[4] & 0x3F);
    let month = bcd_to_bin(regs[5] & 0x1F);
    let year = 2000 + bcd_to_bin(regs[6]) as u16;

    let valid = second < 60
        && minute < 60
        && hour < 24
        && (1..=31).contains(&day)
        && (1..=12).contains(&month);
    valid.then_some(DateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

#[cfg(target_os = "espidf")]
pub use device::Ds3231;

#[cfg(target_os = "espidf")]
mod device {
    use super::{decode_time, reg};
    use crate::config::*;
    use crate::drivers::{lock_bus, SharedBus};
    use crate::events::DateTime;
    use crate::tracker::ClockSource;

    pub struct Ds3231 {
        bus: SharedBus,
    }

    impl Ds3231 {
        pub fn new(bus: SharedBus) -> Self {
            Self { bus }
        }

        pub fn is_connected(&self) -> bool {
            self.read_status().is_ok()
        }

        /// `true` if the oscillator stopped since the time was last set.
        pub fn lost_power(&self) -> anyhow::Result<bool> {
            Ok(self.read_status()? & reg::STATUS_OSF != 0)
        }

        /// Current time, or `None` if the clock is not running.
        pub fn read(&self) -> anyhow::Result<Option<DateTime>> {
            if self.lost_power()? {
                return Ok(None);
            }
            let mut bus = lock_bus(self.bus)?;
            let mut regs = [0u8; 7];
            bus.write_read(I2C_ADDR_DS3231, &[reg::SECONDS], &mut regs, I2C_TIMEOUT_TICKS)?;
            Ok(decode_time(&regs))
        }

        fn read_status(&self) -> anyhow::Result<u8> {
            let mut bus = lock_bus(self.bus)?;
            let mut buf = [0u8; 1];
            bus.write_read(I2C_ADDR_DS3231, &[reg::STATUS], &mut buf, I2C_TIMEOUT_TICKS)?;
            Ok(buf[0])
        }
    }

    impl ClockSource for Ds3231 {
        fn now(&mut self) -> Option<DateTime> {
            match self.read() {
                Ok(time) => time,
                Err(e) => {
                    log::warn!("RTC read error: {}", e);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_24_hour_registers() {
        // 2024-03-07 21:05:09
        let regs = [0x09, 0x05, 0x21, 0x04, 0x07, 0x03, 0x24];
        assert_eq!(
            decode_time(&regs),
            Some(DateTime {
                year: 2024,
                month: 3,
                day: 7,
                hour: 21,
                minute: 5,
                second: 9,
            })
        );
    }

    #[test]
    fn decodes_12_hour_mode() {
        // 12h mode, PM, 09 -> 21; 12 AM -> 0.
        let pm = [0x00, 0x30, 0x40 | 0x20 | 0x09, 0x01, 0x15, 0x06, 0x25];
        assert_eq!(decode_time(&pm).map(|t| t.hour), Some(21));
        let midnight = [0x00, 0x00, 0x40 | 0x12, 0x01, 0x15, 0x06, 0x25];
        assert_eq!(decode_time(&midnight).map(|t| t.hour), Some(0));
    }

    #[test]
    fn century_bit_is_masked_from_month() {
        let regs = [0x00, 0x00, 0x00, 0x01, 0x01, 0x80 | 0x12, 0x99];
        let time = decode_time(&regs).unwrap();
        assert_eq!((time.year, time.month), (2099, 12));
    }

    #[test]
    fn garbage_registers_are_rejected() {
        assert_eq!(decode_time(&[0x00; 7]), None); // day 0, month 0
        assert_eq!(decode_time(&[0x00, 0x00, 0x25, 0x01, 0x01, 0x01, 0x24]), None);
    }
}
