// Hexabit Pedometer: Hardware & System Configuration
// Target: Seeed Studio Xiao ESP32-C3 (RISC-V)

use crate::events::RedrawPolicy;

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_LIS3DH: u8 = 0x19;  // LIS3DHTR with SDO pulled high
pub const I2C_ADDR_DS3231: u8 = 0x68;
pub const I2C_ADDR_OLED: u8 = 0x3C;
pub const I2C_BAUDRATE_KHZ: u32 = 400;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks

// ---------------------------------------------------------------------------
// Display (SSD1306 OLED)
// ---------------------------------------------------------------------------
pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;
pub const DISPLAY_BUFFER_SIZE: usize = (SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize) / 8; // 1024

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const TICK_INTERVAL_MS: u64 = 100;      // one polling-loop iteration
pub const DEBOUNCE_MS: u64 = 50;            // button settle window
pub const SENSOR_STARTUP_MS: u64 = 100;     // LIS3DH turn-on time before first read
pub const BOOT_TEXT_DISPLAY_MS: u64 = 1000; // About splash duration

// ---------------------------------------------------------------------------
// Step detection
// ---------------------------------------------------------------------------
/// Half-width of the neutral band, in g.
pub const STEP_THRESHOLD_G: f32 = 0.5;

// ---------------------------------------------------------------------------
// Fitness metrics
// ---------------------------------------------------------------------------
pub const CALORIES_PER_STEP: f32 = 0.04;
pub const STEP_DISTANCE_M: f32 = 0.70104;  // 2.3 ft average stride
pub const METERS_PER_KM: f32 = 1000.0;
pub const METERS_PER_MILE: f32 = 1609.0;

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------
pub const MENU_LEN_BASIC: usize = 5;
pub const MENU_LEN_WEATHER: usize = 6;

// ---------------------------------------------------------------------------
// LIS3DH Sensor Scale Factors
// ---------------------------------------------------------------------------
pub const ACCEL_SCALE_2G_HR: f32 = 1000.0; // LSB/g at ±2 g, 12-bit high-resolution

/// Runtime knobs for the polling loop. `Default` follows the cargo features
/// the firmware was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Neutral band half-width in g.
    pub threshold_g: f32,
    pub calorie_per_step: f32,
    /// Average stride length in meters.
    pub step_distance_m: f32,
    /// Number of active menu entries (5 or 6).
    pub menu_len: usize,
    pub redraw: RedrawPolicy,
    /// Print the clock as `09:05` instead of `9:5`.
    pub zero_pad_time: bool,
    /// Time a changed button level must be held before it is accepted.
    /// Zero trusts the tick cadence alone; so does any window shorter than
    /// one tick, since the button is only sampled once per tick.
    pub debounce_ms: u64,
    pub tick_interval_ms: u64,
}

impl TrackerConfig {
    /// Settle window actually applied by the polling loop.
    pub fn effective_debounce_ms(&self) -> u64 {
        if self.debounce_ms < self.tick_interval_ms {
            0
        } else {
            self.debounce_ms
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let weather = cfg!(feature = "weather-menu");
        Self {
            threshold_g: STEP_THRESHOLD_G,
            calorie_per_step: CALORIES_PER_STEP,
            step_distance_m: STEP_DISTANCE_M,
            menu_len: if weather { MENU_LEN_WEATHER } else { MENU_LEN_BASIC },
            redraw: if cfg!(feature = "continuous-redraw") {
                RedrawPolicy::EveryTick
            } else {
                RedrawPolicy::OnChange
            },
            zero_pad_time: weather,
            debounce_ms: DEBOUNCE_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}
