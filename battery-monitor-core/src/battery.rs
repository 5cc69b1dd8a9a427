use serde::{Deserialize, Serialize};

use crate::config::BatteryConfig;

/// Battery health, least severe first. derived `Ord` follows severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryStatus {
    Ok,
    Low,
    Critical,
}

/// Convert a raw 12-bit ADC sample to volts against the 3.3V reference.
///
/// Total. out-of-range samples saturate to the reference voltage instead of
/// erroring.
#[inline]
pub fn convert_voltage(adc_value: u16) -> f32 {
    BatteryConfig::DEFAULT.convert_voltage(adc_value)
}

impl BatteryStatus {
    /// Classify a measured voltage against the default thresholds.
    ///
    /// Total over all finite voltages. a negative reading is `Critical` and
    /// anything at or above 3.0V is `Ok`.
    #[inline]
    pub fn check(voltage: f32) -> Self {
        BatteryConfig::DEFAULT.check_health(voltage)
    }
}
