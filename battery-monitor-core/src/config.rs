use crate::battery::BatteryStatus;

/// full scale count of a 12-bit ADC
pub const MAX_ADC_VALUE: u16 = 4095;
/// volts at full scale
pub const REFERENCE_VOLTAGE: f32 = 3.3;

/// below this the battery should be charged soon
pub const LOW_VOLTAGE_THRESHOLD: f32 = 3.0;
/// below this the battery is about to brown out
pub const CRITICAL_VOLTAGE_THRESHOLD: f32 = 2.5;

/// ADC scaling and health thresholds for one battery rail.
///
/// `DEFAULT` matches our hardware: a 12-bit ADC referenced at 3.3V with the
/// thresholds above. boards with a different reference or divider can build
/// their own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryConfig {
    pub max_adc_value: u16,
    pub reference_voltage: f32,
    pub low_voltage: f32,
    pub critical_voltage: f32,
}

impl BatteryConfig {
    pub const DEFAULT: Self = Self {
        max_adc_value: MAX_ADC_VALUE,
        reference_voltage: REFERENCE_VOLTAGE,
        low_voltage: LOW_VOLTAGE_THRESHOLD,
        critical_voltage: CRITICAL_VOLTAGE_THRESHOLD,
    };

    pub const fn new(
        max_adc_value: u16,
        reference_voltage: f32,
        low_voltage: f32,
        critical_voltage: f32,
    ) -> Self {
        Self {
            max_adc_value,
            reference_voltage,
            low_voltage,
            critical_voltage,
        }
    }

    /// Convert a raw ADC sample to volts.
    ///
    /// Samples above full scale saturate to the reference voltage. the ADC
    /// shouldn't ever hand us one, but if it does it just means "rail".
    #[inline]
    pub fn convert_voltage(&self, adc_value: u16) -> f32 {
        if adc_value > self.max_adc_value {
            return self.reference_voltage;
        }

        (f32::from(adc_value) * self.reference_voltage) / f32::from(self.max_adc_value)
    }

    /// Classify a measured voltage. first match wins.
    ///
    /// Strict `<` on purpose: sitting exactly on a threshold counts as the
    /// less severe state.
    #[inline]
    pub fn check_health(&self, voltage: f32) -> BatteryStatus {
        if voltage < self.critical_voltage {
            return BatteryStatus::Critical;
        }

        if voltage < self.low_voltage {
            return BatteryStatus::Low;
        }

        BatteryStatus::Ok
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_full_scale() {
        // 10-bit ADC on a 5V reference
        let config = BatteryConfig::new(1023, 5.0, 3.6, 3.2);

        assert_eq!(config.convert_voltage(0), 0.0);
        assert_eq!(config.convert_voltage(1023), 5.0);
        assert_eq!(config.convert_voltage(u16::MAX), 5.0);

        let mid = config.convert_voltage(512);
        assert!((mid - 2.5).abs() < 0.01);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = BatteryConfig::new(1023, 5.0, 3.6, 3.2);

        assert_eq!(config.check_health(3.1), BatteryStatus::Critical);
        assert_eq!(config.check_health(3.2), BatteryStatus::Low);
        assert_eq!(config.check_health(3.6), BatteryStatus::Ok);
    }

    #[test]
    fn test_default_matches_constants() {
        let config = BatteryConfig::default();

        assert_eq!(config, BatteryConfig::DEFAULT);
        assert_eq!(config.max_adc_value, MAX_ADC_VALUE);
        assert_eq!(config.reference_voltage, REFERENCE_VOLTAGE);
    }
}
