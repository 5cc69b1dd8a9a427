//! battery reports for the host link. postcard keeps these tiny.

use serde::{Deserialize, Serialize};

use crate::battery::{BatteryStatus, convert_voltage};
use crate::errors::MonitorResult;
use crate::logging::trace;

/// One battery measurement: the raw sample plus everything derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReport {
    pub adc_value: u16,
    pub voltage: f32,
    pub status: BatteryStatus,
}

impl BatteryReport {
    /// Run the usual pipeline: raw sample -> volts -> health.
    pub fn from_adc(adc_value: u16) -> Self {
        let voltage = convert_voltage(adc_value);
        let status = BatteryStatus::check(voltage);

        trace!("vbat adc {} = {} V", adc_value, voltage);

        Self {
            adc_value,
            voltage,
            status,
        }
    }

    /// Serialize into the caller's buffer. returns the used portion.
    pub fn serialize_into<'a>(&self, buf: &'a mut [u8]) -> MonitorResult<&'a mut [u8]> {
        Ok(postcard::to_slice(self, buf)?)
    }

    pub fn deserialize(data: &[u8]) -> MonitorResult<Self> {
        Ok(postcard::from_bytes(data)?)
    }
}
