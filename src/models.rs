use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bulk compressibility of the borosilicate conductivity cell, typical SBE value.
pub const DEFAULT_CPCOR: f64 = -9.57e-8;
/// Thermal coefficient of expansion of the conductivity cell, typical SBE value.
pub const DEFAULT_CTCOR: f64 = 3.25e-6;

fn default_cpcor() -> f64 {
    DEFAULT_CPCOR
}

fn default_ctcor() -> f64 {
    DEFAULT_CTCOR
}

fn unit_slope() -> f64 {
    1.0
}

/// Medium used to convert pressure to depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterType {
    #[serde(rename = "fresh water", alias = "fresh", alias = "fresh_water")]
    FreshWater,
    #[serde(rename = "salt water", alias = "salt", alias = "salt_water")]
    SaltWater,
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterType::FreshWater => f.write_str("fresh water"),
            WaterType::SaltWater => f.write_str("salt water"),
        }
    }
}

impl FromStr for WaterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fresh water" | "fresh_water" | "fresh" => Ok(WaterType::FreshWater),
            "salt water" | "salt_water" | "salt" => Ok(WaterType::SaltWater),
            other => Err(format!("unknown water type '{other}'")),
        }
    }
}

/// Frequency-output (Digiquartz) pressure sensor calibration.
///
/// `m`/`b` convert the raw thermistor reading `pt_comp` into the compensation
/// temperature (AD590M / AD590B on the calibration sheet).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressureCoefficients {
    pub m: f64,
    pub b: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub d1: f64,
    pub d2: f64,
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
    pub t4: f64,
    pub t5: f64,
    #[serde(default = "unit_slope")]
    pub slope: f64,
    #[serde(default)]
    pub offset: f64,
}

/// Frequency-output temperature sensor calibration (ITS-90 g/h/i/j form).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemperatureCoefficients {
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
    pub f0: f64,
}

/// Conductivity cell calibration. `cpcor`/`ctcor` fall back to
/// [`DEFAULT_CPCOR`]/[`DEFAULT_CTCOR`] when absent from a calibration document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConductivityCoefficients {
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
    #[serde(default = "default_cpcor")]
    pub cpcor: f64,
    #[serde(default = "default_ctcor")]
    pub ctcor: f64,
}

impl ConductivityCoefficients {
    /// Cell coefficients with the typical compensation constants.
    pub fn new(g: f64, h: f64, i: f64, j: f64) -> Self {
        Self {
            g,
            h,
            i,
            j,
            cpcor: DEFAULT_CPCOR,
            ctcor: DEFAULT_CTCOR,
        }
    }
}

/// SBE 43 dissolved oxygen calibration.
///
/// `h1`..`h3` are the hysteresis terms printed on the calibration sheet. They
/// are carried for compatibility and are not used by [`crate::oxygen`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OxygenCoefficients {
    pub soc: f64,
    pub v_offset: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub e: f64,
    pub tau20: f64,
    pub d1: f64,
    pub d2: f64,
    #[serde(default)]
    pub h1: f64,
    #[serde(default)]
    pub h2: f64,
    #[serde(default)]
    pub h3: f64,
}

/// Strain-gauge pressure sensor calibration (SBE 19plus V2, A/D counts).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrainGaugeCoefficients {
    pub pa0: f64,
    pub pa1: f64,
    pub pa2: f64,
    pub ptempa0: f64,
    pub ptempa1: f64,
    pub ptempa2: f64,
    pub ptca0: f64,
    pub ptca1: f64,
    pub ptca2: f64,
    pub ptcb0: f64,
    pub ptcb1: f64,
    pub ptcb2: f64,
    #[serde(default)]
    pub offset: f64,
}

/// Thermistor temperature calibration (SBE 19plus V2, A/D counts).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountTemperatureCoefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    #[serde(default = "unit_slope")]
    pub slope: f64,
    #[serde(default)]
    pub offset: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_type_parses_both_spellings() {
        assert_eq!("salt water".parse::<WaterType>(), Ok(WaterType::SaltWater));
        assert_eq!("Fresh_Water".parse::<WaterType>(), Ok(WaterType::FreshWater));
        assert!("brackish".parse::<WaterType>().is_err());
    }

    #[test]
    fn conductivity_compensation_defaults_apply_when_omitted() {
        let c: ConductivityCoefficients =
            serde_json::from_str(r#"{"g": -10.2, "h": 1.25, "i": -0.0023, "j": 0.00022}"#)
                .unwrap();
        assert_eq!(c.cpcor, DEFAULT_CPCOR);
        assert_eq!(c.ctcor, DEFAULT_CTCOR);
    }
}
