//! Serializable transform requests.
//!
//! A request names one transform (the `"transform"` tag) and carries its
//! measurements plus, where the sensor needs one, a `"coefficients"` object:
//!
//! ```json
//! {"transform": "salinity", "conductivity": 2.94953, "temperature": 1.0, "pressure": 1.0}
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    conductivity, coordinates, depth, optics, oxygen, pressure, salinity, sbe19plus,
    sound_velocity, temperature,
};
use crate::error::Result;
use crate::models::{
    ConductivityCoefficients, CountTemperatureCoefficients, OxygenCoefficients,
    PressureCoefficients, StrainGaugeCoefficients, TemperatureCoefficients, WaterType,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "transform", rename_all = "snake_case")]
pub enum Request {
    Depth {
        water_type: WaterType,
        pressure: f64,
        latitude: f64,
    },
    Pressure {
        frequency: f64,
        pt_comp: f64,
        coefficients: PressureCoefficients,
    },
    Temperature {
        frequency: f64,
        coefficients: TemperatureCoefficients,
    },
    Conductivity {
        frequency: f64,
        temperature: f64,
        pressure: f64,
        coefficients: ConductivityCoefficients,
    },
    Salinity {
        conductivity: f64,
        temperature: f64,
        pressure: f64,
    },
    SoundVelocityChenMillero {
        salinity: f64,
        temperature: f64,
        pressure: f64,
    },
    SoundVelocityDelGrosso {
        salinity: f64,
        temperature: f64,
        pressure: f64,
    },
    SoundVelocityWilson {
        salinity: f64,
        temperature: f64,
        pressure: f64,
    },
    OxygenSolubility {
        salinity: f64,
        temperature: f64,
    },
    Oxygen {
        temperature: f64,
        pressure: f64,
        salinity: f64,
        voltage: f64,
        #[serde(default)]
        previous_voltage: Option<f64>,
        coefficients: OxygenCoefficients,
    },
    OptodeOxygen {
        umol_per_l: f64,
    },
    Fluorescence {
        voltage: f64,
        dark_output: f64,
        scale_factor: f64,
    },
    Turbidity {
        voltage: f64,
        dark_output: f64,
        scale_factor: f64,
    },
    AltimeterHeight {
        voltage: f64,
        scale_factor: f64,
        offset: f64,
    },
    StrainGaugePressure {
        counts: f64,
        voltage: f64,
        coefficients: StrainGaugeCoefficients,
    },
    TemperatureFromCounts {
        counts: f64,
        coefficients: CountTemperatureCoefficients,
    },
    Coordinate {
        text: String,
    },
}

/// Outcome of a successful request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub transform: &'static str,
    pub value: f64,
}

impl Request {
    /// Snake-case transform name, as used in the `"transform"` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Request::Depth { .. } => "depth",
            Request::Pressure { .. } => "pressure",
            Request::Temperature { .. } => "temperature",
            Request::Conductivity { .. } => "conductivity",
            Request::Salinity { .. } => "salinity",
            Request::SoundVelocityChenMillero { .. } => "sound_velocity_chen_millero",
            Request::SoundVelocityDelGrosso { .. } => "sound_velocity_del_grosso",
            Request::SoundVelocityWilson { .. } => "sound_velocity_wilson",
            Request::OxygenSolubility { .. } => "oxygen_solubility",
            Request::Oxygen { .. } => "oxygen",
            Request::OptodeOxygen { .. } => "optode_oxygen",
            Request::Fluorescence { .. } => "fluorescence",
            Request::Turbidity { .. } => "turbidity",
            Request::AltimeterHeight { .. } => "altimeter_height",
            Request::StrainGaugePressure { .. } => "strain_gauge_pressure",
            Request::TemperatureFromCounts { .. } => "temperature_from_counts",
            Request::Coordinate { .. } => "coordinate",
        }
    }

    pub fn evaluate(&self) -> Result<Evaluation> {
        let value = match self {
            Request::Depth {
                water_type,
                pressure,
                latitude,
            } => depth::depth(*water_type, *pressure, *latitude)?,
            Request::Pressure {
                frequency,
                pt_comp,
                coefficients,
            } => pressure::pressure(*frequency, *pt_comp, coefficients)?,
            Request::Temperature {
                frequency,
                coefficients,
            } => temperature::temperature(*frequency, coefficients)?,
            Request::Conductivity {
                frequency,
                temperature,
                pressure,
                coefficients,
            } => conductivity::conductivity(*frequency, *temperature, *pressure, coefficients)?,
            Request::Salinity {
                conductivity,
                temperature,
                pressure,
            } => salinity::salinity(*conductivity, *temperature, *pressure)?,
            Request::SoundVelocityChenMillero {
                salinity,
                temperature,
                pressure,
            } => sound_velocity::sound_velocity_chen_millero(*salinity, *temperature, *pressure)?,
            Request::SoundVelocityDelGrosso {
                salinity,
                temperature,
                pressure,
            } => sound_velocity::sound_velocity_del_grosso(*salinity, *temperature, *pressure)?,
            Request::SoundVelocityWilson {
                salinity,
                temperature,
                pressure,
            } => sound_velocity::sound_velocity_wilson(*salinity, *temperature, *pressure)?,
            Request::OxygenSolubility {
                salinity,
                temperature,
            } => oxygen::oxygen_solubility(*salinity, *temperature)?,
            Request::Oxygen {
                temperature,
                pressure,
                salinity,
                voltage,
                previous_voltage,
                coefficients,
            } => oxygen::oxygen(
                *temperature,
                *pressure,
                *salinity,
                *voltage,
                *previous_voltage,
                coefficients,
            )?,
            Request::OptodeOxygen { umol_per_l } => oxygen::umol_per_l_to_ml_per_l(*umol_per_l)?,
            Request::Fluorescence {
                voltage,
                dark_output,
                scale_factor,
            } => optics::fluorescence(*voltage, *dark_output, *scale_factor)?,
            Request::Turbidity {
                voltage,
                dark_output,
                scale_factor,
            } => optics::turbidity(*voltage, *dark_output, *scale_factor)?,
            Request::AltimeterHeight {
                voltage,
                scale_factor,
                offset,
            } => optics::altimeter_height(*voltage, *scale_factor, *offset)?,
            Request::StrainGaugePressure {
                counts,
                voltage,
                coefficients,
            } => sbe19plus::strain_gauge_pressure(*counts, *voltage, coefficients)?,
            Request::TemperatureFromCounts {
                counts,
                coefficients,
            } => sbe19plus::temperature_from_counts(*counts, coefficients)?,
            Request::Coordinate { text } => coordinates::parse_coordinate(text)?,
        };

        Ok(Evaluation {
            transform: self.name(),
            value,
        })
    }
}
