pub mod adapters;
pub mod equations;
pub mod error;
pub mod models;

pub use crate::equations::conductivity::conductivity;
pub use crate::equations::coordinates::parse_coordinate;
pub use crate::equations::depth::depth;
pub use crate::equations::optics::{altimeter_height, fluorescence, turbidity};
pub use crate::equations::oxygen::{oxygen, oxygen_solubility, umol_per_l_to_ml_per_l};
pub use crate::equations::pressure::pressure;
pub use crate::equations::salinity::{SALINITY_SENTINEL, salinity};
pub use crate::equations::sbe19plus::{
    pressure_psia_to_dbar, strain_gauge_pressure, temperature_from_counts,
};
pub use crate::equations::sound_velocity::{
    sound_velocity_chen_millero, sound_velocity_del_grosso, sound_velocity_wilson,
};
pub use crate::equations::temperature::temperature;
pub use crate::error::{AppError, FailureKind, Result, TransformError};
pub use crate::models::{
    ConductivityCoefficients, CountTemperatureCoefficients, DEFAULT_CPCOR, DEFAULT_CTCOR,
    OxygenCoefficients, PressureCoefficients, StrainGaugeCoefficients, TemperatureCoefficients,
    WaterType,
};
