pub mod config;
pub mod error;
pub mod params;
pub mod series;

pub use config::{InputLimits, ModelConstants, LIMITS, MODEL};
pub use error::{InputError, ValidationErrors};
pub use params::{Field, PackageParams, RawInputs};
pub use series::decimate;
