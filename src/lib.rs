pub mod error;
pub mod model;
pub mod parameters;
pub mod params;
pub mod population;
pub mod registry;
pub mod signals;
pub mod types;
pub mod views;
