
pub mod almanac;
pub mod ephemeris;
pub mod ionosphere;
pub mod utc_model;
