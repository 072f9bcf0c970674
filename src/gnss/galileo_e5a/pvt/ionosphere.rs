
use ::serde::{Serialize, Deserialize};

/// NeQuick-G broadcast ionospheric correction, F/NAV word 1: the three
/// effective-ionisation-level coefficients plus the five regional ionospheric
/// disturbance flags
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Model {
	pub ai0:f64,                 // [sfu]
	pub ai1:f64,                 // [sfu/deg]
	pub ai2:f64,                 // [sfu/deg^2]
	pub storm_flags:[bool; 5],
}

impl Model {

	/// Effective ionisation level Az [sfu] for a receiver at the given
	/// modified dip latitude [deg], the driver input to the NeQuick-G
	/// electron density model
	pub fn effective_ionisation_level(&self, modip_deg:f64) -> f64 {
		self.ai0 + self.ai1*modip_deg + self.ai2*modip_deg.powi(2)
	}

	/// Whether the broadcast flags declare ionospheric disturbance in the
	/// given region (0-based index over the ICD's regions 1 through 5)
	pub fn is_disturbed(&self, region:usize) -> bool {
		self.storm_flags[region]
	}

}
