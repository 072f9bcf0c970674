
use ::serde::{Serialize, Deserialize};

pub const SQRT_A_REF:f64 = 5440.588203494;   // [m^1/2] sqrt of the 29600 km reference semi-major axis
pub const I_REF_SEMICIRCLES:f64 = 56.0 / 180.0;  // nominal inclination the broadcast delta is relative to

/// Reduced-precision orbit and clock parameters for one satellite other than
/// (usually) the transmitting one.  Angles in semicircles as transmitted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Sv {
	pub sv_id:u8,
	pub delta_a12:f64,   // [m^1/2] offset from the reference sqrt semi-major axis
	pub e:f64,
	pub omega:f64,       // [semicircles]
	pub delta_i:f64,     // [semicircles] offset from the 56 deg nominal inclination
	pub omega0:f64,      // [semicircles]
	pub omega_dot:f64,   // [semicircles/sec]
	pub m0:f64,          // [semicircles]
	pub af0:f64,         // [sec]
	pub af1:f64,         // [sec/sec]
	pub e5a_hs:u8,
}

impl Sv {

	pub fn sqrt_a(&self) -> f64 { SQRT_A_REF + self.delta_a12 }

	pub fn i0(&self) -> f64 { I_REF_SEMICIRCLES + self.delta_i }

	/// An SVID of zero marks an unused almanac slot
	pub fn is_valid(&self) -> bool { self.sv_id != 0 }

}

/// One F/NAV almanac snapshot: three satellites spread over words 5 and 6,
/// tagged by a shared IODa
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Almanac {
	pub iod_a:u8,
	pub wn_a:u8,         // almanac reference week, modulo 4
	pub t0a:u32,         // [sec] almanac reference time of week
	pub sv1:Sv,
	pub sv2:Sv,
	pub sv3:Sv,
}

#[cfg(test)]
mod tests {

	use super::Sv;

	#[test]
	fn broadcast_deltas_are_relative_to_reference_orbit() {
		let sv = Sv{ sv_id: 11, delta_a12: 2.5, delta_i: 0.01, ..Default::default() };
		assert!((sv.sqrt_a() - 5443.088203494).abs() < 1.0e-9);
		assert!((sv.i0() - (56.0/180.0 + 0.01)).abs() < 1.0e-12);
		assert!(sv.is_valid());
		assert!(!Sv::default().is_valid());
	}

}
