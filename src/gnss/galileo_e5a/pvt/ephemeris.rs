
use std::f64::consts;

use ::serde::{Serialize, Deserialize};

pub const MU:f64 = 3.986004418e14;           // [m^3/s^2] geocentric gravitational constant fixed by the Galileo OS SIS ICD
pub const F:f64 = -4.442807309e-10;          // [sec/root-meter] relativistic clock correction constant, -2*sqrt(MU)/c^2
pub const OMEGA_E:f64 = 7.2921151467e-5;     // [rad/s] mean angular velocity of the Earth (GTRF)

/// Galileo ephemeris and clock correction for one satellite, assembled from
/// F/NAV words 1 through 4 of a single IODnav cycle.  Angles are stored in
/// semicircles as transmitted; times in seconds of the Galileo week.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Ephemeris {
	pub sv_id:u8,        pub iod_nav:u16,
	pub wn:u32,          pub tow:u32,
	pub t0e:f64,         pub sqrt_a:f64,   pub delta_n:f64,  pub m0:f64,
	pub e:f64,           pub omega:f64,    pub omega0:f64,   pub omega_dot:f64,
	pub i0:f64,          pub idot:f64,
	pub cuc:f64,         pub cus:f64,      pub crc:f64,      pub crs:f64,
	pub cic:f64,         pub cis:f64,
	pub t0c:f64,         pub af0:f64,      pub af1:f64,      pub af2:f64,
	pub sisa:u8,         pub bgd_e1_e5a:f64,
	pub e5a_hs:u8,       pub e5a_dvs:bool,
}

impl Ephemeris {

	/// Offset between the SV clock and Galileo System Time, without the
	/// relativistic term (which needs the eccentric anomaly, see pos_and_clock)
	pub fn sv_clock_correction(&self, t:f64) -> f64 {
		self.af0 + self.af1*(t - self.t0c) + self.af2*(t - self.t0c).powi(2)
	}

	/// ECEF position [m] and total SV clock offset [sec] at time-of-week `t`,
	/// evaluated with the standard Keplerian algorithm plus harmonic
	/// corrections (Galileo OS SIS ICD table 58 / IS-GPS-200 table 20-IV;
	/// both systems share the formulation, with different constants)
	pub fn pos_and_clock(&self, t:f64) -> ((f64, f64, f64), f64) {

		let a:f64 = self.sqrt_a.powi(2);
		let n0:f64 = (MU / a.powi(3)).sqrt();
		let tk:f64 = t - self.t0e;
		let n:f64 = n0 + (self.delta_n * consts::PI);

		// Mean anomaly, then eccentric anomaly by Newton-Raphson
		let mk:f64 = (self.m0 * consts::PI) + n*tk;
		let mut ek:f64 = mk;
		for _ in 0..10 {
			ek = ek - (ek - self.e*ek.sin() - mk)/(1.0 - self.e*ek.cos());
		}

		// True anomaly and argument of latitude
		let nu_k:f64 = {
			let y:f64 = ((1.0 - self.e.powi(2)).sqrt() * ek.sin()) / (1.0 - (self.e*ek.cos()));
			let x:f64 = (ek.cos() - self.e) / (1.0 - (self.e*ek.cos()));
			y.atan2(x)
		};
		let phi_k:f64 = nu_k + (self.omega * consts::PI);

		// Second-harmonic corrections to argument of latitude, radius and inclination
		let du_k:f64 = self.cus*(2.0*phi_k).sin() + self.cuc*(2.0*phi_k).cos();
		let dr_k:f64 = self.crs*(2.0*phi_k).sin() + self.crc*(2.0*phi_k).cos();
		let di_k:f64 = self.cis*(2.0*phi_k).sin() + self.cic*(2.0*phi_k).cos();

		let u_k:f64 = phi_k + du_k;
		let r_k:f64 = a*(1.0 - self.e*ek.cos()) + dr_k;
		let i_k:f64 = (self.i0 * consts::PI) + di_k + (self.idot * consts::PI)*tk;

		// Position in the orbital plane, then rotate through the corrected
		// longitude of the ascending node into ECEF
		let x_kp:f64 = r_k * u_k.cos();
		let y_kp:f64 = r_k * u_k.sin();

		let omega_k:f64 = (self.omega0 * consts::PI) + ((self.omega_dot * consts::PI) - OMEGA_E)*tk - OMEGA_E*self.t0e;

		let x_k:f64 = (x_kp * omega_k.cos()) - (y_kp * i_k.cos() * omega_k.sin());
		let y_k:f64 = (x_kp * omega_k.sin()) + (y_kp * i_k.cos() * omega_k.cos());
		let z_k:f64 = y_kp * i_k.sin();

		// Relativistic correction needs the eccentric anomaly, so it lives
		// here rather than in sv_clock_correction
		let dt_r:f64 = F * self.e * self.sqrt_a * ek.sin();

		((x_k, y_k, z_k), self.sv_clock_correction(t) + dt_r)
	}

}
