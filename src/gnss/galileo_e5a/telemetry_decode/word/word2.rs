
use ::serde::{Serialize, Deserialize};

use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

// Page type 2: ephemeris 1/3 and GST
const IOD_NAV:Field   = Field::new(&[(6, 10)]);
const M0:Field        = Field::new(&[(16, 32)]);
const OMEGA_DOT:Field = Field::new(&[(48, 24)]);
const E:Field         = Field::new(&[(72, 32)]);
const SQRT_A:Field    = Field::new(&[(104, 32)]);
const OMEGA0:Field    = Field::new(&[(136, 32)]);
const IDOT:Field      = Field::new(&[(168, 14)]);
const WN:Field        = Field::new(&[(182, 12)]);
const TOW:Field       = Field::new(&[(194, 20)]);

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct Body {
	pub iod_nav:u16,
	pub m0:f64,          // [semicircles]
	pub omega_dot:f64,   // [semicircles/sec]
	pub e:f64,
	pub sqrt_a:f64,      // [m^1/2]
	pub omega0:f64,      // [semicircles]
	pub idot:f64,        // [semicircles/sec]
	pub wn:u32,
	pub tow:u32,
}

impl Body {

	pub fn decode(frame:&NavFrame) -> Body {
		let iod_nav   =  IOD_NAV.unsigned(frame) as u16;
		let m0        = (M0.signed(frame) as f64) * 2.0_f64.powi(-31);
		let omega_dot = (OMEGA_DOT.signed(frame) as f64) * 2.0_f64.powi(-43);
		let e         = (E.unsigned(frame) as f64) * 2.0_f64.powi(-33);
		let sqrt_a    = (SQRT_A.unsigned(frame) as f64) * 2.0_f64.powi(-19);
		let omega0    = (OMEGA0.signed(frame) as f64) * 2.0_f64.powi(-31);
		let idot      = (IDOT.signed(frame) as f64) * 2.0_f64.powi(-43);
		let wn        =  WN.unsigned(frame) as u32;
		let tow       =  TOW.unsigned(frame) as u32;
		Body{ iod_nav, m0, omega_dot, e, sqrt_a, omega0, idot, wn, tow }
	}

}
