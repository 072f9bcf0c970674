
use ::serde::{Serialize, Deserialize};

use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

// Page type 3: ephemeris 2/3 and GST
const IOD_NAV:Field = Field::new(&[(6, 10)]);
const I0:Field      = Field::new(&[(16, 32)]);
const OMEGA:Field   = Field::new(&[(48, 32)]);
const DELTA_N:Field = Field::new(&[(80, 16)]);
const CUC:Field     = Field::new(&[(96, 16)]);
const CUS:Field     = Field::new(&[(112, 16)]);
const CRC:Field     = Field::new(&[(128, 16)]);
const CRS:Field     = Field::new(&[(144, 16)]);
const T0E:Field     = Field::new(&[(160, 14)]);
const WN:Field      = Field::new(&[(174, 12)]);
const TOW:Field     = Field::new(&[(186, 20)]);

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct Body {
	pub iod_nav:u16,
	pub i0:f64,       // [semicircles]
	pub omega:f64,    // [semicircles]
	pub delta_n:f64,  // [semicircles/sec]
	pub cuc:f64,      // [rad]
	pub cus:f64,      // [rad]
	pub crc:f64,      // [m]
	pub crs:f64,      // [m]
	pub t0e:f64,      // [sec]
	pub wn:u32,
	pub tow:u32,
}

impl Body {

	pub fn decode(frame:&NavFrame) -> Body {
		let iod_nav =  IOD_NAV.unsigned(frame) as u16;
		let i0      = (I0.signed(frame) as f64) * 2.0_f64.powi(-31);
		let omega   = (OMEGA.signed(frame) as f64) * 2.0_f64.powi(-31);
		let delta_n = (DELTA_N.signed(frame) as f64) * 2.0_f64.powi(-43);
		let cuc     = (CUC.signed(frame) as f64) * 2.0_f64.powi(-29);
		let cus     = (CUS.signed(frame) as f64) * 2.0_f64.powi(-29);
		let crc     = (CRC.signed(frame) as f64) * 2.0_f64.powi(-5);
		let crs     = (CRS.signed(frame) as f64) * 2.0_f64.powi(-5);
		let t0e     = (T0E.unsigned(frame) as f64) * 60.0;
		let wn      =  WN.unsigned(frame) as u32;
		let tow     =  TOW.unsigned(frame) as u32;
		Body{ iod_nav, i0, omega, delta_n, cuc, cus, crc, crs, t0e, wn, tow }
	}

}
