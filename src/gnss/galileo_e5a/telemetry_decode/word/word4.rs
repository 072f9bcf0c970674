
use ::serde::{Serialize, Deserialize};

use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

// Page type 4: ephemeris 3/3, GST-UTC conversion, GST-GPS conversion and TOW
const IOD_NAV:Field     = Field::new(&[(6, 10)]);
const CIC:Field         = Field::new(&[(16, 16)]);
const CIS:Field         = Field::new(&[(32, 16)]);
const A0:Field          = Field::new(&[(48, 32)]);
const A1:Field          = Field::new(&[(80, 24)]);
const DELTA_T_LS:Field  = Field::new(&[(104, 8)]);
const T0T:Field         = Field::new(&[(112, 8)]);
const WN0T:Field        = Field::new(&[(120, 8)]);
const WN_LSF:Field      = Field::new(&[(128, 8)]);
const DN:Field          = Field::new(&[(136, 3)]);
const DELTA_T_LSF:Field = Field::new(&[(139, 8)]);
const T0G:Field         = Field::new(&[(147, 8)]);
const A0G:Field         = Field::new(&[(155, 16)]);
const A1G:Field         = Field::new(&[(171, 12)]);
const WN0G:Field        = Field::new(&[(183, 6)]);
const TOW:Field         = Field::new(&[(189, 20)]);

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct Body {
	pub iod_nav:u16,
	pub cic:f64,         // [rad]
	pub cis:f64,         // [rad]
	pub a0:f64,          // [sec]
	pub a1:f64,          // [sec/sec]
	pub delta_t_ls:i8,   // [sec]
	pub t0t:u32,         // [sec]
	pub wn0t:u8,
	pub wn_lsf:u8,
	pub dn:u8,
	pub delta_t_lsf:i8,  // [sec]
	pub t0g:u32,         // [sec]
	pub a0g:f64,         // [sec]
	pub a1g:f64,         // [sec/sec]
	pub wn0g:u8,
	pub tow:u32,
}

impl Body {

	pub fn decode(frame:&NavFrame) -> Body {
		let iod_nav     =  IOD_NAV.unsigned(frame) as u16;
		let cic         = (CIC.signed(frame) as f64) * 2.0_f64.powi(-29);
		let cis         = (CIS.signed(frame) as f64) * 2.0_f64.powi(-29);
		let a0          = (A0.signed(frame) as f64) * 2.0_f64.powi(-30);
		let a1          = (A1.signed(frame) as f64) * 2.0_f64.powi(-50);
		let delta_t_ls  =  DELTA_T_LS.signed(frame) as i8;
		let t0t         = (T0T.unsigned(frame) as u32) * 3600;
		let wn0t        =  WN0T.unsigned(frame) as u8;
		let wn_lsf      =  WN_LSF.unsigned(frame) as u8;
		let dn          =  DN.unsigned(frame) as u8;
		let delta_t_lsf =  DELTA_T_LSF.signed(frame) as i8;
		let t0g         = (T0G.unsigned(frame) as u32) * 3600;
		let a0g         = (A0G.signed(frame) as f64) * 2.0_f64.powi(-35);
		let a1g         = (A1G.signed(frame) as f64) * 2.0_f64.powi(-51);
		let wn0g        =  WN0G.unsigned(frame) as u8;
		let tow         =  TOW.unsigned(frame) as u32;
		Body{ iod_nav, cic, cis, a0, a1, delta_t_ls, t0t, wn0t, wn_lsf, dn, delta_t_lsf, t0g, a0g, a1g, wn0g, tow }
	}

}
