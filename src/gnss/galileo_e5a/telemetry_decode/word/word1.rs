
use ::serde::{Serialize, Deserialize};

use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

// Galileo OS SIS ICD Issue 1.2, section 4.2.2: page type 1 carries SVID,
// clock correction, SISA, ionospheric correction, BGD, GST and signal health.
// Bit positions are counted from the start of the page, page type included.
const SV_ID:Field       = Field::new(&[(6, 6)]);
const IOD_NAV:Field     = Field::new(&[(12, 10)]);
const T0C:Field         = Field::new(&[(22, 14)]);
const AF0:Field         = Field::new(&[(36, 31)]);
const AF1:Field         = Field::new(&[(67, 21)]);
const AF2:Field         = Field::new(&[(88, 6)]);
const SISA:Field        = Field::new(&[(94, 8)]);
const AI0:Field         = Field::new(&[(102, 11)]);
const AI1:Field         = Field::new(&[(113, 11)]);
const AI2:Field         = Field::new(&[(124, 14)]);
const STORM_FLAGS:Field = Field::new(&[(138, 5)]);
const BGD:Field         = Field::new(&[(143, 10)]);
const E5A_HS:Field      = Field::new(&[(153, 2)]);
const WN:Field          = Field::new(&[(155, 12)]);
const TOW:Field         = Field::new(&[(167, 20)]);
const E5A_DVS:Field     = Field::new(&[(187, 1)]);

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct Body {
	pub sv_id:u8,
	pub iod_nav:u16,
	pub t0c:f64,
	pub af0:f64,
	pub af1:f64,
	pub af2:f64,
	pub sisa:u8,
	pub ai0:f64,
	pub ai1:f64,
	pub ai2:f64,
	pub storm_flags:[bool; 5],
	pub bgd_e1_e5a:f64,
	pub e5a_hs:u8,
	pub wn:u32,
	pub tow:u32,
	pub e5a_dvs:bool,
}

impl Body {

	pub fn decode(frame:&NavFrame) -> Body {
		let sv_id      =  SV_ID.unsigned(frame) as u8;
		let iod_nav    =  IOD_NAV.unsigned(frame) as u16;
		let t0c        = (T0C.unsigned(frame) as f64) * 60.0;
		let af0        = (AF0.signed(frame) as f64) * 2.0_f64.powi(-34);
		let af1        = (AF1.signed(frame) as f64) * 2.0_f64.powi(-46);
		let af2        = (AF2.signed(frame) as f64) * 2.0_f64.powi(-59);
		let sisa       =  SISA.unsigned(frame) as u8;
		let ai0        = (AI0.unsigned(frame) as f64) * 2.0_f64.powi(-2);
		let ai1        = (AI1.signed(frame) as f64) * 2.0_f64.powi(-8);
		let ai2        = (AI2.signed(frame) as f64) * 2.0_f64.powi(-15);
		let storm      =  STORM_FLAGS.unsigned(frame);
		let storm_flags = [storm & 0b10000 != 0, storm & 0b01000 != 0, storm & 0b00100 != 0,
			storm & 0b00010 != 0, storm & 0b00001 != 0];
		let bgd_e1_e5a = (BGD.signed(frame) as f64) * 2.0_f64.powi(-32);
		let e5a_hs     =  E5A_HS.unsigned(frame) as u8;
		let wn         =  WN.unsigned(frame) as u32;
		let tow        =  TOW.unsigned(frame) as u32;
		let e5a_dvs    =  E5A_DVS.unsigned(frame) == 1;
		Body{ sv_id, iod_nav, t0c, af0, af1, af2, sisa, ai0, ai1, ai2, storm_flags, bgd_e1_e5a, e5a_hs, wn, tow, e5a_dvs }
	}

}
