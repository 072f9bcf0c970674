
use ::serde::{Serialize, Deserialize};

use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

// Page type 6: the second half of almanac SVID2 plus all of SVID3.  The first
// field after IODa is the 12 LSBs of SVID2's Omega0, whose 4 MSBs came on
// word 5.
const IOD_A:Field        = Field::new(&[(6, 4)]);
const OMEGA0_2_LSB:Field = Field::new(&[(10, 12)]);
const OMEGA_DOT_2:Field  = Field::new(&[(22, 11)]);
const M0_2:Field         = Field::new(&[(33, 16)]);
const AF0_2:Field        = Field::new(&[(49, 16)]);
const AF1_2:Field        = Field::new(&[(65, 13)]);
const E5A_HS_2:Field     = Field::new(&[(78, 2)]);
const SV_ID_3:Field      = Field::new(&[(80, 6)]);
const DELTA_A12_3:Field  = Field::new(&[(86, 13)]);
const E_3:Field          = Field::new(&[(99, 11)]);
const OMEGA_3:Field      = Field::new(&[(110, 16)]);
const DELTA_I_3:Field    = Field::new(&[(126, 11)]);
const OMEGA0_3:Field     = Field::new(&[(137, 16)]);
const OMEGA_DOT_3:Field  = Field::new(&[(153, 11)]);
const M0_3:Field         = Field::new(&[(164, 16)]);
const AF0_3:Field        = Field::new(&[(180, 16)]);
const AF1_3:Field        = Field::new(&[(196, 13)]);
const E5A_HS_3:Field     = Field::new(&[(209, 2)]);

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct Body {
	pub iod_a:u8,
	pub omega0_2_lsb:u16,  // raw 12 LSBs of the field started on word 5
	pub omega_dot_2:f64,   // [semicircles/sec]
	pub m0_2:f64,          // [semicircles]
	pub af0_2:f64,         // [sec]
	pub af1_2:f64,         // [sec/sec]
	pub e5a_hs_2:u8,
	pub sv_id_3:u8,
	pub delta_a12_3:f64,   // [m^1/2]
	pub e_3:f64,
	pub omega_3:f64,       // [semicircles]
	pub delta_i_3:f64,     // [semicircles]
	pub omega0_3:f64,      // [semicircles]
	pub omega_dot_3:f64,   // [semicircles/sec]
	pub m0_3:f64,          // [semicircles]
	pub af0_3:f64,         // [sec]
	pub af1_3:f64,         // [sec/sec]
	pub e5a_hs_3:u8,
}

impl Body {

	pub fn decode(frame:&NavFrame) -> Body {
		let iod_a        =  IOD_A.unsigned(frame) as u8;
		let omega0_2_lsb =  OMEGA0_2_LSB.unsigned(frame) as u16;
		let omega_dot_2  = (OMEGA_DOT_2.signed(frame) as f64) * 2.0_f64.powi(-33);
		let m0_2         = (M0_2.signed(frame) as f64) * 2.0_f64.powi(-15);
		let af0_2        = (AF0_2.signed(frame) as f64) * 2.0_f64.powi(-19);
		let af1_2        = (AF1_2.signed(frame) as f64) * 2.0_f64.powi(-38);
		let e5a_hs_2     =  E5A_HS_2.unsigned(frame) as u8;
		let sv_id_3      =  SV_ID_3.unsigned(frame) as u8;
		let delta_a12_3  = (DELTA_A12_3.signed(frame) as f64) * 2.0_f64.powi(-9);
		let e_3          = (E_3.unsigned(frame) as f64) * 2.0_f64.powi(-16);
		let omega_3      = (OMEGA_3.signed(frame) as f64) * 2.0_f64.powi(-15);
		let delta_i_3    = (DELTA_I_3.signed(frame) as f64) * 2.0_f64.powi(-14);
		let omega0_3     = (OMEGA0_3.signed(frame) as f64) * 2.0_f64.powi(-15);
		let omega_dot_3  = (OMEGA_DOT_3.signed(frame) as f64) * 2.0_f64.powi(-33);
		let m0_3         = (M0_3.signed(frame) as f64) * 2.0_f64.powi(-15);
		let af0_3        = (AF0_3.signed(frame) as f64) * 2.0_f64.powi(-19);
		let af1_3        = (AF1_3.signed(frame) as f64) * 2.0_f64.powi(-38);
		let e5a_hs_3     =  E5A_HS_3.unsigned(frame) as u8;
		Body{ iod_a, omega0_2_lsb, omega_dot_2, m0_2, af0_2, af1_2, e5a_hs_2, sv_id_3,
			delta_a12_3, e_3, omega_3, delta_i_3, omega0_3, omega_dot_3, m0_3, af0_3,
			af1_3, e5a_hs_3 }
	}

}
