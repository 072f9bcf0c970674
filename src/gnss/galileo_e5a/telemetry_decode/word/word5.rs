
use ::serde::{Serialize, Deserialize};

use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

// Page type 5: almanac for SVID1 plus the first half of SVID2, with the
// almanac reference week and time.  SVID2's Omega0 starts here but finishes
// in word 6, so only its 4 MSBs exist on this page and they stay raw until
// the other half arrives.
const IOD_A:Field        = Field::new(&[(6, 4)]);
const WN_A:Field         = Field::new(&[(10, 2)]);
const T0A:Field          = Field::new(&[(12, 10)]);
const SV_ID_1:Field      = Field::new(&[(22, 6)]);
const DELTA_A12_1:Field  = Field::new(&[(28, 13)]);
const E_1:Field          = Field::new(&[(41, 11)]);
const OMEGA_1:Field      = Field::new(&[(52, 16)]);
const DELTA_I_1:Field    = Field::new(&[(68, 11)]);
const OMEGA0_1:Field     = Field::new(&[(79, 16)]);
const OMEGA_DOT_1:Field  = Field::new(&[(95, 11)]);
const M0_1:Field         = Field::new(&[(106, 16)]);
const AF0_1:Field        = Field::new(&[(122, 16)]);
const AF1_1:Field        = Field::new(&[(138, 13)]);
const E5A_HS_1:Field     = Field::new(&[(151, 2)]);
const SV_ID_2:Field      = Field::new(&[(153, 6)]);
const DELTA_A12_2:Field  = Field::new(&[(159, 13)]);
const E_2:Field          = Field::new(&[(172, 11)]);
const OMEGA_2:Field      = Field::new(&[(183, 16)]);
const DELTA_I_2:Field    = Field::new(&[(199, 11)]);
const OMEGA0_2_MSB:Field = Field::new(&[(210, 4)]);

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
pub struct Body {
	pub iod_a:u8,
	pub wn_a:u8,
	pub t0a:u32,           // [sec]
	pub sv_id_1:u8,
	pub delta_a12_1:f64,   // [m^1/2]
	pub e_1:f64,
	pub omega_1:f64,       // [semicircles]
	pub delta_i_1:f64,     // [semicircles]
	pub omega0_1:f64,      // [semicircles]
	pub omega_dot_1:f64,   // [semicircles/sec]
	pub m0_1:f64,          // [semicircles]
	pub af0_1:f64,         // [sec]
	pub af1_1:f64,         // [sec/sec]
	pub e5a_hs_1:u8,
	pub sv_id_2:u8,
	pub delta_a12_2:f64,   // [m^1/2]
	pub e_2:f64,
	pub omega_2:f64,       // [semicircles]
	pub delta_i_2:f64,     // [semicircles]
	pub omega0_2_msb:u8,   // raw 4 MSBs of a 16-bit field finished in word 6
}

impl Body {

	pub fn decode(frame:&NavFrame) -> Body {
		let iod_a        =  IOD_A.unsigned(frame) as u8;
		let wn_a         =  WN_A.unsigned(frame) as u8;
		let t0a          = (T0A.unsigned(frame) as u32) * 600;
		let sv_id_1      =  SV_ID_1.unsigned(frame) as u8;
		let delta_a12_1  = (DELTA_A12_1.signed(frame) as f64) * 2.0_f64.powi(-9);
		let e_1          = (E_1.unsigned(frame) as f64) * 2.0_f64.powi(-16);
		let omega_1      = (OMEGA_1.signed(frame) as f64) * 2.0_f64.powi(-15);
		let delta_i_1    = (DELTA_I_1.signed(frame) as f64) * 2.0_f64.powi(-14);
		let omega0_1     = (OMEGA0_1.signed(frame) as f64) * 2.0_f64.powi(-15);
		let omega_dot_1  = (OMEGA_DOT_1.signed(frame) as f64) * 2.0_f64.powi(-33);
		let m0_1         = (M0_1.signed(frame) as f64) * 2.0_f64.powi(-15);
		let af0_1        = (AF0_1.signed(frame) as f64) * 2.0_f64.powi(-19);
		let af1_1        = (AF1_1.signed(frame) as f64) * 2.0_f64.powi(-38);
		let e5a_hs_1     =  E5A_HS_1.unsigned(frame) as u8;
		let sv_id_2      =  SV_ID_2.unsigned(frame) as u8;
		let delta_a12_2  = (DELTA_A12_2.signed(frame) as f64) * 2.0_f64.powi(-9);
		let e_2          = (E_2.unsigned(frame) as f64) * 2.0_f64.powi(-16);
		let omega_2      = (OMEGA_2.signed(frame) as f64) * 2.0_f64.powi(-15);
		let delta_i_2    = (DELTA_I_2.signed(frame) as f64) * 2.0_f64.powi(-14);
		let omega0_2_msb =  OMEGA0_2_MSB.unsigned(frame) as u8;
		Body{ iod_a, wn_a, t0a, sv_id_1, delta_a12_1, e_1, omega_1, delta_i_1, omega0_1,
			omega_dot_1, m0_1, af0_1, af1_1, e5a_hs_1, sv_id_2, delta_a12_2, e_2, omega_2,
			delta_i_2, omega0_2_msb }
	}

}
