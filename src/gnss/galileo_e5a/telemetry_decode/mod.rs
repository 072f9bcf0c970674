
use crate::gnss::telemetry_decode::{crc24q, NavFrame};

use super::pvt::almanac::{Almanac, Sv};
use super::pvt::ephemeris::Ephemeris;
use super::pvt::ionosphere;
use super::pvt::utc_model;

pub mod word;

/// F/NAV page length after FEC decoding and tail bit removal: 6-bit page
/// type + 208-bit nav payload + 24-bit CRC
pub const PAGE_BITS:usize = 238;
/// The CRC-protected portion of the page
pub const DATA_BITS:usize = 214;

/// Completion bookkeeping for one parameter group: which of the group's
/// constituent pages have arrived in the current assembly cycle
#[derive(Debug, Clone, Copy)]
struct PageSet {
	required:u8,
	received:u8,
}

impl PageSet {

	fn new(required:u8) -> Self { Self{ required, received: 0 } }

	fn clear(&mut self) { self.received = 0; }

	fn mark(&mut self, page:u8) {
		assert!(page < 8);
		self.received |= 1 << page;
	}

	fn is_complete(&self) -> bool { self.received & self.required == self.required }

}

/// Galileo E5a F/NAV message assembler.  One instance per tracking channel;
/// the channel feeds it one CRC-protected page at a time, in whatever order
/// the signal delivers them, and polls the one-shot `have_new_*` queries to
/// learn when a parameter group has completely arrived.
///
/// Ephemeris (with clock correction and health) spans words 1-4 tagged by a
/// shared IODnav; the almanac spans words 5-6 tagged by IODa; ionospheric
/// correction and the UTC model each fit on a single word.  A CRC-valid page
/// whose issue-of-data differs from the in-flight cycle discards the group's
/// partial record and restarts assembly, so mismatched fragments are never
/// mixed.
#[derive(Debug)]
pub struct FnavDecoder {
	ephemeris:Ephemeris,
	iono:ionosphere::Model,
	utc:utc_model::Model,
	almanac:Almanac,

	eph_pages:PageSet,
	alm_pages:PageSet,
	iono_received:bool,
	utc_received:bool,

	iod_nav:Option<u16>,
	iod_alm:Option<u8>,

	// The two halves of almanac SVID2's Omega0, split across words 5 and 6;
	// held raw until both halves of the same IODa cycle are in
	omega0_2_msb:Option<u8>,
	omega0_2_lsb:Option<u16>,

	gst:Option<(u32, u32)>,
	crc_fails:u32,
}

impl FnavDecoder {

	pub fn new() -> Self {
		Self{
			ephemeris: Ephemeris::default(),
			iono: ionosphere::Model::default(),
			utc: utc_model::Model::default(),
			almanac: Almanac::default(),
			eph_pages: PageSet::new(0b1111),
			alm_pages: PageSet::new(0b11),
			iono_received: false,
			utc_received: false,
			iod_nav: None,
			iod_alm: None,
			omega0_2_msb: None,
			omega0_2_lsb: None,
			gst: None,
			crc_fails: 0,
		}
	}

	/// Validates and decodes one page, folding its fields into the in-flight
	/// parameter records.  CRC failures discard the page without touching any
	/// state other than the failure counter; the caller never sees a decode
	/// error, only the readiness queries.
	pub fn decode_page(&mut self, frame:&NavFrame) {
		assert_eq!(frame.len(), PAGE_BITS, "F/NAV pages are 238 bits after FEC and tail removal");

		if !crc24q::is_ok(frame.bits()) {
			self.crc_fails += 1;
			return;
		}

		match word::decode(frame) {
			word::Word::Word1(w) => self.apply_word1(w),
			word::Word::Word2(w) => self.apply_word2(w),
			word::Word::Word3(w) => self.apply_word3(w),
			word::Word::Word4(w) => self.apply_word4(w),
			word::Word::Word5(w) => self.apply_word5(w),
			word::Word::Word6(w) => self.apply_word6(w),
			word::Word::Other(_) => { /* reserved and dummy page types carry no assembled data */ },
		}
	}

	// One-shot readiness queries.  A true answer clears the group's page
	// flags, so it fires exactly once per completed assembly cycle; the
	// accessors below never clear anything themselves.

	pub fn have_new_ephemeris(&mut self) -> bool {
		if self.eph_pages.is_complete() {
			self.eph_pages.clear();
			true
		} else { false }
	}

	pub fn have_new_iono_and_gst(&mut self) -> bool {
		if self.iono_received {
			self.iono_received = false;
			true
		} else { false }
	}

	pub fn have_new_utc_model(&mut self) -> bool {
		if self.utc_received {
			self.utc_received = false;
			true
		} else { false }
	}

	pub fn have_new_almanac(&mut self) -> bool {
		if self.alm_pages.is_complete() {
			self.alm_pages.clear();
			true
		} else { false }
	}

	// Accessors return copies of the provisional records; callers are
	// expected to gate on the corresponding have_new_* query, since a record
	// mid-assembly is only partially filled.

	pub fn get_ephemeris(&self) -> Ephemeris { self.ephemeris }

	pub fn get_iono(&self) -> ionosphere::Model { self.iono }

	pub fn get_utc_model(&self) -> utc_model::Model { self.utc }

	pub fn get_almanac(&self) -> Almanac { self.almanac }

	/// Latest (week number, time of week) seen on any timing page; words 1-4
	/// all carry GST and the most recently decoded value wins
	pub fn gst(&self) -> Option<(u32, u32)> { self.gst }

	pub fn crc_fail_count(&self) -> u32 { self.crc_fails }

	/// Drops all assembly progress and provisional records, used on channel
	/// loss-of-lock or re-initialization
	pub fn reset(&mut self) {
		*self = Self::new();
	}

	fn restart_ephemeris_if_new_iod(&mut self, iod_nav:u16) {
		if self.iod_nav != Some(iod_nav) {
			self.ephemeris = Ephemeris::default();
			self.eph_pages.clear();
			self.iod_nav = Some(iod_nav);
		}
	}

	fn restart_almanac_if_new_iod(&mut self, iod_a:u8) {
		if self.iod_alm != Some(iod_a) {
			self.almanac = Almanac::default();
			self.alm_pages.clear();
			self.omega0_2_msb = None;
			self.omega0_2_lsb = None;
			self.iod_alm = Some(iod_a);
		}
	}

	fn apply_word1(&mut self, w:word::word1::Body) {
		self.restart_ephemeris_if_new_iod(w.iod_nav);
		let eph = &mut self.ephemeris;
		eph.sv_id = w.sv_id;
		eph.iod_nav = w.iod_nav;
		eph.t0c = w.t0c;
		eph.af0 = w.af0;
		eph.af1 = w.af1;
		eph.af2 = w.af2;
		eph.sisa = w.sisa;
		eph.bgd_e1_e5a = w.bgd_e1_e5a;
		eph.e5a_hs = w.e5a_hs;
		eph.e5a_dvs = w.e5a_dvs;
		eph.wn = w.wn;
		eph.tow = w.tow;
		self.eph_pages.mark(0);

		self.iono = ionosphere::Model{ ai0: w.ai0, ai1: w.ai1, ai2: w.ai2, storm_flags: w.storm_flags };
		self.iono_received = true;

		self.gst = Some((w.wn, w.tow));
	}

	fn apply_word2(&mut self, w:word::word2::Body) {
		self.restart_ephemeris_if_new_iod(w.iod_nav);
		let eph = &mut self.ephemeris;
		eph.iod_nav = w.iod_nav;
		eph.m0 = w.m0;
		eph.omega_dot = w.omega_dot;
		eph.e = w.e;
		eph.sqrt_a = w.sqrt_a;
		eph.omega0 = w.omega0;
		eph.idot = w.idot;
		eph.wn = w.wn;
		eph.tow = w.tow;
		self.eph_pages.mark(1);

		self.gst = Some((w.wn, w.tow));
	}

	fn apply_word3(&mut self, w:word::word3::Body) {
		self.restart_ephemeris_if_new_iod(w.iod_nav);
		let eph = &mut self.ephemeris;
		eph.iod_nav = w.iod_nav;
		eph.i0 = w.i0;
		eph.omega = w.omega;
		eph.delta_n = w.delta_n;
		eph.cuc = w.cuc;
		eph.cus = w.cus;
		eph.crc = w.crc;
		eph.crs = w.crs;
		eph.t0e = w.t0e;
		eph.wn = w.wn;
		eph.tow = w.tow;
		self.eph_pages.mark(2);

		self.gst = Some((w.wn, w.tow));
	}

	fn apply_word4(&mut self, w:word::word4::Body) {
		self.restart_ephemeris_if_new_iod(w.iod_nav);
		let eph = &mut self.ephemeris;
		eph.iod_nav = w.iod_nav;
		eph.cic = w.cic;
		eph.cis = w.cis;
		eph.tow = w.tow;
		self.eph_pages.mark(3);

		self.utc = utc_model::Model{
			a0: w.a0, a1: w.a1,
			delta_t_ls: w.delta_t_ls,
			t0t: w.t0t, wn0t: w.wn0t,
			wn_lsf: w.wn_lsf, dn: w.dn, delta_t_lsf: w.delta_t_lsf,
			a0g: w.a0g, a1g: w.a1g, t0g: w.t0g, wn0g: w.wn0g,
		};
		self.utc_received = true;

		if let Some((wn, _)) = self.gst {
			self.gst = Some((wn, w.tow));
		}
	}

	fn apply_word5(&mut self, w:word::word5::Body) {
		self.restart_almanac_if_new_iod(w.iod_a);
		let alm = &mut self.almanac;
		alm.iod_a = w.iod_a;
		alm.wn_a = w.wn_a;
		alm.t0a = w.t0a;
		alm.sv1 = Sv{
			sv_id: w.sv_id_1,
			delta_a12: w.delta_a12_1,
			e: w.e_1,
			omega: w.omega_1,
			delta_i: w.delta_i_1,
			omega0: w.omega0_1,
			omega_dot: w.omega_dot_1,
			m0: w.m0_1,
			af0: w.af0_1,
			af1: w.af1_1,
			e5a_hs: w.e5a_hs_1,
		};
		alm.sv2.sv_id = w.sv_id_2;
		alm.sv2.delta_a12 = w.delta_a12_2;
		alm.sv2.e = w.e_2;
		alm.sv2.omega = w.omega_2;
		alm.sv2.delta_i = w.delta_i_2;
		self.omega0_2_msb = Some(w.omega0_2_msb);
		self.merge_split_omega0();
		self.alm_pages.mark(0);
	}

	fn apply_word6(&mut self, w:word::word6::Body) {
		self.restart_almanac_if_new_iod(w.iod_a);
		let alm = &mut self.almanac;
		alm.iod_a = w.iod_a;
		alm.sv2.omega_dot = w.omega_dot_2;
		alm.sv2.m0 = w.m0_2;
		alm.sv2.af0 = w.af0_2;
		alm.sv2.af1 = w.af1_2;
		alm.sv2.e5a_hs = w.e5a_hs_2;
		alm.sv3 = Sv{
			sv_id: w.sv_id_3,
			delta_a12: w.delta_a12_3,
			e: w.e_3,
			omega: w.omega_3,
			delta_i: w.delta_i_3,
			omega0: w.omega0_3,
			omega_dot: w.omega_dot_3,
			m0: w.m0_3,
			af0: w.af0_3,
			af1: w.af1_3,
			e5a_hs: w.e5a_hs_3,
		};
		self.omega0_2_lsb = Some(w.omega0_2_lsb);
		self.merge_split_omega0();
		self.alm_pages.mark(1);
	}

	/// Recombines the split SVID2 Omega0 once both halves of the current IODa
	/// cycle have arrived, in either order: 4 MSBs from word 5, 12 LSBs from
	/// word 6, interpreted as a 16-bit two's-complement semicircle value
	fn merge_split_omega0(&mut self) {
		if let (Some(msb), Some(lsb)) = (self.omega0_2_msb, self.omega0_2_lsb) {
			let raw:u16 = ((msb as u16) << 12) | lsb;
			self.almanac.sv2.omega0 = ((raw as i16) as f64) * 2.0_f64.powi(-15);
		}
	}

}

impl Default for FnavDecoder {
	fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {

	use super::{FnavDecoder, DATA_BITS, PAGE_BITS};
	use crate::gnss::telemetry_decode::{crc24q, NavFrame};
	use crate::gnss::telemetry_decode::field::{set_bits, signed_raw};

	// Builds the 214 data bits of a page with the given type, zero payload
	fn blank_page(page_type:u64) -> Vec<bool> {
		let mut bits = vec![false; DATA_BITS];
		set_bits(&mut bits, 0, 6, page_type);
		bits
	}

	// Appends a valid CRC and wraps into a frame
	fn seal(mut bits:Vec<bool>) -> NavFrame {
		let crc = crc24q::checksum(&bits);
		for i in (0..24).rev() {
			bits.push((crc >> i) & 1 == 1);
		}
		NavFrame::new(bits, PAGE_BITS).unwrap()
	}

	fn word1(iod_nav:u64) -> Vec<bool> {
		let mut bits = blank_page(1);
		set_bits(&mut bits, 12, 10, iod_nav);
		bits
	}

	fn word2(iod_nav:u64) -> Vec<bool> {
		let mut bits = blank_page(2);
		set_bits(&mut bits, 6, 10, iod_nav);
		bits
	}

	fn word3(iod_nav:u64) -> Vec<bool> {
		let mut bits = blank_page(3);
		set_bits(&mut bits, 6, 10, iod_nav);
		bits
	}

	fn word4(iod_nav:u64) -> Vec<bool> {
		let mut bits = blank_page(4);
		set_bits(&mut bits, 6, 10, iod_nav);
		bits
	}

	#[test]
	fn full_iod_cycle_completes_ephemeris_with_scaled_fields() {
		let mut decoder = FnavDecoder::new();

		let mut w1 = word1(87);
		set_bits(&mut w1, 6, 6, 19);                          // SVID
		set_bits(&mut w1, 22, 14, 100);                       // t0c, scale 60
		set_bits(&mut w1, 36, 31, signed_raw(-5, 31));        // af0, scale 2^-34

		let mut w2 = word2(87);
		set_bits(&mut w2, 16, 32, 1 << 30);                   // m0 = 0.5 semicircles
		set_bits(&mut w2, 104, 32, 5440 << 19);               // sqrt_a = 5440 exactly

		let mut w3 = word3(87);
		set_bits(&mut w3, 160, 14, 150);                      // t0e, scale 60
		set_bits(&mut w3, 128, 16, signed_raw(-32, 16));      // crc, scale 2^-5

		let mut w4 = word4(87);
		set_bits(&mut w4, 16, 16, signed_raw(7, 16));         // cic, scale 2^-29

		for page in vec![w1, w2, w3, w4] {
			assert!(!decoder.have_new_ephemeris());
			decoder.decode_page(&seal(page));
		}

		assert!(decoder.have_new_ephemeris());
		let eph = decoder.get_ephemeris();
		assert_eq!(eph.iod_nav, 87);
		assert_eq!(eph.sv_id, 19);
		assert!((eph.t0c - 6000.0).abs() < 1.0e-12);
		assert!((eph.af0 - (-5.0 * 2.0_f64.powi(-34))).abs() < 1.0e-20);
		assert!((eph.m0 - 0.5).abs() < 1.0e-12);
		assert!((eph.sqrt_a - 5440.0).abs() < 1.0e-9);
		assert!((eph.t0e - 9000.0).abs() < 1.0e-12);
		assert!((eph.crc - (-1.0)).abs() < 1.0e-12);
		assert!((eph.cic - 7.0 * 2.0_f64.powi(-29)).abs() < 1.0e-18);

		// One-shot: the query already consumed the completion
		assert!(!decoder.have_new_ephemeris());
	}

	#[test]
	fn mismatched_iod_fragments_never_complete() {
		let mut decoder = FnavDecoder::new();
		decoder.decode_page(&seal(word1(10)));
		decoder.decode_page(&seal(word2(10)));
		decoder.decode_page(&seal(word3(11)));  // new cycle starts here
		decoder.decode_page(&seal(word4(11)));
		assert!(!decoder.have_new_ephemeris());

		// Completing the new cycle works
		decoder.decode_page(&seal(word1(11)));
		decoder.decode_page(&seal(word2(11)));
		assert!(decoder.have_new_ephemeris());
		assert_eq!(decoder.get_ephemeris().iod_nav, 11);
	}

	#[test]
	fn iod_restart_discards_partial_fields() {
		let mut decoder = FnavDecoder::new();

		let mut w2 = word2(10);
		set_bits(&mut w2, 104, 32, 5440 << 19);  // sqrt_a
		decoder.decode_page(&seal(w2));
		assert!((decoder.get_ephemeris().sqrt_a - 5440.0).abs() < 1.0e-9);

		// A different IODnav wipes the stale sqrt_a along with the flags
		decoder.decode_page(&seal(word3(11)));
		assert_eq!(decoder.get_ephemeris().sqrt_a, 0.0);
		assert_eq!(decoder.get_ephemeris().iod_nav, 11);
	}

	#[test]
	fn corrupted_page_mutates_nothing() {
		let mut decoder = FnavDecoder::new();

		let mut w1 = word1(87);
		set_bits(&mut w1, 102, 11, 320);  // ai0, scale 2^-2
		let frame = seal(w1);

		// Flip one payload bit after sealing
		let mut corrupted = frame.bits().to_vec();
		corrupted[50] = !corrupted[50];
		decoder.decode_page(&NavFrame::new(corrupted, PAGE_BITS).unwrap());

		assert_eq!(decoder.crc_fail_count(), 1);
		assert!(!decoder.have_new_iono_and_gst());
		assert!(!decoder.have_new_ephemeris());
		assert_eq!(decoder.get_iono().ai0, 0.0);
		assert_eq!(decoder.gst(), None);

		// The valid copy then lands normally, and the query fires exactly once
		decoder.decode_page(&frame);
		assert!(decoder.have_new_iono_and_gst());
		assert!((decoder.get_iono().ai0 - 80.0).abs() < 1.0e-12);
		assert!(!decoder.have_new_iono_and_gst());
	}

	#[test]
	fn reset_mid_assembly_requires_a_full_cycle() {
		let mut decoder = FnavDecoder::new();
		decoder.decode_page(&seal(word1(87)));
		decoder.decode_page(&seal(word2(87)));
		decoder.decode_page(&seal(word3(87)));
		decoder.reset();

		// The one remaining page does not complete the ephemeris group (the
		// single-page UTC group rides on word 4 and completes regardless)
		decoder.decode_page(&seal(word4(87)));
		assert!(!decoder.have_new_ephemeris());
		assert!(!decoder.have_new_iono_and_gst());

		// All four again do
		decoder.decode_page(&seal(word1(87)));
		decoder.decode_page(&seal(word2(87)));
		decoder.decode_page(&seal(word3(87)));
		assert!(decoder.have_new_ephemeris());
	}

	#[test]
	fn duplicate_pages_are_idempotent() {
		let mut decoder = FnavDecoder::new();
		let w2 = seal(word2(87));
		decoder.decode_page(&w2);
		let eph_once = decoder.get_ephemeris();
		decoder.decode_page(&w2);
		let eph_twice = decoder.get_ephemeris();
		assert_eq!(format!("{:?}", eph_once), format!("{:?}", eph_twice));
		assert!(!decoder.have_new_ephemeris());

		// After a pull, a duplicate of a single constituent page does not
		// re-trigger completion on its own
		decoder.decode_page(&seal(word1(87)));
		decoder.decode_page(&seal(word3(87)));
		decoder.decode_page(&seal(word4(87)));
		assert!(decoder.have_new_ephemeris());
		decoder.decode_page(&w2);
		assert!(!decoder.have_new_ephemeris());
	}

	#[test]
	fn utc_model_arrives_with_word_4() {
		let mut decoder = FnavDecoder::new();
		let mut w4 = word4(87);
		set_bits(&mut w4, 104, 8, signed_raw(18, 8));   // delta_t_ls
		set_bits(&mut w4, 112, 8, 5);                   // t0t, scale 3600
		decoder.decode_page(&seal(w4));
		assert!(decoder.have_new_utc_model());
		let utc = decoder.get_utc_model();
		assert_eq!(utc.delta_t_ls, 18);
		assert_eq!(utc.t0t, 18000);
	}

	#[test]
	fn split_omega0_assembles_in_either_order() {
		// SVID2's Omega0: 4 MSBs on word 5, 12 LSBs on word 6.  0xA0F1 as a
		// 16-bit two's complement value is -24335.
		let expected = (0xA0F1u16 as i16 as f64) * 2.0_f64.powi(-15);

		let mut w5 = blank_page(5);
		set_bits(&mut w5, 6, 4, 3);           // IODa
		set_bits(&mut w5, 153, 6, 14);        // SVID2
		set_bits(&mut w5, 210, 4, 0xA);
		let mut w6 = blank_page(6);
		set_bits(&mut w6, 6, 4, 3);
		set_bits(&mut w6, 10, 12, 0x0F1);

		let mut decoder = FnavDecoder::new();
		decoder.decode_page(&seal(w5.clone()));
		assert!(!decoder.have_new_almanac());
		decoder.decode_page(&seal(w6.clone()));
		assert!(decoder.have_new_almanac());
		let alm = decoder.get_almanac();
		assert_eq!(alm.iod_a, 3);
		assert_eq!(alm.sv2.sv_id, 14);
		assert!((alm.sv2.omega0 - expected).abs() < 1.0e-12);

		// Word 6 before word 5 assembles the same value
		let mut decoder = FnavDecoder::new();
		decoder.decode_page(&seal(w6));
		assert!(!decoder.have_new_almanac());
		decoder.decode_page(&seal(w5));
		assert!(decoder.have_new_almanac());
		assert!((decoder.get_almanac().sv2.omega0 - expected).abs() < 1.0e-12);
	}

	#[test]
	fn almanac_iod_mismatch_restarts_the_cycle() {
		let mut w5 = blank_page(5);
		set_bits(&mut w5, 6, 4, 3);
		let mut w6 = blank_page(6);
		set_bits(&mut w6, 6, 4, 4);  // different IODa

		let mut decoder = FnavDecoder::new();
		decoder.decode_page(&seal(w5));
		decoder.decode_page(&seal(w6));
		assert!(!decoder.have_new_almanac());
	}

	#[test]
	fn gst_tracks_the_latest_timing_page() {
		let mut decoder = FnavDecoder::new();
		assert_eq!(decoder.gst(), None);

		let mut w1 = word1(87);
		set_bits(&mut w1, 155, 12, 1124);   // WN
		set_bits(&mut w1, 167, 20, 345600); // TOW
		decoder.decode_page(&seal(w1));
		assert_eq!(decoder.gst(), Some((1124, 345600)));

		let mut w2 = word2(87);
		set_bits(&mut w2, 182, 12, 1124);
		set_bits(&mut w2, 194, 20, 345610);
		decoder.decode_page(&seal(w2));
		assert_eq!(decoder.gst(), Some((1124, 345610)));
	}

}
