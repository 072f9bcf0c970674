
use ::serde::{Serialize, Deserialize};

const SECONDS_PER_WEEK:f64 = 604800.0;
const SECONDS_PER_DAY:f64 = 86400.0;

/// GST-UTC and GST-GPS conversion parameters, F/NAV word 4
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Model {
	// GST-UTC
	pub a0:f64,              // [sec]
	pub a1:f64,              // [sec/sec]
	pub delta_t_ls:i8,       // [sec] leap seconds before the event below
	pub t0t:u32,             // [sec] reference time of week
	pub wn0t:u8,             // reference week, modulo 256
	pub wn_lsf:u8,           // week of the next leap second event, modulo 256
	pub dn:u8,               // day of that week, 1..=7
	pub delta_t_lsf:i8,      // [sec] leap seconds after the event
	// GST-GPS (GGTO)
	pub a0g:f64,             // [sec]
	pub a1g:f64,             // [sec/sec]
	pub t0g:u32,             // [sec]
	pub wn0g:u8,             // modulo 64
}

impl Model {

	fn delta_t_utc(&self, leap:f64, tow:f64, wn:u32) -> f64 {
		let dw = ((wn % 256) as f64) - (self.wn0t as f64);
		leap + self.a0 + self.a1*(tow - (self.t0t as f64) + SECONDS_PER_WEEK*dw)
	}

	/// UTC time, expressed as seconds into the current Galileo week, for the
	/// given GST time of week and week number.  Handles the three cases of
	/// the ICD's conversion algorithm: leap second event in the future, in
	/// the past, and within six hours of `tow` (when the day is stretched or
	/// shortened by the leap step).
	pub fn gst_to_utc(&self, tow:f64, wn:u32) -> f64 {
		let weeks_to_event = ((self.wn_lsf as i32) - ((wn % 256) as i32)) as f64;
		let second_of_event = ((self.dn as f64) - 1.0) * SECONDS_PER_DAY;

		let utc_daytime:f64 = if weeks_to_event < 0.0 {
			// Event already past; the new leap second count applies
			(tow - self.delta_t_utc(self.delta_t_lsf as f64, tow, wn)).rem_euclid(SECONDS_PER_DAY)
		} else if weeks_to_event > 0.0 || (tow - second_of_event).abs() > 21600.0 {
			(tow - self.delta_t_utc(self.delta_t_ls as f64, tow, wn)).rem_euclid(SECONDS_PER_DAY)
		} else {
			// Within six hours of the event: the UTC day gains (or loses)
			// delta_t_lsf - delta_t_ls seconds
			let w = (tow - self.delta_t_utc(self.delta_t_ls as f64, tow, wn) - 43200.0).rem_euclid(SECONDS_PER_DAY) + 43200.0;
			w.rem_euclid(SECONDS_PER_DAY + ((self.delta_t_lsf - self.delta_t_ls) as f64))
		};

		SECONDS_PER_DAY * (tow / SECONDS_PER_DAY).floor() + utc_daytime
	}

	/// GST-GPS time offset [sec] at the given GST time of week and week number
	pub fn gst_to_gps_offset(&self, tow:f64, wn:u32) -> f64 {
		let dw = ((wn % 64) as f64) - (self.wn0g as f64);
		self.a0g + self.a1g*(tow - (self.t0g as f64) + SECONDS_PER_WEEK*dw)
	}

}

#[cfg(test)]
mod tests {

	use super::Model;

	#[test]
	fn pure_leap_second_offset() {
		// A0 = A1 = 0 and no pending event: GST leads UTC by exactly the
		// broadcast leap second count
		let utc = Model{ delta_t_ls: 18, delta_t_lsf: 18, wn0t: 100, wn_lsf: 90, ..Default::default() };
		let tow = 100000.0;  // mid-morning of day 1, nowhere near midnight
		assert!((utc.gst_to_utc(tow, 1124) - (tow - 18.0)).abs() < 1.0e-9);
	}

	#[test]
	fn future_event_uses_current_leap_count() {
		let utc = Model{ delta_t_ls: 18, delta_t_lsf: 19, wn0t: 100, wn_lsf: 110, dn: 7, ..Default::default() };
		let tow = 200000.0;
		// wn % 256 == 100, event at week 110: still in the future
		assert!((utc.gst_to_utc(tow, 1124) - (tow - 18.0)).abs() < 1.0e-9);
	}

	#[test]
	fn ggto_is_linear_from_reference() {
		let utc = Model{ a0g: 1.0e-9, a1g: 1.0e-12, t0g: 3600, wn0g: 20, ..Default::default() };
		let offset = utc.gst_to_gps_offset(7200.0, 1044);  // 1044 % 64 == 20
		assert!((offset - (1.0e-9 + 1.0e-12*3600.0)).abs() < 1.0e-18);
	}

}
