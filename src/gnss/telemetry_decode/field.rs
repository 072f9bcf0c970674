
use super::NavFrame;

/// Position of one navigation parameter within a frame: an ordered list of
/// (first bit, length) ranges, most significant range first.  Most parameters
/// occupy a single contiguous range but some are split across the frame or
/// even across frames, so extraction concatenates the ranges before
/// interpreting the result.
///
/// Field tables are protocol constants straight out of the ICD, so a range
/// past the end of the frame or a total width over 64 bits is a programming
/// error and panics rather than returning a Result.
#[derive(Debug, Clone, Copy)]
pub struct Field {
	ranges: &'static [(usize, usize)],
}

impl Field {

	pub const fn new(ranges:&'static [(usize, usize)]) -> Self { Self{ ranges } }

	pub fn width(&self) -> usize {
		self.ranges.iter().map(|&(_, len)| len).sum()
	}

	/// Concatenation of the selected bit ranges as an unsigned integer
	pub fn unsigned(&self, frame:&NavFrame) -> u64 {
		assert!(self.width() <= 64, "Field wider than 64 bits");
		let bits = frame.bits();
		let mut ans:u64 = 0;
		for &(first, len) in self.ranges {
			assert!(first + len <= bits.len(), "Field range past the end of the frame");
			for b in &bits[first..(first + len)] {
				ans = (ans << 1) | (*b as u64);
			}
		}
		ans
	}

	/// Same concatenation with the most significant extracted bit taken as a
	/// two's-complement sign bit
	pub fn signed(&self, frame:&NavFrame) -> i64 {
		let w = self.width();
		assert!(w >= 1 && w <= 64, "Signed field width must be 1 to 64 bits");
		let raw = self.unsigned(frame);
		if w < 64 && raw & (1u64 << (w - 1)) != 0 {
			(raw | (!0u64 << w)) as i64
		} else {
			raw as i64
		}
	}

}

/// Writes `value` into `bits[first..first+len]`, MSB first.  The inverse of
/// extraction, used by tests to build known pages.
#[cfg(test)]
pub(crate) fn set_bits(bits:&mut [bool], first:usize, len:usize, value:u64) {
	assert!(len <= 64 && first + len <= bits.len());
	for i in 0..len {
		bits[first + i] = (value >> (len - 1 - i)) & 1 == 1;
	}
}

/// Two's-complement re-encoding of a signed value at a given width, for tests
/// that build pages carrying negative parameters.
#[cfg(test)]
pub(crate) fn signed_raw(value:i64, len:usize) -> u64 {
	assert!(len >= 1 && len <= 64);
	if len == 64 { value as u64 } else { (value as u64) & ((1u64 << len) - 1) }
}
