
use crate::NavMsgErr;

pub mod crc24q;
pub mod field;

/// One received, bit-synchronized navigation page in transmission order
/// (earliest bit first).  The expected length is a protocol constant of the
/// signal being decoded; the demodulation layer guarantees alignment and this
/// type only enforces length, so it stays usable across signal types with
/// different page sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavFrame {
	bits: Vec<bool>,
}

impl NavFrame {

	pub fn new(bits:Vec<bool>, expected_len:usize) -> Result<Self, NavMsgErr> {
		if bits.len() == expected_len {
			Ok(Self{ bits })
		} else {
			Err(NavMsgErr::InvalidFrame("Page length doesn't match the signal's frame size"))
		}
	}

	/// Builds a frame from a '0'/'1' string, the form the symbol
	/// synchronization layer hands over one page at a time.
	pub fn from_symbol_str(page:&str, expected_len:usize) -> Result<Self, NavMsgErr> {
		let mut bits:Vec<bool> = Vec::with_capacity(page.len());
		for c in page.chars() {
			match c {
				'0' => bits.push(false),
				'1' => bits.push(true),
				_   => return Err(NavMsgErr::InvalidFrame("Page symbol other than '0' or '1'")),
			}
		}
		Self::new(bits, expected_len)
	}

	pub fn len(&self) -> usize { self.bits.len() }

	pub fn bits(&self) -> &[bool] { &self.bits }

}
