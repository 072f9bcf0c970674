
use crate::gnss::telemetry_decode::NavFrame;
use crate::gnss::telemetry_decode::field::Field;

pub mod word1;
pub mod word2;
pub mod word3;
pub mod word4;
pub mod word5;
pub mod word6;

/// Leading field of every F/NAV page, independent of everything else
pub const PAGE_TYPE:Field = Field::new(&[(0, 6)]);

/// One decoded F/NAV word.  Reserved and dummy page types survive dispatch as
/// `Other` so the caller can count them without the decoder inventing fields.
#[derive(Debug, Clone, Copy)]
pub enum Word {
	Word1(word1::Body),
	Word2(word2::Body),
	Word3(word3::Body),
	Word4(word4::Body),
	Word5(word5::Body),
	Word6(word6::Body),
	Other(u8),
}

/// Page-type dispatch.  The frame must already have passed the CRC gate;
/// per-word decoding is infallible after that.
pub fn decode(frame:&NavFrame) -> Word {
	match PAGE_TYPE.unsigned(frame) {
		1 => Word::Word1(word1::Body::decode(frame)),
		2 => Word::Word2(word2::Body::decode(frame)),
		3 => Word::Word3(word3::Body::decode(frame)),
		4 => Word::Word4(word4::Body::decode(frame)),
		5 => Word::Word5(word5::Body::decode(frame)),
		6 => Word::Word6(word6::Body::decode(frame)),
		n => Word::Other(n as u8),
	}
}

#[cfg(test)]
mod tests {

	use super::{decode, Word};
	use crate::gnss::telemetry_decode::NavFrame;
	use crate::gnss::telemetry_decode::field::set_bits;

	#[test]
	fn reserved_page_types_dispatch_to_other() {
		let mut bits = vec![false; 238];
		set_bits(&mut bits, 0, 6, 63);
		let frame = NavFrame::new(bits, 238).unwrap();
		match decode(&frame) {
			Word::Other(63) => {},
			w => panic!("expected Other(63), got {:?}", w),
		}
	}

}
