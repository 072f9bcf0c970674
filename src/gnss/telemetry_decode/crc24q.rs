
/// CRC-24Q generator polynomial including the leading x^24 term; the 24-bit
/// error-detecting code used by the Galileo ICDs, CNAV and RTCM
pub const CRC_24Q_POLYNOMIAL:[bool; 25] = [true, true, false, false, false, false, true, true, false, false, true, false,
	false, true, true, false, false, true, true, true, true, true, false, true, true];

/// Checksum of `data` (the protected message bits, without the transmitted
/// CRC field), computed by polynomial long division.  This is what a
/// transmitter would append after the message.
pub fn checksum(data:&[bool]) -> u32 {
	let mut m:Vec<bool> = data.to_vec();
	m.extend(std::iter::repeat(false).take(24));

	for i in 0..data.len() {
		if m[i] {
			for j in 0..CRC_24Q_POLYNOMIAL.len() {
				m[i+j] ^= CRC_24Q_POLYNOMIAL[j];
			}
		}
	}

	m[data.len()..].iter().fold(0u32, |acc, b| (acc << 1) | (*b as u32))
}

/// Checks a message with its 24-bit CRC appended in the trailing bits;
/// a systematic CRC concatenated with its message leaves a zero remainder,
/// which is equivalent to recomputing and comparing.
pub fn is_ok(message_w_crc:&[bool]) -> bool {
	if message_w_crc.len() <= 24 { return false; }

	let n = message_w_crc.len() - 24;
	let transmitted:u32 = message_w_crc[n..].iter().fold(0u32, |acc, b| (acc << 1) | (*b as u32));
	checksum(&message_w_crc[..n]) == transmitted
}
