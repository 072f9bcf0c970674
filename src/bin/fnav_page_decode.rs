
extern crate clap;
extern crate colored;
extern crate nav_radio;
extern crate serde_json;

use std::fs::File;
use std::io::{BufRead, BufReader};

use clap::{Arg, App};
use colored::*;

use nav_radio::gnss::galileo_e5a::telemetry_decode::{FnavDecoder, PAGE_BITS};
use nav_radio::gnss::telemetry_decode::NavFrame;

fn main() {

	let matches = App::new("Galileo E5a F/NAV page decoder")
		.version("0.1.0")
		.about("Reads F/NAV pages as '0'/'1' strings, one 238-bit page per line, and emits assembled navigation data as JSON")
		.arg(Arg::with_name("input")
			.long("input")
			.help("Text file with one page per line; defaults to stdin")
			.takes_value(true))
		.get_matches();

	let reader:Box<dyn BufRead> = match matches.value_of("input") {
		Some(fname) => Box::new(BufReader::new(File::open(fname).unwrap())),
		None        => Box::new(BufReader::new(std::io::stdin())),
	};

	let mut decoder = FnavDecoder::new();

	for (line_num, line) in reader.lines().enumerate() {
		let line = line.unwrap();
		let page = line.trim();
		if page.is_empty() { continue; }

		match NavFrame::from_symbol_str(page, PAGE_BITS) {
			Ok(frame) => {
				let fails_before = decoder.crc_fail_count();
				decoder.decode_page(&frame);
				if decoder.crc_fail_count() > fails_before {
					eprintln!("{}", format!("Line {}: CRC failure, page discarded", line_num + 1).red());
				}
			},
			Err(e) => {
				eprintln!("{}", format!("Line {}: {:?}", line_num + 1, e).red());
				continue;
			},
		}

		if decoder.have_new_ephemeris() {
			eprintln!("{}", format!("Line {}: new ephemeris complete", line_num + 1).green());
			println!("{}", serde_json::to_string(&decoder.get_ephemeris()).unwrap());
		}
		if decoder.have_new_iono_and_gst() {
			eprintln!("{}", format!("Line {}: new ionospheric correction", line_num + 1).green());
			println!("{}", serde_json::to_string(&decoder.get_iono()).unwrap());
		}
		if decoder.have_new_utc_model() {
			eprintln!("{}", format!("Line {}: new UTC model", line_num + 1).green());
			println!("{}", serde_json::to_string(&decoder.get_utc_model()).unwrap());
		}
		if decoder.have_new_almanac() {
			eprintln!("{}", format!("Line {}: new almanac", line_num + 1).green());
			println!("{}", serde_json::to_string(&decoder.get_almanac()).unwrap());
		}
	}

	if let Some((wn, tow)) = decoder.gst() {
		eprintln!("Last GST: week {}, TOW {} [sec]", wn, tow);
	}
	eprintln!("CRC failures: {}", decoder.crc_fail_count());
}
