//! Text to number parsing for `String`-tagged variants.

/// How `String`-tagged values are turned into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextParse {
	/// Reads the longest numeric prefix after leading whitespace. Text with no
	/// usable prefix reads as zero.
	#[default]
	Lenient,
	/// The whole text, minus surrounding whitespace, must be a number.
	Strict,
}

/// Returns the leading numeric part of `text`, after leading whitespace.
///
/// With `fractional` unset only a sign and digits are taken. Otherwise a decimal
/// point, fraction digits and an exponent are accepted too.
pub(crate) fn numeric_prefix(text: &str, fractional: bool) -> &str {
	let text = text.trim_start();
	let bytes = text.as_bytes();
	let mut end = 0;

	if matches!(bytes.first(), Some(b'+' | b'-')) {
		end += 1;
	}
	let int_start = end;
	end += count_digits(&bytes[end..]);
	let mut digits = end - int_start;

	if fractional {
		if bytes.get(end) == Some(&b'.') {
			let frac = count_digits(&bytes[end + 1..]);
			if digits > 0 || frac > 0 {
				end += 1 + frac;
				digits += frac;
			}
		}
		if digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
			let mut exp = end + 1;
			if matches!(bytes.get(exp), Some(b'+' | b'-')) {
				exp += 1;
			}
			let exp_digits = count_digits(&bytes[exp..]);
			if exp_digits > 0 {
				end = exp + exp_digits;
			}
		}
	}

	if digits == 0 { "" } else { &text[..end] }
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
