use crate::geometry::Color;

/// `#RRGGBB`, uppercase, always 7 characters.
pub fn format_hex_full(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

/// Same six digits without the leading `#`.
pub fn format_hex_short(color: Color) -> String {
    format!("{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

/// Parses six hex digits, or three shorthand digits with each digit doubled
/// (`abc` -> `aabbcc`). Any other length or a non-hex character is `None`.
pub fn parse_hex_digits(digits: &str) -> Option<Color> {
    // from_str_radix tolerates a leading `+`, which is not valid hex here.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Color::new(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
            let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
            let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
            Some(Color::new(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hex_round_trips_through_format() {
        for digits in ["FF0000", "00FF7F", "ABCDEF", "000000", "FFFFFF"] {
            let color = parse_hex_digits(digits).expect("valid hex should parse");
            assert_eq!(format_hex_short(color), digits);
            assert_eq!(format_hex_full(color), format!("#{digits}"));
        }
    }

    #[test]
    fn lowercase_input_normalizes_to_uppercase_on_format() {
        let color = parse_hex_digits("abcdef").expect("lowercase hex should parse");
        assert_eq!(format_hex_full(color), "#ABCDEF");
    }

    #[test]
    fn shorthand_doubles_each_digit() {
        let color = parse_hex_digits("abc").expect("shorthand should parse");
        assert_eq!(color, Color::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn shorthand_channels_have_equal_nibbles() {
        for digits in ["000", "fff", "18e", "a5c"] {
            let color = parse_hex_digits(digits).expect("shorthand should parse");
            for channel in [color.r, color.g, color.b] {
                assert_eq!(channel >> 4, channel & 0x0F);
            }
        }
    }

    #[test]
    fn invalid_characters_fail_to_parse() {
        assert_eq!(parse_hex_digits("ZZZZZZ"), None);
        assert_eq!(parse_hex_digits("12G"), None);
        assert_eq!(parse_hex_digits("12 45x"), None);
    }

    #[test]
    fn signed_integer_syntax_is_not_valid_hex() {
        // A pasted `+` or `-` must not slip through as from_str_radix syntax.
        assert_eq!(parse_hex_digits("+23445"), None);
        assert_eq!(parse_hex_digits("-23445"), None);
        assert_eq!(parse_hex_digits("+bc"), None);
    }

    #[test]
    fn wrong_lengths_fail_to_parse() {
        assert_eq!(parse_hex_digits(""), None);
        assert_eq!(parse_hex_digits("12"), None);
        assert_eq!(parse_hex_digits("1234"), None);
        assert_eq!(parse_hex_digits("1234567"), None);
    }
}
