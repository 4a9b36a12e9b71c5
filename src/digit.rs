/// Value of a single ascii hex digit, `None` for anything else.
pub fn hex2nibble(b : u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(10 + b - b'a'),
        b'A'..=b'F' => Some(10 + b - b'A'),
        _ => None,
    }
}

pub fn is_hex_digit(b : u8) -> bool {
    hex2nibble(b).is_some()
}

/// Printable form of a byte for diagnostics, non printable bytes are
/// shown escaped.
pub fn display_byte(b : u8) -> String {
    if b.is_ascii_graphic() {
        (b as char).to_string()
    } else {
        b.escape_ascii().to_string()
    }
}
