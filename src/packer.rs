use crate::digit::hex2nibble;

pub const DIGITS_PER_WORD : usize = 4;

/// The four characters that become one output word.
pub type Group = [u8; DIGITS_PER_WORD];

/// Packs a full group into a word, first character in the most
/// significant nibble. A character that is not a hex digit leaves its
/// nibble zero, the other three are unaffected.
pub fn pack_group(group : &Group) -> u16 {
    let mut word = 0;

    for (i, b) in group.iter().copied().enumerate() {
        let nibble = hex2nibble(b).unwrap_or(0) as u16;
        word |= nibble << (4 * (DIGITS_PER_WORD - 1 - i));
    }

    word
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pack() {
        let tests : Vec<(&Group, u16)> = vec![
            (b"DEAD", 0xdead),
            (b"beef", 0xbeef),
            (b"BeEf", 0xbeef),
            (b"0000", 0x0000),
            (b"FFFF", 0xffff),
            (b"1234", 0x1234),
            (b"000F", 0x000f),
            (b"F000", 0xf000),
            (b"00F0", 0x00f0),
            (b"DEA#", 0xdea0),
            (b"#EAD", 0x0ead),
            (b"D#AD", 0xd0ad),
            (b"x1y2", 0x0102),
            (b"####", 0x0000),
        ];

        for (tc, exp) in tests {
            let got = pack_group(tc);

            assert_eq!(exp, got, "\ntc: {:?}", String::from_utf8_lossy(tc))
        }
    }

    // '0' must go through the same path as '1'..='9' in every position
    #[test]
    fn lone_zero_in_each_position() {
        for pos in 0..DIGITS_PER_WORD {
            let mut zero = *b"1111";
            zero[pos] = b'0';
            let mut two = *b"1111";
            two[pos] = b'2';

            let shift = 4 * (DIGITS_PER_WORD - 1 - pos);
            let cleared : u16 = 0x1111 & !(0xfu16 << shift);
            assert_eq!(cleared, pack_group(&zero), "\npos: {}", pos);
            assert_eq!(cleared | (2u16 << shift), pack_group(&two), "\npos: {}", pos);
        }
    }

    #[test]
    fn invalid_digit_is_zero_nibble() {
        let mut valid = *b"9999";
        for pos in 0..DIGITS_PER_WORD {
            valid[pos] = b'0';
            let mut invalid = valid;
            invalid[pos] = b'z';

            assert_eq!(pack_group(&valid), pack_group(&invalid), "\npos: {}", pos);
        }
    }
}
