use crate::{
    digit::is_hex_digit,
    error::InvalidDigit,
    lexer::Symbol,
    packer::{
        pack_group,
        Group,
        DIGITS_PER_WORD,
    },
};

/// Counters of a scan over a hex listing.
///
/// Every input byte takes a group slot except the `x`/`X` of a prefix,
/// the `0` in front of the marker keeps the slot it was given.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ScanState {
    /// input bytes consumed
    pub bytes :    usize,
    /// group slots filled, invalid digits included
    pub digits :   usize,
    /// slots filled in the group being built
    pub fill :     usize,
    /// prefix markers skipped
    pub prefixes : usize,
}

impl ScanState {
    /// Input length minus both bytes of every prefix.
    pub fn valid_digit_count(&self) -> usize {
        self.bytes - 2 * self.prefixes
    }

    /// Words the output holds, any trailing 1-3 digits don't make one.
    pub fn word_count(&self) -> usize {
        self.valid_digit_count() / DIGITS_PER_WORD
    }

    /// Output length in bytes.
    pub fn output_len(&self) -> usize {
        2 * self.word_count()
    }

    /// `completed` is the number of groups packed so far
    pub fn is_consistent(&self, completed : usize) -> bool {
        self.digits + self.prefixes == self.bytes
            && 2 * self.prefixes <= self.bytes
            && self.fill < DIGITS_PER_WORD
            && self.fill == self.digits % DIGITS_PER_WORD
            && completed == self.digits / DIGITS_PER_WORD
    }
}

/// Result of a full scan. `words` holds every completed group, which can
/// be more than `state.word_count()` when the input has prefixes.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Scan {
    pub state :   ScanState,
    pub words :   Vec<u16>,
    pub invalid : Vec<InvalidDigit>,
}

pub struct Scanner {
    state :   ScanState,
    group :   Group,
    words :   Vec<u16>,
    invalid : Vec<InvalidDigit>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// `len` is the input length in bytes
    pub fn with_capacity(len : usize) -> Self {
        Scanner{
            state :   Default::default(),
            group :   [0; DIGITS_PER_WORD],
            words :   Vec::with_capacity(len / DIGITS_PER_WORD),
            invalid : Vec::new(),
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn feed(&mut self, symbol : Symbol) {
        match symbol {
            Symbol::Prefix{ .. } => {
                self.push(b'0');
                self.skip_marker();
            },
            Symbol::Char{ at, byte } => {
                if !is_hex_digit(byte) {
                    self.invalid.push(InvalidDigit{ offset : at, byte });
                }
                self.push(byte);
            },
        }

        debug_assert!(
            self.state.is_consistent(self.words.len()),
            "scan state out of sync: {:?} with {} words",
            self.state,
            self.words.len(),
        );
    }

    pub fn finish(self) -> Scan {
        Scan {
            state :   self.state,
            words :   self.words,
            invalid : self.invalid,
        }
    }

    fn push(&mut self, byte : u8) {
        self.group[self.state.fill] = byte;
        self.state.fill += 1;
        self.state.digits += 1;
        self.state.bytes += 1;

        if self.state.fill == DIGITS_PER_WORD {
            self.words.push(pack_group(&self.group));
            self.state.fill = 0;
        }
    }

    fn skip_marker(&mut self) {
        self.state.bytes += 1;
        self.state.prefixes += 1;
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn scan<I>(symbols : I) -> Scan
where
    I : IntoIterator<Item = Symbol>,
{
    let symbols = symbols.into_iter();
    let mut scanner = Scanner::with_capacity(symbols.size_hint().0);

    for symbol in symbols {
        scanner.feed(symbol);
    }

    scanner.finish()
}
