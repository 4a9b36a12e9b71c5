/// One unit of a hex listing, `at` is the byte offset in the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `0x` or `0X`, the `0` at `at` and the marker at `at + 1`
    Prefix{ at : usize },
    /// any other byte, valid digit or not
    Char{ at : usize, byte : u8 },
}

impl Symbol {
    /// offset of the first byte
    pub fn at(&self) -> usize {
        match self {
            Symbol::Prefix{ at } | Symbol::Char{ at, .. } => *at,
        }
    }

    /// number of input bytes the symbol covers
    pub fn width(&self) -> usize {
        match self {
            Symbol::Prefix{ .. } => 2,
            Symbol::Char{ .. } => 1,
        }
    }
}

pub type LexError = peg::error::ParseError<usize>;

pub fn lex(input : &[u8]) -> Result<Vec<Symbol>, LexError> {
    listing::symbols(input)
}

peg::parser!{grammar listing() for [u8] {

    pub rule symbols() -> Vec<Symbol>
        = s:symbol()* { s }

    // a marker is only ever matched together with the `0` in front of it,
    // a leading `x` falls through to a plain char
    rule symbol() -> Symbol
        = at:position!() [b'0'] [b'x' | b'X'] {
            Symbol::Prefix{ at }
        } / at:position!() byte:[_] {
            Symbol::Char{ at, byte }
        }

}}
