use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    error::{InvalidDigit, Result},
    file,
    lexer::{lex, Symbol},
    packer::DIGITS_PER_WORD,
    scanner::{scan, Scan, ScanState},
};

/// A decoded hex listing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Decoded {
    /// the words that make up the output, in order
    pub words :   Vec<u16>,
    /// non fatal, each one left a zero nibble in one of `words`
    pub invalid : Vec<InvalidDigit>,
    pub stats :   ScanState,
}

impl Decoded {
    /// Output bytes, each word most significant byte first.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.output_len());
        for word in self.words.iter() {
            bytes.extend_from_slice(&word.to_be_bytes());
        }

        bytes
    }

    pub fn output_len(&self) -> usize {
        self.stats.output_len()
    }
}

/// Decodes a hex listing held in memory. Invalid digits that land in an
/// output word are logged and collected, unless `config.strict` makes the
/// first one an error. Those in the dropped tail are only logged.
pub fn decode(input : &[u8], config : &Config) -> Result<Decoded> {
    let symbols = lex(input)?;
    let Scan { state, mut words, invalid } = scan(symbols.iter().copied());

    // the `0` of each prefix kept its slot, so the scan can complete
    // groups past the size the input accounts for
    words.truncate(state.word_count());

    let end = emitted_end(&symbols, words.len());
    let (invalid, dropped) : (Vec<_>, Vec<_>) = invalid
        .into_iter()
        .partition(|d| d.offset < end);

    for d in dropped.iter() {
        log::debug!("{} is past the last word, dropped", d);
    }

    for d in invalid.iter() {
        if config.strict {
            return Err((*d).into())
        }
        log::warn!("{}", d);
    }

    log::debug!(
        "scanned {} bytes: {} prefixes, {} valid digits, {} words, {} invalid",
        state.bytes,
        state.prefixes,
        state.valid_digit_count(),
        words.len(),
        invalid.len(),
    );

    Ok(Decoded {
        words,
        invalid,
        stats : state,
    })
}

/// Input offset just past the last byte packed into one of the first
/// `words` words. Every symbol fills exactly one group slot.
fn emitted_end(symbols : &[Symbol], words : usize) -> usize {
    match (words * DIGITS_PER_WORD).checked_sub(1) {
        Some(last) => symbols.get(last).map_or(0, |s| s.at() + 1),
        None => 0,
    }
}

/// Outcome of a file to file run.
#[derive(Debug)]
pub struct Report {
    pub output :  PathBuf,
    pub written : u64,
    pub invalid : Vec<InvalidDigit>,
}

/// Reads `input`, decodes it and writes the result to a new file at
/// `output`. Nothing is written when any step before it fails.
pub fn decode_file(input : &Path, output : &Path, config : &Config) -> Result<Report> {
    let listing = file::read_all(input, config.max_input_size)?;
    log::debug!("read {} bytes from '{}'", listing.len(), input.display());

    let decoded = decode(&listing, config)?;
    let bytes = decoded.to_bytes();

    let written = file::write_exclusive(output, &bytes)?;
    log::info!("{} -> {} ({} bytes)", input.display(), output.display(), written);

    Ok(Report {
        output :  output.to_owned(),
        written,
        invalid : decoded.invalid,
    })
}
