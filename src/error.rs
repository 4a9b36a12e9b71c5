use std::{
    fmt,
    io,
    path::PathBuf,
};

use thiserror::Error;

use crate::{
    digit::display_byte,
    lexer::LexError,
};

/// A byte that is neither a hex digit nor part of a `0x` prefix. Decoding
/// carries on, the byte takes a zero nibble.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct InvalidDigit {
    pub offset : usize,
    pub byte :   u8,
}

impl fmt::Display for InvalidDigit {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hexadecimal digit '{}' at offset {}",
            display_byte(self.byte),
            self.offset,
        )
    }
}

impl std::error::Error for InvalidDigit {}

/// Failures of the file adapter, all of them end the run.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file '{}' cannot be accessed, does it exist?", .path.display())]
    NotFound {
        path : PathBuf,
    },

    #[error("file '{}' cannot be opened, do you have read permissions?", .path.display())]
    Unreadable {
        path :   PathBuf,
        source : io::Error,
    },

    #[error("file '{}' has 0 bytes", .path.display())]
    EmptyFile {
        path : PathBuf,
    },

    #[error("file '{}' is too big ({size} bytes), max size allowed is {max}", .path.display())]
    Oversize {
        path : PathBuf,
        size : u64,
        max :  usize,
    },

    #[error("file '{}' already exists, delete/move it or choose a different filename", .path.display())]
    AlreadyExists {
        path : PathBuf,
    },

    #[error("file '{}' cannot be opened, do you have write permissions?", .path.display())]
    Unwritable {
        path :   PathBuf,
        source : io::Error,
    },

    #[error("file '{}' holds {written} bytes, expected {expected}", .path.display())]
    ShortWrite {
        path :     PathBuf,
        written :  u64,
        expected : usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    File(#[from] FileError),

    /// only returned when invalid digits are escalated
    #[error(transparent)]
    InvalidDigit(#[from] InvalidDigit),

    #[error("cannot split input into symbols: {0}")]
    Lex(#[from] LexError),
}

pub type Result<T> = std::result::Result<T, Error>;
