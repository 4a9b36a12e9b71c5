//! Decodes text listings of hex digits into raw binary, every four digits
//! becoming one big endian 16 bit word.

pub mod config;
pub mod decode;
pub mod digit;
pub mod error;
pub mod file;
pub mod lexer;
pub mod packer;
pub mod scanner;

pub use config::{Config, DEFAULT_MAX_INPUT_SIZE};
pub use decode::{decode, decode_file, Decoded, Report};
pub use error::{Error, FileError, InvalidDigit, Result};
