use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Write},
    path::Path,
};

use crate::error::FileError;

/// Reads the whole file, rejecting missing, empty and oversized ones
/// before anything is decoded.
pub fn read_all(path : &Path, max_size : usize) -> Result<Vec<u8>, FileError> {
    let unreadable = |source : io::Error| FileError::Unreadable {
        path : path.to_owned(),
        source,
    };

    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FileError::NotFound{ path : path.to_owned() },
        _ => unreadable(e),
    })?;

    if meta.is_dir() {
        return Err(unreadable(io::Error::new(io::ErrorKind::Other, "is a directory")))
    }

    check_size(path, meta.len(), max_size)?;

    let file = File::open(path).map_err(unreadable)?;

    // one byte over the limit is enough to tell the file grew
    let mut buf = Vec::with_capacity(meta.len() as usize);
    file.take((max_size as u64).saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(unreadable)?;

    check_size(path, buf.len() as u64, max_size)?;

    Ok(buf)
}

fn check_size(path : &Path, size : u64, max_size : usize) -> Result<(), FileError> {
    if size == 0 {
        return Err(FileError::EmptyFile{ path : path.to_owned() })
    }

    if size > max_size as u64 {
        return Err(FileError::Oversize{
            path : path.to_owned(),
            size,
            max :  max_size,
        })
    }

    Ok(())
}

/// Creates `path` and writes `bytes` to it, never touching a file that is
/// already there. Returns the size of the file on disk. A file this call
/// created is removed again when the write does not complete.
pub fn write_exclusive(path : &Path, bytes : &[u8]) -> Result<u64, FileError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => FileError::AlreadyExists{ path : path.to_owned() },
            _ => FileError::Unwritable{ path : path.to_owned(), source : e },
        })?;

    remove_on_error(path, write_created(file, path, bytes))
}

fn remove_on_error<T>(path : &Path, res : Result<T, FileError>) -> Result<T, FileError> {
    if res.is_err() {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("cannot remove partial file '{}': {}", path.display(), e);
        }
    }

    res
}

fn write_created(mut file : File, path : &Path, bytes : &[u8]) -> Result<u64, FileError> {
    let unwritable = |source : io::Error| FileError::Unwritable {
        path : path.to_owned(),
        source,
    };

    file.write_all(bytes).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;

    let written = file.metadata().map_err(unwritable)?.len();
    if written != bytes.len() as u64 {
        return Err(FileError::ShortWrite{
            path :     path.to_owned(),
            written,
            expected : bytes.len(),
        })
    }

    Ok(written)
}
