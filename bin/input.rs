//! Reading source files.

use std::{fs::File, io::Read, path::Path};

use crate::Status;

/// Read the file at `path` as SPL source.
///
/// Problems are reported to the user here, so callers only need the
/// [`Status`] to give up with.
pub fn read_source(path: &Path) -> Result<String, Status> {
    let mut buf: Vec<u8> = Vec::new();

    if let Err(e) =
        File::open(path).and_then(|mut file| file.read_to_end(&mut buf))
    {
        eprintln!("Error: cannot read '{}': {}", path.display(), e);
        return Err(Status::Unreadable);
    }

    log::debug!("read {} bytes from {}", buf.len(), path.display());

    match syntax::verify_utf8(&buf) {
        Ok(source) => Ok(source.to_owned()),
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            Err(Status::Diagnostics)
        }
    }
}
