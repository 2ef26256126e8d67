use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

/// Writes `data` to `path`, replacing any existing file only once all of it has been written.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path).with_context(|| format!("opening {path:?}"))?;
    file.write_all(data)
        .with_context(|| format!("writing {} bytes to {path:?}", data.len()))?;
    file.commit()
        .with_context(|| format!("committing {path:?}"))?;
    log::info!("Wrote {} bytes to {path:?}.", data.len());
    Ok(())
}
