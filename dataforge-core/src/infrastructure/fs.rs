use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The temp file is created in the target's own directory so the final
/// rename never crosses a filesystem boundary; a partially generated
/// dataset file therefore never becomes visible under its real name.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
