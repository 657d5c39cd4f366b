use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::tsplib_reader::RawProblem;

pub(crate) mod tsplib_reader;
pub(crate) mod tsplib_writer;

/// Reads the keywords and sections of a TSPLIB file; the handle is closed
/// before returning.
pub(crate) fn read_raw_problem(path: &Path) -> Result<RawProblem> {
    let f = File::open(path).map_err(|err| Error::open(path, err))?;
    let file = BufReader::new(&f);
    log::debug!("reading {}", path.display());
    RawProblem::read(path, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join(format!("tspwplib-missing-{}.tsp", std::process::id()));
        assert!(matches!(read_raw_problem(&path), Err(Error::NotFound { .. })));
    }

    #[test]
    fn directory_is_an_io_error() {
        assert!(matches!(
            read_raw_problem(&std::env::temp_dir()),
            Err(Error::Io { .. })
        ));
    }
}
