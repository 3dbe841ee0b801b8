//! Input file parsers
//!
//! The ingest pipeline reads two headerless CSV files: the domain annotation
//! set and the protein sequence set. Files ending in `.gz` are decompressed
//! transparently.

pub mod annotations;
pub mod sequences;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Open an input file, decompressing gzip transparently based on extension
pub(crate) fn open_input(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}
