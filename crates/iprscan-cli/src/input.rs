//! Command-line input helpers

use std::path::Path;
use tracing::{debug, warn};

/// Resolve a sequence argument.
///
/// A readable file is loaded (FASTA or raw sequence, invalid UTF-8 replaced);
/// anything else is sent as given, which lets users pass a literal sequence
/// or a database identifier such as `UNIPROT:KKCC1_HUMAN`. A file that exists
/// but cannot be read is also sent as given.
pub fn load_sequence(arg: &str) -> String {
    let path = Path::new(arg);

    if path.is_file() {
        match std::fs::read(path) {
            Ok(bytes) => {
                debug!(path = %path.display(), size = bytes.len(), "Read sequence file");
                return String::from_utf8_lossy(&bytes).into_owned();
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Sequence file not readable, sending argument as given");
            },
        }
    }

    arg.to_string()
}

/// Split a signature-method list on spaces, tabs, newlines, commas and
/// semicolons.
pub fn split_applications(list: &str) -> Vec<String> {
    list.split([' ', '\t', '\n', ',', ';'])
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
