use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// The name used in diagnostics for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Read the file at `path`, or standard input if the path is `-`.
pub fn read_file(path: &Path) -> anyhow::Result<String> {
    let mut buf = Vec::new();

    if path == Path::new("-") {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }

    Ok(String::from_utf8(buf)?)
}

/// The name to show for `path` in diagnostics.
pub fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        STDIN_NAME.to_string()
    } else {
        path.display().to_string()
    }
}
