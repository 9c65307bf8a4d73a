//! Native build of a translated program.

use std::{
    fs,
    io::ErrorKind,
    path::Path,
    process::Command,
};

use log::{debug, info};

use crate::{
    compiler::runtime::{RUNTIME_HEADER, RUNTIME_HEADER_NAME, RUNTIME_SOURCE, RUNTIME_SOURCE_NAME},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Drops `hectorlib.h` and `hectorlib.c` into `dir`.
pub fn write_runtime(dir: &Path) -> Result<(), Error> {
    for (name, contents) in [
        (RUNTIME_HEADER_NAME, RUNTIME_HEADER),
        (RUNTIME_SOURCE_NAME, RUNTIME_SOURCE),
    ] {
        let path = dir.join(name);
        fs::write(&path, contents).map_err(|e| {
            Error::new(
                ErrorImpl::FileError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                },
                Position::null(),
            )
        })?;
    }
    Ok(())
}

/// Compiles `<stem>.c` in `dir` against the runtime into the executable
/// `<stem>`, running `compiler -Wall -o <stem> hectorlib.c <stem>.c`.
pub fn build(compiler: &str, dir: &Path, stem: &str) -> Result<(), Error> {
    write_runtime(dir)?;

    let source = format!("{}.c", stem);
    info!("building {} with {}", stem, compiler);
    debug!(
        "{} -Wall -o {} {} {} (in {})",
        compiler,
        stem,
        RUNTIME_SOURCE_NAME,
        source,
        dir.display()
    );

    let output = Command::new(compiler)
        .current_dir(dir)
        .args(["-Wall", "-o", stem, RUNTIME_SOURCE_NAME, &source])
        .output()
        .map_err(|e| {
            let error = match e.kind() {
                ErrorKind::NotFound => ErrorImpl::CompilerUnavailable {
                    compiler: compiler.to_string(),
                },
                _ => ErrorImpl::BuildFailed {
                    message: e.to_string(),
                },
            };
            Error::new(error, Position::null())
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("{} exited with {}", compiler, output.status),
            details => format!("{} exited with {}\n{}", compiler, output.status, details),
        };
        return Err(Error::new(
            ErrorImpl::BuildFailed { message },
            Position::null(),
        ));
    }

    Ok(())
}

/// Whether `compiler` can be launched at all.
pub fn compiler_available(compiler: &str) -> bool {
    Command::new(compiler)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
