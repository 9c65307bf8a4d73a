//! Command-line driver.
//!
//! Parses the command line, runs the pipeline up to the requested stage and
//! builds the translated program with the system C compiler.

pub mod driver;
pub mod options;
pub mod toolchain;

#[cfg(test)]
mod tests;
