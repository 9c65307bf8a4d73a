use std::{env, path::PathBuf};

use crate::{
    compiler::runtime::RUNTIME_STEM,
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Output name used when the source comes from standard input.
pub const DEFAULT_STEM: &str = "program";
pub const DEFAULT_COMPILER: &str = "cc";

pub const USAGE: &str = "usage: hectorc [-d] [-1|-2|-3|-4] [FILE]";

/// The last pipeline phase to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Lex,
    Parse,
    Check,
    Translate,
    Build,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Dump tokens, trees and the symbol table, and log at debug level.
    pub debug: bool,
    pub stage: Stage,
    /// `None` reads standard input.
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// C compiler used for the build phase.
    pub compiler: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            debug: false,
            stage: Stage::Build,
            input: None,
            output_dir: PathBuf::from("."),
            compiler: DEFAULT_COMPILER.to_string(),
        }
    }
}

impl Options {
    /// Parses the command line (without the program name). The C compiler
    /// is taken from `$CC` when set.
    ///
    /// When several stage flags are given, the earliest stage wins.
    pub fn from_args<I, S>(args: I) -> Result<Options, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        if let Ok(compiler) = env::var("CC") {
            if !compiler.trim().is_empty() {
                options.compiler = compiler;
            }
        }

        for arg in args.into_iter().map(Into::into) {
            let stage = match arg.as_str() {
                "-d" => {
                    options.debug = true;
                    continue;
                }
                "-1" => Stage::Lex,
                "-2" => Stage::Parse,
                "-3" => Stage::Check,
                "-4" => Stage::Translate,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(usage_error(ErrorImpl::UnknownFlag {
                        flag: flag.to_string(),
                    }))
                }
                _ => {
                    if options.input.is_some() {
                        return Err(usage_error(ErrorImpl::UnexpectedArgument {
                            argument: arg.clone(),
                        }));
                    }
                    options.input = Some(PathBuf::from(&arg));
                    continue;
                }
            };

            options.stage = options.stage.min(stage);
        }

        Ok(options)
    }

    /// Base name of the generated files: the input's file stem, or
    /// `program` for standard input.
    pub fn output_stem(&self) -> String {
        self.input
            .as_ref()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| DEFAULT_STEM.to_string())
    }

    /// Fails when the generated files would overwrite the runtime library.
    pub fn check_output_stem(&self) -> Result<(), Error> {
        let stem = self.output_stem();
        if stem.eq_ignore_ascii_case(RUNTIME_STEM) {
            return Err(usage_error(ErrorImpl::ReservedOutputName { name: stem }));
        }
        Ok(())
    }

    pub fn c_file(&self) -> PathBuf {
        self.output_dir.join(format!("{}.c", self.output_stem()))
    }

    pub fn executable(&self) -> PathBuf {
        self.output_dir.join(self.output_stem())
    }
}

fn usage_error(error: ErrorImpl) -> Error {
    Error::new(error, Position::null())
}
