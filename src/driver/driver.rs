//! Pipeline orchestration.
//!
//! Runs lexing, parsing, semantic analysis, translation and the native
//! build in order, stopping after the requested stage or as soon as a phase
//! reports errors.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use log::{debug, info, warn};

use crate::{
    ast::{ast::NodeRef, printer::dump},
    compiler::compiler::compile,
    errors::errors::{Diagnostics, Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{type_checker::type_check, typed_ast::TypedProgram},
    Position,
};

use super::{
    options::{Options, Stage},
    toolchain::build,
};

/// Runs the compiler as configured by `options`, printing debug dumps to
/// standard output. Returns every diagnostic recorded along the way.
pub fn run(options: &Options) -> Diagnostics {
    let source = match read_source(options.input.as_deref()) {
        Ok(source) => source,
        Err(error) => return Diagnostics::from(error),
    };

    let stdout = io::stdout();
    let mut dump_out = stdout.lock();
    run_source(options, &source, &mut dump_out)
}

/// Same as [`run`] on an already loaded source; dumps go to `dump_out`.
pub fn run_source<W: Write>(options: &Options, source: &str, dump_out: &mut W) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    info!("lexical analysis");
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            diagnostics.push(error);
            return diagnostics;
        }
    };
    if options.debug && options.stage == Stage::Lex {
        for token in &tokens {
            show(dump_out, &token.debug());
        }
    }
    if options.stage == Stage::Lex {
        return diagnostics;
    }

    info!("syntactic analysis");
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            diagnostics.push(error);
            return diagnostics;
        }
    };
    if options.debug {
        show(dump_out, dump(NodeRef::Program(&program)).trim_end());
    }
    if options.stage == Stage::Parse {
        return diagnostics;
    }

    info!("semantic analysis");
    let (checker, typed) = type_check(&program);
    if options.debug {
        show(dump_out, checker.symbols.dump(checker.scope).trim_end());
        show(dump_out, dump(NodeRef::Program(&typed)).trim_end());
    }
    diagnostics.extend(checker.diagnostics);
    if diagnostics.has_kind(ErrorKind::Semantic) || options.stage == Stage::Check {
        return diagnostics;
    }

    if let Err(error) = options.check_output_stem() {
        diagnostics.push(error);
        return diagnostics;
    }

    info!("translating program to C");
    let c_file = options.c_file();
    match translate_to_file(&typed, &c_file) {
        Ok(translation) => diagnostics.extend(translation),
        Err(error) => diagnostics.push(error),
    }
    if diagnostics.has_errors() || options.stage == Stage::Translate {
        return diagnostics;
    }

    info!("building executable");
    if let Err(error) = build(&options.compiler, &options.output_dir, &options.output_stem()) {
        diagnostics.push(error);
    }

    diagnostics
}

/// Lexes, parses, checks and translates `source` entirely in memory.
pub fn translate_source(source: &str) -> Result<String, Diagnostics> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;

    let (checker, typed) = type_check(&program);
    if checker.diagnostics.has_errors() {
        return Err(checker.diagnostics);
    }

    let mut out = Vec::new();
    let diagnostics = compile(&typed, &mut out)?;
    if diagnostics.has_errors() {
        return Err(diagnostics);
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn translate_to_file(typed: &TypedProgram, path: &Path) -> Result<Diagnostics, Error> {
    debug!("writing {}", path.display());
    let file = File::create(path).map_err(|e| file_error(path, e))?;
    compile(typed, BufWriter::new(file))
}

fn read_source(input: Option<&Path>) -> Result<String, Error> {
    match input {
        Some(path) => {
            debug!("reading from file: {}", path.display());
            fs::read_to_string(path).map_err(|e| file_error(path, e))
        }
        None => {
            debug!("reading from standard input");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| file_error(Path::new("<stdin>"), e))?;
            Ok(source)
        }
    }
}

fn file_error(path: &Path, error: io::Error) -> Error {
    Error::new(
        ErrorImpl::FileError {
            path: path.display().to_string(),
            message: error.to_string(),
        },
        Position::null(),
    )
}

fn show<W: Write>(out: &mut W, text: &str) {
    if let Err(error) = writeln!(out, "{}", text) {
        warn!("could not write debug output: {}", error);
    }
}
