//! Main compiler module.
//!
//! This module contains the Compiler structure, which streams the C
//! translation of a checked program into any `Write` sink. The output always
//! has the same shape: includes, static declarations, `main`, variable
//! initialisations, statements, and the closing return.

use std::io::Write;

use log::{debug, info};

use crate::{
    errors::errors::{Diagnostics, Error, ErrorImpl},
    type_checker::typed_ast::TypedProgram,
    Position,
};

use super::{
    runtime::RUNTIME_HEADER_NAME,
    stmt::{gen_declaration, gen_initialization, gen_statement},
};

const INDENT: &str = "  ";

/// Holds the output sink and the translation errors collected so far.
///
/// Translation errors never stop emission: the offending statement is
/// skipped and the rest of the program is still written. Any such error
/// makes the whole output unusable, so callers must check the diagnostics
/// before building it.
pub struct Compiler<W: Write> {
    out: W,
    pub diagnostics: Diagnostics,
}

impl<W: Write> Compiler<W> {
    pub fn new(out: W) -> Self {
        Compiler {
            out,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Writes `text` on its own line, indented `depth` levels.
    pub fn emit_line(&mut self, depth: usize, text: &str) -> Result<(), Error> {
        writeln!(self.out, "{}{}", INDENT.repeat(depth), text).map_err(output_failed)
    }

    pub fn report(&mut self, error: Error) {
        debug!("translation error: {}", error);
        self.diagnostics.push(error);
    }

    fn compile_program(&mut self, program: &TypedProgram) -> Result<(), Error> {
        self.emit_line(0, "#include <stdio.h>")?;
        self.emit_line(0, "#include <stdlib.h>")?;
        self.emit_line(0, &format!("#include \"{}\"", RUNTIME_HEADER_NAME))?;
        self.emit_line(0, "")?;

        for decl in program.declarations() {
            gen_declaration(self, decl)?;
        }

        self.emit_line(0, "")?;
        self.emit_line(0, "int main (int argc, char **argv) {")?;

        for decl in program.declarations() {
            gen_initialization(self, decl)?;
        }

        for statement in program.body.iter() {
            gen_statement(self, statement)?;
        }

        self.emit_line(1, "return EXIT_SUCCESS;")?;
        self.emit_line(0, "}")?;

        self.out.flush().map_err(output_failed)
    }
}

fn output_failed(error: std::io::Error) -> Error {
    Error::new(
        ErrorImpl::OutputFailed {
            message: error.to_string(),
        },
        Position::null(),
    )
}

/// Translates `program` into C, writing it to `out`.
///
/// Returns the translation diagnostics (empty on success). A failure of the
/// sink itself is returned as `Err`.
pub fn compile<W: Write>(program: &TypedProgram, out: W) -> Result<Diagnostics, Error> {
    let mut compiler = Compiler::new(out);
    compiler.compile_program(program)?;

    info!(
        "translation finished with {} error(s)",
        compiler.diagnostics.len()
    );
    Ok(compiler.diagnostics)
}
