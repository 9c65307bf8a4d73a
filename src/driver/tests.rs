//! Unit tests for the command line and the pipeline driver.

use std::{fs, path::PathBuf};

use super::{
    driver::{run_source, translate_source},
    options::{Options, Stage},
};
use crate::errors::errors::ErrorKind;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hectorc-driver-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn options_for(stage: Stage, dir: &PathBuf) -> Options {
    Options {
        stage,
        output_dir: dir.clone(),
        ..Options::default()
    }
}

#[test]
fn test_default_options() {
    let options = Options::from_args(Vec::<String>::new()).unwrap();

    assert!(!options.debug);
    assert_eq!(options.stage, Stage::Build);
    assert_eq!(options.input, None);
    assert_eq!(options.output_stem(), "program");
}

#[test]
fn test_flags_and_input() {
    let options = Options::from_args(["-d", "-3", "shapes/cube.hc"]).unwrap();

    assert!(options.debug);
    assert_eq!(options.stage, Stage::Check);
    assert_eq!(options.input, Some(PathBuf::from("shapes/cube.hc")));
    assert_eq!(options.output_stem(), "cube");
    assert_eq!(options.c_file(), PathBuf::from("./cube.c"));
    assert_eq!(options.executable(), PathBuf::from("./cube"));
}

#[test]
fn test_earliest_stage_flag_wins() {
    let options = Options::from_args(["-4", "-2", "-3"]).unwrap();
    assert_eq!(options.stage, Stage::Parse);
}

#[test]
fn test_usage_errors() {
    let error = Options::from_args(["-x"]).unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownFlag");
    assert_eq!(error.kind(), ErrorKind::Driver);
    assert_eq!(error.to_string(), "Unknown flag -x");

    let error = Options::from_args(["a.hc", "b.hc"]).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedArgument");
}

#[test]
fn test_translate_source() {
    let output = translate_source("int x = 3;\nprint x * 2;").unwrap();

    assert!(output.contains("static int hc_x;"));
    assert!(output.contains("  hc_x = 3;\n"));
    assert!(output.contains("  i32_print((hc_x * 2));\n"));
}

#[test]
fn test_translate_source_reports_every_semantic_error() {
    let diagnostics = translate_source("print a;\nprint b;").unwrap_err();

    let messages: Vec<String> = diagnostics.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Line 1, column 7: Unknown symbol a",
            "Line 2, column 7: Unknown symbol b",
        ]
    );
}

#[test]
fn test_translate_source_stops_at_lexical_error() {
    let diagnostics = translate_source("int x = 3 $ 4;").unwrap_err();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_kind(ErrorKind::Lexical));
}

#[test]
fn test_lex_stage_dumps_tokens() {
    let dir = scratch_dir("lex");
    let options = Options {
        debug: true,
        ..options_for(Stage::Lex, &dir)
    };

    let mut dump = Vec::new();
    let diagnostics = run_source(&options, "int x;", &mut dump);
    let dump = String::from_utf8(dump).unwrap();

    assert!(diagnostics.is_empty());
    assert!(dump.contains("1:1 Int ()"));
    assert!(dump.contains("1:5 Identifier (x)"));
    assert!(!dir.join("program.c").exists());
}

#[test]
fn test_check_stage_dumps_symbols_and_annotated_tree() {
    let dir = scratch_dir("check");
    let options = Options {
        debug: true,
        ..options_for(Stage::Check, &dir)
    };

    let mut dump = Vec::new();
    let diagnostics = run_source(&options, "point p;\np.x = 1;", &mut dump);
    let dump = String::from_utf8(dump).unwrap();

    assert!(diagnostics.is_empty());
    assert!(dump.contains("===== Global Symbol Table =====\np\tVAR\tPOINT"));
    assert!(dump.contains("..Assign - INT - Lvalue"));
    assert!(!dir.join("program.c").exists());
}

#[test]
fn test_translate_stage_writes_c_file() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("translate");
    let options = options_for(Stage::Translate, &dir);

    let diagnostics = run_source(&options, "vector v = (1, 2, 3);\nprint -v;", &mut Vec::new());

    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    let generated = fs::read_to_string(dir.join("program.c")).unwrap();
    assert!(generated.contains("static vi32 hc_v;"));
    assert!(generated.contains("  vi32_print_vector(vi32_neg(hc_v));"));
}

#[test]
fn test_semantic_errors_skip_translation() {
    let dir = scratch_dir("semantic");
    let options = options_for(Stage::Translate, &dir);

    let diagnostics = run_source(&options, "matrix m;\nint x = m;", &mut Vec::new());

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_kind(ErrorKind::Semantic));
    assert!(!dir.join("program.c").exists());
}

#[test]
fn test_missing_compiler_is_a_build_error() {
    let dir = scratch_dir("nocc");
    let options = Options {
        compiler: "hectorc-no-such-compiler".to_string(),
        ..options_for(Stage::Build, &dir)
    };

    let diagnostics = run_source(&options, "int x;", &mut Vec::new());

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_kind(ErrorKind::Build));
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "C compiler hectorc-no-such-compiler is not available"
    );
    assert!(dir.join("program.c").exists());
    assert!(dir.join("hectorlib.h").exists());
}

#[test]
fn test_runtime_stem_is_rejected_as_output_name() {
    let dir = scratch_dir("reserved");
    let options = Options {
        input: Some(PathBuf::from("lib/hectorlib.hc")),
        ..options_for(Stage::Build, &dir)
    };

    let diagnostics = run_source(&options, "int a = 1;\nprint a;", &mut Vec::new());

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_kind(ErrorKind::Driver));
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "Output name hectorlib is reserved for the runtime library"
    );
    assert!(!dir.join("hectorlib.c").exists());

    let options = Options {
        input: Some(PathBuf::from("hectorlib.hc")),
        ..options_for(Stage::Check, &dir)
    };
    assert!(run_source(&options, "int a;", &mut Vec::new()).is_empty());
}

#[test]
fn test_output_stem_check_ignores_case() {
    let options = Options::from_args(["HectorLib.hc"]).unwrap();
    assert_eq!(
        options.check_output_stem().unwrap_err().get_error_name(),
        "ReservedOutputName"
    );

    let options = Options::from_args(["hectorlib2.hc"]).unwrap();
    assert!(options.check_output_stem().is_ok());
}
