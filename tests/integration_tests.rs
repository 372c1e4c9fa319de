//! Integration tests using test data fixtures
//!
//! Each file in testdata/scripts/ holds a log, a `---` separator line and the
//! expected PlantUML script. Each file in testdata/invalid/ is a log whose
//! generation must fail. Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

use seqtrace::{Error, Options, RenderOutcome};

/// Get the path to the script fixture directory
fn get_scripts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/scripts")
}

/// Get the path to the failing fixture directory
fn get_invalid_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/invalid")
}

/// Parse a test file into (input, expected_output)
fn parse_test_file(content: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = content.splitn(2, "---\n").collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].to_string(), parts[1].trim_end().to_string()))
}

/// Run a fixture from the scripts directory
fn run_script_test(test_name: &str) {
    let test_file = get_scripts_dir().join(format!("{}.txt", test_name));
    let content = fs::read_to_string(&test_file)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", test_file, e));

    let (input, expected) = parse_test_file(&content)
        .unwrap_or_else(|| panic!("Failed to parse test file: {:?}", test_file));

    let actual = seqtrace::render_log(&input)
        .unwrap_or_else(|e| panic!("Failed to generate {}: {}", test_name, e));

    if expected != actual {
        eprintln!("=== Test: {} ===", test_name);
        eprintln!("Input:\n{}", input);
        eprintln!("\n--- Expected ---");
        eprintln!("{}", expected);
        eprintln!("\n--- Actual ---");
        eprintln!("{}", actual);
        panic!("Output mismatch for test: {}", test_name);
    }
}

/// Run a fixture from the invalid directory and return the error
fn run_invalid_test(test_name: &str) -> Error {
    let test_file = get_invalid_dir().join(format!("{}.jsonl", test_name));
    let events = seqtrace::parse_log_file(&test_file)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", test_file, e));
    assert!(!events.is_empty(), "fixture {} has no events", test_name);

    match seqtrace::generate_plantuml_script(&events) {
        Ok(script) => panic!("Expected {} to fail, got:\n{}", test_name, script),
        Err(e) => e,
    }
}

/// Macro to generate fixture test functions
macro_rules! script_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            run_script_test(stringify!($name));
        }
    };
}

/// Macro to generate failing fixture test functions
macro_rules! invalid_test {
    ($name:ident, $pattern:pat) => {
        paste::paste! {
            #[test]
            fn [<rejects_ $name>]() {
                let err = run_invalid_test(stringify!($name));
                assert!(matches!(err, $pattern), "unexpected error: {:?}", err);
            }
        }
    };
}

// =============================================================================
// Script fixtures
// =============================================================================

script_test!(empty_log);
script_test!(message_and_reply);
script_test!(noise_lines);
script_test!(other_events_declare_participants);
script_test!(escaped_message);
script_test!(unknown_events_only);
script_test!(duplicate_events);

// =============================================================================
// Failing fixtures
// =============================================================================

invalid_test!(missing_message, Error::MissingField { .. });
invalid_test!(missing_reply_func_name, Error::MissingField { .. });
invalid_test!(missing_json_state, Error::MissingField { .. });
invalid_test!(missing_source_name, Error::MissingField { .. });
invalid_test!(bad_json_state, Error::InvalidState { .. });
invalid_test!(non_string_message, Error::InvalidField { .. });

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn test_run_writes_script_without_image() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("runtime.log");
    fs::copy(get_scripts_dir().join("message_and_reply.txt"), &log).unwrap();

    let options = Options {
        output_script: dir.path().join("out.puml"),
        output_image: dir.path().join("out.png"),
        skip_image: true,
        ..Default::default()
    };
    let summary = seqtrace::run(&log, &options).unwrap();

    // The separator and expected script are not JSON, so only two events survive
    assert_eq!(summary.events, 2);
    assert_eq!(summary.image, None);
    let written = fs::read_to_string(dir.path().join("out.puml")).unwrap();
    assert_eq!(written, summary.script);
    assert!(written.starts_with("@startuml\nparticipant B\n"));
    assert!(written.ends_with("B -> B: handle\n@enduml"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn test_run_with_missing_local_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("runtime.log");
    fs::write(
        &log,
        r#"{"event_name":"reply_func_executed","source_name":"B","json_state":"{\"reply_func_name\":\"handle\"}"}"#,
    )
    .unwrap();

    let options = Options {
        output_script: dir.path().join("out.puml"),
        output_image: dir.path().join("out.png"),
        use_local_renderer: true,
        plantuml_bin: "seqtrace-no-such-plantuml-binary".to_string(),
        ..Default::default()
    };
    let summary = seqtrace::run(&log, &options).unwrap();

    assert_eq!(
        summary.image,
        Some((dir.path().join("out.png"), RenderOutcome::RendererMissing))
    );
    assert!(dir.path().join("out.puml").exists());
}

#[test]
fn test_run_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        output_script: dir.path().join("out.puml"),
        skip_image: true,
        ..Default::default()
    };
    let err = seqtrace::run(dir.path().join("missing.log"), &options).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!dir.path().join("out.puml").exists());
}

#[test]
fn test_run_does_not_write_script_on_malformed_event() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        output_script: dir.path().join("out.puml"),
        skip_image: true,
        ..Default::default()
    };
    let err = seqtrace::run(get_invalid_dir().join("missing_message.jsonl"), &options).unwrap_err();
    assert!(matches!(err, Error::MissingField { .. }));
    assert!(!dir.path().join("out.puml").exists());
}

#[test]
fn test_run_propagates_remote_render_failure() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        output_script: dir.path().join("out.puml"),
        output_image: dir.path().join("out.png"),
        // Nothing listens on port 1
        server_url: "http://127.0.0.1:1/".to_string(),
        ..Default::default()
    };
    let err = seqtrace::run(get_scripts_dir().join("message_and_reply.txt"), &options).unwrap_err();

    assert!(matches!(err, Error::Http(_)), "unexpected error: {:?}", err);
    assert!(dir.path().join("out.puml").exists());
    assert!(!dir.path().join("out.png").exists());
}
