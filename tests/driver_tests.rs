//! File driver tests against a temporary workspace
use std::fs;
use std::path::Path;

use gcode_translate::config::{Args, Config, FileConfig};
use gcode_translate::driver;
use clap::Parser;

fn config_for(dir: &Path, extra: &[&str]) -> Config {
    let input_dir = dir.join("gcode");
    let output_dir = dir.join("generated");
    let mut argv = vec![
        "gcode-translate".to_string(),
        "--input-dir".to_string(),
        input_dir.display().to_string(),
        "--output-dir".to_string(),
        output_dir.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));

    Config::from_parts(Args::parse_from(argv), FileConfig::default()).expect("config")
}

fn write_source(dir: &Path, name: &str, content: &str) {
    let input_dir = dir.join("gcode");
    fs::create_dir_all(&input_dir).expect("create input dir");
    fs::write(input_dir.join(format!("{}.gcode", name)), content).expect("write source");
}

#[test]
fn test_micro_fab_run_writes_convention_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_source(dir.path(), "cube", ";FLAVOR:Marlin\nG28\nG1 X1 Y2\nG1 Z3\n");

    let config = config_for(dir.path(), &["-f", "cube.gcode"]);
    let result = driver::run(&config).expect("run");

    let written =
        fs::read_to_string(dir.path().join("generated").join("cube_2PP.gcode")).expect("output");
    assert_eq!(written, result.text);
    assert_eq!(
        written,
        "Automatically generated 2PP code\nG28 X0 Y0 Z0\nG1 X1 Y2 Z0\nG1 X1 Y2 Z3\n"
    );
}

#[test]
fn test_stage_run_with_explicit_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_source(dir.path(), "line", "G21\nG1 X4 Y4\n");
    let output = dir.path().join("nested").join("program.txt");

    let config = config_for(
        dir.path(),
        &["-f", "line", "-t", "1", "-o", &output.display().to_string()],
    );
    driver::run(&config).expect("run");

    let written = fs::read_to_string(&output).expect("output");
    assert!(written.contains("LINEAR X4*$SCALE Y4*$SCALE F0.200*$VEL\n"));
    assert!(!written.contains("G21"));
}

#[test]
fn test_inverted_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_source(dir.path(), "layers", "G1 Z1\nG1 Z2\n");

    let config = config_for(dir.path(), &["-f", "layers", "-i"]);
    driver::run(&config).expect("run");

    let written =
        fs::read_to_string(dir.path().join("generated").join("layers_2PP.gcode")).expect("output");
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(lines[0], "G1 X0 Y0 Z2");
    assert_eq!(lines[1], "G1 X0 Y0 Z1");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_missing_source_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_for(dir.path(), &["-f", "absent"]);

    let err = driver::run(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
