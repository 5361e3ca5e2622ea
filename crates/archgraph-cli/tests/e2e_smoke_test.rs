use std::{fs, path::PathBuf};

use tempfile::tempdir;

use archgraph_cli::{Args, OutputFormat, run};

/// Workspace `demos/` directory
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &PathBuf, output: &PathBuf, format: OutputFormat) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        format,
        config: None,
        strategy: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_json_files(demos_dir());
    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let stem = demo.file_stem().unwrap().to_string_lossy().to_string();

        for format in [OutputFormat::Json, OutputFormat::Svg] {
            let output = temp_dir
                .path()
                .join(format!("{stem}.{}", format.extension()));

            if let Err(e) = run(&args(demo, &output, format)) {
                failed.push((demo.clone(), format, e));
            } else if !output.exists() {
                panic!("{} produced no output", demo.display());
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, format, err) in &failed {
            eprintln!("  - {} ({format:?}): {err}", path.display());
        }
        panic!("{} demo run(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_render_model_contents() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("arch.json");
    let output = temp_dir.path().join("model.json");
    fs::write(
        &input,
        r#"{"architecture": [{"name": "A", "uses": ["B"]}, {"name": "B", "uses": []}]}"#,
    )
    .unwrap();

    let mut args = args(&input, &output, OutputFormat::Json);
    args.strategy = Some("grid".parse().unwrap());
    run(&args).expect("run should succeed");

    let model: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(model["edges"][0]["id"], "A-B");
    assert_eq!(model["nodes"][0]["position"]["x"], 100.0);
    assert_eq!(model["nodes"][1]["position"]["x"], 400.0);
    assert_eq!(model["nodes"][1]["position"]["y"], 100.0);
}

#[test]
fn e2e_config_file_is_applied() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("arch.json");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("model.json");
    fs::write(&input, r#"{"architecture": [{"name": "A"}, {"name": "B"}]}"#).unwrap();
    fs::write(
        &config,
        "[layout]\nstrategy = \"grid\"\ncolumns_per_row = 1\nstart_x = 0.0\nstart_y = 0.0\n",
    )
    .unwrap();

    let mut args = args(&input, &output, OutputFormat::Json);
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).unwrap();

    let model: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(model["nodes"][1]["position"]["x"], 0.0);
    assert_eq!(model["nodes"][1]["position"]["y"], 200.0);
}

#[test]
fn e2e_invalid_input_fails() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("broken.json");
    let output = temp_dir.path().join("out.json");
    fs::write(&input, "{ \"architecture\": [ }").unwrap();

    let result = run(&args(&input, &output, OutputFormat::Json));

    assert!(result.is_err(), "Broken input should fail");
    assert!(!output.exists(), "No output should be written on failure");
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("absent.json");
    let output = temp_dir.path().join("out.svg");

    assert!(run(&args(&input, &output, OutputFormat::Svg)).is_err());
}
