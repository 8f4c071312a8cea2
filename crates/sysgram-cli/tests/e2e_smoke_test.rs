use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use sysgram::SysgramError;
use sysgram_cli::{Args, run};

fn demos_dir() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all files with the given extension from a directory
fn collect_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
                })
                .collect()
        })
        .unwrap_or_default();

    // Sort for consistent test output
    files.sort();
    files
}

fn args(inputs: &[&Path], out_dir: &Path, format: &str) -> Args {
    Args {
        inputs: inputs
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect(),
        out_dir: out_dir.to_string_lossy().to_string(),
        format: format.to_string(),
        title: None,
        inline: false,
        force: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_models() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let models = collect_files(&demos_dir(), "sysml");
    assert!(!models.is_empty(), "No models found in demos/");

    let inputs: Vec<&Path> = models.iter().map(PathBuf::as_path).collect();
    let summary = run(&args(&inputs, temp_dir.path(), "svg")).expect("run failed");

    for failure in &summary.failures {
        eprintln!("  - {}: {}", failure.input.display(), failure.error);
    }
    assert!(summary.is_success());
    assert_eq!(summary.rendered.len(), models.len());

    for model in &models {
        let stem = model.file_stem().unwrap().to_string_lossy();
        let output = temp_dir.path().join(format!("{stem}.svg"));
        let svg = fs::read_to_string(&output).expect("missing output");
        assert!(svg.starts_with("<?xml"), "{} is not standalone svg", output.display());
        assert!(svg.contains(r#"class="sysml-node""#));
        assert!(svg.contains(&format!("Source: {}", model.display())));
    }
}

#[test]
fn e2e_smoke_test_demo_page() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let page = demos_dir().join("architecture.md");

    let summary = run(&args(&[&page], temp_dir.path(), "html")).expect("run failed");
    assert!(summary.is_success());

    let output = fs::read_to_string(temp_dir.path().join("architecture.md")).unwrap();
    assert_eq!(output.matches(r#"<figure class="sysml-diagram">"#).count(), 2);
    assert!(output.contains("<title>Drive train</title>"));
    assert!(output.contains("<title>Vehicle architecture</title>"));
    assert!(output.contains("```toml"));
    assert!(!output.contains("```sysml"));
    assert!(!output.contains("<?xml"));
}

#[test]
fn e2e_html_model_output() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("mini.model.sysml");
    fs::write(&input, "package P { part a : B; }").unwrap();
    let out_dir = temp_dir.path().join("site");

    let summary = run(&args(&[&input], &out_dir, "HTML")).unwrap();
    assert!(summary.is_success());

    let html = fs::read_to_string(out_dir.join("mini.model.html")).unwrap();
    assert!(html.starts_with(r#"<figure class="sysml-diagram"><svg"#));
    assert!(html.ends_with("</figure>"));
}

#[test]
fn e2e_up_to_date_outputs_are_skipped() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("model.sysml");
    fs::write(&input, "part def Engine;").unwrap();
    let out_dir = temp_dir.path().join("out");

    let mut run_args = args(&[&input], &out_dir, "svg");
    let first = run(&run_args).unwrap();
    assert_eq!(first.rendered, [out_dir.join("model.svg")]);

    let second = run(&run_args).unwrap();
    assert!(second.rendered.is_empty());
    assert_eq!(second.skipped, [out_dir.join("model.svg")]);

    run_args.force = true;
    let forced = run(&run_args).unwrap();
    assert_eq!(forced.rendered.len(), 1);
}

#[test]
fn e2e_failed_document_does_not_stop_the_run() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("missing.sysml");
    let present = temp_dir.path().join("present.sysml");
    fs::write(&present, "part def Engine;").unwrap();
    let out_dir = temp_dir.path().join("out");

    let summary = run(&args(&[&missing, &present], &out_dir, "svg")).unwrap();
    assert!(!summary.is_success());
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].input, missing);
    assert!(matches!(summary.failures[0].error, SysgramError::Io(_)));
    assert_eq!(summary.rendered, [out_dir.join("present.svg")]);
}

#[test]
fn e2e_page_is_never_rendered_over_itself() {
    let temp_dir = tempdir().unwrap();
    let page = temp_dir.path().join("page.md");
    let source = "# Page\n\n```sysml\npart def Engine;\n```\n";
    fs::write(&page, source).unwrap();

    let mut args = args(&[&page], temp_dir.path(), "svg");
    args.force = true;
    let summary = run(&args).unwrap();

    assert!(summary.rendered.is_empty());
    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(summary.failures[0].error, SysgramError::Io(_)));
    assert_eq!(fs::read_to_string(&page).unwrap(), source);
}

#[test]
fn e2e_unsupported_format_fails_before_rendering() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("model.sysml");
    fs::write(&input, "part def Engine;").unwrap();
    let out_dir = temp_dir.path().join("out");

    let err = run(&args(&[&input], &out_dir, "png")).unwrap_err();
    assert!(matches!(err, SysgramError::UnsupportedFormat(ref name) if name == "png"));
    assert!(!out_dir.exists());
}

#[test]
fn e2e_title_and_config_are_applied() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("model.sysml");
    fs::write(&input, "part def Engine;").unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[layout]\nnode_width = 300\n").unwrap();
    let out_dir = temp_dir.path().join("out");

    let mut run_args = args(&[&input], &out_dir, "svg");
    run_args.title = Some("Engine view".to_string());
    run_args.inline = true;
    run_args.config = Some(config.to_string_lossy().to_string());
    run(&run_args).unwrap();

    let svg = fs::read_to_string(out_dir.join("model.svg")).unwrap();
    assert!(!svg.starts_with("<?xml"));
    assert!(svg.contains("<title>Engine view</title>"));
    assert!(svg.contains(r#"width="372""#));
}
