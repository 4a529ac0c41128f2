//! Integration tests that drive the command-line entry point end to end.

use std::fs;
use std::path::Path;
use transfer_progress::Host;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }
}

fn populate(root: &Path) {
    fs::create_dir_all(root.join("nested/deeper")).unwrap();
    fs::write(root.join("a.bin"), vec![0u8; 1024]).unwrap();
    fs::write(root.join("nested/b.bin"), vec![0u8; 1024]).unwrap();
    fs::write(root.join("nested/deeper/c.bin"), vec![0u8; 1024]).unwrap();
}

fn quiet_config(dir: &Path) -> String {
    let path = dir.join("quiet.toml");
    fs::write(&path, "mode = \"none\"\n").unwrap();
    path.to_str().expect("temp path is not UTF-8").to_owned()
}

#[tokio::test]
async fn test_stats_reports_totals() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    populate(temp_dir.path());
    let dir = temp_dir.path().to_str().expect("temp path is not UTF-8");

    let mut host = TestHost::new();
    transfer_progress::run(&mut host, ["transfer-progress", "stats", dir]).await.unwrap();

    assert_eq!(host.output_str(), format!("{dir}: 3 files, 3.00KiB\n"));
}

#[tokio::test]
async fn test_stats_missing_directory_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing");

    let mut host = TestHost::new();
    let result = transfer_progress::run(&mut host, ["transfer-progress", "stats", missing.to_str().unwrap()]).await;

    assert!(result.is_err());
    assert!(host.output_str().is_empty());
}

#[tokio::test]
async fn test_simulate_replays_every_file() {
    let data = tempfile::tempdir().expect("Failed to create temp dir");
    populate(data.path());
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = quiet_config(config_dir.path());

    let mut host = TestHost::new();
    transfer_progress::run(
        &mut host,
        [
            "transfer-progress",
            "simulate",
            data.path().to_str().unwrap(),
            "--workers",
            "3",
            "--config",
            &config,
        ],
    )
    .await
    .unwrap();

    assert_eq!(host.output_str(), "Replayed 3 files, 3.00KiB\n");
}

#[tokio::test]
async fn test_simulate_with_precompute_matches_measured_totals() {
    let data = tempfile::tempdir().expect("Failed to create temp dir");
    populate(data.path());
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = quiet_config(config_dir.path());

    let mut host = TestHost::new();
    transfer_progress::run(
        &mut host,
        [
            "transfer-progress",
            "simulate",
            data.path().to_str().unwrap(),
            "--precompute",
            "--config",
            &config,
        ],
    )
    .await
    .unwrap();

    assert_eq!(host.output_str(), "Replayed 3 files, 3.00KiB\n");
    assert!(host.error_buf.is_empty(), "unexpected warning: {}", String::from_utf8_lossy(&host.error_buf));
}

#[tokio::test]
async fn test_simulate_rejects_invalid_config() {
    let data = tempfile::tempdir().expect("Failed to create temp dir");
    populate(data.path());
    let config_path = data.path().join("bad.toml");
    fs::write(&config_path, "refresh_hz = 0\n").unwrap();

    let mut host = TestHost::new();
    let result = transfer_progress::run(
        &mut host,
        [
            "transfer-progress",
            "simulate",
            data.path().to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ],
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_init_writes_loadable_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp_dir.path().join("progress.toml");

    let mut host = TestHost::new();
    transfer_progress::run(&mut host, ["transfer-progress", "init", output.to_str().unwrap()])
        .await
        .unwrap();

    let config = transfer_progress::config::ProgressConfig::load(
        camino::Utf8Path::new("."),
        Some(camino::Utf8Path::new(output.to_str().unwrap())),
    )
    .unwrap();
    assert_eq!(config, transfer_progress::config::ProgressConfig::default());
}
