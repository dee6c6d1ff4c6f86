use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_compress_then_decompress() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("input.txt");
    let compressed = temp.path().join("compressed.rle");
    let restored = temp.path().join("decompressed.txt");
    let original = b"aaaaabbbcccccccccccd".repeat(20);
    fs::write(&input, &original).unwrap();

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .arg("compress")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&compressed)
        .arg("--threads")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressed to"))
        .stdout(predicate::str::contains("using 4 worker(s)"));

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .arg("decompress")
        .arg("-i")
        .arg(&compressed)
        .arg("-o")
        .arg(&restored)
        .assert()
        .success()
        .stdout(predicate::str::contains("Decompressed to"));

    assert_eq!(fs::read(&restored).unwrap(), original);
}

#[test]
fn test_default_paths_in_working_directory() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("input.txt"), b"xxxxxxxxxx").unwrap();

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .current_dir(temp.path())
        .arg("compress")
        .assert()
        .success();

    assert_eq!(fs::read(temp.path().join("compressed.rle")).unwrap(), b"x10");
}

#[test]
fn test_missing_input_fails() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .arg("compress")
        .arg("--input")
        .arg(temp.path().join("absent.txt"))
        .arg("--output")
        .arg(temp.path().join("out.rle"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open input"));
}

#[test]
fn test_analyze_json() {
    let temp = tempdir().unwrap();
    let compressed = temp.path().join("data.rle");
    fs::write(&compressed, b"x150a1b").unwrap();

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .arg("analyze")
        .arg("--input")
        .arg(&compressed)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"decompressed_size\": 151"))
        .stdout(predicate::str::contains("\"dropped_tokens\": 1"));
}

#[test]
fn test_run_with_config_file() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.rle");
    let config = temp.path().join("run.json");
    fs::write(&input, b"abcde").unwrap();
    fs::write(
        &config,
        serde_json::json!({
            "operation": "compress",
            "worker_count": 2,
            "input_path": input,
            "output_path": output,
        })
        .to_string(),
    )
    .unwrap();

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(fs::read(&output).unwrap(), b"a1b1c1d1e1");
}

#[test]
fn test_interactive_compress() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("input.txt"), b"zzzzzyyy").unwrap();

    Command::cargo_bin("tambak-rle")
        .unwrap()
        .current_dir(temp.path())
        .arg("interactive")
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter number of threads to use:"))
        .stdout(predicate::str::contains("Compressed to compressed.rle"));

    assert_eq!(fs::read(temp.path().join("compressed.rle")).unwrap(), b"z4z1y3");
}

#[test]
fn test_interactive_invalid_choice() {
    Command::cargo_bin("tambak-rle")
        .unwrap()
        .arg("interactive")
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."));
}
