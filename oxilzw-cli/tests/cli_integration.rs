use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_oxilzw").to_string()
}

fn oxilzw(store: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("OXILZW_STORE")
        .env_remove("RUST_LOG")
        .arg("--store")
        .arg(store);
    cmd
}

const TEXT: &str = "TOBEORNOTTOBEORTOBEORNOT, that is the question.";

#[test]
fn cli_compress_decompress_roundtrip() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let input = dir.path().join("in.txt");
    let codes = dir.path().join("in.codes");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, TEXT).unwrap();

    let st = oxilzw(&store)
        .arg("compress")
        .arg(&input)
        .arg("-o")
        .arg(&codes)
        .status()
        .unwrap();
    assert!(st.success());
    let serialized = std::fs::read_to_string(&codes).unwrap();
    assert!(serialized.starts_with("84 79 66 69 79 82 78 79 84 256"));

    let st = oxilzw(&store)
        .arg("decompress")
        .arg(&codes)
        .arg("-o")
        .arg(&output)
        .arg("--verify")
        .arg(&input)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), TEXT);
}

#[test]
fn cli_default_output_and_stdout() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let input = dir.path().join("abab.txt");
    std::fs::write(&input, "ABABABA").unwrap();

    let st = oxilzw(&store).arg("compress").arg(&input).status().unwrap();
    assert!(st.success());
    let codes = dir.path().join("abab.txt.lzw");
    assert_eq!(std::fs::read_to_string(&codes).unwrap(), "65 66 256 258");

    let out = oxilzw(&store)
        .arg("decompress")
        .arg(&codes)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"ABABABA");
}

#[test]
fn cli_stdout_is_byte_exact_in_the_requested_encoding() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let codes = dir.path().join("cafe.codes");
    std::fs::write(&codes, "99 97 102 233").unwrap();

    let out = oxilzw(&store).arg("decompress").arg(&codes).output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, "caf\u{e9}".as_bytes());

    let out = oxilzw(&store)
        .arg("decompress")
        .arg(&codes)
        .args(["--encoding", "windows-1252"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, [99, 97, 102, 233]);

    let out = oxilzw(&store)
        .arg("decompress")
        .arg(&codes)
        .args(["--encoding", "windows-1252", "-o"])
        .arg(dir.path().join("cafe.txt"))
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        std::fs::read(dir.path().join("cafe.txt")).unwrap(),
        [99, 97, 102, 233]
    );
}

#[test]
fn cli_session_decompress_rejects_table_parameters() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let input = dir.path().join("in.txt");
    std::fs::write(&input, "ABABABA").unwrap();

    let st = oxilzw(&store)
        .args(["compress", "--session", "s"])
        .arg(&input)
        .status()
        .unwrap();
    assert!(st.success());

    for extra in [["--initial", "128"], ["--max", "1024"]] {
        let out = oxilzw(&store)
            .args(["decompress", "--session", "s"])
            .args(extra)
            .output()
            .unwrap();
        assert!(!out.status.success(), "{extra:?} should conflict with --session");
    }

    let out = oxilzw(&store)
        .args(["decompress", "--session", "s"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"ABABABA");
}

#[test]
fn cli_session_lifecycle() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, TEXT).unwrap();

    let st = oxilzw(&store)
        .args(["compress", "--session", "draft", "--initial", "128", "--max", "1024"])
        .arg(&input)
        .status()
        .unwrap();
    assert!(st.success());
    assert!(store.join("draft.json").exists());
    assert!(!dir.path().join("in.txt.lzw").exists());

    let out = oxilzw(&store)
        .args(["sessions", "list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(listed[0]["id"], "draft");
    assert_eq!(listed[0]["initial_dict_size"], 128);

    let st = oxilzw(&store)
        .args(["decompress", "--session", "draft", "-o"])
        .arg(&output)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), TEXT);

    let st = oxilzw(&store)
        .args(["sessions", "remove", "draft"])
        .status()
        .unwrap();
    assert!(st.success());

    let st = oxilzw(&store)
        .args(["sessions", "show", "draft"])
        .status()
        .unwrap();
    assert!(!st.success());
}

#[test]
fn cli_rejects_bad_codes_file() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let codes = dir.path().join("bad.codes");
    std::fs::write(&codes, "65 66 twelve").unwrap();

    let out = oxilzw(&store).arg("decompress").arg(&codes).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("twelve"));

    std::fs::write(&codes, "").unwrap();
    let out = oxilzw(&store).arg("decompress").arg(&codes).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn cli_reset_session_cannot_be_decompressed() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let input = dir.path().join("in.txt");
    std::fs::write(&input, "ABABABABAB".repeat(3)).unwrap();

    let st = oxilzw(&store)
        .args(["compress", "--session", "reset", "--reset", "260"])
        .arg(&input)
        .status()
        .unwrap();
    assert!(st.success());

    let out = oxilzw(&store)
        .args(["decompress", "--session", "reset"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("reset threshold 260"));
}

#[test]
fn cli_verify_detects_mismatch() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let codes = dir.path().join("in.codes");
    let reference = dir.path().join("ref.txt");
    std::fs::write(&codes, "65 66 256 258").unwrap();
    std::fs::write(&reference, "ABABABB").unwrap();

    let out = oxilzw(&store)
        .arg("decompress")
        .arg(&codes)
        .arg("--verify")
        .arg(&reference)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("character 6"));
}

#[test]
fn cli_roundtrip_and_sweep() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store");
    let input = dir.path().join("in.txt");
    let sweep_dir = dir.path().join("sweep");
    std::fs::write(&input, TEXT.repeat(10)).unwrap();

    let out = oxilzw(&store)
        .args(["roundtrip", "--json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["lossless"], true);

    let out = oxilzw(&store)
        .args(["sweep", "--json", "--write-dir"])
        .arg(&sweep_dir)
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 4);
    assert!(sweep_dir.join("compressed_standard_256_4096.txt").exists());
}
