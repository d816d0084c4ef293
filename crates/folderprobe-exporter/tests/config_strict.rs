#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use folderprobe_core::ScanPolicy;
use folderprobe_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "0.0.0.0:9188"
  scan_polcy: stat # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:9188");
    assert_eq!(cfg.exporter.scan_policy, ScanPolicy::Recursive);
}

#[test]
fn stat_policy_selectable() {
    let ok = r#"
version: 1
exporter:
  listen: "127.0.0.1:9999"
  scan_policy: stat
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.exporter.scan_policy, ScanPolicy::Stat);
    assert_eq!(cfg.exporter.listen_addr().unwrap().port(), 9999);
}

#[test]
fn unknown_policy_rejected() {
    let bad = "version: 1\nexporter:\n  scan_policy: fuzzy\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn bad_listen_rejected() {
    let bad = "version: 1\nexporter:\n  listen: \"not-an-addr\"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("exporter.listen"));
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let cfg = config::load_or_default(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.exporter.listen, "0.0.0.0:9188");
}

#[test]
fn existing_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "version: 1\nexporter: [oops]\n").unwrap();
    assert!(config::load_or_default(path.to_str().unwrap()).is_err());
}
