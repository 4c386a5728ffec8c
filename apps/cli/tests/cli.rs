use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cosmo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cosmo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_shows_realizations_classes_and_formats() {
    cosmo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Planck18"))
        .stdout(predicate::str::contains("FlatwCDM"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn export_defaults_to_json() {
    cosmo()
        .args(["export", "Planck18"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Planck18""#))
        .stdout(predicate::str::contains(r#""cosmology": "FlatLambdaCDM""#));
}

#[test]
fn export_ordered_mapping() {
    cosmo()
        .args(["export", "WMAP9", "--format", "mapping", "--ordered"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "OrderedDict({'cosmology': <class 'FlatLambdaCDM'>, 'name': 'WMAP9', 'H0': 69.32 km / (Mpc s)",
        ));
}

#[test]
fn export_with_class_name_and_flat_metadata() {
    cosmo()
        .args(["export", "WMAP7", "-f", "mapping", "--class-as-str", "--flatten-meta"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{'cosmology': 'FlatLambdaCDM'"))
        .stdout(predicate::str::contains("'sigma8': 0.81"))
        .stdout(predicate::str::contains("'meta'").not());
}

#[test]
fn unknown_realization_fails() {
    cosmo()
        .args(["export", "Planck99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown realization 'Planck99'"));
}

#[test]
fn unknown_format_fails() {
    cosmo()
        .args(["export", "Planck18", "--format", "ascii.ecsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No format registered under 'ascii.ecsv'"));
}

#[test]
fn exported_file_imports_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wmap9.json");

    cosmo()
        .args(["export", "WMAP9", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    cosmo()
        .arg("import")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FlatLambdaCDM(name=\"WMAP9\", H0=69.32 km / (Mpc s)"))
        .stdout(predicate::str::contains("'reference': 'Hinshaw et al. 2013"));
}

#[test]
fn unused_keys_need_move_to_meta() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(
        &path,
        r#"{"cosmology": "FlatLambdaCDM", "H0": 70, "Om0": 0.3, "mismatching": "will error"}"#,
    )
    .unwrap();

    cosmo()
        .arg("import")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("there are unused parameters"));

    cosmo()
        .arg("import")
        .arg(&path)
        .arg("--move-to-meta")
        .assert()
        .success()
        .stdout(predicate::str::contains("meta: {'mismatching': 'will error'}"));
}

#[test]
fn import_from_stdin_with_explicit_class() {
    cosmo()
        .args(["import", "-", "--cosmology", "wCDM"])
        .write_stdin(r#"{"H0": 68, "Om0": 0.3, "Ode0": 0.7, "w0": -0.9, "name": "stdin"}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wCDM(name=\"stdin\", H0=68 km / (Mpc s)"))
        .stdout(predicate::str::contains("w0=-0.9"));
}

#[test]
fn roundtrip_all_realizations() {
    for format in ["json", "mapping"] {
        cosmo()
            .args(["roundtrip", "all", "--format", format])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Planck13: ok ({format})")))
            .stdout(predicate::str::contains(format!("WMAP9: ok ({format})")));
    }
}

#[test]
fn config_file_sets_export_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("cosmo.toml");
    fs::write(&config, "[export]\nmapping_kind = \"OrderedDict\"\ncosmology_as_str = true\n").unwrap();

    cosmo()
        .arg("--config")
        .arg(&config)
        .args(["export", "Planck15", "-f", "mapping"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OrderedDict({'cosmology': 'FlatLambdaCDM'"));
}

#[test]
fn missing_config_file_fails() {
    cosmo()
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
