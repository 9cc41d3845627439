//! Login, logout, key and challenge listing.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_key_prints_storage_paths() {
    cargo_bin_cmd!("exploitx")
        .args(["key", "a.b@c.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a_dot_b_at_c_com"))
        .stdout(predicate::str::contains("users/a_dot_b_at_c_com"))
        .stdout(predicate::str::contains("scores/a_dot_b_at_c_com"));
}

#[test]
fn test_key_warns_on_possible_collision() {
    cargo_bin_cmd!("exploitx")
        .args(["key", "a_dot_b@c.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("may collide"));
}

#[test]
fn test_key_rejects_invalid_email() {
    cargo_bin_cmd!("exploitx")
        .args(["key", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email"));
}

#[test]
fn test_login_then_logout() {
    let dir = tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    cargo_bin_cmd!("exploitx")
        .env("EXPLOITX_HOME", dir.path())
        .args(["login", "--email", "alice@ctf.in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as alice@ctf.in"));

    let cached: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&session_path).unwrap()).unwrap();
    assert_eq!(cached["email"], "alice@ctf.in");

    cargo_bin_cmd!("exploitx")
        .env("EXPLOITX_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
    assert!(!session_path.exists());

    cargo_bin_cmd!("exploitx")
        .env("EXPLOITX_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_challenges_list_hides_flags() {
    cargo_bin_cmd!("exploitx")
        .arg("challenges")
        .assert()
        .success()
        .stdout(predicate::str::contains("pts"))
        .stdout(predicate::str::contains("points total"))
        .stdout(predicate::str::contains("ISTEHITSC{").not());
}

#[test]
fn test_challenges_json_omits_flag_field() {
    let output = cargo_bin_cmd!("exploitx")
        .args(["challenges", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let challenges: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let challenges = challenges.as_array().unwrap();
    assert_eq!(challenges.len(), 6);
    for challenge in challenges {
        assert!(challenge.get("flag").is_none());
        assert!(challenge["point"].as_u64().unwrap() > 0);
    }
}
