use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

mod common;
use common::write_machine_files;

const DRINKS: &str = "Cola, 1000, 10, cola.gif\n, 0, 0, \nWater, 500, 7, water.gif\n";
const CASH: &str = "1000: 20\n500: 20\n100: 20\n";

#[test]
fn test_save_round_trips_machine_files() {
    let dir = tempdir().unwrap();
    let (drinks_path, cash_path) = write_machine_files(dir.path(), DRINKS, CASH).unwrap();
    let session_path = dir.path().join("session.csv");
    fs::write(&session_path, "op, value, count\n").unwrap();

    let mut cmd = Command::new(cargo_bin!("vendo"));
    cmd.arg(&session_path)
        .arg("--catalog")
        .arg(&drinks_path)
        .arg("--ledger")
        .arg(&cash_path)
        .arg("--slots")
        .arg("3")
        .arg("--save");
    cmd.assert().success();

    // An empty session saved back must reproduce both files byte for byte.
    assert_eq!(fs::read_to_string(&drinks_path).unwrap(), DRINKS);
    assert_eq!(fs::read_to_string(&cash_path).unwrap(), CASH);
}

#[test]
fn test_state_survives_across_runs() {
    let dir = tempdir().unwrap();
    let (drinks_path, cash_path) = write_machine_files(dir.path(), DRINKS, CASH).unwrap();

    // 1. First run: buy one Cola with an inserted 1000 and save.
    let session1 = dir.path().join("session1.csv");
    fs::write(&session1, "op, value, count\ninsert, 1000, 1\nbuy, 0, \n").unwrap();

    let mut cmd1 = Command::new(cargo_bin!("vendo"));
    cmd1.arg(&session1)
        .arg("--catalog")
        .arg(&drinks_path)
        .arg("--ledger")
        .arg(&cash_path)
        .arg("--slots")
        .arg("3")
        .arg("--save");
    cmd1.assert()
        .success()
        .stdout(predicate::str::contains("dispensed: Cola, balance: 0"));

    // The inserted 1000 stays in the till; one Cola left the rack.
    assert!(
        fs::read_to_string(&cash_path)
            .unwrap()
            .contains("1000: 21")
    );
    assert!(
        fs::read_to_string(&drinks_path)
            .unwrap()
            .contains("Cola, 1000, 9, cola.gif")
    );

    // 2. Second run sees the decremented stock.
    let session2 = dir.path().join("session2.csv");
    fs::write(&session2, "op, value, count\nstatus, , \n").unwrap();

    let mut cmd2 = Command::new(cargo_bin!("vendo"));
    cmd2.arg(&session2)
        .arg("--catalog")
        .arg(&drinks_path)
        .arg("--ledger")
        .arg(&cash_path)
        .arg("--slots")
        .arg("3")
        .arg("--summary-json");
    cmd2.assert()
        .success()
        .stdout(predicate::str::contains("\"stock\":9"))
        .stdout(predicate::str::contains("\"total_sales\":0"));
}

#[test]
fn test_slot_count_mismatch_fails_load() {
    let dir = tempdir().unwrap();
    let (drinks_path, cash_path) =
        write_machine_files(dir.path(), "Cola, 1000, 10, cola.gif\n", CASH).unwrap();
    let session_path = dir.path().join("session.csv");
    fs::write(&session_path, "op, value, count\n").unwrap();

    let mut cmd = Command::new(cargo_bin!("vendo"));
    cmd.arg(&session_path)
        .arg("--catalog")
        .arg(&drinks_path)
        .arg("--ledger")
        .arg(&cash_path)
        .arg("--slots")
        .arg("3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("machine requires 3"));
}

#[test]
fn test_malformed_ledger_fails_load() {
    let dir = tempdir().unwrap();
    let (drinks_path, cash_path) =
        write_machine_files(dir.path(), DRINKS, "1000: 20\n500 = 20\n").unwrap();
    let session_path = dir.path().join("session.csv");
    fs::write(&session_path, "op, value, count\n").unwrap();

    let mut cmd = Command::new(cargo_bin!("vendo"));
    cmd.arg(&session_path)
        .arg("--catalog")
        .arg(&drinks_path)
        .arg("--ledger")
        .arg(&cash_path)
        .arg("--slots")
        .arg("3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed ledger line 2"));
}
