use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("vendo"));
    cmd.arg("tests/fixtures/session.csv")
        .arg("--catalog")
        .arg("tests/fixtures/drinks.txt")
        .arg("--ledger")
        .arg("tests/fixtures/cash.txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("status: selling, balance: 0"))
        // 1000 then 500 inserted
        .stdout(predicate::str::contains("balance: 1000"))
        .stdout(predicate::str::contains("balance: 1500"))
        // Cola costs 1000
        .stdout(predicate::str::contains("dispensed: Cola, balance: 500"))
        .stdout(predicate::str::contains("refund: 500 x 1"))
        .stdout(predicate::str::contains("total sales: 1000"));

    Ok(())
}

#[test]
fn test_cli_json_summary() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("vendo"));
    cmd.arg("tests/fixtures/session.csv")
        .arg("--catalog")
        .arg("tests/fixtures/drinks.txt")
        .arg("--ledger")
        .arg("tests/fixtures/cash.txt")
        .arg("--summary-json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"balance\":0"))
        .stdout(predicate::str::contains("\"total_sales\":1000"))
        .stdout(predicate::str::contains("\"status\":\"selling\""))
        // one Cola sold from an initial stock of 10
        .stdout(predicate::str::contains("\"name\":\"Cola\""))
        .stdout(predicate::str::contains("\"stock\":9"));

    Ok(())
}
