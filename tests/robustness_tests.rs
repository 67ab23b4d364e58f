use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_plan_row_aborts_without_report() {
    let plans = common::plans(&["Corey, kindergarten, , "]);
    let roster = common::roster(&["Jarett, Corey, 2, "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg(roster.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("CSV error"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_cycle_count() {
    let plans = common::plans(&["Corey, ms, , "]);
    let roster = common::roster(&["Jarett, Corey, two, "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg(roster.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_client_without_plan() {
    let plans = common::plans(&["Corey, ms, , "]);
    let roster = common::roster(&["Jarett, Corey, 2, ", "Jarett, Ghost, 1, "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg(roster.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Client 'Ghost' of worker 'Jarett' has no plan"));
}

#[test]
fn test_idle_clients_are_skipped() {
    let plans = common::plans(&["Corey, ms, , ", "Simon, ms, , "]);
    let roster = common::roster(&["Jarett, Corey, 2, ", "Keon, Simon, 0, "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg(roster.path());

    // 78 - 2.262 - 0.30 = 75.438 after fees (one card fee), 71.6661 after donations
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Keon: $0.00"))
        .stdout(predicate::str::contains("Jarett: $71.67"));
}

#[test]
fn test_missing_input_file() {
    let plans = common::plans(&["Corey, ms, , "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg("no/such/roster.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_idle_client_without_plan_is_skipped() {
    let plans = common::plans(&["Corey, ms, , "]);
    let roster = common::roster(&["Jarett, Corey, 2, ", "Jarett, Ghost, 0, "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg(roster.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jarett: $71.67"));
}

#[test]
fn test_repeated_roster_row_rejected() {
    let plans = common::plans(&["Corey, ms, , "]);
    let roster = common::roster(&["Jarett, Corey, 2, ", "Jarett, Corey, 1, "]);

    let mut cmd = Command::new(cargo_bin!("tutor-payouts"));
    cmd.arg(plans.path()).arg(roster.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Client 'Corey' is listed more than once for worker 'Jarett'",
        ));
}
