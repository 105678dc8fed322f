#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::str::contains;

fn cli(agenda: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("horaires-cli").unwrap();
    cmd.arg("--agenda").arg(agenda);
    cmd
}

#[test]
fn create_list_and_notify_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let agenda = dir.path().join("agenda.json");

    cli(&agenda)
        .args(["add-employee", "--handle", "alice", "--name", "Alice"])
        .assert()
        .success();

    cli(&agenda)
        .args([
            "create-shift",
            "--employee",
            "alice",
            "--start",
            "2025-10-06T08:00:00Z",
            "--end",
            "2025-10-06T16:00:00Z",
        ])
        .assert()
        .success()
        .stdout(contains("statut: available"));

    cli(&agenda)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("[alice]"));

    cli(&agenda)
        .args(["notify"])
        .assert()
        .success()
        .stdout(contains("1 notification(s) en attente"));

    // l'ensemble en attente a été vidé par l'envoi
    cli(&agenda)
        .args(["notify"])
        .assert()
        .success()
        .stdout(contains("0 notification(s) en attente"));
}

#[test]
fn holiday_rejection_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let agenda = dir.path().join("agenda.json");

    cli(&agenda)
        .args(["add-employee", "--handle", "bob", "--name", "Bob"])
        .assert()
        .success();
    cli(&agenda)
        .args([
            "add-special-day-type",
            "--id",
            "ferie",
            "--name",
            "Jour férié",
            "--holiday",
        ])
        .assert()
        .success();
    cli(&agenda)
        .args(["add-special-day", "--date", "2025-10-08", "--kind", "ferie"])
        .assert()
        .success();

    cli(&agenda)
        .args([
            "create-shift",
            "--employee",
            "bob",
            "--start",
            "2025-10-08T09:00:00Z",
            "--end",
            "2025-10-08T17:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(contains("blocked by holiday"));
}
