use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn expenses(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", home.path())
        .env("EXPENSE_TRACKER_TODAY", "2024-02-01")
        .env_remove("RUST_LOG");
    cmd
}

fn add(home: &TempDir, amount: &str, category: &str, date: &str) {
    expenses(home)
        .args(["add", amount, "--category", category, "--date", date])
        .assert()
        .success();
}

fn seed(home: &TempDir) {
    add(home, "10.00", "Food", "2024-01-15");
    add(home, "5", "Transport", "2024-01-15");
    add(home, "20", "Food", "2024-02-01");
}

#[test]
fn add_reports_running_total() {
    let home = TempDir::new().unwrap();

    expenses(&home)
        .args(["add", "12.5", "--category", "Books"])
        .assert()
        .success()
        .stdout(contains("Added expense: 2024-02-01 Books $12.50"))
        .stdout(contains("Total spending: $12.50"));

    let document =
        std::fs::read_to_string(home.path().join("data").join("expenseTrackerData.json")).unwrap();
    assert_eq!(
        document,
        r#"{"expenses":[{"date":"2024-02-01","category":"Books","amount":12.5}]}"#
    );
}

#[test]
fn add_rejects_bad_input() {
    let home = TempDir::new().unwrap();

    expenses(&home)
        .args(["add", "lots", "--category", "Food"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    expenses(&home)
        .args(["add", "3", "--category", "Food", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    expenses(&home)
        .args(["add", "--category", "Food", "--", "--5"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount '--5'"));

    assert!(!home.path().join("data").join("expenseTrackerData.json").exists());
}

#[test]
fn summary_matches_reference_example() {
    let home = TempDir::new().unwrap();
    seed(&home);

    expenses(&home)
        .args(["summary", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("Total Spending:"))
        .stdout(contains("$35.00"))
        .stdout(contains("Spent Today:"))
        .stdout(contains("$20.00"))
        .stdout(contains("$15.00"));
}

#[test]
fn list_filters_by_date() {
    let home = TempDir::new().unwrap();
    seed(&home);

    expenses(&home)
        .args(["list", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("Transport"))
        .stdout(contains("2024-02-01").not())
        .stdout(contains("2 expense(s) on 2024-01-15, totalling $15.00"));

    expenses(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-02-01"))
        .stdout(contains("2024-01-15"));
}

#[test]
fn chart_emits_json_description() {
    let home = TempDir::new().unwrap();
    seed(&home);

    let output = expenses(&home).arg("chart").output().unwrap();
    assert!(output.status.success());

    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["type"], "bar");
    assert_eq!(chart["data"]["labels"].as_array().unwrap().len(), 31);
    assert_eq!(chart["data"]["datasets"][1]["label"], "Jan 2024");
    assert_eq!(chart["data"]["datasets"][1]["data"][14], 15.0);
}

#[test]
fn chart_text_overview() {
    let home = TempDir::new().unwrap();
    seed(&home);

    expenses(&home)
        .args(["chart", "--text"])
        .assert()
        .success()
        .stdout(contains("Feb 2024"))
        .stdout(contains("Sep 2023"));
}

#[test]
fn malformed_document_is_treated_as_empty() {
    let home = TempDir::new().unwrap();
    let data_dir = home.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("expenseTrackerData.json"), "{ definitely not json").unwrap();

    expenses(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("$0.00"));
}

#[test]
fn theme_toggles_and_persists() {
    let home = TempDir::new().unwrap();

    expenses(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(contains("Display mode: dark"));

    expenses(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(contains("Display mode: light"));
}

#[test]
fn export_writes_csv() {
    let home = TempDir::new().unwrap();
    seed(&home);
    let csv_path = home.path().join("out.csv");

    expenses(&home)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 3 expense(s)"));

    let csv = std::fs::read_to_string(csv_path).unwrap();
    assert!(csv.starts_with("date,category,amount\n"));
    assert!(csv.contains("2024-01-15,Transport,5"));
}
