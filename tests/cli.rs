#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;

fn calgrid_cmd() -> Command {
    Command::new(cargo_bin("calgrid"))
}

fn stdout_of(args: &[&str]) -> String {
    let output = calgrid_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_stacked_single_month() {
    let expected = [
        "    January 2024     ",
        "Mo Tu We Th Fr Sa Su",
        " 1  2  3  4  5  6  7 ",
        " 8  9 10 11 12 13 14 ",
        "15 16 17 18 19 20 21 ",
        "22 23 24 25 26 27 28 ",
        "29 30 31             ",
    ]
    .join("\n")
        + "\n";

    assert_eq!(stdout_of(&["-m", "1", "-y", "2024", "-1", "--stacked"]), expected);
}

#[test]
fn test_three_months_across_year_boundary() {
    let out = stdout_of(&["-m", "11", "-y", "2024", "-3"]);
    let lines: Vec<&str> = out.lines().collect();

    let title = lines[0];
    let nov = title.find("November 2024").unwrap();
    let dec = title.find("December 2024").unwrap();
    let jan = title.find("January 2025").unwrap();
    assert!(nov < dec && dec < jan);

    assert_eq!(lines.len(), 8);
    for line in &lines {
        assert_eq!(line.len(), 3 * 22, "{line:?}");
    }
    // Jan 1 2025 is a Wednesday
    assert_eq!(&lines[2][44..], "       1  2  3  4  5  ");
}

#[test]
fn test_invalid_month_exits_non_zero() {
    calgrid_cmd()
        .args(["-m", "13"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid month: 13"));
}

#[test]
fn test_zero_months_prints_nothing() {
    calgrid_cmd()
        .args(["-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    calgrid_cmd()
        .args(["--months", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_month_count_ceiling() {
    let out = stdout_of(&["-m", "1", "-y", "2024", "-n", "24", "-c", "6"]);
    assert!(out.contains("December 2025"));

    calgrid_cmd()
        .args(["-n", "25"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Requested 25 months, at most 24 can be shown"));
}

#[test]
fn test_last_representable_year() {
    let out = stdout_of(&["-m", "12", "-y", "262142", "-n", "13"]);
    assert!(out.contains("December 262143"));
    assert!(out.contains("29 30 31"));
}

#[test]
fn test_full_year() {
    let out = stdout_of(&["--year", "-y", "2024"]);
    for name in [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ] {
        assert!(out.contains(&format!("{name} 2024")), "missing {name}");
    }
    assert!(!out.contains("2025"));
}

#[test]
fn test_week_numbering_grid_sunday_first() {
    let out = stdout_of(&["--week-numbering", "-m", "9", "-y", "2024", "-s"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Su Mo Tu We Th Fr Sa");
    assert_eq!(lines[1], " 1  2  3  4  5  6  7 ");
    assert!(!out.contains("September"));
}

#[test]
fn test_week_numbers_column() {
    calgrid_cmd()
        .args(["-m", "1", "-y", "2024", "-w"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wk Mo Tu We Th Fr Sa Su"))
        .stdout(predicate::str::contains(" 1  1  2  3  4  5  6  7 "));
}

#[test]
fn test_columns_split_into_bands() {
    let out = stdout_of(&["-m", "1", "-y", "2024", "-n", "4", "-c", "2"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 8 * 2 + 1);
    assert_eq!(lines[8], "");
    assert!(lines[9].contains("March 2024"));
    assert!(lines[9].contains("April 2024"));
}
