//! End-to-end CLI tests over fixture documents and catalogs.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DOCUMENT: &str = "\
DISDERO LUMBER CO. D000123
SHIP TO: JOBSITE
12 LF 123456-7890-AB S4S KD
2X6
6/16', 4/12'
";

const CATALOG: &str = "\
PRODUCT DESCRIPTION,Dimension,QUANTITY,SKU#
123456-7890-AB S4S KD,2*6*16',4PC,SKU1
123456-7890-AB S4S KD,2*6*12',2PC,SKU2
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("order.txt"), DOCUMENT).unwrap();
        fs::write(dir.path().join("catalog.csv"), CATALOG).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }
}

fn poflow() -> Command {
    Command::cargo_bin("poflow").unwrap()
}

#[test]
fn process_emits_json_order() {
    let fixture = Fixture::new();

    poflow()
        .args([
            "process",
            &fixture.path("order.txt"),
            "--catalog",
            &fixture.path("catalog.csv"),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"number\": \"D123\""))
        .stdout(predicate::str::contains("SKU1"))
        .stdout(predicate::str::contains("1 4PC"))
        .stdout(predicate::str::contains("2 2PC"));
}

#[test]
fn process_text_report_has_units_total() {
    let fixture = Fixture::new();

    poflow()
        .args([
            "process",
            &fixture.path("order.txt"),
            "--catalog",
            &fixture.path("catalog.csv"),
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Load release for PO#D123"))
        .stdout(predicate::str::contains("2*6*16"))
        .stdout(predicate::str::contains("** 3 UNITS TOTAL **"));
}

#[test]
fn process_writes_output_file() {
    let fixture = Fixture::new();
    let out = fixture.path("order.json");

    poflow()
        .args([
            "process",
            &fixture.path("order.txt"),
            "--catalog",
            &fixture.path("catalog.csv"),
            "--output",
            &out,
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"number\": \"D123\""));
}

#[test]
fn process_fails_on_missing_catalog() {
    let fixture = Fixture::new();

    poflow()
        .args([
            "process",
            &fixture.path("order.txt"),
            "--catalog",
            &fixture.path("nope.csv"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog"));
}

#[test]
fn process_fails_on_missing_input() {
    let fixture = Fixture::new();

    poflow()
        .args([
            "process",
            &fixture.path("nope.txt"),
            "--catalog",
            &fixture.path("catalog.csv"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn catalog_reports_entry_count() {
    let fixture = Fixture::new();

    poflow()
        .args(["catalog", &fixture.path("catalog.csv")])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 catalog entries"))
        .stdout(predicate::str::contains("No duplicate keys"));
}

#[test]
fn catalog_warns_on_duplicate_keys() {
    let fixture = Fixture::new();
    let duplicated = format!("{CATALOG}123456-7890-AB S4S KD,2*6*16',4PC,SKU9\n");
    fs::write(fixture.dir.path().join("dup.csv"), duplicated).unwrap();

    poflow()
        .args(["catalog", &fixture.path("dup.csv")])
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate"))
        .stdout(predicate::str::contains("123456-7890-AB @ 16"));
}

#[test]
fn config_show_prints_defaults() {
    poflow()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRODUCT DESCRIPTION"));
}
