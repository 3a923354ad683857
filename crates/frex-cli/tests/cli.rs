use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_ORDER: &str = "\
Access Logistic GmbH, Amerling 130, A-6233 Kramsach
Transport order
To:
Speedy Transport s.r.o.
Contactperson: Maria Huber
Tournumber:

**TA-2025-0815**
Truck, trailer:

KU-100AB
KU456 Mega trailer
Vehicle type:
Tautliner
Load:
Machine parts
Amount:
33
Unit:
EW-Paletten
Weight:
12.500,5
Freight rate in €:

€ 1.450,00
Loading sequence:
11.02.2025 08:00-16:00
Tyrol Steel GmbH, Industriestrasse 4, A-6233 Kramsach
Unloading sequence:
Lombardia Metalli S.r.l., Via Milano 12, I-20121 Milano
Best regards
";

fn frex() -> Command {
    Command::cargo_bin("frex").unwrap()
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn check_accepts_order_dump() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "order.txt", SAMPLE_ORDER);

    frex()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Access Logistic transport order"));
}

#[test]
fn check_rejects_foreign_document() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "letter.txt", "Dear customer,\nthanks.\n");

    frex()
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not an Access Logistic transport order"));
}

#[test]
fn process_prints_json_order() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "Order_0815.txt", SAMPLE_ORDER);

    frex()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order_reference\": \"TA-2025-0815\""))
        .stdout(predicate::str::contains("order_0815.txt"))
        .stdout(predicate::str::contains("ATU74076812"));
}

#[test]
fn process_writes_text_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "order.txt", SAMPLE_ORDER);
    let output = dir.path().join("order.out");

    frex()
        .arg("process")
        .arg(&input)
        .args(["--format", "text", "--output"])
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("Order: TA-2025-0815"));
    assert!(text.contains("Vehicle: KU-100AB / KU456"));
    assert!(text.contains("Tyrol Steel GmbH"));
}

#[test]
fn process_refuses_foreign_document_without_force() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "letter.txt", "Dear customer,\nthanks.\n");

    frex()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the Access Logistic format"));

    frex()
        .arg("process")
        .arg(&input)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"loading_locations\": []"));
}

#[test]
fn process_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "order.docx", SAMPLE_ORDER);

    frex()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.txt", SAMPLE_ORDER);
    write_file(dir.path(), "b.txt", "not an order\n");
    let out = dir.path().join("out");

    frex()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .args(["--summary", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed: 1"));

    assert!(out.join("a.json").exists());
    assert!(!out.join("b.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt,success,TA-2025-0815"));
    assert!(summary.contains("b.txt,error"));
}

#[test]
fn config_init_get_and_set() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("frex.json");

    frex()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    frex()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.freight_currency", "CHF"])
        .assert()
        .success();

    frex()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.freight_currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"CHF\""));

    frex()
        .arg("--config")
        .arg(&config)
        .args(["config", "map-unit", "Kisten", "carton"])
        .assert()
        .success();

    let saved = fs::read_to_string(&config).unwrap();
    assert!(saved.contains("\"Kisten\": \"CARTON\""));
}

#[test]
fn malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "frex.json", "{ \"extraction\": ");
    let input = write_file(dir.path(), "order.txt", SAMPLE_ORDER);

    frex()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn config_path_reports_location() {
    frex()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"));
}
