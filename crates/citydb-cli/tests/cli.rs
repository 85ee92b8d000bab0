use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CSV: &str = "\
City,Country,Temperature
Berlin,Germany,10
Madrid,Spain,15
Bilbao,spain,8
Málaga,Spain,abc
";

fn workdir_with_cities() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cities.csv"), CSV).unwrap();
    dir
}

fn citydb() -> Command {
    Command::cargo_bin("citydb-cli").unwrap()
}

#[test]
fn default_run_prints_the_report_from_the_working_directory() {
    let dir = workdir_with_cities();
    citydb()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Average temperature of all the cities: 11"))
        .stdout(predicate::str::contains("{city: Berlin, country: Germany, temperature: 10}"))
        .stdout(predicate::str::contains("{city: Madrid, country: Spain, temperature: 15}"))
        .stdout(predicate::str::contains("Bilbao").not())
        .stdout(predicate::str::contains("Number of unique countries: 2"));
}

#[test]
fn missing_dataset_is_reported_without_output() {
    let dir = TempDir::new().unwrap();
    citydb()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Dataset unavailable"));
}

#[test]
fn explicit_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    citydb()
        .current_dir(dir.path())
        .args(["--input", "nope.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn empty_dataset_prints_a_notice_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cities.csv"), "city,country,temperature\n").unwrap();
    citydb()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no records"));
}

#[test]
fn country_command_with_threshold() {
    let dir = workdir_with_cities();
    citydb()
        .current_dir(dir.path())
        .args(["country", "SPAIN", "--above", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Madrid"))
        .stdout(predicate::str::contains("Bilbao").not())
        .stdout(predicate::str::contains("Málaga").not());
}

#[test]
fn cities_command_folds_accents() {
    let dir = workdir_with_cities();
    citydb()
        .current_dir(dir.path())
        .args(["cities", "malaga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Málaga"));
}

#[test]
fn report_as_json() {
    let dir = workdir_with_cities();
    let out = citydb()
        .current_dir(dir.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["average_temperature"], 11.0);
    assert_eq!(json["cities_in_spain_above_threshold"][0]["city"], "Madrid");
    assert_eq!(json["unique_country_count"], 2);
}

#[test]
fn stats_and_countries_read_an_explicit_input() {
    let dir = workdir_with_cities();
    let path = dir.path().join("Cities.csv");

    citydb()
        .arg("--input")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 4"))
        .stdout(predicate::str::contains("Countries: 2"));

    citydb()
        .arg("--input")
        .arg(&path)
        .arg("countries")
        .assert()
        .success()
        .stdout("germany\nspain\n");
}
