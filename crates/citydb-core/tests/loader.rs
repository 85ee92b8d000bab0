use citydb_core::loader::{default_candidates, locate};
use citydb_core::{
    aggregate, folds, CityDbError, CityQuery, Dataset, Report, Value, DEFAULT_CANDIDATES,
};
use std::fs;
use tempfile::TempDir;

const CSV: &str = "\
 City , COUNTRY,Temperature
Berlin,  Germany ,10
Madrid,Spain, 15
Bilbao, spain ,8
";

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn headers_are_lowercased_and_values_trimmed() {
    let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
    assert_eq!(ds.len(), 3);

    let first = &ds.records()[0];
    assert_eq!(first.keys().collect::<Vec<_>>(), vec!["city", "country", "temperature"]);
    assert_eq!(first.get_str("city"), Some("Berlin"));
    assert_eq!(first.get_str("country"), Some("Germany"));
    assert_eq!(ds.records()[1].get_str("temperature"), Some("15"));
}

#[test]
fn loaded_file_answers_the_report() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "Cities.csv", CSV);
    let ds = Dataset::load_from_path(&path).unwrap();

    let report = Report::compute(&ds);
    assert_eq!(report.average_temperature, Some(11.0));
    assert_eq!(report.cities_in_germany.len(), 1);
    assert_eq!(report.cities_in_spain_above_threshold[0].get_str("city"), Some("Madrid"));
    assert_eq!(report.unique_country_count, 2);
}

#[test]
fn short_rows_get_null_and_long_rows_are_cut() {
    let csv = "city,country,temperature\nLodz,Poland\nOslo,Norway,4,extra\n";
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();

    let lodz = &ds.records()[0];
    assert!(lodz.contains_key("temperature"));
    assert_eq!(lodz.get("temperature"), Some(&Value::Null));

    let oslo = &ds.records()[1];
    assert_eq!(oslo.len(), 3);
    assert_eq!(oslo.get_f64("temperature"), Some(4.0));
}

#[test]
fn duplicate_headers_keep_the_later_column() {
    let csv = "country,temperature,Country\nSpain,20,Portugal\n";
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    let r = &ds.records()[0];
    assert_eq!(r.len(), 2);
    assert_eq!(r.get_str("country"), Some("Portugal"));
}

#[test]
fn header_only_and_empty_files_give_empty_datasets() {
    assert!(Dataset::from_reader("country,temperature\n".as_bytes())
        .unwrap()
        .is_empty());
    assert!(Dataset::from_reader("".as_bytes()).unwrap().is_empty());
}

#[test]
fn first_existing_candidate_wins() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");
    let second = write(&dir, "second.csv", "country\nSpain\n");
    let third = write(&dir, "third.csv", "country\nItaly\nFrance\n");

    let candidates = [missing, second.clone(), third];
    assert_eq!(locate(&candidates), Some(second));

    let ds = Dataset::load_from_candidates(&candidates).unwrap();
    assert_eq!(ds.distinct_countries().into_iter().collect::<Vec<_>>(), vec!["spain"]);
}

#[test]
fn no_existing_candidate_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let candidates = [dir.path().join("a.csv"), dir.path().join("b.csv")];

    assert_eq!(locate(&candidates), None);
    let err = Dataset::load_from_candidates(&candidates).unwrap_err();
    assert!(err.is_unavailable());
    match err {
        CityDbError::Unavailable { candidates: probed } => assert_eq!(probed, candidates.to_vec()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn explicit_missing_path_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = Dataset::load_from_path(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, CityDbError::NotFound(_)));
    assert!(!err.is_unavailable());
}

#[test]
fn default_candidates_follow_the_fixed_order() {
    let paths = default_candidates();
    assert_eq!(paths.len(), DEFAULT_CANDIDATES.len());
    assert_eq!(paths[0], std::path::PathBuf::from("./Cities.csv"));
    assert_eq!(paths[3], std::path::PathBuf::from("/mnt/data/Cities.csv"));
}

#[test]
fn bundled_sample_loads() {
    let path = Dataset::default_data_dir().join(Dataset::default_dataset_filename());
    let ds = Dataset::load_from_path(path).unwrap();

    assert_eq!(ds.len(), 18);
    assert_eq!(ds.cities_in_country("germany").len(), 3);
    assert_eq!(ds.unique_country_count(), 10);
    // Every row has the column, but Málaga ("n/a"), Lyon ("") and Łódź
    // (short row, Null) carry no usable temperature.
    assert_eq!(aggregate("temperature", folds::count, &ds), 18);
    let usable = aggregate(
        "temperature",
        |xs| xs.into_iter().filter_map(Value::as_f64).count(),
        &ds,
    );
    assert_eq!(usable, 15);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_input_is_decoded() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Cities.csv.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(CSV.as_bytes()).unwrap();
    enc.finish().unwrap();

    let ds = Dataset::load_from_path(&path).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.average_temperature(), Some(11.0));
}
