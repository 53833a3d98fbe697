use std::fs;

use vardata_api::{JsonFile, MatFile, NumberLocale, Value};

fn write_json(dir: &tempfile::TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn json_scalar_reads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "gains.json",
        r#"{
            "controller": {
                "pid": { "k": 0.75, "n": 20, "label": "inner loop" }
            },
            "comment": "tuning set A"
        }"#,
    );

    let file = JsonFile::open(&path, true);
    assert_eq!(file.read_f64("controller.pid.k"), Some(0.75));
    assert_eq!(file.read_i64("controller.pid.n"), Some(20));
    assert_eq!(
        file.read_string("controller.pid.label"),
        Some("inner loop".to_string())
    );
    assert_eq!(file.read_string("comment"), Some("tuning set A".to_string()));
    assert_eq!(file.read_value("controller.pid.n"), Some(Value::Int(20)));

    // Absent paths are advisory, not fatal.
    assert_eq!(file.read_f64("controller.lqr.k"), None);
    assert_eq!(file.read_string("controller.pid.comment"), None);
}

#[test]
fn json_type_mismatch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "strings.json", r#"{"a": "hello"}"#);

    let file = JsonFile::open(&path, false);
    assert!(file.try_read_f64("a").is_err());
    assert!(file.try_read_i64("a").is_err());
}

#[test]
#[should_panic]
fn json_type_mismatch_panics_in_the_panicking_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "strings.json", r#"{"a": "hello"}"#);

    let file = JsonFile::open(&path, false);
    file.read_f64("a");
}

#[test]
fn json_open_reports_parse_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "broken.json", "{\n  \"a\": 1,\n}");

    let error = JsonFile::try_open(&path, false).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("broken.json"), "{}", message);
    assert!(message.contains("line 3"), "{}", message);
}

#[test]
fn json_missing_file_is_fatal() {
    assert!(JsonFile::try_open("no/such/file.json", false).is_err());
}

#[test]
fn json_locale_applies_per_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "comma.json", r#"{"x": "2,5"}"#);

    let mut comma = JsonFile::open(&path, false);
    comma.set_locale(NumberLocale::comma());
    let point = JsonFile::open(&path, false);

    assert_eq!(comma.read_f64("x"), Some(2.5));
    assert!(point.try_read_f64("x").is_err());
}

#[test]
fn mat_write_read_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.mat");
    let mat = MatFile::open(path.to_str().unwrap(), false);

    let table = [0.0, 0.0, 1.0, 1.0, 2.0, 4.0, 3.0, 9.0];
    mat.write_matrix("curve", &table, 4, 2, false);

    assert_eq!(mat.matrix_dims("curve"), (4, 2));
    assert_eq!(mat.read_matrix("curve", 4, 2), table);

    mat.write_matrix("scale", &[2.0], 1, 1, true);
    mat.write_matrix("curve", &[1.0, 1.0], 1, 2, true);

    assert_eq!(mat.variable_names(), ["scale", "curve"]);
    assert_eq!(mat.read_matrix("curve", 1, 2), [1.0, 1.0]);
    assert_eq!(mat.read_matrix("scale", 1, 1), [2.0]);
}

#[test]
fn mat_dimension_mismatch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.mat");
    let mat = MatFile::open(path.to_str().unwrap(), false);
    mat.write_matrix("m", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3, false);

    assert!(mat.try_read_matrix("m", 3, 2).is_err());
    assert!(mat.try_read_matrix("m", 2, 2).is_err());
    assert!(mat.try_matrix_dims("other").is_err());
}

#[test]
#[should_panic]
fn mat_missing_variable_panics_in_the_panicking_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.mat");
    let mat = MatFile::open(path.to_str().unwrap(), false);
    mat.write_matrix("m", &[1.0], 1, 1, false);
    mat.read_matrix("absent", 1, 1);
}
