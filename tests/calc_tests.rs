use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{close, fp, read_records, setup_test_db};

#[test]
fn test_calc_prints_breakdown_and_stores_row() {
    let db_path = setup_test_db("calc_basic");

    fp()
        .args([
            "--db",
            &db_path,
            "calc",
            "--name",
            "Asha",
            "--education",
            "undergraduate",
            "--city",
            "Pune",
            "--transport",
            "public",
            "--distance",
            "10",
            "--lunch",
            "rice-grains,chicken",
            "--laptop",
            "6",
            "--mobile",
            "4",
            "--ai-hours",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Results for Asha"))
        .stdout(contains("0.50 kg CO₂/day"))
        .stdout(contains("4.00 kg CO₂/day"))
        .stdout(contains("0.34 kg CO₂/day"))
        .stdout(contains("0.04 kg CO₂/day"))
        .stdout(contains("4.88"))
        .stdout(contains("Your footprint is within sustainable limits."))
        .stdout(contains("Record #1 stored"));

    let rows = read_records(&db_path);
    assert_eq!(rows.len(), 1);

    let r = &rows[0];
    assert_eq!(r.name, "Asha");
    assert_eq!(r.education, "Undergraduate");
    assert_eq!(r.city, "Pune");
    assert!(close(r.transport, 0.5));
    assert!(close(r.diet, 4.0));
    assert!(close(r.device, 0.34));
    assert!(close(r.ai, 0.04));
    assert_eq!(r.total, r.transport + r.diet + r.device + r.ai);
}

#[test]
fn test_calc_above_limits_lists_suggestions() {
    let db_path = setup_test_db("calc_advice");

    // transport 1.8, diet 6.0, device 0.34 → 8.14
    fp()
        .args([
            "--db",
            &db_path,
            "calc",
            "--transport",
            "private",
            "--dinner",
            "red-meat",
        ])
        .assert()
        .success()
        .stdout(contains("Your footprint is above sustainable levels. Suggested actions:"))
        .stdout(contains("- Prefer public or shared transport."))
        .stdout(contains("- Reduce animal-based and processed food items."))
        .stdout(contains("- Increase plant-based or vegan protein sources."))
        .stdout(contains("Reduce screen time").not())
        .stdout(contains("Limit unnecessary AI queries").not());
}

#[test]
fn test_calc_organic_meal() {
    let db_path = setup_test_db("calc_organic");

    fp()
        .args([
            "--db",
            &db_path,
            "calc",
            "--breakfast",
            "rice-grains,chicken",
            "--breakfast-organic",
            "--distance",
            "0",
            "--laptop",
            "0",
            "--mobile",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("3.40 kg CO₂/day"));

    let rows = read_records(&db_path);
    assert!(close(rows[0].diet, 3.4));
    assert!(close(rows[0].total, 3.4));
}

#[test]
fn test_calc_repeated_food_counts_once() {
    let db_path = setup_test_db("calc_repeated_food");

    fp()
        .args([
            "--db",
            &db_path,
            "calc",
            "--lunch",
            "red-meat,red-meat,red-meat",
            "--distance",
            "0",
            "--laptop",
            "0",
            "--mobile",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("6.00 kg CO₂/day"));

    let rows = read_records(&db_path);
    assert!(close(rows[0].diet, 6.0));
    assert!(close(rows[0].total, 6.0));
}

#[test]
fn test_calc_n_submissions_give_n_rows() {
    let db_path = setup_test_db("calc_many");

    for i in 0..4u32 {
        let distance = (i * 10).to_string();
        fp()
            .args([
                "--db",
                &db_path,
                "calc",
                "--name",
                "Same",
                "--transport",
                "private",
                "--distance",
                &distance,
            ])
            .assert()
            .success();
    }

    let rows = read_records(&db_path);
    assert_eq!(rows.len(), 4);

    for (i, r) in rows.iter().enumerate() {
        assert!(close(r.transport, i as f64 * 10.0 * 0.18));
        if i > 0 {
            assert!(r.id > rows[i - 1].id);
        }
    }
}

#[test]
fn test_calc_identical_inputs_are_not_deduplicated() {
    let db_path = setup_test_db("calc_dupes");

    for _ in 0..2 {
        fp()
            .args(["--db", &db_path, "calc", "--name", "Twin", "--city", "Goa"])
            .assert()
            .success();
    }

    let rows = read_records(&db_path);
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
    assert_eq!(rows[0].total, rows[1].total);
}

#[test]
fn test_calc_rejects_out_of_range_distance() {
    let db_path = setup_test_db("calc_range");

    fp()
        .args(["--db", &db_path, "calc", "--distance", "101"])
        .assert()
        .failure();

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_calc_rejects_unknown_food() {
    let db_path = setup_test_db("calc_food");

    fp()
        .args(["--db", &db_path, "calc", "--lunch", "pizza"])
        .assert()
        .failure()
        .stderr(contains("pizza"));
}

#[test]
fn test_calc_writes_internal_log() {
    let db_path = setup_test_db("calc_log");

    fp()
        .args(["--db", &db_path, "calc", "--name", "Ravi", "--city", "Agra"])
        .assert()
        .success();

    fp()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Ravi (Agra)"));
}

#[test]
fn test_calc_storage_failure_is_reported() {
    // A directory cannot be opened as a SQLite database
    let dir = std::env::temp_dir().join("footprint_calc_dir_as_db");
    std::fs::create_dir_all(&dir).unwrap();

    fp()
        .args(["--db", &dir.to_string_lossy(), "calc"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Database error"));
}
