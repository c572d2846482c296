use predicates::str::contains;
use std::fs;

mod common;
use common::{fp, setup_test_db};

#[test]
fn test_init_creates_tables() {
    let db_path = setup_test_db("init_tables");

    fp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name IN ('records','log') ORDER BY name")
        .unwrap();
    let names: Vec<String> = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(names, vec!["log", "records"]);
}

#[test]
fn test_db_info_counts_records() {
    let db_path = setup_test_db("db_info");

    fp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for _ in 0..3 {
        fp().args(["--db", &db_path, "calc"]).assert().success();
    }

    fp()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Stored records:"))
        .stdout(contains("3"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_db_vacuum() {
    let db_path = setup_test_db("db_vacuum");

    fp().args(["--db", &db_path, "calc"]).assert().success();

    fp()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed."));
}

#[test]
fn test_config_print_shows_defaults() {
    fp()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("organic_reduction: 0.85"))
        .stdout(contains("recommended: 5.0"));
}

#[test]
fn test_config_file_overrides_factors() {
    let home = std::env::temp_dir().join("footprint_test_home_custom");
    let conf_dir = home.join(".footprint");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("footprint.conf"),
        "factors:\n  public_transport_per_km: 1.0\n",
    )
    .unwrap();

    let db_path = setup_test_db("config_override");

    fp()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args([
            "--db",
            &db_path,
            "calc",
            "--distance",
            "3",
            "--laptop",
            "0",
            "--mobile",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("3.00 kg CO₂/day"));
}

#[test]
fn test_malformed_config_fails() {
    let home = std::env::temp_dir().join("footprint_test_home_broken");
    let conf_dir = home.join(".footprint");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("footprint.conf"), "factors: [1, 2").unwrap();

    fp()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

/// Seed a config home whose file overrides the database and one food factor.
fn seed_custom_config(name: &str, db_path: &str) -> std::path::PathBuf {
    let home = std::env::temp_dir().join(format!("footprint_test_home_{}", name));
    let conf_dir = home.join(".footprint");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("footprint.conf"),
        format!("database: {}\nfactors:\n  food:\n    chicken: 1.0\n", db_path),
    )
    .unwrap();
    home
}

fn read_conf(home: &std::path::Path) -> serde_yaml::Value {
    let text = fs::read_to_string(home.join(".footprint").join("footprint.conf")).unwrap();
    serde_yaml::from_str(&text).unwrap()
}

#[test]
fn test_init_keeps_existing_config() {
    let db_path = setup_test_db("init_keeps_config");
    let home = seed_custom_config("init_keep", &db_path);

    fp()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conf = read_conf(&home);
    assert_eq!(conf["database"].as_str(), Some(db_path.as_str()));
    assert_eq!(conf["factors"]["food"]["chicken"].as_f64(), Some(1.0));
    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_with_db_only_replaces_database() {
    let old_db = setup_test_db("init_old_db");
    let new_db = setup_test_db("init_new_db");
    let home = seed_custom_config("init_move", &old_db);

    fp()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--db", &new_db, "init"])
        .assert()
        .success();

    let conf = read_conf(&home);
    assert_eq!(conf["database"].as_str(), Some(new_db.as_str()));
    assert_eq!(conf["factors"]["food"]["chicken"].as_f64(), Some(1.0));
    assert!(std::path::Path::new(&new_db).exists());
    assert!(!std::path::Path::new(&old_db).exists());
}
