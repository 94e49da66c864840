// End-to-end tests for the generation pipeline
use modelgen::error::ModelgenError;
use modelgen::pipeline;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DUMP: &str = "\
SET NAMES utf8mb4;

CREATE TABLE `user_account` (
  `id` INT(11) NOT NULL AUTO_INCREMENT,
  `full_name` VARCHAR(255) DEFAULT NULL COMMENT 'name',
  `status` TINYINT(1) DEFAULT 1 COMMENT 'account status',
  PRIMARY KEY (`id`)
) ENGINE = InnoDB COMMENT = 'users' ROW_FORMAT = Compact;

CREATE TABLE `order_item` (
  `id` INT(11) NOT NULL AUTO_INCREMENT,
  `sku` CHAR(32) DEFAULT '' COMMENT 'stock keeping unit',
  `status` TINYINT(1) DEFAULT 0 COMMENT 'line status',
  PRIMARY KEY (`id`)
) ENGINE = InnoDB COMMENT = 'order lines' ROW_FORMAT = Compact;
";

fn write_dump(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("schema.sql");
    fs::write(&path, content).unwrap();
    path
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("modelgen.json");
    fs::write(&path, content).unwrap();
    path
}

fn read_sorted_files(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<(String, Vec<u8>)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn generate_writes_one_model_file_per_table() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let out = tmp.path().join("models");

    let summary = pipeline::generate(&sql, &out, None, false).unwrap();

    assert_eq!(summary.tables, 2);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.failed, 0);

    let user_model = fs::read_to_string(out.join("userAccount.js")).unwrap();
    assert!(user_model.contains("sequelize.define('user_account'"));
    assert!(user_model.contains("DataTypes.STRING(255)"));
    assert!(user_model.contains("comment: 'users'"));
    assert!(out.join("orderItem.js").is_file());
}

#[test]
fn generate_twice_is_byte_identical_and_resets_stale_files() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let out = tmp.path().join("models");

    pipeline::generate(&sql, &out, None, false).unwrap();
    let first = read_sorted_files(&out);

    fs::write(out.join("stale.js"), "leftover").unwrap();
    pipeline::generate(&sql, &out, None, false).unwrap();
    let second = read_sorted_files(&out);

    assert_eq!(first, second);
    assert!(!out.join("stale.js").exists());
}

#[test]
fn missing_sql_source_is_fatal_with_no_side_effects() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("models");

    let err = pipeline::generate(&tmp.path().join("absent.sql"), &out, None, false).unwrap_err();

    assert!(matches!(err, ModelgenError::SqlSourceMissing { .. }));
    assert!(!out.exists());
}

#[test]
fn supplied_but_missing_config_is_fatal_before_any_write() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let out = tmp.path().join("models");

    let err =
        pipeline::generate(&sql, &out, Some(&tmp.path().join("absent.json")), false).unwrap_err();

    assert!(matches!(err, ModelgenError::ConfigMissing { .. }));
    assert!(!out.exists());
}

#[test]
fn malformed_config_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let config = write_config(&tmp, "{ this is not json");
    let out = tmp.path().join("models");

    let err = pipeline::generate(&sql, &out, Some(&config), false).unwrap_err();

    assert!(matches!(err, ModelgenError::Config { .. }));
    // the directory reset precedes config loading, so the directory exists
    // but stays empty
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn unrecognized_naming_tag_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let config = write_config(&tmp, r#"{"fileNaming": "shoutyCase"}"#);
    let out = tmp.path().join("models");

    let err = pipeline::generate(&sql, &out, Some(&config), false).unwrap_err();
    assert!(matches!(err, ModelgenError::Config { .. }));
}

#[test]
fn dump_without_tables_is_a_distinguishable_error() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, "-- schema comment\nSELECT 1;\n");
    let out = tmp.path().join("models");

    let err = pipeline::generate(&sql, &out, None, false).unwrap_err();

    assert!(matches!(err, ModelgenError::NoTablesFound));
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn data_type_override_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let config = write_config(&tmp, r#"{"dataType": {"VARCHAR": "TEXT"}}"#);
    let out = tmp.path().join("models");

    pipeline::generate(&sql, &out, Some(&config), false).unwrap();

    let user_model = fs::read_to_string(out.join("userAccount.js")).unwrap();
    assert!(user_model.contains("DataTypes.TEXT(255)"));
}

#[test]
fn default_value_override_applies_across_tables() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let config = write_config(&tmp, r#"{"defaultValues": {"status": "9"}}"#);
    let out = tmp.path().join("models");

    pipeline::generate(&sql, &out, Some(&config), false).unwrap();

    for file in ["userAccount.js", "orderItem.js"] {
        let model = fs::read_to_string(out.join(file)).unwrap();
        assert!(model.contains("defaultValue: '9'"), "file {}", file);
    }
}

#[test]
fn naming_strategy_and_extension_come_from_config() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let config = write_config(&tmp, r#"{"fileNaming": "kebabCase", "modelExt": "ts"}"#);
    let out = tmp.path().join("models");

    pipeline::generate(&sql, &out, Some(&config), false).unwrap();

    assert!(out.join("user-account.ts").is_file());
    assert!(out.join("order-item.ts").is_file());
}

#[test]
fn inline_template_overrides_the_bundled_default() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let config = write_config(&tmp, r#"{"modelTmpl": "TABLE {{name}}\n"}"#);
    let out = tmp.path().join("models");

    pipeline::generate(&sql, &out, Some(&config), false).unwrap();

    let user_model = fs::read_to_string(out.join("userAccount.js")).unwrap();
    assert_eq!(user_model, "TABLE user_account\n");
}

#[test]
fn unknown_type_renders_a_marker_unless_configured_fatal() {
    let spatial_dump = "\
CREATE TABLE `spatial` (
  `area` GEOMETRY(1) DEFAULT NULL COMMENT 'region outline',
  PRIMARY KEY (`area`)
) ROW_FORMAT = Compact;
";
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, spatial_dump);
    let out = tmp.path().join("models");

    pipeline::generate(&sql, &out, None, false).unwrap();
    let model = fs::read_to_string(out.join("spatial.js")).unwrap();
    assert!(model.contains("UNKNOWN(GEOMETRY)"));

    let config = write_config(&tmp, r#"{"failOnUnknownType": true}"#);
    let err = pipeline::generate(&sql, &out, Some(&config), false).unwrap_err();
    assert!(matches!(
        err,
        ModelgenError::UnknownType { ref raw_type, .. } if raw_type == "GEOMETRY"
    ));
    // fatal before the write loop: the reset directory stays empty
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn inspect_returns_tables_in_document_order_without_writing() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);

    let tables = pipeline::inspect(&sql, None).unwrap();

    let names: Vec<&str> = tables.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["user_account", "order_item"]);
    // only the dump itself lives in the temp dir, nothing was generated
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn duplicate_table_name_keeps_the_last_definition() {
    let doubled = format!(
        "{}\nCREATE TABLE `user_account` (\n  `nickname` VARCHAR(64) DEFAULT '' COMMENT 'alias',\n  PRIMARY KEY (`nickname`)\n) COMMENT = 'users v2' ROW_FORMAT = Compact;\n",
        DUMP
    );
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, &doubled);

    let tables = pipeline::inspect(&sql, None).unwrap();

    assert_eq!(tables.len(), 2);
    let user = tables.get("user_account").unwrap();
    assert_eq!(user.comment, "users v2");
    assert_eq!(user.fields.len(), 1);
    assert_eq!(user.fields[0].name, "nickname");
}

#[test]
fn parallel_generation_matches_sequential() {
    let tmp = TempDir::new().unwrap();
    let sql = write_dump(&tmp, DUMP);
    let sequential = tmp.path().join("sequential");
    let parallel = tmp.path().join("parallel");

    let summary_seq = pipeline::generate(&sql, &sequential, None, false).unwrap();
    let summary_par = pipeline::generate(&sql, &parallel, None, true).unwrap();

    assert_eq!(summary_seq.written, summary_par.written);
    assert_eq!(read_sorted_files(&sequential), read_sorted_files(&parallel));
}
