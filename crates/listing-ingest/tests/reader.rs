//! Integration tests for tolerant CSV reading.

use std::fs;

use listing_ingest::{
    IngestError, ReadOptions, apply_source_schema, csv_table_to_dataframe, read_csv_table,
};
use listing_model::SourceKind;
use proptest::prelude::{Strategy, prop, prop_assert_eq, proptest};

fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_dirty_website_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(
        &dir,
        "website_dataset.csv",
        "root_domain;domain_suffix;language;legal_name;main_city;main_country;main_region;phone;site_name;tld;s_category\n\
         foo.com;com;en;Foo LLC;Paris;France;IDF;+33 1;Foo;com;Shops\n\
         bar.io;io;en;Bar Inc;Lyon;France;ARA;+33 4;Bar;io;Food; Drinks; Catering\n\
         broken.net;net;en\n",
    );

    let (table, report) = read_csv_table(&path, &ReadOptions::new(';')).unwrap();
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_repaired, 1);
    assert_eq!(report.rows_dropped, 1);
    assert_eq!(table.height(), 2);
    assert_eq!(table.rows[1][10], "Food; Drinks; Catering");

    let df = apply_source_schema(&table, SourceKind::Website.schema()).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 8);
    let category: Vec<Option<&str>> = df
        .column("category")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(category, vec![Some("Shops"), Some("Food; Drinks; Catering")]);
}

#[test]
fn test_file_with_wrong_width_fails_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "google_dataset.csv", "a,b,c\n1,2,3\n");

    let (table, _) = read_csv_table(&path, &ReadOptions::new(',')).unwrap();
    let err = apply_source_schema(&table, SourceKind::Google.schema()).unwrap_err();
    assert!(matches!(err, IngestError::ColumnArityMismatch { .. }));
}

#[test]
fn test_short_row_decreases_count_by_one() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_temp(&dir, "clean.csv", "a,b,c\n1,2,3\n4,5,6\n");
    let dirty = write_temp(&dir, "dirty.csv", "a,b,c\n1,2,3\nx,y\n4,5,6\n");

    let (clean_table, _) = read_csv_table(&clean, &ReadOptions::new(',')).unwrap();
    let (dirty_table, _) = read_csv_table(&dirty, &ReadOptions::new(',')).unwrap();
    assert_eq!(dirty_table.height(), clean_table.height());
    assert_eq!(dirty_table, clean_table);
}

fn well_formed_rows() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..6).prop_flat_map(|width| {
        (
            prop::collection::vec("[a-z]{1,6}", width),
            prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 .]{1,8}", width), 0..20),
        )
    })
}

proptest! {
    #[test]
    fn prop_well_formed_rows_round_trip((headers, rows) in well_formed_rows()) {
        let dir = tempfile::tempdir().unwrap();
        let mut content = headers.join(",");
        content.push('\n');
        for row in &rows {
            content.push_str(&row.join(","));
            content.push('\n');
        }
        let path = write_temp(&dir, "input.csv", &content);

        let (table, report) = read_csv_table(&path, &ReadOptions::new(',')).unwrap();
        prop_assert_eq!(&table.headers, &headers);
        prop_assert_eq!(&table.rows, &rows);
        prop_assert_eq!(report.rows_repaired, 0);
        prop_assert_eq!(report.rows_dropped, 0);

        let df = csv_table_to_dataframe(&table).unwrap();
        prop_assert_eq!(df.height(), rows.len());
    }
}
