//! Integration tests: ingest, normalize and merge three sources in memory.

use listing_ingest::{ReadOptions, apply_source_schema, parse_csv_str};
use listing_model::{OUTPUT_COLUMNS, SourceKind};
use listing_transform::{
    ResolveStats, column_names, column_values, lowercase_and_trim, merge_sources,
};
use polars::prelude::DataFrame;

fn delimiter(kind: SourceKind) -> char {
    match kind {
        SourceKind::Website => ';',
        SourceKind::Google | SourceKind::Facebook => ',',
    }
}

/// One raw line with the given values placed by column name, blanks elsewhere.
fn line(kind: SourceKind, values: &[(&str, &str)]) -> String {
    kind.schema()
        .columns
        .iter()
        .map(|column| {
            values
                .iter()
                .find(|(name, _)| name == column)
                .map_or("", |(_, value)| *value)
        })
        .collect::<Vec<_>>()
        .join(delimiter(kind).to_string().as_str())
}

fn source(kind: SourceKind, rows: &[&[(&str, &str)]]) -> DataFrame {
    let schema = kind.schema();
    let mut text = schema.columns.join(delimiter(kind).to_string().as_str());
    text.push('\n');
    for row in rows {
        text.push_str(&line(kind, row));
        text.push('\n');
    }
    let (table, _) = parse_csv_str(&text, &ReadOptions::new(delimiter(kind))).unwrap();
    let mut df = apply_source_schema(&table, schema).unwrap();
    lowercase_and_trim(&mut df, schema.normalized).unwrap();
    df
}

fn stats_for<'a>(stats: &'a [ResolveStats], output: &str) -> &'a ResolveStats {
    stats.iter().find(|s| s.output == output).unwrap()
}

#[test]
fn test_normalization_happens_before_override() {
    let website = source(
        SourceKind::Website,
        &[&[("domain", "Foo.COM"), ("name", "Foo "), ("phone", "+33 1")]],
    );
    let google = source(
        SourceKind::Google,
        &[&[("domain", "foo.com"), ("name", "foo inc"), ("address", "1 Main St ")]],
    );
    let facebook = source(SourceKind::Facebook, &[]);

    let outcome = merge_sources(&website, &google, &facebook).unwrap();

    assert_eq!(column_names(&outcome.data), OUTPUT_COLUMNS.to_vec());
    assert_eq!(outcome.data.height(), 1);
    assert_eq!(
        column_values(&outcome.data, "domain").unwrap(),
        vec![Some("foo.com".to_string())]
    );
    assert_eq!(
        column_values(&outcome.data, "resolved_name").unwrap(),
        vec![Some("foo".to_string())]
    );
    assert_eq!(
        column_values(&outcome.data, "resolved_address").unwrap(),
        vec![Some("1 main st".to_string())]
    );
    // No facebook match: facebook-only columns are null.
    assert_eq!(column_values(&outcome.data, "email").unwrap(), vec![None]);
    assert_eq!(
        stats_for(&outcome.resolutions, "resolved_name").primary_override,
        1
    );
}

#[test]
fn test_values_equal_after_normalization_use_fallback() {
    let website = source(
        SourceKind::Website,
        &[&[("domain", "foo.com"), ("name", "Foo ")]],
    );
    let google = source(SourceKind::Google, &[&[("domain", "foo.com"), ("name", "foo")]]);
    let facebook = source(
        SourceKind::Facebook,
        &[&[("domain", "foo.com"), ("name", "FOO Page"), ("email", "hi@foo.com")]],
    );

    let outcome = merge_sources(&website, &google, &facebook).unwrap();

    assert_eq!(
        column_values(&outcome.data, "resolved_name").unwrap(),
        vec![Some("foo".to_string())]
    );
    assert_eq!(
        column_values(&outcome.data, "email").unwrap(),
        vec![Some("hi@foo.com".to_string())]
    );
    let name_stats = stats_for(&outcome.resolutions, "resolved_name");
    assert_eq!(name_stats.primary_override, 0);
    assert_eq!(name_stats.first_non_null, 1);
}

#[test]
fn test_website_rows_without_matches_survive() {
    let website = source(
        SourceKind::Website,
        &[
            &[("domain", "a.com"), ("name", "A")],
            &[("domain", "b.com"), ("name", "B")],
        ],
    );
    let google = source(SourceKind::Google, &[]);
    let facebook = source(SourceKind::Facebook, &[]);

    let outcome = merge_sources(&website, &google, &facebook).unwrap();

    assert_eq!(
        column_values(&outcome.data, "resolved_name").unwrap(),
        vec![Some("a".to_string()), Some("b".to_string())]
    );
    assert_eq!(
        column_values(&outcome.data, "resolved_address").unwrap(),
        vec![None, None]
    );
    assert_eq!(
        stats_for(&outcome.resolutions, "resolved_address").all_null,
        2
    );
}

#[test]
fn test_fan_out_row_count() {
    let website = source(
        SourceKind::Website,
        &[
            &[("domain", "a.com")],
            &[("domain", "b.com")],
            &[("domain", "c.com")],
        ],
    );
    let google = source(
        SourceKind::Google,
        &[&[("domain", "a.com")], &[("domain", "A.com ")]],
    );
    let facebook = source(
        SourceKind::Facebook,
        &[
            &[("domain", "a.com"), ("link", "l1")],
            &[("domain", "a.com"), ("link", "l2")],
            &[("domain", "a.com"), ("link", "l3")],
            &[("domain", "b.com"), ("link", "l4")],
        ],
    );

    let outcome = merge_sources(&website, &google, &facebook).unwrap();

    // a: 2 google x 3 facebook, b: 1 x 1, c: 1 x 1
    assert_eq!(outcome.data.height(), 8);
    assert_eq!(
        column_values(&outcome.data, "link").unwrap(),
        vec![
            Some("l1".to_string()),
            Some("l2".to_string()),
            Some("l3".to_string()),
            Some("l1".to_string()),
            Some("l2".to_string()),
            Some("l3".to_string()),
            Some("l4".to_string()),
            None,
        ]
    );
    for stats in &outcome.resolutions {
        assert_eq!(stats.rows(), 8);
    }
}
