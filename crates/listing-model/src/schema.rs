//! Static source schemas and reconciliation rules.
//!
//! Each source file is read positionally: its raw header only fixes the
//! column count, and [`SourceSchema::columns`] assigns the names. Columns in
//! [`SourceSchema::dropped`] are discarded right after loading, and
//! [`SourceSchema::normalized`] lists the comparison columns that are
//! lowercased and trimmed before the join.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Join key shared by all three sources.
pub const JOIN_KEY: &str = "domain";

/// Identifies one of the three listing sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Web-crawl dataset.
    Website,
    /// Maps-data dataset.
    Google,
    /// Social-profile dataset.
    Facebook,
}

impl SourceKind {
    /// All sources in join order.
    pub const ALL: [SourceKind; 3] = [Self::Website, Self::Google, Self::Facebook];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }

    /// Static schema for this source.
    pub fn schema(self) -> &'static SourceSchema {
        match self {
            Self::Website => &WEBSITE_SCHEMA,
            Self::Google => &GOOGLE_SCHEMA,
            Self::Facebook => &FACEBOOK_SCHEMA,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column layout of one source file.
#[derive(Debug, Clone, Copy)]
pub struct SourceSchema {
    pub kind: SourceKind,
    /// Names assigned to the file's columns, by position.
    pub columns: &'static [&'static str],
    /// Columns removed immediately after loading.
    pub dropped: &'static [&'static str],
    /// Comparison columns lowercased and trimmed before the join.
    pub normalized: &'static [&'static str],
}

impl SourceSchema {
    /// Columns that survive the drop step, in file order.
    pub fn kept_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns
            .iter()
            .copied()
            .filter(|name| !self.dropped.contains(name))
    }
}

pub static WEBSITE_SCHEMA: SourceSchema = SourceSchema {
    kind: SourceKind::Website,
    columns: &[
        "domain",
        "domain_suffix",
        "language",
        "legal_name",
        "city",
        "country",
        "region_name",
        "phone",
        "name",
        "tld",
        "category",
    ],
    dropped: &["domain_suffix", "language", "tld"],
    normalized: &["domain", "city", "country", "region_name", "name", "category"],
};

pub static GOOGLE_SCHEMA: SourceSchema = SourceSchema {
    kind: SourceKind::Google,
    columns: &[
        "address",
        "category",
        "city",
        "country_code",
        "country",
        "name",
        "phone",
        "phone_country_code",
        "raw_address",
        "raw_phone",
        "region_code",
        "region_name",
        "text",
        "zip_code",
        "domain",
    ],
    dropped: &[
        "text",
        "phone_country_code",
        "region_code",
        "country_code",
        "raw_address",
        "raw_phone",
        "zip_code",
    ],
    normalized: &[
        "domain",
        "city",
        "address",
        "country",
        "region_name",
        "name",
        "category",
    ],
};

pub static FACEBOOK_SCHEMA: SourceSchema = SourceSchema {
    kind: SourceKind::Facebook,
    columns: &[
        "domain",
        "address",
        "category",
        "city",
        "country_code",
        "country",
        "description",
        "email",
        "link",
        "name",
        "page_type",
        "phone",
        "phone_country_code",
        "region_code",
        "region_name",
        "zip_code",
    ],
    dropped: &[
        "description",
        "phone_country_code",
        "region_code",
        "zip_code",
        "country_code",
    ],
    normalized: &[
        "domain",
        "city",
        "address",
        "country",
        "region_name",
        "name",
        "category",
    ],
};

/// Suffixes applied to overlapping non-key columns during a left join.
///
/// An empty suffix leaves the column name unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinSuffixes {
    pub left: &'static str,
    pub right: &'static str,
}

/// Suffixes for `website LEFT JOIN google`.
pub const WEBSITE_GOOGLE_SUFFIXES: JoinSuffixes = JoinSuffixes {
    left: "_website",
    right: "_google",
};

/// Suffixes for `(website, google) LEFT JOIN facebook`.
pub const FACEBOOK_SUFFIXES: JoinSuffixes = JoinSuffixes {
    left: "",
    right: "_facebook",
};

/// One reconciliation call: candidate columns in priority order and the
/// resolved output column.
///
/// Slots are `[primary, secondary, tertiary]`; `None` marks an unused slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveSpec {
    pub output: &'static str,
    pub candidates: [Option<&'static str>; 3],
}

impl ResolveSpec {
    pub const fn new(output: &'static str, candidates: [Option<&'static str>; 3]) -> Self {
        Self { output, candidates }
    }

    /// Configured candidate columns in priority order.
    pub fn candidate_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.candidates.iter().flatten().copied()
    }
}

/// Reconciliation calls, applied in this order after both joins.
pub const ATTRIBUTE_RESOLUTIONS: [ResolveSpec; 7] = [
    ResolveSpec::new(
        "resolved_name",
        [Some("name_website"), Some("name_google"), Some("name")],
    ),
    ResolveSpec::new(
        "resolved_address",
        [None, Some("address"), Some("address_facebook")],
    ),
    ResolveSpec::new(
        "resolved_category",
        [
            Some("category_website"),
            Some("category_google"),
            Some("category"),
        ],
    ),
    ResolveSpec::new(
        "resolved_phone",
        [Some("phone_website"), Some("phone_google"), Some("phone")],
    ),
    ResolveSpec::new(
        "resolved_city",
        [Some("city_website"), Some("city_google"), Some("city")],
    ),
    ResolveSpec::new(
        "resolved_country",
        [
            Some("country_website"),
            Some("country_google"),
            Some("country"),
        ],
    ),
    ResolveSpec::new(
        "resolved_region_name",
        [
            Some("region_name_website"),
            Some("region_name_google"),
            Some("region_name"),
        ],
    ),
];

/// Final column order of the merged dataset (after the row-index column).
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "domain",
    "resolved_name",
    "resolved_category",
    "resolved_address",
    "resolved_city",
    "resolved_country",
    "resolved_region_name",
    "resolved_phone",
    "legal_name",
    "email",
    "link",
    "page_type",
];
