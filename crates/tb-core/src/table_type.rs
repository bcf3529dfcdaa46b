//! Source-system types for tables and their display palette

use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Database or storage system a table lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableType {
    Hive,
    Oracle,
    Snowflake,
    PostgreSql,
    MySql,
    SqlServer,
    BigQuery,
    Redshift,
    Teradata,
    Db2,
    Cassandra,
    MongoDb,
    Spark,
    DeltaLake,
    Iceberg,
    /// Anything not listed above (default)
    #[default]
    Other,
}

impl TableType {
    /// Every type in display order; `Other` is last.
    pub const ALL: [TableType; 16] = [
        TableType::Hive,
        TableType::Oracle,
        TableType::Snowflake,
        TableType::PostgreSql,
        TableType::MySql,
        TableType::SqlServer,
        TableType::BigQuery,
        TableType::Redshift,
        TableType::Teradata,
        TableType::Db2,
        TableType::Cassandra,
        TableType::MongoDb,
        TableType::Spark,
        TableType::DeltaLake,
        TableType::Iceberg,
        TableType::Other,
    ];

    /// Label used in documents and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            TableType::Hive => "HIVE",
            TableType::Oracle => "Oracle",
            TableType::Snowflake => "Snowflake",
            TableType::PostgreSql => "PostgreSQL",
            TableType::MySql => "MySQL",
            TableType::SqlServer => "SQL Server",
            TableType::BigQuery => "BigQuery",
            TableType::Redshift => "Redshift",
            TableType::Teradata => "Teradata",
            TableType::Db2 => "DB2",
            TableType::Cassandra => "Cassandra",
            TableType::MongoDb => "MongoDB",
            TableType::Spark => "Spark",
            TableType::DeltaLake => "Delta Lake",
            TableType::Iceberg => "Iceberg",
            TableType::Other => "Other",
        }
    }

    /// Fill color for table nodes of this type.
    pub fn color(self) -> &'static str {
        match self {
            TableType::Hive => "#FF9800",
            TableType::Oracle => "#F44336",
            TableType::Snowflake => "#2196F3",
            TableType::PostgreSql => "#336791",
            TableType::MySql => "#4479A1",
            TableType::SqlServer => "#CC2927",
            TableType::BigQuery => "#4285F4",
            TableType::Redshift => "#8C4FFF",
            TableType::Teradata => "#F37440",
            TableType::Db2 => "#1F70C1",
            TableType::Cassandra => "#1287B1",
            TableType::MongoDb => "#47A248",
            TableType::Spark => "#E25A1C",
            TableType::DeltaLake => "#00ADD4",
            TableType::Iceberg => "#3F7CAC",
            TableType::Other => "#9E9E9E",
        }
    }

    /// Parse a label, falling back to `Other` for anything unrecognized.
    pub fn from_label_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            log::warn!("Unknown table type '{}', treating it as Other", s);
            TableType::Other
        })
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TableType {
    type Err = CoreError;

    /// Labels match case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TableType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "table type",
                value: s.to_string(),
                expected: TableType::ALL
                    .iter()
                    .map(|t| t.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl Serialize for TableType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TableType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TableType::from_label_lossy(&s))
    }
}
