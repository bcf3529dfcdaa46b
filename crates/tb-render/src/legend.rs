//! Legend data: node kinds and the table-type palette

use serde::Serialize;
use tb_core::graph::{COLUMN_COLOR, TABLE_COLOR, TRANSFORMATION_COLOR};
use tb_core::TableType;

/// One swatch in a legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn node_kind_legend() -> [LegendEntry; 3] {
    [
        LegendEntry {
            label: "Tables",
            color: TABLE_COLOR,
        },
        LegendEntry {
            label: "Columns",
            color: COLUMN_COLOR,
        },
        LegendEntry {
            label: "Transformations",
            color: TRANSFORMATION_COLOR,
        },
    ]
}

/// Every table type with its fill color, `Other` last
pub fn table_type_legend() -> Vec<LegendEntry> {
    TableType::ALL
        .iter()
        .map(|t| LegendEntry {
            label: t.label(),
            color: t.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legends() {
        let kinds = node_kind_legend();
        assert_eq!(kinds[0].color, "#4CAF50");
        assert_eq!(kinds[2].label, "Transformations");

        let types = table_type_legend();
        assert_eq!(types.len(), 16);
        assert_eq!(types[0].label, "HIVE");
        let other = types.last().unwrap();
        assert_eq!((other.label, other.color), ("Other", "#9E9E9E"));
    }
}
