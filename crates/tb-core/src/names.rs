//! Strongly-typed catalog identifiers.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// Name of a table; unique within a catalog.
    pub struct TableName;
}

define_identifier! {
    /// Name of a column; unique within its owning table.
    pub struct ColumnName;
}

define_identifier! {
    /// Name of a transformation; unique within a catalog.
    pub struct TransformationName;
}

#[cfg(test)]
#[path = "names_test.rs"]
mod tests;
