//! Command implementations

pub(crate) mod column;
pub(crate) mod common;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod init;
pub(crate) mod lineage;
pub(crate) mod mapping;
pub(crate) mod sample;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod table;
pub(crate) mod transform;
pub(crate) mod types;
pub(crate) mod view;
