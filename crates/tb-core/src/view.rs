//! Render options for lineage views
//!
//! A [`ViewOptions`] fully describes one rendering: graph granularity, focus,
//! layout and styling. Named views are stored in the project config.

use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Allowed node spacing in pixels
pub const NODE_SPACING_RANGE: RangeInclusive<u32> = 50..=200;

/// Default node spacing in pixels
pub const DEFAULT_NODE_SPACING: u32 = 100;

fn default_node_spacing() -> u32 {
    DEFAULT_NODE_SPACING
}

fn parse_choice<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> CoreResult<T> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::UnknownVariant {
            kind,
            value: value.to_string(),
            expected: all.iter().map(|v| label(*v)).collect::<Vec<_>>().join(", "),
        })
}

/// Graph layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Hierarchical,
    Circular,
    /// Force-directed
    Force,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Hierarchical, Layout::Circular, Layout::Force];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Hierarchical => "hierarchical",
            Layout::Circular => "circular",
            Layout::Force => "force",
        }
    }
}

/// Flow direction of a hierarchical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    /// Top to bottom
    #[serde(rename = "UD")]
    UpDown,
    #[serde(rename = "DU")]
    DownUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::LeftRight,
        Direction::RightLeft,
        Direction::UpDown,
        Direction::DownUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
            Direction::UpDown => "UD",
            Direction::DownUp => "DU",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

macro_rules! impl_choice {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_choice($kind, s, &<$ty>::ALL, <$ty>::as_str)
            }
        }
    };
}

impl_choice!(Layout, "layout");
impl_choice!(Direction, "direction");
impl_choice!(Theme, "theme");

/// Everything needed to reproduce one lineage rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewOptions {
    #[serde(default)]
    pub layout: Layout,

    /// Only used by the hierarchical layout
    #[serde(default)]
    pub direction: Direction,

    #[serde(default = "default_true")]
    pub physics: bool,

    #[serde(default = "default_node_spacing")]
    pub node_spacing: u32,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_true")]
    pub smooth_edges: bool,

    /// Column-level lineage instead of table-level
    #[serde(default)]
    pub include_columns: bool,

    /// Table name or `table.column` id to filter on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_entity: Option<String>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            direction: Direction::default(),
            physics: true,
            node_spacing: DEFAULT_NODE_SPACING,
            theme: Theme::default(),
            smooth_edges: true,
            include_columns: false,
            focus_entity: None,
        }
    }
}

impl ViewOptions {
    pub fn validate(&self) -> CoreResult<()> {
        if !NODE_SPACING_RANGE.contains(&self.node_spacing) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "node_spacing must be between {} and {}, got {}",
                    NODE_SPACING_RANGE.start(),
                    NODE_SPACING_RANGE.end(),
                    self.node_spacing
                ),
            });
        }
        if self
            .focus_entity
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            return Err(CoreError::ConfigInvalid {
                message: "focus_entity must not be blank".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_hierarchical(&self) -> bool {
        self.layout == Layout::Hierarchical
    }
}
