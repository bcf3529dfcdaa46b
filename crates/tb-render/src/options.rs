//! vis-network options object for a view

use serde_json::{json, Value};
use tb_core::{Layout, Theme, ViewOptions};

/// Distance between hierarchy levels in pixels
pub const LEVEL_SEPARATION: u32 = 150;

/// Page background for a theme
pub fn background_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#ffffff",
        Theme::Dark => "#222222",
    }
}

/// Label color for a theme
pub fn font_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#000000",
        Theme::Dark => "#ffffff",
    }
}

/// Build the `options` object passed to `new vis.Network`
pub fn vis_options(view: &ViewOptions) -> Value {
    let hierarchical = view.layout == Layout::Hierarchical;
    let solver = if hierarchical {
        "hierarchicalRepulsion"
    } else {
        "forceAtlas2Based"
    };
    // Only hierarchical layouts have a direction
    let direction = if hierarchical {
        view.direction.as_str()
    } else {
        "LR"
    };

    json!({
        "layout": {
            "hierarchical": {
                "enabled": hierarchical,
                "direction": direction,
                "sortMethod": "directed",
                "nodeSpacing": view.node_spacing,
                "levelSeparation": LEVEL_SEPARATION
            }
        },
        "edges": {
            "arrows": "to",
            "smooth": {
                "enabled": view.smooth_edges,
                "type": "cubicBezier",
                "roundness": 0.5
            }
        },
        "physics": {
            "enabled": view.physics,
            "solver": solver,
            "hierarchicalRepulsion": {
                "centralGravity": 0.0,
                "springLength": 150,
                "springConstant": 0.01,
                "nodeDistance": view.node_spacing
            },
            "stabilization": {
                "enabled": true,
                "iterations": 100,
                "updateInterval": 50
            }
        },
        "nodes": {
            "shape": "dot",
            "size": 20,
            "font": {
                "size": 14,
                "color": font_color(view.theme)
            }
        },
        "interaction": {
            "hover": true,
            "tooltipDelay": 100
        }
    })
}
