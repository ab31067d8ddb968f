//! Render, physics and navigation layer names from the `[layer_names]` section.
//!
//! Godot stores each named layer as a line such as
//!
//! ```text
//! 3d_physics/layer_5="enemies"
//! ```
//!
//! which becomes a [`LayerRecord`] with bit shift `4`. Records are grouped per
//! dimension by [`aggregate`] and rendered as nested mask modules plus one
//! extension trait per node type.

use std::fmt;

mod aggregate;
mod extension;
mod record;
mod render;

pub use aggregate::{LayerAggregate, LayerAggregates, aggregate};
pub use extension::{EXTENSION_TABLE, NodeExtension, render_extension};
pub use record::{extract_layers, try_extract_layers};
pub use render::{render_layer_constants, render_layer_unit};

/// Whether a layer belongs to the 2D or the 3D world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    pub const ALL: [Self; 2] = [Self::Two, Self::Three];

    /// Suffix used in generated names, `2D` or `3D`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2D",
            Self::Three => "3D",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerCategory {
    Render,
    Physics,
    Navigation,
}

impl LayerCategory {
    /// Categories in the order their mask groups are rendered.
    pub const ALL: [Self; 3] = [Self::Render, Self::Physics, Self::Navigation];

    /// Parses the exact lowercase token used in `project.godot`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "render" => Some(Self::Render),
            "physics" => Some(Self::Physics),
            "navigation" => Some(Self::Navigation),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Render => "Render",
            Self::Physics => "Physics",
            Self::Navigation => "Navigation",
        }
    }

    /// Name of the mask group for this category in `dimension`, e.g. `Physics3D`.
    #[must_use]
    pub fn group_name(self, dimension: Dimension) -> String {
        format!("{}{}", self.name(), dimension.label())
    }
}

/// One named layer bit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct LayerRecord {
    pub dimension: Dimension,
    pub category: LayerCategory,
    pub shift: u32,
    pub generated_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tokens_are_exact() {
        assert_eq!(LayerCategory::from_token("render"), Some(LayerCategory::Render));
        assert_eq!(LayerCategory::from_token("physics"), Some(LayerCategory::Physics));
        assert_eq!(
            LayerCategory::from_token("navigation"),
            Some(LayerCategory::Navigation)
        );
        assert_eq!(LayerCategory::from_token("Physics"), None);
        assert_eq!(LayerCategory::from_token("avoidance"), None);
    }

    #[test]
    fn group_names() {
        assert_eq!(LayerCategory::Render.group_name(Dimension::Two), "Render2D");
        assert_eq!(LayerCategory::Navigation.group_name(Dimension::Three), "Navigation3D");
        assert_eq!(Dimension::Three.to_string(), "3D");
    }
}
