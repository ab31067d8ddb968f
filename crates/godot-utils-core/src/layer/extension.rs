use super::render::renderable;
use super::{Dimension, LayerAggregate, LayerCategory};
use crate::ident::pascal_to_snake;
use crate::unit::GeneratedUnit;

/// A Godot node type whose mask fields get `has_*` checks for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeExtension {
    /// Node type without its dimension suffix, e.g. `CollisionObject`.
    pub node: &'static str,
    pub category: LayerCategory,
    /// Accessors returning the node's `u32` mask, e.g. `collision_layer`.
    pub fields: &'static [&'static str],
}

pub static EXTENSION_TABLE: [NodeExtension; 5] = [
    NodeExtension {
        node: "CollisionObject",
        category: LayerCategory::Physics,
        fields: &["collision_layer", "collision_mask"],
    },
    NodeExtension {
        node: "VisualInstance",
        category: LayerCategory::Render,
        fields: &["layers"],
    },
    NodeExtension {
        node: "NavigationLink",
        category: LayerCategory::Navigation,
        fields: &["navigation_layers"],
    },
    NodeExtension {
        node: "NavigationAgent",
        category: LayerCategory::Navigation,
        fields: &["navigation_layers"],
    },
    NodeExtension {
        node: "NavigationRegion",
        category: LayerCategory::Navigation,
        fields: &["navigation_layers"],
    },
];

impl NodeExtension {
    #[must_use]
    pub fn node_name(&self, dimension: Dimension) -> String {
        format!("{}{}", self.node, dimension.label())
    }

    #[must_use]
    pub fn trait_name(&self, dimension: Dimension) -> String {
        format!("{}Extensions", self.node_name(dimension))
    }
}

/// Renders the extension trait of `extension` for the aggregate's dimension.
///
/// The trait requires one accessor per mask field and provides one
/// `has_<field>_<layer>` check per field and layer, testing against the
/// constants of `layer_module`. The units must therefore be included next to
/// the mask module.
#[must_use]
pub fn render_extension(
    extension: &NodeExtension,
    aggregate: &LayerAggregate,
    layer_module: &str,
) -> GeneratedUnit {
    let dimension = aggregate.dimension;
    let trait_name = extension.trait_name(dimension);
    let group = extension.category.group_name(dimension);

    let mut body: Vec<String> = extension
        .fields
        .iter()
        .map(|field| format!("    fn {field}(&self) -> u32;"))
        .collect();

    for field in extension.fields {
        for record in aggregate
            .category(extension.category)
            .iter()
            .filter(|record| renderable(record))
        {
            let layer = pascal_to_snake(&record.generated_name);
            body.push(String::new());
            body.push(format!(
                "    fn has_{field}_{}(&self) -> bool {{\n        (self.{field}() & {layer_module}::{group}::{}) != 0\n    }}",
                layer.trim_start_matches('_'),
                record.generated_name
            ));
        }
    }

    let source = format!(
        "/// Layer checks for Godot's `{}`.\npub trait {trait_name} {{\n{}\n}}\n",
        extension.node_name(dimension),
        body.join("\n")
    );

    GeneratedUnit::new(format!("{}.rs", pascal_to_snake(&trait_name)), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{LayerRecord, aggregate};

    fn physics(shift: u32, name: &str) -> LayerRecord {
        LayerRecord {
            dimension: Dimension::Two,
            category: LayerCategory::Physics,
            shift,
            generated_name: name.to_string(),
        }
    }

    #[test]
    fn table_covers_every_category() {
        for category in LayerCategory::ALL {
            assert!(EXTENSION_TABLE.iter().any(|e| e.category == category));
        }
        assert_eq!(
            EXTENSION_TABLE[0].trait_name(Dimension::Three),
            "CollisionObject3DExtensions"
        );
    }

    #[test]
    fn collision_object_checks_both_masks() {
        let aggregates = aggregate(vec![physics(0, "Walls"), physics(4, "Enemies")]);
        let unit = render_extension(&EXTENSION_TABLE[0], &aggregates.two_d, "layer");

        assert_eq!(unit.name, "collision_object2d_extensions.rs");
        assert_eq!(
            unit.source,
            "/// Layer checks for Godot's `CollisionObject2D`.
pub trait CollisionObject2DExtensions {
    fn collision_layer(&self) -> u32;
    fn collision_mask(&self) -> u32;

    fn has_collision_layer_walls(&self) -> bool {
        (self.collision_layer() & layer::Physics2D::Walls) != 0
    }

    fn has_collision_layer_enemies(&self) -> bool {
        (self.collision_layer() & layer::Physics2D::Enemies) != 0
    }

    fn has_collision_mask_walls(&self) -> bool {
        (self.collision_mask() & layer::Physics2D::Walls) != 0
    }

    fn has_collision_mask_enemies(&self) -> bool {
        (self.collision_mask() & layer::Physics2D::Enemies) != 0
    }
}
"
        );
    }

    #[test]
    fn other_categories_are_ignored() {
        let aggregates = aggregate(vec![physics(0, "Walls")]);
        let unit = render_extension(&EXTENSION_TABLE[1], &aggregates.two_d, "layer");

        assert_eq!(unit.name, "visual_instance2d_extensions.rs");
        assert_eq!(
            unit.source,
            "/// Layer checks for Godot's `VisualInstance2D`.\npub trait VisualInstance2DExtensions {\n    fn layers(&self) -> u32;\n}\n"
        );
    }

    #[test]
    fn digit_prefixed_names_stay_snake_case() {
        let aggregates = aggregate(vec![physics(1, "_2DProps")]);
        let unit = render_extension(&EXTENSION_TABLE[0], &aggregates.two_d, "masks");
        assert!(unit.source.contains("fn has_collision_layer_2d_props(&self) -> bool"));
        assert!(unit.source.contains("masks::Physics2D::_2DProps"));
    }
}
