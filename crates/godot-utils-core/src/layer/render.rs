use log::warn;

use super::{Dimension, LayerAggregate, LayerAggregates, LayerCategory, LayerRecord};
use crate::ident::is_identifier;

/// Whether `record` can become a `u32` mask constant.
pub(super) fn renderable(record: &LayerRecord) -> bool {
    if !is_identifier(&record.generated_name) {
        warn!(
            "{} layer {:?} at shift {} has no usable identifier, skipping",
            record.category.group_name(record.dimension),
            record.generated_name,
            record.shift
        );
        return false;
    }
    if record.shift >= u32::BITS {
        warn!(
            "{} layer {} does not fit a 32-bit mask, skipping",
            record.category.group_name(record.dimension),
            record.generated_name
        );
        return false;
    }
    true
}

/// Renders the `Render`, `Physics` and `Navigation` mask groups of one dimension.
///
/// Each group is a module named after the category and `label`, e.g.
/// `Physics2D`, holding one `1 << shift` constant per record in aggregation
/// order. Groups are indented to sit inside the `layer` module.
#[must_use]
pub fn render_layer_constants(aggregate: &LayerAggregate, label: &str) -> String {
    let mut lines = Vec::new();

    for category in LayerCategory::ALL {
        lines.push(format!("    pub mod {}{label} {{", category.name()));
        lines.extend(
            aggregate
                .category(category)
                .iter()
                .filter(|record| renderable(record))
                .map(|record| {
                    format!(
                        "        pub const {}: u32 = 1 << {};",
                        record.generated_name, record.shift
                    )
                }),
        );
        lines.push("    }".to_string());
    }

    lines.join("\n")
}

/// Renders the complete mask module holding both dimensions.
#[must_use]
pub fn render_layer_unit(module: &str, aggregates: &LayerAggregates) -> String {
    let groups: Vec<String> = Dimension::ALL
        .iter()
        .map(|&dimension| render_layer_constants(aggregates.get(dimension), dimension.label()))
        .collect();

    format!(
        "#[allow(non_snake_case, non_upper_case_globals, clippy::identity_op)]\npub mod {module} {{\n{}\n}}\n",
        groups.join("\n")
    )
}
