//! Pipelines turning parsed sections into generated units.
//!
//! Each pipeline looks up its own section, extracts records from it and renders
//! them. A pipeline whose section is missing emits nothing. Pipelines only read
//! the shared section list, so several may run over it at once.

use log::debug;

use crate::cancel::Cancellation;
use crate::config::GeneratorConfig;
use crate::error::Fallible;
use crate::input::{render_input_constants, try_extract_inputs};
use crate::layer::{
    Dimension, EXTENSION_TABLE, aggregate, render_extension, render_layer_unit,
    try_extract_layers,
};
use crate::section::{Section, find};
use crate::unit::GeneratedUnit;

pub trait Pipeline {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns `ErrorKind::Cancelled` if `cancel` fires mid-run; no partial
    /// output is returned in that case.
    fn run(&self, sections: &[Section], cancel: &Cancellation) -> Fallible<Vec<GeneratedUnit>>;
}

/// Emits `input_name.rs` from the `[input]` section.
pub struct InputPipeline<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> InputPipeline<'a> {
    #[must_use]
    pub const fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Pipeline for InputPipeline<'_> {
    fn name(&self) -> &'static str {
        "input"
    }

    fn run(&self, sections: &[Section], cancel: &Cancellation) -> Fallible<Vec<GeneratedUnit>> {
        let Some(section) = find(sections, &self.config.input_section) else {
            debug!("No [{}] section, skipping input names", self.config.input_section);
            return Ok(Vec::new());
        };

        let records = try_extract_inputs(section, cancel)?;
        debug!("Found {} input actions", records.len());

        let module = &self.config.input_module;
        Ok(vec![GeneratedUnit::new(
            format!("{module}.rs"),
            render_input_constants(module, &records),
        )])
    }
}

/// Emits the layer mask module and the node extension traits from `[layer_names]`.
pub struct LayerPipeline<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> LayerPipeline<'a> {
    #[must_use]
    pub const fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Pipeline for LayerPipeline<'_> {
    fn name(&self) -> &'static str {
        "layer"
    }

    fn run(&self, sections: &[Section], cancel: &Cancellation) -> Fallible<Vec<GeneratedUnit>> {
        let Some(section) = find(sections, &self.config.layer_section) else {
            debug!("No [{}] section, skipping layer masks", self.config.layer_section);
            return Ok(Vec::new());
        };

        let records = try_extract_layers(section, cancel)?;
        debug!("Found {} named layers", records.len());
        let aggregates = aggregate(records);

        let module = &self.config.layer_module;
        let mut units = vec![GeneratedUnit::new(
            format!("{module}.rs"),
            render_layer_unit(module, &aggregates),
        )];
        for dimension in Dimension::ALL {
            let layers = aggregates.get(dimension);
            units.extend(
                EXTENSION_TABLE
                    .iter()
                    .map(|extension| render_extension(extension, layers, module)),
            );
        }

        Ok(units)
    }
}
