//! Declaration generator for Godot `project.godot` files.
//!
//! The generator splits the project file into sections and runs one pipeline
//! per consumed section:
//!
//! - `[input]` becomes `input_name.rs`, one `&str` constant per input action.
//! - `[layer_names]` becomes `layer.rs`, nested `u32` mask modules for the 2D
//!   and 3D render, physics and navigation layers, plus one extension trait per
//!   layered node type with a `has_*` check per named layer.
//!
//! Everything here is a pure function of the project text. Malformed lines are
//! skipped rather than reported, and a missing section only means its pipeline
//! emits nothing. Hosts (the `project_godot!` macro or a build script) decide
//! when to run a pass and where the units end up.

use std::path::Path;

use log::debug;

pub mod build;
mod cancel;
pub mod config;
pub mod error;
pub mod ident;
pub mod input;
pub mod layer;
pub mod pipeline;
pub mod section;
mod unit;

pub use cancel::Cancellation;
pub use config::GeneratorConfig;
pub use error::{Fallible, GeneratorError};
pub use unit::{GeneratedUnit, SourceSink};

use crate::pipeline::{InputPipeline, LayerPipeline, Pipeline};

/// Runs every pipeline over `text` and returns all generated units.
///
/// Units come out in a fixed order: the input unit, the layer mask unit, then
/// the 2D and 3D extension traits. Identical text always yields identical units.
///
/// # Errors
///
/// Returns `ErrorKind::Cancelled` if `cancel` fires; nothing is returned then.
pub fn generate(
    text: &str,
    config: &GeneratorConfig,
    cancel: &Cancellation,
) -> Fallible<Vec<GeneratedUnit>> {
    let sections = section::parse(text);
    debug!("Parsed {} sections", sections.len());

    let pipelines: [&dyn Pipeline; 2] = [&InputPipeline::new(config), &LayerPipeline::new(config)];
    let mut units = Vec::new();
    for pipeline in pipelines {
        let produced = pipeline.run(&sections, cancel)?;
        debug!("Pipeline {} produced {} units", pipeline.name(), produced.len());
        units.extend(produced);
    }
    Ok(units)
}

/// Generates every unit from `text`, then hands them to `sink`.
///
/// Generation completes before the first unit is emitted, so a cancelled pass
/// leaves the sink untouched.
///
/// # Errors
///
/// Returns an error if the pass is cancelled or the sink rejects a unit.
pub fn emit<S>(
    text: &str,
    config: &GeneratorConfig,
    sink: &mut S,
    cancel: &Cancellation,
) -> Fallible<()>
where
    S: SourceSink + ?Sized,
{
    for unit in generate(text, config, cancel)? {
        sink.add_source(unit)?;
    }
    Ok(())
}

/// Picks the project file out of a host's additional files.
///
/// Returns the text of the first file whose path ends with the configured
/// project file name.
pub fn select_project_text<'a, I, P>(files: I, config: &GeneratorConfig) -> Option<&'a str>
where
    I: IntoIterator<Item = (P, &'a str)>,
    P: AsRef<Path>,
{
    let name = config.project_file_name();
    files
        .into_iter()
        .find(|(path, _)| path.as_ref().ends_with(name))
        .map(|(_, text)| text)
}
