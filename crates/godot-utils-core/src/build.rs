//! Build-script integration.
//!
//! A build script calls [`generate_to_out_dir`] and the crate includes the
//! resulting index unit:
//!
//! ```text
//! // build.rs
//! fn main() {
//!     godot_utils::build::generate_to_out_dir(&Default::default()).unwrap();
//! }
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/godot_utils.rs"));
//! ```

use std::env::var_os;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cancel::Cancellation;
use crate::config::GeneratorConfig;
use crate::error::{Context, ErrorKind, Fallible};
use crate::unit::{GeneratedUnit, SourceSink};

/// Name of the unit that includes every other generated unit.
pub const INDEX_UNIT: &str = "godot_utils.rs";

/// Writes generated units as files into a directory.
///
/// A file whose content is already up to date is left untouched, so unchanged
/// output never bumps its modification time.
#[derive(Debug)]
pub struct OutDirSink {
    dir: PathBuf,
    units: Vec<String>,
}

impl OutDirSink {
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Fallible<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| ErrorKind::CreateOutputDir { dir: dir.clone() })?;
        Ok(Self {
            dir,
            units: Vec::new(),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of the units received so far, in order.
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Writes the index unit `include!`-ing every unit received so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the index file cannot be written.
    pub fn finish(mut self) -> Fallible<PathBuf> {
        let source: String = self
            .units
            .iter()
            .map(|name| format!("include!(concat!(env!(\"OUT_DIR\"), \"/{name}\"));\n"))
            .collect();
        self.write(INDEX_UNIT, &source)?;
        Ok(self.dir.join(INDEX_UNIT))
    }

    fn write(&mut self, name: &str, source: &str) -> Fallible<()> {
        let file = self.dir.join(name);
        let unchanged = fs::read_to_string(&file).is_ok_and(|existing| existing == source);
        if unchanged {
            debug!("{} is up to date", file.display());
        } else {
            fs::write(&file, source).with_context(|| ErrorKind::WriteGeneratedUnit { file: file.clone() })?;
            debug!("Wrote {}", file.display());
        }
        Ok(())
    }
}

impl SourceSink for OutDirSink {
    fn add_source(&mut self, unit: GeneratedUnit) -> Fallible<()> {
        self.write(&unit.name, &unit.source)?;
        self.units.push(unit.name);
        Ok(())
    }
}

/// Reads the project file named by `config`, anchored at `base` when relative.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
pub fn read_project_file(config: &GeneratorConfig, base: &Path) -> Fallible<(PathBuf, String)> {
    let file = config.resolve_project_file(base);
    if !file.is_file() {
        return Err(ErrorKind::ProjectFileNotFound { file }.into());
    }
    let text = fs::read_to_string(&file).with_context(|| ErrorKind::ReadProjectFile { file: file.clone() })?;
    Ok((file, text))
}

/// Generates every unit into `OUT_DIR` from inside a build script.
///
/// The project file is resolved against `CARGO_MANIFEST_DIR` and registered
/// with `cargo:rerun-if-changed`. Returns the path of the index unit.
///
/// # Errors
///
/// Returns an error if `OUT_DIR` is unset, the project file cannot be read, or
/// a unit cannot be written.
pub fn generate_to_out_dir(config: &GeneratorConfig) -> Fallible<PathBuf> {
    let out_dir = var_os("OUT_DIR").ok_or(ErrorKind::MissingOutDir)?;
    let base = var_os("CARGO_MANIFEST_DIR").map_or_else(PathBuf::new, PathBuf::from);
    generate_into(config, &base, PathBuf::from(out_dir))
}

fn generate_into(config: &GeneratorConfig, base: &Path, out_dir: PathBuf) -> Fallible<PathBuf> {
    let (file, text) = read_project_file(config, base)?;
    println!("cargo:rerun-if-changed={}", file.display());
    println!("cargo:rerun-if-env-changed={}", crate::config::PROJECT_FILE_VAR);

    let mut sink = OutDirSink::new(out_dir)?;
    crate::emit(&text, config, &mut sink, &Cancellation::never())?;
    let index = sink.finish()?;
    info!("Generated Godot declarations from {}", file.display());
    Ok(index)
}
