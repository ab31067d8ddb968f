use std::path::PathBuf;

use thiserror::Error;

const PERMISSIONS_CTA: &str = "Please ensure you have correct permissions to the build output directory.";

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum ErrorKind {
    /// Thrown when the host cancels a generation pass
    #[error("Generation was cancelled before completion")]
    Cancelled,

    /// Thrown when the output directory for generated units could not be created
    #[error("Could not create output directory {}\n\n{cta}", .dir.display(), cta = PERMISSIONS_CTA)]
    CreateOutputDir { dir: PathBuf },

    /// Thrown when a build script runs without `OUT_DIR` set
    #[error(
        "Could not determine the build output directory\n\nThe `OUT_DIR` environment variable is only set while Cargo runs a build script."
    )]
    MissingOutDir,

    /// Thrown when no project file exists at the resolved location
    #[error(
        "Could not find project file at {}\n\nSet `GODOT_PROJECT_FILE` or pass the path explicitly.",
        .file.display()
    )]
    ProjectFileNotFound { file: PathBuf },

    /// Thrown when the project file exists but could not be read
    #[error("Could not read project file {}", .file.display())]
    ReadProjectFile { file: PathBuf },

    /// Thrown when a generated unit could not be written
    #[error("Could not write generated unit to {}\n\n{cta}", .file.display(), cta = PERMISSIONS_CTA)]
    WriteGeneratedUnit { file: PathBuf },
}
