use crate::error::Fallible;

/// A named piece of generated Rust source, e.g. `layer.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub name: String,
    pub source: String,
}

impl GeneratedUnit {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Receives generated units from a finished generation pass.
pub trait SourceSink {
    /// # Errors
    ///
    /// Returns an error if the sink cannot store the unit.
    fn add_source(&mut self, unit: GeneratedUnit) -> Fallible<()>;
}

impl SourceSink for Vec<GeneratedUnit> {
    fn add_source(&mut self, unit: GeneratedUnit) -> Fallible<()> {
        self.push(unit);
        Ok(())
    }
}
