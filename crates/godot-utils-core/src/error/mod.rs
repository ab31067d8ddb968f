use std::error::Error;
use std::fmt;

mod kind;

#[allow(clippy::module_name_repetitions)]
pub use kind::ErrorKind;

pub type Fallible<T> = Result<T, GeneratorError>;

/// Error type for the generator
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct GeneratorError {
    inner: Box<Inner>,
}

#[derive(Debug)]
struct Inner {
    kind: ErrorKind,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl GeneratorError {
    /// Create a new `GeneratorError` instance including a source error
    pub fn from_source<E>(source: E, kind: ErrorKind) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(source.into()),
            }),
        }
    }

    /// Get a reference to the `ErrorKind` for this error
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Whether this error only reports an observed cancellation
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Cancelled)
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.kind, f)
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn Error + 'static))
    }
}

impl From<ErrorKind> for GeneratorError {
    fn from(kind: ErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }
}

/// Trait providing the `with_context` method to easily convert any Result error into a `GeneratorError`
pub trait Context<T> {
    /// # Errors
    ///
    /// Returns a `GeneratorError` if the underlying result is an error.
    fn with_context<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> ErrorKind;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> ErrorKind,
    {
        self.map_err(|e| GeneratorError::from_source(e, f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn context_keeps_source() {
        let failed: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = failed
            .with_context(|| ErrorKind::ReadProjectFile {
                file: PathBuf::from("project.godot"),
            })
            .unwrap_err();

        assert_eq!(
            err.kind(),
            &ErrorKind::ReadProjectFile {
                file: PathBuf::from("project.godot")
            }
        );
        assert_eq!(err.source().unwrap().to_string(), "gone");
        assert!(!err.is_cancelled());
    }

    #[test]
    fn kind_converts_without_source() {
        let err = GeneratorError::from(ErrorKind::Cancelled);
        assert!(err.is_cancelled());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Generation was cancelled before completion");
    }
}
