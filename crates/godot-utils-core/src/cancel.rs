use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ErrorKind, Fallible};

/// Cooperative cancellation flag shared between a host and running pipelines.
///
/// Clones observe the same flag. Pipelines poll it between records and abandon
/// their partial output once it is set.
#[derive(Clone, Debug)]
pub struct Cancellation {
    flag: Option<Arc<AtomicBool>>,
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flag: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    /// A token that can never be cancelled.
    #[must_use]
    pub const fn never() -> Self {
        Self { flag: None }
    }

    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::Release);
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    /// # Errors
    ///
    /// Returns `ErrorKind::Cancelled` once `cancel` has been called on any clone.
    pub fn check(&self) -> Fallible<()> {
        if self.is_cancelled() {
            Err(ErrorKind::Cancelled.into())
        } else {
            Ok(())
        }
    }
}
