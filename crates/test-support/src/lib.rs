//! Utilities shared by the godot-utils test suites.

#[macro_export]
macro_rules! ok_or_panic {
    { $e:expr } => {
        match $e {
            Ok(x) => x,
            Err(err) => panic!("{} failed with {}", stringify!($e), err),
        }
    };
}

pub mod fixtures;
pub mod matchers;

pub use matchers::declares;
