//! Compile-time declarations for Godot projects.
//!
//! Expand them in place with the [`project_godot!`] macro:
//!
//! ```text
//! mod godot {
//!     godot_utils::project_godot!("game/project.godot");
//! }
//!
//! if Input::singleton().is_action_pressed(godot::input_name::Jump) { ... }
//! let hit = body.has_collision_layer_enemies();
//! ```
//!
//! or write them into `OUT_DIR` from a build script with
//! [`build::generate_to_out_dir`].

pub use godot_utils_core::{
    Cancellation, Fallible, GeneratedUnit, GeneratorConfig, GeneratorError, SourceSink, build,
    config, emit, error, generate, ident, input, layer, pipeline, section, select_project_text,
};
pub use godot_utils_macro::project_godot;
