//! Procedural macro expanding the declarations of a Godot project file.
//!
//! This crate provides the [`project_godot!`] macro, which reads a
//! `project.godot` file at compile time and expands, in place, the items the
//! generator derives from it.
//!
//! # Generated Code
//!
//! - `input_name`: one `&str` constant per input action, named in `PascalCase`
//! - `layer`: `Render2D`, `Physics2D`, `Navigation2D` and their 3D
//!   counterparts, each holding one `u32` mask constant per named layer
//! - one `<Node><Dim>Extensions` trait per layered node type, e.g.
//!   `CollisionObject2DExtensions`, with `has_<field>_<layer>` checks
//!
//! # DSL Syntax
//!
//! ```text
//! project_godot!();                          // $CARGO_MANIFEST_DIR/project.godot
//! project_godot!("game/project.godot");      // relative to $CARGO_MANIFEST_DIR
//! ```
//!
//! Without an argument the `GODOT_PROJECT_FILE` environment variable, if set,
//! names the file. Items from sections missing in the file are not generated.

extern crate proc_macro;

mod ast;

use crate::ast::Ast;
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Expands the input names, layer masks and layer extension traits of a Godot
/// project.
///
/// The syntax of `project_godot!` takes the form:
///
/// ```text,no_run
/// project_godot!( LitStr? )
/// ```
///
/// All items are expanded into the invoking module, which must stay together:
/// the extension traits refer to the sibling `layer` module.
#[proc_macro]
pub fn project_godot(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as Ast);
    let expanded = ast.compile();
    TokenStream::from(expanded)
}
