use std::env::var_os;
use std::path::PathBuf;
use std::str::FromStr;

use godot_utils_core::build::read_project_file;
use godot_utils_core::{Cancellation, GeneratorConfig, generate};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{self, Parse, ParseStream};
use syn::{LitStr, Token};

pub type Result<T> = ::std::result::Result<T, TokenStream>;

/// Abstract syntax tree (AST) for the surface syntax of the `project_godot!` macro.
///
/// The surface syntax of the `project_godot!` macro takes the form:
///
/// ```text,no_run
/// LitStr? ","?
/// ```
///
/// The optional literal is the path of the project file, relative to the
/// invoking crate's manifest directory.
pub struct Ast {
    project_file: Option<LitStr>,
}

impl Parse for Ast {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        if input.is_empty() {
            return Ok(Self { project_file: None });
        }
        let project_file: LitStr = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("expected a single project file path"));
        }
        Ok(Self {
            project_file: Some(project_file),
        })
    }
}

impl Ast {
    /// Compiles (macro-expands) the AST.
    pub(crate) fn compile(self) -> TokenStream {
        self.expand().unwrap_or_else(|err| err)
    }

    fn span(&self) -> Span {
        self.project_file
            .as_ref()
            .map_or_else(Span::call_site, LitStr::span)
    }

    fn error(&self, message: impl std::fmt::Display) -> TokenStream {
        syn::Error::new(self.span(), message.to_string()).to_compile_error()
    }

    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::from_env();
        match &self.project_file {
            Some(path) => config.with_project_file(path.value()),
            None => config,
        }
    }

    fn expand(&self) -> Result<TokenStream> {
        let config = self.config();
        let base = var_os("CARGO_MANIFEST_DIR").map_or_else(PathBuf::new, PathBuf::from);

        let (file, text) = read_project_file(&config, &base).map_err(|e| self.error(e))?;
        let units = generate(&text, &config, &Cancellation::never()).map_err(|e| self.error(e))?;

        let mut expanded = TokenStream::new();
        for unit in units {
            let tokens = TokenStream::from_str(&unit.source).map_err(|e| {
                self.error(format!("generated unit `{}` is not valid Rust: {e}", unit.name))
            })?;
            expanded.extend(tokens);
        }

        // Ties the expansion to the project file so rustc rebuilds when it changes.
        let tracked = file.to_string_lossy().into_owned();
        expanded.extend(quote! {
            const _: &str = include_str!(#tracked);
        });

        Ok(expanded)
    }
}
