//! Utilities for proc macro implementation

//---------- SpannedExt ----------

use crate::prelude::*;
use proc_macro_crate::{crate_name, FoundCrate};

pub trait SpannedExt {
    /// Convenience method to make an error
    fn error<M: Display>(&self, m: M) -> syn::Error;
}

impl<T: Spanned> SpannedExt for T {
    fn error<M: Display>(&self, m: M) -> syn::Error {
        syn::Error::new(self.span(), m)
    }
}

//---------- ErrorAccumulator ----------

/// Contains zero or more `syn::Error`
///
/// # Panics
///
/// Panics if dropped.
///
/// You must call one of the consuming methods, eg `finish`
#[derive(Debug, Default)]
pub struct ErrorAccumulator {
    bad: Option<syn::Error>,
    defused: bool,
}

impl ErrorAccumulator {
    /// Accumulate an error
    pub fn push(&mut self, err: syn::Error) {
        if let Some(bad) = &mut self.bad {
            bad.combine(err)
        } else {
            self.bad = Some(err);
        }
    }

    /// If there were any errors, return a single error that combines them
    #[allow(dead_code)] // used by the unit tests
    pub fn finish(self) -> syn::Result<()> {
        match self.into_inner() {
            None => Ok(()),
            Some(bad) => Err(bad),
        }
    }

    /// If there any errors, return a single error that combines them
    pub fn into_inner(mut self) -> Option<syn::Error> {
        self.defused = true;
        self.bad.take()
    }
}

impl Drop for ErrorAccumulator {
    fn drop(&mut self) {
        assert!(panicking() || self.defused);
    }
}

//---------- runtime_path ----------

/// Return a full path to the runtime module generated code calls into
///
/// That is `__private` in the `deep-copy` facade crate,
/// under whatever name the invoking crate knows it by.
pub fn runtime_path() -> syn::Result<syn::Path> {
    let krate = match crate_name("deep-copy") {
        Ok(FoundCrate::Itself) => quote!(::deep_copy),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!( ::#ident )
        }
        Err(e) => {
            return Err(syn::Error::new(
                Span::call_site(),
                format!(
                    "Expected deep-copy to be present in Cargo.toml: {}",
                    e
                ),
            ))
        }
    };
    Ok(parse_quote!( #krate::__private ))
}

/// Runtime path below an explicitly configured crate path
pub fn runtime_path_under(krate: &syn::Path) -> syn::Path {
    parse_quote!( #krate::__private )
}
