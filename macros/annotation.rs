//! The marker annotation that selects a declaration for transformation

use crate::prelude::*;

/// Last path segment that identifies our annotation
///
/// `#[deep_copy]`, `#[deep_copy::deep_copy]`, `#[reexport::deep_copy]`
/// are all ours.
pub const ANNOTATION_NAME: &str = "deep_copy";

/// One occurrence of a marker annotation
#[derive(Debug, Clone)]
pub struct Annotation {
    pub path: syn::Path,
    /// Contents of the parentheses, if any
    pub args: TokenStream,
}

impl Annotation {
    /// The annotation this macro invocation was expanded for
    ///
    /// rustc does not tell an attribute macro the path it was
    /// invoked by; having resolved it to us, it is ours by definition.
    pub fn invocation(args: TokenStream) -> Self {
        Annotation {
            path: syn::Path::from(Ident::new(
                ANNOTATION_NAME,
                Span::call_site(),
            )),
            args,
        }
    }

    pub fn from_attribute(attr: &syn::Attribute) -> Self {
        // `#[x(...)]` gives the inside; anything else (`#[x = 1]`)
        // is kept whole so that option parsing can complain about it.
        let args = attr
            .parse_args::<TokenStream>()
            .unwrap_or_else(|_| attr.tokens.clone());
        Annotation {
            path: attr.path.clone(),
            args,
        }
    }

    /// Is this annotation a `deep_copy` one?
    pub fn is_deep_copy(&self) -> bool {
        path_is_ours(&self.path)
    }

    pub fn options(&self) -> syn::Result<CopyOptions> {
        syn::parse2(self.args.clone())
    }
}

/// Does this attribute request a deep copy?
pub fn is_ours(attr: &syn::Attribute) -> bool {
    path_is_ours(&attr.path)
}

fn path_is_ours(path: &syn::Path) -> bool {
    path.segments
        .last()
        .map_or(false, |seg| seg.ident == ANNOTATION_NAME)
}
