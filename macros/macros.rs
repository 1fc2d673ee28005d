//! Macros for `deep_copy`
//
// This is the actual proc-macro crate.
//
// All it exports (or can export) are the proc macros themselves.
// Everything else that is `pub` could be written `pub(crate)`.

mod prelude;

// module containing the actual implementation of our proc-macro
mod attribute;

// Implementation - common parts
mod annotation;
mod declaration;
mod options;
mod utils;

// Implementation - pipeline stages, in order
mod attach;
mod capability;
mod pipeline;
mod synthesize;
mod validate;

mod dbg_dump;

/// Give a type a `deep_copy` method
///
/// ```rust,ignore
/// #[deep_copy]
/// struct DataStructureType {
///     name: String,
/// }
/// ```
///
/// Adds `#[derive(Serialize, Deserialize)]` (whichever are missing)
/// and an inherent
/// `pub fn deep_copy(&self) -> DataStructureType`
/// which round-trips `self` through an in-memory buffer.
///
/// Put it above any `#[derive]`: derives written above it have already
/// been expanded out of sight, so it cannot tell they are there.
///
/// See the `deep_copy` crate's documentation for the full story.
#[proc_macro_attribute]
pub fn deep_copy(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = proc_macro2::TokenStream::from(attr);
    let item = proc_macro2::TokenStream::from(item);
    let output = attribute::deep_copy_attribute_macro(attr, item)
        .unwrap_or_else(|e| e.into_compile_error());
    output.into()
}
