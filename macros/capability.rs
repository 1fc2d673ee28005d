//! Capability augmentation
//!
//! The generated copy goes through `serde`,
//! so the declaration has to derive `Serialize` and `Deserialize`.

use crate::prelude::*;

/// A derivable marker trait, and where generated code finds its derive
#[derive(Debug, Clone)]
pub struct CapabilityMarker {
    pub name: MarkerName,
    pub path: syn::Path,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, AsRefStr)]
pub enum MarkerName {
    Serialize,
    Deserialize,
}

impl CapabilityMarker {
    fn new(name: MarkerName, runtime: &syn::Path) -> Self {
        let ident = Ident::new(name.as_ref(), Span::call_site());
        CapabilityMarker {
            name,
            path: parse_quote!( #runtime::serde::#ident ),
        }
    }

    /// The markers the generated copy needs, in the order to add them
    pub fn copy_capability(runtime: &syn::Path) -> [CapabilityMarker; 2] {
        [
            CapabilityMarker::new(MarkerName::Serialize, runtime),
            CapabilityMarker::new(MarkerName::Deserialize, runtime),
        ]
    }
}

/// Make `decl` derive `marker`, unless it already does
///
/// Set insertion: never duplicates, never removes.
/// Returns whether the marker was added.
pub fn ensure_capability(
    decl: &mut Declaration,
    marker: &CapabilityMarker,
) -> bool {
    if decl.capabilities().contains(marker.name.as_ref()) {
        return false;
    }
    decl.add_capability(marker)
}

/// Point serde's derives at the `serde` reexported by the runtime
///
/// Needed when we added a derive: the user's crate need not
/// depend on `serde` itself.
/// If the user already chose a `crate = ...`, theirs stands.
pub fn ensure_serde_crate(decl: &mut Declaration, runtime: &syn::Path) {
    if decl.names_serde_crate() {
        return;
    }
    let serde = quote!( #runtime::serde ).to_string().replace(' ', "");
    decl.push_attr(parse_quote!( #[serde(crate = #serde)] ));
}
