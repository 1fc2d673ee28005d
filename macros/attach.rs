//! Attachment: the synthesized method joins the declaration's methods

use crate::prelude::*;

/// Append `method` to `decl`'s method table
///
/// Unconditional: validation has already established that
/// nothing with the same name and arity is there.
pub fn attach(decl: &mut Declaration, method: syn::ImplItemMethod) {
    decl.methods_mut().attach(method);
}
