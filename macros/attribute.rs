use crate::prelude::*;

use crate::dbg_dump;
use crate::pipeline::{transform, Stage};

// This is #[deep_copy]
pub fn deep_copy_attribute_macro(
    attr: TokenStream,
    item: TokenStream,
) -> syn::Result<TokenStream> {
    let mut decl: Declaration = match syn::parse2(item.clone()) {
        Ok(decl) => decl,
        Err(e) => {
            // Keep the item, so the user sees only our complaint
            let mut output = item;
            output.extend(e.into_compile_error());
            return Ok(output);
        }
    };

    let invocation = Annotation::invocation(attr);
    // Bad options are reported by validation; here we only want `dbg`
    let mut dbg = invocation.options().map_or(false, |o| o.dbg);

    let mut errors = ErrorAccumulator::default();
    let mut runs = vec![transform(&invocation, &mut decl, &mut errors)];

    // Any further #[deep_copy] on the same item asks for what has
    // just been done, and is consumed here as a no-op.  After a
    // rejection, they are consumed silently: one diagnostic is enough.
    let again = decl.take_annotations();
    if runs[0].stage() != Stage::Rejected {
        dbg |= check_repeated_options(&again, &mut errors);
        for annotation in &again {
            runs.push(transform(annotation, &mut decl, &mut errors));
        }
    }

    debug_assert!(runs.iter().all(|run| run.stage().is_terminal()));

    let mut output = decl.to_token_stream();
    if let Some(bad) = errors.into_inner() {
        output.extend(bad.into_compile_error());
    }

    if dbg {
        dbg_dump::dump(&decl, &runs, &output);
    }

    Ok(output)
}

/// Parse the options of repeated annotations, which validation skips
///
/// Returns whether any of them asked for `dbg`.
fn check_repeated_options(
    again: &[Annotation],
    errors: &mut ErrorAccumulator,
) -> bool {
    let mut dbg = false;
    for annotation in again {
        match annotation.options() {
            Ok(options) => dbg |= options.dbg,
            Err(e) => errors.push(e),
        }
    }
    dbg
}
