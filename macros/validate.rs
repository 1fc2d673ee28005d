//! Validation: is this annotation ours, and can we act on it?

use crate::prelude::*;

use crate::synthesize::METHOD_NAME;
use crate::utils::runtime_path_under;

/// Outcome of validating one annotation against one declaration
#[derive(Debug)]
pub enum Verdict {
    /// Go ahead
    Proceed(Plan),
    /// Do nothing, and say nothing
    Skip(SkipReason),
    /// Do nothing, and report why
    Reject(Rejection),
}

/// What validation found out that later stages need
#[derive(Debug, Clone)]
pub struct Plan {
    /// Module generated code calls into
    pub runtime: syn::Path,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum SkipReason {
    /// Someone else's annotation
    NotApplicable,
    /// There is a zero-argument `deep_copy` already
    AlreadyProcessed,
}

#[derive(Debug)]
pub enum Rejection {
    /// Not a declaration with instance state
    StructuralViolation(syn::Error),
    /// A declaration shape we do not handle (type parameters)
    Unsupported(syn::Error),
    /// The annotation's own arguments are wrong
    BadOptions(syn::Error),
}

impl Rejection {
    pub fn into_error(self) -> syn::Error {
        match self {
            Rejection::StructuralViolation(e)
            | Rejection::Unsupported(e)
            | Rejection::BadOptions(e) => e,
        }
    }
}

/// Decide what to do about `annotation` on `decl`
///
/// Pure: looks, does not touch.
pub fn validate(annotation: &Annotation, decl: &Declaration) -> Verdict {
    if !annotation.is_deep_copy() {
        return Verdict::Skip(SkipReason::NotApplicable);
    }

    if decl.has_member(METHOD_NAME, 0) {
        return Verdict::Skip(SkipReason::AlreadyProcessed);
    }

    match decl.classification() {
        Classification::DataBearing => {}
        Classification::BehaviorOnly => {
            return Verdict::Reject(Rejection::StructuralViolation(
                syn::Error::new(
                    decl.keyword_span(),
                    format_args!(
 "#[deep_copy] cannot be applied to a {}: it has no instance state to copy",
                        decl.kind(),
                    ),
                ),
            ))
        }
        Classification::Untagged => {
            return Verdict::Reject(Rejection::StructuralViolation(
                syn::Error::new(
                    decl.keyword_span(),
 "#[deep_copy] cannot be applied to a union: which field holds the state is not recorded, so it cannot be copied generically",
                ),
            ))
        }
    }

    let generics = decl.generics();
    if !generics.params.is_empty() {
        return Verdict::Reject(Rejection::Unsupported(generics.params.error(
            "#[deep_copy] does not support declarations with generic parameters",
        )));
    }

    let options = match annotation.options() {
        Ok(options) => options,
        Err(e) => return Verdict::Reject(Rejection::BadOptions(e)),
    };
    let runtime = match &options.krate {
        Some((krate, _)) => runtime_path_under(krate),
        None => match runtime_path() {
            Ok(runtime) => runtime,
            Err(e) => return Verdict::Reject(Rejection::BadOptions(e)),
        },
    };

    Verdict::Proceed(Plan { runtime })
}
