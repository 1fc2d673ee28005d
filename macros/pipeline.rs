//! The transformation pipeline, one annotation at a time
//!
//! ```text
//!   NotProcessed -> Validated -> CapabilityEnsured
//!                -> MethodSynthesized -> Attached
//!   NotProcessed -> Rejected
//!   NotProcessed -> Skipped
//! ```
//!
//! Only validation can fail, and it runs before anything is touched,
//! so a declaration is either fully transformed or left exactly as it was.

use crate::prelude::*;

use crate::attach::attach;
use crate::capability::{ensure_capability, ensure_serde_crate};
use crate::capability::{CapabilityMarker, MarkerName};
use crate::synthesize::synthesize;
use crate::validate::{validate, SkipReason, Verdict};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum Stage {
    NotProcessed,
    Validated,
    CapabilityEnsured,
    MethodSynthesized,
    Attached,
    Rejected,
    Skipped,
}

impl Stage {
    fn next_allowed(self, to: Stage) -> bool {
        use Stage::*;
        matches!(
            (self, to),
            (NotProcessed, Validated)
                | (NotProcessed, Rejected)
                | (NotProcessed, Skipped)
                | (Validated, CapabilityEnsured)
                | (CapabilityEnsured, MethodSynthesized)
                | (MethodSynthesized, Attached)
        )
    }

    pub fn is_terminal(self) -> bool {
        use Stage::*;
        matches!(self, Attached | Rejected | Skipped)
    }
}

/// Record of one pass of the pipeline
#[derive(Debug, Clone)]
pub struct Run {
    transitions: Vec<Stage>,
    pub skipped: Option<SkipReason>,
    /// Capability markers this pass added
    pub added: Vec<MarkerName>,
}

impl Run {
    fn new() -> Self {
        Run {
            transitions: vec![Stage::NotProcessed],
            skipped: None,
            added: vec![],
        }
    }

    pub fn stage(&self) -> Stage {
        // never empty: starts with NotProcessed
        self.transitions
            .last()
            .copied()
            .unwrap_or(Stage::NotProcessed)
    }

    pub fn transitions(&self) -> &[Stage] {
        &self.transitions
    }

    fn advance(&mut self, to: Stage) {
        debug_assert!(
            self.stage().next_allowed(to),
            "bad transition {} -> {}",
            self.stage(),
            to,
        );
        self.transitions.push(to);
    }
}

/// Run the whole pipeline for `annotation` on `decl`
///
/// Diagnostics go to `errors`; the returned [`Run`] says how far it got.
pub fn transform(
    annotation: &Annotation,
    decl: &mut Declaration,
    errors: &mut ErrorAccumulator,
) -> Run {
    let mut run = Run::new();

    let plan = match validate(annotation, decl) {
        Verdict::Proceed(plan) => plan,
        Verdict::Skip(reason) => {
            run.skipped = Some(reason);
            run.advance(Stage::Skipped);
            return run;
        }
        Verdict::Reject(rejection) => {
            errors.push(rejection.into_error());
            run.advance(Stage::Rejected);
            return run;
        }
    };
    run.advance(Stage::Validated);

    for marker in &CapabilityMarker::copy_capability(&plan.runtime) {
        if ensure_capability(decl, marker) {
            run.added.push(marker.name);
        }
    }
    if !run.added.is_empty() {
        ensure_serde_crate(decl, &plan.runtime);
    }
    run.advance(Stage::CapabilityEnsured);

    let method = synthesize(decl, &plan.runtime);
    run.advance(Stage::MethodSynthesized);

    attach(decl, method);
    run.advance(Stage::Attached);

    run
}
