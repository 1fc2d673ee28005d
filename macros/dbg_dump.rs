//! `#[deep_copy(dbg)]`: report what the transformation did, on stderr

use crate::prelude::*;

use crate::pipeline::Run;

use std::fmt::Error as E;
use std::fmt::Result as R;
use std::fmt::Write;

/// Type alias for our output text accumulator, in case we want to change it
type Out = String;

pub fn dump(decl: &Declaration, runs: &[Run], output: &TokenStream) {
    let w = (|| {
        let mut w = String::new();

        writeln!(
            w,
            "---------- deep_copy dump for {} {} (start) ----------",
            decl.kind(),
            decl.ident(),
        )?;

        dump_whole(&mut w, decl, runs, output)?;

        writeln!(
            w,
            "---------- deep_copy dump for {} {} (end) ----------",
            decl.kind(),
            decl.ident(),
        )?;

        Ok::<_, E>(w)
    })()
    .expect("write to String failed");

    eprint!("{}", w);
}

fn dump_whole(
    w: &mut Out,
    decl: &Declaration,
    runs: &[Run],
    output: &TokenStream,
) -> R {
    writeln!(w, "classification: {}", decl.classification())?;

    for (i, run) in runs.iter().enumerate() {
        write!(w, "pass {}: ", i)?;
        write!(w, "{}", run.transitions().iter().join(" -> "))?;
        if let Some(reason) = run.skipped {
            write!(w, " ({})", reason)?;
        }
        writeln!(w)?;
        if !run.added.is_empty() {
            writeln!(w, "        added: {}", run.added.iter().join(", "))?;
        }
    }

    writeln!(
        w,
        "capabilities: {}",
        decl.capabilities().names().join(", ")
    )?;
    writeln!(w, "methods: {}", decl.methods().names().join(", "))?;
    writeln!(w, "output:")?;
    writeln!(w, "{}", output)?;
    Ok(())
}
