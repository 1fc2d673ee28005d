//! Options: the arguments inside `#[deep_copy(...)]`
//!
//!  * `dbg`: dump what happened, and the output, to stderr
//!  * `crate = PATH`: where generated code finds the `deep-copy` crate
//!
//! Options are comma-separated.  Repeating an option with the same
//! value is fine; contradicting an earlier one is an error.

use crate::prelude::*;

use OptionDetails as OD;

//---------- types ----------

/// All the options, semantically resolved
#[derive(Default, Debug, Clone)]
pub struct CopyOptions {
    pub dbg: bool,
    pub krate: Option<(syn::Path, Span)>,
}

/// A single option
#[derive(Debug)]
struct CopyOption {
    pub kw_span: Span,
    pub od: OptionDetails,
}

/// Enum for the details of an option
#[derive(Debug, Clone)]
enum OptionDetails {
    Dbg,
    Crate(syn::Path),
}

/// Option keywords, exactly as written
#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
enum Keyword {
    Dbg,
    Crate,
}

//---------- parsing ----------

impl Parse for CopyOptions {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut self_ = CopyOptions::default();
        let options =
            Punctuated::<CopyOption, Token![,]>::parse_terminated(input)?;
        for option in options {
            self_.update_from_option(option)?;
        }
        Ok(self_)
    }
}

impl Parse for CopyOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // `crate` is a keyword, so plain `Ident` parsing would refuse it
        let kw = input.call(syn::Ident::parse_any)?;
        let keyword: Keyword = kw
            .to_string()
            .parse()
            .map_err(|_| kw.error("unknown deep_copy option"))?;

        let od = match keyword {
            Keyword::Dbg => OD::Dbg,
            Keyword::Crate => {
                let _: Token![=] = input.parse()?;
                OD::Crate(input.call(syn::Path::parse_mod_style)?)
            }
        };
        Ok(CopyOption {
            kw_span: kw.span(),
            od,
        })
    }
}

//---------- processing ----------

impl CopyOptions {
    /// Update `self` according to the option specified in `option`
    ///
    /// On error (eg, contradictory options), fails.
    fn update_from_option(&mut self, option: CopyOption) -> syn::Result<()> {
        match option.od {
            OD::Dbg => {
                self.dbg = true;
                Ok(())
            }
            OD::Crate(path) => match &self.krate {
                Some((already, _)) if already == &path => Ok(()),
                Some((_, first)) => {
                    let mut err =
                        syn::Error::new(*first, "first `crate` option");
                    err.combine(syn::Error::new(
                        option.kw_span,
                        "contradictory `crate` options",
                    ));
                    Err(err)
                }
                None => {
                    self.krate = Some((path, option.kw_span));
                    Ok(())
                }
            },
        }
    }
}
