//! private prelude for proc macro stuff

pub use std::default::Default;
pub use std::fmt::{Debug, Display};
pub use std::mem;
pub use std::thread::panicking;

pub use itertools::{chain, Itertools};
pub use proc_macro2::{Ident, Span, TokenStream, TokenTree};
pub use quote::{quote, ToTokens};
pub use strum::{AsRefStr, Display, EnumString};
pub use syn::ext::IdentExt;
pub use syn::parse::{Parse, ParseStream};
pub use syn::parse_quote;
pub use syn::punctuated::Punctuated;
pub use syn::spanned::Spanned;
pub use syn::Token;

pub use TokenTree as TT;

pub use crate::utils::runtime_path;
pub use crate::utils::ErrorAccumulator;
pub use crate::utils::SpannedExt;

pub use crate::annotation::Annotation;
pub use crate::declaration::*;
pub use crate::options::CopyOptions;
