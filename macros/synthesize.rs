//! Method body synthesis
//!
//! Builds the `deep_copy` method, statement by statement:
//!
//! ```rust,ignore
//! pub fn deep_copy(&self) -> TYPE {
//!     let mut sink = RT::ByteSink::new();
//!     let mut writer = RT::ObjectWriter::new(&mut sink);
//!     writer.write(self);
//!     writer.flush();
//!     let source = RT::ByteSource::new(sink.snapshot());
//!     let mut reader = RT::ObjectReader::new(source);
//!     reader.read()
//! }
//! ```
//!
//! where `RT` is the runtime module of the `deep-copy` crate.
//! The shape never varies with the declaration; only `TYPE` does.

use crate::prelude::*;

/// Name of the synthesized operation
pub const METHOD_NAME: &str = "deep_copy";

/// Runtime types the body constructs
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, AsRefStr)]
enum RuntimeType {
    ByteSink,
    ObjectWriter,
    ByteSource,
    ObjectReader,
}

//---------- node constructors ----------

/// A local variable, hygienic so it cannot capture the user's names
fn local(name: &str) -> Ident {
    Ident::new(name, Span::mixed_site())
}

/// variable reference: `name`
fn var(name: &Ident) -> syn::Expr {
    syn::Expr::Path(syn::ExprPath {
        attrs: vec![],
        qself: None,
        path: name.clone().into(),
    })
}

/// self reference: `self`
fn self_ref() -> syn::Expr {
    parse_quote!(self)
}

/// constructor call: `RT::Type::new(args..)`
fn construct(
    runtime: &syn::Path,
    ty: RuntimeType,
    args: &[syn::Expr],
) -> syn::Expr {
    let ty = Ident::new(ty.as_ref(), Span::call_site());
    parse_quote!( #runtime::#ty::new( #( #args ),* ) )
}

/// method call: `receiver.method(args..)`
fn call(receiver: &Ident, method: &str, args: &[syn::Expr]) -> syn::Expr {
    let receiver = var(receiver);
    let method = Ident::new(method, Span::call_site());
    parse_quote!( #receiver.#method( #( #args ),* ) )
}

/// variable declaration: `let [mut] name = init;`
fn declare(name: &Ident, mutable: bool, init: syn::Expr) -> syn::Stmt {
    let mutability = if mutable {
        Some(<Token![mut]>::default())
    } else {
        None
    };
    parse_quote!( let #mutability #name = #init; )
}

/// expression statement: `expr;`
fn expr_stmt(expr: syn::Expr) -> syn::Stmt {
    syn::Stmt::Semi(expr, Default::default())
}

/// return, as the block's tail expression
fn ret(expr: syn::Expr) -> syn::Stmt {
    syn::Stmt::Expr(expr)
}

//---------- synthesis ----------

/// The statements of the method body
pub fn body(runtime: &syn::Path) -> Vec<syn::Stmt> {
    use RuntimeType::*;

    let sink = local("sink");
    let writer = local("writer");
    let source = local("source");
    let reader = local("reader");

    let sink_mut_ref: syn::Expr = parse_quote!( &mut #sink );
    let snapshot = call(&sink, "snapshot", &[]);

    vec![
        declare(&sink, true, construct(runtime, ByteSink, &[])),
        declare(&writer, true, construct(runtime, ObjectWriter, &[sink_mut_ref])),
        expr_stmt(call(&writer, "write", &[self_ref()])),
        expr_stmt(call(&writer, "flush", &[])),
        declare(&source, false, construct(runtime, ByteSource, &[snapshot])),
        declare(&reader, true, construct(runtime, ObjectReader, &[var(&source)])),
        ret(call(&reader, "read", &[])),
    ]
}

/// Build the complete `deep_copy` method for `decl`
///
/// Public, no parameters besides `&self`, no `Result`:
/// a failed round trip panics inside the runtime.
/// Returns the declaration's own type, so callers need no conversion.
pub fn synthesize(
    decl: &Declaration,
    runtime: &syn::Path,
) -> syn::ImplItemMethod {
    let ty = decl.plain_type();
    let name = Ident::new(METHOD_NAME, Span::call_site());
    let doc = format!(
        " Returns a deep copy of this `{}`, sharing no data with it",
        decl.ident()
    );

    let mut method: syn::ImplItemMethod = parse_quote! {
        #[doc = #doc]
        ///
        /// The copy is made by serializing `self` to an in-memory buffer
        /// and deserializing a new value from it.
        ///
        /// # Panics
        ///
        /// If a value reachable from `self` fails to serialize,
        /// or fails to deserialize what it serialized.
        #[must_use]
        pub fn #name(&self) -> #ty {}
    };
    method.block.stmts = body(runtime);
    method
}
