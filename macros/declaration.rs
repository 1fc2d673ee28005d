//! In-memory model of the declaration being transformed
//!
//! Wraps the item as parsed by `syn`, together with the two tables
//! the transformation reads and grows:
//! the capability set (what the type derives)
//! and the method table (which methods it has, by name and arity).
//!
//! The transformation only ever mutates a `Declaration` it is handed;
//! it never makes a new one.

use crate::prelude::*;

use crate::annotation;
use crate::capability::CapabilityMarker;

//---------- kinds ----------

/// What sort of item was annotated
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DeclKind {
    Struct,
    Enum,
    Union,
    Trait,
}

/// Whether there is instance state that a copy could reproduce
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum Classification {
    /// Structs and enums
    DataBearing,
    /// Traits: no instance state, cannot be instantiated
    BehaviorOnly,
    /// Unions: state with no record of which field is live
    Untagged,
}

impl DeclKind {
    pub fn classification(self) -> Classification {
        use DeclKind::*;
        match self {
            Struct | Enum => Classification::DataBearing,
            Trait => Classification::BehaviorOnly,
            Union => Classification::Untagged,
        }
    }
}

#[derive(Debug, Clone)]
enum DeclItem {
    Struct(syn::ItemStruct),
    Enum(syn::ItemEnum),
    Union(syn::ItemUnion),
    Trait(syn::ItemTrait),
}

//---------- CapabilitySet ----------

/// The traits a declaration derives
///
/// Markers are compared by their last path segment,
/// so `Serialize`, `serde::Serialize` and `::serde::Serialize`
/// are the same marker.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    markers: Vec<syn::Path>,
}

impl CapabilitySet {
    fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut markers = vec![];
        for attr in attrs.iter().filter(|a| a.path.is_ident("derive")) {
            let listed = attr.parse_args_with(
                Punctuated::<syn::Path, Token![,]>::parse_terminated,
            )?;
            markers.extend(listed);
        }
        Ok(CapabilitySet { markers })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.count(name) != 0
    }

    /// How many times `name` is derived (more than once is a user error,
    /// which rustc will report)
    pub fn count(&self, name: &str) -> usize {
        self.markers
            .iter()
            .filter(|path| marker_name_is(path, name))
            .count()
    }

    /// Add `path` unless a marker with the same name is present
    ///
    /// Returns whether it was added.
    fn insert(&mut self, path: syn::Path) -> bool {
        let name = match path.segments.last() {
            Some(seg) => seg.ident.to_string(),
            None => return false,
        };
        if self.contains(&name) {
            return false;
        }
        self.markers.push(path);
        true
    }

    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.markers.iter().filter_map(|path| {
            path.segments.last().map(|seg| seg.ident.to_string())
        })
    }
}

fn marker_name_is(path: &syn::Path, name: &str) -> bool {
    path.segments.last().map_or(false, |seg| seg.ident == name)
}

//---------- MethodTable ----------

/// Methods a declaration has, keyed by name and arity
///
/// Arity counts parameters other than the receiver,
/// so `fn deep_copy(&self)` has arity zero.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    /// Signatures that came with the item (a trait's methods)
    declared: Vec<syn::Signature>,
    /// Methods the transformation has attached
    attached: Vec<syn::ImplItemMethod>,
}

impl MethodTable {
    fn signatures(&self) -> impl Iterator<Item = &syn::Signature> {
        chain!(&self.declared, self.attached.iter().map(|m| &m.sig))
    }

    pub fn has_member(&self, name: &str, arity: usize) -> bool {
        self.signatures()
            .any(|sig| sig.ident == name && arity_of(sig) == arity)
    }

    /// How many members have this name and arity
    #[allow(dead_code)] // used by the unit tests
    pub fn count(&self, name: &str, arity: usize) -> usize {
        self.signatures()
            .filter(|sig| sig.ident == name && arity_of(sig) == arity)
            .count()
    }

    pub fn attach(&mut self, method: syn::ImplItemMethod) {
        self.attached.push(method);
    }

    pub fn attached(&self) -> &[syn::ImplItemMethod] {
        &self.attached
    }

    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.signatures().map(|sig| sig.ident.to_string())
    }
}

pub fn arity_of(sig: &syn::Signature) -> usize {
    sig.inputs
        .iter()
        .filter(|arg| matches!(arg, syn::FnArg::Typed(_)))
        .count()
}

//---------- Declaration ----------

/// A type declaration, its capability set, and its method table
#[derive(Debug, Clone)]
pub struct Declaration {
    item: DeclItem,
    capabilities: CapabilitySet,
    methods: MethodTable,
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let item: syn::Item = input.parse()?;
        let item = match item {
            syn::Item::Struct(i) => DeclItem::Struct(i),
            syn::Item::Enum(i) => DeclItem::Enum(i),
            syn::Item::Union(i) => DeclItem::Union(i),
            syn::Item::Trait(i) => DeclItem::Trait(i),
            other => {
                return Err(other.error(
                    "#[deep_copy] can only be applied to a type declaration",
                ))
            }
        };
        Declaration::new(item)
    }
}

impl Declaration {
    fn new(item: DeclItem) -> syn::Result<Self> {
        let mut methods = MethodTable::default();
        if let DeclItem::Trait(t) = &item {
            methods.declared = t
                .items
                .iter()
                .filter_map(|i| match i {
                    syn::TraitItem::Method(m) => Some(m.sig.clone()),
                    _ => None,
                })
                .collect();
        }
        let capabilities = CapabilitySet::from_attrs(attrs_of(&item))?;
        Ok(Declaration {
            item,
            capabilities,
            methods,
        })
    }

    pub fn ident(&self) -> &syn::Ident {
        use DeclItem::*;
        match &self.item {
            Struct(i) => &i.ident,
            Enum(i) => &i.ident,
            Union(i) => &i.ident,
            Trait(i) => &i.ident,
        }
    }

    pub fn kind(&self) -> DeclKind {
        match &self.item {
            DeclItem::Struct(_) => DeclKind::Struct,
            DeclItem::Enum(_) => DeclKind::Enum,
            DeclItem::Union(_) => DeclKind::Union,
            DeclItem::Trait(_) => DeclKind::Trait,
        }
    }

    pub fn classification(&self) -> Classification {
        self.kind().classification()
    }

    pub fn generics(&self) -> &syn::Generics {
        use DeclItem::*;
        match &self.item {
            Struct(i) => &i.generics,
            Enum(i) => &i.generics,
            Union(i) => &i.generics,
            Trait(i) => &i.generics,
        }
    }

    /// Span of the `struct`/`enum`/`union`/`trait` keyword
    pub fn keyword_span(&self) -> Span {
        use DeclItem::*;
        match &self.item {
            Struct(i) => i.struct_token.span(),
            Enum(i) => i.enum_token.span(),
            Union(i) => i.union_token.span(),
            Trait(i) => i.trait_token.span(),
        }
    }

    /// The declaration's own type, as a plain path with no `Self`
    pub fn plain_type(&self) -> syn::Type {
        let ident = self.ident();
        parse_quote!( #ident )
    }

    pub fn attrs(&self) -> &[syn::Attribute] {
        attrs_of(&self.item)
    }

    fn attrs_mut(&mut self) -> &mut Vec<syn::Attribute> {
        use DeclItem::*;
        match &mut self.item {
            Struct(i) => &mut i.attrs,
            Enum(i) => &mut i.attrs,
            Union(i) => &mut i.attrs,
            Trait(i) => &mut i.attrs,
        }
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut MethodTable {
        &mut self.methods
    }

    pub fn has_member(&self, name: &str, arity: usize) -> bool {
        self.methods.has_member(name, arity)
    }

    /// Derive `marker`, if nothing of that name is derived already
    ///
    /// The new `#[derive]` goes before the first existing `#[derive]`
    /// or `#[serde]`: after any attribute macros (which must precede
    /// derives) and before any helper attributes it may own.
    ///
    /// Returns whether anything was added.
    pub fn add_capability(&mut self, marker: &CapabilityMarker) -> bool {
        if !self.capabilities.insert(marker.path.clone()) {
            return false;
        }
        let attrs = self.attrs_mut();
        let at = attrs
            .iter()
            .position(|a| a.path.is_ident("derive") || a.path.is_ident("serde"))
            .unwrap_or(attrs.len());
        let path = &marker.path;
        attrs.insert(at, parse_quote!( #[derive(#path)] ));
        true
    }

    /// Does some `#[serde(...)]` attribute already say `crate = ...`?
    pub fn names_serde_crate(&self) -> bool {
        self.attrs()
            .iter()
            .filter(|a| a.path.is_ident("serde"))
            .flat_map(|a| a.tokens.clone())
            .any(|tt| match tt {
                TT::Group(g) => g
                    .stream()
                    .into_iter()
                    .any(|t| matches!(t, TT::Ident(i) if i == "crate")),
                _ => false,
            })
    }

    /// Append an attribute after all the existing ones
    pub fn push_attr(&mut self, attr: syn::Attribute) {
        self.attrs_mut().push(attr);
    }

    /// Remove and return every further `deep_copy` annotation
    pub fn take_annotations(&mut self) -> Vec<Annotation> {
        let attrs = self.attrs_mut();
        let (ours, others): (Vec<_>, Vec<_>) =
            mem::take(attrs).into_iter().partition(annotation::is_ours);
        *attrs = others;
        ours.iter().map(Annotation::from_attribute).collect()
    }
}

fn attrs_of(item: &DeclItem) -> &[syn::Attribute] {
    use DeclItem::*;
    match item {
        Struct(i) => &i.attrs,
        Enum(i) => &i.attrs,
        Union(i) => &i.attrs,
        Trait(i) => &i.attrs,
    }
}

impl ToTokens for DeclItem {
    fn to_tokens(&self, out: &mut TokenStream) {
        use DeclItem::*;
        match self {
            Struct(i) => i.to_tokens(out),
            Enum(i) => i.to_tokens(out),
            Union(i) => i.to_tokens(out),
            Trait(i) => i.to_tokens(out),
        }
    }
}

/// The item, followed by an inherent `impl` holding any attached methods
impl ToTokens for Declaration {
    fn to_tokens(&self, out: &mut TokenStream) {
        self.item.to_tokens(out);
        let attached = self.methods.attached();
        if attached.is_empty() {
            return;
        }
        let ident = self.ident();
        let (impl_generics, ty_generics, where_clause) =
            self.generics().split_for_impl();
        out.extend(quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #( #attached )*
            }
        });
    }
}
