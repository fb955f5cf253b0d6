//! Implementation of #[derive(Model)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Fields, GenericArgument, Ident, LitStr,
    PathArguments, Type,
};

/// What a struct field is, judged by the last segment of its type.
enum FieldKind {
    Store,
    Scalar,
    Object(Type),
    Collection(Type),
}

struct Cell {
    ident: Ident,
    key: String,
    kind: FieldKind,
    merge: Option<LitStr>,
}

pub fn derive_model_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let model_name = parse_model_attrs(&input.attrs)?.unwrap_or_else(|| name.to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Model requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Model only works on structs",
            ))
        }
    };

    let mut store: Option<Ident> = None;
    let mut cells = Vec::new();

    for field in fields {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let kind = classify(&field.ty)?;
        let merge = parse_attr_attrs(&field.attrs)?;

        if let Some(merge) = &merge {
            if !matches!(kind, FieldKind::Object(_)) {
                return Err(syn::Error::new_spanned(
                    merge,
                    "merge is only supported on Object<T> fields",
                ));
            }
        }

        if let FieldKind::Store = kind {
            if store.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "Model requires exactly one Attributes field",
                ));
            }
            store = Some(ident);
            continue;
        }

        cells.push(Cell {
            key: ident.unraw().to_string(),
            ident,
            kind,
            merge,
        });
    }

    let store = store.ok_or_else(|| {
        syn::Error::new_spanned(input, "Model requires exactly one Attributes field")
    })?;

    let accessors = cells.iter().map(|cell| accessor(cell, &store));
    let specs = cells.iter().map(spec);
    let arms = cells.iter().map(lookup_arm);
    let cell_idents = cells.iter().map(|cell| &cell.ident);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#accessors)*
        }

        impl #impl_generics ::taxjar_model::Model for #name #ty_generics #where_clause {
            const NAME: &'static str = #model_name;

            const SCHEMA: &'static [::taxjar_model::AttributeSpec] = &[#(#specs),*];

            fn from_attributes(attributes: ::taxjar_model::Attributes) -> Self {
                Self {
                    #store: attributes,
                    #(#cell_idents: ::core::default::Default::default(),)*
                }
            }

            fn attributes(&self) -> &::taxjar_model::Attributes {
                &self.#store
            }

            fn lookup(
                &self,
                attr_name: &str,
            ) -> ::taxjar_model::Result<::core::option::Option<::taxjar_model::Lookup<'_>>> {
                match attr_name {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::taxjar_model::TaxjarError::UnknownAttribute {
                        model: <Self as ::taxjar_model::Model>::NAME,
                        name: ::std::string::ToString::to_string(attr_name),
                    }),
                }
            }
        }
    })
}

/// Classify a field by the last segment of its type path.
fn classify(ty: &Type) -> syn::Result<FieldKind> {
    let unsupported = || {
        syn::Error::new_spanned(
            ty,
            "unsupported field type: expected Attributes, Scalar, Object<T> or Collection<T>",
        )
    };

    let Type::Path(type_path) = ty else {
        return Err(unsupported());
    };
    let segment = type_path.path.segments.last().ok_or_else(unsupported)?;

    match segment.ident.to_string().as_str() {
        "Attributes" => Ok(FieldKind::Store),
        "Scalar" => Ok(FieldKind::Scalar),
        "Object" => Ok(FieldKind::Object(inner_type(&segment.arguments).ok_or_else(unsupported)?)),
        "Collection" => Ok(FieldKind::Collection(
            inner_type(&segment.arguments).ok_or_else(unsupported)?,
        )),
        _ => Err(unsupported()),
    }
}

/// The `T` of `Object<T>` / `Collection<T>`.
fn inner_type(arguments: &PathArguments) -> Option<Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(ty) => Some(ty.clone()),
        _ => None,
    }
}

/// Parse `#[model(name = "...")]`.
fn parse_model_attrs(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut name = None;
    for attr in attrs {
        if !attr.path().is_ident("model") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported model option, expected `name`"))
            }
        })?;
    }
    Ok(name)
}

/// Parse `#[attr(merge = "...")]`.
fn parse_attr_attrs(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut merge = None;
    for attr in attrs {
        if !attr.path().is_ident("attr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("merge") {
                merge = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported attr option, expected `merge`"))
            }
        })?;
    }
    Ok(merge)
}

fn accessor(cell: &Cell, store: &Ident) -> TokenStream2 {
    let ident = &cell.ident;
    let key = &cell.key;
    let has = format_ident!("has_{}", cell.key);
    let has_doc = format!("Whether `{}` is present.", key);

    match &cell.kind {
        FieldKind::Scalar => {
            let doc = format!("The `{}` value, if present.", key);
            quote! {
                #[doc = #doc]
                pub fn #ident(&self) -> ::core::option::Option<&::taxjar_model::AttrValue> {
                    self.#ident.read(&self.#store, #key)
                }

                #[doc = #has_doc]
                pub fn #has(&self) -> bool {
                    self.#ident.present(&self.#store, #key)
                }
            }
        }
        FieldKind::Object(inner) => {
            let doc = format!("The nested `{}` object, if present.", key);
            let merge = match &cell.merge {
                Some(lit) => quote! { ::core::option::Option::Some(#lit) },
                None => quote! { ::core::option::Option::None },
            };
            quote! {
                #[doc = #doc]
                pub fn #ident(&self) -> ::core::option::Option<&#inner> {
                    self.#ident.read(&self.#store, #key, #merge)
                }

                #[doc = #has_doc]
                pub fn #has(&self) -> bool {
                    self.#ident.present(&self.#store, #key)
                }
            }
        }
        FieldKind::Collection(inner) => {
            let doc = format!("The `{}` collection, empty when missing.", key);
            quote! {
                #[doc = #doc]
                pub fn #ident(&self) -> &[#inner] {
                    self.#ident.read(&self.#store, #key)
                }

                #[doc = #has_doc]
                pub fn #has(&self) -> bool {
                    self.#ident.present(&self.#store, #key)
                }
            }
        }
        FieldKind::Store => quote! {},
    }
}

fn spec(cell: &Cell) -> TokenStream2 {
    let key = &cell.key;
    match (&cell.kind, &cell.merge) {
        (FieldKind::Object(_), Some(merge)) => {
            quote! { ::taxjar_model::AttributeSpec::object(#key).merge(#merge) }
        }
        (FieldKind::Object(_), None) => quote! { ::taxjar_model::AttributeSpec::object(#key) },
        (FieldKind::Collection(_), _) => {
            quote! { ::taxjar_model::AttributeSpec::collection(#key) }
        }
        _ => quote! { ::taxjar_model::AttributeSpec::scalar(#key) },
    }
}

fn lookup_arm(cell: &Cell) -> TokenStream2 {
    let ident = &cell.ident;
    let key = &cell.key;
    match &cell.kind {
        FieldKind::Object(_) => quote! {
            #key => ::core::result::Result::Ok(
                self.#ident().map(|value| ::taxjar_model::Lookup::Object(value)),
            ),
        },
        FieldKind::Collection(_) => quote! {
            #key => ::core::result::Result::Ok(::core::option::Option::Some(
                ::taxjar_model::Lookup::collection(self.#ident()),
            )),
        },
        _ => quote! {
            #key => ::core::result::Result::Ok(self.#ident().map(::taxjar_model::Lookup::Value)),
        },
    }
}
