//! `syn` front end: turns annotated Rust items into interface descriptors.
//!
//! Attributes are normalized into [`Annotation`]s without interpretation.
//! String literal arguments become [`ArgumentValue::Literal`], anything else
//! is kept as source text in [`ArgumentValue::Expression`].

use photonfire_define::{
    Annotation, AnnotationArgument, ArgumentValue, DeclarationKind, HttpVerb, InterfaceDescriptor,
    MethodDescriptor, ParameterDescriptor, QUERY_ANNOTATION, Visibility,
};
use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Expr, ExprLit, FnArg, GenericArgument, Ident, Item, ItemTrait, Lit, Meta, Pat,
    PathArguments, ReturnType, Token, TraitItem, TraitItemFn, Type, TypePath,
};
use tracing::trace;

/// Describes any item a service attribute may be attached to.
///
/// Non-trait items yield a descriptor with no methods whose kind makes the
/// synthesizer reject it.
pub fn describe_item(item: &Item) -> InterfaceDescriptor {
    match item {
        Item::Trait(item_trait) => describe_trait(item_trait),
        Item::Struct(s) => opaque(&s.ident, DeclarationKind::Struct, &s.vis),
        Item::Enum(e) => opaque(&e.ident, DeclarationKind::Enum, &e.vis),
        Item::Union(u) => opaque(&u.ident, DeclarationKind::Union, &u.vis),
        Item::Fn(f) => opaque(&f.sig.ident, DeclarationKind::Other, &f.vis),
        Item::Type(t) => opaque(&t.ident, DeclarationKind::Other, &t.vis),
        _ => InterfaceDescriptor {
            name: String::new(),
            kind: DeclarationKind::Other,
            visibility: Visibility::Inherited,
            methods: Vec::new(),
            is_generic: false,
            required_items: Vec::new(),
        },
    }
}

/// Describes a trait and its methods in declaration order.
///
/// Associated consts and types are not described, only listed by name when
/// they lack a default.
pub fn describe_trait(item: &ItemTrait) -> InterfaceDescriptor {
    let mut methods = Vec::new();
    let mut required_items = Vec::new();
    for trait_item in &item.items {
        match trait_item {
            TraitItem::Fn(method) => methods.push(describe_method(method)),
            TraitItem::Const(c) if c.default.is_none() => required_items.push(c.ident.to_string()),
            TraitItem::Type(t) if t.default.is_none() => required_items.push(t.ident.to_string()),
            _ => {}
        }
    }

    InterfaceDescriptor {
        name: item.ident.to_string(),
        kind: DeclarationKind::Trait,
        visibility: visibility(&item.vis),
        methods,
        is_generic: !item.generics.params.is_empty(),
        required_items,
    }
}

/// Removes the route and query markers so the trait compiles on its own.
pub fn strip_annotations(item: &mut ItemTrait) {
    for trait_item in &mut item.items {
        let TraitItem::Fn(method) = trait_item else {
            continue;
        };
        method.attrs.retain(|attr| !is_marker(attr));
        for input in &mut method.sig.inputs {
            if let FnArg::Typed(pat_type) = input {
                pat_type.attrs.retain(|attr| !is_marker(attr));
            }
        }
    }
}

/// Returns the attribute name without any path qualifier.
pub fn attribute_name(attr: &Attribute) -> Option<String> {
    attr.path().segments.last().map(|s| s.ident.to_string())
}

fn is_marker(attr: &Attribute) -> bool {
    attribute_name(attr)
        .is_some_and(|name| name == QUERY_ANNOTATION || HttpVerb::from_annotation(&name).is_some())
}

fn opaque(ident: &Ident, kind: DeclarationKind, vis: &syn::Visibility) -> InterfaceDescriptor {
    InterfaceDescriptor {
        name: ident.to_string(),
        kind,
        visibility: visibility(vis),
        methods: Vec::new(),
        is_generic: false,
        required_items: Vec::new(),
    }
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(_) => Visibility::Crate,
        syn::Visibility::Inherited => Visibility::Inherited,
    }
}

fn describe_method(method: &TraitItemFn) -> MethodDescriptor {
    let sig = &method.sig;
    let has_receiver = sig
        .receiver()
        .is_some_and(|r| r.reference.is_some() && r.mutability.is_none());

    let parameters = sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(pat_type) => Some(pat_type),
            FnArg::Receiver(_) => None,
        })
        .enumerate()
        .map(|(index, pat_type)| {
            let local_name = match &*pat_type.pat {
                Pat::Ident(pat_ident) => pat_ident.ident.unraw().to_string(),
                _ => format!("arg{index}"),
            };
            ParameterDescriptor {
                local_name,
                type_name: pat_type.ty.to_token_stream().to_string(),
                annotations: pat_type.attrs.iter().map(describe_attribute).collect(),
            }
        })
        .collect();

    let output = match &sig.output {
        ReturnType::Default => "()".to_string(),
        ReturnType::Type(_, ty) => ty.to_token_stream().to_string(),
    };
    let return_type = success_type(&sig.output).unwrap_or_default();

    trace!(method = %sig.ident, output = %output, return_type = %return_type, "method described");

    MethodDescriptor {
        name: sig.ident.to_string(),
        parameters,
        output,
        return_type,
        annotations: method.attrs.iter().map(describe_attribute).collect(),
        is_async: sig.asyncness.is_some(),
        has_receiver,
        provided: method.default.is_some(),
        is_generic: !sig.generics.params.is_empty(),
    }
}

/// Extracts `T` from `Result<T, E>` or an alias `Result<T>`.
fn success_type(output: &ReturnType) -> Option<String> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };
    let Type::Path(TypePath { qself: None, path }) = ty.as_ref() else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty.to_token_stream().to_string()),
        _ => None,
    })
}

/// One attribute argument: `label = value` or a bare `value`.
struct RawArgument {
    label: Option<Ident>,
    value: Expr,
}

impl Parse for RawArgument {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
            let label = input.parse()?;
            input.parse::<Token![=]>()?;
            Ok(Self {
                label: Some(label),
                value: input.parse()?,
            })
        } else {
            Ok(Self {
                label: None,
                value: input.parse()?,
            })
        }
    }
}

fn describe_attribute(attr: &Attribute) -> Annotation {
    let name = attribute_name(attr).unwrap_or_default();
    let arguments = match &attr.meta {
        Meta::Path(_) => Vec::new(),
        Meta::List(list) => list
            .parse_args_with(Punctuated::<RawArgument, Token![,]>::parse_terminated)
            .map(|args| {
                args.into_iter()
                    .map(|raw| AnnotationArgument {
                        label: raw.label.map(|l| l.to_string()),
                        value: argument_value(&raw.value),
                    })
                    .collect()
            })
            .unwrap_or_else(|err| {
                trace!(attribute = %name, error = %err, "attribute arguments not understood");
                Vec::new()
            }),
        Meta::NameValue(name_value) => vec![AnnotationArgument {
            label: None,
            value: argument_value(&name_value.value),
        }],
    };
    Annotation { name, arguments }
}

fn argument_value(expr: &Expr) -> ArgumentValue {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => ArgumentValue::Literal(lit.value()),
        other => ArgumentValue::Expression(other.to_token_stream().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn account_service() -> ItemTrait {
        parse_quote! {
            pub trait AccountService {
                #[photonfire_get("/account")]
                async fn get_account(
                    &self,
                    id: String,
                    #[photonfire_query(name = "activated")] is_activated: bool,
                ) -> Result<Account, PhotonfireError>;

                #[photonfire_get(format!("/accounts/{}", id))]
                async fn by_id(&self, id: u64) -> photonfire::Result<Account>;

                fn helper(&self) -> u32 {
                    1
                }

                const LIMIT: u32;
            }
        }
    }

    #[test]
    fn describes_trait_methods_in_order() {
        let interface = describe_trait(&account_service());

        assert_eq!(interface.name, "AccountService");
        assert_eq!(interface.kind, DeclarationKind::Trait);
        assert_eq!(interface.visibility, Visibility::Public);
        let names: Vec<_> = interface.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["get_account", "by_id", "helper"]);
    }

    #[test]
    fn literal_route_and_query_override() {
        let interface = describe_trait(&account_service());
        let method = &interface.methods[0];

        assert!(method.is_async);
        assert!(method.has_receiver);
        assert!(!method.provided);
        assert_eq!(method.return_type, "Account");

        let (verb, route) = method.route().unwrap();
        assert_eq!(verb, HttpVerb::Get);
        assert_eq!(
            route.first_argument().unwrap().value,
            ArgumentValue::Literal("/account".into())
        );

        let query = &method.parameters[1].annotations[0];
        assert_eq!(query.name, QUERY_ANNOTATION);
        assert_eq!(
            query.argument("name").unwrap().value,
            ArgumentValue::Literal("activated".into())
        );
    }

    #[test]
    fn expression_route_and_result_alias() {
        let interface = describe_trait(&account_service());
        let method = &interface.methods[1];

        assert_eq!(method.return_type, "Account");
        let (_, route) = method.route().unwrap();
        assert!(matches!(
            route.first_argument().unwrap().value,
            ArgumentValue::Expression(_)
        ));
    }

    #[test]
    fn required_associated_items_are_listed() {
        let item: ItemTrait = parse_quote! {
            trait Svc {
                const LIMIT: u32;
                const PAGE: u32 = 20;
                type Output;
                type Page = u32;
            }
        };
        let interface = describe_trait(&item);
        assert_eq!(interface.required_items, ["LIMIT", "Output"]);
        assert!(!interface.is_generic);
        assert_eq!(
            describe_trait(&account_service()).required_items,
            ["LIMIT"]
        );
    }

    #[test]
    fn generics_are_flagged() {
        let item: ItemTrait = parse_quote! {
            trait Svc<T> {
                #[photonfire_get("/x")]
                async fn call<'a>(&self, key: &'a str) -> Result<u32, E>;

                #[photonfire_get("/y")]
                async fn plain(&self) -> Result<u32, E>;
            }
        };
        let interface = describe_trait(&item);
        assert!(interface.is_generic);
        assert!(interface.methods[0].is_generic);
        assert!(!interface.methods[1].is_generic);
    }

    #[test]
    fn raw_parameter_name_is_unraw() {
        let item: ItemTrait = parse_quote! {
            trait Items {
                #[photonfire_get("/items")]
                async fn list(&self, r#type: String) -> Result<Vec<Item>, E>;
            }
        };
        let method = &describe_trait(&item).methods[0];
        assert_eq!(method.parameters[0].local_name, "type");
        assert_eq!(crate::classifier::classify(&method.parameters[0]), "type");
    }

    #[test]
    fn provided_method_is_flagged() {
        let interface = describe_trait(&account_service());
        let helper = &interface.methods[2];
        assert!(helper.provided);
        assert!(!helper.is_async);
        assert!(helper.route().is_none());
    }

    #[test]
    fn mutable_receiver_is_not_a_receiver() {
        let item: ItemTrait = parse_quote! {
            trait Svc {
                #[photonfire_get("/x")]
                async fn call(&mut self) -> Result<u32, E>;
            }
        };
        assert!(!describe_trait(&item).methods[0].has_receiver);
    }

    #[test]
    fn non_result_output_has_empty_return_type() {
        let item: ItemTrait = parse_quote! {
            trait Svc {
                async fn call(&self) -> u32;
            }
        };
        let method = &describe_trait(&item).methods[0];
        assert_eq!(method.output, "u32");
        assert!(method.return_type.is_empty());
    }

    #[test]
    fn struct_is_not_an_interface() {
        let item: Item = parse_quote! {
            pub struct Account {
                id: String,
            }
        };
        let interface = describe_item(&item);
        assert_eq!(interface.name, "Account");
        assert_eq!(interface.kind, DeclarationKind::Struct);
        assert!(!interface.is_interface());
    }

    #[test]
    fn strip_removes_only_markers() {
        let mut item: ItemTrait = parse_quote! {
            trait Svc {
                /// Docs stay.
                #[photonfire_get("/x")]
                async fn call(&self, #[photonfire_query(name = "k")] key: String) -> Result<u32, E>;
            }
        };
        strip_annotations(&mut item);

        let TraitItem::Fn(method) = &item.items[0] else {
            panic!("expected fn");
        };
        assert_eq!(method.attrs.len(), 1);
        assert_eq!(attribute_name(&method.attrs[0]).as_deref(), Some("doc"));
        let FnArg::Typed(param) = &method.sig.inputs[1] else {
            panic!("expected typed arg");
        };
        assert!(param.attrs.is_empty());
    }
}
