use crate::model::{DeriveContract, DeriveField, DeriveValue, FieldMarker, IntermediateAttributes};
use crate::load::field::may_be_absent;
use crate::MACRO_OPTION_CONTRACT;
use quote::quote;
use syn::ext::IdentExt;

impl TryFrom<syn::DeriveInput> for DeriveContract {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        attributes.allow_only(&["program"], MACRO_OPTION_CONTRACT, &value.ident)?;

        let program = match attributes.single("program", &value.ident)? {
            Some(value) => value.tokens,
            None => quote! { ::std::env!("CARGO_CRATE_NAME") },
        };
        let struct_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                format!("Invalid - {MACRO_OPTION_CONTRACT} does not support generic structs."),
            ));
        }

        match &value.data {
            syn::Data::Struct(ds) => {
                let named: Vec<&syn::Field> = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields.named.iter().collect(),
                    syn::DataStruct {
                        fields: syn::Fields::Unit,
                        ..
                    } => Vec::default(),
                    syn::DataStruct { .. } => {
                        return Err(syn::Error::new(
                            struct_name.span(),
                            format!("Invalid - {MACRO_OPTION_CONTRACT} requires named fields."),
                        ))
                    }
                };

                let fields = named
                    .iter()
                    .copied()
                    .map(DeriveField::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                let unparsed: Vec<String> = fields
                    .iter()
                    .filter(|f| matches!(f.marker, FieldMarker::Unparsed { .. }))
                    .map(|f| f.field_name.unraw().to_string())
                    .collect();

                if unparsed.len() > 1 {
                    return Err(syn::Error::new(
                        struct_name.span(),
                        format!("Invalid - contract cannot have multiple unparsed collectors: {unparsed:?}."),
                    ));
                }

                for field in &fields {
                    if let FieldMarker::Presence { target } = &field.marker {
                        check_presence_target(target, &named, &fields)?;
                    }
                }

                Ok(DeriveContract {
                    struct_name: struct_name.clone(),
                    program_name: DeriveValue { tokens: program },
                    fields,
                })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_OPTION_CONTRACT} only applies to 'struct' data structures."),
            )),
        }
    }
}

// A presence accessor makes its target absent-able, which only an optional type can represent.
fn check_presence_target(
    target: &DeriveValue,
    named: &[&syn::Field],
    fields: &[DeriveField],
) -> Result<(), syn::Error> {
    let target = syn::parse2::<syn::LitStr>(target.tokens.clone())?.value();

    for (field, derive_field) in named.iter().zip(fields) {
        if derive_field.field_name.unraw() != target {
            continue;
        }

        if let FieldMarker::Option(attributes) = &derive_field.marker {
            if attributes.defaults.is_empty() && !may_be_absent(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    format!(
                        "Invalid - field '{target}' is the target of a presence accessor, so it must be typed `Option<..>`, `Vec<..>` or `bool`, or declare a default."
                    ),
                ));
            }
        }
    }

    Ok(())
}
