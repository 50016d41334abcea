use crate::model::{DeriveSymbolic, DeriveVariant, IntermediateAttributes};
use crate::MACRO_SYMBOLIC;
use std::collections::HashSet;

impl TryFrom<syn::DeriveInput> for DeriveSymbolic {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                format!("Invalid - {MACRO_SYMBOLIC} does not support generic enums."),
            ));
        }

        match &value.data {
            syn::Data::Enum(de) => {
                let variants = de
                    .variants
                    .iter()
                    .map(DeriveVariant::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                let mut symbols = HashSet::new();

                for variant in &variants {
                    if !symbols.insert(variant.symbol.as_str()) {
                        return Err(syn::Error::new(
                            variant.variant_name.span(),
                            format!("Invalid - duplicate symbol '{}'.", variant.symbol),
                        ));
                    }
                }

                Ok(DeriveSymbolic {
                    enum_name: enum_name.clone(),
                    variants,
                })
            }
            _ => Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_SYMBOLIC} only applies to 'enum' data structures."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveVariant {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                value,
                format!("Invalid - {MACRO_SYMBOLIC} variants must be unit variants."),
            ));
        }

        let attributes = IntermediateAttributes::load(&value.attrs)?;
        attributes.allow_only(&["symbol"], "a symbolic variant", value)?;
        let symbol = match attributes.single("symbol", value)? {
            Some(symbol) => syn::parse2::<syn::LitStr>(symbol.tokens)?.value(),
            None => value.ident.to_string(),
        };

        if symbol.is_empty() {
            return Err(syn::Error::new_spanned(
                value,
                "Invalid - a symbol cannot be empty.",
            ));
        }

        Ok(DeriveVariant {
            variant_name: value.ident.clone(),
            symbol,
        })
    }
}
