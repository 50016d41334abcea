use crate::model::{DeriveValue, IntermediateAttributes};
use crate::ATTRIBUTE_NAME;
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(ref path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        singletons.insert(ident.to_string());
                    }
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        &other,
                        format!("Unparseable attribute: {}", other.to_token_stream()),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// Merge every `#[argbind(..)]` attribute in the list.
    pub(crate) fn load(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut merged = IntermediateAttributes::default();

        for attribute in attributes {
            if attribute.path().is_ident(ATTRIBUTE_NAME) {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                merged.singletons.extend(singletons);

                for (key, values) in pairs {
                    merged.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(merged)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.singletons.is_empty() && self.pairs.is_empty()
    }

    pub(crate) fn has(&self, name: &str) -> bool {
        self.singletons.contains(name)
    }

    /// The value of a pair that may appear at most once.
    pub(crate) fn single(
        &self,
        name: &str,
        span: &impl ToTokens,
    ) -> Result<Option<DeriveValue>, syn::Error> {
        match self.pairs.get(name).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value.clone())),
            Some(_) => Err(syn::Error::new_spanned(
                span,
                format!("Invalid - attribute '{name}' may only be declared once."),
            )),
        }
    }

    /// The values of a pair that may repeat, in declaration order.
    pub(crate) fn repeated(&self, name: &str) -> Vec<DeriveValue> {
        self.pairs.get(name).cloned().unwrap_or_default()
    }

    /// Reject any singleton or pair outside of the allowed names.
    pub(crate) fn allow_only(
        &self,
        allowed: &[&str],
        context: &str,
        span: &impl ToTokens,
    ) -> Result<(), syn::Error> {
        let mut unknown: Vec<&String> = self
            .singletons
            .iter()
            .chain(self.pairs.keys())
            .filter(|name| !allowed.contains(&name.as_str()))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            unknown.sort();
            Err(syn::Error::new_spanned(
                span,
                format!("Invalid - {context} does not support the attribute(s) {unknown:?}."),
            ))
        }
    }
}
