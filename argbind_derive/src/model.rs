use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct OptionAttributes {
    pub long: Option<DeriveValue>,
    pub short: Option<DeriveValue>,
    pub defaults: Vec<DeriveValue>,
    pub optional: bool,
    pub help: bool,
    pub description: Option<DeriveValue>,
    pub pattern: Option<DeriveValue>,
    pub exactly: Option<DeriveValue>,
    pub minimum: Option<DeriveValue>,
    pub maximum: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FieldMarker {
    Option(OptionAttributes),
    Unparsed {
        defaults: Vec<DeriveValue>,
        description: Option<DeriveValue>,
    },
    Presence {
        target: DeriveValue,
    },
    Excluded,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
    pub marker: FieldMarker,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveContract {
    pub struct_name: syn::Ident,
    pub program_name: DeriveValue,
    pub fields: Vec<DeriveField>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveVariant {
    pub variant_name: syn::Ident,
    pub symbol: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveSymbolic {
    pub enum_name: syn::Ident,
    pub variants: Vec<DeriveVariant>,
}
