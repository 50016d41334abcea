extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveContract, DeriveSymbolic};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

pub(crate) const MACRO_OPTION_CONTRACT: &str = "OptionContract";
pub(crate) const MACRO_SYMBOLIC: &str = "Symbolic";
pub(crate) const ATTRIBUTE_NAME: &str = "argbind";

/// Derive an option contract (`argbind::OptionContract`) from a struct with named fields.
#[proc_macro_derive(OptionContract, attributes(argbind))]
pub fn option_contract(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveContract::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive an enumerated type (`argbind::prelude::Symbolic`) from a unit-only enum.
#[proc_macro_derive(Symbolic, attributes(argbind))]
pub fn symbolic(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveSymbolic::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
