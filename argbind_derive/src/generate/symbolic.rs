use crate::model::DeriveSymbolic;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl TryFrom<DeriveSymbolic> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveSymbolic) -> Result<Self, Self::Error> {
        let DeriveSymbolic {
            enum_name,
            variants,
        } = value;
        let symbols: Vec<&String> = variants.iter().map(|v| &v.symbol).collect();
        let variant_names: Vec<&syn::Ident> = variants.iter().map(|v| &v.variant_name).collect();

        Ok(quote! {
            impl ::argbind::prelude::Symbolic for #enum_name {
                const SYMBOLS: &'static [&'static str] = &[ #( #symbols ),* ];

                fn from_symbol(symbol: &str) -> ::std::option::Option<Self> {
                    match symbol {
                        #( #symbols => ::std::option::Option::Some(Self::#variant_names), )*
                        _ => ::std::option::Option::None,
                    }
                }

                fn symbol(&self) -> &'static str {
                    match *self {
                        #( Self::#variant_names => #symbols, )*
                    }
                }
            }

            impl ::argbind::Scalar for #enum_name {
                fn value_type() -> ::argbind::ValueType {
                    ::argbind::ValueType::Symbol(<Self as ::argbind::prelude::Symbolic>::SYMBOLS)
                }

                fn from_scalar(
                    value: ::argbind::Value,
                ) -> ::std::result::Result<Self, ::argbind::ValueMismatch> {
                    if let ::argbind::Value::Symbol(ref symbol) = value {
                        if let ::std::option::Option::Some(variant) =
                            <Self as ::argbind::prelude::Symbolic>::from_symbol(symbol)
                        {
                            return ::std::result::Result::Ok(variant);
                        }
                    }

                    ::std::result::Result::Err(::argbind::ValueMismatch::new::<Self>(&value))
                }
            }
        })
    }
}
