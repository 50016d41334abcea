use crate::model::{DeriveContract, DeriveField, FieldMarker, OptionAttributes};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

impl TryFrom<DeriveContract> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveContract) -> Result<Self, Self::Error> {
        let DeriveContract {
            struct_name,
            program_name,
            fields,
        } = value;
        let program = program_name.tokens;
        let accessors: Vec<TokenStream2> = fields.iter().filter_map(DeriveField::accessor).collect();
        let initialisers: Vec<TokenStream2> = fields.iter().map(DeriveField::initialiser).collect();

        Ok(quote! {
            impl ::argbind::OptionContract for #struct_name {
                fn contract() -> ::argbind::Contract {
                    ::argbind::Contract::new(#program)
                        #( .accessor(#accessors) )*
                }

                fn specification() -> ::std::result::Result<
                    &'static ::argbind::Specification,
                    ::argbind::MalformedSpecification,
                > {
                    static CACHE: ::argbind::SpecificationCache = ::argbind::SpecificationCache::new();
                    CACHE.get_or_build(<Self as ::argbind::OptionContract>::contract)
                }

                #[allow(unused_mut, unused_variables)]
                fn construct(
                    mut values: ::argbind::BoundValues,
                ) -> ::std::result::Result<Self, ::argbind::ExtractError> {
                    ::std::result::Result::Ok(Self {
                        #( #initialisers ),*
                    })
                }
            }
        })
    }
}

impl DeriveField {
    fn accessor(&self) -> Option<TokenStream2> {
        let identity = self.field_name.unraw().to_string();
        let field_type = &self.field_type.tokens;
        let marker = match &self.marker {
            FieldMarker::Excluded => return None,
            FieldMarker::Option(attributes) => {
                let option_marker = attributes.generate();
                quote! { ::argbind::Marker::Option(#option_marker) }
            }
            FieldMarker::Unparsed {
                defaults,
                description,
            } => {
                let defaults = defaults.iter().map(|d| &d.tokens);
                let description = description.iter().map(|d| &d.tokens);
                quote! {
                    ::argbind::Marker::Unparsed(
                        ::argbind::UnparsedMarker::default()
                            #( .default_value(#defaults) )*
                            #( .description(#description) )*
                    )
                }
            }
            FieldMarker::Presence { target } => {
                let target = &target.tokens;
                quote! { ::argbind::Marker::Presence(::std::string::String::from(#target)) }
            }
        };

        Some(quote! {
            ::argbind::Accessor::new(
                #identity,
                <#field_type as ::argbind::Bindable>::declared_type(),
            )
            .marker(#marker)
        })
    }

    fn initialiser(&self) -> TokenStream2 {
        let field_name = &self.field_name;
        let identity = field_name.unraw().to_string();

        match &self.marker {
            FieldMarker::Excluded => quote! {
                #field_name: ::std::default::Default::default()
            },
            _ => quote! {
                #field_name: values.take(#identity)?
            },
        }
    }
}

impl OptionAttributes {
    fn generate(&self) -> TokenStream2 {
        let OptionAttributes {
            long,
            short,
            defaults,
            optional,
            help,
            description,
            pattern,
            exactly,
            minimum,
            maximum,
        } = self;
        let long = long.iter().map(|v| &v.tokens);
        let short = short.iter().map(|v| &v.tokens);
        let defaults = defaults.iter().map(|v| &v.tokens);
        let description = description.iter().map(|v| &v.tokens);
        let pattern = pattern.iter().map(|v| &v.tokens);
        let exactly = exactly.iter().map(|v| &v.tokens);
        let minimum = minimum.iter().map(|v| &v.tokens);
        let maximum = maximum.iter().map(|v| &v.tokens);
        let optional = optional.then(|| quote! { .optional() });
        let help = help.then(|| quote! { .help_request() });

        quote! {
            ::argbind::OptionMarker::default()
                #( .long(#long) )*
                #( .short(#short) )*
                #( .default_value(#defaults) )*
                #optional
                #help
                #( .description(#description) )*
                #( .pattern(#pattern) )*
                #( .exactly(#exactly) )*
                #( .minimum(#minimum) )*
                #( .maximum(#maximum) )*
        }
    }
}
