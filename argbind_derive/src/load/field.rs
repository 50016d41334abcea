use crate::model::{DeriveField, DeriveValue, FieldMarker, IntermediateAttributes, OptionAttributes};
use quote::ToTokens;
use syn::ext::IdentExt;

const OPTION: &str = "option";
const UNPARSED: &str = "unparsed";
const PRESENT: &str = "present";

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - option contracts require named fields.",
                ))
            }
        };
        let identity = field_name.unraw();
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        let markers: Vec<&str> = [OPTION, UNPARSED]
            .into_iter()
            .filter(|marker| attributes.has(marker))
            .chain(attributes.pairs.contains_key(PRESENT).then_some(PRESENT))
            .collect();

        let marker = match markers[..] {
            [] if attributes.is_empty() => FieldMarker::Excluded,
            [] => {
                return Err(syn::Error::new_spanned(
                    value,
                    format!(
                        "Invalid - field '{identity}' must be marked with one of '{OPTION}', '{UNPARSED}' or '{PRESENT} = \"..\"'."
                    ),
                ))
            }
            [OPTION] => {
                attributes.allow_only(
                    &[
                        OPTION,
                        "long",
                        "short",
                        "default",
                        "optional",
                        "help",
                        "description",
                        "pattern",
                        "exactly",
                        "minimum",
                        "maximum",
                    ],
                    "an option",
                    value,
                )?;
                let optional = attributes.has("optional");
                let defaults = attributes.repeated("default");

                if optional && defaults.is_empty() && !may_be_absent(&value.ty) {
                    return Err(syn::Error::new_spanned(
                        &value.ty,
                        format!(
                            "Invalid - optional field '{identity}' must be typed `Option<..>`, `Vec<..>` or `bool`, or declare a default."
                        ),
                    ));
                }

                FieldMarker::Option(OptionAttributes {
                    long: attributes.single("long", value)?,
                    short: attributes.single("short", value)?,
                    defaults,
                    optional,
                    help: attributes.has("help"),
                    description: attributes.single("description", value)?,
                    pattern: attributes.single("pattern", value)?,
                    exactly: attributes.single("exactly", value)?,
                    minimum: attributes.single("minimum", value)?,
                    maximum: attributes.single("maximum", value)?,
                })
            }
            [UNPARSED] => {
                attributes.allow_only(
                    &[UNPARSED, "default", "description"],
                    "the unparsed collector",
                    value,
                )?;
                FieldMarker::Unparsed {
                    defaults: attributes.repeated("default"),
                    description: attributes.single("description", value)?,
                }
            }
            [PRESENT] => {
                attributes.allow_only(&[PRESENT], "a presence accessor", value)?;
                let target = match attributes.single(PRESENT, value)? {
                    Some(target) => target,
                    None => unreachable!("internal error - '{PRESENT}' must be a declared pair"),
                };
                FieldMarker::Presence { target }
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    value,
                    format!("Invalid - field '{identity}' cannot be marked as {markers:?} at once."),
                ))
            }
        };

        Ok(DeriveField {
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            marker,
        })
    }
}

/// Whether the type can represent an option that was not supplied.
/// Only the outer type name is inspected, so an alias is rejected.
pub(crate) fn may_be_absent(field_type: &syn::Type) -> bool {
    match field_type {
        syn::Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| matches!(segment.ident.to_string().as_str(), "Option" | "Vec" | "bool"))
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn construct_excluded() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[doc = "not an argbind attribute"]
            cache: Vec<u8>
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            derive_field,
            DeriveField {
                field_name: ident("cache"),
                field_type: DeriveValue {
                    tokens: quote! { Vec<u8> },
                },
                marker: FieldMarker::Excluded,
            }
        );
    }

    #[test]
    fn construct_option() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argbind(option, short = 'n', long = "the-name", description = "The name.")]
            #[argbind(default = "abc", optional, help, pattern = "[a-z]+")]
            r#name: Option<String>
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            derive_field,
            DeriveField {
                field_name: syn::Ident::new_raw("name", Span::call_site()),
                field_type: DeriveValue {
                    tokens: quote! { Option<String> },
                },
                marker: FieldMarker::Option(OptionAttributes {
                    long: Some(string("the-name")),
                    short: Some(DeriveValue {
                        tokens: Literal::character('n').into_token_stream(),
                    }),
                    defaults: vec![string("abc")],
                    optional: true,
                    help: true,
                    description: Some(string("The name.")),
                    pattern: Some(string("[a-z]+")),
                    exactly: None,
                    minimum: None,
                    maximum: None,
                }),
            }
        );
    }

    #[test]
    fn construct_option_counts() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argbind(option, minimum = 1, maximum = 3)]
            items: Vec<u32>
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            derive_field.marker,
            FieldMarker::Option(OptionAttributes {
                minimum: Some(DeriveValue {
                    tokens: quote! { 1 },
                }),
                maximum: Some(DeriveValue {
                    tokens: quote! { 3 },
                }),
                ..OptionAttributes::default()
            })
        );
    }

    #[test]
    fn construct_unparsed() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argbind(unparsed, default = "a.txt")]
            files: Vec<String>
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            derive_field.marker,
            FieldMarker::Unparsed {
                defaults: vec![string("a.txt")],
                description: None,
            }
        );
    }

    #[test]
    fn construct_presence() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argbind(present = "name")]
            is_name: bool
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            derive_field.marker,
            FieldMarker::Presence {
                target: string("name"),
            }
        );
    }

    #[test]
    fn construct_optional() {
        let fields: Vec<syn::Field> = vec![
            parse_quote! { #[argbind(option, optional)] name: Option<String> },
            parse_quote! { #[argbind(option, optional)] names: Vec<String> },
            parse_quote! { #[argbind(option, optional)] verbose: bool },
            parse_quote! { #[argbind(option, optional, default = "x")] name: String },
        ];

        for field in fields {
            // Execute
            let derive_field = DeriveField::try_from(&field).unwrap();

            // Verify
            assert!(matches!(
                derive_field.marker,
                FieldMarker::Option(OptionAttributes { optional: true, .. })
            ));
        }
    }

    #[test]
    fn construct_raw_identifier() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argbind(option)]
            r#type: String
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(derive_field.field_name.to_string(), "r#type");
        assert_eq!(derive_field.field_name.unraw().to_string(), "type");
    }

    #[test]
    fn construct_invalid() {
        let cases: Vec<(syn::Field, &str)> = vec![
            (
                parse_quote! { #[argbind(short = 'n')] name: String },
                "must be marked with one of",
            ),
            (
                parse_quote! { #[argbind(option, unparsed)] name: Vec<String> },
                "cannot be marked as [\"option\", \"unparsed\"] at once",
            ),
            (
                parse_quote! { #[argbind(option, present = "other")] name: bool },
                "cannot be marked as",
            ),
            (
                parse_quote! { #[argbind(unparsed, short = 'n')] files: Vec<String> },
                "the unparsed collector does not support the attribute(s) [\"short\"]",
            ),
            (
                parse_quote! { #[argbind(option, short = 'a', short = 'b')] name: String },
                "attribute 'short' may only be declared once",
            ),
            (
                parse_quote! { #[argbind(present = "a", present = "b")] is_a: bool },
                "attribute 'present' may only be declared once",
            ),
            (
                parse_quote! { #[argbind(option, optional)] name: String },
                "optional field 'name' must be typed",
            ),
            (
                parse_quote! { #[argbind(option, optional)] r#type: Tone },
                "optional field 'type' must be typed",
            ),
        ];

        for (field, expected) in cases {
            // Execute
            let error = DeriveField::try_from(&field).unwrap_err();

            // Verify
            assert!(
                error.to_string().contains(expected),
                "'{error}' does not contain '{expected}'"
            );
        }
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn string(value: &str) -> DeriveValue {
        DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        }
    }
}
