use argbind::derive::*;
use argbind::prelude::*;
use argbind::{
    Accessor, BoundValues, Contract, ContractParser, ExtractError, FailureKind,
    MalformedSpecification, Marker, OptionMarker, ParseError, Specification, SpecificationBuilder,
    SpecificationCache,
};
use assert_matches::assert_matches;
use rand::{thread_rng, Rng};
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Symbolic)]
enum Colour {
    Red,
    #[argbind(symbol = "green")]
    Green,
    Blue,
}

#[derive(Debug, PartialEq, OptionContract)]
#[argbind(program = "painter")]
struct Painter {
    #[argbind(option, short = 'h', help, description = "Show this help message and exit.")]
    help: bool,
    #[argbind(option, short = 'n')]
    name: String,
    #[argbind(option, short = 'c')]
    count: u32,
    #[argbind(option)]
    verbose: bool,
    #[argbind(option, short = 'i')]
    initial: Option<char>,
    #[argbind(option, default = "Red", default = "Blue")]
    colours: Vec<Colour>,
    #[argbind(option, long = "brush-size")]
    brush: Option<f32>,
    #[argbind(present = "brush")]
    is_brush: bool,
    #[argbind(option, optional, pattern = "[a-z]+", maximum = 2)]
    tags: Vec<String>,
    #[argbind(option)]
    r#type: Option<String>,
    #[argbind(unparsed)]
    canvases: Vec<String>,
    cache: Vec<u8>,
}

#[derive(Debug, PartialEq, OptionContract)]
struct Greeting {
    #[argbind(option)]
    name: Option<String>,
    #[argbind(present = "name")]
    is_name: bool,
}

#[allow(dead_code)]
#[derive(Debug, OptionContract)]
struct Clashing {
    #[argbind(option, short = 'x')]
    a: bool,
    #[argbind(option, short = 'x')]
    b: bool,
}

// A hand-written contract, with an accessor that declares a parameter.
#[allow(dead_code)]
#[derive(Debug)]
struct Lookup {
    key: String,
}

impl OptionContract for Lookup {
    fn contract() -> Contract {
        Contract::new("lookup")
            .accessor(
                Accessor::new("key", String::declared_type())
                    .marker(Marker::Option(OptionMarker::default())),
            )
            .accessor(
                Accessor::new("entry", String::declared_type())
                    .parameter("String")
                    .marker(Marker::Option(OptionMarker::default())),
            )
    }

    fn specification() -> Result<&'static Specification, MalformedSpecification> {
        static CACHE: SpecificationCache = SpecificationCache::new();
        CACHE.get_or_build(Self::contract)
    }

    fn construct(mut values: BoundValues) -> Result<Self, ExtractError> {
        Ok(Self {
            key: values.take("key")?,
        })
    }
}

fn kinds(error: ParseError) -> Vec<FailureKind> {
    match error {
        ParseError::Invalid(errors) => errors.kinds(),
        ParseError::Malformed(malformed) => panic!("unexpected {malformed}"),
    }
}

#[test]
fn parse_declared_options() {
    // Execute
    let painter = Painter::parse_arguments(&["--name", "abc", "--count", "3"]).unwrap();

    // Verify
    assert_eq!(
        painter,
        Painter {
            help: false,
            name: "abc".to_string(),
            count: 3,
            verbose: false,
            initial: None,
            colours: vec![Colour::Red, Colour::Blue],
            brush: None,
            is_brush: false,
            tags: Vec::default(),
            r#type: None,
            canvases: Vec::default(),
            cache: Vec::default(),
        }
    );
}

#[test]
fn parse_short_and_attached() {
    // Execute
    let painter =
        Painter::parse_arguments(&["-nabc", "--count=7", "-i", "z", "--brush-size=2.5"]).unwrap();

    // Verify
    assert_eq!(painter.name, "abc");
    assert_eq!(painter.count, 7);
    assert_eq!(painter.initial, Some('z'));
    assert_eq!(painter.brush, Some(2.5));
    assert!(painter.is_brush);
}

#[test]
fn parse_raw_identifier() {
    // Execute
    let painter = Painter::parse_arguments(&["-n", "abc", "-c", "1", "--type", "oil"]).unwrap();

    // Verify
    assert_eq!(painter.r#type, Some("oil".to_string()));
}

#[rstest]
#[case(vec![], Greeting { name: None, is_name: false })]
#[case(vec!["--name", "abc"], Greeting { name: Some("abc".to_string()), is_name: true })]
fn parse_presence(#[case] arguments: Vec<&str>, #[case] expected: Greeting) {
    // Execute
    let greeting = Greeting::parse_arguments(&arguments).unwrap();

    // Verify
    assert_eq!(greeting, expected);
}

#[test]
fn parse_unknown_and_missing() {
    // Execute
    let error = Painter::parse_arguments(&["--colour", "x", "--count", "1"]).unwrap_err();

    // Verify
    assert_eq!(
        kinds(error),
        vec![FailureKind::UnexpectedOption, FailureKind::MissingOption]
    );
}

#[rstest]
#[case(vec![], false)]
#[case(vec!["--verbose"], true)]
#[case(vec!["--verbose", "--verbose"], true)]
fn parse_flag(#[case] flags: Vec<&str>, #[case] expected: bool) {
    // Setup
    let mut arguments = vec!["-n", "abc", "-c", "1"];
    arguments.extend(flags);

    // Execute
    let painter = Painter::parse_arguments(&arguments).unwrap();

    // Verify
    assert_eq!(painter.verbose, expected);
}

#[test]
fn parse_invalid_number() {
    // Execute
    let error = Painter::parse_arguments(&["-n", "abc", "-c", "three"]).unwrap_err();

    // Verify
    let errors = assert_matches!(error, ParseError::Invalid(errors) => errors);
    assert_eq!(errors.kinds(), vec![FailureKind::InvalidValueForType]);
    let failure = &errors.failures()[0];
    assert_eq!(failure.identity(), Some("count"));
    assert!(failure.message().starts_with("Unsupported number format: "));
}

#[test]
fn parse_invalid_character() {
    // Execute
    let error = Painter::parse_arguments(&["-n", "abc", "-c", "1", "-i", "ab"]).unwrap_err();

    // Verify
    assert_eq!(kinds(error), vec![FailureKind::InvalidValueForType]);
}

#[rstest]
#[case(vec![], vec![Colour::Red, Colour::Blue])]
#[case(vec!["--colours", "green"], vec![Colour::Green])]
#[case(vec!["--colours", "Blue", "--colours=Red"], vec![Colour::Blue, Colour::Red])]
fn parse_symbolic_sequence(#[case] colours: Vec<&str>, #[case] expected: Vec<Colour>) {
    // Setup
    let mut arguments = vec!["-n", "abc", "-c", "1"];
    arguments.extend(colours);

    // Execute
    let painter = Painter::parse_arguments(&arguments).unwrap();

    // Verify
    assert_eq!(painter.colours, expected);
}

#[test]
fn parse_symbolic_case_sensitive() {
    // Execute
    let error = Painter::parse_arguments(&["-n", "abc", "-c", "1", "--colours", "Green"])
        .unwrap_err();

    // Verify
    let errors = assert_matches!(error, ParseError::Invalid(errors) => errors);
    assert_eq!(errors.kinds(), vec![FailureKind::InvalidValueForType]);
    assert_eq!(
        errors.failures()[0].message(),
        "'Green' is not one of {Red, green, Blue}."
    );
}

#[test]
fn parse_single_last_wins() {
    // Execute
    let painter = Painter::parse_arguments(&["-n", "a", "-c", "1", "--name", "b"]).unwrap();

    // Verify
    assert_eq!(painter.name, "b");
}

#[test]
fn parse_unparsed() {
    // Execute
    let painter = Painter::parse_arguments(&[
        "x", "-n", "abc", "-c", "1", "--", "--verbose", "-", "y",
    ])
    .unwrap();

    // Verify
    assert!(!painter.verbose);
    assert_eq!(painter.canvases, vec!["x", "--verbose", "-", "y"]);
}

#[test]
fn parse_help_wins() {
    // Execute
    let error = Painter::parse_arguments(&["--count", "x", "-h", "--unknown"]).unwrap_err();

    // Verify
    let errors = assert_matches!(error, ParseError::Invalid(errors) => errors);
    assert!(errors.is_help_requested());
    assert_eq!(errors.kinds(), vec![FailureKind::HelpRequested]);
    assert!(errors.failures()[0]
        .message()
        .starts_with("usage: painter [--help] --name NAME --count COUNT"));
}

#[test]
fn parse_aggregates_pattern_and_count() {
    // Execute
    let error = Painter::parse_arguments(&[
        "--tags", "A", "--tags", "b", "--tags", "c", "--count", "z",
    ])
    .unwrap_err();

    // Verify
    assert_eq!(
        kinds(error),
        vec![
            FailureKind::MissingOption,
            FailureKind::InvalidValueForType,
            FailureKind::TooManyValues,
            FailureKind::PatternMismatch,
        ]
    );
}

#[test]
fn parse_malformed() {
    // Execute
    let error = Clashing::parse_arguments(&[]).unwrap_err();

    // Verify
    let malformed = assert_matches!(error, ParseError::Malformed(malformed) => malformed);
    assert!(malformed.to_string().contains("'-x'"));
}

#[test]
fn parse_parameterised_lenient() {
    // Execute
    let error = Lookup::parse_arguments(&["--key", "k", "--entry", "e"]).unwrap_err();

    // Verify
    let errors = assert_matches!(error, ParseError::Invalid(errors) => errors);
    assert_eq!(errors.kinds(), vec![FailureKind::UnexpectedOption]);
    assert_eq!(errors.failures()[0].message(), "Option 'entry' does not exist.");
}

#[test]
fn parse_parameterised_strict() {
    // Execute
    let result = ContractParser::<Lookup>::with_builder(SpecificationBuilder::new().strict(true));

    // Verify
    assert_matches!(result, Err(_));
}

#[test]
fn parse_round_trip() {
    let mut rng = thread_rng();

    for _ in 0..20 {
        // Setup
        let count = rng.gen::<u32>().to_string();
        let name = format!("name{}", rng.gen::<u16>());
        let mut arguments = vec!["--name", name.as_str(), "-c", count.as_str()];

        if rng.gen::<bool>() {
            arguments.extend(["--verbose", "--colours", "green"]);
        }

        if rng.gen::<bool>() {
            arguments.extend(["--tags", "abc", "--brush-size", "0.5", "canvas"]);
        }

        let specification = Painter::specification().unwrap();
        let values = specification.parse(&arguments).unwrap();

        // Execute
        let rendered = specification.render_arguments(&values);
        let tokens: Vec<&str> = rendered.iter().map(String::as_str).collect();
        let reparsed = specification.parse(&tokens).unwrap();

        // Verify
        assert_eq!(reparsed, values);
        assert_eq!(
            Painter::construct(reparsed).unwrap(),
            Painter::construct(values).unwrap()
        );
    }
}
