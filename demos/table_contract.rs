use argbind::prelude::*;
use argbind::{
    Accessor, BoundValues, Contract, ContractParser, ExtractError, MalformedSpecification, Marker,
    OptionMarker, Specification, SpecificationBuilder, SpecificationCache, UnparsedMarker,
};

// A hand-written contract, equivalent to what `#[derive(OptionContract)]` generates.
struct Table {
    rows: u32,
    columns: u32,
    separator: char,
    headers: Vec<String>,
}

impl OptionContract for Table {
    fn contract() -> Contract {
        Contract::new("table_contract")
            .accessor(
                Accessor::new("rows", u32::declared_type())
                    .marker(Marker::Option(OptionMarker::default().short('r'))),
            )
            .accessor(
                Accessor::new("columns", u32::declared_type()).marker(Marker::Option(
                    OptionMarker::default().short('c').default_value("3"),
                )),
            )
            .accessor(
                Accessor::new("separator", char::declared_type()).marker(Marker::Option(
                    OptionMarker::default().short('s').default_value("|"),
                )),
            )
            .accessor(
                Accessor::new("headers", Vec::<String>::declared_type())
                    .marker(Marker::Unparsed(UnparsedMarker::default().description("The column headers."))),
            )
    }

    fn specification() -> Result<&'static Specification, MalformedSpecification> {
        static CACHE: SpecificationCache = SpecificationCache::new();
        CACHE.get_or_build(Self::contract)
    }

    fn construct(mut values: BoundValues) -> Result<Self, ExtractError> {
        Ok(Self {
            rows: values.take("rows")?,
            columns: values.take("columns")?,
            separator: values.take("separator")?,
            headers: values.take("headers")?,
        })
    }
}

fn main() {
    let parser: ContractParser<Table> =
        match ContractParser::with_builder(SpecificationBuilder::new().strict(true)) {
            Ok(parser) => parser,
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(2);
            }
        };
    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let tokens: Vec<&str> = arguments.iter().map(String::as_str).collect();

    let table = match parser.parse_tokens(&tokens) {
        Ok(table) => table,
        Err(errors) => {
            eprintln!("{errors}");
            eprintln!("{}", parser.specification());
            std::process::exit(1);
        }
    };

    let separator = table.separator.to_string();
    let header: Vec<String> = (0..table.columns as usize)
        .map(|c| table.headers.get(c).cloned().unwrap_or_else(|| format!("c{c}")))
        .collect();
    println!("{}", header.join(&separator));

    for r in 0..table.rows {
        let row: Vec<String> = (0..table.columns).map(|c| format!("{r}.{c}")).collect();
        println!("{}", row.join(&separator));
    }
}
