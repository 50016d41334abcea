use argbind::derive::*;
use argbind::prelude::*;
use argbind::ParseError;

#[derive(Debug, Symbolic)]
enum Tone {
    #[argbind(symbol = "formal")]
    Formal,
    #[argbind(symbol = "casual")]
    Casual,
}

#[derive(Debug, OptionContract)]
#[argbind(program = "greeter")]
struct Options {
    #[allow(dead_code)]
    #[argbind(option, short = 'h', help, description = "Show this help message and exit.")]
    help: bool,
    #[argbind(option, short = 'n', description = "Who to greet.")]
    name: String,
    #[argbind(option, short = 't', default = "casual", description = "How to greet.")]
    tone: Tone,
    #[argbind(option, short = 'r', default = "1", pattern = "[1-9]")]
    repeat: u8,
    #[argbind(option)]
    loud: bool,
}

fn main() {
    let options = match Options::parse_env() {
        Ok(options) => options,
        Err(ParseError::Invalid(errors)) if errors.is_help_requested() => {
            println!("{errors}");
            return;
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let greeting = match options.tone {
        Tone::Formal => format!("Good day, {}.", options.name),
        Tone::Casual => format!("Hey {}!", options.name),
    };

    for _ in 0..options.repeat {
        if options.loud {
            println!("{}", greeting.to_uppercase());
        } else {
            println!("{greeting}");
        }
    }
}
