use argbind::derive::*;
use argbind::prelude::*;

#[derive(Debug, OptionContract)]
#[argbind(program = "copier")]
struct Options {
    #[argbind(option, short = 'd', description = "The destination directory.")]
    destination: String,
    #[argbind(option, short = 'x', pattern = r"\*\.[a-z]+", maximum = 4)]
    exclude: Vec<String>,
    #[argbind(present = "exclude")]
    is_exclude: bool,
    #[argbind(option, short = 'v')]
    verbose: bool,
    #[argbind(unparsed, description = "The files to copy.")]
    files: Vec<String>,
    // Not part of the command line.
    copied: usize,
}

fn main() {
    let mut options = match Options::parse_env() {
        Ok(options) => options,
        Err(error) => {
            // Every failure is reported, one per line.
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    for file in &options.files {
        let skipped = options.is_exclude
            && options
                .exclude
                .iter()
                .any(|pattern| file.ends_with(pattern.trim_start_matches('*')));

        if skipped {
            if options.verbose {
                println!("skip {file}");
            }
        } else {
            println!("copy {file} -> {}", options.destination);
            options.copied += 1;
        }
    }

    println!("Copied {} file(s).", options.copied);
}
