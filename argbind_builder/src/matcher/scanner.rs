use crate::matcher::model::Token;

const END_OF_OPTIONS: &str = "--";

/// Splits the raw argument list into lexical tokens, lazily.
///
/// Once the `--` separator is seen every subsequent argument is a [`Token::Value`].
#[derive(Debug)]
pub(crate) struct TokenScanner<'t, I>
where
    I: Iterator<Item = &'t str>,
{
    arguments: I,
    terminated: bool,
}

impl<'t, I> TokenScanner<'t, I>
where
    I: Iterator<Item = &'t str>,
{
    pub(crate) fn new(arguments: I) -> Self {
        Self {
            arguments,
            terminated: false,
        }
    }
}

impl<'t, I> Iterator for TokenScanner<'t, I>
where
    I: Iterator<Item = &'t str>,
{
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let argument = self.arguments.next()?;

        if self.terminated {
            return Some(Token::Value(argument));
        }

        if argument == END_OF_OPTIONS {
            self.terminated = true;
            return Some(Token::EndOfOptions);
        }

        if let Some(long) = argument.strip_prefix("--") {
            let (name, attached) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };

            if name.is_empty() {
                return Some(Token::Value(argument));
            }

            return Some(Token::Long { name, attached });
        }

        if let Some(short) = argument.strip_prefix('-') {
            let mut characters = short.chars();

            if let Some(name) = characters.next() {
                let remainder = characters.as_str();
                let attached = if remainder.is_empty() {
                    None
                } else {
                    Some(remainder)
                };
                return Some(Token::Short { name, attached });
            }
        }

        Some(Token::Value(argument))
    }
}
