use crate::InputError;
use std::str::FromStr;
use std::str::SplitWhitespace;

/// Whitespace token reader. Line structure carries no meaning.
pub struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    /// the next token, parsed; `what` names the value in errors
    pub fn next<T>(&mut self, what: &'static str) -> Result<T, InputError>
    where
        T: FromStr,
    {
        let token = self.0.next().ok_or(InputError::Missing { what })?;
        token.parse::<T>().map_err(|_| InputError::Malformed {
            what,
            token: token.to_string(),
        })
    }
    pub fn remaining(self) -> usize {
        self.0.count()
    }
}

impl<'a> From<&'a str> for Tokens<'a> {
    fn from(input: &'a str) -> Self {
        Self(input.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_across_lines() {
        let mut tokens = Tokens::from("2\n 3 4\n\t5");
        assert_eq!(tokens.next::<usize>("a"), Ok(2));
        assert_eq!(tokens.next::<usize>("b"), Ok(3));
        assert_eq!(tokens.next::<usize>("c"), Ok(4));
        assert_eq!(tokens.remaining(), 1);
    }

    #[test]
    fn reports_missing_and_malformed() {
        let mut tokens = Tokens::from("x");
        assert_eq!(
            tokens.next::<usize>("game count"),
            Err(InputError::Malformed {
                what: "game count",
                token: "x".to_string(),
            })
        );
        assert_eq!(
            tokens.next::<usize>("move count"),
            Err(InputError::Missing { what: "move count" })
        );
    }
}
