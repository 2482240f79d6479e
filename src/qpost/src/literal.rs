//! Restricted literal parser for `rabbit_message_body`.
//!
//! Accepts exactly the value grammar a configuration author may write:
//! quoted strings, numbers, `true`/`false`/`null` (plus the `True`/`False`/
//! `None` spellings found in older config files), mappings, and sequences
//! (brackets or parentheses, trailing commas allowed). Identifiers, calls,
//! and operators are rejected, so a config file can never smuggle
//! executable code into the publisher.

use serde_json::{Map, Number, Value};

use crate::error::PayloadError;

/// Parses a complete literal; trailing non-whitespace input is an error.
pub fn parse(input: &str) -> Result<Value, PayloadError> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let value = parser.value()?;
    parser.skip_whitespace();
    if let Some((offset, _)) = parser.peek() {
        return Err(PayloadError::Trailing { offset });
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn value(&mut self) -> Result<Value, PayloadError> {
        match self.peek() {
            None => Err(PayloadError::UnexpectedEnd),
            Some((_, '\'' | '"')) => self.string().map(Value::String),
            Some((_, '{')) => self.mapping(),
            Some((_, '[')) => self.sequence(']'),
            Some((_, '(')) => self.sequence(')'),
            Some((_, c)) if c == '-' || c == '+' || c.is_ascii_digit() => self.number(),
            Some((_, c)) if c.is_ascii_alphabetic() => self.word(),
            Some((offset, found)) => Err(PayloadError::Unexpected { found, offset }),
        }
    }

    fn string(&mut self) -> Result<String, PayloadError> {
        let Some((start, quote)) = self.bump() else {
            return Err(PayloadError::UnexpectedEnd);
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(PayloadError::UnterminatedString { offset: start }),
                Some((_, c)) if c == quote => return Ok(out),
                Some((offset, '\\')) => match self.bump() {
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, '0')) => out.push('\0'),
                    Some((_, c @ ('\\' | '\'' | '"'))) => out.push(c),
                    _ => return Err(PayloadError::InvalidEscape { offset }),
                },
                Some((_, c)) => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Result<Value, PayloadError> {
        let Some((start, _)) = self.peek() else {
            return Err(PayloadError::UnexpectedEnd);
        };
        let mut end = start;
        let mut float = false;
        while let Some((offset, c)) = self.peek() {
            match c {
                '0'..='9' | '+' | '-' => {}
                '.' | 'e' | 'E' => float = true,
                _ => break,
            }
            end = offset + c.len_utf8();
            self.bump();
        }
        let text = &self.input[start..end];
        let number = if float {
            text.parse::<f64>().ok().and_then(Number::from_f64)
        } else {
            text.parse::<i64>()
                .map(Number::from)
                .ok()
                .or_else(|| text.parse::<u64>().map(Number::from).ok())
        };
        number.map(Value::Number).ok_or_else(|| PayloadError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        })
    }

    fn word(&mut self) -> Result<Value, PayloadError> {
        let Some((start, _)) = self.peek() else {
            return Err(PayloadError::UnexpectedEnd);
        };
        let mut end = start;
        while let Some((offset, c)) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                end = offset + c.len_utf8();
                self.bump();
            } else {
                break;
            }
        }
        let word = &self.input[start..end];
        match word {
            "true" | "True" => Ok(Value::Bool(true)),
            "false" | "False" => Ok(Value::Bool(false)),
            "null" | "None" => Ok(Value::Null),
            _ => Err(PayloadError::UnknownWord {
                word: word.to_string(),
                offset: start,
            }),
        }
    }

    fn mapping(&mut self) -> Result<Value, PayloadError> {
        self.bump();
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(PayloadError::UnexpectedEnd),
                Some((_, '}')) => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                Some((offset, _)) => {
                    // Scalar keys are coerced to their textual form, the way
                    // a JSON encoder renders non-string mapping keys.
                    let key = match self.value()? {
                        Value::String(s) => s,
                        Value::Number(n) => n.to_string(),
                        Value::Bool(b) => b.to_string(),
                        Value::Null => "null".to_string(),
                        Value::Object(_) | Value::Array(_) => {
                            return Err(PayloadError::InvalidKey { offset })
                        }
                    };
                    self.skip_whitespace();
                    self.expect(':')?;
                    self.skip_whitespace();
                    let value = self.value()?;
                    map.insert(key, value);
                    self.skip_whitespace();
                    match self.peek() {
                        Some((_, ',')) => {
                            self.bump();
                        }
                        Some((_, '}')) => {}
                        Some((offset, found)) => {
                            return Err(PayloadError::Unexpected { found, offset })
                        }
                        None => return Err(PayloadError::UnexpectedEnd),
                    }
                }
            }
        }
    }

    fn sequence(&mut self, close: char) -> Result<Value, PayloadError> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(PayloadError::UnexpectedEnd),
                Some((_, c)) if c == close => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                Some(_) => {
                    items.push(self.value()?);
                    self.skip_whitespace();
                    match self.peek() {
                        Some((_, ',')) => {
                            self.bump();
                        }
                        Some((_, c)) if c == close => {}
                        Some((offset, found)) => {
                            return Err(PayloadError::Unexpected { found, offset })
                        }
                        None => return Err(PayloadError::UnexpectedEnd),
                    }
                }
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), PayloadError> {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.bump();
                Ok(())
            }
            Some((offset, found)) => Err(PayloadError::Unexpected { found, offset }),
            None => Err(PayloadError::UnexpectedEnd),
        }
    }
}
