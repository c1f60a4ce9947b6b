use dcbor::prelude::*;

use crate::Error;

/// A recursive-descent parser for dCBOR diagnostic notation (the grammar
/// `dcbor::CBOR::diagnostic` emits), inverted into a reader. Input is
/// lenient — whitespace and newlines between tokens are ignored, the way a
/// hand-edited diagnostic fixture would be written — but output is always
/// canonical dCBOR, since every value is built through the same
/// constructors `dcbor` uses for encoding.
pub struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(), pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> crate::Result<()> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(Error::Expected(expected, c.to_string())),
            None => Err(Error::UnexpectedEnd),
        }
    }

    pub fn parse(&mut self) -> crate::Result<CBOR> {
        self.skip_ws();
        let value = self.parse_value()?;
        self.skip_ws();
        if self.pos != self.chars.len() {
            return Err(Error::TrailingInput(self.chars[self.pos..].iter().collect()));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> crate::Result<CBOR> {
        self.skip_ws();
        match self.peek() {
            Some('"') => self.parse_text(),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_map(),
            Some('h') if self.chars.get(self.pos + 1) == Some(&'\'') => self.parse_bytes(),
            Some(c) if c.is_ascii_digit() || c == '-' => self.parse_number_or_tag(),
            Some(c) if c.is_alphabetic() => self.parse_keyword(),
            Some(c) => Err(Error::UnexpectedChar(c, self.pos)),
            None => Err(Error::UnexpectedEnd),
        }
    }

    fn parse_keyword(&mut self) -> crate::Result<CBOR> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric()) {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "true" => Ok(CBOR::r#true()),
            "false" => Ok(CBOR::r#false()),
            "null" => Ok(CBOR::null()),
            "NaN" => Ok(f64::NAN.into()),
            "Infinity" => Ok(f64::INFINITY.into()),
            _ => Err(Error::UnexpectedChar(word.chars().next().unwrap_or(' '), start)),
        }
    }

    fn parse_text(&mut self) -> crate::Result<CBOR> {
        self.expect('"')?;
        let mut s = String::new();
        loop {
            match self.bump() {
                None => return Err(Error::UnterminatedString),
                Some('"') => break,
                Some('\\') => {
                    let escaped = self.bump().ok_or(Error::UnterminatedString)?;
                    s.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '"' => '"',
                        '\\' => '\\',
                        '/' => '/',
                        other => other,
                    });
                }
                Some(c) => s.push(c),
            }
        }
        Ok(s.into())
    }

    fn parse_bytes(&mut self) -> crate::Result<CBOR> {
        self.expect('h')?;
        self.expect('\'')?;
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c != '\'') {
            self.pos += 1;
        }
        let hex_str: String = self.chars[start..self.pos].iter().collect();
        self.expect('\'')?;
        let data = hex::decode(&hex_str).map_err(|e| Error::MalformedByteString(e.to_string()))?;
        Ok(CBOR::from(data))
    }

    fn parse_array(&mut self) -> crate::Result<CBOR> {
        self.expect('[')?;
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(items.into());
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(']') => break,
                Some(c) => return Err(Error::Expected(']', c.to_string())),
                None => return Err(Error::UnexpectedEnd),
            }
        }
        Ok(items.into())
    }

    fn parse_map(&mut self) -> crate::Result<CBOR> {
        self.expect('{')?;
        let mut map = Map::new();
        self.skip_ws();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(map.into());
        }
        loop {
            let key = self.parse_value()?;
            self.skip_ws();
            self.expect(':')?;
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_ws();
            match self.bump() {
                Some(',') => {
                    self.skip_ws();
                    continue;
                }
                Some('}') => break,
                Some(c) => return Err(Error::Expected('}', c.to_string())),
                None => return Err(Error::UnexpectedEnd),
            }
        }
        Ok(map.into())
    }

    fn parse_number_or_tag(&mut self) -> crate::Result<CBOR> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
            if self.peek() == Some('I') {
                let word_start = self.pos;
                while matches!(self.peek(), Some(c) if c.is_alphabetic()) {
                    self.pos += 1;
                }
                let word: String = self.chars[word_start..self.pos].iter().collect();
                if word == "Infinity" {
                    return Ok(f64::NEG_INFINITY.into());
                }
                return Err(Error::MalformedNumber(word));
            }
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        let mut is_float = false;
        if self.peek() == Some('.') {
            is_float = true;
            self.pos += 1;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.pos += 1;
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let literal: String = self.chars[start..self.pos].iter().collect();

        self.skip_ws();
        if !is_float && self.peek() == Some('(') {
            // Tagged value: N(...)
            let tag_value: u64 = literal
                .parse()
                .map_err(|_| Error::MalformedNumber(literal.clone()))?;
            self.pos += 1;
            let inner = self.parse_value()?;
            self.skip_ws();
            self.expect(')')?;
            return Ok(CBOR::tagged_value(tag_value, inner));
        }

        if is_float {
            let value: f64 = literal
                .parse()
                .map_err(|_| Error::MalformedNumber(literal.clone()))?;
            Ok(value.into())
        } else if literal.starts_with('-') {
            let value: i128 = literal
                .parse()
                .map_err(|_| Error::MalformedNumber(literal.clone()))?;
            Ok(CBOR::from(value as i64))
        } else {
            let value: u64 = literal
                .parse()
                .map_err(|_| Error::MalformedNumber(literal.clone()))?;
            Ok(CBOR::from(value))
        }
    }
}
