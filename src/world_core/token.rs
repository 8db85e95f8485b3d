use std::io::{BufRead, ErrorKind};
use std::str::FromStr;

use crate::world_core::error::MapError;

/// Whitespace-delimited token input over any buffered reader.
///
/// Every read skips leading whitespace first. The first failed read sets a
/// sticky failure state; all later reads return [`MapError::StreamFailed`]
/// until [`TokenReader::clear_failure`] is called.
pub struct TokenReader<R> {
    inner: R,
    failed: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn clear_failure(&mut self) {
        self.failed = false;
    }

    /// Reads the next token. `expected` describes what the caller wanted, for
    /// the error message when the input is exhausted.
    pub fn next_token(&mut self, expected: &str) -> Result<String, MapError> {
        if self.failed {
            return Err(MapError::StreamFailed);
        }
        let result = match self.read_token() {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(MapError::UnexpectedEof {
                expected: expected.to_string(),
            }),
            Err(e) => Err(e),
        };
        self.track(result)
    }

    /// Confirms that the input continues with `literal`. Whitespace inside the
    /// literal matches any amount of whitespace in the input.
    pub fn expect_literal(&mut self, literal: &str) -> Result<(), MapError> {
        for word in literal.split_whitespace() {
            let expected = format!("'{word}'");
            let found = self.next_token(&expected)?;
            if found != word {
                return self.track(Err(MapError::UnexpectedToken { expected, found }));
            }
        }
        Ok(())
    }

    pub fn next_integer<T: FromStr>(&mut self, expected: &str) -> Result<T, MapError> {
        let token = self.next_token(expected)?;
        let result = token.parse::<T>().map_err(|_| MapError::InvalidInteger {
            token,
            expected: expected.to_string(),
        });
        self.track(result)
    }

    fn track<T>(&mut self, result: Result<T, MapError>) -> Result<T, MapError> {
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn read_token(&mut self) -> Result<Option<String>, MapError> {
        let mut token = Vec::new();
        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                if is_space(byte) {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            self.inner.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }
}

/// ASCII whitespace including vertical tab, which `u8::is_ascii_whitespace`
/// leaves out.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}
