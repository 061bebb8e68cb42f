//! Whitespace tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Query strings are whitespace-delimited by contract, so this tokenizer is
/// used wherever the raw query terms are needed without further analysis.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for (position, word) in text.split_whitespace().enumerate() {
            let start = text[cursor..]
                .find(word)
                .map(|i| cursor + i)
                .unwrap_or(cursor);
            let end = start + word.len();
            cursor = end;
            tokens.push(Token::with_offsets(word, position, start, end));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
