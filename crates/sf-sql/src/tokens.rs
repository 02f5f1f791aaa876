//! Token cursor for the recursive-descent DDL parser
//!
//! Statements are tokenized with sqlparser's tokenizer (quoted identifiers,
//! string literals and numbers are handled there); this cursor only walks the
//! resulting token stream with whitespace removed.

use crate::error::{SqlError, SqlResult};
use sf_core::TableName;
use sqlparser::dialect::GenericDialect;
use sqlparser::tokenizer::{Token, Tokenizer};

/// Cursor over the significant tokens of one statement
#[derive(Debug, Clone)]
pub(crate) struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// Tokenize a single statement.
    ///
    /// The generic dialect accepts both `"double"` and `` `backtick` ``
    /// quoted identifiers.
    pub fn tokenize(sql: &str) -> SqlResult<Self> {
        let dialect = GenericDialect {};
        let tokens = Tokenizer::new(&dialect, sql)
            .tokenize()
            .map_err(|e| SqlError::Tokenize(e.to_string()))?;
        Ok(Self::from_tokens(tokens))
    }

    /// Build a cursor over already tokenized input, dropping whitespace.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|t| !matches!(t, Token::Whitespace(_) | Token::EOF))
            .collect();
        Self { tokens, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// True if the next token is the given unquoted keyword.
    pub fn peek_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| is_keyword(t, keyword))
    }

    /// True if the next token is any of the given unquoted keywords.
    pub fn peek_any_keyword(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.peek_keyword(kw))
    }

    /// Consume the keyword if it is next.
    pub fn parse_keyword(&mut self, keyword: &str) -> bool {
        if self.peek_keyword(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the whole keyword sequence, or nothing at all.
    pub fn parse_keywords(&mut self, keywords: &[&str]) -> bool {
        let matches = keywords.iter().enumerate().all(|(i, kw)| {
            self.tokens
                .get(self.pos + i)
                .is_some_and(|t| is_keyword(t, kw))
        });
        if matches {
            self.pos += keywords.len();
        }
        matches
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> SqlResult<()> {
        if self.parse_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword))
        }
    }

    /// Consume the token if it is next.
    pub fn consume(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_token(&mut self, expected: &Token) -> SqlResult<()> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{expected}'")))
        }
    }

    /// Parse a quoted or unquoted identifier, returning it without quotes.
    pub fn parse_identifier(&mut self) -> SqlResult<String> {
        match self.peek() {
            Some(Token::Word(word)) => {
                let value = word.value.clone();
                self.pos += 1;
                Ok(value)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Parse a possibly qualified name (`schema.table`) into its parts.
    pub fn parse_object_name(&mut self) -> SqlResult<Vec<String>> {
        let mut parts = vec![self.parse_identifier()?];
        while self.consume(&Token::Period) {
            parts.push(self.parse_identifier()?);
        }
        Ok(parts)
    }

    /// Parse a table name; an empty quoted identifier is rejected.
    pub fn parse_table_name(&mut self) -> SqlResult<TableName> {
        let parts = self.parse_object_name()?;
        TableName::from_parts(&parts).ok_or_else(|| SqlError::UnexpectedToken {
            expected: "table name".to_string(),
            found: "\"\"".to_string(),
        })
    }

    /// Parse `( ident [, ident]* )`.
    pub fn parse_identifier_list(&mut self) -> SqlResult<Vec<String>> {
        self.expect_token(&Token::LParen)?;
        let mut idents = vec![self.parse_identifier()?];
        while self.consume(&Token::Comma) {
            idents.push(self.parse_identifier()?);
        }
        self.expect_token(&Token::RParen)?;
        Ok(idents)
    }

    /// Skip a balanced `( ... )` group if one is next.
    pub fn skip_parenthesized(&mut self) -> SqlResult<()> {
        if self.peek() != Some(&Token::LParen) {
            return Ok(());
        }
        self.take_parenthesized().map(|_| ())
    }

    /// Consume a balanced `( ... )` group and split its contents on
    /// top-level commas.
    ///
    /// `DECIMAL(10,2)` inside an element stays in one piece. Empty elements
    /// (from trailing commas) are dropped.
    pub fn take_parenthesized(&mut self) -> SqlResult<Vec<Vec<Token>>> {
        self.expect_token(&Token::LParen)?;

        let mut elements = Vec::new();
        let mut current = Vec::new();
        let mut depth = 0usize;

        loop {
            let token = self.advance().ok_or(SqlError::UnbalancedParens)?;
            match token {
                Token::LParen => {
                    depth += 1;
                    current.push(token);
                }
                Token::RParen if depth == 0 => break,
                Token::RParen => {
                    depth -= 1;
                    current.push(token);
                }
                Token::Comma if depth == 0 => {
                    if !current.is_empty() {
                        elements.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(token),
            }
        }
        if !current.is_empty() {
            elements.push(current);
        }

        Ok(elements)
    }

    /// Collect the remaining tokens split on top-level commas.
    pub fn take_rest_split_on_commas(&mut self) -> Vec<Vec<Token>> {
        let mut parts = Vec::new();
        let mut current = Vec::new();
        let mut depth = 0usize;

        while let Some(token) = self.advance() {
            match token {
                Token::LParen => {
                    depth += 1;
                    current.push(token);
                }
                Token::RParen => {
                    depth = depth.saturating_sub(1);
                    current.push(token);
                }
                Token::Comma if depth == 0 => {
                    if !current.is_empty() {
                        parts.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(token),
            }
        }
        if !current.is_empty() {
            parts.push(current);
        }

        parts
    }

    /// Error describing what was expected at the current position.
    pub fn unexpected(&self, expected: &str) -> SqlError {
        match self.peek() {
            Some(found) => SqlError::UnexpectedToken {
                expected: expected.to_string(),
                found: found.to_string(),
            },
            None => SqlError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }
}

/// True for an unquoted word equal (ignoring case) to `keyword`.
///
/// Quoted identifiers never count as keywords, so `"order"` is a name.
pub(crate) fn is_keyword(token: &Token, keyword: &str) -> bool {
    matches!(token, Token::Word(w) if w.quote_style.is_none() && w.value.eq_ignore_ascii_case(keyword))
}

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tests;
