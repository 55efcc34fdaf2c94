//! Token dump writers.
//!
//! The text dump streams each token as soon as it is scanned, so tokens before
//! a lexical error are already printed when the error is reported. The JSON
//! dump is all-or-nothing.

use std::io::{self, Write};

use clap::ValueEnum;
use pl0c_lex::{tokenize, Lexer, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Token dump format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One `<line>:\t<KIND>, <text>` line per token, then `done`
    #[default]
    Text,
    /// Pretty-printed JSON array of token records
    Json,
}

/// One token in the JSON dump.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    /// Line the token starts on.
    pub line: u32,
    /// Upper-case kind name, as in the text dump.
    pub kind: &'static str,
    /// Source text of the token.
    pub text: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            line: token.line(),
            kind: token.kind.name(),
            text: &token.text,
        }
    }
}

/// Writes the dump of `source` in the given format.
pub fn write_tokens<W: Write>(source: &str, format: Format, out: &mut W) -> Result<()> {
    debug!(?format, "dumping tokens");
    match format {
        Format::Text => write_text(source, out),
        Format::Json => write_json(source, out),
    }
}

fn write_text<W: Write>(source: &str, out: &mut W) -> Result<()> {
    let mut count = 0usize;
    for token in Lexer::new(source) {
        let token = token?;
        writeln!(out, "{}", token)?;
        count += 1;
    }
    writeln!(out, "done")?;
    out.flush()?;

    debug!(tokens = count, "token dump finished");
    Ok(())
}

fn write_json<W: Write>(source: &str, out: &mut W) -> Result<()> {
    let tokens = tokenize(source)?;
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();

    serde_json::to_writer_pretty(&mut *out, &records).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()?;

    debug!(tokens = records.len(), "token dump finished");
    Ok(())
}
