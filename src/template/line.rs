//! Template line classification
//!
//! Tokens are separated by single spaces. A line whose first token is the
//! marker is a directive and must carry exactly one more token, the name.

use crate::error::{Error, Result};
use nom::{
    Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{all_consuming, eof, peek},
    sequence::{preceded, terminated},
};

/// A classified template line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Copied to the output followed by a newline
    Literal(&'a str),
    /// Replaced by the resolved content of the named source
    Directive(&'a str),
}

/// Classify a single template line (without its terminator)
///
/// `line_number` is 1-based and only used for error reporting. A directive
/// with an empty name (`LITTLE_TO_ELM ` with a trailing space) is malformed
/// even though it splits into two tokens.
pub fn classify_line<'a>(line_number: usize, line: &'a str, marker: &str) -> Result<Line<'a>> {
    let Ok((tail, _)) = parse_marker(line, marker) else {
        return Ok(Line::Literal(line));
    };

    match parse_name(tail) {
        Ok((_, name)) => Ok(Line::Directive(name)),
        Err(_) => Err(Error::MalformedDirective {
            line_number,
            line: line.to_string(),
        }),
    }
}

// Nom parsers for the directive form

/// The marker as a whole first token
fn parse_marker<'a>(input: &'a str, marker: &str) -> nom::IResult<&'a str, &'a str> {
    terminated(tag(marker), peek(alt((tag(" "), eof)))).parse(input)
}

/// Exactly one non-empty token after the marker
fn parse_name(input: &str) -> nom::IResult<&str, &str> {
    all_consuming(preceded(char(' '), take_while1(|c: char| c != ' '))).parse(input)
}
