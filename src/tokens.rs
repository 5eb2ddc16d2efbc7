// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Token grammar for compound duration strings.
//!
//! An input is a possibly empty run of tokens with no separators in
//! between. Each token is an optionally signed decimal magnitude followed
//! by a unit suffix:
//!
//! ```txt
//! ([+-]? [0-9]* (ns|us|ms|m|s|h))*
//! ```
//!
//! The digit run may be empty, in which case the magnitude is zero; `"s"`
//! alone is the same as `"0s"`. The two-letter suffixes are matched before
//! the one-letter ones, so `m` only means minutes when the next character
//! is not `s`.

use winnow::{
    ascii::digit0,
    combinator::{alt, opt, repeat},
    token::one_of,
    ModalResult, Parser,
};

/// A unit suffix in its native resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Unit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl Unit {
    /// Seconds per unit as a `(numerator, denominator)` ratio.
    pub(crate) const fn ratio(self) -> (i128, i128) {
        match self {
            Unit::Nanoseconds => (1, 1_000_000_000),
            Unit::Microseconds => (1, 1_000_000),
            Unit::Milliseconds => (1, 1_000),
            Unit::Seconds => (1, 1),
            Unit::Minutes => (60, 1),
            Unit::Hours => (3600, 1),
        }
    }
}

/// One `(sign?, digits*, unit)` component of the input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) negative: bool,
    pub(crate) digits: &'a str,
    pub(crate) unit: Unit,
}

fn sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|c| c == Some('-'))
        .parse_next(input)
}

fn unit(input: &mut &str) -> ModalResult<Unit> {
    alt((
        "ns".value(Unit::Nanoseconds),
        "us".value(Unit::Microseconds),
        "ms".value(Unit::Milliseconds),
        "m".value(Unit::Minutes),
        "s".value(Unit::Seconds),
        "h".value(Unit::Hours),
    ))
    .parse_next(input)
}

fn token<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    (sign, digit0, unit)
        .map(|(negative, digits, unit)| Token {
            negative,
            digits,
            unit,
        })
        .parse_next(input)
}

/// Parse as many tokens as the input holds.
///
/// Never fails; the caller decides whether leftover input is an error.
pub(crate) fn list<'a>(input: &mut &'a str) -> ModalResult<Vec<Token<'a>>> {
    repeat(0.., token).parse_next(input)
}
