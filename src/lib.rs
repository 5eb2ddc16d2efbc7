// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing compact compound duration strings such as
//! `"1h33m7s"` and converting them to a typed duration at a caller-chosen
//! tick resolution. Supported unit suffixes:
//!
//! * `ns` — nanoseconds
//! * `us` — microseconds
//! * `ms` — milliseconds
//! * `s` — seconds
//! * `m` — minutes
//! * `h` — hours
//!
//! Each component may carry its own `+` or `-`; components are summed, with
//! lossy conversions to the target resolution truncating toward zero.
use std::error::Error;
use std::fmt::{self, Display};

mod duration;
mod resolution;
mod tokens;

pub use duration::Duration;
pub use resolution::{
    Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Resolution, Seconds,
};

#[derive(Debug, PartialEq)]
pub enum ParseDurationError {
    InvalidInput,
}

impl Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDurationError::InvalidInput => {
                write!(f, "Invalid input string: cannot be parsed as a duration")
            }
        }
    }
}

impl Error for ParseDurationError {}

/// Parses a compound duration string and returns a [`Duration`] at the
/// requested resolution.
///
/// # Arguments
///
/// * `input` - A string slice holding the duration.
///
/// # Examples
///
/// ```
/// use parse_duration::{parse, Nanoseconds, Seconds};
///
/// let d = parse::<Seconds>("1h33m7s").unwrap();
/// assert_eq!(d.ticks(), 5587);
///
/// let d = parse::<Nanoseconds>("-12ms").unwrap();
/// assert_eq!(d.ticks(), -12_000_000);
/// ```
///
/// # Returns
///
/// * `Ok(Duration)` - If the input string can be parsed as a duration
/// * `Err(ParseDurationError)` - If the input string cannot be parsed
///
/// # Errors
///
/// This function will return `Err(ParseDurationError::InvalidInput)` if the
/// input string cannot be parsed as a duration, or if a component does not
/// fit in the duration's tick representation.
pub fn parse<Res: Resolution>(input: &str) -> Result<Duration<Res>, ParseDurationError> {
    Duration::parse(input)
}

/// Parses a UTF-16 encoded compound duration string.
///
/// The grammar is identical to [`parse`]; the digits and unit letters are
/// plain ASCII in either encoding.
///
/// # Errors
///
/// This function will return `Err(ParseDurationError::InvalidInput)` if the
/// input is not well-formed UTF-16 or cannot be parsed as a duration.
pub fn parse_utf16<Res: Resolution>(input: &[u16]) -> Result<Duration<Res>, ParseDurationError> {
    Duration::parse_utf16(input)
}
