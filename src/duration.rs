// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The typed duration value and the parsing core behind it.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use num_traits::{NumCast, PrimInt};

use crate::resolution::{self, Resolution};
use crate::tokens;
use crate::ParseDurationError;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// A signed tick count at a fixed resolution.
///
/// `Res` is the [`Resolution`] tag giving the span of one tick and `Rep` is
/// the primitive integer holding the count, `i64` by default. Durations at
/// different resolutions are different types; move between them explicitly
/// with [`cast`](Duration::cast).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration<Res, Rep = i64> {
    ticks: Rep,
    resolution: PhantomData<Res>,
}

impl<Res: Resolution, Rep: PrimInt> Duration<Res, Rep> {
    /// A duration of `ticks` ticks.
    pub const fn new(ticks: Rep) -> Self {
        Self {
            ticks,
            resolution: PhantomData,
        }
    }

    /// A zero-valued duration.
    pub fn zero() -> Self {
        Self::new(Rep::zero())
    }

    /// The raw tick count.
    pub fn ticks(&self) -> Rep {
        self.ticks
    }

    pub fn is_zero(&self) -> bool {
        self.ticks == Rep::zero()
    }

    /// Parses a compound duration string into a duration at this
    /// resolution.
    ///
    /// The grammar is a run of `(sign?, digits*, unit)` tokens with unit
    /// suffixes `ns`, `us`, `ms`, `m`, `s` and `h`; see [`crate::parse`]
    /// for the full contract. An empty input parses to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_duration::{Duration, Seconds};
    ///
    /// let d = Duration::<Seconds>::parse("1h33m7s").unwrap();
    /// assert_eq!(d.ticks(), 5587);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err(ParseDurationError::InvalidInput)` when the input
    /// violates the grammar or a value does not fit in `Rep`.
    pub fn parse<S: AsRef<str>>(input: S) -> Result<Self, ParseDurationError> {
        let mut rest = input.as_ref();
        let parsed = tokens::list(&mut rest).map_err(|_| ParseDurationError::InvalidInput)?;
        if !rest.is_empty() {
            return Err(ParseDurationError::InvalidInput);
        }

        let mut total = Rep::zero();
        for token in parsed {
            let magnitude: i128 = if token.digits.is_empty() {
                0
            } else {
                token
                    .digits
                    .parse()
                    .map_err(|_| ParseDurationError::InvalidInput)?
            };
            let magnitude = if token.negative { -magnitude } else { magnitude };
            let (numer, denom) = token.unit.ratio();
            let ticks = resolution::convert(magnitude, numer, denom, Res::NUMER, Res::DENOM)
                .and_then(<Rep as NumCast>::from)
                .ok_or(ParseDurationError::InvalidInput)?;
            total = total
                .checked_add(&ticks)
                .ok_or(ParseDurationError::InvalidInput)?;
        }
        Ok(Self::new(total))
    }

    /// Parses a UTF-16 encoded compound duration string.
    ///
    /// The grammar is identical to [`parse`](Duration::parse); the digits
    /// and unit letters are plain ASCII in either encoding. An unpaired
    /// surrogate is malformed input.
    pub fn parse_utf16(input: &[u16]) -> Result<Self, ParseDurationError> {
        let text: String = char::decode_utf16(input.iter().copied())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseDurationError::InvalidInput)?;
        Self::parse(text)
    }

    /// Parses from any character sequence.
    ///
    /// Adapter for callers that own characters rather than a string slice.
    pub fn from_chars<I>(chars: I) -> Result<Self, ParseDurationError>
    where
        I: IntoIterator<Item = char>,
    {
        let text: String = chars.into_iter().collect();
        Self::parse(text)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.ticks.checked_add(&rhs.ticks).map(Self::new)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.ticks.checked_sub(&rhs.ticks).map(Self::new)
    }

    pub fn checked_neg(self) -> Option<Self> {
        Rep::zero().checked_sub(&self.ticks).map(Self::new)
    }

    /// Re-expresses this duration at another resolution, truncating toward
    /// zero.
    ///
    /// Returns `None` when the converted tick count does not fit in `Rep`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_duration::{Duration, Minutes, Seconds};
    ///
    /// let d = Duration::<Seconds>::new(90);
    /// assert_eq!(d.cast::<Minutes>(), Some(Duration::<Minutes>::new(1)));
    /// ```
    pub fn cast<Res2: Resolution>(self) -> Option<Duration<Res2, Rep>> {
        let ticks = self.ticks.to_i128()?;
        let ticks = resolution::convert(ticks, Res::NUMER, Res::DENOM, Res2::NUMER, Res2::DENOM)?;
        <Rep as NumCast>::from(ticks).map(Duration::new)
    }

    /// The whole number of nanoseconds this duration spans, truncating
    /// toward zero for sub-nanosecond resolutions.
    fn total_nanos(&self) -> Option<i128> {
        self.ticks
            .to_i128()?
            .checked_mul(Res::NUMER)?
            .checked_mul(NANOS_PER_SEC)
            .map(|n| n / Res::DENOM)
    }

    /// Converts to a [`std::time::Duration`].
    ///
    /// Returns `None` for negative durations or values out of range.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        let nanos = u128::try_from(self.total_nanos()?).ok()?;
        let secs = u64::try_from(nanos / NANOS_PER_SEC as u128).ok()?;
        Some(std::time::Duration::new(
            secs,
            (nanos % NANOS_PER_SEC as u128) as u32,
        ))
    }

    /// Converts to a [`chrono::TimeDelta`].
    ///
    /// Returns `None` when the value is out of `TimeDelta`'s range.
    pub fn to_chrono(&self) -> Option<chrono::TimeDelta> {
        let nanos = self.total_nanos()?;
        let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SEC)).ok()?;
        let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
        chrono::TimeDelta::new(secs, subsec)
    }
}

impl<Res: Resolution, Rep: PrimInt> FromStr for Duration<Res, Rep> {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Res: Resolution, Rep: PrimInt> Add for Duration<Res, Rep> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).expect("overflow when adding durations")
    }
}

impl<Res: Resolution, Rep: PrimInt> Sub for Duration<Res, Rep> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs)
            .expect("overflow when subtracting durations")
    }
}

impl<Res: Resolution, Rep: PrimInt> Neg for Duration<Res, Rep> {
    type Output = Self;

    fn neg(self) -> Self {
        self.checked_neg().expect("overflow when negating durations")
    }
}

/// Renders the duration in the same compact form the parser accepts,
/// largest unit first, omitting zero components.
///
/// Every component of a negative duration carries its own `-`, so parsing
/// the rendered string back at the same resolution reproduces the tick
/// count. Only defined for resolutions whose tick is a whole number of
/// nanoseconds.
///
/// # Examples
///
/// ```
/// use parse_duration::{Duration, Seconds};
///
/// assert_eq!(Duration::<Seconds>::new(5587).to_string(), "1h33m7s");
/// assert_eq!(Duration::<Seconds>::new(-90).to_string(), "-1m-30s");
/// assert_eq!(Duration::<Seconds>::zero().to_string(), "0s");
/// ```
impl<Res: Resolution, Rep: PrimInt> fmt::Display for Duration<Res, Rep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ticks = self.ticks.to_i128().ok_or(fmt::Error)?;
        if (Res::NUMER * NANOS_PER_SEC) % Res::DENOM != 0 {
            return Err(fmt::Error);
        }
        let nanos_per_tick = (Res::NUMER * NANOS_PER_SEC / Res::DENOM) as u128;
        let mut rest = ticks
            .unsigned_abs()
            .checked_mul(nanos_per_tick)
            .ok_or(fmt::Error)?;
        if rest == 0 {
            return write!(f, "0s");
        }

        let sign = if ticks < 0 { "-" } else { "" };
        for (nanos, suffix) in [
            (3_600_000_000_000, "h"),
            (60_000_000_000, "m"),
            (1_000_000_000, "s"),
            (1_000_000, "ms"),
            (1_000, "us"),
            (1, "ns"),
        ] {
            let count = rest / nanos;
            if count != 0 {
                write!(f, "{sign}{count}{suffix}")?;
                rest %= nanos;
            }
        }
        Ok(())
    }
}
