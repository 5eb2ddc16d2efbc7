// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Tick resolutions and the arithmetic for moving ticks between them.
//!
//! A resolution is picked by the caller as a type parameter, so a
//! [`Duration`](crate::Duration) at seconds resolution and one at
//! nanoseconds resolution are distinct types and cannot be mixed up at
//! runtime.

/// The span of one tick, as a ratio of seconds.
///
/// `NUMER / DENOM` is the number of seconds one tick represents. Both
/// constants must be positive. The six standard resolutions cover the unit
/// suffixes the parser understands; implementing this trait for another tag
/// type (e.g. half-seconds as `1/2`) makes it usable as a parse target as
/// well.
pub trait Resolution {
    const NUMER: i128;
    const DENOM: i128;
}

macro_rules! resolution {
    ($(#[$attr:meta])* $name:ident, $numer:literal, $denom:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name;

        impl Resolution for $name {
            const NUMER: i128 = $numer;
            const DENOM: i128 = $denom;
        }
    };
}

resolution!(
    /// One tick is one nanosecond.
    Nanoseconds, 1, 1_000_000_000
);
resolution!(
    /// One tick is one microsecond.
    Microseconds, 1, 1_000_000
);
resolution!(
    /// One tick is one millisecond.
    Milliseconds, 1, 1_000
);
resolution!(
    /// One tick is one second.
    Seconds, 1, 1
);
resolution!(
    /// One tick is one minute.
    Minutes, 60, 1
);
resolution!(
    /// One tick is one hour.
    Hours, 3600, 1
);

/// Convert a tick count between two resolutions, truncating toward zero.
///
/// Both ratios must be positive. Returns `None` when an intermediate
/// product overflows `i128`.
pub(crate) fn convert(
    ticks: i128,
    from_numer: i128,
    from_denom: i128,
    to_numer: i128,
    to_denom: i128,
) -> Option<i128> {
    let numer = from_numer.checked_mul(to_denom)?;
    let denom = from_denom.checked_mul(to_numer)?;
    let g = gcd(numer, denom);
    // Rust integer division truncates toward zero, which is exactly the
    // rounding this crate promises for lossy conversions.
    ticks.checked_mul(numer / g)?.checked_div(denom / g)
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
