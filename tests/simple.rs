// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
use anyhow::Result;
use parse_duration::{
    parse, parse_utf16, Duration, Hours, Microseconds, Milliseconds, Minutes, Nanoseconds,
    ParseDurationError, Seconds,
};

#[test]
fn test_invalid_input() {
    let result = parse::<Seconds>("foobar");
    match result {
        Err(ParseDurationError::InvalidInput) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let result = parse::<Seconds>("invalid 1");
    match result {
        Err(ParseDurationError::InvalidInput) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_duration_parsing() -> Result<()> {
    assert_eq!(parse::<Seconds>("1h33m7s")?.ticks(), 5587);
    assert_eq!(parse::<Seconds>("90m")?.ticks(), 5400);
    assert_eq!(parse::<Seconds>("2h-30m")?.ticks(), 5400);
    assert_eq!(parse::<Milliseconds>("1s500ms")?.ticks(), 1500);
    assert_eq!(parse::<Microseconds>("500ns")?.ticks(), 0);
    assert_eq!(parse::<Nanoseconds>("500ns")?.ticks(), 500);
    assert_eq!(parse::<Hours>("119m")?.ticks(), 1);
    assert_eq!(parse::<Minutes>("-12ms")?.ticks(), 0);
    Ok(())
}

#[test]
fn test_each_resolution() -> Result<()> {
    assert_eq!(parse::<Nanoseconds>("1ns")?.ticks(), 1);
    assert_eq!(parse::<Microseconds>("1us")?.ticks(), 1);
    assert_eq!(parse::<Milliseconds>("1ms")?.ticks(), 1);
    assert_eq!(parse::<Seconds>("1s")?.ticks(), 1);
    assert_eq!(parse::<Minutes>("1m")?.ticks(), 1);
    assert_eq!(parse::<Hours>("1h")?.ticks(), 1);
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    assert!(parse::<Seconds>("")?.is_zero());
    assert!(parse_utf16::<Seconds>(&[])?.is_zero());
    Ok(())
}

#[test]
fn test_wide_and_narrow_agree() -> Result<()> {
    for s in ["1h33m7s", "-12ms", "500ns", "+1m-20s", "s"] {
        let wide: Vec<u16> = s.encode_utf16().collect();
        assert_eq!(
            parse_utf16::<Nanoseconds>(&wide)?,
            parse::<Nanoseconds>(s)?,
            "{s:?}"
        );
    }
    Ok(())
}

#[test]
fn test_interop() -> Result<()> {
    let d = parse::<Milliseconds>("1s500ms")?;
    assert_eq!(d.to_std(), Some(std::time::Duration::from_millis(1500)));
    assert_eq!(d.to_chrono(), Some(chrono::TimeDelta::milliseconds(1500)));

    let d = parse::<Milliseconds>("-1s500ms")?;
    assert_eq!(d.to_std(), None);
    assert_eq!(d.to_chrono(), Some(chrono::TimeDelta::milliseconds(-500)));
    Ok(())
}

#[test]
fn test_cast_between_resolutions() -> Result<()> {
    let d = parse::<Nanoseconds>("1h33m7s")?;
    assert_eq!(d.cast::<Seconds>(), Some(Duration::<Seconds>::new(5587)));
    assert_eq!(d.cast::<Hours>(), Some(Duration::<Hours>::new(1)));
    Ok(())
}
