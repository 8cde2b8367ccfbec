// Host-side tests for size-string resolution.

use parallax_core::{resolve_size_px, SizeParseError, SizeUnit, SizeValue, Viewport};

fn vp() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn resolves_viewport_units() {
    assert_eq!(resolve_size_px("100dvw", vp()), Some(800.0));
    assert_eq!(resolve_size_px("50dvh", vp()), Some(300.0));
    assert_eq!(resolve_size_px("50dwh", vp()), Some(300.0));
    assert_eq!(resolve_size_px("25vw", vp()), Some(200.0));
    assert_eq!(resolve_size_px("10vh", vp()), Some(60.0));
}

#[test]
fn percent_uses_smaller_side() {
    assert_eq!(resolve_size_px("50%", vp()), Some(300.0));
    assert_eq!(
        resolve_size_px("50%", Viewport::new(400.0, 900.0)),
        Some(200.0)
    );
}

#[test]
fn pixels_and_bare_numbers() {
    assert_eq!(resolve_size_px("12px", vp()), Some(12.0));
    assert_eq!(resolve_size_px("12", vp()), Some(12.0));
    assert_eq!(resolve_size_px(".5px", vp()), Some(0.5));
    assert_eq!(resolve_size_px(" 8px ", vp()), Some(8.0));
    assert_eq!(resolve_size_px("-5vh", vp()), Some(-30.0));
}

#[test]
fn malformed_strings_resolve_to_none() {
    for bad in ["notanumber", "", "px", "12em", "1.px", "1e3px", "--1px", "12 px"] {
        assert_eq!(resolve_size_px(bad, vp()), None, "{:?}", bad);
    }
}

#[test]
fn parse_errors_are_typed() {
    assert_eq!("".parse::<SizeValue>(), Err(SizeParseError::Empty));
    assert_eq!(
        "abc%".parse::<SizeValue>(),
        Err(SizeParseError::Malformed("abc".to_string()))
    );
    let huge = format!("1{}px", "0".repeat(400));
    assert!(matches!(
        huge.parse::<SizeValue>(),
        Err(SizeParseError::NotFinite(_))
    ));
}

#[test]
fn longest_suffix_wins() {
    let v: SizeValue = "30dvh".parse().unwrap();
    assert_eq!(v.unit, SizeUnit::Dvh);
    assert_eq!(v.value, 30.0);
    let v: SizeValue = "30vh".parse().unwrap();
    assert_eq!(v.unit, SizeUnit::Vh);
}
