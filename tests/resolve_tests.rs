use approx::assert_relative_eq;
use forest_night::color::{Rgba, parse_color};
use forest_night::resolve::{InvalidColor, parse_base, resolve_opaque};

#[test]
fn test_opaque_reference_is_unchanged() {
    let resolved = resolve_opaque("#a7c080", Rgba::BLACK).unwrap();
    assert_eq!(resolved, parse_color("#a7c080").unwrap());
}

#[test]
fn test_translucent_reference_blends_over_base() {
    let base = parse_color("#2d353b").unwrap();
    let resolved = resolve_opaque("#00000000", base).unwrap();
    assert_eq!(resolved, base);

    let half = resolve_opaque("#ffffff80", Rgba::BLACK).unwrap();
    assert!(half.is_opaque());
    assert_relative_eq!(half.r, 128.0, epsilon = 1e-9);
}

#[test]
fn test_layered_resolution() {
    // Background over base, then foreground over the resolved background
    let base = parse_color("#000000").unwrap();
    let background = resolve_opaque("#ffffff80", base).unwrap();
    let foreground = resolve_opaque("#00000080", background).unwrap();
    assert!(foreground.r < background.r);
    assert!(foreground.is_opaque());
}

#[test]
fn test_malformed_reference_is_error() {
    let err = resolve_opaque("#12", Rgba::BLACK).unwrap_err();
    assert_eq!(err, InvalidColor("#12".into()));
    assert_eq!(err.reference(), "#12");
}

#[test]
fn test_parse_base_accepts_opaque() {
    assert_eq!(parse_base("#fff").unwrap(), Rgba::WHITE);
}

#[test]
fn test_parse_base_accepts_translucent() {
    let base = parse_base("#2d353b80").unwrap();
    assert!(!base.is_opaque());
    assert_relative_eq!(base.a, 128.0 / 255.0, epsilon = 1e-9);
}

#[test]
fn test_translucent_base_composites_channels() {
    // Half white over half black covers three quarters, two thirds of it white
    let base = parse_base("#00000080").unwrap();
    let resolved = resolve_opaque("#ffffff80", base).unwrap();
    assert!(!resolved.is_opaque());
    assert_relative_eq!(resolved.r, 170.2, epsilon = 0.1);
}

#[test]
fn test_parse_base_rejects_malformed() {
    let err = parse_base("bg0").unwrap_err();
    assert_eq!(err.reference(), "bg0");
    assert!(err.to_string().contains("bg0"));
}
