use binchart::ChartError;
use binchart::core::{Color, ColorScale};

#[test]
fn css_strings_parse_in_all_supported_forms() {
    let short: Color = "#fff".parse().expect("short hex");
    let long: Color = "#14b7ef".parse().expect("long hex");
    let functional: Color = "rgb(20, 183, 239)".parse().expect("rgb");
    let alpha: Color = "rgba(0, 0, 0, 0.2)".parse().expect("rgba");

    assert_eq!(short, Color::WHITE);
    assert_eq!(long, functional);
    assert_eq!(alpha, Color::BLACK.with_alpha(0.2));
    assert_eq!(long.to_css(), "rgb(20, 183, 239)");
    assert_eq!(alpha.to_css(), "rgba(0, 0, 0, 0.2)");
}

#[test]
fn unsupported_colors_are_config_errors() {
    for text in ["teal", "#12", "rgb(1, 2)", "rgba(1, 2, 3)", "rgb(300, 0, 0)", "#gggggg"] {
        let err = text.parse::<Color>().expect_err(text);
        assert!(matches!(err, ChartError::Config(_)), "{text}");
    }
}

#[test]
fn lerp_hits_endpoints_and_clamps_extrapolation() {
    let from = Color::WHITE;
    let to = Color::BLACK;
    assert_eq!(from.lerp(to, 0.0), from);
    assert_eq!(from.lerp(to, 1.0), to);
    assert_eq!(from.lerp(to, 0.5).to_css(), "rgb(128, 128, 128)");
    assert_eq!(from.lerp(to, 2.0), to);
    assert_eq!(from.lerp(to, -1.0), from);
}

#[test]
fn color_scale_maps_domain_to_ramp() {
    let top = Color::from_rgb8(20, 183, 239);
    let scale = ColorScale::new((0.0, 8.0), Color::WHITE, top).expect("scale");
    assert_eq!(scale.forward(0.0), Color::WHITE);
    assert_eq!(scale.forward(8.0), top);
    assert_eq!(scale.forward(1.0).to_css(), "rgb(226, 246, 253)");
    assert_eq!(scale.domain(), (0.0, 8.0));
}

#[test]
fn color_scale_rejects_out_of_gamut_stops() {
    let err = ColorScale::new((0.0, 1.0), Color::rgb(2.0, 0.0, 0.0), Color::BLACK)
        .expect_err("out of gamut");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn colors_serialize_as_css_strings() {
    let json = serde_json::to_string(&Color::BLACK.with_alpha(0.5)).expect("serialize");
    assert_eq!(json, r#""rgba(0, 0, 0, 0.5)""#);
    let back: Color = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Color::BLACK.with_alpha(0.5));
}
