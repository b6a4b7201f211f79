use super::{
    AttributeValue, CharacterFormat, CheckState, Color, FontWeight, QuadState, Scalar, Selection,
    nearest_supported_weight,
};

#[test]
fn aggregation_classifies_distinct_values() {
    assert_eq!(
        AttributeValue::<f64>::from_values(Vec::new()),
        AttributeValue::Unset
    );
    assert_eq!(
        AttributeValue::from_values([12.0, 12.0, 12.0]),
        AttributeValue::Single(12.0)
    );
    assert_eq!(
        AttributeValue::from_values([12.0, 12.0, 14.0]),
        AttributeValue::Conflicting
    );
    assert_eq!(
        AttributeValue::from_values(["Helvetica", "Times"]),
        AttributeValue::Conflicting
    );
}

#[test]
fn aggregation_uses_exact_float_equality() {
    let drifted = 0.1_f64 + 0.2;
    assert_eq!(
        AttributeValue::from_values([0.3_f64, drifted]),
        AttributeValue::Conflicting
    );
}

#[test]
fn resolved_value_only_for_single() {
    assert_eq!(AttributeValue::Single(3).resolved_value(), Some(&3));
    assert_eq!(AttributeValue::<i32>::Conflicting.resolved_value(), None);
    assert_eq!(AttributeValue::<i32>::Unset.resolved_value(), None);
    assert!(AttributeValue::<i32>::Unset.is_unset());
    assert!(AttributeValue::<i32>::Conflicting.is_conflicting());
}

#[test]
fn quad_state_matches_attribute_value() {
    assert_eq!(QuadState::from_values([true, true]), QuadState::Enabled);
    assert_eq!(QuadState::from_values([false]), QuadState::Disabled);
    assert_eq!(
        QuadState::from_values([true, false]),
        QuadState::EnabledAndDisabled
    );
    assert_eq!(QuadState::from_values([]), QuadState::NoValue);
    assert_eq!(
        AttributeValue::from(QuadState::EnabledAndDisabled),
        AttributeValue::<bool>::Conflicting
    );
    assert_eq!(QuadState::Enabled.check_state(), CheckState::Checked);
    assert_eq!(
        QuadState::EnabledAndDisabled.check_state(),
        CheckState::PartiallyChecked
    );
}

#[test]
fn weight_fallback_prefers_lower_then_higher() {
    assert_eq!(
        nearest_supported_weight(FontWeight::Medium, &[FontWeight::Normal, FontWeight::Bold]),
        Some(FontWeight::Normal)
    );
    assert_eq!(
        nearest_supported_weight(FontWeight::Thin, &[FontWeight::Bold, FontWeight::Black]),
        Some(FontWeight::Bold)
    );
    assert_eq!(
        nearest_supported_weight(FontWeight::Bold, &[FontWeight::Bold]),
        Some(FontWeight::Bold)
    );
    assert_eq!(nearest_supported_weight(FontWeight::Bold, &[]), None);
}

#[test]
fn weight_names_parse() {
    assert_eq!("demi-bold".parse::<FontWeight>(), Ok(FontWeight::DemiBold));
    assert!("heavy".parse::<FontWeight>().is_err());
}

#[test]
fn color_hex_roundtrip() {
    let red: Color = "#FF0000".parse().expect("color");
    assert_eq!(red, Color::rgb(255, 0, 0));
    assert_eq!(red.to_string(), "#FF0000");
    let translucent: Color = "#00ff0080".parse().expect("color");
    assert_eq!(translucent.alpha, 0x80);
    assert!("red".parse::<Color>().is_err());
    assert!("#12345".parse::<Color>().is_err());
}

#[test]
fn scalar_extract_reports_mismatch() {
    let scalar = Scalar::Float(12.5);
    assert_eq!(scalar.extract::<f64>("font_size"), Ok(12.5));
    let error = scalar
        .extract::<bool>("italic")
        .expect_err("type mismatch");
    assert!(error.to_string().contains("italic"));
}

#[test]
fn character_format_deserializes_partial_json() {
    let format: CharacterFormat =
        serde_json::from_str(r##"{"font_size": 14.0, "font_color": "#FF0000"}"##)
            .expect("format");
    assert_eq!(format.font_size, 14.0);
    assert_eq!(format.font_color, Some(Color::rgb(255, 0, 0)));
    assert_eq!(format.font_family, CharacterFormat::default().font_family);
}

#[test]
fn selection_numbers_objects_in_order() {
    let selection = Selection::from_formats([CharacterFormat::default(), CharacterFormat::default()]);
    let ids = selection
        .iter()
        .map(|object| object.id.0)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2]);
}
