use crate::aggregate::AttributeSummary;
use crate::model::{CheckState, Color, FontWeight, Scalar};

use super::{
    CheckBox, ColorButton, ComboBox, Control, ControlEdit, ControlError, FontCatalog, LineEdit,
    RawControlValue, SizeOverride, SpinBox, StaticFontCatalog, TypefaceEntry,
};

fn summary(values: impl IntoIterator<Item = Scalar>) -> AttributeSummary {
    AttributeSummary::from_values(values)
}

#[test]
fn percentage_spin_box_roundtrips_exactly() {
    let mut spin = SpinBox::percentage(-100.0, 1000.0);
    spin.render(&summary([Scalar::Float(0.125)]));
    assert_eq!(spin.text(), "12.5%");
    assert_eq!(spin.read(), RawControlValue::Resolved(Scalar::Float(0.125)));

    spin.set_text("12.5");
    assert_eq!(spin.read(), RawControlValue::Resolved(Scalar::Float(0.125)));
}

#[test]
fn spin_box_keeps_values_that_do_not_display_exactly() {
    let mut spin = SpinBox::percentage(-100.0, 1000.0);
    spin.render(&summary([Scalar::Float(0.07)]));
    assert_eq!(spin.text(), "7%");
    assert_eq!(spin.read(), RawControlValue::Resolved(Scalar::Float(0.07)));
}

#[test]
fn spin_box_blank_and_invalid_text() {
    let mut spin = SpinBox::percentage(-100.0, 1000.0);
    spin.render(&summary([Scalar::Float(0.1), Scalar::Float(0.2)]));
    assert_eq!(spin.text(), "");
    assert_eq!(spin.read(), RawControlValue::Blank);

    spin.set_text("%");
    assert_eq!(spin.read(), RawControlValue::Blank);

    spin.set_text("wide");
    assert_eq!(spin.read(), RawControlValue::Invalid("wide".into()));

    spin.set_text("5000");
    assert!(!spin.read().is_valid());
}

#[test]
fn spin_box_display_change_clears_text() {
    let mut spin = SpinBox::new(0.0, 1000.0).with_display(1.0, " pt");
    spin.render(&summary([Scalar::Float(72.0)]));
    assert_eq!(spin.text(), "72 pt");
    spin.set_display(100.0, "%");
    assert_eq!(spin.read(), RawControlValue::Blank);
}

#[test]
fn check_box_shows_mixed_values_as_partially_checked() {
    let mut check = CheckBox::new();
    check.render(&summary([Scalar::Bool(true), Scalar::Bool(false)]));
    assert_eq!(check.state(), CheckState::PartiallyChecked);
    assert!(check.is_tristate());
    assert_eq!(check.read(), RawControlValue::Indeterminate);

    check.click();
    assert_eq!(check.read(), RawControlValue::Resolved(Scalar::Bool(true)));
    assert!(!check.is_tristate());

    check.render(&summary([Scalar::Bool(true), Scalar::Bool(true)]));
    assert_eq!(check.state(), CheckState::Checked);
    assert!(!check.is_tristate());
}

#[test]
fn combo_box_inserts_rendered_value_and_keeps_selection() {
    let mut combo = ComboBox::new([FontWeight::Normal, FontWeight::Bold]);
    combo.render(&summary([Scalar::Weight(FontWeight::Medium)]));
    assert_eq!(combo.selected(), Some(&Scalar::Weight(FontWeight::Medium)));

    combo.set_choices(vec![
        Scalar::Weight(FontWeight::Medium),
        Scalar::Weight(FontWeight::Black),
    ]);
    assert_eq!(combo.read(), RawControlValue::Resolved(Scalar::Weight(FontWeight::Medium)));

    combo.set_choices(vec![Scalar::Weight(FontWeight::Black)]);
    assert_eq!(combo.read(), RawControlValue::Blank);

    let error = combo
        .edit(&ControlEdit::Select {
            value: Scalar::Weight(FontWeight::Thin),
        })
        .expect_err("not offered");
    assert!(matches!(error, ControlError::UnknownChoice(_)));
}

#[test]
fn editable_combo_box_accepts_text() {
    let mut combo = ComboBox::new(["Helvetica".to_string()]).editable();
    combo
        .edit(&ControlEdit::SetText {
            text: "Times".into(),
        })
        .expect("edit");
    assert_eq!(combo.read(), RawControlValue::Resolved(Scalar::Text("Times".into())));
    assert_eq!(combo.choices().len(), 2);
}

#[test]
fn line_edit_reads_empty_as_blank_unless_accepted() {
    let mut plain = LineEdit::new();
    plain.render(&summary([Scalar::Text("a".into()), Scalar::Text("b".into())]));
    assert_eq!(plain.read(), RawControlValue::Blank);
    plain.set_text("");
    assert_eq!(plain.read(), RawControlValue::Blank);

    let mut title = LineEdit::accepting_empty();
    title.render(&summary([Scalar::Text("a".into()), Scalar::Text("b".into())]));
    assert_eq!(title.read(), RawControlValue::Blank);
    title.set_text("");
    assert_eq!(title.read(), RawControlValue::Resolved(Scalar::Text(String::new())));
}

#[test]
fn color_button_reads_full_candidate_set() {
    let red = Some(Color::rgb(255, 0, 0));
    let mut button = ColorButton::new();
    button.render(&summary([Scalar::Color(None), Scalar::Color(red)]));
    assert_eq!(
        button.read(),
        RawControlValue::Candidates(vec![Scalar::Color(None), Scalar::Color(red)])
    );
    button.pick(red);
    assert_eq!(button.read().resolved(), Some(&Scalar::Color(red)));
}

#[test]
fn disabled_controls_reject_edits() {
    let mut edit = LineEdit::new();
    edit.set_enabled(false);
    assert_eq!(
        edit.edit(&ControlEdit::SetText { text: "x".into() }),
        Err(ControlError::Disabled)
    );
}

#[test]
fn catalog_resolves_size_overrides_and_fallback() {
    let mut catalog = StaticFontCatalog::default().with_typeface(
        "Helvetica",
        &[FontWeight::Bold, FontWeight::Normal, FontWeight::Light],
    );
    catalog.typefaces.insert(
        "Fixed".into(),
        TypefaceEntry {
            weights: vec![FontWeight::Normal, FontWeight::Bold],
            sizes: vec![SizeOverride {
                size: 6.0,
                weights: vec![FontWeight::Normal],
            }],
        },
    );
    assert_eq!(
        catalog.supported_weights("Helvetica", 12.0),
        vec![FontWeight::Light, FontWeight::Normal, FontWeight::Bold]
    );
    assert_eq!(catalog.supported_weights("Fixed", 6.0), vec![FontWeight::Normal]);
    assert_eq!(
        catalog.supported_weights("Unknown", 12.0),
        vec![FontWeight::Normal, FontWeight::Bold]
    );
    assert_eq!(catalog.families(), vec!["Fixed".to_string(), "Helvetica".to_string()]);
}
