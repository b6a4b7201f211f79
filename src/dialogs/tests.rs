use std::sync::Arc;

use crate::aggregate::{CharacterAttribute, ImageAttribute, PlotAttribute, SeriesField};
use crate::apply::{CommitOutcome, RecordingSink, SinkError};
use crate::controls::{Control, ControlEdit, ControlError, StaticFontCatalog};
use crate::model::{
    AttributeValue, AxisLocation, AxisPair, AxisScale, CharacterFormat, CheckState, Color, FontWeight,
    ImageFormat, ObjectId, PlotFormat, Scalar, ScalingMode, SeriesFormat, Selection,
};
use crate::settings::MemorySettingsStore;

use super::{
    CharacterControls, CharacterDialog, CloseReason, DialogError, DialogSession, ImageControls,
    ImageDialog, PlotControls, PlotDialog, SessionState, ValueUnit,
};

fn sized(size: f64) -> CharacterFormat {
    CharacterFormat {
        font_size: size,
        ..CharacterFormat::default()
    }
}

fn character_dialog(formats: impl IntoIterator<Item = CharacterFormat>) -> CharacterDialog {
    let mut session =
        DialogSession::new(CharacterControls::default(), Selection::from_formats(formats));
    session.show().expect("show");
    session
}

fn typed(family: &str, weight: FontWeight) -> CharacterFormat {
    CharacterFormat {
        font_family: family.to_string(),
        font_weight: weight,
        ..CharacterFormat::default()
    }
}

fn weight_catalog() -> Arc<StaticFontCatalog> {
    Arc::new(
        StaticFontCatalog::default()
            .with_typeface("Display", &[FontWeight::Medium])
            .with_typeface("Hairline", &[FontWeight::Thin])
            .with_typeface("Heavy", &[FontWeight::Bold, FontWeight::Black])
            .with_typeface("Sans", &[FontWeight::Normal, FontWeight::Bold]),
    )
}

fn set_text(text: &str) -> ControlEdit {
    ControlEdit::SetText {
        text: text.to_string(),
    }
}

#[test]
fn conflicting_size_forced_to_one_value() {
    let mut session = character_dialog([sized(12.0), sized(12.0), sized(14.0)]);
    assert!(
        session
            .aggregate()
            .attribute(CharacterAttribute::FontSize)
            .expect("font size")
            .is_conflicting()
    );
    assert_eq!(session.controls().size.text(), "");
    assert_eq!(session.state(), SessionState::Clean);
    assert!(!session.commit_enabled());

    session
        .edit_attribute("font_size", &set_text("16"))
        .expect("edit");
    assert_eq!(session.state(), SessionState::Dirty);
    assert!(
        session
            .changes()
            .expect("changes")
            .changed(CharacterAttribute::FontSize)
    );

    let mut sink = RecordingSink::new();
    let outcome = session.accept(&mut sink).expect("accept");
    assert_eq!(outcome.updated_count(), 3);
    assert!(
        sink.batches()[0]
            .values()
            .all(|format| format.font_size == 16.0)
    );
    assert_eq!(session.state(), SessionState::Closed(CloseReason::Accepted));
}

#[test]
fn uniform_italic_renders_checked_and_stays_clean() {
    let italic = CharacterFormat {
        italic: true,
        ..CharacterFormat::default()
    };
    let mut session = character_dialog([italic.clone(), italic]);
    assert_eq!(session.controls().italic.state(), CheckState::Checked);
    assert!(!session.controls().italic.is_tristate());
    assert!(
        !session
            .changes()
            .expect("changes")
            .changed(CharacterAttribute::Italic)
    );

    let mut sink = RecordingSink::new();
    assert!(matches!(
        session.accept(&mut sink),
        Err(DialogError::CommitDisabled)
    ));
    assert!(sink.batches().is_empty());
    assert_eq!(session.state(), SessionState::Clean);
}

#[test]
fn picking_a_color_over_an_unset_one_is_a_change() {
    let mut session = character_dialog([CharacterFormat::default()]);
    let red = Color::rgb(255, 0, 0);
    session
        .edit(|controls| {
            controls.font_color.pick(Some(red));
            Ok(())
        })
        .expect("pick");
    assert!(session.commit_enabled());

    let mut sink = RecordingSink::new();
    session.accept(&mut sink).expect("accept");
    assert_eq!(sink.batches()[0][&ObjectId(1)].font_color, Some(red));
}

#[test]
fn untouched_dialogs_report_no_change() {
    let mixed_characters = [
        CharacterFormat {
            italic: true,
            font_color: Some(Color::rgb(0, 0, 255)),
            letter_spacing: 0.125,
            ..sized(10.0)
        },
        CharacterFormat {
            font_family: "Courier".to_string(),
            font_weight: FontWeight::Bold,
            ..sized(11.5)
        },
    ];
    let characters = character_dialog(mixed_characters);
    assert_eq!(characters.state(), SessionState::Clean);
    assert_eq!(
        characters.controls().italic.state(),
        CheckState::PartiallyChecked
    );
    assert!(
        characters
            .changes()
            .expect("changes")
            .changed_keys()
            .next()
            .is_none()
    );

    let mut images = ImageDialog::new(
        ImageControls::new(),
        Selection::from_formats([
            ImageFormat {
                horizontal_mode: ScalingMode::Fractional,
                horizontal_value: 0.125,
                ..ImageFormat::default()
            },
            ImageFormat {
                horizontal_mode: ScalingMode::FixedPoints,
                horizontal_value: 72.0,
                vertical_mode: ScalingMode::AspectRatio,
                ..ImageFormat::default()
            },
        ]),
    );
    images.show().expect("show");
    assert_eq!(images.state(), SessionState::Clean);

    let series = |axes| SeriesFormat {
        axes,
        ..SeriesFormat::default()
    };
    let mut plots = PlotDialog::new(
        PlotControls::new(),
        Selection::from_formats([
            PlotFormat {
                series: vec![series(AxisPair::BottomLeft)],
                ..PlotFormat::default()
            },
            PlotFormat {
                series: vec![series(AxisPair::TopRight), series(AxisPair::BottomLeft)],
                ..PlotFormat::default()
            },
        ]),
    );
    let plan = plots.show().expect("show");
    assert!(!plan.values_changed());
    assert_eq!(plan.dependent.active_axes, AxisLocation::ALL.to_vec());
    assert_eq!(plots.controls().series.len(), 2);
}

#[test]
fn letter_spacing_round_trips_through_its_percentage() {
    let session = character_dialog([CharacterFormat {
        letter_spacing: 0.125,
        ..CharacterFormat::default()
    }]);
    assert_eq!(session.controls().letter_spacing.text(), "12.5%");
    assert!(
        !session
            .changes()
            .expect("changes")
            .changed(CharacterAttribute::LetterSpacing)
    );
}

#[test]
fn unsupported_weight_falls_back_to_nearest_lower() {
    let mut session = DialogSession::new(
        CharacterControls::new(weight_catalog()),
        Selection::from_formats([typed("Display", FontWeight::Medium)]),
    );
    let plan = session.show().expect("show");
    assert_eq!(plan.dependent.weight, Some(FontWeight::Medium));

    session
        .edit(|controls| controls.family.select(&Scalar::Text("Sans".into())))
        .expect("family");
    let plan = session.plan().expect("plan");
    assert_eq!(
        plan.dependent.weights,
        vec![FontWeight::Normal, FontWeight::Bold]
    );
    assert_eq!(plan.dependent.weight, Some(FontWeight::Normal));
    assert_eq!(
        session.controls().weight.selected(),
        Some(&Scalar::Weight(FontWeight::Normal))
    );
    assert!(
        session
            .changes()
            .expect("changes")
            .changed(CharacterAttribute::FontWeight)
    );
}

#[test]
fn unsupported_weight_falls_back_upward_when_nothing_is_lighter() {
    let mut session = DialogSession::new(
        CharacterControls::new(weight_catalog()),
        Selection::from_formats([typed("Hairline", FontWeight::Thin)]),
    );
    session.show().expect("show");
    session
        .edit_attribute("font_family", &set_text("Heavy"))
        .expect("family");
    let plan = session.plan().expect("plan");
    assert_eq!(plan.dependent.weight, Some(FontWeight::Bold));
    assert_eq!(plan.dependent.preview.font_weight, FontWeight::Bold);
    assert_eq!(plan.dependent.preview.font_family, "Heavy");
}

#[test]
fn apply_keeps_the_dialog_open_on_the_applied_formats() {
    let mut session = character_dialog([sized(12.0), sized(14.0)]);
    session
        .edit(|controls| {
            controls.size.set_text("16");
            Ok(())
        })
        .expect("edit");

    let mut sink = RecordingSink::new();
    let outcome = session.apply(&mut sink).expect("apply");
    assert!(matches!(outcome, CommitOutcome::Issued(ref updates) if updates.len() == 2));
    assert_eq!(session.state(), SessionState::Clean);
    assert!(!session.commit_enabled());
    assert!(session.is_visible());
    assert_eq!(
        session
            .aggregate()
            .attribute(CharacterAttribute::FontSize)
            .expect("font size"),
        &AttributeValue::Single(Scalar::Float(16.0))
    );
    assert_eq!(session.controls().size.text(), "16 pt");
    assert_eq!(
        session
            .selection()
            .get(ObjectId(2))
            .expect("object")
            .font_size,
        16.0
    );
    assert_eq!(session.issued(), 1);

    assert!(matches!(
        session.accept(&mut sink),
        Err(DialogError::CommitDisabled)
    ));
    session.reject().expect("reject");
    assert_eq!(session.state(), SessionState::Closed(CloseReason::Rejected));
    assert_eq!(sink.batches().len(), 1);
}

#[test]
fn closed_session_refuses_everything() {
    let mut session = character_dialog([sized(12.0)]);
    session.reject().expect("reject");
    assert!(matches!(
        session.edit(|controls| {
            controls.italic.click();
            Ok(())
        }),
        Err(DialogError::Closed)
    ));
    assert!(matches!(session.show(), Err(DialogError::Closed)));
    assert!(matches!(
        session.set_selection(Selection::default()),
        Err(DialogError::Closed)
    ));
    assert!(matches!(session.reject(), Err(DialogError::Closed)));
}

#[test]
fn population_waits_until_the_dialog_is_shown() {
    let mut session =
        DialogSession::new(CharacterControls::default(), Selection::from_formats([sized(12.0)]));
    session
        .set_selection(Selection::from_formats([sized(20.0)]))
        .expect("select");
    assert!(session.plan().is_none());
    assert_eq!(session.controls().size.text(), "");
    assert!(matches!(
        session.edit_attribute("font_size", &set_text("9")),
        Err(DialogError::NotVisible)
    ));

    session.show().expect("show");
    assert_eq!(session.controls().size.text(), "20 pt");

    session.edit_attribute("font_size", &set_text("9")).expect("edit");
    assert_eq!(session.state(), SessionState::Dirty);
    session
        .set_selection(Selection::from_formats([sized(8.0)]))
        .expect("select");
    assert_eq!(session.controls().size.text(), "8 pt");
    assert_eq!(session.state(), SessionState::Clean);
}

#[test]
fn sink_failure_leaves_the_session_dirty() {
    let mut session = character_dialog([sized(12.0)]);
    session
        .edit_attribute("underline", &ControlEdit::Click)
        .expect("click");

    let mut sink = RecordingSink::new();
    sink.fail_next(SinkError::Failed("queue unavailable".into()));
    assert!(matches!(
        session.accept(&mut sink),
        Err(DialogError::Sink(SinkError::Failed(_)))
    ));
    assert_eq!(session.state(), SessionState::Dirty);
    assert!(session.is_visible());

    session.accept(&mut sink).expect("retry");
    assert!(sink.batches()[0][&ObjectId(1)].underline);
}

#[test]
fn unknown_attribute_names_are_rejected() {
    let mut session = character_dialog([sized(12.0)]);
    assert!(matches!(
        session.edit_attribute("font_colour", &ControlEdit::Click),
        Err(DialogError::NoControl(name)) if name == "font_colour"
    ));
    assert!(matches!(
        session.edit_attribute("font_size", &ControlEdit::Click),
        Err(DialogError::Control(ControlError::UnsupportedEdit { .. }))
    ));
    assert_eq!(session.state(), SessionState::Clean);
}

#[test]
fn scaling_value_follows_its_mode() {
    let mut session = ImageDialog::new(
        ImageControls::new(),
        Selection::from_formats([ImageFormat::default()]),
    );
    let plan = session.show().expect("show");
    assert!(!plan.dependent.horizontal.enabled);
    assert!(!session.controls().horizontal_value.is_enabled());

    session
        .edit_attribute(
            "horizontal_mode",
            &ControlEdit::Select {
                value: Scalar::Scaling(ScalingMode::Fractional),
            },
        )
        .expect("mode");
    let plan = session.plan().expect("plan");
    assert_eq!(plan.dependent.horizontal.unit, Some(ValueUnit::Percent));
    assert!(session.controls().horizontal_value.is_enabled());

    session
        .edit_attribute("horizontal_value", &set_text("50%"))
        .expect("value");
    let mut sink = RecordingSink::new();
    session.accept(&mut sink).expect("accept");
    let updated = &sink.batches()[0][&ObjectId(1)];
    assert_eq!(updated.horizontal_mode, ScalingMode::Fractional);
    assert_eq!(updated.horizontal_value, 0.5);
}

fn select_mode(mode: ScalingMode) -> ControlEdit {
    ControlEdit::Select {
        value: Scalar::Scaling(mode),
    }
}

#[test]
fn value_typed_after_forcing_a_mode_reaches_every_object() {
    let mut session = ImageDialog::new(
        ImageControls::new(),
        Selection::from_formats([
            ImageFormat {
                horizontal_mode: ScalingMode::FixedPoints,
                horizontal_value: 100.0,
                ..ImageFormat::default()
            },
            ImageFormat::default(),
        ]),
    );
    session.show().expect("show");
    session
        .edit_attribute("horizontal_mode", &select_mode(ScalingMode::FixedPoints))
        .expect("mode");
    session
        .edit_attribute("horizontal_value", &set_text("100"))
        .expect("value");
    assert_eq!(
        session.aggregate().attribute(ImageAttribute::HorizontalValue),
        Ok(&AttributeValue::Single(Scalar::Float(100.0)))
    );
    assert!(
        session
            .changes()
            .expect("changes")
            .changed(ImageAttribute::HorizontalValue)
    );

    let mut sink = RecordingSink::new();
    session.accept(&mut sink).expect("accept");
    let batch = &sink.batches()[0];
    assert!(!batch.contains_key(&ObjectId(1)));
    let updated = &batch[&ObjectId(2)];
    assert_eq!(updated.horizontal_mode, ScalingMode::FixedPoints);
    assert_eq!(updated.horizontal_value, 100.0);
}

#[test]
fn new_value_mode_without_a_value_cannot_be_committed() {
    let mut session = ImageDialog::new(
        ImageControls::new(),
        Selection::from_formats([ImageFormat::default()]),
    );
    session.show().expect("show");
    session
        .edit_attribute("horizontal_mode", &select_mode(ScalingMode::FixedPoints))
        .expect("mode");
    let plan = session.plan().expect("plan");
    assert!(plan.dependent.horizontal.missing);
    assert!(plan.values_changed());
    assert!(!plan.commit_enabled);

    let mut sink = RecordingSink::new();
    assert!(matches!(
        session.accept(&mut sink),
        Err(DialogError::CommitDisabled)
    ));

    session
        .edit_attribute("horizontal_value", &set_text("36"))
        .expect("value");
    assert!(session.commit_enabled());
    session.accept(&mut sink).expect("accept");
    assert_eq!(sink.batches()[0][&ObjectId(1)].horizontal_value, 36.0);
}

#[test]
fn switching_units_clears_the_typed_value() {
    let mut session = ImageDialog::new(
        ImageControls::new(),
        Selection::from_formats([ImageFormat {
            horizontal_mode: ScalingMode::FixedPoints,
            horizontal_value: 72.0,
            ..ImageFormat::default()
        }]),
    );
    session.show().expect("show");
    assert_eq!(session.controls().horizontal_value.text(), "72 pt");

    session
        .edit(|controls| {
            controls
                .horizontal_mode
                .select(&Scalar::Scaling(ScalingMode::Fractional))
        })
        .expect("mode");
    assert_eq!(session.controls().horizontal_value.text(), "");
    assert!(
        !session
            .changes()
            .expect("changes")
            .changed(ImageAttribute::HorizontalValue)
    );
}

#[test]
fn both_axes_keeping_aspect_ratio_cannot_be_committed() {
    let mut session = ImageDialog::new(
        ImageControls::new(),
        Selection::from_formats([ImageFormat::default()]),
    );
    session.show().expect("show");
    let aspect = Scalar::Scaling(ScalingMode::AspectRatio);
    session
        .edit(|controls| {
            controls.horizontal_mode.select(&aspect)?;
            controls.vertical_mode.select(&aspect)
        })
        .expect("modes");
    let plan = session.plan().expect("plan");
    assert!(plan.dependent.aspect_conflict);
    assert!(plan.values_changed());
    assert!(!plan.commit_enabled);
    assert_eq!(session.state(), SessionState::Dirty);
}

fn single_series_plot() -> PlotDialog {
    let mut session = PlotDialog::new(
        PlotControls::new(),
        Selection::from_formats([PlotFormat {
            series: vec![SeriesFormat::default()],
            ..PlotFormat::default()
        }]),
    );
    session.show().expect("show");
    session
}

#[test]
fn axes_without_series_are_disabled() {
    let mut session = single_series_plot();
    assert_eq!(
        session.plan().expect("plan").dependent.active_axes,
        vec![AxisLocation::Left, AxisLocation::Bottom]
    );
    assert!(!session.controls().right.minimum.is_enabled());
    assert!(matches!(
        session.edit_attribute("axis.right.minimum", &set_text("2")),
        Err(DialogError::Control(ControlError::Disabled))
    ));

    session
        .edit(|controls| {
            controls.series[0]
                .axes
                .select(&Scalar::AxisPair(AxisPair::TopRight))
        })
        .expect("rebind");
    assert_eq!(
        session.plan().expect("plan").dependent.active_axes,
        vec![AxisLocation::Right, AxisLocation::Top]
    );
    assert!(session.controls().right.minimum.is_enabled());
    assert!(!session.controls().left.minimum.is_enabled());
    assert!(
        session
            .changes()
            .expect("changes")
            .changed(PlotAttribute::Series(0, SeriesField::Axes))
    );
}

#[test]
fn inverted_range_blocks_commit_until_fixed() {
    let mut session = single_series_plot();
    session
        .edit_attribute("axis.left.minimum", &set_text("5"))
        .expect("minimum");
    let plan = session.plan().expect("plan");
    assert_eq!(plan.dependent.invalid_axes, vec![AxisLocation::Left]);
    assert!(!plan.commit_enabled);

    let mut sink = RecordingSink::new();
    assert!(matches!(
        session.accept(&mut sink),
        Err(DialogError::CommitDisabled)
    ));

    session
        .edit_attribute("axis.left.maximum", &set_text("10"))
        .expect("maximum");
    assert!(session.commit_enabled());
    session.accept(&mut sink).expect("accept");
    let axis = &sink.batches()[0][&ObjectId(1)].axes.left;
    assert_eq!((axis.minimum, axis.maximum), (5.0, 10.0));
}

#[test]
fn log_axis_must_start_above_zero() {
    let mut session = single_series_plot();
    session
        .edit_attribute(
            "axis.left.scale",
            &ControlEdit::Select {
                value: Scalar::AxisScale(AxisScale::Log),
            },
        )
        .expect("scale");
    let plan = session.plan().expect("plan");
    assert_eq!(plan.dependent.invalid_axes, vec![AxisLocation::Left]);
    assert!(!plan.commit_enabled);

    session
        .edit_attribute("axis.left.minimum", &set_text("0.5"))
        .expect("minimum");
    assert!(session.plan().expect("plan").dependent.invalid_axes.is_empty());
    assert!(session.commit_enabled());
}

#[test]
fn major_step_must_be_positive() {
    let mut session = single_series_plot();
    for step in ["0", "-0.5"] {
        session
            .edit_attribute("axis.left.major_step", &set_text(step))
            .expect("step");
        let plan = session.plan().expect("plan");
        assert_eq!(plan.dependent.invalid_axes, vec![AxisLocation::Left]);
        assert!(!plan.commit_enabled);
    }

    session
        .edit_attribute("axis.left.major_step", &set_text("0.25"))
        .expect("step");
    assert!(session.commit_enabled());
}

#[test]
fn series_rows_follow_the_selection() {
    let mut session = single_series_plot();
    assert!(matches!(
        session.edit_attribute("series.1.line_style", &ControlEdit::Click),
        Err(DialogError::NoControl(_))
    ));
    session
        .set_selection(Selection::from_formats([PlotFormat {
            series: vec![SeriesFormat::default(); 3],
            ..PlotFormat::default()
        }]))
        .expect("select");
    assert_eq!(session.controls().series.len(), 3);
    assert_eq!(session.plan().expect("plan").dependent.series_count, 3);
}

#[test]
fn preferences_survive_between_sessions() {
    let mut store = MemorySettingsStore::new();
    let mut first = character_dialog([sized(12.0)]);
    first.preferences_mut().page = Some("embellishments".to_string());
    first
        .store_preferences(&mut store, "CharacterFormatDialog")
        .expect("store");

    let mut second = character_dialog([sized(14.0)]);
    second
        .restore_preferences(&store, "CharacterFormatDialog")
        .expect("restore");
    assert_eq!(second.preferences().page.as_deref(), Some("embellishments"));
}
