use style_object_model::{Layer, LayerItem, LayersValue, RgbValue, ShadowValue, StyleDeclarationGroup, StyleProperty, StyleSheet, StyleStore, StyleValue};
use style_panel_editor::application::Editor;
use style_panel_editor::messages::frontend::utility_types::RepeatedStyleEntry;
use style_panel_editor::messages::prelude::*;

use pretty_assertions::assert_eq;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn layers(items: &[&str]) -> LayersValue {
	items.iter().map(|item| Layer::new(LayerItem::keyword(*item))).collect()
}

fn keywords(style_sheet: &StyleSheet, property: StyleProperty) -> Option<Vec<String>> {
	let layers = style_sheet.cascaded_value(property)?.as_layers()?;
	Some(layers.iter().map(|layer| layer.item.to_string()).collect())
}

fn entries(responses: &[FrontendMessage]) -> &[RepeatedStyleEntry] {
	responses
		.iter()
		.find_map(|message| match message {
			FrontendMessage::UpdateRepeatedStyle { items, .. } => Some(items.as_slice()),
			_ => None,
		})
		.unwrap_or_default()
}

fn transition_editor() -> Editor {
	init_logger();

	let mut style_sheet = StyleSheet::new();
	style_sheet.set_local(StyleProperty::TransitionProperty, layers(&["opacity", "color", "width"])).unwrap();
	style_sheet.set_local(StyleProperty::TransitionDuration, layers(&["1s"])).unwrap();
	style_sheet.set_local(StyleProperty::TransitionDelay, layers(&["0s", "1s", "2s", "3s", "4s"])).unwrap();

	let mut editor = Editor::with_style_sheet(style_sheet);
	let group = StyleDeclarationGroup::new(StyleProperty::TransitionProperty, [StyleProperty::TransitionDuration, StyleProperty::TransitionDelay]);
	editor.handle_message(RepeatedStyleMessage::SetGroup { label: "Transitions".into(), group });
	editor
}

#[test]
fn every_property_follows_the_primary_layer_count() {
	let mut editor = transition_editor();

	let responses = editor.handle_message(RepeatedStyleMessage::Delete { index: 0 });

	let style_sheet = editor.style_sheet();
	assert_eq!(keywords(style_sheet, StyleProperty::TransitionProperty), Some(vec!["color".into(), "width".into()]));
	assert_eq!(keywords(style_sheet, StyleProperty::TransitionDuration), Some(vec!["1s".into(), "1s".into()]));
	assert_eq!(keywords(style_sheet, StyleProperty::TransitionDelay), Some(vec!["1s".into(), "2s".into()]));

	let labels: Vec<_> = entries(&responses).iter().map(|entry| entry.label.as_str()).collect();
	assert_eq!(labels, vec!["color", "width"]);
}

#[test]
fn sorting_moves_the_layer_in_every_property() {
	let mut editor = transition_editor();

	editor.handle_message(RepeatedStyleMessage::Sort { old_index: 2, new_index: 0 });

	let style_sheet = editor.style_sheet();
	assert_eq!(
		keywords(style_sheet, StyleProperty::TransitionProperty),
		Some(vec!["width".into(), "opacity".into(), "color".into()])
	);
	assert_eq!(keywords(style_sheet, StyleProperty::TransitionDelay), Some(vec!["2s".into(), "0s".into(), "1s".into()]));
}

#[test]
fn hidden_layers_are_listed_and_toggle_back() {
	let mut editor = transition_editor();

	let responses = editor.handle_message(RepeatedStyleMessage::ToggleHidden { index: 1 });
	let hidden: Vec<_> = entries(&responses).iter().map(|entry| entry.hidden).collect();
	assert_eq!(hidden, vec![false, true, false]);

	let responses = editor.handle_message(RepeatedStyleMessage::ToggleHidden { index: 1 });
	assert!(entries(&responses).iter().all(|entry| !entry.hidden));
}

#[test]
fn deleting_the_last_layer_removes_every_property() {
	init_logger();

	let mut style_sheet = StyleSheet::new();
	style_sheet.set_local(StyleProperty::BackgroundImage, layers(&["none"])).unwrap();
	style_sheet.set_local(StyleProperty::BackgroundSize, layers(&["cover", "contain"])).unwrap();
	style_sheet.set_local(StyleProperty::BackgroundColor, StyleValue::Rgb(RgbValue::BLACK)).unwrap();

	let mut editor = Editor::with_style_sheet(style_sheet);
	let group = StyleDeclarationGroup::new(StyleProperty::BackgroundImage, [StyleProperty::BackgroundSize]);
	editor.handle_message(RepeatedStyleMessage::SetGroup { label: "Backgrounds".into(), group });

	let responses = editor.handle_message(RepeatedStyleMessage::Delete { index: 0 });

	let style_sheet = editor.style_sheet();
	assert_eq!(style_sheet.cascaded_value(StyleProperty::BackgroundImage), None);
	assert_eq!(style_sheet.cascaded_value(StyleProperty::BackgroundSize), None);
	assert_eq!(style_sheet.cascaded_value(StyleProperty::BackgroundColor), Some(&StyleValue::Rgb(RgbValue::BLACK)));
	assert_eq!(responses, vec![FrontendMessage::ClearRepeatedStyle]);
}

#[test]
fn properties_without_layers_are_left_alone() {
	init_logger();

	let mut style_sheet = StyleSheet::new();
	style_sheet.set_local(StyleProperty::BoxShadow, LayersValue::from_iter([Layer::new(LayerItem::Shadow(ShadowValue::default()))])).unwrap();
	style_sheet.set_local(StyleProperty::Filter, StyleValue::keyword("none")).unwrap();
	let filter = style_sheet.local_value(StyleProperty::Filter).cloned();

	let mut editor = Editor::with_style_sheet(style_sheet);
	let group = StyleDeclarationGroup::new(StyleProperty::BoxShadow, [StyleProperty::Filter]);
	editor.handle_message(RepeatedStyleMessage::SetGroup { label: "Shadows".into(), group });

	let responses = editor.handle_message(RepeatedStyleMessage::ToggleHidden { index: 0 });

	assert_eq!(editor.style_sheet().local_value(StyleProperty::Filter).cloned(), filter);
	let [entry] = entries(&responses) else {
		panic!("Expected one shadow entry, got {responses:?}");
	};
	assert!(entry.hidden);
	assert_eq!(entry.label, "Outer shadow: 0px 0px 0px 0px");
}

#[test]
fn stale_indices_do_not_touch_the_style_sheet() {
	let mut editor = transition_editor();
	let before = editor.style_sheet().clone();

	let responses = editor.handle_message(RepeatedStyleMessage::Delete { index: 3 });

	assert!(responses.is_empty());
	assert_eq!(editor.style_sheet(), &before);
}

#[test]
fn preferences_shape_the_layer_list() {
	let mut editor = transition_editor();

	let responses = editor.handle_message(PreferencesMessage::MaxLabelLength { length: 3 });

	let labels: Vec<_> = entries(&responses).iter().map(|entry| entry.label.as_str()).collect();
	assert_eq!(labels, vec!["opa…", "col…", "wid…"]);
}
