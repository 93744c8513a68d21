use super::item_describer::{ItemDescriber, ItemProps, LayerItemDescriber};
use crate::consts::{LABEL_ELLIPSIS, STYLE_UPDATE_FAILED_TITLE};
use crate::messages::frontend::utility_types::RepeatedStyleEntry;
use crate::messages::prelude::*;

use style_object_model::apply_transform;

use std::fmt;

pub struct RepeatedStyleMessageContext<'a> {
	pub style_sheet: &'a mut StyleSheet,
	pub preferences: &'a PreferencesMessageHandler,
}

/// Lists the layers of a [StyleDeclarationGroup] and turns list interactions into [LayerEdit]s.
pub struct RepeatedStyleMessageHandler {
	label: String,
	group: Option<StyleDeclarationGroup>,
	describer: Box<dyn ItemDescriber>,
}

impl Default for RepeatedStyleMessageHandler {
	fn default() -> Self {
		Self::with_describer(LayerItemDescriber)
	}
}

impl fmt::Debug for RepeatedStyleMessageHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RepeatedStyleMessageHandler").field("label", &self.label).field("group", &self.group).finish_non_exhaustive()
	}
}

impl<'a> MessageHandler<RepeatedStyleMessage, RepeatedStyleMessageContext<'a>> for RepeatedStyleMessageHandler {
	fn process_message(&mut self, message: RepeatedStyleMessage, responses: &mut VecDeque<Message>, context: RepeatedStyleMessageContext<'a>) {
		let RepeatedStyleMessageContext { style_sheet, preferences } = context;

		match message {
			RepeatedStyleMessage::ClearGroup => {
				self.label.clear();
				self.group = None;
				responses.push_back(FrontendMessage::ClearRepeatedStyle.into());
			}
			RepeatedStyleMessage::Delete { index } => self.transform_layers(LayerEdit::Delete { index }, style_sheet, responses),
			RepeatedStyleMessage::Refresh => responses.push_back(self.layer_list(style_sheet, preferences).into()),
			RepeatedStyleMessage::SetGroup { label, group } => {
				self.label = label;
				self.group = Some(group);
				responses.push_back(RepeatedStyleMessage::Refresh.into());
			}
			RepeatedStyleMessage::Sort { old_index, new_index } => self.transform_layers(LayerEdit::Move { old_index, new_index }, style_sheet, responses),
			RepeatedStyleMessage::ToggleHidden { index } => self.transform_layers(LayerEdit::Hide { index }, style_sheet, responses),
		}
	}
}

impl RepeatedStyleMessageHandler {
	pub fn with_describer(describer: impl ItemDescriber + 'static) -> Self {
		Self {
			label: String::new(),
			group: None,
			describer: Box::new(describer),
		}
	}

	fn transform_layers(&self, edit: LayerEdit, style_sheet: &mut StyleSheet, responses: &mut VecDeque<Message>) {
		let Some(group) = &self.group else {
			warn!("Ignoring {edit:?} since no style group is being edited");
			return;
		};

		let layer_count = group.layer_count(&*style_sheet);
		if !edit_in_range(edit, layer_count) {
			warn!("Ignoring {edit:?} since `{}` has {layer_count} layer(s)", group.primary());
			return;
		}

		match apply_transform(style_sheet, group, edit) {
			Ok(style_responses) => {
				for response in &style_responses {
					debug!("{response}");
				}
				responses.push_back(RepeatedStyleMessage::Refresh.into());
			}
			Err(error) => {
				error!("Failed to apply {edit:?}: {error}");
				responses.push_back(
					FrontendMessage::DisplayError {
						title: STYLE_UPDATE_FAILED_TITLE.into(),
						description: error.to_string(),
					}
					.into(),
				);
			}
		}
	}

	fn layer_list(&self, style_sheet: &StyleSheet, preferences: &PreferencesMessageHandler) -> FrontendMessage {
		let Some(layers) = self.group.as_ref().and_then(|group| group.primary_layers(style_sheet)).filter(|layers| !layers.is_empty()) else {
			return FrontendMessage::ClearRepeatedStyle;
		};

		let items = layers
			.iter()
			.enumerate()
			.map(|(index, layer)| {
				let ItemProps { label, color } = self.describer.describe(index, layer);
				RepeatedStyleEntry {
					id: index.to_string(),
					index,
					label: truncate_label(label, preferences.max_label_length),
					hidden: layer.hidden,
					color: color.filter(|_| preferences.show_color_swatches),
				}
			})
			.collect();

		FrontendMessage::UpdateRepeatedStyle { label: self.label.clone(), items }
	}
}

/// Edits only ever address rows of the list, so any index past the primary layer count comes from a stale interaction.
/// This is stricter than [LayerEdit::Move] itself, which appends a layer moved past the end: a drop target is always an existing row.
fn edit_in_range(edit: LayerEdit, layer_count: usize) -> bool {
	match edit {
		LayerEdit::Hide { index } | LayerEdit::Delete { index } => index < layer_count,
		LayerEdit::Move { old_index, new_index } => old_index < layer_count && new_index < layer_count,
	}
}

fn truncate_label(label: String, max_length: usize) -> String {
	if max_length == 0 || label.chars().count() <= max_length {
		return label;
	}
	label.chars().take(max_length).chain(LABEL_ELLIPSIS.chars()).collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test_utils::test_prelude::*;
	use pretty_assertions::assert_eq;

	fn process(handler: &mut RepeatedStyleMessageHandler, message: RepeatedStyleMessage, style_sheet: &mut StyleSheet) -> Vec<Message> {
		let preferences = PreferencesMessageHandler::default();
		let mut responses = VecDeque::new();
		handler.process_message(message, &mut responses, RepeatedStyleMessageContext { style_sheet, preferences: &preferences });
		responses.into_iter().collect()
	}

	fn bound_handler() -> RepeatedStyleMessageHandler {
		let mut handler = RepeatedStyleMessageHandler::default();
		let message = RepeatedStyleMessage::SetGroup {
			label: "Backgrounds".into(),
			group: background_group(),
		};
		process(&mut handler, message, &mut StyleSheet::new());
		handler
	}

	#[test]
	fn edits_without_a_group_are_ignored() {
		init_logger();
		let mut style_sheet = background_sheet(&["a.png", "b.png"], &["cover"]);
		let before = style_sheet.clone();

		let responses = process(&mut RepeatedStyleMessageHandler::default(), RepeatedStyleMessage::Delete { index: 0 }, &mut style_sheet);

		assert!(responses.is_empty());
		assert_eq!(style_sheet, before);
	}

	#[test]
	fn out_of_range_edits_are_ignored() {
		init_logger();
		let mut handler = bound_handler();
		let mut style_sheet = background_sheet(&["a.png", "b.png"], &["cover"]);
		let before = style_sheet.clone();

		assert!(process(&mut handler, RepeatedStyleMessage::ToggleHidden { index: 2 }, &mut style_sheet).is_empty());
		assert!(process(&mut handler, RepeatedStyleMessage::Sort { old_index: 0, new_index: 2 }, &mut style_sheet).is_empty());
		assert_eq!(style_sheet, before);
	}

	#[test]
	fn edits_write_every_property_and_refresh() {
		init_logger();
		let mut handler = bound_handler();
		let mut style_sheet = background_sheet(&["a.png", "b.png", "c.png"], &["cover"]);

		let responses = process(&mut handler, RepeatedStyleMessage::Delete { index: 0 }, &mut style_sheet);

		assert_eq!(responses, vec![Message::from(RepeatedStyleMessage::Refresh)]);
		assert_eq!(layer_labels(&style_sheet, StyleProperty::BackgroundImage), vec!["b.png", "c.png"]);
		assert_eq!(layer_labels(&style_sheet, StyleProperty::BackgroundSize), vec!["cover", "cover"]);
	}

	#[test]
	fn refresh_lists_the_primary_layers() {
		let mut handler = bound_handler();
		let mut style_sheet = background_sheet(&["a.png", "b.png"], &["cover"]);
		process(&mut handler, RepeatedStyleMessage::ToggleHidden { index: 1 }, &mut style_sheet);

		let responses = process(&mut handler, RepeatedStyleMessage::Refresh, &mut style_sheet);

		let Some(Message::Frontend(FrontendMessage::UpdateRepeatedStyle { label, items })) = responses.into_iter().next() else {
			panic!("Expected the layer list to be sent to the frontend");
		};
		assert_eq!(label, "Backgrounds");
		assert_eq!(items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(), vec!["0", "1"]);
		assert_eq!(items.iter().map(|item| item.hidden).collect::<Vec<_>>(), vec![false, true]);
		assert_eq!(items[1].label, "b.png");
	}

	#[test]
	fn an_empty_primary_clears_the_list() {
		let mut handler = bound_handler();
		let mut style_sheet = background_sheet(&["a.png"], &[]);
		process(&mut handler, RepeatedStyleMessage::Delete { index: 0 }, &mut style_sheet);

		let responses = process(&mut handler, RepeatedStyleMessage::Refresh, &mut style_sheet);

		assert_eq!(responses, vec![Message::from(FrontendMessage::ClearRepeatedStyle)]);
		assert_eq!(style_sheet.local_value(StyleProperty::BackgroundImage), None);
	}

	#[test]
	fn long_labels_are_truncated() {
		assert_eq!(truncate_label("background.png".into(), 4), "back…");
		assert_eq!(truncate_label("short".into(), 5), "short");
		assert_eq!(truncate_label("unlimited".into(), 0), "unlimited");
	}
}
