//! Unit tests for the template store and its collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::template::{
    CanvasStyle, CanvasStylePatch, Component, ComponentId, ComponentPatch, ComponentType, Document,
    Placeholder, ViewMode,
};

fn store_with(kinds: &[ComponentType]) -> (TemplateStore, Vec<ComponentId>) {
    let mut store = TemplateStore::default();
    let ids = kinds.iter().map(|k| store.add_element(*k, None)).collect();
    (store, ids)
}

fn order(store: &TemplateStore) -> Vec<ComponentId> {
    store.components().iter().map(|c| c.id().clone()).collect()
}

// addElement

#[test]
fn test_add_button_defaults() {
    let mut store = TemplateStore::default();
    let id = store.add_element(ComponentType::Button, None);
    let button = store.component(&id).unwrap();
    assert_eq!(button.kind(), ComponentType::Button);
    assert_eq!(button.content.as_deref(), Some("Button"));
    assert_eq!(button.href.as_deref(), Some("#"));
}

#[test]
fn test_add_at_position() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Divider]);
    let heading = store.add_element(ComponentType::Heading, Some(1));
    assert_eq!(order(&store), vec![ids[0].clone(), heading, ids[1].clone()]);
}

#[test]
fn test_add_at_end_position() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    let image = store.add_element(ComponentType::Image, Some(1));
    assert_eq!(order(&store), vec![ids[0].clone(), image]);
}

#[test]
fn test_add_out_of_range_appends() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    let link = store.add_element(ComponentType::Link, Some(7));
    assert_eq!(order(&store), vec![ids[0].clone(), link]);
}

// reorderElement

#[test]
fn test_reorder_first_to_last() {
    let (mut store, ids) = store_with(&[
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Image,
    ]);
    store.reorder_element(0, 2);
    assert_eq!(
        order(&store),
        vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]
    );
}

#[test]
fn test_reorder_last_to_first() {
    let (mut store, ids) = store_with(&[
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Image,
    ]);
    store.reorder_element(2, 0);
    assert_eq!(
        order(&store),
        vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]
    );
}

#[test]
fn test_reorder_out_of_range_keeps_order() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.reorder_element(0, 5);
    store.reorder_element(9, 0);
    assert_eq!(order(&store), ids);
}

// removeElement

#[test]
fn test_remove_element() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.remove_element(&ids[0]);
    assert_eq!(order(&store), vec![ids[1].clone()]);
}

#[test]
fn test_remove_missing_leaves_components() {
    let (mut store, _) = store_with(&[ComponentType::Text, ComponentType::Button]);
    let before = store.components().to_vec();
    store.remove_element(&ComponentId::from("nope"));
    assert_eq!(store.components(), before.as_slice());
}

#[test]
fn test_remove_selected_clears_selection() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.select_element(Some(&ids[1]));
    store.remove_element(&ids[1]);
    assert!(store.selected_element().is_none());
}

#[test]
fn test_remove_other_keeps_selection() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.select_element(Some(&ids[1]));
    store.remove_element(&ids[0]);
    assert_eq!(store.selected_element().unwrap().id(), &ids[1]);
}

// duplicateElement

#[test]
fn test_duplicate_appends_copy_without_history() {
    let (mut store, ids) = store_with(&[
        ComponentType::Button,
        ComponentType::Text,
    ]);
    let past = store.undo_count();

    let copy_id = store.duplicate_element(&ids[0]).unwrap();

    assert_eq!(store.undo_count(), past);
    assert_eq!(store.components().len(), 3);
    assert_eq!(store.index_of(&copy_id), Some(2));

    let original = store.component(&ids[0]).unwrap();
    let copy = store.component(&copy_id).unwrap();
    assert_ne!(copy.id(), original.id());
    assert_eq!(copy.kind(), original.kind());
    assert_eq!(copy.content, original.content);
    assert_eq!(copy.style, original.style);
    assert_eq!(copy.href, original.href);
}

#[test]
fn test_duplicate_missing_is_noop() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    assert!(store.duplicate_element(&ComponentId::from("nope")).is_none());
    assert_eq!(order(&store), ids);
}

#[test]
fn test_duplicate_discards_redo() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.undo();
    assert!(store.can_redo());
    store.duplicate_element(&ids[0]);
    assert!(!store.can_redo());
}

#[test]
fn test_duplicate_recorded_when_enabled() {
    let mut store = TemplateStore::new(StoreOptions {
        record_duplicates: true,
        ..Default::default()
    });
    let id = store.add_element(ComponentType::Text, None);
    store.duplicate_element(&id);
    assert_eq!(store.undo_count(), 2);
    assert_eq!(store.history().past().last().map(|s| s.components.len()), Some(2));

    store.undo();
    store.undo();
    assert_eq!(order(&store), vec![id]);
}

// updateElement / updateCanvasStyle

#[test]
fn test_update_element_shallow_merge() {
    let (mut store, ids) = store_with(&[ComponentType::Button]);
    store.update_element(&ids[0], ComponentPatch::content("Sign up"));

    let button = store.component(&ids[0]).unwrap();
    assert_eq!(button.content.as_deref(), Some("Sign up"));
    assert_eq!(button.href.as_deref(), Some("#"));
    assert_eq!(button.style["backgroundColor"], "#5e6ad2");
}

#[test]
fn test_update_missing_is_noop() {
    let (mut store, _) = store_with(&[ComponentType::Button]);
    let before = store.components().to_vec();
    store.update_element(&ComponentId::from("nope"), ComponentPatch::content("x"));
    assert_eq!(store.components(), before.as_slice());
}

#[test]
fn test_selection_sees_updates() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    store.select_element(Some(&ids[0]));
    store.update_element(&ids[0], ComponentPatch::content("Hello"));
    assert_eq!(
        store.selected_element().unwrap().content.as_deref(),
        Some("Hello")
    );
}

#[test]
fn test_update_canvas_style() {
    let mut store = TemplateStore::default();
    store.update_canvas_style(CanvasStylePatch {
        font_family: Some("Georgia".into()),
        ..Default::default()
    });
    assert_eq!(store.canvas_style().font_family.as_deref(), Some("Georgia"));
    assert_eq!(store.canvas_style().background_color, "#1c1919");
    assert_eq!(store.undo_count(), 1);
}

// Selection, view mode, name

#[test]
fn test_select_missing_clears() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    store.select_element(Some(&ids[0]));
    store.select_element(Some(&ComponentId::from("nope")));
    assert!(store.selected_element().is_none());

    store.select_element(Some(&ids[0]));
    store.select_element(None);
    assert!(store.selected_element().is_none());
}

#[test]
fn test_non_history_operations_leave_past() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Image]);
    let past = store.undo_count();

    store.select_element(Some(&ids[0]));
    store.switch_view_mode(ViewMode::Mobile);
    store.set_name("Newsletter");
    store.duplicate_element(&ids[1]);

    assert_eq!(store.undo_count(), past);
    assert_eq!(store.view_mode(), ViewMode::Mobile);
    assert_eq!(store.name(), "Newsletter");
}

#[test]
fn test_view_mode_transitions() {
    let mut store = TemplateStore::default();
    for mode in [ViewMode::Code, ViewMode::Mobile, ViewMode::Desktop, ViewMode::Code] {
        store.switch_view_mode(mode);
        assert_eq!(store.view_mode(), mode);
    }
}

// Placeholders

#[test]
fn test_placeholders() {
    let mut store = TemplateStore::default();
    store.add_placeholder(Placeholder::new("first_name", "Recipient first name"));
    store.add_placeholder(Placeholder::new("company", "Company"));
    assert_eq!(store.placeholders().len(), 2);

    store.remove_placeholder("first_name");
    assert_eq!(store.placeholders(), &[Placeholder::new("company", "Company")]);
    assert_eq!(store.undo_count(), 3);
}

#[test]
fn test_add_placeholder_existing_key_replaces_description() {
    let mut store = TemplateStore::default();
    store.add_placeholder(Placeholder::new("name", "old"));
    store.add_placeholder(Placeholder::new("name", "new"));
    assert_eq!(store.placeholders(), &[Placeholder::new("name", "new")]);
}

// History

#[test]
fn test_past_grows_by_one_per_mutation() {
    let mut store = TemplateStore::default();
    let a = store.add_element(ComponentType::Text, None);
    assert_eq!(store.undo_count(), 1);
    store.add_element(ComponentType::Button, Some(0));
    assert_eq!(store.undo_count(), 2);
    store.reorder_element(0, 1);
    assert_eq!(store.undo_count(), 3);
    store.reorder_element(0, 99);
    assert_eq!(store.undo_count(), 4);
    store.remove_element(&ComponentId::from("nope"));
    assert_eq!(store.undo_count(), 5);
    store.remove_element(&a);
    assert_eq!(store.undo_count(), 6);
}

#[test]
fn test_history_records_resulting_state() {
    let mut store = TemplateStore::default();
    let id = store.add_element(ComponentType::Text, None);

    let past: Vec<_> = store.history().past().collect();
    assert_eq!(past.len(), 1);
    assert!(past[0].matches(store.document()));
    assert_eq!(past[0].components[0].id(), &id);
}

#[test]
fn test_undo_restores_newest_entry() {
    let mut store = TemplateStore::default();
    let a = store.add_element(ComponentType::Text, None);

    // The newest entry is the state just produced, so a single undo keeps it
    store.undo();
    assert!(store.component(&a).is_some());
    assert_eq!(order(&store), vec![a.clone()]);
    assert_eq!((store.undo_count(), store.redo_count()), (0, 1));
}

#[test]
fn test_undo_steps_back_through_recorded_states() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.undo();
    assert_eq!(order(&store), ids);
    store.undo();
    assert_eq!(order(&store), vec![ids[0].clone()]);
}

#[test]
fn test_undo_then_redo_restores_triple() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.update_canvas_style(CanvasStylePatch {
        width: Some(600.0),
        ..Default::default()
    });
    store.add_placeholder(Placeholder::new("name", "Name"));
    store.update_element(&ids[1], ComponentPatch::content("Go"));

    let before = Snapshot::from(store.document());
    store.undo();
    store.redo();
    assert!(before.matches(store.document()));

    store.undo();
    store.undo();
    assert_eq!(store.components()[1].content.as_deref(), Some("Button"));
    assert_eq!(store.placeholders().len(), 1);
    let after_two_undos = Snapshot::from(store.document());
    store.undo();
    store.redo();
    assert!(after_two_undos.matches(store.document()));
}

#[test]
fn test_undo_empty_is_noop() {
    let mut store = TemplateStore::default();
    let before = store.document().clone();
    store.undo();
    assert_eq!(store.document(), &before);
    assert_eq!(store.redo_count(), 0);
}

#[test]
fn test_redo_empty_is_noop() {
    let (mut store, _) = store_with(&[ComponentType::Text]);
    let before = store.document().clone();
    let past = store.undo_count();
    store.redo();
    assert_eq!(store.document(), &before);
    assert_eq!(store.undo_count(), past);
}

#[test]
fn test_mutation_after_undo_clears_future() {
    let mut store = TemplateStore::default();
    store.add_element(ComponentType::Text, None);
    store.undo();
    assert!(store.can_redo());
    store.add_element(ComponentType::Image, None);
    assert!(!store.can_redo());
    store.redo();
    let kinds: Vec<_> = store.components().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![ComponentType::Text, ComponentType::Image]);
}

#[test]
fn test_undo_transfers_one_entry() {
    let (mut store, _) = store_with(&[
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Image,
    ]);
    store.undo();
    store.undo();
    assert_eq!((store.undo_count(), store.redo_count()), (1, 2));
    assert_eq!(store.components().len(), 2);
    store.redo();
    assert_eq!((store.undo_count(), store.redo_count()), (2, 1));
    assert_eq!(store.components().len(), 3);
}

#[test]
fn test_undo_keeps_name_and_view_mode() {
    let mut store = TemplateStore::default();
    store.add_element(ComponentType::Text, None);
    store.set_name("Launch");
    store.switch_view_mode(ViewMode::Code);
    store.undo();
    assert_eq!(store.name(), "Launch");
    assert_eq!(store.view_mode(), ViewMode::Code);
}

#[test]
fn test_undo_clears_dangling_selection() {
    let mut store = TemplateStore::default();
    store.add_element(ComponentType::Text, None);
    let id = store.add_element(ComponentType::Button, None);
    store.select_element(Some(&id));
    store.undo();
    assert_eq!(store.selected_element().map(|c| c.id()), Some(&id));
    store.undo();
    assert!(store.selected_element().is_none());
}

#[test]
fn test_reset_discards_history() {
    let (mut store, _) = store_with(&[ComponentType::Text, ComponentType::Button]);
    store.set_name("Promo");
    store.reset_template();

    assert_eq!(store.document(), &Document::default());
    store.undo();
    assert_eq!(store.document(), &Document::default());
    assert!(!store.can_undo());
    assert!(!store.can_redo());
}

#[test]
fn test_load_template_replaces_document() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    store.select_element(Some(&ids[0]));

    let incoming = Document::named("Imported")
        .with_view_mode(ViewMode::Mobile)
        .with_placeholder(Placeholder::new("code", "Coupon"));
    store.load_template(incoming.clone());

    assert_eq!(store.document(), &incoming);
    assert!(store.selected_element().is_none());
    assert!(!store.can_undo());
}

#[test]
fn test_load_template_repairs_repeated_ids() {
    let shared = ComponentId::from("dup");
    let incoming = Document::default()
        .with_component(Component::bare(shared.clone(), ComponentType::Text))
        .with_component(Component::bare(shared.clone(), ComponentType::Image))
        .with_placeholder(Placeholder::new("name", "First"))
        .with_placeholder(Placeholder::new("name", "Second"));

    let mut store = TemplateStore::default();
    store.load_template(incoming);

    let second = store.components()[1].id().clone();
    assert_ne!(second, shared);
    assert_eq!(store.index_of(&second), Some(1));
    assert_eq!(store.placeholders(), &[Placeholder::new("name", "Second")]);

    // Reordering through the fresh id moves the image, not the text
    let from = store.index_of(&second).unwrap();
    store.reorder_element(from, 0);
    assert_eq!(store.components()[0].kind(), ComponentType::Image);
}

#[test]
fn test_with_document_repairs_repeated_ids() {
    let incoming = Document::default()
        .with_component(Component::bare("dup".into(), ComponentType::Text))
        .with_component(Component::bare("dup".into(), ComponentType::Text));
    let store = TemplateStore::with_document(incoming, StoreOptions::default());
    assert_ne!(store.components()[0].id(), store.components()[1].id());
}

#[test]
fn test_save_snapshot_records_current_state() {
    let mut store = TemplateStore::default();
    store.save_snapshot();
    assert_eq!(store.undo_count(), 1);
    store.undo();
    assert_eq!(store.document(), &Document::default());
}

#[test]
fn test_history_limit_from_options() {
    let mut store = TemplateStore::new(StoreOptions {
        history_limit: 3,
        ..Default::default()
    });
    for _ in 0..5 {
        store.add_element(ComponentType::Divider, None);
    }
    assert_eq!(store.undo_count(), 3);
    while store.can_undo() {
        store.undo();
    }
    // Oldest kept entry is the state after the third add
    assert_eq!(store.components().len(), 3);
}

// Listeners

#[test]
fn test_listeners_see_every_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut store = TemplateStore::default();
    store.subscribe(move |change: Change, doc: &Document| {
        sink.borrow_mut().push((change, doc.components().len()));
    });

    store.add_element(ComponentType::Text, None);
    let id = store.add_element(ComponentType::Button, None);
    store.select_element(Some(&id));
    store.switch_view_mode(ViewMode::Code);
    store.undo();
    store.undo();
    // Empty history, nothing to report
    store.undo();

    assert_eq!(
        *seen.borrow(),
        vec![
            (Change::Components, 1),
            (Change::Components, 2),
            (Change::Selection, 2),
            (Change::ViewMode, 2),
            (Change::History, 2),
            (Change::History, 1),
        ]
    );
}

// Drag and drop

#[test]
fn test_drag_source_parse() {
    assert_eq!(
        DragSource::parse("new-button").unwrap(),
        DragSource::Palette(ComponentType::Button)
    );
    assert_eq!(
        DragSource::parse("abc123").unwrap(),
        DragSource::Existing(ComponentId::from("abc123"))
    );
    assert!(DragSource::parse("new-marquee").is_err());
    assert_eq!(DragSource::palette_id(ComponentType::TwoColumn), "new-2-column");
}

#[test]
fn test_drop_target_parse() {
    assert_eq!(DropTarget::parse("canvas"), DropTarget::Canvas);
    assert_eq!(
        DropTarget::parse("x1"),
        DropTarget::Component(ComponentId::from("x1"))
    );
}

#[test]
fn test_drop_palette_item_after_target() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Image]);
    let mut dnd = DragController::default();
    let source = DragSource::Palette(ComponentType::Button);

    dnd.drag_start(&mut store, source.clone());
    assert_eq!(dnd.active_component(), Some(ComponentType::Button));

    let target = DropTarget::Component(ids[0].clone());
    let new_id = dnd.drag_end(&mut store, &source, Some(&target)).unwrap();

    assert_eq!(store.index_of(&new_id), Some(1));
    assert!(dnd.active().is_none());
}

#[test]
fn test_drop_on_unknown_component_appends() {
    let (mut store, _) = store_with(&[ComponentType::Text]);
    let mut dnd = DragController::default();
    let source = DragSource::Palette(ComponentType::Link);
    let target = DropTarget::Component(ComponentId::from("ghost"));
    let new_id = dnd.drag_end(&mut store, &source, Some(&target)).unwrap();
    assert_eq!(store.index_of(&new_id), Some(1));
}

#[test]
fn test_drop_on_canvas_appends() {
    let (mut store, _) = store_with(&[ComponentType::Text, ComponentType::Image]);
    let mut dnd = DragController::default();
    let source = DragSource::Palette(ComponentType::Divider);
    let new_id = dnd
        .drag_end(&mut store, &source, Some(&DropTarget::Canvas))
        .unwrap();
    assert_eq!(store.index_of(&new_id), Some(2));
}

#[test]
fn test_drop_without_target() {
    let mut store = TemplateStore::default();
    let mut dnd = DragController::default();
    let source = DragSource::Palette(ComponentType::Heading);

    // Empty document accepts the drop
    assert!(dnd.drag_end(&mut store, &source, None).is_some());
    assert_eq!(store.components().len(), 1);

    // Non-empty document ignores it
    assert!(dnd.drag_end(&mut store, &source, None).is_none());
    assert_eq!(store.components().len(), 1);
}

#[test]
fn test_drag_existing_selects_and_reorders() {
    let (mut store, ids) = store_with(&[
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Image,
    ]);
    let mut dnd = DragController::default();
    let source = DragSource::Existing(ids[0].clone());

    dnd.drag_start(&mut store, source.clone());
    assert_eq!(store.selected_element().unwrap().id(), &ids[0]);

    dnd.drag_over(&mut store, &source, Some(&DropTarget::Component(ids[2].clone())));
    assert_eq!(
        order(&store),
        vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]
    );

    // Dropping an existing item adds nothing
    assert!(dnd.drag_end(&mut store, &source, Some(&DropTarget::Canvas)).is_none());
    assert_eq!(store.components().len(), 3);
}

#[test]
fn test_drag_over_self_or_canvas_does_nothing() {
    let (mut store, ids) = store_with(&[ComponentType::Text, ComponentType::Button]);
    let past = store.undo_count();
    let mut dnd = DragController::default();
    let source = DragSource::Existing(ids[0].clone());

    dnd.drag_over(&mut store, &source, Some(&DropTarget::Component(ids[0].clone())));
    dnd.drag_over(&mut store, &source, Some(&DropTarget::Canvas));
    dnd.drag_over(&mut store, &source, None);

    assert_eq!(store.undo_count(), past);
    assert_eq!(order(&store), ids);
}

// Property editor

#[test]
fn test_apply_style_to_selection() {
    let (mut store, ids) = store_with(&[ComponentType::Text]);
    store.select_element(Some(&ids[0]));
    apply_style(&mut store, "fontSize", json!("20px"));

    let text = store.component(&ids[0]).unwrap();
    assert_eq!(text.style["fontSize"], "20px");
    assert_eq!(text.style["color"], "#000000");
    assert_eq!(store.canvas_style(), &CanvasStyle::default());
}

#[test]
fn test_apply_style_to_canvas_without_selection() {
    let mut store = TemplateStore::default();
    assert_eq!(PropertyTarget::current(&store), PropertyTarget::Canvas);
    apply_style(&mut store, "backgroundColor", json!("#ffffff"));
    apply_style(&mut store, "borderRadius", json!("8px"));
    assert_eq!(store.canvas_style().background_color, "#ffffff");
    assert_eq!(store.canvas_style().extra["borderRadius"], "8px");
    assert_eq!(store.undo_count(), 2);
}
