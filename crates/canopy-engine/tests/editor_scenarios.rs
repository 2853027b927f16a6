//! End-to-end editor scenarios: command sequences over a full section
//! list, checked for the two list invariants (dense indices, selection
//! coherence) after every step.

use canopy_engine::{
    parse_document, serialize_document, Cmd, DragReorder, EditorSession, MemoryStore,
    PageConfig, Section, SectionId, SectionKind, SectionListController, Theme,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn full_page() -> Vec<Section> {
    SectionKind::ALL.iter().map(|&k| Section::new(k)).collect()
}

/// After any command, the selection (when set) must be a valid index.
fn assert_selection_in_range(controller: &SectionListController) {
    if let Some(sel) = controller.selected() {
        assert!(
            sel < controller.len(),
            "selection {sel} out of range for list of {}",
            controller.len()
        );
    }
}

#[rstest]
#[case(vec![
    Cmd::Insert { kind: SectionKind::Hero, at: 0 },
    Cmd::Insert { kind: SectionKind::Faq, at: 99 },
    Cmd::Duplicate { index: 0 },
    Cmd::Move { from: 0, to: 2 },
    Cmd::Delete { index: 1 },
    Cmd::ToggleVisibility { index: 0 },
])]
#[case(vec![
    Cmd::Insert { kind: SectionKind::Cta, at: 0 },
    Cmd::Delete { index: 0 },
    Cmd::Delete { index: 0 },
    Cmd::Move { from: 3, to: 1 },
    Cmd::Select { index: Some(9) },
])]
#[case(vec![
    Cmd::Select { index: Some(0) },
    Cmd::Move { from: 0, to: 0 },
    Cmd::Duplicate { index: 99 },
    Cmd::Insert { kind: SectionKind::Team, at: 1 },
    Cmd::Move { from: 1, to: 99 },
])]
fn test_selection_stays_in_range_under_command_sequences(#[case] commands: Vec<Cmd>) {
    let mut controller = SectionListController::new();
    for cmd in commands {
        controller.apply(cmd);
        assert_selection_in_range(&controller);
    }
}

#[test]
fn test_selected_section_identity_survives_structural_edits() {
    let mut controller = SectionListController::from_sections(full_page());
    controller.apply(Cmd::Select { index: Some(4) });
    let tracked: SectionId = controller.selected_section().unwrap().id;

    let commands = vec![
        Cmd::Insert {
            kind: SectionKind::Cta,
            at: 0,
        },
        Cmd::Move { from: 0, to: 8 },
        Cmd::Duplicate { index: 2 },
        Cmd::Delete { index: 0 },
        Cmd::Move { from: 9, to: 1 },
    ];
    for cmd in commands {
        controller.apply(cmd);
        // insert/duplicate re-select the new section; re-select the
        // tracked one to keep following it, the way a user keeps one
        // panel open while reshaping the list
        if let Some(pos) = controller.sections().iter().position(|s| s.id == tracked) {
            controller.apply(Cmd::Select { index: Some(pos) });
            assert_eq!(controller.selected_section().unwrap().id, tracked);
        }
        assert_selection_in_range(&controller);
    }
}

#[test]
fn test_move_adjustments_match_tracking_by_identity() {
    // Selection adjustment arithmetic must agree with literally tracking
    // the selected section's id through the reorder.
    for from in 0..5 {
        for to in 0..5 {
            for sel in 0..5 {
                let mut controller = SectionListController::from_sections(full_page());
                controller.apply(Cmd::Select { index: Some(sel) });
                let tracked = controller.selected_section().unwrap().id;

                controller.apply(Cmd::Move { from, to });

                let expected = controller
                    .sections()
                    .iter()
                    .position(|s| s.id == tracked)
                    .unwrap();
                assert_eq!(
                    controller.selected(),
                    Some(expected),
                    "move({from}, {to}) with selection {sel}"
                );
            }
        }
    }
}

#[test]
fn test_full_page_document_round_trip() {
    let config = PageConfig {
        sections: full_page(),
        theme: Theme::default(),
    };

    let json = serialize_document(&config).unwrap();
    let restored = parse_document(&json).unwrap();

    assert_eq!(restored, config);
}

#[test]
fn test_drag_reorder_session_end_to_end() {
    let config = PageConfig {
        sections: full_page(),
        theme: Theme::default(),
    };
    let store = MemoryStore::with_document(serialize_document(&config).unwrap());
    let mut session = EditorSession::open(store).unwrap();
    let mut drag = DragReorder::new();

    session.controller().apply(Cmd::Select { index: Some(2) });
    drag.drag_start(0);
    drag.drag_end(4, session.controller()).unwrap();

    assert_eq!(session.sections().selected(), Some(1));
    session.save().unwrap();
}
