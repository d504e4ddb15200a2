//! Property-based tests for the game core.
//!
//! These tests use proptest to drive the history and presenters through
//! arbitrary sequences of user intents and check that the invariants hold
//! after every step.

use proptest::prelude::*;
use tictactoe_timeline::core::{evaluate, Board, Cell, History, Mark, CELL_COUNT};
use tictactoe_timeline::presenter::{render, SortOrder};

#[derive(Clone, Debug)]
enum Intent {
    Click(usize),
    Jump(usize),
    Reset,
}

prop_compose! {
    fn arbitrary_cell()(variant in 0..3u8) -> Cell {
        match variant {
            0 => Cell::Empty,
            1 => Cell::Marked(Mark::X),
            _ => Cell::Marked(Mark::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::collection::vec(arbitrary_cell(), CELL_COUNT)) -> Board {
        cells
            .iter()
            .enumerate()
            .fold(Board::new(), |board, (i, cell)| match cell {
                Cell::Empty => board,
                Cell::Marked(mark) => board.with(i, *mark),
            })
    }
}

fn arbitrary_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        6 => (0..CELL_COUNT + 1).prop_map(Intent::Click),
        3 => (0..12usize).prop_map(Intent::Jump),
        1 => Just(Intent::Reset),
    ]
}

fn apply(history: &mut History, intent: &Intent) {
    match intent {
        Intent::Click(cell) => {
            let _ = history.apply_move(*cell);
        }
        Intent::Jump(index) => {
            let _ = history.jump_to(*index);
        }
        Intent::Reset => history.reset(),
    }
}

fn assert_consistent(history: &History) -> Result<(), TestCaseError> {
    let entries = history.entries();
    prop_assert!(!entries.is_empty());
    prop_assert!(history.current_index() < entries.len());
    prop_assert_eq!(entries[0].board, Board::new());
    prop_assert_eq!(entries[0].last_move, None);

    for k in 1..entries.len() {
        let cell = entries[k].last_move.expect("later entries record their move");
        let mark = if (k - 1) % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(entries[k - 1].board.with(cell, mark), entries[k].board);
        prop_assert_eq!(entries[k - 1].board.get(cell), Some(Cell::Empty));
    }
    Ok(())
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(board in arbitrary_board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn history_stays_consistent(intents in prop::collection::vec(arbitrary_intent(), 0..40)) {
        let mut history = History::new();
        for intent in &intents {
            apply(&mut history, intent);
            assert_consistent(&history)?;
        }
    }

    #[test]
    fn valid_move_extends_from_current(
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
        cell in 0..CELL_COUNT,
    ) {
        let mut history = History::new();
        for intent in &intents {
            apply(&mut history, intent);
        }

        let before = history.clone();
        let current = before.current_index();

        match history.apply_move(cell) {
            Ok(()) => {
                prop_assert_eq!(history.len(), current + 2);
                prop_assert_eq!(history.current_index(), current + 1);
                prop_assert_eq!(&history.entries()[..=current], &before.entries()[..=current]);
            }
            Err(_) => {
                prop_assert_eq!(history, before);
            }
        }
    }

    #[test]
    fn invalid_move_changes_nothing(intents in prop::collection::vec(arbitrary_intent(), 0..30)) {
        let mut history = History::new();
        for intent in &intents {
            apply(&mut history, intent);
        }

        let board = history.current().board;
        let decided = evaluate(&board).is_final();
        for cell in 0..CELL_COUNT {
            if decided || !board.is_empty_at(cell) {
                let before = history.clone();
                prop_assert!(history.apply_move(cell).is_err());
                prop_assert_eq!(&history, &before);
            }
        }
    }

    #[test]
    fn jump_never_mutates_entries(
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
        target in 0..12usize,
    ) {
        let mut history = History::new();
        for intent in &intents {
            apply(&mut history, intent);
        }

        let entries = history.entries().to_vec();
        let len = history.len();
        let result = history.jump_to(target);

        prop_assert_eq!(history.entries(), entries.as_slice());
        if target < len {
            prop_assert!(result.is_ok());
            prop_assert_eq!(history.current_index(), target);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn reset_always_returns_to_start(intents in prop::collection::vec(arbitrary_intent(), 0..30)) {
        let mut history = History::new();
        for intent in &intents {
            apply(&mut history, intent);
        }

        history.reset();

        prop_assert_eq!(history, History::new());
    }

    #[test]
    fn branch_replay_is_deterministic(
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
        first in 0..CELL_COUNT,
    ) {
        let mut history = History::new();
        history.apply_move(first).unwrap();
        let after_first = history.current().board;

        for intent in &intents {
            if !matches!(intent, Intent::Reset) {
                apply(&mut history, intent);
            }
        }

        history.jump_to(0).unwrap();
        history.apply_move(first).unwrap();

        prop_assert_eq!(history.current().board, after_first);
        prop_assert_eq!(history.len(), 2);
    }

    #[test]
    fn move_log_matches_history(
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
        descending in any::<bool>(),
    ) {
        let mut history = History::new();
        for intent in &intents {
            apply(&mut history, intent);
        }
        let before = history.clone();
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };

        let rows = render(history.entries(), history.current_index(), order);

        prop_assert_eq!(&history, &before);
        prop_assert_eq!(rows.len(), history.len());
        prop_assert_eq!(rows.iter().filter(|row| !row.clickable).count(), 1);

        let inert = rows.iter().find(|row| !row.clickable).unwrap();
        prop_assert_eq!(inert.step, history.current_index());

        let mut ascending =
            render(history.entries(), history.current_index(), SortOrder::Ascending);
        if descending {
            ascending.reverse();
        }
        prop_assert_eq!(rows, ascending);
    }
}
