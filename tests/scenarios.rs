//! End-to-end game scenarios through the public API.

use tictactoe_timeline::controller::GameController;
use tictactoe_timeline::core::{evaluate, Board, Cell, History, InvalidMove, Mark, Outcome};
use tictactoe_timeline::presenter::{render, DisplayRow, SortOrder};

fn played(moves: &[usize]) -> History {
    let mut history = History::new();
    for &cell in moves {
        history.apply_move(cell).unwrap();
    }
    history
}

#[test]
fn first_move_in_center() {
    let history = played(&[4]);

    let mut expected = [Cell::Empty; 9];
    expected[4] = Cell::Marked(Mark::X);

    assert_eq!(history.current().board.cells(), &expected);
    assert_eq!(history.current_index(), 1);
    assert_eq!(history.outcome(), Outcome::InProgress);
}

#[test]
fn x_wins_left_column_and_board_locks() {
    let mut history = played(&[0, 1, 3, 4, 6]);

    assert_eq!(
        evaluate(&history.current().board),
        Outcome::Win {
            mark: Mark::X,
            line: [0, 3, 6]
        }
    );
    for cell in [2, 5, 7, 8] {
        assert_eq!(history.apply_move(cell), Err(InvalidMove::GameOver));
    }
    assert_eq!(history.len(), 6);
}

#[test]
fn full_board_without_line_is_draw() {
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7
    let mut history = played(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(history.outcome(), Outcome::Draw);
    assert_eq!(history.len(), 10);
    for cell in 0..9 {
        assert!(history.apply_move(cell).is_err());
    }
}

#[test]
fn playing_from_the_past_discards_the_future() {
    let mut history = played(&[4, 0, 8]);
    let discarded = history.entries()[2];

    history.jump_to(1).unwrap();
    history.apply_move(5).unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history.current_index(), 2);
    assert!(!history.entries().contains(&discarded));
    assert_eq!(history.entries()[2].last_move, Some(5));
}

#[test]
fn descending_log_with_current_in_the_middle() {
    let history = played(&[4, 0]);

    let rows = render(history.entries(), 1, SortOrder::Descending);

    assert_eq!(
        rows,
        vec![
            DisplayRow {
                step: 2,
                label: "Go to move #2 (1, 1)".to_string(),
                clickable: true,
            },
            DisplayRow {
                step: 1,
                label: "You are at move #1 (2, 2)".to_string(),
                clickable: false,
            },
            DisplayRow {
                step: 0,
                label: "Go to game start".to_string(),
                clickable: true,
            },
        ]
    );
}

#[test]
fn controller_session_round_trip() {
    let mut game = GameController::new();
    game.on_player_name_change(Mark::X, "Ada");
    game.on_player_name_change(Mark::O, "Bea");

    for cell in [4, 0, 8] {
        game.on_cell_click(cell);
    }
    assert_eq!(game.status().to_string(), "Next player: Bea");

    game.on_toggle_sort();
    let view = game.view();
    assert_eq!(view.moves[0].label, "You are at move #3 (3, 3)");
    assert!(view.moves.iter().skip(1).all(|row| row.clickable));

    let target = view.moves[2].step;
    game.on_history_row_click(target);
    assert_eq!(game.current().board, Board::new().with(4, Mark::X));

    game.on_cell_click(2);
    assert_eq!(game.history().len(), 3);

    game.on_reset();
    let view = game.view();
    assert_eq!(view.board, Board::new());
    assert_eq!(view.sort, SortOrder::Ascending);
    assert!(!view.reset_enabled);
    assert_eq!(view.status.to_string(), "Next player: Ada");
}
