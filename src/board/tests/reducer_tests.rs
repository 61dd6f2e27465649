//! Unit tests for the board reducer.

use crate::board::domain::{
    BoardAction, BoardState, ColumnId, DragResult, DraggableLocation, IgnoreReason, NewTask,
    TransitionOutcome,
};
use rstest::rstest;

use super::fixtures::{board_with, created_at, ids_in, task_id, three_todos, with_task};

fn drag(from: (ColumnId, usize), to: (ColumnId, usize)) -> BoardAction {
    BoardAction::DragEnd(DragResult::dropped(
        DraggableLocation::new(from.0, from.1),
        DraggableLocation::new(to.0, to.1),
    ))
}

fn assert_ignored(state: &BoardState, action: BoardAction, reason: IgnoreReason) {
    let transition = state.reduce(action);
    assert_eq!(transition.outcome, TransitionOutcome::Ignored(reason));
    assert_eq!(&transition.state, state);
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t \n")]
fn blank_pending_input_adds_nothing(#[case] input: &str) {
    let typed = board_with(&["Existing"])
        .reduce(BoardAction::SetPendingInput {
            text: input.to_owned(),
        })
        .state;

    assert_ignored(
        &typed,
        BoardAction::AddTask(NewTask {
            id: task_id(7),
            created_at: created_at(),
        }),
        IgnoreReason::BlankText,
    );
}

#[rstest]
fn add_appends_to_todo_and_audit_list() {
    let state = with_task(&board_with(&["First"]), 2, "Buy milk");

    let todo = state.column(ColumnId::Todo);
    let last = todo.last().expect("task in todo");
    let audit_last = state.all_tasks().last().expect("task in audit list");

    assert_eq!(todo.len(), 2);
    assert_eq!(state.all_tasks().len(), 2);
    assert_eq!(last, audit_last);
    assert_eq!(last.id(), task_id(2));
    assert_eq!(last.text().as_str(), "Buy milk");
    assert_eq!(last.status(), ColumnId::Todo);
    assert_eq!(last.created_at(), created_at());
    assert_eq!(state.pending_input(), "");
}

#[rstest]
fn set_pending_input_only_touches_the_field(three_todos: BoardState) {
    let transition = three_todos.reduce(BoardAction::SetPendingInput {
        text: "draft".to_owned(),
    });

    assert!(transition.outcome.is_applied());
    assert_eq!(transition.state.pending_input(), "draft");
    assert_eq!(transition.state.columns(), three_todos.columns());
    assert_eq!(transition.state.all_tasks(), three_todos.all_tasks());
}

#[rstest]
fn confirm_edit_replaces_text_in_place(three_todos: BoardState) {
    let transition = three_todos.reduce(BoardAction::ConfirmEdit {
        column: ColumnId::Todo,
        id: task_id(2),
        text: Some("Write the quarterly report".to_owned()),
    });
    let state = transition.state;

    assert!(transition.outcome.is_applied());
    assert_eq!(ids_in(&state, ColumnId::Todo), ids_in(&three_todos, ColumnId::Todo));
    let edited = state.column(ColumnId::Todo).get(1).expect("edited task");
    assert_eq!(edited.text().as_str(), "Write the quarterly report");
    assert_eq!(edited.status(), ColumnId::Todo);
    let audit = state.audit_entry(task_id(2)).expect("audit entry");
    assert_eq!(audit.text().as_str(), "Write the quarterly report");
}

#[rstest]
#[case(None)]
#[case(Some(String::new()))]
#[case(Some("   ".to_owned()))]
fn confirm_edit_ignores_absent_or_blank_text(
    three_todos: BoardState,
    #[case] text: Option<String>,
) {
    assert_ignored(
        &three_todos,
        BoardAction::ConfirmEdit {
            column: ColumnId::Todo,
            id: task_id(1),
            text,
        },
        IgnoreReason::BlankText,
    );
}

#[rstest]
fn confirm_edit_of_unknown_task_is_ignored(three_todos: BoardState) {
    assert_ignored(
        &three_todos,
        BoardAction::ConfirmEdit {
            column: ColumnId::Todo,
            id: task_id(42),
            text: Some("anything".to_owned()),
        },
        IgnoreReason::TaskNotFound,
    );
}

#[rstest]
fn confirm_edit_after_delete_still_updates_audit_entry(three_todos: BoardState) {
    let deleted = three_todos
        .reduce(BoardAction::DeleteTask {
            column: ColumnId::Todo,
            id: task_id(1),
        })
        .state;

    let transition = deleted.reduce(BoardAction::ConfirmEdit {
        column: ColumnId::Todo,
        id: task_id(1),
        text: Some("Buy oat milk".to_owned()),
    });

    assert!(transition.outcome.is_applied());
    assert_eq!(transition.state.columns(), deleted.columns());
    let audit = transition.state.audit_entry(task_id(1)).expect("audit entry");
    assert_eq!(audit.text().as_str(), "Buy oat milk");
}

#[rstest]
fn delete_keeps_order_and_audit_list(three_todos: BoardState) {
    let transition = three_todos.reduce(BoardAction::DeleteTask {
        column: ColumnId::Todo,
        id: task_id(2),
    });

    assert!(transition.outcome.is_applied());
    assert_eq!(
        ids_in(&transition.state, ColumnId::Todo),
        vec![task_id(1), task_id(3)]
    );
    assert_eq!(transition.state.all_tasks(), three_todos.all_tasks());
}

#[rstest]
fn delete_from_wrong_column_is_ignored(three_todos: BoardState) {
    assert_ignored(
        &three_todos,
        BoardAction::DeleteTask {
            column: ColumnId::Completed,
            id: task_id(1),
        },
        IgnoreReason::TaskNotFound,
    );
}

#[rstest]
fn toggle_round_trip_moves_between_todo_and_in_progress(three_todos: BoardState) {
    let activated = three_todos.reduce(BoardAction::ToggleActive {
        column: ColumnId::Todo,
        id: task_id(1),
    });
    assert!(activated.outcome.is_applied());
    let active = activated.state;
    assert_eq!(ids_in(&active, ColumnId::InProgress), vec![task_id(1)]);
    assert_eq!(ids_in(&active, ColumnId::Todo), vec![task_id(2), task_id(3)]);
    let moved = active.column(ColumnId::InProgress).first().expect("active task");
    assert_eq!(moved.status(), ColumnId::InProgress);
    assert_eq!(
        active.audit_entry(task_id(1)).map(|task| task.status()),
        Some(ColumnId::InProgress)
    );

    let deactivated = active.reduce(BoardAction::ToggleActive {
        column: ColumnId::InProgress,
        id: task_id(1),
    });
    assert!(deactivated.outcome.is_applied());
    let back = deactivated.state;
    assert!(back.column(ColumnId::InProgress).is_empty());
    assert_eq!(
        ids_in(&back, ColumnId::Todo),
        vec![task_id(2), task_id(3), task_id(1)]
    );
    let returned = back.column(ColumnId::Todo).last().expect("returned task");
    assert_eq!(returned.status(), ColumnId::Todo);
    assert_eq!(
        back.audit_entry(task_id(1)).map(|task| task.status()),
        Some(ColumnId::Todo)
    );
}

#[rstest]
fn toggle_of_missing_task_is_ignored(three_todos: BoardState) {
    assert_ignored(
        &three_todos,
        BoardAction::ToggleActive {
            column: ColumnId::InProgress,
            id: task_id(1),
        },
        IgnoreReason::TaskNotFound,
    );
}

#[rstest]
fn toggle_in_completed_column_is_ignored(three_todos: BoardState) {
    let completed = three_todos
        .reduce(drag((ColumnId::Todo, 0), (ColumnId::Completed, 0)))
        .state;

    assert_ignored(
        &completed,
        BoardAction::ToggleActive {
            column: ColumnId::Completed,
            id: task_id(1),
        },
        IgnoreReason::NotToggleable,
    );
}

#[rstest]
fn delete_does_not_touch_audit_entry(three_todos: BoardState) {
    let active = three_todos
        .reduce(BoardAction::ToggleActive {
            column: ColumnId::Todo,
            id: task_id(3),
        })
        .state;
    let before = active.audit_entry(task_id(3)).cloned();

    let deleted = active
        .reduce(BoardAction::DeleteTask {
            column: ColumnId::InProgress,
            id: task_id(3),
        })
        .state;

    assert!(deleted.columns().locate(task_id(3)).is_none());
    assert_eq!(deleted.audit_entry(task_id(3)).cloned(), before);
    assert_eq!(deleted.all_tasks().len(), 3);
}

#[rstest]
fn drag_to_completed_updates_status_everywhere(three_todos: BoardState) {
    let transition = three_todos.reduce(drag((ColumnId::Todo, 0), (ColumnId::Completed, 0)));
    let state = transition.state;

    assert!(transition.outcome.is_applied());
    assert_eq!(ids_in(&state, ColumnId::Todo), vec![task_id(2), task_id(3)]);
    assert_eq!(ids_in(&state, ColumnId::Completed), vec![task_id(1)]);
    let moved = state.column(ColumnId::Completed).first().expect("moved task");
    assert_eq!(moved.status(), ColumnId::Completed);
    assert_eq!(
        state.audit_entry(task_id(1)).map(|task| task.status()),
        Some(ColumnId::Completed)
    );
}

#[rstest]
fn drag_to_same_position_is_ignored(three_todos: BoardState) {
    assert_ignored(
        &three_todos,
        drag((ColumnId::Todo, 1), (ColumnId::Todo, 1)),
        IgnoreReason::SamePosition,
    );
}

#[rstest]
fn drag_outside_board_is_ignored(three_todos: BoardState) {
    assert_ignored(
        &three_todos,
        BoardAction::DragEnd(DragResult::cancelled(DraggableLocation::new(
            ColumnId::Todo,
            0,
        ))),
        IgnoreReason::MissingDestination,
    );
}

#[rstest]
fn drag_from_empty_slot_is_ignored(three_todos: BoardState) {
    assert_ignored(
        &three_todos,
        drag((ColumnId::InProgress, 0), (ColumnId::Todo, 0)),
        IgnoreReason::IndexOutOfRange,
    );
}

#[rstest]
#[case(0, 2, [2, 3, 1])]
#[case(2, 0, [3, 1, 2])]
#[case(0, 1, [2, 1, 3])]
#[case(1, 2, [1, 3, 2])]
fn drag_within_column_uses_splice_semantics(
    three_todos: BoardState,
    #[case] from: usize,
    #[case] to: usize,
    #[case] expected: [u128; 3],
) {
    let state = three_todos
        .reduce(drag((ColumnId::Todo, from), (ColumnId::Todo, to)))
        .state;

    assert_eq!(
        ids_in(&state, ColumnId::Todo),
        expected.map(task_id).to_vec()
    );
    assert!(
        state
            .column(ColumnId::Todo)
            .iter()
            .all(|task| task.status() == ColumnId::Todo)
    );
}

#[rstest]
fn drag_past_end_appends(three_todos: BoardState) {
    let with_active = three_todos
        .reduce(drag((ColumnId::Todo, 0), (ColumnId::InProgress, 0)))
        .state;

    let state = with_active
        .reduce(drag((ColumnId::Todo, 0), (ColumnId::InProgress, 10)))
        .state;

    assert_eq!(
        ids_in(&state, ColumnId::InProgress),
        vec![task_id(1), task_id(2)]
    );
    assert_eq!(ids_in(&state, ColumnId::Todo), vec![task_id(3)]);
}

#[rstest]
fn drag_between_columns_inserts_at_destination_index(three_todos: BoardState) {
    let active = three_todos
        .reduce(drag((ColumnId::Todo, 0), (ColumnId::InProgress, 0)))
        .state
        .reduce(drag((ColumnId::Todo, 0), (ColumnId::InProgress, 1)))
        .state;

    let state = active
        .reduce(drag((ColumnId::Todo, 0), (ColumnId::InProgress, 1)))
        .state;

    assert_eq!(
        ids_in(&state, ColumnId::InProgress),
        vec![task_id(1), task_id(3), task_id(2)]
    );
    assert!(state.column(ColumnId::Todo).is_empty());
}

#[rstest]
fn completed_tasks_can_be_dragged_back(three_todos: BoardState) {
    let completed = three_todos
        .reduce(drag((ColumnId::Todo, 2), (ColumnId::Completed, 0)))
        .state;

    let state = completed
        .reduce(drag((ColumnId::Completed, 0), (ColumnId::Todo, 0)))
        .state;

    assert_eq!(
        ids_in(&state, ColumnId::Todo),
        vec![task_id(3), task_id(1), task_id(2)]
    );
    assert_eq!(
        state.audit_entry(task_id(3)).map(|task| task.status()),
        Some(ColumnId::Todo)
    );
}

#[rstest]
fn every_task_stays_in_exactly_one_column(three_todos: BoardState) {
    let actions = [
        drag((ColumnId::Todo, 0), (ColumnId::Completed, 0)),
        BoardAction::ToggleActive {
            column: ColumnId::Todo,
            id: task_id(2),
        },
        drag((ColumnId::InProgress, 0), (ColumnId::Completed, 1)),
        drag((ColumnId::Completed, 0), (ColumnId::Todo, 1)),
    ];

    let state = actions
        .into_iter()
        .fold(three_todos, |state, action| state.reduce(action).state);

    for n in 1..=3 {
        let holders = ColumnId::ALL
            .iter()
            .filter(|column| state.columns().position_of(**column, task_id(n)).is_some())
            .count();
        assert_eq!(holders, 1, "task {n} should be in exactly one column");
    }
    for (column, tasks) in state.columns().iter() {
        for task in tasks {
            assert_eq!(task.status(), column);
            assert_eq!(
                state.audit_entry(task.id()).map(|entry| entry.status()),
                Some(column)
            );
        }
    }
}
