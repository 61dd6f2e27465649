//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, column, run_async};
use rstest_bdd_macros::when;
use taskboard::board::{
    adapters::prompt::ScriptedEditPrompt,
    domain::{DragResult, DraggableLocation},
};

#[when(r#"the user adds the task "{text}""#)]
fn add_task(world: &mut BoardWorld, text: String) {
    world.remember();
    world.service.set_pending_input(text);
    world.service.add_task();
}

#[when("the user adds a blank task")]
fn add_blank_task(world: &mut BoardWorld) {
    world.remember();
    world.service.set_pending_input("   ");
    world.service.add_task();
}

#[when(r#"the user toggles task {index:usize} in the "{name}" column"#)]
fn toggle_task(world: &mut BoardWorld, index: usize, name: String) -> Result<(), eyre::Report> {
    let from = column(&name)?;
    let id = world.task_id_at(from, index)?;
    world.remember();
    world.service.toggle_active(from, id);
    Ok(())
}

#[when(r#"the user deletes task {index:usize} from the "{name}" column"#)]
fn delete_task(world: &mut BoardWorld, index: usize, name: String) -> Result<(), eyre::Report> {
    let from = column(&name)?;
    let id = world.task_id_at(from, index)?;
    world.remember();
    world.service.delete_task(from, id);
    Ok(())
}

#[when(r#"the user drags task {from_index:usize} from "{from_name}" to position {to_index:usize} of "{to_name}""#)]
fn drag_task(
    world: &mut BoardWorld,
    from_index: usize,
    from_name: String,
    to_index: usize,
    to_name: String,
) -> Result<(), eyre::Report> {
    let source = DraggableLocation::new(column(&from_name)?, from_index);
    let target = DraggableLocation::new(column(&to_name)?, to_index);
    world.remember();
    world.service.drag_end(DragResult::dropped(source, target));
    Ok(())
}

#[when(r#"the user edits task {index:usize} in the "{name}" column to "{text}""#)]
fn edit_task(
    world: &mut BoardWorld,
    index: usize,
    name: String,
    text: String,
) -> Result<(), eyre::Report> {
    let from = column(&name)?;
    let id = world.task_id_at(from, index)?;
    world.remember();
    let prompt = ScriptedEditPrompt::answering(text);
    run_async(world.service.edit_task(from, id, &prompt));
    Ok(())
}
