//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, column};
use eyre::eyre;
use rstest_bdd_macros::then;

#[then(r#"the "{name}" column holds "{text}""#)]
fn column_holds(world: &BoardWorld, name: String, text: String) -> Result<(), eyre::Report> {
    let holder = column(&name)?;
    let task = world
        .service
        .state()
        .column(holder)
        .iter()
        .find(|task| task.text().as_str() == text)
        .ok_or_else(|| eyre!("{name} does not hold {text:?}"))?;

    if task.status() != holder {
        return Err(eyre!(
            "task status {} does not match column {holder}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the "{name}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let holder = column(&name)?;
    if !world.service.state().column(holder).is_empty() {
        return Err(eyre!("{name} is not empty"));
    }
    Ok(())
}

#[then(r#"the audit list holds "{text}" with status "{status}""#)]
fn audit_list_holds(world: &BoardWorld, text: String, status: String) -> Result<(), eyre::Report> {
    let expected = column(&status)?;
    let entry = world
        .service
        .state()
        .all_tasks()
        .iter()
        .find(|task| task.text().as_str() == text)
        .ok_or_else(|| eyre!("audit list does not hold {text:?}"))?;

    if entry.status() != expected {
        return Err(eyre!(
            "expected audit status {expected}, found {}",
            entry.status()
        ));
    }
    Ok(())
}

#[then("the board has no tasks")]
fn board_has_no_tasks(world: &BoardWorld) -> Result<(), eyre::Report> {
    let state = world.service.state();
    if !state.columns().is_empty() || !state.all_tasks().is_empty() {
        return Err(eyre!("board holds tasks: {state:?}"));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .before
        .as_ref()
        .ok_or_else(|| eyre!("no snapshot taken before the action"))?;
    if world.service.state() != before {
        return Err(eyre!("board state changed"));
    }
    Ok(())
}
