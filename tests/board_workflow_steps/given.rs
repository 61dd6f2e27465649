//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) {
    *world = BoardWorld::default();
}

#[given(r#"a task board with the task "{text}""#)]
fn board_with_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    *world = BoardWorld::default();
    world.service.set_pending_input(text);
    if !world.service.add_task().is_applied() {
        return Err(eyre::eyre!("setup task was not added"));
    }
    Ok(())
}
