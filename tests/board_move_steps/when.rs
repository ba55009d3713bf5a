//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async, task_id_for};
use boardsync::board::{domain::MoveIntent, ports::CreateTaskRequest};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"task "{title}" is moved to column "{column}" at index {index}"#)]
fn move_task(
    world: &mut BoardWorld,
    title: String,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let intent = MoveIntent::new(task_id_for(&title), column.as_str(), index);
    let outcome = run_async(world.sync()?.commit_move(intent));
    world.last_move = Some(outcome);
    Ok(())
}

#[when(r#"a task that no longer exists is moved to column "{column}" at index {index}"#)]
fn move_missing_task(
    world: &mut BoardWorld,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let intent = MoveIntent::new("deleted-elsewhere", column.as_str(), index);
    let outcome = run_async(world.sync()?.commit_move(intent));
    world.last_move = Some(outcome);
    Ok(())
}

#[when(r#"a task titled "{title}" is added"#)]
fn add_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.sync()?.add_task(CreateTaskRequest::new(title))).wrap_err("add task")?;
    Ok(())
}

#[when(r#"task "{title}" is renamed to "{new_title}""#)]
fn rename_task(
    world: &mut BoardWorld,
    title: String,
    new_title: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .sync()?
            .rename_task(&task_id_for(&title), &new_title),
    );
    Ok(())
}
