//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async, split_titles};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"column "{column}" holds "{titles}""#)]
fn column_holds(world: &mut BoardWorld, column: String, titles: String) {
    world.add_column(&column, &split_titles(&titles));
}

#[given(r#"an empty column "{column}""#)]
fn empty_column(world: &mut BoardWorld, column: String) {
    world.add_column(&column, &[]);
}

#[given("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.start();
    run_async(world.sync()?.load()).wrap_err("load board")?;
    Ok(())
}

#[given("the server rejects task updates")]
fn server_rejects_updates(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.api()?.fail_updates(true);
    Ok(())
}
