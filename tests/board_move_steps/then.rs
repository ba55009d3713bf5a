//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, split_titles};
use boardsync::board::{
    domain::{ColumnId, order_index},
    services::MoveOutcome,
};
use eyre::eyre;
use rstest_bdd_macros::then;

#[then(r#"column "{column}" shows "{titles}""#)]
fn column_shows(world: &BoardWorld, column: String, titles: String) -> Result<(), eyre::Report> {
    let board = world.local_board()?;
    let shown: Vec<String> = order_index::tasks_of(&board, &ColumnId::new(column.as_str()))
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    let expected = split_titles(&titles);

    if shown != expected {
        return Err(eyre!(
            "column {column} shows {shown:?}, expected {expected:?}"
        ));
    }
    Ok(())
}

#[then("the server agrees with the board")]
fn server_agrees(world: &BoardWorld) -> Result<(), eyre::Report> {
    let local = world.local_board()?;
    let remote = world.api()?.snapshot()?;

    if *local != remote {
        return Err(eyre!("local board {local:?} differs from server board {remote:?}"));
    }
    Ok(())
}

#[then("no error notice is shown")]
fn no_error_notice(world: &BoardWorld) -> Result<(), eyre::Report> {
    let notices = world.notices.notices();
    if !notices.is_empty() {
        return Err(eyre!("unexpected notices: {notices:?}"));
    }
    Ok(())
}

#[then(r#"an error notice of kind "{kind}" is shown"#)]
fn error_notice_shown(world: &BoardWorld, kind: String) -> Result<(), eyre::Report> {
    let kinds: Vec<String> = world
        .notices
        .kinds()
        .into_iter()
        .map(|shown| serde_json::to_value(shown).map(|value| value.as_str().map(str::to_owned)))
        .collect::<Result<Option<Vec<_>>, _>>()?
        .ok_or_else(|| eyre!("notice kind does not serialize to a string"))?;

    if kinds != [kind.as_str()] {
        return Err(eyre!("expected a single {kind} notice, found {kinds:?}"));
    }
    Ok(())
}

#[then("the move is ignored")]
fn move_is_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_move {
        Some(MoveOutcome::Ignored(_)) => Ok(()),
        other => Err(eyre!("expected an ignored move, found {other:?}")),
    }
}
