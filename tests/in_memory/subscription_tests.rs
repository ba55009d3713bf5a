//! Store change notifications and channel-delivered notices.

use std::sync::Arc;

use super::helpers::{SyncHarness, seeded_board, titles_in};
use boardsync::board::{
    adapters::{ChannelNoticeSink, memory::InMemoryTaskApi},
    domain::{Board, MoveIntent},
    ports::{NoticeKind, NoticeSink},
    services::{BoardStore, OptimisticSync},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn watchers_see_the_optimistic_board_first(seeded_board: Board) {
    let harness = SyncHarness::new(InMemoryTaskApi::with_board(seeded_board));
    harness.sync.load().await.expect("initial load succeeds");
    let mut receiver = harness.sync.store().subscribe();
    receiver.borrow_and_update();

    let pending = harness
        .sync
        .apply_move(MoveIntent::new("task-2", "done", 0))
        .expect("move applies");

    assert!(receiver.has_changed().expect("store alive"));
    let seen = receiver
        .borrow_and_update()
        .clone()
        .expect("board published");
    assert!(Arc::ptr_eq(&seen, pending.board()));
    assert_eq!(titles_in(&seen, "done"), ["Build", "Release"]);

    harness.sync.persist_move(pending).await;
    assert!(!receiver.has_changed().expect("store alive"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn channel_sink_delivers_notices_in_order(seeded_board: Board) {
    let api = Arc::new(InMemoryTaskApi::with_board(seeded_board));
    let (sink, mut notices) = ChannelNoticeSink::channel();
    let sink: Arc<dyn NoticeSink> = Arc::new(sink);
    let sync = OptimisticSync::new(
        Arc::clone(&api),
        BoardStore::new(),
        sink,
        Arc::new(DefaultClock),
    );
    sync.load().await.expect("initial load succeeds");
    api.fail_updates(true);
    api.fail_fetches(true);

    sync.commit_move(MoveIntent::new("task-1", "done", 0)).await;

    let first = notices.recv().await.expect("move notice");
    let second = notices.recv().await.expect("reload notice");
    assert_eq!(first.kind, NoticeKind::MovePersist);
    assert_eq!(second.kind, NoticeKind::BoardFetch);
    assert!(first.raised_at <= second.raised_at);
}
