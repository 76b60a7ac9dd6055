//! Integration tests driving the caller actor on virtual time.

use std::time::Duration;

use housie::{CallerActor, CallerConfig, GameStatus, NullAnnouncer};
use tokio::time::timeout;

fn fast_config() -> CallerConfig {
    CallerConfig {
        call_delay: Duration::from_millis(200),
        tick_period: Duration::from_millis(20),
    }
}

/// Long enough that nothing pending could still be due, in virtual time.
const QUIET: Duration = Duration::from_secs(10);

#[tokio::test(start_paused = true)]
async fn start_draws_and_cadence_advances() {
    let handle = CallerActor::spawn(fast_config(), Box::new(NullAnnouncer));
    let mut updates = handle.subscribe(256).await.unwrap();

    assert!(handle.start().await.unwrap().is_accepted());
    let view = updates.recv().await.unwrap();
    assert_eq!(view.status, GameStatus::Running);
    assert_eq!(view.called_count, 1);
    assert!(view.current.is_some());

    // the second draw arrives only after the repeat-then-advance holds
    let view = updates.recv().await.unwrap();
    assert_eq!(view.called_count, 2);
    assert_eq!(view.remaining_count, 88);
}

#[tokio::test(start_paused = true)]
async fn controls_without_effect_are_ignored() {
    let handle = CallerActor::spawn(fast_config(), Box::new(NullAnnouncer));

    assert!(!handle.pause().await.unwrap().is_accepted());
    assert!(handle.start().await.unwrap().is_accepted());
    assert!(!handle.start().await.unwrap().is_accepted());
}

#[tokio::test(start_paused = true)]
async fn pause_stops_the_cycle() {
    let handle = CallerActor::spawn(fast_config(), Box::new(NullAnnouncer));
    let mut updates = handle.subscribe(256).await.unwrap();

    handle.start().await.unwrap();
    let first = updates.recv().await.unwrap();
    assert_eq!(first.called_count, 1);

    assert!(handle.pause().await.unwrap().is_accepted());
    let paused = updates.recv().await.unwrap();
    assert_eq!(paused.status, GameStatus::Paused);
    assert_eq!(paused.called_count, 1);
    assert_eq!(paused.current, first.current);

    // no stale deadline may fire while paused
    assert!(timeout(QUIET, updates.recv()).await.is_err());

    // resume continues from the reduced pool
    assert!(handle.start().await.unwrap().is_accepted());
    let resumed = updates.recv().await.unwrap();
    assert_eq!(resumed.called_count, 2);
    assert_eq!(resumed.remaining_count, 88);
}

#[tokio::test(start_paused = true)]
async fn restart_resets_mid_game() {
    let handle = CallerActor::spawn(fast_config(), Box::new(NullAnnouncer));
    let mut updates = handle.subscribe(256).await.unwrap();

    handle.start().await.unwrap();
    let view = loop {
        let view = updates.recv().await.unwrap();
        if view.called_count == 3 {
            break view;
        }
    };
    assert_eq!(view.remaining_count, 87);

    assert!(handle.restart().await.unwrap().is_accepted());
    let view = loop {
        let view = updates.recv().await.unwrap();
        if view.status == GameStatus::Idle {
            break view;
        }
    };
    assert_eq!(view.called_count, 0);
    assert_eq!(view.remaining_count, 90);
    assert_eq!(view.current, None);
    assert!(view.history.is_empty());

    // restarted means idle: no further calls until the next start
    assert!(timeout(QUIET, updates.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn full_game_runs_to_over() {
    let handle = CallerActor::spawn(fast_config(), Box::new(NullAnnouncer));
    let mut updates = handle.subscribe(256).await.unwrap();

    handle.start().await.unwrap();
    let over = loop {
        let view = updates.recv().await.unwrap();
        if view.status == GameStatus::Over {
            break view;
        }
    };
    assert_eq!(over.called_count, 90);
    assert_eq!(over.remaining_count, 0);
    assert_eq!(over.announcement, housie::constants::GAME_OVER_MESSAGE);

    // every number was called exactly once
    let mut history = over.history.clone();
    history.sort_unstable();
    assert_eq!(history, (1..=90).collect::<Vec<u8>>());

    // start is rejected until a restart
    assert!(!handle.start().await.unwrap().is_accepted());
    assert!(handle.restart().await.unwrap().is_accepted());
    assert!(handle.start().await.unwrap().is_accepted());
}

#[tokio::test(start_paused = true)]
async fn close_shuts_the_actor_down() {
    let handle = CallerActor::spawn(fast_config(), Box::new(NullAnnouncer));

    assert!(handle.close().await.unwrap().is_accepted());
    assert_eq!(handle.start().await, Err(housie::CallerError::Closed));
}
