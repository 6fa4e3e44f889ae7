use std::time::{Duration, Instant};

use glam::Vec2;

use street_cash::commentary::{CannedCommentary, EventKind, MessageLog, Radio, Sender};
use street_cash::input::{self, Command};
use street_cash::{tick, Direction, GameEvent, GameWorld, Status};

#[test]
fn full_lifecycle_start_play_game_over_reset() {
    let mut world = GameWorld::default();
    assert_eq!(world.state.status(), Status::Start);
    assert_eq!(world.state.cash_remaining(), 0);

    input::apply(&mut world, Command::Confirm);
    assert_eq!(world.state.status(), Status::Playing);
    assert_eq!(world.state.cash_remaining(), 236);

    world.steer(Direction::Left);
    for _ in 0..30 {
        tick(&mut world, 1.0 / 60.0);
    }
    assert!(world.state.score() > 0);

    for _ in 0..3 {
        let cop = world.patrols[0].clone();
        world.player.position = cop.position + Vec2::new(0.0, 0.1);
        world.player.direction = Direction::None;
        world.player.queued = Direction::None;
        tick(&mut world, 0.0);
    }
    assert_eq!(world.state.status(), Status::GameOver);
    assert_eq!(world.state.lives(), 0);

    let events: Vec<GameEvent> = world.drain_events().collect();
    assert_eq!(events.first(), Some(&GameEvent::Started));
    assert_eq!(
        events.iter().filter(|e| matches!(e, GameEvent::LifeLost { .. })).count(),
        2
    );
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));

    input::apply(&mut world, Command::Confirm);
    let fresh = GameWorld::default();
    assert_eq!(world.state, fresh.state);
    assert_eq!(world.grid, fresh.grid);
    assert_eq!(world.player, fresh.player);
    assert_eq!(world.patrols, fresh.patrols);
}

#[test]
fn confirm_while_playing_changes_nothing() {
    let mut world = GameWorld::default();
    world.start_game();
    world.drain_events().for_each(drop);
    input::apply(&mut world, Command::Confirm);
    assert_eq!(world.state.status(), Status::Playing);
    assert_eq!(world.drain_events().count(), 0);
}

#[test]
fn events_reach_the_radio_without_blocking_ticks() {
    let radio = Radio::spawn(Box::new(CannedCommentary::new(3))).expect("spawn radio");
    let mut world = GameWorld::default();
    world.start_game();
    world.player.position = Vec2::new(1.0, 2.0);
    tick(&mut world, 0.0);

    let mut kinds = Vec::new();
    for event in world.drain_events() {
        kinds.extend(EventKind::for_event(&event));
        radio.announce(&event);
    }
    assert_eq!(kinds, vec![EventKind::Start, EventKind::CollectTurbo]);

    let mut log = MessageLog::default();
    let deadline = Instant::now() + Duration::from_secs(5);
    while log.len() < 2 && Instant::now() < deadline {
        radio.poll(&mut log);
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(log.len(), 2);
    assert!(log.iter().all(|m| m.sender == Sender::Dj && !m.text.is_empty()));
}
