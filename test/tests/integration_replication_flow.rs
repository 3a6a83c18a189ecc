//! A host world replicating to a remote one while the owner's observer moves
//! across the grid.

use gridrep_shared::{section_length, EntityId, SectionKind, World, WriteEvent, WriteReply};
use gridrep_test::{
    assert_interest, exchange_section, exchange_until_settled, init_logger, TestEntity,
    TestWorldBuilder,
};

const PLAYER: EntityId = 100;

/// 16x16 grid, chunk `x + 16 * y`. The player observes chunk 0 with radius
/// 1, entity 1 sits next to it, entity 2 diagonally and entity 3 far away.
fn host() -> World {
    TestWorldBuilder::new()
        .flat_grid(16, 16)
        .interest_radius(1)
        .entity(TestEntity::new(PLAYER, 0).observer(1))
        .entity(TestEntity::new(1, 1))
        .entity(TestEntity::new(2, 17))
        .entity(TestEntity::new(3, 5))
        .build()
}

fn assert_replicated(remote: &World, expected: &[EntityId]) {
    assert_eq!(remote.entity_count(), Ok(expected.len()));
    for entity_id in expected {
        assert_eq!(remote.is_tracked(*entity_id), Ok(true), "entity {entity_id}");
        assert_eq!(remote.is_foreign(*entity_id), Ok(true), "entity {entity_id}");
    }
}

#[test]
fn observer_moving_between_chunks() {
    init_logger();

    let mut host = host();
    let mut remote: World = World::default();

    assert_eq!(exchange_until_settled(&mut host, &mut remote, 1, 4096, 8), 1);
    assert_replicated(&remote, &[PLAYER, 1]);

    // chunk 17 sees 1 above it and 2 in it
    host.set_entity_chunk(PLAYER, 17).unwrap();
    assert_eq!(exchange_until_settled(&mut host, &mut remote, 1, 4096, 8), 1);
    assert_replicated(&remote, &[PLAYER, 1, 2]);

    // chunk 5 sees only 3: one remove section, then one create section
    host.set_entity_chunk(PLAYER, 5).unwrap();
    assert_eq!(exchange_until_settled(&mut host, &mut remote, 1, 4096, 8), 2);
    assert_replicated(&remote, &[PLAYER, 3]);
    assert_eq!(host.is_sent(1, 1), Ok(false));
    assert_eq!(host.is_sent(1, 3), Ok(true));
}

#[test]
fn small_buffer_takes_more_sections() {
    init_logger();

    let mut host = host();
    let mut remote: World = World::default();

    // room for exactly one empty entry per section
    assert_eq!(exchange_until_settled(&mut host, &mut remote, 1, 18, 8), 2);
    assert_replicated(&remote, &[PLAYER, 1]);

    host.set_entity_chunk(PLAYER, 5).unwrap();
    assert_eq!(exchange_until_settled(&mut host, &mut remote, 1, 18, 8), 2);
    assert_replicated(&remote, &[PLAYER, 3]);
}

#[test]
fn updates_follow_once_settled() {
    init_logger();

    let mut host = host();
    let mut remote: World = World::default();
    exchange_until_settled(&mut host, &mut remote, 1, 4096, 8);

    for _ in 0..3 {
        assert_eq!(
            exchange_section(&mut host, &mut remote, 1, 4096),
            Ok(section_length(2, 0))
        );
    }
    assert_replicated(&remote, &[PLAYER, 1]);
}

#[test]
fn retracked_entity_is_recreated_on_remote() {
    init_logger();

    let mut host = host();
    let mut remote: World = World::default();
    exchange_until_settled(&mut host, &mut remote, 1, 4096, 8);

    host.untrack_entity(1).unwrap();
    host.track_entity(1).unwrap();
    host.set_entity_chunk(1, 1).unwrap();

    // one remove section, then one create section
    assert_eq!(exchange_until_settled(&mut host, &mut remote, 1, 4096, 8), 2);
    assert_replicated(&remote, &[PLAYER, 1]);
    assert_eq!(host.is_sent(1, 1), Ok(true));
}

#[test]
fn owners_are_replicated_independently() {
    init_logger();

    let mut host: World = TestWorldBuilder::new()
        .flat_grid(16, 16)
        .entity(TestEntity::new(PLAYER, 0).observer(1))
        .entity(TestEntity::new(PLAYER + 1, 40).observer(2))
        .entity(TestEntity::new(1, 0))
        .entity(TestEntity::new(2, 40))
        .build();
    let mut first: World = World::default();
    let mut second: World = World::default();

    exchange_until_settled(&mut host, &mut first, 1, 4096, 8);
    exchange_until_settled(&mut host, &mut second, 2, 4096, 8);

    assert_replicated(&first, &[PLAYER, 1]);
    assert_replicated(&second, &[PLAYER + 1, 2]);

    // a disconnected owner starts over
    host.reset_owner(2).unwrap();
    let mut reconnected: World = World::default();
    assert_eq!(
        exchange_until_settled(&mut host, &mut reconnected, 2, 4096, 8),
        1
    );
    assert_replicated(&reconnected, &[PLAYER + 1, 2]);
    assert_eq!(host.is_sent(1, 1), Ok(true));
}

#[test]
fn dimensions_split_the_same_chunk() {
    init_logger();

    let mut host: World = TestWorldBuilder::new()
        .flat_grid(16, 16)
        .entity(TestEntity::new(PLAYER, 0).observer(1).in_dimension(1))
        .entity(TestEntity::new(1, 0))
        .entity(TestEntity::new(2, 0).in_dimension(1))
        .build();
    let mut remote: World = World::default();

    assert_interest!(host, 1, [PLAYER, 2]);
    exchange_until_settled(&mut host, &mut remote, 1, 4096, 8);
    assert_replicated(&remote, &[PLAYER, 2]);

    host.set_entity_dimension(PLAYER, 0).unwrap();
    assert_interest!(host, 1, [PLAYER, 1]);
    exchange_until_settled(&mut host, &mut remote, 1, 4096, 8);
    assert_replicated(&remote, &[PLAYER, 1]);
}

#[test]
fn write_userdata_reaches_handlers() {
    init_logger();

    let mut host = host();
    host.set_write_handler(SectionKind::Create, |event: &mut WriteEvent<()>| {
        if let Some(count) = event.userdata_mut::<usize>() {
            *count += 1;
        }
        WriteReply::Accept
    })
    .unwrap();

    let mut count: usize = 0;
    let mut buffer = [0u8; 4096];
    host.write_view(1, &mut buffer, Some(&mut count)).unwrap();

    assert_eq!(count, 2);
}
