//! Reading sections written by another world.

use gridrep_shared::{
    ReadError, ReadEvent, ReadEventKind, ReadReply, SectionKind, World, WorldError,
};
use gridrep_test::{
    init_logger, mark_userdata, skip_payload, two_bytes, TestEntity, TestWorldBuilder,
};

fn single_observer() -> World {
    TestWorldBuilder::new()
        .entity(TestEntity::new(1, 1).observer(1))
        .build()
}

fn write(world: &mut World) -> Vec<u8> {
    let mut buffer = vec![0u8; 4096];
    let amount = world.write_view(1, &mut buffer, None).unwrap();
    buffer.truncate(amount);
    buffer
}

// Create

#[test]
fn read_create_for_single_entity() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Create, mark_userdata)
        .unwrap();

    let buffer = write(&mut host);
    let mut value: i32 = 0;

    assert_eq!(remote.entity_count(), Ok(0));
    remote.read_view(1, &buffer, Some(&mut value)).unwrap();
    assert_eq!(remote.entity_count(), Ok(1));

    // the handler ran and saw the caller's value
    assert_eq!(value, 1);
}

#[test]
fn read_create_with_extra_data() {
    init_logger();

    let mut host = single_observer();
    host.set_write_handler(SectionKind::Create, two_bytes).unwrap();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Create, skip_payload)
        .unwrap();

    let buffer = write(&mut host);

    remote.read_view(1, &buffer, None).unwrap();
    assert_eq!(remote.entity_count(), Ok(1));
}

#[test]
fn read_create_with_truncated_data_fails() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Create, mark_userdata)
        .unwrap();

    let buffer = write(&mut host);
    let result = remote.read_view(1, &buffer[..buffer.len() - 2], None);

    assert!(matches!(result, Err(ReadError::Serde(_))));
    assert_eq!(remote.entity_count(), Ok(0));
}

#[test]
fn created_entity_is_foreign_and_cannot_be_untracked() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();

    let buffer = write(&mut host);
    remote.read_view(1, &buffer, None).unwrap();

    assert_eq!(remote.is_foreign(1), Ok(true));
    assert_eq!(
        remote.untrack_entity(1),
        Err(WorldError::EntityForeign { entity_id: 1 })
    );
    assert_eq!(remote.entity_count(), Ok(1));
}

#[test]
fn create_for_tracked_entity_raises_error_event() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::ErrorCreate, mark_userdata)
        .unwrap();
    remote.track_entity(1).unwrap();

    let buffer = write(&mut host);
    let mut value: i32 = 0;

    remote.read_view(1, &buffer, Some(&mut value)).unwrap();

    assert_eq!(value, 1);
    assert_eq!(remote.entity_count(), Ok(1));
    // the local entity stays local
    assert_eq!(remote.is_foreign(1), Ok(false));
}

// Update

#[test]
fn read_update_for_single_entity() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Update, mark_userdata)
        .unwrap();

    let mut value: i32 = 0;

    let create = write(&mut host);
    remote.read_view(1, &create, Some(&mut value)).unwrap();
    assert_eq!(remote.entity_count(), Ok(1));
    assert_eq!(value, 0);

    let update = write(&mut host);
    remote.read_view(1, &update, Some(&mut value)).unwrap();
    assert_eq!(value, 1);
}

#[test]
fn read_update_with_extra_data() {
    init_logger();

    let mut host = single_observer();
    host.set_write_handler(SectionKind::Update, two_bytes).unwrap();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Update, skip_payload)
        .unwrap();

    let create = write(&mut host);
    remote.read_view(1, &create, None).unwrap();

    let update = write(&mut host);
    assert_eq!(update.len(), 20);
    remote.read_view(1, &update, None).unwrap();
}

#[test]
fn read_update_with_truncated_data_fails() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();

    let create = write(&mut host);
    remote.read_view(1, &create, None).unwrap();

    let update = write(&mut host);
    assert!(remote.read_view(1, &update[..update.len() - 1], None).is_err());
}

#[test]
fn update_for_local_entity_raises_error_event() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::ErrorUpdate, mark_userdata)
        .unwrap();
    remote.track_entity(1).unwrap();

    let mut value: i32 = 0;

    let create = write(&mut host);
    remote.read_view(1, &create, Some(&mut value)).unwrap();
    assert_eq!(remote.entity_count(), Ok(1));

    let update = write(&mut host);
    remote.read_view(1, &update, Some(&mut value)).unwrap();

    assert_eq!(value, 1);
}

// Remove

#[test]
fn read_remove_untracks_foreign_entity() {
    init_logger();

    let mut host: World = TestWorldBuilder::new()
        .entity(TestEntity::new(1, 1).observer(1))
        .entity(TestEntity::new(2, 1))
        .build();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Remove, mark_userdata)
        .unwrap();

    let create = write(&mut host);
    remote.read_view(1, &create, None).unwrap();
    assert_eq!(remote.entity_count(), Ok(2));

    host.untrack_entity(2).unwrap();
    let remove = write(&mut host);
    let mut value: i32 = 0;
    remote.read_view(1, &remove, Some(&mut value)).unwrap();

    assert_eq!(value, 1);
    assert_eq!(remote.is_tracked(2), Ok(false));
    assert_eq!(remote.entity_count(), Ok(1));
}

#[test]
fn remove_for_unknown_entity_raises_error_event() {
    init_logger();

    let mut host: World = TestWorldBuilder::new()
        .entity(TestEntity::new(1, 1).observer(1))
        .entity(TestEntity::new(2, 1))
        .build();
    write(&mut host);
    host.untrack_entity(2).unwrap();
    let remove = write(&mut host);

    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::ErrorRemove, mark_userdata)
        .unwrap();

    let mut value: i32 = 0;
    remote.read_view(1, &remove, Some(&mut value)).unwrap();
    assert_eq!(value, 1);
    assert_eq!(remote.entity_count(), Ok(0));
}

#[test]
fn aborted_remove_keeps_entity() {
    init_logger();

    let mut host: World = TestWorldBuilder::new()
        .entity(TestEntity::new(1, 1).observer(1))
        .entity(TestEntity::new(2, 1))
        .build();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Remove, |_: &mut ReadEvent<()>| {
            ReadReply::Abort(-3)
        })
        .unwrap();

    let create = write(&mut host);
    remote.read_view(1, &create, None).unwrap();

    host.untrack_entity(2).unwrap();
    let remove = write(&mut host);

    assert_eq!(
        remote.read_view(1, &remove, None),
        Err(ReadError::Aborted {
            entity_id: 2,
            code: -3
        })
    );
    assert_eq!(remote.is_tracked(2), Ok(true));
}

#[test]
fn aborted_create_leaves_no_entity() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World = World::default();
    remote
        .set_read_handler(ReadEventKind::Create, |_: &mut ReadEvent<()>| {
            ReadReply::Abort(-1)
        })
        .unwrap();

    let buffer = write(&mut host);

    assert_eq!(
        remote.read_view(1, &buffer, None),
        Err(ReadError::Aborted {
            entity_id: 1,
            code: -1
        })
    );
    assert_eq!(remote.is_tracked(1), Ok(false));
    assert_eq!(remote.entity_count(), Ok(0));

    // the same section applies cleanly once the handler lets it through
    remote.remove_read_handler(ReadEventKind::Create).unwrap();
    remote.read_view(1, &buffer, None).unwrap();
    assert_eq!(remote.is_foreign(1), Ok(true));
}

#[test]
fn read_handler_sees_entity_record() {
    init_logger();

    let mut host = single_observer();
    let mut remote: World<u32> = World::default();
    remote
        .set_read_handler(ReadEventKind::Create, |event: &mut ReadEvent<u32>| {
            let length = event.payload.remaining() as u32;
            if let Some(entity) = event.entity.as_deref_mut() {
                entity.set_user_data(Some(length + 40));
            }
            ReadReply::Continue
        })
        .unwrap();

    let buffer = write(&mut host);
    remote.read_view(1, &buffer, None).unwrap();

    assert_eq!(remote.entity_user_data(1), Ok(Some(&40)));
}

#[test]
fn destroyed_world_refuses_to_read() {
    init_logger();

    let mut host = single_observer();
    let buffer = write(&mut host);

    let mut remote: World = World::default();
    remote.destroy().unwrap();

    assert_eq!(
        remote.read_view(1, &buffer, None),
        Err(ReadError::WorldInvalid)
    );
}
