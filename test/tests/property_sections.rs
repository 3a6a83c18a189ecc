/// PROPERTY-BASED TESTS: Section exchange
///
/// Key invariants:
/// 1. Any buffer that fits one entry eventually replicates the interest set
/// 2. Sections never exceed the buffer they were written into
/// 3. The replicated set follows the observer as it moves

use proptest::prelude::*;
use gridrep_shared::{EntityId, World};
use gridrep_test::{exchange_until_settled, TestEntity, TestWorldBuilder};

const PLAYER: EntityId = 1000;

fn host(chunks: &[i64], player_chunk: i64) -> World {
    let mut builder = TestWorldBuilder::new()
        .flat_grid(8, 8)
        .interest_radius(1)
        .entity(TestEntity::new(PLAYER, player_chunk).observer(1));
    for (index, chunk) in chunks.iter().enumerate() {
        builder = builder.entity(TestEntity::new(index as EntityId + 1, *chunk));
    }
    builder.build()
}

fn interest(world: &World) -> Vec<EntityId> {
    let mut out = vec![0; 256];
    let fetch = world.query(1, Some(1), &mut out).unwrap();
    out.truncate(fetch.written());
    out
}

fn replicates(host: &World, remote: &World) -> bool {
    let expected = interest(host);
    remote.entity_count() == Ok(expected.len())
        && expected
            .iter()
            .all(|entity_id| remote.is_tracked(*entity_id) == Ok(true))
}

proptest! {
    #[test]
    fn prop_any_buffer_eventually_replicates(
        chunks in prop::collection::vec(0i64..64, 0..30),
        player_chunk in 0i64..64,
        buffer_size in 18usize..200,
    ) {
        let mut host = host(&chunks, player_chunk);
        let mut remote: World = World::default();

        let rounds = exchange_until_settled(&mut host, &mut remote, 1, buffer_size, 64);

        prop_assert!(rounds <= chunks.len() + 1);
        prop_assert!(replicates(&host, &remote));
    }

    #[test]
    fn prop_sections_fit_their_buffer(
        chunks in prop::collection::vec(0i64..64, 0..30),
        player_chunk in 0i64..64,
        buffer_size in 0usize..120,
    ) {
        let mut host = host(&chunks, player_chunk);
        let mut buffer = vec![0u8; buffer_size];

        for _ in 0..4 {
            let written = host.write_view(1, &mut buffer, None).unwrap();
            prop_assert!(written <= buffer_size);
            prop_assert!(written == 0 || written >= 18);
        }
    }

    #[test]
    fn prop_replication_follows_movement(
        chunks in prop::collection::vec(0i64..64, 0..30),
        path in prop::collection::vec(0i64..64, 1..6),
    ) {
        let mut host = host(&chunks, path[0]);
        let mut remote: World = World::default();

        for chunk in path {
            host.set_entity_chunk(PLAYER, chunk).unwrap();
            exchange_until_settled(&mut host, &mut remote, 1, 64, 64);
            prop_assert!(replicates(&host, &remote));
        }
    }
}
