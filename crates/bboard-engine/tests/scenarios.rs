//! Integration test: hand-built game situations played through `step`.

use bboard_core::item::{self, AGENT0, BOMB, KICK, PASSAGE};
use bboard_core::{Move, Position, BOMB_LIFETIME, FLAME_LIFETIME};
use bboard_engine::step;
use bboard_test_utils::{assert_consistent, cornered_state, flamed_cells, only, BoardBuilder};

const IDLE: [Move; 4] = [Move::Idle; 4];

// ── Explosions ──────────────────────────────────────────────────────

#[test]
fn strength_two_bomb_explodes_after_lifetime() {
    let mut s = BoardBuilder::new()
        .agent(0, 5, 5)
        .agent(1, 5, 7)
        .agent(2, 8, 5)
        .bomb(5, 5, 0, 2, BOMB_LIFETIME)
        .build();

    for _ in 0..BOMB_LIFETIME - 1 {
        step(&mut s, &IDLE);
        assert!(flamed_cells(&s).is_empty());
        assert_consistent(&s);
    }
    step(&mut s, &IDLE);

    let mut expected: Vec<Position> = [
        (5, 3),
        (5, 4),
        (3, 5),
        (4, 5),
        (5, 5),
        (6, 5),
        (7, 5),
        (5, 6),
        (5, 7),
    ]
    .into_iter()
    .map(|(x, y)| Position::new(x, y))
    .collect();
    expected.sort_by_key(|p| p.index());
    assert_eq!(flamed_cells(&s), expected);

    assert!(s.agents[0].dead);
    assert!(s.agents[1].dead);
    assert!(!s.agents[2].dead);
    assert!(!s.agents[3].dead);
    assert_eq!(s.alive_agents, 2);
    assert!(s.bombs.is_empty());
    assert_consistent(&s);
}

#[test]
fn leaving_the_blast_on_the_exploding_tick_survives() {
    let mut s = BoardBuilder::new()
        .agent(0, 5, 4)
        .bomb(5, 5, 1, 1, 1)
        .build();
    step(&mut s, &only(0, Move::Left));
    assert_eq!(s.agents[0].position(), Position::new(4, 4));
    assert!(!s.agents[0].dead);
    // The vacated cell keeps its flame.
    assert!(item::is_flame(s.item(5, 4)));
    assert_consistent(&s);
}

#[test]
fn walking_into_the_blast_dies() {
    let mut s = BoardBuilder::new()
        .agent(1, 6, 4)
        .bomb(5, 5, 0, 1, 1)
        .build();
    step(&mut s, &only(1, Move::Down));
    assert_eq!(s.agents[1].position(), Position::new(6, 5));
    assert!(s.agents[1].dead);
    assert!(item::is_flame(s.item(6, 5)));
    assert_eq!(s.alive_agents, 3);
}

#[test]
fn rigid_blocks_and_wood_absorbs() {
    let mut s = BoardBuilder::new()
        .rigid(6, 5)
        .wood(4, 5, 3)
        .wood(5, 4, 0)
        .bomb(5, 5, 1, 4, 1)
        .build();
    step(&mut s, &IDLE);

    assert_eq!(s.item(6, 5), item::RIGID);
    assert!(!item::is_flame(s.item(7, 5)));
    assert!(item::is_flame(s.item(4, 5)));
    assert!(!item::is_flame(s.item(3, 5)));
    assert!(item::is_flame(s.item(5, 4)));
    assert!(!item::is_flame(s.item(5, 3)));
    // Downward ray is unobstructed up to the strength.
    assert!(item::is_flame(s.item(5, 9)));
    assert!(!item::is_flame(s.item(5, 10)));

    for _ in 0..FLAME_LIFETIME {
        step(&mut s, &IDLE);
    }
    assert!(flamed_cells(&s).is_empty());
    assert_eq!(s.item(4, 5), KICK);
    assert_eq!(s.item(5, 4), PASSAGE);
}

#[test]
fn chain_reaction_resolves_in_one_tick() {
    let mut s = BoardBuilder::new()
        .bomb(2, 2, 0, 2, 1)
        .bomb(4, 2, 1, 2, 9)
        .bomb(4, 4, 2, 2, 9)
        .bomb(8, 8, 3, 1, 9)
        .build();
    step(&mut s, &IDLE);

    assert_eq!(s.bombs.len(), 1);
    assert_eq!(s.bombs[0].position(), Position::new(8, 8));
    assert_eq!(s.bombs[0].fuse(), 8);
    assert!(item::is_flame(s.item(4, 6)));
    assert_eq!(s.flames.len(), 3);
    for id in 0..3 {
        assert_eq!(s.agents[id].bomb_count, 0);
    }
    assert_eq!(s.agents[3].bomb_count, 1);
    assert_consistent(&s);
}

#[test]
fn overlapping_flames_outlive_the_older_blast() {
    let mut s = BoardBuilder::new()
        .bomb(4, 5, 0, 1, 1)
        .bomb(6, 5, 1, 1, 3)
        .build();
    step(&mut s, &IDLE);
    step(&mut s, &IDLE);
    step(&mut s, &IDLE);
    // Second blast goes off two ticks after the first, sharing (5,5).
    for _ in 0..2 {
        step(&mut s, &IDLE);
    }
    assert!(!item::is_flame(s.item(3, 5)));
    assert!(item::is_flame(s.item(5, 5)));
    assert!(item::is_flame(s.item(7, 5)));
    for _ in 0..2 {
        step(&mut s, &IDLE);
    }
    assert!(flamed_cells(&s).is_empty());
}

// ── Movement ────────────────────────────────────────────────────────

#[test]
fn two_agents_same_target_lower_id_wins() {
    let mut s = BoardBuilder::new().agent(0, 4, 5).agent(1, 6, 5).build();
    step(&mut s, &[Move::Right, Move::Left, Move::Idle, Move::Idle]);
    assert_eq!(s.agents[0].position(), Position::new(5, 5));
    assert_eq!(s.agents[1].position(), Position::new(6, 5));
    assert_eq!(s.item(5, 5), AGENT0);
    assert_eq!(s.item(4, 5), PASSAGE);
    assert_consistent(&s);
}

#[test]
fn lower_id_wins_regardless_of_direction() {
    let mut s = BoardBuilder::new().agent(3, 5, 4).agent(2, 5, 6).build();
    step(&mut s, &[Move::Idle, Move::Idle, Move::Up, Move::Down]);
    assert_eq!(s.agents[2].position(), Position::new(5, 5));
    assert_eq!(s.agents[3].position(), Position::new(5, 4));
}

#[test]
fn kicker_pushes_bomb_one_cell() {
    let mut s = BoardBuilder::new()
        .agent(0, 3, 5)
        .kicker(0)
        .bomb(4, 5, 2, 1, 8)
        .build();
    step(&mut s, &only(0, Move::Right));

    assert_eq!(s.agents[0].position(), Position::new(4, 5));
    assert_eq!(s.item(4, 5), AGENT0);
    assert_eq!(s.item(5, 5), BOMB);
    assert_eq!(s.bombs[0].position(), Position::new(5, 5));
    assert_eq!(s.bombs[0].fuse(), 7);
    assert_eq!(s.bombs[0].owner(), 2);
    assert_consistent(&s);
}

#[test]
fn competing_kicks_lower_id_wins() {
    // Both kickers push different bombs towards (5,5).
    let mut s = BoardBuilder::new()
        .agent(0, 3, 5)
        .agent(1, 5, 3)
        .kicker(0)
        .kicker(1)
        .bomb(4, 5, 2, 1, 8)
        .bomb(5, 4, 3, 1, 8)
        .build();
    step(&mut s, &[Move::Right, Move::Down, Move::Idle, Move::Idle]);

    assert_eq!(s.agents[0].position(), Position::new(4, 5));
    assert_eq!(s.agents[1].position(), Position::new(5, 3));
    assert_eq!(s.item(5, 5), BOMB);
    assert_eq!(s.item(5, 4), BOMB);
    assert_consistent(&s);
}

#[test]
fn kick_into_an_arriving_agent_is_blocked() {
    let mut s = BoardBuilder::new()
        .agent(0, 3, 5)
        .agent(1, 5, 6)
        .kicker(0)
        .bomb(4, 5, 2, 1, 8)
        .build();
    step(&mut s, &[Move::Right, Move::Up, Move::Idle, Move::Idle]);
    assert_eq!(s.agents[0].position(), Position::new(3, 5));
    assert_eq!(s.agents[1].position(), Position::new(5, 5));
    assert_eq!(s.bombs[0].position(), Position::new(4, 5));
    assert_consistent(&s);
}

#[test]
fn rolled_back_kick_frees_the_contested_cell() {
    // Agent 0 wins the bomb cell, but its kick lands where agent 3 is
    // stuck behind the idle agent 1. Agent 2 kicks the same bomb instead.
    let mut s = BoardBuilder::new()
        .agent(0, 4, 5)
        .agent(1, 7, 5)
        .agent(2, 5, 6)
        .agent(3, 6, 5)
        .kicker(0)
        .kicker(2)
        .bomb(5, 5, 1, 1, 8)
        .build();
    step(&mut s, &[Move::Right, Move::Idle, Move::Up, Move::Right]);

    assert_eq!(s.agents[0].position(), Position::new(4, 5));
    assert_eq!(s.agents[1].position(), Position::new(7, 5));
    assert_eq!(s.agents[2].position(), Position::new(5, 5));
    assert_eq!(s.agents[3].position(), Position::new(6, 5));
    assert_eq!(s.bombs[0].position(), Position::new(5, 4));
    assert_eq!(s.item(5, 4), BOMB);
    assert_eq!(s.item(5, 6), PASSAGE);
    assert_consistent(&s);
}

#[test]
fn corner_agents_walk_out_together() {
    let mut s = cornered_state();
    step(&mut s, &[Move::Right, Move::Down, Move::Left, Move::Up]);
    assert_eq!(s.agents[0].position(), Position::new(1, 0));
    assert_eq!(s.agents[1].position(), Position::new(10, 1));
    assert_eq!(s.agents[2].position(), Position::new(9, 10));
    assert_eq!(s.agents[3].position(), Position::new(0, 9));
    assert_consistent(&s);
}

#[test]
fn moving_into_a_blocked_agent_is_blocked() {
    let mut s = BoardBuilder::new()
        .agent(0, 3, 5)
        .agent(1, 4, 5)
        .agent(2, 5, 5)
        .rigid(6, 5)
        .build();
    step(&mut s, &[Move::Right, Move::Right, Move::Right, Move::Idle]);
    assert_eq!(s.agents[0].position(), Position::new(3, 5));
    assert_eq!(s.agents[1].position(), Position::new(4, 5));
    assert_eq!(s.agents[2].position(), Position::new(5, 5));
    assert_consistent(&s);
}

#[test]
fn powerup_caps_apply() {
    let mut s = BoardBuilder::new()
        .agent(0, 0, 5)
        .strength(0, 15)
        .item(1, 5, item::INCRRANGE)
        .build();
    step(&mut s, &only(0, Move::Right));
    assert_eq!(s.agents[0].bomb_strength, 15);
    assert_eq!(s.item(1, 5), AGENT0);
}

#[test]
fn planting_is_ignored_on_flames_and_at_capacity() {
    let mut s = BoardBuilder::new().agent(0, 5, 5).build();
    s.spawn_flame(5, 5, 0);
    step(&mut s, &only(0, Move::Bomb));
    assert!(s.bombs.is_empty());
    assert!(s.agents[0].dead);

    let mut s = BoardBuilder::new().agent(1, 5, 5).build();
    step(&mut s, &only(1, Move::Bomb));
    step(&mut s, &only(1, Move::Up));
    step(&mut s, &only(1, Move::Bomb));
    assert_eq!(s.bombs.len(), 1);
    assert_eq!(s.agents[1].bomb_count, 1);
}

#[test]
fn dead_agents_keep_still() {
    let mut s = BoardBuilder::new().agent(0, 5, 5).dead(0).build();
    step(&mut s, &only(0, Move::Right));
    step(&mut s, &only(0, Move::Bomb));
    assert_eq!(s.agents[0].position(), Position::new(5, 5));
    assert!(s.bombs.is_empty());
    assert_eq!(s.alive_agents, 3);
}
