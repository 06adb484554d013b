mod common;

use common::{BodyBuilder, WorldBuilder};
use cosmoforge_lib::model::body::radius_from_mass;
use cosmoforge_lib::model::events::SimEvent;
use cosmoforge_lib::model::stage::Stage;
use cosmoforge_lib::model::world::BodyProperty;

#[test]
fn test_mass_edit_ignites_a_red_dwarf() {
    let body = BodyBuilder::new().mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().with_body(body).build();

    let events = world
        .set_body_property(id, BodyProperty::Mass, 100_000.0)
        .expect("edit");

    let body = world.body(id).unwrap();
    assert_eq!(body.stage, Stage::RedDwarf);
    assert_eq!((body.r, body.g, body.b), (205, 92, 92));
    assert!(events.iter().any(|e| matches!(
        e,
        SimEvent::StageAdvance { from: Stage::Planet, to: Stage::RedDwarf, .. }
    )));
}

#[test]
fn test_single_edit_walks_multiple_thresholds() {
    let body = BodyBuilder::new().mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().with_body(body).build();

    world
        .set_body_property(id, BodyProperty::Mass, 900_000.0)
        .expect("edit");

    assert_eq!(world.body(id).unwrap().stage, Stage::RedGiant);
}

#[test]
fn test_merge_driven_supernova_leaves_a_black_hole() {
    // 1.5M + 1.5M = 3M on a blue giant row; retained 2.4M >= 2M.
    let a = BodyBuilder::new()
        .id(uuid::Uuid::from_u128(1))
        .at(0.0, 0.0)
        .mass(1_500_000.0)
        .stage(Stage::BlueGiant)
        .build();
    let b = BodyBuilder::new()
        .id(uuid::Uuid::from_u128(2))
        .at(10.0, 0.0)
        .mass(1_500_000.0)
        .stage(Stage::BlueGiant)
        .build();

    let mut world = WorldBuilder::new().without_gravity().with_body(a).with_body(b).build();
    let events = world.update(None).expect("tick");

    assert_eq!(world.bodies.len(), 1);
    let remnant = &world.bodies[0];
    assert_eq!(remnant.stage, Stage::BlackHole);
    assert!((remnant.mass - 2_400_000.0).abs() < 1e-6);
    assert_eq!(remnant.supernova_timer, 120);
    assert!(remnant.is_frozen());
    assert!(events.iter().any(|e| matches!(
        e,
        SimEvent::Supernova { remnant: Stage::BlackHole, .. }
    )));
}

#[test]
fn test_merge_driven_supernova_leaves_a_neutron_star() {
    // 1.5M + 0.7M = 2.2M; retained 1.76M < 2M: neutron star with the
    // pinned compact radius.
    let giant = BodyBuilder::new()
        .at(0.0, 0.0)
        .mass(1_500_000.0)
        .stage(Stage::BlueGiant)
        .build();
    let moon = BodyBuilder::new().at(10.0, 0.0).mass(700_000.0).build();

    let mut world = WorldBuilder::new()
        .without_gravity()
        .with_body(giant)
        .with_body(moon)
        .build();
    world.update(None).expect("tick");

    let remnant = &world.bodies[0];
    assert_eq!(remnant.stage, Stage::NeutronStar);
    assert!((remnant.mass - 1_760_000.0).abs() < 1e-6);
    assert_eq!(remnant.radius, 4.0);
}

#[test]
fn test_white_dwarf_detonates_at_the_chandrasekhar_limit() {
    let dwarf = BodyBuilder::new()
        .mass(1_000_000.0)
        .stage(Stage::WhiteDwarf)
        .build();
    let id = dwarf.id;
    let mut world = WorldBuilder::new().with_body(dwarf).build();

    let events = world
        .set_body_property(id, BodyProperty::Mass, 1_500_000.0)
        .expect("edit");

    let body = world.body(id).unwrap();
    assert_eq!(body.stage, Stage::NeutronStar);
    assert!(events
        .iter()
        .any(|e| matches!(e, SimEvent::Supernova { .. })));
}

#[test]
fn test_frozen_body_sits_out_integration() {
    let frozen = BodyBuilder::new().at(0.0, 0.0).vel(3.0, 0.0).mass(100.0).build();
    let mover = BodyBuilder::new().at(500.0, 0.0).vel(1.0, 0.0).mass(100.0).build();
    let frozen_id = frozen.id;
    let mover_id = mover.id;

    let mut world = WorldBuilder::new()
        .without_gravity()
        .with_body(frozen)
        .with_body(mover)
        .build();
    world
        .bodies
        .iter_mut()
        .find(|b| b.id == frozen_id)
        .unwrap()
        .supernova_timer = 10;

    world.update(None).expect("tick");

    assert_eq!(world.body(frozen_id).unwrap().position.x, 0.0);
    assert!((world.body(mover_id).unwrap().position.x - 500.5).abs() < 1e-12);
}

#[test]
fn test_supernova_timer_runs_on_frame_cadence() {
    let body = BodyBuilder::new().vel(1.0, 0.0).mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().without_gravity().with_body(body).build();
    world.bodies[0].supernova_timer = 2;

    world.update(None).expect("tick");
    assert_eq!(world.body(id).unwrap().supernova_timer, 1);
    assert_eq!(world.body(id).unwrap().position.x, 0.0);

    // Timer hits zero at the top of the frame; the body rejoins this tick.
    world.update(None).expect("tick");
    assert_eq!(world.body(id).unwrap().supernova_timer, 0);
    assert!((world.body(id).unwrap().position.x - 0.5).abs() < 1e-12);
}

#[test]
fn test_neutron_star_keeps_pinned_radius_until_collapse() {
    let star = BodyBuilder::new()
        .mass(1_900_000.0)
        .stage(Stage::NeutronStar)
        .radius(4.0)
        .build();
    let id = star.id;
    let mut world = WorldBuilder::new().with_body(star).build();

    world.nudge_mass(id, 1.02);
    assert_eq!(world.body(id).unwrap().radius, 4.0);

    let events = world.nudge_mass(id, 1.1);
    let body = world.body(id).unwrap();
    assert_eq!(body.stage, Stage::BlackHole);
    assert!((body.radius - radius_from_mass(body.mass)).abs() < 1e-12);
    assert!(events.iter().any(|e| matches!(
        e,
        SimEvent::StageAdvance { to: Stage::BlackHole, .. }
    )));
}
