mod common;

use common::{BodyBuilder, WorldBuilder};
use cosmoforge_lib::model::camera::Camera;
use cosmoforge_lib::model::config::InteractionConfig;
use cosmoforge_lib::model::interaction::DragController;
use cosmoforge_lib::model::Vec2;

fn camera() -> Camera {
    // offset == screen_center, so world and screen coincide at zoom 1.
    Camera::new(100.0, 80.0)
}

#[test]
fn test_drag_pins_body_to_cursor() {
    let body = BodyBuilder::new().at(0.0, 0.0).mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().with_body(body).build();
    let camera = camera();
    let mut drag = DragController::new(10);

    drag.begin(id, Vec2::new(10.0, 10.0));
    drag.drag(&mut world, &camera, Vec2::new(20.0, 15.0));

    let body = world.body(id).unwrap();
    assert_eq!(body.position, Vec2::new(20.0, 15.0));
    assert_eq!(drag.held(), Some(id));
}

#[test]
fn test_release_applies_zoom_scaled_throw() {
    let body = BodyBuilder::new().at(0.0, 0.0).mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().with_body(body).build();
    let mut camera = camera();
    camera.zoom = 2.0;
    let cfg = InteractionConfig::default();
    let mut drag = DragController::new(cfg.drag_samples);

    drag.begin(id, Vec2::new(10.0, 10.0));
    for x in [12.0, 15.0, 20.0] {
        drag.drag(&mut world, &camera, Vec2::new(x, 10.0));
    }
    assert!(drag.release(&mut world, &camera, &cfg));

    // Screen sweep of 10 cells is 5 world units at zoom 2; gain is
    // throw_multiplier * throw_scale = 1.0.
    let body = world.body(id).unwrap();
    assert!((body.velocity.x - 5.0).abs() < 1e-12);
    assert_eq!(body.velocity.y, 0.0);
    assert_eq!(drag.held(), None);
}

#[test]
fn test_release_without_movement_does_not_throw() {
    let body = BodyBuilder::new().vel(1.0, 1.0).mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().with_body(body).build();
    let camera = camera();
    let cfg = InteractionConfig::default();
    let mut drag = DragController::new(cfg.drag_samples);

    drag.begin(id, Vec2::new(10.0, 10.0));
    assert!(!drag.release(&mut world, &camera, &cfg));
    assert_eq!(world.body(id).unwrap().velocity, Vec2::new(1.0, 1.0));
}

#[test]
fn test_held_body_still_attracts_but_does_not_move() {
    let anchor = BodyBuilder::new().at(0.0, 0.0).vel(5.0, 0.0).mass(1_000_000.0).build();
    let satellite = BodyBuilder::new().at(200.0, 0.0).mass(100.0).build();
    let (anchor_id, sat_id) = (anchor.id, satellite.id);

    let mut world = WorldBuilder::new()
        .with_body(anchor)
        .with_body(satellite)
        .build();
    world.update(Some(anchor_id)).expect("tick");

    // The integrator skipped the held body despite its velocity.
    assert_eq!(world.body(anchor_id).unwrap().position, Vec2::zeros());
    // But the satellite still fell toward it.
    assert!(world.body(sat_id).unwrap().velocity.x < 0.0);
}

#[test]
fn test_sync_drops_stale_hold() {
    let body = BodyBuilder::new().mass(100.0).build();
    let id = body.id;
    let mut world = WorldBuilder::new().with_body(body).build();
    let mut drag = DragController::new(10);

    drag.begin(id, Vec2::zeros());
    world.delete_body(id);
    drag.sync(&world);
    assert_eq!(drag.held(), None);
}

#[test]
fn test_selection_picks_nearest_hit() {
    let far = BodyBuilder::new().at(50.0, 40.0).mass(100.0).build();
    let near = BodyBuilder::new().at(58.0, 40.0).mass(100.0).build();
    let near_id = near.id;
    let world = WorldBuilder::new().with_body(far).with_body(near).build();
    let camera = camera();

    let hit = world.select_body_near(Vec2::new(55.0, 40.0), &camera, 5.0);
    assert_eq!(hit, Some(near_id));
}

#[test]
fn test_selection_misses_outside_margin() {
    let body = BodyBuilder::new().at(50.0, 40.0).mass(100.0).build();
    let world = WorldBuilder::new().with_body(body).build();
    let camera = camera();

    assert_eq!(world.select_body_near(Vec2::new(5.0, 5.0), &camera, 5.0), None);
}
