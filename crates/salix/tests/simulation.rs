//! Simulation runs driven entirely through the public world api.

use std::{cell::RefCell, rc::Rc};

use rand::{rngs::StdRng, Rng, SeedableRng};

use salix::prelude::*;

fn square(x: f64, y: f64) -> BodyBuilder {
    BodyBuilder::new(Polygon::rect(0., 0., 10., 10.).unwrap()).position((x, y))
}

#[test]
fn overlapping_squares_collide_both_ways() {
    let mut world = World::new();
    let a = world.push_body(square(0., 0.));
    let b = world.push_body(square(5., 5.));

    assert!(world.bodies_collide(a, b));
    assert!(world.bodies_collide(b, a));
}

#[test]
fn distant_squares_never_collide() {
    let mut world = World::new();
    let a = world.push_body(square(0., 0.));
    let b = world.push_body(square(0., 20.));

    assert!(!world.bodies_collide(a, b));
    assert!(!world.bodies_collide(b, a));
}

#[test]
fn tilted_square_reaches_into_its_neighbour() {
    // the 45 degree tilt swings the corners out past the axis aligned
    // footprint, close enough to cut into the square below
    let mut world = World::new();
    let a = world.push_body(square(0., 0.));
    let b = world.push_body(square(0., 2.05).rotation(45.));

    assert!(world.bodies_collide(a, b));
    assert!(world.bodies_collide(b, a));
}

#[test]
fn mover_commits_its_step_when_nothing_is_hit() {
    let mut world = World::new();
    let id = world.push_body(square(0., 0.).mover());
    world
        .get_body_mut(id)
        .unwrap()
        .set_motion(|_| (1., 0.).into());

    let events: Rc<RefCell<Vec<(ID, BodyEvent)>>> = Default::default();
    let sink = events.clone();
    world.observe(move |body_id, event| sink.borrow_mut().push((body_id, event.clone())));

    world.tick();

    let body = world.get_body(id).unwrap();
    assert_eq!(body.position(), (1., 0.).into());
    assert_eq!(body.motion(), (1., 0.).into());

    let moved: Transform = (Vector::from((1., 0.)), 0.).into();
    assert_eq!(*events.borrow(), vec![(id, BodyEvent::Moved(moved))]);
}

#[test]
fn mover_stops_dead_on_contact() {
    let mut world = World::new();
    let runner = world.push_body(square(0., 0.).mover());
    world.push_body(square(10.5, 2.));

    world
        .get_body_mut(runner)
        .unwrap()
        .set_motion(|_| (1., 0.).into());

    let events: Rc<RefCell<Vec<(ID, BodyEvent)>>> = Default::default();
    let sink = events.clone();
    world.observe(move |body_id, event| sink.borrow_mut().push((body_id, event.clone())));

    world.tick();

    // the step was undone and the intent dropped with it
    let body = world.get_body(runner).unwrap();
    assert_eq!(body.position(), (0., 0.).into());
    assert!(body.motion().is_zero());

    // with no intent left the next tick leaves the body alone
    world.tick();
    assert_eq!(world.get_body(runner).unwrap().position(), (0., 0.).into());

    assert_eq!(*events.borrow(), vec![(runner, BodyEvent::Halted)]);
}

#[test]
fn stopped_mover_runs_again_once_pushed() {
    let mut world = World::new();
    let runner = world.push_body(square(0., 0.).mover());
    world.push_body(square(10.5, 2.));

    world
        .get_body_mut(runner)
        .unwrap()
        .set_motion(|_| (1., 0.).into());
    world.tick();

    // fresh intent away from the obstacle
    world
        .get_body_mut(runner)
        .unwrap()
        .set_motion(|_| (-1., 0.).into());
    world.tick();

    assert_eq!(world.get_body(runner).unwrap().position(), (-1., 0.).into());
}

#[test]
fn inactive_body_neither_moves_nor_blocks() {
    let mut world = World::new();
    let runner = world.push_body(square(0., 0.).mover());
    let ghost = world.push_body(square(10.5, 2.).active(false));

    world
        .get_body_mut(runner)
        .unwrap()
        .set_motion(|_| (1., 0.).into());
    world.tick();

    assert_eq!(world.get_body(runner).unwrap().position(), (1., 0.).into());
    assert_eq!(world.get_body(ghost).unwrap().position(), (10.5, 2.).into());
}

#[test]
fn circle_reject_never_changes_the_answer() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut world = World::new();
    let mut ids = Vec::new();

    for _ in 0..16 {
        let width = rng.gen_range(2.0..30.0);
        let height = rng.gen_range(2.0..30.0);
        let builder = BodyBuilder::new(Polygon::rect(0., 0., width, height).unwrap())
            .position((rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0)))
            .rotation(rng.gen_range(-180.0..180.0));

        ids.push(world.push_body(builder));
    }

    world.context_mut().enable_rough_check = false;
    let mut exact = Vec::new();
    for &a in &ids {
        for &b in &ids {
            exact.push(world.bodies_collide(a, b));
        }
    }

    world.context_mut().enable_rough_check = true;
    let mut answers = exact.into_iter();
    for &a in &ids {
        for &b in &ids {
            let expected = answers.next().unwrap();
            assert_eq!(world.bodies_collide(a, b), expected, "pair ({a}, {b})");
            assert_eq!(world.bodies_collide(b, a), expected, "pair ({b}, {a})");
        }
    }
}
