use common::ConfigBuilder;
use salix::prelude::*;
use tracing::info;

#[path = "../examples_common.rs"]
mod common;

// three movers march into a dead end and pile up one behind the other

fn init(world: &mut World) {
    let long_wall = || Polygon::rect(0., 0., 200., 6.).unwrap();
    world.push_body(BodyBuilder::new(long_wall()).position((20., 40.)));
    world.push_body(BodyBuilder::new(long_wall()).position((20., 70.)));

    let end_cap = Polygon::rect(0., 0., 6., 24.).unwrap();
    world.push_body(BodyBuilder::new(end_cap).position((214., 46.)));

    for lane in 0..3 {
        let id = world.push_body(
            BodyBuilder::new(Polygon::rect(0., 0., 14., 14.).unwrap())
                .position((30. + lane as FloatNum * 24., 51.))
                .mover(),
        );

        if let Some(body) = world.get_body_mut(id) {
            body.set_motion(|_| (1., 0.).into());
        }
    }

    world.observe(|body_id, event| {
        if *event == BodyEvent::Halted {
            info!(body_id, "halted");
        }
    });
}

fn main() {
    common::run_window("corridor", ConfigBuilder::default(), init);
}
