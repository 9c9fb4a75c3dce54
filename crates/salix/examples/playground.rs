use common::ConfigBuilder;
use salix::{body::BodyBuilder, shape::Polygon, world::World};

#[path = "../examples_common.rs"]
mod common;

// left click spawns a mover, right click removes whatever sits under the
// cursor, arrows push the hovered body, the wheel spins it, c stops everything

fn init(world: &mut World) {
    let frame = [
        (0., 0., 240., 4.),
        (0., 136., 240., 4.),
        (0., 4., 4., 132.),
        (236., 4., 4., 132.),
    ];

    for (x, y, width, height) in frame {
        let shape = Polygon::rect(0., 0., width, height).unwrap();
        world.push_body(BodyBuilder::new(shape).position((x, y)));
    }

    let slab = Polygon::rect(0., 0., 40., 12.).unwrap();
    world.push_body(BodyBuilder::new(slab).position((130., 70.)).rotation(30.));

    let notch = Polygon::new([(0., 0.), (16., 16.), (32., 0.), (32., 32.), (0., 32.)]).unwrap();
    world.push_body(BodyBuilder::new(notch).position((60., 50.)));

    let runner = Polygon::rect(0., 0., 12., 12.).unwrap();
    world.push_body(BodyBuilder::new(runner).position((30., 110.)).mover());
}

fn main() {
    common::run_window(
        "playground",
        ConfigBuilder::default().draw_contact_points(true),
        init,
    );
}
