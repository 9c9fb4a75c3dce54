use derive_builder::Builder;
use salix::body::{BodyBuilder, ID};
use salix::math::point::Point;
use salix::math::vector::Vector;
use salix::math::FloatNum;
use salix::shape::Polygon;
use salix::world::World;
use speedy2d::color::Color;
use speedy2d::dimen::Vector2;
use speedy2d::window::{
    MouseButton, MouseScrollDistance, VirtualKeyCode, WindowHandler, WindowHelper,
};
use speedy2d::Graphics2D;

const SPAWN_SIZE: FloatNum = 12.;

#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct Config {
    #[builder(default = "4.0")]
    scale: FloatNum,
    #[builder(default = "true")]
    draw_fill_spans: bool,
    #[builder(default = "true")]
    draw_center_point: bool,
    #[builder(default)]
    draw_contact_points: bool,
    #[builder(default)]
    is_default_paused: bool,
}

fn into_vector2(p: Point) -> Vector2<f32> {
    Vector2::new(p.x() as f32, p.y() as f32)
}

struct DrawHelper<'a> {
    graphics: &'a mut Graphics2D,
    scale: FloatNum,
    render_offset: Vector,
}

impl DrawHelper<'_> {
    fn draw_line(&mut self, start_point: &Point, end_point: &Point, color: Color) {
        self.graphics.draw_line(
            into_vector2(((start_point.to_vector() + self.render_offset) * self.scale).to_point()),
            into_vector2(((end_point.to_vector() + self.render_offset) * self.scale).to_point()),
            3.0,
            color,
        )
    }

    fn draw_circle(&mut self, center_point: &Point, radius: FloatNum, color: Color) {
        self.graphics.draw_circle(
            into_vector2(((center_point.to_vector() + self.render_offset) * self.scale).to_point()),
            (radius * self.scale) as f32,
            color,
        );
    }
}

pub struct Handler {
    world: World,
    init: Box<dyn FnMut(&mut World)>,
    config: Config,
    is_paused: bool,
    current_mouse_pos: Option<Point>,
    hovered_body_id: Option<ID>,
    render_offset: Vector,
}

impl Handler {
    fn mouse_world_pos(&self) -> Option<Point> {
        self.current_mouse_pos
            .map(|mouse_pos| mouse_pos - self.render_offset)
    }

    fn refresh_hover(&mut self) {
        self.hovered_body_id = self
            .mouse_world_pos()
            .and_then(|world_pos| self.world.bodies_at(world_pos).pop());
    }
}

impl WindowHandler for Handler {
    fn on_start(
        &mut self,
        _helper: &mut WindowHelper<()>,
        _info: speedy2d::window::WindowStartupInfo,
    ) {
        (self.init)(&mut self.world);
    }

    fn on_key_down(
        &mut self,
        _helper: &mut WindowHelper<()>,
        virtual_key_code: Option<speedy2d::window::VirtualKeyCode>,
        _scancode: speedy2d::window::KeyScancode,
    ) {
        if let Some(key) = virtual_key_code {
            match key {
                VirtualKeyCode::R => {
                    self.world.clear();
                    (self.init)(&mut self.world);
                }
                VirtualKeyCode::Space => {
                    self.is_paused = !self.is_paused;
                }
                VirtualKeyCode::C => {
                    self.world.silent();
                }
                VirtualKeyCode::W => {
                    self.render_offset += Vector::from((0., 2.));
                }
                VirtualKeyCode::S => {
                    self.render_offset -= Vector::from((0., 2.));
                }
                VirtualKeyCode::A => {
                    self.render_offset += Vector::from((2., 0.));
                }
                VirtualKeyCode::D => {
                    self.render_offset -= Vector::from((2., 0.));
                }
                VirtualKeyCode::Up
                | VirtualKeyCode::Down
                | VirtualKeyCode::Left
                | VirtualKeyCode::Right => {
                    let step: Vector = match key {
                        VirtualKeyCode::Up => (0., -1.).into(),
                        VirtualKeyCode::Down => (0., 1.).into(),
                        VirtualKeyCode::Left => (-1., 0.).into(),
                        _ => (1., 0.).into(),
                    };

                    if let Some(body) = self
                        .hovered_body_id
                        .and_then(|id| self.world.get_body_mut(id))
                    {
                        body.set_motion(|_| step);
                    }
                }
                _ => {}
            }
        }
    }

    fn on_mouse_button_up(
        &mut self,
        _helper: &mut WindowHelper<()>,
        button: speedy2d::window::MouseButton,
    ) {
        let Some(world_pos) = self.mouse_world_pos() else {
            return;
        };

        match button {
            MouseButton::Left => {
                let shape = Polygon::rect(0., 0., SPAWN_SIZE, SPAWN_SIZE).unwrap();
                let half = SPAWN_SIZE / 2.;

                self.world.push_body(
                    BodyBuilder::new(shape)
                        .position(world_pos - Vector::from((half, half)))
                        .mover(),
                );
            }
            MouseButton::Right => {
                for body_id in self.world.bodies_at(world_pos) {
                    self.world.remove_body(body_id);
                }
            }
            _ => {}
        }

        self.refresh_hover();
    }

    fn on_mouse_wheel_scroll(
        &mut self,
        _helper: &mut WindowHelper<()>,
        distance: speedy2d::window::MouseScrollDistance,
    ) {
        if let MouseScrollDistance::Lines { y, .. } = distance {
            let turn = if y > 0. { 5. } else { -5. };

            if let Some(body) = self
                .hovered_body_id
                .and_then(|id| self.world.get_body_mut(id))
            {
                body.set_rotation_rate(|_| turn);
            }
        }
    }

    fn on_mouse_move(&mut self, _helper: &mut WindowHelper<()>, position: speedy2d::dimen::Vec2) {
        self.current_mouse_pos = Some(Point::new(
            position.x as FloatNum / self.config.scale,
            position.y as FloatNum / self.config.scale,
        ));

        self.refresh_hover();
    }

    fn on_draw(&mut self, helper: &mut WindowHelper, graphics: &mut Graphics2D) {
        if !self.is_paused {
            self.world.tick();
        }

        graphics.clear_screen(Color::from_gray(0.8));

        let mut draw_helper = DrawHelper {
            graphics,
            scale: self.config.scale,
            render_offset: self.render_offset,
        };

        for i in 0..100 {
            draw_helper.draw_line(
                &((i as FloatNum) * 10., 0.).into(),
                &((i as FloatNum) * 10., 1000.).into(),
                Color::GRAY,
            )
        }

        for i in 0..100 {
            draw_helper.draw_line(
                &(0., (i as FloatNum) * 10.).into(),
                &(1000., (i as FloatNum) * 10.).into(),
                Color::GRAY,
            )
        }

        if self.config.draw_fill_spans {
            self.world.bodies_iter().for_each(|body| {
                for span in body.fill_spans() {
                    draw_helper.draw_line(
                        &body.to_world_point(*span.get_start_point()),
                        &body.to_world_point(*span.get_end_point()),
                        Color::from_gray(0.6),
                    );
                }
            });
        }

        let body_ids: Vec<ID> = self.world.bodies_iter().map(|body| body.id()).collect();

        self.world.bodies_iter().for_each(|body| {
            let is_hit = body_ids
                .iter()
                .any(|&other_id| self.world.bodies_collide(body.id(), other_id));

            let color = if Some(body.id()) == self.hovered_body_id {
                Color::YELLOW
            } else if is_hit {
                Color::RED
            } else if body.is_mover() {
                Color::GREEN
            } else {
                Color::WHITE
            };

            for edge in body.world_edges() {
                draw_helper.draw_line(edge.get_start_point(), edge.get_end_point(), color);
            }
        });

        if self.config.draw_center_point {
            self.world
                .bodies_iter()
                .for_each(|body| draw_helper.draw_circle(&body.center_point(), 1., Color::BLUE));
        }

        if self.config.draw_contact_points {
            for (index, &body_a_id) in body_ids.iter().enumerate() {
                for &body_b_id in &body_ids[index + 1..] {
                    let Some((body_a, body_b)) = self
                        .world
                        .get_body(body_a_id)
                        .zip(self.world.get_body(body_b_id))
                    else {
                        continue;
                    };

                    for contact_point in body_a.contact_points_with(body_b) {
                        draw_helper.draw_circle(&contact_point, 0.6, Color::MAGENTA);
                    }
                }
            }
        }

        helper.request_redraw();
    }
}

pub fn run_window(title: &str, config: ConfigBuilder, init: impl FnMut(&mut World) + 'static) {
    use speedy2d::Window;

    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    let window = Window::new_centered(title, (1920, 1080)).unwrap();

    let config: Config = config.build().unwrap();

    window.run_loop(Handler {
        world: World::new(),
        init: Box::new(init),
        is_paused: config.is_default_paused,
        config,
        current_mouse_pos: None,
        hovered_body_id: None,
        render_offset: Default::default(),
    });
}
