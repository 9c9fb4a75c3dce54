pub mod context;
pub(crate) mod hooks;
pub(crate) mod store;

use std::ops::Shl;

use tracing::{debug, trace};

use crate::{
    body::{Body, ID},
    math::point::Point,
    world::store::BodyStore,
};

pub use context::Context;
pub use hooks::BodyEvent;

use self::hooks::CallbackHook;

/**
 * uuid generator
 */
struct IDDispatcher {
    current_id: ID,
}

impl Default for IDDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IDDispatcher {
    const fn new() -> Self {
        Self { current_id: 0 }
    }

    fn gen_id(&mut self) -> u32 {
        self.current_id = self.current_id.checked_add(1).expect("create too much id");
        self.current_id
    }

    fn reset(&mut self) {
        self.current_id = 0;
    }
}

/// registry of every body plus the tick that drives them
#[derive(Default)]
pub struct World {
    body_store: BodyStore,
    id_dispatcher: IDDispatcher,
    context: Context,
    frame_count: u128,
    callback_hook: CallbackHook,
}

impl World {
    #[inline]
    pub fn new() -> Self {
        World {
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let body_store = BodyStore::with_capacity(capacity);
        Self {
            body_store,
            ..Default::default()
        }
    }

    #[inline]
    pub fn push_body(&mut self, body: impl Into<Body>) -> ID {
        let mut body: Body = body.into();

        let body_id = self.id_dispatcher.gen_id();
        body.inject_id(body_id);

        debug!(body_id, "body joins the world");

        self.body_store.push(body);
        body_id
    }

    #[inline]
    pub fn has_body(&self, body_id: ID) -> bool {
        self.body_store.has_body(body_id)
    }

    #[inline]
    pub fn remove_body(&mut self, body_id: ID) {
        if self.has_body(body_id) {
            debug!(body_id, "body leaves the world");
            self.body_store.remove_body(body_id);
            self.callback_hook.release_scope(body_id);
        }
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.body_store.size()
    }

    #[inline]
    pub fn bodies_iter(&self) -> impl Iterator<Item = &Body> {
        self.body_store.iter()
    }

    #[inline]
    pub fn bodies_iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.body_store.iter_mut()
    }

    #[inline]
    pub fn get_body(&self, id: ID) -> Option<&Body> {
        self.body_store.get_body_by_id(id)
    }

    #[inline]
    pub fn get_body_mut(&mut self, id: ID) -> Option<&mut Body> {
        self.body_store.get_mut_body_by_id(id)
    }

    #[inline]
    pub fn frame_count(&self) -> u128 {
        self.frame_count
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// watch every body; the returned id feeds [`Self::unobserve`]
    pub fn observe<F>(&mut self, callback: F) -> u32
    where
        F: FnMut(ID, &BodyEvent) + 'static,
    {
        self.callback_hook.register_callback(None, callback)
    }

    /// watch one body; the subscription dies with it
    pub fn observe_body<F>(&mut self, body_id: ID, callback: F) -> Option<u32>
    where
        F: FnMut(ID, &BodyEvent) + 'static,
    {
        if !self.has_body(body_id) {
            return None;
        }

        Some(self.callback_hook.register_callback(Some(body_id), callback))
    }

    pub fn unobserve(&mut self, callback_id: u32) {
        self.callback_hook.unregister_callback(callback_id);
    }

    /// advance the simulation one step
    ///
    /// every active mover with a pending transform applies it tentatively,
    /// keeps it if its outline meets nothing, otherwise the step is undone
    /// and the mover comes to a full stop
    pub fn tick(&mut self) {
        self.frame_count += 1;

        for index in 0..self.body_store.size() {
            let Some(delta) = self.body_store[index].integrate_step() else {
                continue;
            };

            let body_id = self.body_store[index].id();

            if self.sweep_for_contact(index) {
                self.body_store[index].rollback_step(&delta);
                trace!(body_id, "step rolled back on contact");
                self.callback_hook.emit(body_id, &BodyEvent::Halted);
            } else {
                self.callback_hook.emit(body_id, &BodyEvent::Moved(delta));
            }
        }
    }

    // whether the body at this store position touches any other live body
    fn sweep_for_contact(&self, index: usize) -> bool {
        let body = &self.body_store[index];
        let Context {
            enable_rough_check,
            rough_check_margin,
        } = self.context;

        (0..self.body_store.size())
            .filter(|&other_index| other_index != index)
            .map(|other_index| &self.body_store[other_index])
            .filter(|other| other.is_active())
            .any(|other| {
                if enable_rough_check && !body.bounding_circles_overlap(other, rough_check_margin) {
                    return false;
                }

                body.collides_with(other)
            })
    }

    /// whether two stored bodies touch right now; false unless both ids live
    pub fn bodies_collide(&self, body_a_id: ID, body_b_id: ID) -> bool {
        if body_a_id == body_b_id {
            return false;
        }

        let body_a = self.body_store.get_body_by_id(body_a_id);
        let body_b = self.body_store.get_body_by_id(body_b_id);

        body_a
            .zip(body_b)
            .map(|(body_a, body_b)| {
                if self.context.enable_rough_check
                    && !body_a.bounding_circles_overlap(body_b, self.context.rough_check_margin)
                {
                    return false;
                }

                body_a.collides_with(body_b)
            })
            .unwrap_or(false)
    }

    /// ids of every body whose outline contains the point, in insertion order
    pub fn bodies_at(&self, point: impl Into<Point>) -> Vec<ID> {
        let point = point.into();

        self.body_store
            .iter()
            .filter(|body| body.contains_point(point))
            .map(|body| body.id())
            .collect()
    }

    // stop all movers, just drop their pending transform
    pub fn silent(&mut self) {
        self.bodies_iter_mut().for_each(|body| body.halt());
    }

    // remove all bodies
    #[inline]
    pub fn clear(&mut self) {
        self.body_store.clear();
        self.id_dispatcher.reset();
        self.callback_hook.release_all_scopes();
        self.frame_count = 0;
    }
}

impl<T> Shl<T> for &mut World
where
    T: Into<Body>,
{
    type Output = ID;
    fn shl(self, rhs: T) -> Self::Output {
        self.push_body(rhs.into())
    }
}
