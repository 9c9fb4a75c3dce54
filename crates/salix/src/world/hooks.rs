use crate::body::{Transform, ID};

/// what happened to a mover during a tick
#[derive(Clone, Debug, PartialEq)]
pub enum BodyEvent {
    /// the step stood; carries the transform that was applied
    Moved(Transform),
    /// the step met another body and was undone
    Halted,
}

struct BodyEventCallback {
    id: u32,
    // None watches the whole world
    scope: Option<ID>,
    callback: Box<dyn FnMut(ID, &BodyEvent)>,
}

impl BodyEventCallback {
    fn call(&mut self, body_id: ID, event: &BodyEvent) {
        (self.callback)(body_id, event)
    }
}

#[derive(Default)]
pub(crate) struct CallbackHook {
    callback_id_count: u32,
    body_event_callbacks: Vec<BodyEventCallback>,
}

impl CallbackHook {
    pub fn register_callback<F>(&mut self, scope: Option<ID>, callback: F) -> u32
    where
        F: FnMut(ID, &BodyEvent) + 'static,
    {
        self.callback_id_count += 1;
        let id = self.callback_id_count;
        let callback = BodyEventCallback {
            callback: Box::new(callback),
            scope,
            id,
        };
        self.body_event_callbacks.push(callback);
        id
    }

    pub fn unregister_callback(&mut self, callback_id: u32) {
        self.body_event_callbacks
            .retain(|callback| callback.id != callback_id)
    }

    /// drop every subscription bound to this body
    pub fn release_scope(&mut self, body_id: ID) {
        self.body_event_callbacks
            .retain(|callback| callback.scope != Some(body_id))
    }

    pub fn release_all_scopes(&mut self) {
        self.body_event_callbacks
            .retain(|callback| callback.scope.is_none())
    }

    pub fn emit(&mut self, body_id: ID, event: &BodyEvent) {
        for callback in self.body_event_callbacks.iter_mut() {
            if callback.scope.map_or(true, |scope| scope == body_id) {
                callback.call(body_id, event);
            }
        }
    }
}
