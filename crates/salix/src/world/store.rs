use std::{
    collections::BTreeMap,
    ops::{Index, IndexMut},
};

use crate::body::{Body, ID};

/**
 * BodyStore keeps bodies in insertion order with an id index on the side
 */
#[derive(Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    index_map: BTreeMap<ID, usize>,
}

impl BodyStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            index_map: BTreeMap::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.bodies.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn push(&mut self, body: Body) {
        self.index_map.insert(body.id(), self.bodies.len());
        self.bodies.push(body);
    }

    pub fn has_body(&self, id: ID) -> bool {
        self.index_map.contains_key(&id)
    }

    pub fn remove_body(&mut self, id: ID) {
        self.bodies.retain(|body| body.id() != id);
        self.reindex();
    }

    // positions shift after a removal, rebuild the whole index
    fn reindex(&mut self) {
        self.index_map = self
            .bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (body.id(), index))
            .collect();
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index_map.clear();
    }

    pub fn get_body_by_id(&self, id: ID) -> Option<&Body> {
        self.index_map.get(&id).map(|&index| &self.bodies[index])
    }

    pub fn get_mut_body_by_id(&mut self, id: ID) -> Option<&mut Body> {
        let index = *self.index_map.get(&id)?;
        self.bodies.get_mut(index)
    }
}

impl Index<usize> for BodyStore {
    type Output = Body;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bodies[index]
    }
}

impl IndexMut<usize> for BodyStore {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.bodies[index]
    }
}
