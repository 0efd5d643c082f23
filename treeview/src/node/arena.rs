use std::ops::{Index, IndexMut};

use super::{Node, NodeId};
use crate::error::{Result, TreeError};

struct Slot<D> {
    generation: u32,
    node: Option<Node<D>>,
}

/// Generational slot storage for tree nodes.
///
/// Links between nodes are [`NodeId`]s into this arena. Freed slots are
/// reused with a bumped generation so old handles never alias new nodes.
pub(crate) struct Arena<D> {
    slots: Vec<Slot<D>>,
    free: Vec<u32>,
    len: usize,
}

impl<D> Arena<D> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Store a node. Fails without side effects if memory cannot be reserved.
    pub fn insert(&mut self, node: Node<D>) -> Result<NodeId> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            self.len += 1;
            return Ok(NodeId {
                index,
                generation: slot.generation,
            });
        }

        let index = u32::try_from(self.slots.len()).map_err(|_| TreeError::OutOfMemory)?;
        self.slots.try_reserve(1)?;
        // Reserve room to free this slot later so removal never allocates.
        self.free.try_reserve(self.slots.len() + 1 - self.free.len())?;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        self.len += 1;
        Ok(NodeId {
            index,
            generation: 0,
        })
    }

    pub fn remove(&mut self, id: NodeId) -> Option<Node<D>> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<D>> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<D>> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

impl<D> Index<NodeId> for Arena<D> {
    type Output = Node<D>;

    fn index(&self, id: NodeId) -> &Node<D> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node link {id:?}"),
        }
    }
}

impl<D> IndexMut<NodeId> for Arena<D> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<D> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node link {id:?}"),
        }
    }
}
