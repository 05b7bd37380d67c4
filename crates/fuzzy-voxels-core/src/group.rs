//! Group structure for collecting scene objects under one name.
//!
//! A group keeps the objects of one materialization together so they can be
//! selected or counted as a unit.

use crate::scene::ObjectId;

/// A named collection of scene objects.
#[derive(Debug, Clone)]
pub struct Group {
    /// The unique name of this group.
    name: String,
    /// Member objects in link order.
    objects: Vec<ObjectId>,
}

impl Group {
    /// Creates a new empty group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Returns the name of this group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an object to this group.
    ///
    /// Returns false if the object was already a member.
    pub fn add_object(&mut self, object: ObjectId) -> bool {
        if self.objects.contains(&object) {
            return false;
        }
        self.objects.push(object);
        true
    }

    /// Returns whether this group contains an object.
    #[must_use]
    pub fn contains_object(&self, object: ObjectId) -> bool {
        self.objects.contains(&object)
    }

    /// Returns the member objects in link order.
    #[must_use]
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Returns the number of member objects.
    #[must_use]
    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if this group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
