use core::any::Any;
use core::fmt;
use std::hash::{Hash, Hasher};

/// Payload of a [`StateVariable`].
///
/// Implemented for every `Clone + PartialEq + Hash + Debug` type, so planning domains pick
/// plain Rust types (`bool`, `i32`, enums, `String`) rather than implementing this by hand.
/// Floats are not `Hash`; store them as [`Real`](crate::Real).
pub trait StateValue: Any + fmt::Debug {
    /// Independent deep copy.
    fn clone_value(&self) -> Box<dyn StateValue>;

    fn eq_value(&self, other: &dyn StateValue) -> bool;

    fn hash_value(&self, state: &mut dyn Hasher);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> StateValue for T
where
    T: Any + fmt::Debug + Clone + PartialEq + Hash,
{
    fn clone_value(&self) -> Box<dyn StateValue> {
        Box::new(self.clone())
    }

    fn eq_value(&self, other: &dyn StateValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_value(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A named, exclusively owned fact inside a [`WorldState`](crate::WorldState).
///
/// Cloning deep-copies the payload; two clones never observe each other's writes.
#[derive(Debug)]
pub struct StateVariable {
    name: String,
    value: Box<dyn StateValue>,
}

impl StateVariable {
    pub fn new<T: StateValue>(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &dyn StateValue {
        self.value.as_ref()
    }

    /// Typed read; `None` if the payload is not a `T`.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Replace the payload, possibly with a value of a different type.
    pub fn set<T: StateValue>(&mut self, value: T) {
        self.value = Box::new(value);
    }
}

impl Clone for StateVariable {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone_value(),
        }
    }
}

impl PartialEq for StateVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value.eq_value(other.value.as_ref())
    }
}

impl Eq for StateVariable {}

impl Hash for StateVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash_value(state);
    }
}
