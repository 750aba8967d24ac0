use crate::error::{BindingError, Result};

/// An output binding the user function writes its result into
pub trait Out<T> {
    /// Store a value, replacing any previous one
    fn set(&mut self, val: T);

    /// Return the value most recently stored with [set](Out::set)
    fn get(&self) -> Result<T>;
}

/// An in-memory output binding
///
/// Reading the slot before anything was written fails with [BindingError::OutputNotSet].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutSlot<T> {
    value: Option<T>,
}

impl<T> OutSlot<T> {
    pub fn new() -> Self {
        OutSlot { value: None }
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Hand the stored value over to the host once the invocation has finished
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: Clone> Out<T> for OutSlot<T> {
    fn set(&mut self, val: T) {
        if self.value.is_some() {
            tracing::trace!("overwriting output binding");
        }
        self.value = Some(val);
    }

    fn get(&self) -> Result<T> {
        self.value.clone().ok_or(BindingError::OutputNotSet)
    }
}
