//! Stack-safe destruction of field trees.
//!
//! Dropping a composite field detaches its children into a worklist before the
//! container itself is released. Each child taken off the worklist is emptied the
//! same way, so by the time any field runs its own destructor it holds no children
//! and native stack depth stays constant however deep the tree is.

use crate::{Field, Payload};

impl Drop for Field {
    fn drop(&mut self) {
        let mut pending: Vec<Field> = match &mut self.payload {
            Payload::Array(array) if !array.is_empty() => array.take_items(),
            Payload::Object(object) if !object.is_empty() => object.take_values().collect(),
            _ => return,
        };
        trace!("tearing down {} with {} children", self.kind(), pending.len());

        while let Some(mut child) = pending.pop() {
            match &mut child.payload {
                Payload::Array(array) => pending.extend(array.take_items()),
                Payload::Object(object) => pending.extend(object.take_values()),
                Payload::Null | Payload::Boolean(_) | Payload::Number(_) | Payload::String(_) => {}
            }
            // `child` is shallow now and drops here.
        }
    }
}
