use friedrichdb_core::Field;
use serde::Deserialize;

use crate::{Document, Query, Result};

/// Values that convert to and from JSON text.
///
/// This is what a [`Journal`](crate::Journal) records. The trait is object safe so
/// journals can take any entry as `&dyn Serializable`.
pub trait Serializable {
    /// Renders `self` as compact JSON.
    fn serialization_json(&self) -> Result<String>;

    /// Parses a value previously produced by [`Serializable::serialization_json`].
    fn deserialization_json(text: &str) -> Result<Self>
    where
        Self: Sized;
}

macro_rules! impl_serializable {
    ($($t:ty),* $(,)?) => {
        $(
            impl Serializable for $t {
                fn serialization_json(&self) -> Result<String> {
                    Ok(serde_json::to_string(self)?)
                }

                fn deserialization_json(text: &str) -> Result<Self> {
                    let mut de = serde_json::Deserializer::from_str(text);
                    de.disable_recursion_limit();
                    let value = <$t>::deserialize(&mut de)?;
                    de.end()?;
                    Ok(value)
                }
            }
        )*
    };
}

impl_serializable!(Field, Document, Query);
