//! `friedrichdb-core` provides [`Field`], the self-describing value type that
//! friedrichdb stores documents and query results in.
//!
//! # Features
//!
//! - **Six kinds**: Null, Boolean, Number, String, Array, Object
//! - **Heap payloads**: numbers, strings, arrays and objects each live in their own
//!   heap cell, allocated through a process-wide allocator policy (see [`install_allocator`])
//! - **Lazy promotion**: a null field becomes an object on its first [`Field::emplace`]
//!   and an array on its first [`Field::emplace_back`]
//! - **Stack-safe teardown**: dropping a field of any nesting depth never recurses
//! - **JSON text** (feature `serde`, on by default)
//!
//! # Design
//!
//! `Field` wraps a [`Payload`] enum. The enum discriminant is the field's kind, so a
//! kind/payload mismatch cannot be represented. `Field` is deliberately not `Clone`:
//! ownership of every subtree is exclusive, which is what lets teardown flatten the
//! tree into a worklist without reference counting.
//!
//! ```
//! use friedrichdb_core::Field;
//!
//! let mut doc = Field::new();
//! doc.emplace("name", "Alice").unwrap();
//! doc.emplace("age", 30).unwrap();
//! assert!(doc.is_object());
//! assert_eq!(doc.at("age").unwrap(), &Field::from(30));
//! ```

#[macro_use]
mod tracing_macros;

mod heap;
mod stack;
pub use heap::{CountingAllocator, HeapCell, install_allocator};

mod error;
pub use error::{FieldError, Result};

mod payload;
pub use payload::{FieldKind, Payload};

mod number;
pub use number::FNumber;

mod string;
pub use string::FString;

mod array;
pub use array::FArray;

mod object;
pub use object::FObject;

mod field;
pub use field::{Field, FieldIndex};

mod teardown;

mod format;
pub use format::format_field;

#[cfg(feature = "serde")]
mod serde_impl;
