use super::{Record, Schema};

use std::any::TypeId;
use std::collections::HashMap;
use std::rc::Rc;

/// Per-reader memo of resolved schemas, keyed by record type.
///
/// Shared through `Rc`, so a cache (and a reader owning one) stays on the
/// thread that created it.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: HashMap<TypeId, Rc<Schema>>,
}

impl SchemaCache {
    pub fn new() -> SchemaCache {
        SchemaCache::default()
    }

    /// Returns the schema of `T`, resolving it on first use.
    pub fn get_or_resolve<T: Record>(&mut self) -> Rc<Schema> {
        self.schemas
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                let ty = T::record_type();
                let schema = Schema::resolve(ty);
                tracing::debug!(
                    record = ty.name,
                    columns = schema.len(),
                    "resolved record schema"
                );
                Rc::new(schema)
            })
            .clone()
    }

    /// Returns `true` if the schema of `T` has been resolved.
    pub fn contains<T: Record>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<T>())
    }

    /// Number of resolved schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn clear(&mut self) {
        self.schemas.clear();
    }
}
