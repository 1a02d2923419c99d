use crate::{
    build::{MappingConfig, build},
    error::MappingError,
    node::Mapping,
    shape::{ShapeId, TypeShape},
    traits::DocumentKind,
};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// MappingRegistry
///
/// Build-once read-through cache of mappings keyed by shape identity.
/// Concurrent first access builds at most once; readers never observe a
/// half-built graph because insertion happens after the build completes.
/// Failed builds are never cached, so a later call retries.
///

#[derive(Debug, Default)]
pub struct MappingRegistry {
    config: MappingConfig,
    cache: RwLock<HashMap<ShapeId, Arc<Mapping>>>,
}

impl MappingRegistry {
    #[must_use]
    pub fn new(config: MappingConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Mapping for a root shape, building it on first access.
    pub fn mapping(&self, shape: &'static TypeShape) -> Result<Arc<Mapping>, MappingError> {
        let id = shape.id();

        if let Some(mapping) = self.read_lock().get(&id) {
            return Ok(Arc::clone(mapping));
        }

        let mut cache = self.write_lock();
        if let Some(mapping) = cache.get(&id) {
            return Ok(Arc::clone(mapping));
        }

        let mapping = Arc::new(build(shape, &self.config)?);
        cache.insert(id, Arc::clone(&mapping));

        Ok(mapping)
    }

    /// Trait-keyed convenience over [`Self::mapping`].
    pub fn mapping_of<D: DocumentKind>(&self) -> Result<Arc<Mapping>, MappingError> {
        self.mapping(D::shape())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, HashMap<ShapeId, Arc<Mapping>>> {
        self.cache
            .read()
            .expect("mapping cache RwLock poisoned while acquiring read lock")
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, HashMap<ShapeId, Arc<Mapping>>> {
        self.cache
            .write()
            .expect("mapping cache RwLock poisoned while acquiring write lock")
    }
}

///
/// REGISTRY
/// process-wide instance with the default config
///

static REGISTRY: LazyLock<MappingRegistry> = LazyLock::new(MappingRegistry::default);

#[must_use]
pub fn registry() -> &'static MappingRegistry {
    &REGISTRY
}

///
/// TESTS
///
