use crate::key::EntityKey;

///
/// HasKey
///
/// Capability of exposing a primary key.
///
/// Implemented per entity kind (usually through `#[derive(HasKey)]`) so the
/// oracle can read keys from customers, orders, aliases and friends without
/// a shared base type.
///

pub trait HasKey {
    fn entity_key(&self) -> EntityKey;
}

impl<T> HasKey for &T
where
    T: HasKey + ?Sized,
{
    fn entity_key(&self) -> EntityKey {
        (**self).entity_key()
    }
}

impl<T> HasKey for Box<T>
where
    T: HasKey + ?Sized,
{
    fn entity_key(&self) -> EntityKey {
        (**self).entity_key()
    }
}

impl HasKey for EntityKey {
    fn entity_key(&self) -> EntityKey {
        self.clone()
    }
}

impl HasKey for str {
    fn entity_key(&self) -> EntityKey {
        EntityKey::new(self)
    }
}

impl HasKey for String {
    fn entity_key(&self) -> EntityKey {
        EntityKey::new(self.as_str())
    }
}
