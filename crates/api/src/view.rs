//! Wire views the entity handlers can be instantiated with.
//!
//! The handlers are generic over [`EntityView`]; [`crate::config::MappingMode`]
//! picks `EntityDto` (through the mapper) or the storage `Entity` itself.

use serde::de::DeserializeOwned;
use serde::Serialize;
use starter_db::models::entity::Entity;

use crate::dto::EntityDto;
use crate::mapper;

pub trait EntityView: Serialize + DeserializeOwned + Send + 'static {
    fn from_entity(entity: Entity) -> Self;

    fn into_entity(self) -> Entity;

    fn from_entities(entities: Vec<Entity>) -> Vec<Self> {
        entities.into_iter().map(Self::from_entity).collect()
    }
}

impl EntityView for EntityDto {
    fn from_entity(entity: Entity) -> Self {
        mapper::to_transfer(entity)
    }

    fn into_entity(self) -> Entity {
        mapper::to_entity(self)
    }

    fn from_entities(entities: Vec<Entity>) -> Vec<Self> {
        mapper::to_transfer_list(entities)
    }
}

impl EntityView for Entity {
    fn from_entity(entity: Entity) -> Self {
        entity
    }

    fn into_entity(self) -> Entity {
        self
    }
}
