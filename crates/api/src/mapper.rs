//! Field-for-field conversion between storage entities and transfer records.

use starter_db::models::entity::Entity;

use crate::dto::EntityDto;

pub fn to_transfer(entity: Entity) -> EntityDto {
    EntityDto {
        id: entity.id,
        description: entity.description,
    }
}

pub fn to_entity(dto: EntityDto) -> Entity {
    Entity {
        id: dto.id,
        description: dto.description,
    }
}

pub fn to_transfer_list(entities: Vec<Entity>) -> Vec<EntityDto> {
    entities.into_iter().map(to_transfer).collect()
}

pub fn to_entity_list(dtos: Vec<EntityDto>) -> Vec<Entity> {
    dtos.into_iter().map(to_entity).collect()
}
