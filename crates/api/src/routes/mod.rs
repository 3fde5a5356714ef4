pub mod entity;
pub mod health;
