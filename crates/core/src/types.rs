/// Primary keys of the `entity` table are PostgreSQL `INTEGER`.
pub type DbId = i32;
