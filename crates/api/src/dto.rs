//! Wire representation of the entity resource.

use serde::{Deserialize, Serialize};
use starter_core::types::DbId;

/// Transfer record for `/entities` request and response bodies.
///
/// Both fields may be omitted on input; a missing `id` on `POST` lets the
/// backend assign one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub description: Option<String>,
}
