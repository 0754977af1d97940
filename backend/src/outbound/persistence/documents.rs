//! BSON document shapes for the `knowledgeGroups` collection.
//!
//! These are internal to the adapter. Field names are the stored names:
//! `name`, `description`, `created_by`, plus the store-assigned `_id`.

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

use crate::domain::{KnowledgeGroup, NewKnowledgeGroup};

/// Document written on insert. `description` is stored as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct NewKnowledgeGroupDocument {
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
}

impl From<&NewKnowledgeGroup> for NewKnowledgeGroupDocument {
    fn from(value: &NewKnowledgeGroup) -> Self {
        Self {
            name: value.name().as_str().to_owned(),
            description: value.description().map(str::to_owned),
            created_by: value.owner().as_str().to_owned(),
        }
    }
}

/// Document read back from the collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct KnowledgeGroupDocument {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: String,
}

/// Stored document that cannot be represented as a domain group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DocumentError {
    #[error("unsupported _id type: {0}")]
    UnsupportedId(String),
    #[error("invalid stored group: {0}")]
    Invalid(String),
}

/// Render a store identifier as the string clients see.
///
/// ObjectIds become 24-character lowercase hex; string ids pass through.
pub(crate) fn render_id(id: &Bson) -> Result<String, DocumentError> {
    match id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(value) => Ok(value.clone()),
        other => Err(DocumentError::UnsupportedId(format!("{:?}", other.element_type()))),
    }
}

impl KnowledgeGroupDocument {
    /// Convert into the domain type, validating every field.
    pub(crate) fn into_domain(self) -> Result<KnowledgeGroup, DocumentError> {
        let Self {
            id,
            name,
            description,
            created_by,
        } = self;
        let id = render_id(&id)?;
        KnowledgeGroup::try_from_parts(id, name, description, created_by)
            .map_err(|err| DocumentError::Invalid(err.to_string()))
    }
}
