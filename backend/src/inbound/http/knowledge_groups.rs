//! Knowledge group HTTP handlers.
//!
//! ```text
//! POST /knowledge-group   user-id: user-123   {"name":"My Group","description":null}
//! GET  /knowledge-groups  user-id: user-123
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{GroupName, KnowledgeGroup, NewKnowledgeGroup, TraceId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::traced;
use crate::inbound::http::owner::OwnerHeader;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, empty_field_error, require_text};

const NAME: FieldName = FieldName::new("name");

/// Request body for `POST /knowledge-group`.
///
/// `name` is declared optional so a missing value is reported with the same
/// field-level detail as an empty one.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateKnowledgeGroupRequest {
    #[serde(default)]
    #[schema(required = true, min_length = 1, example = "My Group")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Test desc")]
    pub description: Option<String>,
}

/// Knowledge group as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct KnowledgeGroupResponse {
    /// Store-assigned identifier; hex for ObjectIds.
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "My Group")]
    pub name: String,
    /// Always present; `null` when no description was supplied.
    pub description: Option<String>,
    /// Value of the `user-id` header at creation.
    #[schema(example = "user-123")]
    pub created_by: String,
}

impl From<KnowledgeGroup> for KnowledgeGroupResponse {
    fn from(value: KnowledgeGroup) -> Self {
        Self {
            id: value.id().as_str().to_owned(),
            name: value.name().as_str().to_owned(),
            description: value.description().map(str::to_owned),
            created_by: value.created_by().as_str().to_owned(),
        }
    }
}

fn parse_name(raw: Option<String>) -> Result<GroupName, crate::domain::Error> {
    let text = require_text(raw, NAME)?;
    GroupName::new(text).map_err(|_| empty_field_error(NAME))
}

/// Create a knowledge group owned by the caller.
#[utoipa::path(
    post,
    path = "/knowledge-group",
    request_body = CreateKnowledgeGroupRequest,
    security(("UserIdHeader" = [])),
    responses(
        (status = 200, description = "Created group", body = KnowledgeGroupResponse),
        (status = 422, description = "Missing owner header or invalid body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["knowledge-groups"],
    operation_id = "createKnowledgeGroup"
)]
#[post("/knowledge-group")]
pub async fn create_knowledge_group(
    state: web::Data<HttpState>,
    trace_id: TraceId,
    owner: OwnerHeader,
    payload: web::Json<CreateKnowledgeGroupRequest>,
) -> ApiResult<web::Json<KnowledgeGroupResponse>> {
    let CreateKnowledgeGroupRequest { name, description } = payload.into_inner();
    let name = parse_name(name).map_err(|err| traced(err, &trace_id))?;
    let draft = NewKnowledgeGroup::new(name, description, owner.into_inner());

    let group = state
        .knowledge_groups
        .create(draft)
        .await
        .map_err(|err| traced(err, &trace_id))?;
    info!(
        trace_id = %trace_id,
        owner = %group.created_by(),
        group_id = %group.id(),
        "knowledge group created"
    );
    Ok(web::Json(group.into()))
}

/// List the knowledge groups created by the caller, in store order.
#[utoipa::path(
    get,
    path = "/knowledge-groups",
    security(("UserIdHeader" = [])),
    responses(
        (status = 200, description = "Groups owned by the caller", body = [KnowledgeGroupResponse]),
        (status = 422, description = "Missing owner header", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["knowledge-groups"],
    operation_id = "listKnowledgeGroups"
)]
#[get("/knowledge-groups")]
pub async fn list_knowledge_groups(
    state: web::Data<HttpState>,
    trace_id: TraceId,
    owner: OwnerHeader,
) -> ApiResult<web::Json<Vec<KnowledgeGroupResponse>>> {
    let owner = owner.into_inner();
    let groups = state
        .knowledge_groups_query
        .list_for_owner(&owner)
        .await
        .map_err(|err| traced(err, &trace_id))?;
    info!(
        trace_id = %trace_id,
        owner = %owner,
        count = groups.len(),
        "knowledge groups listed"
    );
    Ok(web::Json(groups.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests;
