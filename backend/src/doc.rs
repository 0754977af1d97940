//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the knowledge group and health endpoints, the error
//! envelope schemas, and the `user-id` header as an API key scheme. Swagger UI
//! serves it in debug builds and `cargo run --bin openapi-dump` prints it.

use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::knowledge_groups::{CreateKnowledgeGroupRequest, KnowledgeGroupResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the trusted owner header as a security scheme.
struct OwnerHeaderAddon;

impl Modify for OwnerHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "UserIdHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "user-id",
                "Caller identity, taken verbatim. No authentication is performed.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&OwnerHeaderAddon),
    info(
        title = "Knowledge backend API",
        description = "Create and list knowledge groups owned by the calling user."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::knowledge_groups::create_knowledge_group,
        crate::inbound::http::knowledge_groups::list_knowledge_groups,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateKnowledgeGroupRequest,
        KnowledgeGroupResponse,
        HealthStatus,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "knowledge-groups", description = "Knowledge group storage"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
