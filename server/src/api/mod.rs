pub mod recipes;
pub mod testing;

use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// One failed validation check (mirrors recetario_core::FieldError)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldErrorBody {
    /// Dotted path of the offending field, e.g. "video_source.url"
    pub field: String,
    pub message: String,
}

impl From<recetario_core::FieldError> for FieldErrorBody {
    fn from(e: recetario_core::FieldError) -> Self {
        FieldErrorBody {
            field: e.field,
            message: e.message,
        }
    }
}

/// Error response for rejected recipe payloads, with per-field detail
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub fields: Vec<FieldErrorBody>,
}

impl From<recetario_core::ValidationErrors> for ValidationErrorResponse {
    fn from(errors: recetario_core::ValidationErrors) -> Self {
        ValidationErrorResponse {
            error: "Validation failed".to_string(),
            fields: errors.errors.into_iter().map(FieldErrorBody::from).collect(),
        }
    }
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse, ValidationErrorResponse, FieldErrorBody)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Add security scheme
    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        testing::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
