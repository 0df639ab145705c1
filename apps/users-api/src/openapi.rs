use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "Create, read, rename and delete users"
    ),
    nest(
        (path = domain_users::handlers::BASE_PATH, api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_paths_are_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/users".to_string()), "{paths:?}");
        assert!(paths.contains(&"/users/{id}".to_string()), "{paths:?}");
    }
}
