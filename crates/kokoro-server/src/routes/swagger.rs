use super::api;
use super::login;

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::user::get_user_info,
        api::v0::journal::get_dashboard,
        api::v0::journal::get_journal_entries,
        api::v0::journal::create_journal_entry,
        api::v0::journal::get_chart,
        api::v0::journal::analyze,
        api::v0::journal::journal_entry::get_journal_entry,
        api::v0::journal::journal_entry::update_journal_entry,
        api::v0::journal::journal_entry::delete_journal_entry,
        api::v0::premium::get_premium,
        api::v0::premium::initialize_payment,
        api::v0::premium::verify_payment,
        login::register,
        login::login,
        login::logout,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
pub(crate) struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Api Token"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/register",
            "/login",
            "/api/v0/journal/entries",
            "/api/v0/journal/entries/{journal_entry}",
            "/api/v0/premium/payments/verify",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("token"));
    }
}
