use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
        HeaderName, HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Extension, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{admin, auth, comment, course, engagement, project, tool, upload, user},
        error::handle_panic,
        model::resource::ResourceKind,
        state::AppState,
    },
};

/// Request bodies above this size are rejected. Covers a 5 MB image plus form overhead.
const BODY_LIMIT: usize = 6 * 1024 * 1024;

const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3001",
];

#[derive(OpenApi)]
#[openapi(
    info(title = "Campus Hub API", description = "Software engineering resources for students"),
    paths(
        auth::register,
        auth::login,
        auth::forgot_password,
        user::logout,
        user::get_profile,
        user::update_profile,
        user::get_collection,
        user::delete_collection,
        user::get_status,
        user::get_summit,
        user::update_status,
        user::change_email,
        user::change_password,
        tool::list_tools,
        tool::search_tools,
        tool::get_tool,
        tool::submit_tool,
        tool::update_tool,
        course::list_courses,
        course::search_courses,
        course::get_course,
        course::submit_course,
        course::get_course_resources,
        course::add_course_resource,
        course::download_textbook,
        project::list_projects,
        project::search_projects,
        project::get_project,
        project::upload_project,
        project::update_project,
        engagement::like,
        engagement::unlike,
        engagement::collect,
        engagement::uncollect,
        engagement::view,
        comment::list_comments,
        comment::create_comment,
        comment::delete_comment,
        comment::delete_latest_comment,
        comment::reply_comment,
        comment::delete_reply,
        comment::like_comment,
        admin::get_pending,
        admin::review,
        admin::review_by_query,
        upload::upload_image,
        upload::process_image,
    ),
    components(schemas(ErrorDto)),
    modifiers(&BearerAuth),
    tags(
        (name = auth::AUTH_TAG, description = "Registration and login"),
        (name = user::USER_TAG, description = "Profile, collections, and submissions"),
        (name = tool::TOOL_TAG, description = "Software tools"),
        (name = course::COURSE_TAG, description = "Courses and their materials"),
        (name = project::PROJECT_TAG, description = "Student projects"),
        (name = engagement::ENGAGEMENT_TAG, description = "Likes, collections, and views"),
        (name = comment::COMMENT_TAG, description = "Comments and replies"),
        (name = admin::ADMIN_TAG, description = "Moderation"),
        (name = upload::UPLOAD_TAG, description = "Image upload"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// Builds the full application router.
///
/// # Arguments
/// - `state` - Shared application state; its image store root is served at `/uploads`
pub fn router(state: AppState) -> Router {
    let uploads = ServeDir::new(state.images.root());

    Router::new()
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest(
            "/tools",
            tool_routes().merge(resource_routes(ResourceKind::Tool, "collections", "views")),
        )
        .nest(
            "/course",
            course_routes().merge(resource_routes(ResourceKind::Course, "collections", "view")),
        )
        .nest(
            "/projects",
            project_routes().merge(resource_routes(ResourceKind::Project, "collected", "view")),
        )
        .nest("/admin", admin_routes())
        .nest("/api/upload", upload_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}


fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/forgot-password", post(auth::forgot_password))
}

/// Each profile and submission route also answers on the path the web client was
/// shipped with (`new_email`, `new_passward`, the trailing `/statu`, the trailing slash).
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(user::logout))
        .route("/profile", get(user::get_profile))
        .route("/update", post(user::update_profile))
        .route("/profile/email", post(user::change_email))
        .route("/profile/new_email", post(user::change_email))
        .route("/profile/password", post(user::change_password))
        .route("/profile/new_passward", post(user::change_password))
        .route("/collection", get(user::get_collection))
        .route(
            "/collection/{resource_type}/{resource_id}",
            delete(user::delete_collection),
        )
        .route(
            "/collection/{resource_type}/{resource_id}/",
            delete(user::delete_collection),
        )
        .route("/status", get(user::get_status))
        .route(
            "/status/{resource_type}/{resource_id}",
            put(user::update_status),
        )
        .route(
            "/status/{resource_type}/{resource_id}/statu",
            put(user::update_status),
        )
        .route("/summit", get(user::get_summit))
}

fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(tool::list_tools))
        .route("/search", get(tool::search_tools))
        .route("/submit", post(tool::submit_tool))
        .route("/{id}", get(tool::get_tool).put(tool::update_tool))
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list_courses))
        .route("/search", get(course::search_courses))
        .route("/submit", post(course::submit_course))
        .route("/{id}", get(course::get_course))
        .route(
            "/{id}/resources",
            get(course::get_course_resources).post(course::add_course_resource),
        )
        .route(
            "/{id}/textbooks/{textbook_id}/download",
            get(course::download_textbook),
        )
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(project::list_projects))
        .route("/search", get(project::search_projects))
        .route("/upload", post(project::upload_project))
        .route("/{id}", get(project::get_project).put(project::update_project))
}

/// Engagement and comment routes shared by every resource kind.
///
/// The kind reaches the handlers as an `Extension`. Only the collect and view segments
/// differ between kinds.
fn resource_routes(
    kind: ResourceKind,
    collect_segment: &str,
    view_segment: &str,
) -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/like",
            post(engagement::like).delete(engagement::unlike),
        )
        .route(
            &format!("/{{id}}/{}", collect_segment),
            post(engagement::collect).delete(engagement::uncollect),
        )
        .route(&format!("/{{id}}/{}", view_segment), post(engagement::view))
        .route(
            "/{id}/comments",
            get(comment::list_comments)
                .post(comment::create_comment)
                .delete(comment::delete_latest_comment),
        )
        .route(
            "/{id}/comments/{comment_id}",
            delete(comment::delete_comment),
        )
        .route(
            "/{id}/comments/{comment_id}/reply",
            post(comment::reply_comment).delete(comment::delete_reply),
        )
        .route(
            "/{id}/comments/{comment_id}/like",
            post(comment::like_comment),
        )
        .layer(Extension(kind))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/pending", get(admin::get_pending))
        .route(
            "/review/{item_id}",
            post(admin::review).get(admin::review_by_query),
        )
}

fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/image", post(upload::upload_image))
        .route("/process", post(upload::process_image))
}

/// Browser access from the local frontends, with credentials.
///
/// Credentialed CORS forbids wildcards, so methods and headers are listed explicitly.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            ACCEPT,
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(CORS_MAX_AGE)
}
