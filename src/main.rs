pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::contact;
pub use modules::content;
pub use modules::media;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklistRepository;
use crate::auth::application::domain::OperatorCredentials;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::check_session::{CheckSessionService, CheckSessionUseCase};
use crate::auth::application::use_cases::login_operator::{
    LoginOperatorService, LoginOperatorUseCase,
};
use crate::auth::application::use_cases::logout_operator::{
    LogoutOperatorService, LogoutOperatorUseCase,
};

use crate::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::contact::application::use_cases::{SubmitContactService, SubmitContactUseCase};

use crate::content::adapter::outgoing::blog_post_repository_postgres::BlogPostRepositoryPostgres;
use crate::content::adapter::outgoing::education_repository_postgres::EducationRepositoryPostgres;
use crate::content::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::content::adapter::outgoing::hero_image_repository_postgres::HeroImageRepositoryPostgres;
use crate::content::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::content::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::content::application::use_cases::blog_posts::BlogPostContentService;
use crate::content::application::use_cases::education::EducationContentService;
use crate::content::application::use_cases::experiences::ExperienceContentService;
use crate::content::application::use_cases::hero_image::HeroImageService;
use crate::content::application::use_cases::projects::ProjectContentService;
use crate::content::application::use_cases::skills::SkillContentService;
use crate::content::application::use_cases::{
    BlogPostOps, EducationOps, ExperienceOps, HeroImageOps, ProjectOps, SkillOps,
};

use crate::media::adapter::outgoing::media_store_gcs::GcsMediaStore;
use crate::media::application::domain::UploadPolicy;
use crate::media::application::use_cases::upload_asset::{UploadAssetService, UploadAssetUseCase};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

// Largest accepted upload plus headroom; raw media bodies go through
// web::Bytes, so the payload limit is the only size gate before the
// upload policy runs.
const MAX_UPLOAD_PAYLOAD_BYTES: usize = 110 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub login_operator: Arc<dyn LoginOperatorUseCase>,
    pub logout_operator: Arc<dyn LogoutOperatorUseCase>,
    pub check_session: Arc<dyn CheckSessionUseCase>,
    pub projects: ProjectOps,
    pub skills: SkillOps,
    pub experiences: ExperienceOps,
    pub education: EducationOps,
    pub blogs: BlogPostOps,
    pub hero: HeroImageOps,
    pub upload_asset: Arc<dyn UploadAssetUseCase>,
    pub submit_contact: Arc<dyn SubmitContactUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    // SMTP: local Mailpit in test, real relay everywhere else
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let contact_recipient =
        env::var("CONTACT_RECIPIENT_EMAIL").expect("CONTACT_RECIPIENT_EMAIL not set");
    let smtp_sender = if env_name == "test" {
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Auth wiring: one operator account, credentials from the environment
    let jwt_config = JwtConfig::from_env();
    let token_ttl_seconds = jwt_config.access_token_expiry;
    let jwt_service = JwtTokenService::new(jwt_config);

    let hasher = Arc::new(Argon2Hasher::from_env());
    let credentials = OperatorCredentials::from_env();
    let blacklist = Arc::new(RedisTokenBlacklistRepository::new(Arc::clone(&redis_arc)));

    let login_operator = LoginOperatorService::new(
        credentials,
        hasher,
        Arc::new(jwt_service.clone()),
        token_ttl_seconds,
    );
    let logout_operator =
        LogoutOperatorService::new(Arc::new(jwt_service.clone()), blacklist.clone());
    let check_session = CheckSessionService::new(Arc::new(jwt_service.clone()), blacklist);

    // Content collections
    let projects_repo = Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc)));
    let skills_repo = Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc)));
    let experiences_repo = Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)));
    let education_repo = Arc::new(EducationRepositoryPostgres::new(Arc::clone(&db_arc)));
    let blogs_repo = Arc::new(BlogPostRepositoryPostgres::new(Arc::clone(&db_arc)));
    let hero_repo = Arc::new(HeroImageRepositoryPostgres::new(Arc::clone(&db_arc)));

    // Media + contact
    let upload_asset =
        UploadAssetService::new(UploadPolicy::from_env(), Arc::new(GcsMediaStore::new()));
    let submit_contact = SubmitContactService::new(Arc::new(smtp_sender), contact_recipient);

    let state = AppState {
        login_operator: Arc::new(login_operator),
        logout_operator: Arc::new(logout_operator),
        check_session: Arc::new(check_session),
        projects: ProjectOps::from_service(Arc::new(ProjectContentService::new(projects_repo))),
        skills: SkillOps::from_service(Arc::new(SkillContentService::new(skills_repo))),
        experiences: ExperienceOps::from_service(Arc::new(ExperienceContentService::new(
            experiences_repo,
        ))),
        education: EducationOps::from_service(Arc::new(EducationContentService::new(
            education_repo,
        ))),
        blogs: BlogPostOps::from_service(Arc::new(BlogPostContentService::new(blogs_repo))),
        hero: HeroImageOps::from_service(Arc::new(HeroImageService::new(hero_repo))),
        upload_asset: Arc::new(upload_asset),
        submit_contact: Arc::new(submit_contact),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(shared::api::custom_json_config())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_PAYLOAD_BYTES))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::check_session_handler);
    // Content: projects
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_project_handler);
    // Content: skills
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_skill_handler);
    // Content: experiences
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_experiences_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_experience_handler);
    // Content: education
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_education_handler);
    // Content: blogs
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_blogs_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_blog_post_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_blog_post_handler);
    // Content: hero image
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_hero_image_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::set_hero_image_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_hero_image_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_media_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
