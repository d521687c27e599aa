use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authgate::{
  adapters::http::{
    RequestIdMiddleware, configure_account_routes, make_login_controller, make_signup_controller,
  },
  application::account::{AddAccountUseCase, AuthenticationUseCase},
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresAccountRepository, PostgresLogErrorRepository, create_lazy_pool, run_migrations,
    },
    security::{Argon2Hasher, JwtTokenIssuer},
    validation::EmailValidatorAdapter,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "authgate=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting authgate");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  // The pool connects on first use
  let db_pool = create_lazy_pool(&config.database).map_err(|e| {
    tracing::error!("Failed to create database pool: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;

  tracing::info!("Running database migrations");
  run_migrations(&db_pool, config.database.migrate_timeout_seconds)
    .await
    .map_err(|e| {
      tracing::error!("{}. Is PostgreSQL running at {}?", e, config.database.url);
      std::io::Error::other(e.to_string())
    })?;
  tracing::info!("Database migrations completed");

  // Repositories
  let account_repo = Arc::new(PostgresAccountRepository::new(db_pool.clone()));
  let log_error_repo = Arc::new(PostgresLogErrorRepository::new(db_pool));

  // Security services
  let hasher = Arc::new(
    Argon2Hasher::with_params(
      config.security.argon2_memory_cost_kib,
      config.security.argon2_time_cost,
      config.security.argon2_parallelism,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
  );
  let token_issuer = Arc::new(
    JwtTokenIssuer::new(
      &config.security.jwt_secret,
      config.security.access_token_ttl_seconds,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
  );
  let email_validator = Arc::new(EmailValidatorAdapter::new());

  // Use cases
  let add_account = Arc::new(AddAccountUseCase::new(
    hasher.clone(),
    account_repo.clone(),
  ));
  let authentication = Arc::new(AuthenticationUseCase::new(
    account_repo.clone(),
    hasher,
    token_issuer,
    account_repo,
  ));

  // Controllers
  let signup_controller =
    make_signup_controller(add_account, email_validator.clone(), log_error_repo.clone());
  let login_controller = make_login_controller(authentication, email_validator, log_error_repo);

  let (server_host, server_port) = config.server_address();
  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let signup_controller = signup_controller.clone();
    let login_controller = login_controller.clone();

    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(web::scope("/api").configure(|cfg| {
        configure_account_routes(cfg, signup_controller, login_controller)
      }))
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
