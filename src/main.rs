use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use kindly_match::config::Settings;
use kindly_match::core::Matcher;
use kindly_match::models::ScoringWeights;
use kindly_match::routes::{self, AppState};
use kindly_match::services::{
    CacheManager, InvitationNotices, Mailer, SupabaseClient, SupabaseTables,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Initialize logging; LOG_LEVEL and LOG_FORMAT override the config file
    let (default_level, default_format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "json".to_string()),
    };
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(default_level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(default_format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Kindly matching service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // Storage is optional at startup; endpoints report the missing credentials
    let store = match settings.supabase.credentials() {
        Some((url, key)) => {
            let tables = SupabaseTables {
                profiles: settings.supabase.profiles_table.clone(),
                invitations: settings.supabase.invitations_table.clone(),
            };
            match SupabaseClient::new(url.to_string(), key.to_string(), tables) {
                Ok(client) => {
                    info!("Supabase client initialized for {}", url);
                    Some(Arc::new(client))
                }
                Err(e) => {
                    error!("Failed to build Supabase client: {}", e);
                    None
                }
            }
        }
        None => {
            warn!("Supabase URL or service role key missing, storage endpoints will fail");
            None
        }
    };

    let mailer = match settings.email.api_key() {
        Some(key) => match Mailer::new(
            settings.email.api_base.clone(),
            key.to_string(),
            settings.email.from.clone(),
        ) {
            Ok(mailer) => {
                info!("Mailer initialized (from: {})", settings.email.from);
                Some(Arc::new(mailer))
            }
            Err(e) => {
                error!("Failed to build mailer: {}", e);
                None
            }
        },
        None => {
            warn!("RESEND_API_KEY not set, invitation emails are disabled");
            None
        }
    };

    let cache = Arc::new(CacheManager::new(
        settings.cache.capacity,
        settings.cache.ttl_secs,
    ));

    info!(
        "Cache manager initialized ({} entries, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let app_state = AppState {
        store,
        mailer,
        cache,
        matcher,
        notices: InvitationNotices {
            admin_recipients: settings.email.admin_recipients.clone(),
        },
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
