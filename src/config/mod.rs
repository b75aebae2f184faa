pub mod settings;

pub use settings::*;

/// Load `.env.{APP_ENV}` when `APP_ENV` is set, then `.env`. Values already
/// present in the environment win; missing files are ignored.
pub fn load_dotenv() {
    if let Ok(app_env) = std::env::var("APP_ENV") {
        let file = format!(".env.{}", app_env);
        if dotenvy::from_filename(&file).is_ok() {
            tracing::debug!(file = %file, "loaded environment file");
        }
    }
    dotenvy::dotenv().ok();
}
