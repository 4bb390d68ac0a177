use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Base URL of the hosted table service
    pub supabase_url: String,
    /// Publishable key sent with every hosted table request
    pub supabase_publishable_key: String,
    /// Publishable key handed to browser clients for the auth widget
    pub auth_publishable_key: String,
    /// Moderation key; moderation endpoints stay locked while unset
    pub admin_key: Option<String>,
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// The hosted-service credentials have no usable fallback, so a
    /// missing one fails loading outright. Booting with a placeholder
    /// would only defer the failure to the first lead insert.
    pub fn from_vars<F>(var: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = var("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let supabase_url = var("SUPABASE_URL").ok_or("Missing env SUPABASE_URL")?;
        let supabase_publishable_key =
            var("SUPABASE_PUBLISHABLE_KEY").ok_or("Missing env SUPABASE_PUBLISHABLE_KEY")?;
        let auth_publishable_key = var("AUTH_PUBLISHABLE_KEY")
            .ok_or("Missing env AUTH_PUBLISHABLE_KEY - add it to your .env file")?;

        let admin_key = var("ADMIN_KEY").filter(|key| !key.is_empty());

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            supabase_url,
            supabase_publishable_key,
            auth_publishable_key,
            admin_key,
            allowed_origins,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
