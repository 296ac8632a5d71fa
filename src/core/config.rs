use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub openrouter_api_key: String,
    pub openrouter_model: Option<String>,
    pub greetings_table: Option<String>,
    pub local_mirror_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            supabase_url: env::var("SUPABASE_URL").map_err(|e| format!("SUPABASE_URL: {}", e))?,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map_err(|e| format!("SUPABASE_ANON_KEY: {}", e))?,
            openrouter_api_key: env::var("OPENROUTER_API_KEY")
                .map_err(|e| format!("OPENROUTER_API_KEY: {}", e))?,
            openrouter_model: env::var("OPENROUTER_MODEL").ok(),
            greetings_table: env::var("GREETINGS_TABLE").ok(),
            local_mirror_path: env::var("LOCAL_MIRROR_PATH").ok(),
        })
    }
}
