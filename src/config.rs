/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub seed_roster: bool,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CHARACTER_SEED_ROSTER` (optional, default false): start with the
    ///   built-in sample roster instead of an empty store
    pub fn from_env() -> Result<Self, String> {
        let seed_roster = match std::env::var("CHARACTER_SEED_ROSTER") {
            Ok(val) => match val.as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => {
                    return Err(
                        "CHARACTER_SEED_ROSTER must be one of 0, 1, true, false".to_string()
                    )
                }
            },
            Err(_) => false,
        };

        Ok(Self { seed_roster })
    }
}
