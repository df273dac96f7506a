use chrono::Duration;

#[derive(Clone)]
pub struct SchedulingSettings {
    pub default_match_minutes: i64,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            default_match_minutes: 60,
        }
    }
}

impl SchedulingSettings {
    /// Duration assumed for a match whose end time has not been recorded.
    pub fn default_duration(&self) -> Duration {
        Duration::minutes(self.default_match_minutes)
    }
}

#[derive(Clone)]
pub struct ServerSettings {
    pub database_file: &'static str,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_file: "pool_hall.db",
        }
    }
}

impl ServerSettings {
    pub fn database_path(&self) -> String {
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| self.database_file.to_string())
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub scheduling: SchedulingSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scheduling: SchedulingSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
