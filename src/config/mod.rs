use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_position")]
    pub default_position: String,
    /// Baseline length of an ordinary working day ("8h" = 480 minutes).
    #[serde(default = "default_standard_workday")]
    pub standard_workday: String,
    /// Holiday calendar: a closed set of ISO dates (YYYY-MM-DD). Extended by
    /// editing this list, not by code change.
    #[serde(default)]
    pub holidays: Vec<String>,
}

fn default_position() -> String {
    "O".to_string()
}

fn default_standard_workday() -> String {
    "8h".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_position: default_position(),
            standard_workday: default_standard_workday(),
            holidays: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchbank")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchbank")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchbank.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchbank.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Parse the `standard_workday` field into minutes (default 480).
    pub fn standard_workday_minutes(&self) -> i64 {
        crate::utils::time::parse_work_duration(&self.standard_workday).unwrap_or(480)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Check the loaded configuration for problems (bad dates, bad duration).
    /// Returns the list of findings; empty means the config is sound.
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if crate::utils::time::parse_work_duration(&self.standard_workday).is_none() {
            findings.push(format!(
                "standard_workday '{}' is not a valid duration (expected e.g. '8h' or '7h30')",
                self.standard_workday
            ));
        }

        if crate::models::location::Location::from_code(&self.default_position).is_none() {
            findings.push(format!(
                "default_position '{}' is not a valid location code (O or F)",
                self.default_position
            ));
        }

        for h in &self.holidays {
            if crate::utils::date::parse_date(h).is_none() {
                findings.push(format!("holiday '{}' is not an ISO date (YYYY-MM-DD)", h));
            }
        }

        findings
    }
}
