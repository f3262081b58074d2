use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

// Dashboard state service configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Start from the demo roster/catalog/schedule instead of empty state.
    pub seed_demo_data: bool,
    /// Upper bound on data rows a single CSV import may carry.
    pub max_import_rows: usize,
}

#[derive(Debug, Deserialize)]
struct DashboardConfigOverride {
    seed_demo_data: Option<bool>,
    max_import_rows: Option<usize>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        let seed_demo_data = std::env::var("SIDELINE_SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .with_context(|| "parse SIDELINE_SEED_DEMO_DATA")?;
        let max_import_rows = std::env::var("SIDELINE_MAX_IMPORT_ROWS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .with_context(|| "parse SIDELINE_MAX_IMPORT_ROWS")?;
        Ok(Self {
            seed_demo_data,
            max_import_rows,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("SIDELINE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read SIDELINE_CONFIG: {path}"))?;
            let override_cfg: DashboardConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse dashboard config yaml")?;
            if let Some(value) = override_cfg.seed_demo_data {
                config.seed_demo_data = value;
            }
            if let Some(value) = override_cfg.max_import_rows {
                config.max_import_rows = value;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: &'static str,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, prev }
        }

        fn unset(key: &'static str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, prev }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.prev {
                Some(value) => unsafe {
                    std::env::set_var(self.key, value);
                },
                None => unsafe {
                    std::env::remove_var(self.key);
                },
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        let _g1 = EnvGuard::unset("SIDELINE_SEED_DEMO_DATA");
        let _g2 = EnvGuard::unset("SIDELINE_MAX_IMPORT_ROWS");
        let _g3 = EnvGuard::unset("SIDELINE_CONFIG");

        let config = DashboardConfig::from_env_or_yaml().expect("config");
        assert!(config.seed_demo_data);
        assert_eq!(config.max_import_rows, 1000);
    }

    #[test]
    #[serial]
    fn env_values_override_defaults() {
        let _g1 = EnvGuard::set("SIDELINE_SEED_DEMO_DATA", "false");
        let _g2 = EnvGuard::set("SIDELINE_MAX_IMPORT_ROWS", "25");
        let _g3 = EnvGuard::unset("SIDELINE_CONFIG");

        let config = DashboardConfig::from_env().expect("config");
        assert!(!config.seed_demo_data);
        assert_eq!(config.max_import_rows, 25);
    }

    #[test]
    #[serial]
    fn invalid_env_value_is_reported() {
        let _g1 = EnvGuard::set("SIDELINE_SEED_DEMO_DATA", "definitely");
        let _g2 = EnvGuard::unset("SIDELINE_MAX_IMPORT_ROWS");

        let err = DashboardConfig::from_env().expect_err("parse failure");
        assert!(err.to_string().contains("SIDELINE_SEED_DEMO_DATA"));
    }

    #[test]
    #[serial]
    fn yaml_file_overrides_env() {
        let path = std::env::temp_dir().join(format!("sideline-config-{}.yaml", std::process::id()));
        fs::write(&path, "seed_demo_data: false\nmax_import_rows: 7\n").expect("write yaml");

        let _g1 = EnvGuard::unset("SIDELINE_SEED_DEMO_DATA");
        let _g2 = EnvGuard::unset("SIDELINE_MAX_IMPORT_ROWS");
        let _g3 = EnvGuard::set("SIDELINE_CONFIG", path.to_str().expect("utf8 path"));

        let config = DashboardConfig::from_env_or_yaml().expect("config");
        assert!(!config.seed_demo_data);
        assert_eq!(config.max_import_rows, 7);

        fs::remove_file(&path).expect("cleanup yaml");
    }

    #[test]
    #[serial]
    fn missing_yaml_file_is_reported() {
        let _g1 = EnvGuard::unset("SIDELINE_SEED_DEMO_DATA");
        let _g2 = EnvGuard::unset("SIDELINE_MAX_IMPORT_ROWS");
        let _g3 = EnvGuard::set("SIDELINE_CONFIG", "/nonexistent/sideline.yaml");

        let err = DashboardConfig::from_env_or_yaml().expect_err("read failure");
        assert!(err.to_string().contains("SIDELINE_CONFIG"));
    }
}
