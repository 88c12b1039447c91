use crate::StoreError;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub project_id: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, StoreError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api = get("FEEDBACK_STORE_API_KEY")
            .ok_or_else(|| StoreError::Config("FEEDBACK_STORE_API_KEY missing".into()))?;
        let project_id = get("FEEDBACK_STORE_PROJECT_ID")
            .ok_or_else(|| StoreError::Config("FEEDBACK_STORE_PROJECT_ID missing".into()))?;
        let base_url =
            get("FEEDBACK_STORE_BASE_URL").unwrap_or_else(|| "https://api.cafefeedback.io".into());
        Ok(Self {
            api_key: SecretString::new(api.into()),
            project_id,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_missing_api_key() {
        let get = |k: &str| match k {
            "FEEDBACK_STORE_API_KEY" => None,
            "FEEDBACK_STORE_PROJECT_ID" => Some("cafe-main".into()),
            "FEEDBACK_STORE_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(res.is_err());
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "FEEDBACK_STORE_API_KEY" => Some("sekrit".into()),
            "FEEDBACK_STORE_PROJECT_ID" => Some("cafe-main".into()),
            "FEEDBACK_STORE_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.project_id, "cafe-main");
        assert_eq!(cfg.base_url, "http://localhost");
    }

    #[test]
    fn from_env_defaults_base_url() {
        let get = |k: &str| match k {
            "FEEDBACK_STORE_API_KEY" => Some("sekrit".into()),
            "FEEDBACK_STORE_PROJECT_ID" => Some("cafe-main".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "https://api.cafefeedback.io");
    }
}
