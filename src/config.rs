//! Credentials and service endpoints read from the environment.

use crate::clients::{
    errors::{Error, Result},
    youtube::DEFAULT_API_BASE_URL,
};

/// Spotify application client id.
pub const SPOTIFY_CLIENT_ID_VAR: &str = "RSPOTIFY_CLIENT_ID";
/// Spotify application client secret.
pub const SPOTIFY_CLIENT_SECRET_VAR: &str = "RSPOTIFY_CLIENT_SECRET";
/// YouTube Data API key.
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Optional override of the YouTube Data API endpoint.
pub const YOUTUBE_API_BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
/// Optional path to the yt-dlp executable.
pub const YTDLP_PATH_VAR: &str = "YTDLP_PATH";

/// Values loaded before any work begins.
#[derive(Debug, Clone)]
pub struct Settings {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub youtube_api_key: String,
    /// Defaults to the public Google endpoint
    pub youtube_api_base_url: String,
    /// Defaults to `yt-dlp` on the `PATH`
    pub ytdlp_path: String,
}

/// Template values such as `YOUR_API_KEY_HERE` left in a copied `.env`.
fn is_placeholder(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    value.is_empty()
        || value.contains("_here")
        || value.starts_with("your_")
        || value.starts_with('<')
        || value == "changeme"
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<String> {
    let value = lookup(var).ok_or_else(|| {
        Error::ConfigurationError(format!("Missing {var} in environment variables."))
    })?;
    if is_placeholder(&value) {
        return Err(Error::ConfigurationError(format!(
            "{var} still holds a placeholder value. Please set a real credential."
        )));
    }
    Ok(value.trim().to_string())
}

impl Settings {
    /// Load settings from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Settings {
            spotify_client_id: required(&lookup, SPOTIFY_CLIENT_ID_VAR)?,
            spotify_client_secret: required(&lookup, SPOTIFY_CLIENT_SECRET_VAR)?,
            youtube_api_key: required(&lookup, YOUTUBE_API_KEY_VAR)?,
            youtube_api_base_url: lookup(YOUTUBE_API_BASE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            ytdlp_path: lookup(YTDLP_PATH_VAR).unwrap_or_else(|| "yt-dlp".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    const VALID: &[(&str, &str)] = &[
        (SPOTIFY_CLIENT_ID_VAR, "0123456789abcdef"),
        (SPOTIFY_CLIENT_SECRET_VAR, "fedcba9876543210"),
        (YOUTUBE_API_KEY_VAR, "AIzaSyExampleKey"),
    ];

    #[test]
    fn loads_required_values_and_defaults() {
        let settings = Settings::from_lookup(lookup_from(VALID)).unwrap();
        assert_eq!(settings.spotify_client_id, "0123456789abcdef");
        assert_eq!(settings.youtube_api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.ytdlp_path, "yt-dlp");
    }

    #[test]
    fn missing_value_is_a_configuration_error() {
        let res = Settings::from_lookup(lookup_from(&VALID[..2]));
        match res {
            Err(Error::ConfigurationError(msg)) => assert!(msg.contains(YOUTUBE_API_KEY_VAR)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn placeholder_values_are_rejected() {
        for placeholder in ["Youtube_API_Key_Here", "YOUR_SPOTIPY_CLIENT_ID_HERE", "  ", "your_key"] {
            let mut pairs = VALID.to_vec();
            pairs[2] = (YOUTUBE_API_KEY_VAR, placeholder);
            assert!(
                matches!(
                    Settings::from_lookup(lookup_from(&pairs)),
                    Err(Error::ConfigurationError(_))
                ),
                "{placeholder:?} should be rejected"
            );
        }
    }
}
