use std::path::Path;

use anyhow::{bail, Context, Result};

/// Credential file locations, relative to the working directory.
pub const TELEGRAM_TOKEN_FILE: &str = ".telegramToken";
pub const NEWS_API_KEY_FILE: &str = ".apikey";

/// Secrets loaded once at startup and held for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub bot_token: String,
    pub news_api_key: String,
}

impl Credentials {
    pub fn load() -> Result<Self> {
        Ok(Self {
            bot_token: read_secret(Path::new(TELEGRAM_TOKEN_FILE))?,
            news_api_key: read_secret(Path::new(NEWS_API_KEY_FILE))?,
        })
    }
}

/// Reads a credential file as trimmed text. Missing or empty files are
/// startup-fatal, so the error names the offending path.
fn read_secret(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read credential file: {}", path.display()))?;
    let secret = raw.trim();
    if secret.is_empty() {
        bail!("Credential file is empty: {}", path.display());
    }
    Ok(secret.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_secret_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  abc123\n").unwrap();
        assert_eq!(read_secret(&path).unwrap(), "abc123");
    }

    #[test]
    fn test_read_secret_trims_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "sk-test-key\r\n").unwrap();
        assert_eq!(read_secret(&path).unwrap(), "sk-test-key");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_secret(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Failed to read credential file"));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "   \n").unwrap();
        let err = read_secret(&path).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
