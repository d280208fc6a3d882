use std::{path::Path, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    entities::ChequeImage,
    errors::{InvalidImageData, ReadError},
};

fn data_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:([\w.+-]+/[\w.+-]+);base64,([A-Za-z0-9+/]+={0,2})$")
            .expect("hardcoded regex should be valid")
    })
}

fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

impl ChequeImage {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` URL, as produced by browser
    /// file readers.
    pub fn from_data_url(data_url: &str) -> Result<Self, ServerError> {
        let caps = data_url_pattern()
            .captures(data_url.trim())
            .ok_or_else(|| InvalidImageData::new())?;
        let mime_type = caps[1].to_string();
        let data = caps[2].to_string();
        STANDARD
            .decode(&data)
            .map_err(|e| InvalidImageData::with_debug(&e))?;
        Ok(Self { mime_type, data })
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<Path>,
    {
        let bytes = tokio::fs::read(path.as_ref())
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Ok(Self::from_bytes(mime_type_for(path.as_ref()), &bytes))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn decoded(&self) -> Result<Vec<u8>, ServerError> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| InvalidImageData::with_debug(&e))
    }
}
