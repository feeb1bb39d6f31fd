use serde::{Deserialize, Serialize};

/// Response of the image upload endpoint.
///
/// The server answers with a path relative to its own origin
/// (`/uploads/20240101_ab12cd34.jpg`). Content stored through the admin editor
/// references images by absolute url, so callers join it with the API origin.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UploadResponse {
    pub url: String,
}

impl UploadResponse {
    /// Joins the returned path onto `origin`. Urls that are already absolute
    /// are returned unchanged.
    pub fn absolute_url(&self, origin: &str) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            return self.url.clone();
        }
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            self.url.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_path_with_origin() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"url":"/uploads/20240101_ab12cd34.jpg"}"#).unwrap();
        assert_eq!(
            response.absolute_url("http://localhost:8000/"),
            "http://localhost:8000/uploads/20240101_ab12cd34.jpg"
        );
    }

    #[test]
    fn keeps_absolute_url() {
        let response = UploadResponse {
            url: "https://cdn.example.com/a.png".to_string(),
        };
        assert_eq!(
            response.absolute_url("http://localhost:8000"),
            "https://cdn.example.com/a.png"
        );
    }
}
