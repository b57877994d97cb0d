use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};

const INDEX_HTML: &str = "index.html";

/// Files of the bundled single-page application.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: Option<PathBuf>,
}

impl StaticFiles {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Answer a request for `path`: the asset itself when it exists,
    /// `index.html` otherwise so client-side routes resolve.
    pub async fn respond(&self, path: &str) -> Response {
        let Some(root) = &self.root else {
            return (StatusCode::NOT_FOUND, "Static folder not configured").into_response();
        };

        let relative = path.trim_start_matches('/');
        if !relative.is_empty() {
            let asset = urlencoding::decode(relative)
                .ok()
                .and_then(|decoded| resolve(root, &decoded));
            if let Some(asset) = asset {
                match tokio::fs::read(&asset).await {
                    Ok(bytes) => return file_response(&asset, bytes),
                    Err(e) => tracing::debug!("Asset {} not served: {}", asset.display(), e),
                }
            }
        }

        let index = root.join(INDEX_HTML);
        match tokio::fs::read(&index).await {
            Ok(bytes) => file_response(&index, bytes),
            Err(e) => {
                tracing::debug!("{} unavailable: {}", index.display(), e);
                (StatusCode::NOT_FOUND, "index.html not found").into_response()
            }
        }
    }
}

/// Join the already percent-decoded `relative` onto `root`, refusing anything
/// that could leave it.
fn resolve(root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    if relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        Some(root.join(relative))
    } else {
        None
    }
}

fn file_response(path: &Path, bytes: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_escapes() {
        let root = Path::new("/srv/static");
        assert_eq!(
            resolve(root, "assets/app.js"),
            Some(PathBuf::from("/srv/static/assets/app.js"))
        );
        assert_eq!(resolve(root, "../secret.txt"), None);
        assert_eq!(resolve(root, "assets/../../secret.txt"), None);
    }

    #[tokio::test]
    async fn test_unconfigured_folder() {
        let response = StaticFiles::new(None).respond("/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_directory_path_falls_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join(INDEX_HTML), "<html>home</html>").unwrap();

        let response = StaticFiles::new(Some(dir.path().to_path_buf()))
            .respond("/assets")
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }

    #[tokio::test]
    async fn test_percent_encoded_asset_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("my file.png"), b"png").unwrap();
        std::fs::write(dir.path().join(INDEX_HTML), "<html>home</html>").unwrap();
        let files = StaticFiles::new(Some(dir.path().to_path_buf()));

        let response = files.respond("/my%20file.png").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let response = files.respond("/%2e%2e/secret.txt").await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }
}
