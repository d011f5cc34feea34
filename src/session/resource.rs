use serde::Serialize;

/// How a reference document attached to a node should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Image,
    /// Anything else opens as a plain external link.
    External,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

impl ResourceKind {
    /// Classifies a resource url by its file extension. Query strings and
    /// fragments are ignored and matching is case-insensitive.
    pub fn detect(url: &str) -> Self {
        let path = url
            .split(['?', '#'])
            .next()
            .unwrap_or(url);
        let file = path.rsplit('/').next().unwrap_or(path);
        let Some((_, ext)) = file.rsplit_once('.') else {
            return ResourceKind::External;
        };
        let ext = ext.to_ascii_lowercase();

        if ext == "pdf" {
            ResourceKind::Pdf
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            ResourceKind::Image
        } else {
            ResourceKind::External
        }
    }

    /// Whether the resource can be shown inline rather than in a new tab.
    pub fn is_embeddable(&self) -> bool {
        !matches!(self, ResourceKind::External)
    }
}
