/// Configuration for creating a surface.
#[derive(Debug, Clone)]
pub struct SurfaceSpec {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Inline HTML to render (toolbar and settings pages).
    pub html: Option<String>,
    pub transparent: bool,
    /// Dev tools (always on in debug builds).
    pub devtools: bool,
    pub autoplay: bool,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: true,
            devtools: cfg!(debug_assertions),
            autoplay: true,
        }
    }
}

impl SurfaceSpec {
    /// A content surface loading a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// A built-in surface rendering inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_spec_has_no_html() {
        let spec = SurfaceSpec::with_url("https://example.com");
        assert_eq!(spec.url.as_deref(), Some("https://example.com"));
        assert!(spec.html.is_none());
        assert!(spec.transparent);
    }

    #[test]
    fn html_spec_has_no_url() {
        let spec = SurfaceSpec::with_html("<html></html>");
        assert!(spec.url.is_none());
        assert!(spec.html.is_some());
    }
}
