use crate::tools::Tool;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

static SCRIPT_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>")
        .expect("valid regex")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\f\v]+").expect("valid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").expect("valid regex"));

/// Fetches a web page and returns its readable text
#[derive(Debug)]
pub struct ScrapeWebsiteTool {
    client: Client,
}

impl ScrapeWebsiteTool {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Extracts the domain from a URL, rejecting non-HTTP schemes
    fn extract_domain(url: &str) -> Result<String, String> {
        let parsed = Url::parse(url).map_err(|e| format!("Invalid URL: {}", e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("Unsupported scheme '{}'", parsed.scheme()));
        }
        parsed
            .host_str()
            .map(|s| s.to_string())
            .ok_or_else(|| "No domain found in URL".to_string())
    }
}

/// Strips markup from an HTML document, keeping paragraph breaks
pub fn html_to_text(html: &str) -> String {
    let text = SCRIPT_STYLE.replace_all(html, " ");
    let text = TAG.replace_all(&text, "\n");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    let text = SPACES.replace_all(&text, " ");
    let text = text
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_LINES.replace_all(&text, "\n").trim().to_string()
}

#[async_trait]
impl Tool for ScrapeWebsiteTool {
    fn name(&self) -> &str {
        "scrape"
    }

    fn usage(&self) -> &str {
        "Read the text content of a web page. Usage: scrape <url>"
    }

    async fn invoke(&self, args: &[String]) -> Result<String, String> {
        let url = args.first().ok_or("Usage: scrape <url>")?;
        let domain = Self::extract_domain(url)?;
        debug!("Scraping {} ({})", url, domain);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;

        info!("GET {} -> status: {}", url, status);
        if !status.is_success() {
            return Err(format!("Page returned status {}", status));
        }
        Ok(html_to_text(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_html_to_text() {
        let html = r#"<html><head><style>p { color: red; }</style>
            <script type="text/javascript">var a = "<p>";</script></head>
            <body><h1>Offres</h1><p>Audit &amp; conseil</p>
            <p>  Tarif&nbsp;:   500€ </p></body></html>"#;
        assert_eq!(html_to_text(html), "Offres\nAudit & conseil\nTarif : 500€");
    }

    #[test]
    fn test_extract_domain_rejects_other_schemes() {
        assert_eq!(
            ScrapeWebsiteTool::extract_domain("https://www.malt.fr/profil").unwrap(),
            "www.malt.fr"
        );
        assert!(ScrapeWebsiteTool::extract_domain("file:///etc/passwd").is_err());
        assert!(ScrapeWebsiteTool::extract_domain("pas une url").is_err());
    }

    #[tokio::test]
    async fn test_scrape_page() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/services")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<main><h2>Services</h2><p>Refonte de site</p></main>")
            .create_async()
            .await;

        let tool = ScrapeWebsiteTool::new(Client::new());
        let output = tool
            .invoke(&[format!("{}/services", server.url())])
            .await
            .unwrap();
        assert_eq!(output, "Services\nRefonte de site");
    }

    #[tokio::test]
    async fn test_scrape_error_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let tool = ScrapeWebsiteTool::new(Client::new());
        let err = tool
            .invoke(&[format!("{}/missing", server.url())])
            .await
            .unwrap_err();
        assert!(err.contains("404"));
    }
}
