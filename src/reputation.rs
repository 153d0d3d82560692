use crate::config::SiteDatabase;
use serde::Serialize;
use url::Url;

/// Per-URL reputation classification. The booleans are independent: a domain
/// may sit in several categories at once, and no precedence is applied here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceCredibility {
    pub is_trusted: bool,
    pub is_official: bool,
    pub is_educational: bool,
    pub is_ai_platform: bool,
    pub is_content_farm: bool,
    pub is_verified: bool,
    pub platform: Option<String>,
}

/// Classifies URLs against the curated site database. Pure lookup, no I/O.
#[derive(Debug, Clone)]
pub struct SourceReputationAnalyzer {
    database: SiteDatabase,
}

impl SourceReputationAnalyzer {
    pub fn new(database: SiteDatabase) -> Self {
        Self { database }
    }

    /// Extract the lowercased hostname from a URL. Unparseable input degrades
    /// to the raw lowercased string so matching still gets a chance.
    pub fn extract_domain(url: &str) -> String {
        match Url::parse(url) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => host.to_lowercase(),
                None => url.to_lowercase(),
            },
            Err(_) => url.to_lowercase(),
        }
    }

    pub fn classify(&self, url: &str) -> SourceCredibility {
        let mut result = SourceCredibility::default();

        if url.is_empty() {
            return result;
        }

        let domain = Self::extract_domain(url);

        if self
            .database
            .trusted_news
            .iter()
            .any(|site| domain.contains(site.as_str()))
        {
            result.is_trusted = true;
        }

        // Official and educational lists carry bare suffixes, so suffix and
        // substring matches both count.
        if self
            .database
            .official_sources
            .iter()
            .any(|ext| domain.ends_with(ext.as_str()) || domain.contains(ext.as_str()))
        {
            result.is_official = true;
        }

        if self
            .database
            .educational
            .iter()
            .any(|ext| domain.ends_with(ext.as_str()) || domain.contains(ext.as_str()))
        {
            result.is_educational = true;
        }

        // First matching entry across the three AI platform lists wins.
        let ai_platform = self
            .database
            .ai_image_platforms
            .iter()
            .chain(self.database.ai_text_platforms.iter())
            .chain(self.database.ai_video_platforms.iter())
            .find(|site| domain.contains(site.as_str()));

        if let Some(platform) = ai_platform {
            result.is_ai_platform = true;
            result.platform = Some(platform.clone());
        }

        if self
            .database
            .content_farms
            .iter()
            .any(|site| domain.contains(site.as_str()))
        {
            result.is_content_farm = true;
        }

        if self
            .database
            .verified_platforms
            .iter()
            .any(|site| domain.contains(site.as_str()))
        {
            result.is_verified = true;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SourceReputationAnalyzer {
        SourceReputationAnalyzer::new(SiteDatabase::default())
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(
            SourceReputationAnalyzer::extract_domain("https://Example.com/path"),
            "example.com"
        );
        assert_eq!(
            SourceReputationAnalyzer::extract_domain("not a url"),
            "not a url"
        );
    }

    #[test]
    fn test_trusted_news_classification() {
        let result = analyzer().classify("https://www.reuters.com/world/some-story");
        assert!(result.is_trusted);
        assert!(!result.is_ai_platform);
        assert!(result.platform.is_none());
    }

    #[test]
    fn test_official_and_educational_suffixes() {
        let result = analyzer().classify("https://www.cdc.gov/flu");
        assert!(result.is_official);

        let result = analyzer().classify("https://web.mit.edu/research");
        assert!(result.is_educational);

        let result = analyzer().classify("https://history.ox.ac.uk/");
        assert!(result.is_educational);
    }

    #[test]
    fn test_ai_platform_first_match_wins() {
        let result = analyzer().classify("https://www.midjourney.com/gallery");
        assert!(result.is_ai_platform);
        assert_eq!(result.platform.as_deref(), Some("midjourney.com"));

        let result = analyzer().classify("https://claude.ai/chat");
        assert!(result.is_ai_platform);
        assert_eq!(result.platform.as_deref(), Some("claude.ai"));
    }

    #[test]
    fn test_empty_and_unknown_urls() {
        let result = analyzer().classify("");
        assert!(!result.is_trusted);
        assert!(!result.is_official);
        assert!(!result.is_ai_platform);

        let result = analyzer().classify("https://random-blog-site.example.net/");
        assert!(!result.is_trusted);
        assert!(!result.is_content_farm);
    }

    #[test]
    fn test_malformed_url_falls_back_to_substring_match() {
        // No scheme, so URL parsing fails and the raw string is matched.
        let result = analyzer().classify("reuters.com/article");
        assert!(result.is_trusted);
    }

    #[test]
    fn test_membership_is_monotone() {
        let url = "https://my-local-paper.example.org/news";
        let base = analyzer().classify(url);
        assert!(!base.is_trusted);

        let mut database = SiteDatabase::default();
        database
            .trusted_news
            .push("my-local-paper.example.org".to_string());
        let grown = SourceReputationAnalyzer::new(database).classify(url);

        assert!(grown.is_trusted);
        assert_eq!(grown.is_official, base.is_official);
        assert_eq!(grown.is_educational, base.is_educational);
        assert_eq!(grown.is_ai_platform, base.is_ai_platform);
        assert_eq!(grown.is_content_farm, base.is_content_farm);
        assert_eq!(grown.is_verified, base.is_verified);
    }

    #[test]
    fn test_categories_are_not_mutually_exclusive() {
        let mut database = SiteDatabase::default();
        database.trusted_news.push("claude.ai".to_string());
        let result = SourceReputationAnalyzer::new(database).classify("https://claude.ai/");

        assert!(result.is_trusted);
        assert!(result.is_ai_platform);
    }
}
