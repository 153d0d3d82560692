use crate::analysis::{final_score, AnalysisResult, ContentType};
use crate::reputation::SourceCredibility;

/// Maps a page's reputation category straight to a score band. Unlike the text
/// and image analyzers this is not additive: each matching branch overwrites
/// the running score, and the later branches win. That ordering is load-bearing
/// for the observable scores, so keep this a lookup table.
pub struct PageAnalyzer;

impl PageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, credibility: SourceCredibility) -> AnalysisResult {
        let mut result = AnalysisResult::new(ContentType::Page, credibility);
        let mut ai_score = 5.0_f64;

        if result.source_credibility.is_trusted {
            ai_score = 2.0;
            result.indicators.push("Trusted news source".to_string());
            result
                .details
                .push("This is a reputable news organization with editorial standards".to_string());
        }

        if result.source_credibility.is_official {
            ai_score = 1.0;
            result
                .indicators
                .push("Official government/institutional source".to_string());
            result.details.push(
                "Government and official sources are unlikely to use AI-generated content"
                    .to_string(),
            );
        }

        if result.source_credibility.is_educational {
            ai_score = 2.0;
            result.indicators.push("Educational institution".to_string());
            result
                .details
                .push("Academic sources maintain quality standards".to_string());
        }

        if result.source_credibility.is_content_farm {
            ai_score = 7.0;
            result
                .indicators
                .push("Low-quality content site".to_string());
            result
                .details
                .push("This site is known for mass-produced content".to_string());
        }

        if result.source_credibility.is_ai_platform {
            ai_score = 9.0;
            result
                .indicators
                .push("Known AI content platform".to_string());
            let platform = result
                .source_credibility
                .platform
                .as_deref()
                .unwrap_or("an AI platform");
            result
                .details
                .push(format!("This is {platform} - content is AI-generated"));
        }

        let matched_any = result.source_credibility.is_trusted
            || result.source_credibility.is_official
            || result.source_credibility.is_educational
            || result.source_credibility.is_content_farm
            || result.source_credibility.is_ai_platform;
        if !matched_any {
            ai_score = 5.0;
            result
                .indicators
                .push("Unknown or unverified source".to_string());
            result
                .details
                .push("Cannot verify the credibility of this source".to_string());
            result
                .details
                .push("Be cautious and cross-check with trusted sources".to_string());
        }

        result.score = final_score(ai_score);
        result
    }
}

impl Default for PageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteDatabase;
    use crate::reputation::SourceReputationAnalyzer;

    fn classify(url: &str) -> SourceCredibility {
        SourceReputationAnalyzer::new(SiteDatabase::default()).classify(url)
    }

    #[test]
    fn test_trusted_news_band() {
        let result = PageAnalyzer::new().analyze(classify("https://www.bbc.com/news/world"));
        assert_eq!(result.score, 2);
        assert!(result.indicators.iter().any(|i| i == "Trusted news source"));
    }

    #[test]
    fn test_official_band() {
        let result = PageAnalyzer::new().analyze(classify("https://www.nasa.gov/missions"));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_educational_band_is_exactly_two() {
        let result = PageAnalyzer::new().analyze(classify("https://www.stanford.edu/class"));
        assert_eq!(result.score, 2);
        assert!(result
            .indicators
            .iter()
            .any(|i| i == "Educational institution"));
    }

    #[test]
    fn test_ai_text_platform_band_is_exactly_nine() {
        let result = PageAnalyzer::new().analyze(classify("https://chat.openai.com/c/123"));
        assert_eq!(result.score, 9);
        assert!(result
            .indicators
            .iter()
            .any(|i| i == "Known AI content platform"));
    }

    #[test]
    fn test_content_farm_band() {
        let result = PageAnalyzer::new().analyze(classify("https://www.taboola.com/stories"));
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_unknown_source_band_is_exactly_five() {
        let result = PageAnalyzer::new().analyze(classify("https://random-site.example.net/"));
        assert_eq!(result.score, 5);
        assert!(result
            .indicators
            .iter()
            .any(|i| i == "Unknown or unverified source"));
    }

    #[test]
    fn test_later_override_wins() {
        // A domain listed as both trusted and AI platform lands in the AI
        // platform band because that branch runs last.
        let mut database = SiteDatabase::default();
        database.trusted_news.push("claude.ai".to_string());
        let credibility = SourceReputationAnalyzer::new(database).classify("https://claude.ai/");

        let result = PageAnalyzer::new().analyze(credibility);
        assert_eq!(result.score, 9);
        // Both branches still contribute their indicator lines.
        assert!(result.indicators.iter().any(|i| i == "Trusted news source"));
        assert!(result
            .indicators
            .iter()
            .any(|i| i == "Known AI content platform"));
    }
}
