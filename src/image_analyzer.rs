use crate::analysis::{final_score, AnalysisResult, ContentType};
use crate::reputation::SourceCredibility;

/// The six visual tells a human can check regardless of what the URL
/// heuristics say. Educational content, not a scoring input.
const VISUAL_TELLS: [&str; 7] = [
    "Look for these AI tells:",
    "Unusual or malformed hands/fingers",
    "Inconsistent lighting or shadows",
    "Weird text or gibberish in images",
    "Unnatural skin texture (too smooth)",
    "Impossible geometry or perspective",
    "Blurry or merged backgrounds",
];

/// Scores an image reference from its URL and hosting page. Only the URL
/// string is inspected; no bytes are fetched.
pub struct ImageAnalyzer {
    ai_tags: Vec<String>,
}

impl ImageAnalyzer {
    pub fn new(ai_tags: Vec<String>) -> Self {
        Self { ai_tags }
    }

    pub fn analyze(&self, image_url: &str, credibility: SourceCredibility) -> AnalysisResult {
        let mut result = AnalysisResult::new(ContentType::Image, credibility);
        let mut ai_score = 0.0_f64;

        if result.source_credibility.is_ai_platform {
            ai_score += 5.0;
            result
                .indicators
                .push("Image from known AI generation platform".to_string());
            if let Some(platform) = &result.source_credibility.platform {
                result.details.push(format!("Source: {platform}"));
            }
        }

        let url_lower = image_url.to_lowercase();
        for tag in &self.ai_tags {
            if url_lower.contains(tag.as_str()) {
                ai_score += 2.0;
                result.indicators.push(format!("URL contains \"{tag}\""));
            }
        }

        if url_lower.contains("cdn") && (url_lower.contains("ai") || url_lower.contains("generated"))
        {
            ai_score += 2.0;
            result
                .indicators
                .push("CDN URL suggests AI generation".to_string());
        }

        for tell in VISUAL_TELLS {
            result.details.push(tell.to_string());
        }

        result.score = final_score(ai_score);

        if result.score < 3 {
            result.details.push(
                "Note: Modern AI images are hard to detect. Check manually for the signs above."
                    .to_string(),
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_image_tags, SiteDatabase};
    use crate::reputation::SourceReputationAnalyzer;

    fn analyzer() -> ImageAnalyzer {
        ImageAnalyzer::new(default_image_tags())
    }

    fn classify(url: &str) -> SourceCredibility {
        SourceReputationAnalyzer::new(SiteDatabase::default()).classify(url)
    }

    #[test]
    fn test_ai_platform_image() {
        let result = analyzer().analyze(
            "https://cdn.midjourney.com/abc/grid_0.png",
            classify("https://www.midjourney.com/app"),
        );

        // Platform hit (5) plus the "midjourney" tag in the URL (2).
        assert!(result.score >= 7);
        assert!(result
            .indicators
            .iter()
            .any(|i| i == "Image from known AI generation platform"));
        assert!(result
            .details
            .iter()
            .any(|d| d == "Source: midjourney.com"));
    }

    #[test]
    fn test_plain_photo_url_gets_checklist_and_disclaimer() {
        let result = analyzer().analyze(
            "https://example.com/photos/holiday.jpg",
            classify("https://example.com/album"),
        );

        assert_eq!(result.score, 0);
        assert!(result.details.iter().any(|d| d == "Look for these AI tells:"));
        assert!(result
            .details
            .iter()
            .any(|d| d.starts_with("Note: Modern AI images are hard to detect")));
        // All six tells plus the heading plus the disclaimer.
        assert_eq!(result.details.len(), 8);
    }

    #[test]
    fn test_tag_matches_accumulate() {
        let result = analyzer().analyze(
            "https://img.example.com/stable diffusion/ai generated/out.png",
            classify("https://example.com"),
        );

        assert!(result
            .indicators
            .iter()
            .any(|i| i == "URL contains \"stable diffusion\""));
        assert!(result
            .indicators
            .iter()
            .any(|i| i == "URL contains \"ai generated\""));
        assert!(result.score >= 4);
    }

    #[test]
    fn test_checklist_always_present() {
        let high = analyzer().analyze(
            "https://cdn.ai-generated.example/x.png",
            classify("https://www.midjourney.com/"),
        );
        for tell in VISUAL_TELLS.iter().skip(1) {
            assert!(high.details.iter().any(|d| d == tell));
        }
    }

    #[test]
    fn test_score_clamped_at_ten() {
        // Every tag at once, from an AI platform, over a CDN.
        let url = "https://cdn.example/midjourney-dall-e-dalle-stable diffusion-ai generated-artificial intelligence-neural network-gpt-machine learning-synthetic-generated.png";
        let result = analyzer().analyze(url, classify("https://www.midjourney.com/"));

        assert_eq!(result.score, 10);
    }
}
