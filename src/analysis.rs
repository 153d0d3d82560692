use crate::reputation::SourceCredibility;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Page,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Text => write!(f, "text"),
            ContentType::Image => write!(f, "image"),
            ContentType::Page => write!(f, "page"),
        }
    }
}

/// Result of one content analysis. Built fresh per call and handed to the
/// presentation layer; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub content_type: ContentType,
    pub score: u8,
    pub indicators: Vec<String>,
    pub details: Vec<String>,
    pub source_credibility: SourceCredibility,
    pub is_pro: bool,
}

impl AnalysisResult {
    pub fn new(content_type: ContentType, source_credibility: SourceCredibility) -> Self {
        Self {
            content_type,
            score: 0,
            indicators: Vec::new(),
            details: Vec::new(),
            source_credibility,
            is_pro: false,
        }
    }
}

/// Result of one email risk analysis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailRiskAnalysis {
    pub risk_level: u8,
    pub red_flags: Vec<String>,
    pub warnings: Vec<String>,
    pub safe_indicators: Vec<String>,
    pub links: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Round an accumulated rule score and clamp it into the 0-10 band. Every
/// scorer funnels through this, so no amount of rule accumulation can escape
/// the band.
pub fn final_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 10.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score_bands() {
        assert_eq!(final_score(0.0), 0);
        assert_eq!(final_score(0.4), 0);
        assert_eq!(final_score(1.5), 2);
        assert_eq!(final_score(7.5), 8);
        assert_eq!(final_score(9.9), 10);
        assert_eq!(final_score(25.0), 10);
        assert_eq!(final_score(-3.0), 0);
    }

    #[test]
    fn test_content_type_display() {
        assert_eq!(ContentType::Text.to_string(), "text");
        assert_eq!(ContentType::Image.to_string(), "image");
        assert_eq!(ContentType::Page.to_string(), "page");
    }
}
