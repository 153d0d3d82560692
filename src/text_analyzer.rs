use crate::analysis::{final_score, AnalysisResult, ContentType};
use crate::config::TextPatterns;
use crate::reputation::SourceCredibility;
use anyhow::Context;
use regex::Regex;

/// Scores raw text for AI-generation likelihood by accumulating weighted
/// pattern rules, then folding in the source reputation.
pub struct TextAnalyzer {
    common_phrases: Vec<String>,
    formal_patterns: Vec<Regex>,
    numbered_list: Regex,
    bullet_list: Regex,
    first_person: Regex,
}

impl TextAnalyzer {
    pub fn new(patterns: &TextPatterns) -> anyhow::Result<Self> {
        // Config-supplied regexes are compiled up front so a bad pattern
        // surfaces at startup, not mid-analysis.
        let formal_patterns = patterns
            .formal_patterns
            .iter()
            .map(|source| {
                Regex::new(source).with_context(|| format!("invalid formal pattern: {source}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            common_phrases: patterns.common_phrases.clone(),
            formal_patterns,
            numbered_list: Regex::new(r"(?m)^\d+\.\s.+$").unwrap(),
            bullet_list: Regex::new(r"(?m)^[-•*]\s.+$").unwrap(),
            first_person: Regex::new(r"(?i)\b(i|i'm|i've|my|me)\b").unwrap(),
        })
    }

    pub fn analyze(&self, text: &str, credibility: SourceCredibility) -> AnalysisResult {
        let mut result = AnalysisResult::new(ContentType::Text, credibility);
        let text_lower = text.to_lowercase();
        let mut ai_score = 0.0_f64;

        // Each known phrase counts once, however often it repeats. Matching is
        // raw substring containment, so "i cannot" also fires inside longer
        // words.
        let mut phrase_count = 0usize;
        for phrase in &self.common_phrases {
            if text_lower.contains(phrase.as_str()) {
                phrase_count += 1;
                result
                    .details
                    .push(format!("Contains AI phrase: \"{phrase}\""));
            }
        }
        if phrase_count > 0 {
            ai_score += (phrase_count as f64 * 1.5).min(4.0);
            result
                .indicators
                .push(format!("{phrase_count} common AI phrases detected"));
        }

        let formal_count: usize = self
            .formal_patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum();
        if formal_count > 3 {
            ai_score += 2.0;
            result
                .indicators
                .push("Overly formal writing style".to_string());
        }

        // Short, heavily structured snippets are typical of model responses.
        let has_numbered_list = self.numbered_list.is_match(text);
        let has_bullets = self.bullet_list.is_match(text);
        if (has_numbered_list || has_bullets) && text.len() < 500 {
            ai_score += 1.0;
            result
                .indicators
                .push("Structured format (common in AI responses)".to_string());
        }

        let sentences: Vec<&str> = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .collect();
        if sentences.len() > 5 {
            let avg_length = text.len() as f64 / sentences.len() as f64;
            if avg_length > 100.0 {
                ai_score += 1.0;
                result
                    .indicators
                    .push("Very long average sentence length".to_string());
            }
        }

        let first_person_count = self.first_person.find_iter(text).count();
        let word_count = text.split_whitespace().count();
        if word_count > 50 && first_person_count == 0 {
            ai_score += 1.5;
            result
                .indicators
                .push("No personal pronouns (impersonal tone)".to_string());
        }

        if result.source_credibility.is_trusted {
            ai_score = (ai_score - 2.0).max(0.0);
            result
                .details
                .push("Source is from trusted news outlet".to_string());
        } else if result.source_credibility.is_ai_platform {
            ai_score += 3.0;
            result
                .details
                .push("Source is known AI platform".to_string());
        }

        result.score = final_score(ai_score);
        log::debug!(
            "text analysis: raw score {ai_score:.1}, {} indicators",
            result.indicators.len()
        );

        if result.score == 0 && result.indicators.is_empty() {
            result
                .indicators
                .push("No obvious AI indicators detected".to_string());
            result
                .details
                .push("Text appears natural and conversational".to_string());
        }

        result
    }
}
