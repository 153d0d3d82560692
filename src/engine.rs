use crate::analysis::{AnalysisResult, EmailRiskAnalysis};
use crate::config::Config;
use crate::email_analyzer::EmailRiskAnalyzer;
use crate::image_analyzer::ImageAnalyzer;
use crate::page_analyzer::PageAnalyzer;
use crate::remote::RemoteScorer;
use crate::reputation::SourceReputationAnalyzer;
use crate::text_analyzer::TextAnalyzer;

/// Detail string surfaced when the remote path failed and the local
/// deterministic result was substituted.
pub const DEGRADED_MODE_DETAIL: &str = "AI analysis failed, using pattern matching";

/// Front door for all analysis. Owns one reputation analyzer shared by every
/// pipeline and an optional remote scorer built from the configuration.
/// All local entry points are synchronous, pure, and infallible; only the
/// enhanced paths touch the network, and those recover locally on any failure.
pub struct GuardianEngine {
    reputation: SourceReputationAnalyzer,
    text: TextAnalyzer,
    image: ImageAnalyzer,
    page: PageAnalyzer,
    email: EmailRiskAnalyzer,
    remote: Option<RemoteScorer>,
}

impl GuardianEngine {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let remote = if config.remote.enhanced_mode {
            if config.remote.api_key.is_empty() {
                log::warn!("enhanced mode enabled without an API key; using local analysis only");
                None
            } else {
                Some(RemoteScorer::new(config.remote.clone())?)
            }
        } else {
            None
        };

        Ok(Self {
            reputation: SourceReputationAnalyzer::new(config.site_database.clone()),
            text: TextAnalyzer::new(&config.text_patterns)?,
            image: ImageAnalyzer::new(config.image_tags.clone()),
            page: PageAnalyzer::new(),
            email: EmailRiskAnalyzer::new(config.email_vocabulary.clone()),
            remote,
        })
    }

    /// Swap in a remote scorer after construction; used by tests to aim the
    /// scorer at a controlled endpoint.
    pub fn with_remote(mut self, remote: RemoteScorer) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn analyze_text(&self, text: &str, source_url: &str) -> AnalysisResult {
        let credibility = self.reputation.classify(source_url);
        self.text.analyze(text, credibility)
    }

    pub fn analyze_image(&self, image_url: &str, source_url: &str) -> AnalysisResult {
        let credibility = self.reputation.classify(source_url);
        self.image.analyze(image_url, credibility)
    }

    pub fn analyze_page(&self, page_url: &str) -> AnalysisResult {
        let credibility = self.reputation.classify(page_url);
        self.page.analyze(credibility)
    }

    /// Link analysis is page analysis of the link target.
    pub fn analyze_link(&self, link_url: &str) -> AnalysisResult {
        self.analyze_page(link_url)
    }

    pub fn analyze_email(&self, email_text: &str) -> EmailRiskAnalysis {
        self.email.analyze(email_text)
    }

    /// Remote text scoring with local fallback. Any remote failure degrades
    /// to the deterministic result with a disclosure detail prepended; no
    /// error escapes to the caller.
    pub async fn analyze_text_enhanced(&self, text: &str, source_url: &str) -> AnalysisResult {
        let Some(remote) = &self.remote else {
            return self.analyze_text(text, source_url);
        };

        let credibility = self.reputation.classify(source_url);
        match remote.score_text(text, credibility.clone()).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("remote text analysis failed, using local analyzer: {e}");
                let mut result = self.text.analyze(text, credibility);
                result.details.insert(0, DEGRADED_MODE_DETAIL.to_string());
                result
            }
        }
    }

    /// Remote image scoring over caller-supplied bytes, with local fallback
    /// to the URL heuristics.
    pub async fn analyze_image_enhanced(
        &self,
        image_url: &str,
        image_bytes: &[u8],
        media_type: &str,
        source_url: &str,
    ) -> AnalysisResult {
        let Some(remote) = &self.remote else {
            return self.analyze_image(image_url, source_url);
        };

        let credibility = self.reputation.classify(source_url);
        match remote.score_image(image_bytes, media_type, credibility.clone()).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("remote image analysis failed, using local analyzer: {e}");
                let mut result = self.image.analyze(image_url, credibility);
                result.details.insert(0, DEGRADED_MODE_DETAIL.to_string());
                result
            }
        }
    }
}
