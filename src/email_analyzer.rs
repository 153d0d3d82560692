use crate::analysis::{final_score, EmailRiskAnalysis};
use crate::config::EmailVocabulary;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINK_REGEX: Regex = Regex::new(r"(?i)https?://[^\s]+").unwrap();
    static ref IP_REGEX: Regex = Regex::new(r"\d+\.\d+\.\d+\.\d+").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref PUNCT_RUNS: Regex = Regex::new(r"[.!?]{2,}").unwrap();
    static ref SCAM_KEYWORDS: Regex =
        Regex::new(r"(?i)(password|account|verify|urgent|prize|won|claim)").unwrap();
    static ref SENSITIVE_INFO: Regex =
        Regex::new(r"(?i)(password|ssn|social security|credit card|bank account)").unwrap();
}

/// Scores raw email text for scam risk. Independent phrase vocabularies and
/// link checks accumulate additively; recommendations are generated in a
/// second pass over the banded final risk level.
pub struct EmailRiskAnalyzer {
    vocabulary: EmailVocabulary,
}

impl EmailRiskAnalyzer {
    pub fn new(vocabulary: EmailVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn analyze(&self, email_text: &str) -> EmailRiskAnalysis {
        let mut analysis = EmailRiskAnalysis::default();
        let email_lower = email_text.to_lowercase();
        let mut risk_level = 0.0_f64;

        analysis.links = LINK_REGEX
            .find_iter(email_text)
            .map(|m| m.as_str().to_string())
            .collect();

        for phrase in &self.vocabulary.urgency_phrases {
            if email_lower.contains(phrase.as_str()) {
                risk_level += 1.5;
                analysis
                    .red_flags
                    .push(format!("Urgency language: \"{phrase}\""));
            }
        }

        for phrase in &self.vocabulary.financial_phrases {
            if email_lower.contains(phrase.as_str()) {
                risk_level += 1.5;
                analysis
                    .red_flags
                    .push(format!("Financial lure: \"{phrase}\""));
            }
        }

        for phrase in &self.vocabulary.credential_phrases {
            if email_lower.contains(phrase.as_str()) {
                risk_level += 2.0;
                analysis
                    .red_flags
                    .push(format!("Requests sensitive info: \"{phrase}\""));
            }
        }

        // Brand mentions alone are only a warning; plenty of legitimate mail
        // names Amazon or a bank.
        for term in &self.vocabulary.impersonation_terms {
            if email_lower.contains(term.as_str()) {
                risk_level += 0.5;
                analysis
                    .warnings
                    .push(format!("Mentions: {}", term.to_uppercase()));
            }
        }

        if !analysis.links.is_empty() {
            analysis.warnings.push(format!(
                "Contains {} link(s) - verify before clicking",
                analysis.links.len()
            ));

            for link in &analysis.links {
                if self
                    .vocabulary
                    .url_shorteners
                    .iter()
                    .any(|s| link.contains(s.as_str()))
                {
                    risk_level += 1.5;
                    analysis
                        .red_flags
                        .push("Shortened URL detected (hides real destination)".to_string());
                }

                if IP_REGEX.is_match(link) {
                    risk_level += 2.0;
                    analysis
                        .red_flags
                        .push("Link uses IP address instead of domain name".to_string());
                }

                if link.contains('-')
                    && (link.contains("verify")
                        || link.contains("secure")
                        || link.contains("account"))
                {
                    risk_level += 1.0;
                    analysis
                        .red_flags
                        .push("Suspicious URL pattern detected".to_string());
                }
            }
        }

        let formatting_issues =
            WHITESPACE_RUNS.find_iter(email_text).count() + PUNCT_RUNS.find_iter(email_text).count();
        if formatting_issues > 3 {
            risk_level += 1.0;
            analysis
                .red_flags
                .push(format!("Poor formatting ({formatting_issues} issues detected)"));
        }

        if self
            .vocabulary
            .generic_greetings
            .iter()
            .any(|g| email_lower.contains(g.as_str()))
        {
            risk_level += 1.0;
            analysis
                .red_flags
                .push("Generic greeting (not personalized)".to_string());
        }

        if analysis.links.is_empty() {
            analysis.safe_indicators.push("No links in email".to_string());
        }
        if !SCAM_KEYWORDS.is_match(email_text) {
            analysis
                .safe_indicators
                .push("No common scam keywords".to_string());
        }

        analysis.risk_level = final_score(risk_level);
        log::debug!(
            "email analysis: raw risk {risk_level:.1}, {} red flags, {} links",
            analysis.red_flags.len(),
            analysis.links.len()
        );

        self.recommend(email_text, &email_lower, &mut analysis);

        analysis
    }

    /// Threshold-driven primary recommendation over the final banded risk,
    /// plus independent content-triggered advice. These may co-occur.
    fn recommend(&self, email_text: &str, email_lower: &str, analysis: &mut EmailRiskAnalysis) {
        let primary = if analysis.risk_level > 7 {
            "HIGH RISK: This email shows multiple scam indicators. Do NOT respond, click links, \
             or provide information. Delete this email."
        } else if analysis.risk_level > 4 {
            "MEDIUM RISK: This email has suspicious elements. Verify independently before taking \
             action."
        } else if analysis.risk_level > 2 {
            "LOW-MEDIUM RISK: Exercise caution. Some suspicious patterns detected."
        } else {
            "LOW RISK: Few scam indicators, but always stay cautious."
        };
        analysis.recommendations.push(primary.to_string());

        if email_lower.contains("bank") || email_lower.contains("credit card") {
            analysis.recommendations.push(
                "If this is about your bank: Call the number on the back of your card (NOT a \
                 number from the email)"
                    .to_string(),
            );
        }

        if email_lower.contains("package")
            || email_lower.contains("delivery")
            || email_lower.contains("fedex")
            || email_lower.contains("ups")
            || email_lower.contains("usps")
        {
            analysis.recommendations.push(
                "For package notifications: Check tracking directly on the shipping company's \
                 official website"
                    .to_string(),
            );
        }

        if email_lower.contains("irs") || email_lower.contains("tax") || email_lower.contains("cra")
        {
            analysis.recommendations.push(
                "The IRS/CRA NEVER initiates contact by email. This is likely a scam.".to_string(),
            );
        }

        if email_lower.contains("amazon")
            || email_lower.contains("paypal")
            || email_lower.contains("netflix")
        {
            analysis.recommendations.push(
                "Log into your account directly (type the website yourself) to check - don't use \
                 links from the email"
                    .to_string(),
            );
        }

        if !analysis.links.is_empty() {
            analysis.recommendations.push(
                "NEVER click links in suspicious emails. Type the website address yourself."
                    .to_string(),
            );
        }

        if SENSITIVE_INFO.is_match(email_text) {
            analysis.recommendations.push(
                "Legitimate companies NEVER ask for passwords, SSN, or full card numbers via email"
                    .to_string(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> EmailRiskAnalyzer {
        EmailRiskAnalyzer::new(EmailVocabulary::default())
    }

    #[test]
    fn test_credential_phishing_email_is_high_risk() {
        let analysis =
            analyzer().analyze("URGENT: verify your password at http://192.168.1.5/login now");

        assert!(
            analysis.risk_level >= 8,
            "expected >= 8, got {}",
            analysis.risk_level
        );
        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f.starts_with("Requests sensitive info:")));
        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f == "Link uses IP address instead of domain name"));
        assert!(analysis.recommendations[0].starts_with("HIGH RISK"));
    }

    #[test]
    fn test_benign_email_is_low_risk() {
        let analysis = analyzer().analyze(
            "Hi Maria, the garden club meets on Thursday at noon. Bring the seed catalog if \
             you still have it. See you then!",
        );

        assert!(
            analysis.risk_level <= 2,
            "expected <= 2, got {}",
            analysis.risk_level
        );
        assert!(analysis
            .safe_indicators
            .iter()
            .any(|s| s == "No links in email"));
        assert!(analysis
            .safe_indicators
            .iter()
            .any(|s| s == "No common scam keywords"));
        assert!(analysis.recommendations[0].starts_with("LOW RISK"));
    }

    #[test]
    fn test_shortened_url_flagged() {
        let analysis = analyzer().analyze("Check this out: https://bit.ly/2x9z");

        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f == "Shortened URL detected (hides real destination)"));
        assert!(analysis
            .warnings
            .iter()
            .any(|w| w == "Contains 1 link(s) - verify before clicking"));
    }

    #[test]
    fn test_hyphenated_verify_domain_flagged() {
        let analysis =
            analyzer().analyze("Update here: https://secure-account-verify.example.com/login");

        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f == "Suspicious URL pattern detected"));
    }

    #[test]
    fn test_impersonation_is_warning_not_red_flag() {
        let analysis = analyzer().analyze("Your Amazon order has shipped.");

        assert!(analysis.warnings.iter().any(|w| w == "Mentions: AMAZON"));
        assert!(!analysis.red_flags.iter().any(|f| f.contains("AMAZON")));
        // Brand-login advice is content-triggered regardless of risk.
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.starts_with("Log into your account directly")));
    }

    #[test]
    fn test_generic_greeting_and_formatting_noise() {
        let analysis = analyzer().analyze(
            "Dear Customer!!  Your account  needs attention..  Please respond  today!!",
        );

        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f == "Generic greeting (not personalized)"));
        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f.starts_with("Poor formatting")));
    }

    #[test]
    fn test_tax_authority_recommendation() {
        let analysis = analyzer().analyze("The IRS owes you a tax refund of $850.");

        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.starts_with("The IRS/CRA NEVER initiates contact")));
    }

    #[test]
    fn test_risk_level_stays_in_band() {
        let everything = "URGENT act now! You won a prize and a tax refund. Verify your \
                          password, SSN, credit card, bank account, pin and cvv at \
                          http://192.168.0.1/verify-account and https://bit.ly/x and \
                          https://secure-verify.example.com. Dear customer, your account will \
                          be closed. amazon paypal bank irs microsoft apple google netflix";
        let analysis = analyzer().analyze(everything);

        assert_eq!(analysis.risk_level, 10);
        assert!(analysis.recommendations[0].starts_with("HIGH RISK"));
    }

    #[test]
    fn test_determinism() {
        let text = "URGENT: verify your password at http://192.168.1.5/login now";
        let a = analyzer().analyze(text);
        let b = analyzer().analyze(text);

        assert_eq!(a.risk_level, b.risk_level);
        assert_eq!(a.red_flags, b.red_flags);
        assert_eq!(a.recommendations, b.recommendations);
    }
}
