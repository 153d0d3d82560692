use serde::{Deserialize, Serialize};

/// Curated category lists of domain substrings and suffixes. Loaded once at
/// startup and shared read-only by every analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDatabase {
    pub trusted_news: Vec<String>,
    pub official_sources: Vec<String>,
    pub educational: Vec<String>,
    pub ai_image_platforms: Vec<String>,
    pub ai_text_platforms: Vec<String>,
    pub ai_video_platforms: Vec<String>,
    pub content_farms: Vec<String>,
    pub verified_platforms: Vec<String>,
}

impl Default for SiteDatabase {
    fn default() -> Self {
        SiteDatabase {
            trusted_news: vec_of(&[
                "apnews.com",
                "reuters.com",
                "bbc.com",
                "bbc.co.uk",
                "npr.org",
                "pbs.org",
                "theguardian.com",
                "wsj.com",
                "nytimes.com",
                "washingtonpost.com",
                "usatoday.com",
                "cbsnews.com",
                "abcnews.go.com",
                "nbcnews.com",
                "cnn.com",
                "time.com",
                "theatlantic.com",
                "economist.com",
                "financialtimes.com",
                "bloomberg.com",
                "aljazeera.com",
            ]),
            // Bare suffixes are intentional: matched with ends_with as well as
            // contains, so ".edu" and "gov.uk" style entries work.
            official_sources: vec_of(&[
                "gov", "gov.uk", "europa.eu", "un.org", "who.int", "cdc.gov", "nih.gov",
                "nasa.gov",
            ]),
            educational: vec_of(&[
                ".edu",
                "ac.uk",
                "mit.edu",
                "stanford.edu",
                "harvard.edu",
                "ox.ac.uk",
                "cam.ac.uk",
            ]),
            ai_image_platforms: vec_of(&[
                "midjourney.com",
                "openai.com/dall-e",
                "stability.ai",
                "stablediffusionweb.com",
                "dreamstudio.ai",
                "craiyon.com",
                "nightcafe.studio",
                "artbreeder.com",
                "playground.ai",
                "lexica.art",
                "civitai.com",
                "tensor.art",
                "leonardo.ai",
                "picso.ai",
                "deepai.org",
                "hotpot.ai",
                "fotor.com/ai-image-generator",
            ]),
            ai_text_platforms: vec_of(&[
                "chat.openai.com",
                "bard.google.com",
                "claude.ai",
                "character.ai",
                "jasper.ai",
                "copy.ai",
                "writesonic.com",
                "rytr.me",
                "shortly.ai",
                "peppertype.ai",
            ]),
            ai_video_platforms: vec_of(&[
                "synthesia.io",
                "deepfake",
                "runway.ml",
                "d-id.com",
                "heygen.com",
                "colossyan.com",
                "hour.one",
            ]),
            content_farms: vec_of(&[
                "taboola.com",
                "outbrain.com",
                "mgid.com",
                "revcontent.com",
                "content.ad",
            ]),
            verified_platforms: vec_of(&[
                "youtube.com",
                "vimeo.com",
                "twitter.com",
                "x.com",
                "instagram.com",
                "facebook.com",
                "linkedin.com",
                "medium.com",
                "substack.com",
                "patreon.com",
            ]),
        }
    }
}

/// Phrase lists and regex sources used by the text analyzer. Regex entries are
/// compiled once when the analyzer is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextPatterns {
    pub common_phrases: Vec<String>,
    pub formal_patterns: Vec<String>,
    pub generic_conclusions: Vec<String>,
}

impl Default for TextPatterns {
    fn default() -> Self {
        TextPatterns {
            common_phrases: vec_of(&[
                "as an ai",
                "as a language model",
                "i don't have personal",
                "i cannot",
                "i'm sorry, but",
                "it's important to note",
                "in conclusion",
                "furthermore",
                "moreover",
                "delve into",
                "it's worth noting",
                "elevate",
                "leverage",
                "utilize",
                "comprehensive",
                "robust",
                "streamline",
                "optimize",
                "synergy",
                "paradigm",
                "holistic",
                "multifaceted",
            ]),
            formal_patterns: vec_of(&[
                r"(?i)it is important to (note|understand|recognize|remember)",
                r"(?i)one (must|should|can) (consider|note|understand)",
                r"(?i)in (order|addition) to",
                r"(?i)for (example|instance)",
                r"(?i)with (regard|respect) to",
                r"(?i)it['’]?s (important|worth) (to note|noting)",
                r"(?i)as an? (ai|artificial intelligence)",
                r"(?i)\bi (cannot|can['’]t|am unable to)",
                r"(?i)\b(furthermore|moreover|additionally)\b",
            ]),
            generic_conclusions: vec_of(&[
                "in summary",
                "to summarize",
                "in conclusion",
                "ultimately",
                "in essence",
                "at the end of the day",
            ]),
        }
    }
}

/// Vocabularies for the email risk analyzer. Each list is scanned with raw
/// case-insensitive substring containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailVocabulary {
    pub urgency_phrases: Vec<String>,
    pub financial_phrases: Vec<String>,
    pub credential_phrases: Vec<String>,
    pub impersonation_terms: Vec<String>,
    pub url_shorteners: Vec<String>,
    pub generic_greetings: Vec<String>,
}

impl Default for EmailVocabulary {
    fn default() -> Self {
        EmailVocabulary {
            urgency_phrases: vec_of(&[
                "urgent",
                "immediate action",
                "act now",
                "within 24 hours",
                "account will be closed",
                "suspended",
                "verify now",
                "click here now",
                "limited time",
                "expires today",
                "final notice",
                "last warning",
            ]),
            financial_phrases: vec_of(&[
                "prize",
                "won",
                "lottery",
                "refund",
                "claim your",
                "inheritance",
                "million",
                "transfer",
                "tax refund",
                "verify your payment",
                "update payment",
                "billing problem",
            ]),
            credential_phrases: vec_of(&[
                "password",
                "social security",
                "ssn",
                "credit card",
                "bank account",
                "routing number",
                "pin",
                "cvv",
                "verify your identity",
                "verify your password",
                "confirm your account",
                "login credentials",
            ]),
            impersonation_terms: vec_of(&[
                "amazon",
                "paypal",
                "bank",
                "irs",
                "social security",
                "microsoft",
                "apple",
                "google",
                "netflix",
                "cra",
                "fedex",
                "ups",
                "usps",
                "dhl",
            ]),
            url_shorteners: vec_of(&["bit.ly", "tinyurl", "t.co"]),
            generic_greetings: vec_of(&[
                "dear customer",
                "dear user",
                "dear member",
                "valued customer",
            ]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Claude,
    OpenAi,
}

/// Settings for the optional remote-model scoring path. The core treats the
/// remote model as a pluggable scorer; when the call fails for any reason the
/// local deterministic analyzer is used instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enhanced_mode: bool,
    pub api_key: String,
    pub provider: ModelProvider,
    pub model: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            enhanced_mode: false,
            api_key: String::new(),
            provider: ModelProvider::Claude,
            model: None,
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site_database: SiteDatabase,
    pub text_patterns: TextPatterns,
    pub image_tags: Vec<String>,
    pub email_vocabulary: EmailVocabulary,
    pub remote: RemoteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_database: SiteDatabase::default(),
            text_patterns: TextPatterns::default(),
            image_tags: default_image_tags(),
            email_vocabulary: EmailVocabulary::default(),
            remote: RemoteConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Image URL tokens that indicate AI generation.
pub fn default_image_tags() -> Vec<String> {
    vec_of(&[
        "midjourney",
        "dall-e",
        "dalle",
        "stable diffusion",
        "ai generated",
        "artificial intelligence",
        "neural network",
        "gpt",
        "machine learning",
        "synthetic",
        "generated",
    ])
}

fn vec_of(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
