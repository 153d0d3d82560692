use clap::{Arg, Command};
use content_guardian::analysis::{AnalysisResult, EmailRiskAnalysis};
use content_guardian::{Config, GuardianEngine};
use log::LevelFilter;
use std::io::Read;
use std::process;

#[tokio::main]
async fn main() {
    let matches = Command::new("content-guardian")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic detector for AI-generated content and email scams")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("content-guardian.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Test configuration validity (compiles all patterns)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .value_name("TEXT")
                .help("Analyze a snippet of text for AI-generation likelihood")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("text-file")
                .long("text-file")
                .value_name("FILE")
                .help("Analyze text read from a file (use - for stdin)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("source-url")
                .long("source-url")
                .value_name("URL")
                .help("URL of the page the text or image came from")
                .default_value(""),
        )
        .arg(
            Arg::new("image-url")
                .long("image-url")
                .value_name("URL")
                .help("Analyze an image reference for AI-generation likelihood")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("page-url")
                .long("page-url")
                .value_name("URL")
                .help("Check a page or site by reputation")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("link-url")
                .long("link-url")
                .value_name("URL")
                .help("Check a link target by reputation")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("email-file")
                .long("email-file")
                .value_name("FILE")
                .help("Analyze an email body for scam risk (use - for stdin)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("enhanced")
                .long("enhanced")
                .help("Use the remote model for scoring (requires an API key in config)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the result as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config_path = matches.get_one::<String>("config").unwrap();
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    if matches.get_flag("enhanced") {
        config.remote.enhanced_mode = true;
    }

    if matches.get_flag("test-config") {
        println!("Testing configuration from {config_path}...");
        println!(
            "  {} trusted news sites, {} AI platforms, {} email phrases",
            config.site_database.trusted_news.len(),
            config.site_database.ai_image_platforms.len()
                + config.site_database.ai_text_platforms.len()
                + config.site_database.ai_video_platforms.len(),
            config.email_vocabulary.urgency_phrases.len()
                + config.email_vocabulary.financial_phrases.len()
                + config.email_vocabulary.credential_phrases.len()
        );
        match GuardianEngine::new(config) {
            Ok(_) => println!("✅ All patterns compiled successfully"),
            Err(e) => {
                println!("❌ Configuration validation failed: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let engine = match GuardianEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error building analysis engine: {e}");
            process::exit(1);
        }
    };

    let as_json = matches.get_flag("json");
    let enhanced = matches.get_flag("enhanced");
    let source_url = matches.get_one::<String>("source-url").unwrap().clone();

    if let Some(text) = matches.get_one::<String>("text") {
        let result = run_text(&engine, text, &source_url, enhanced).await;
        print_analysis(&result, as_json);
    } else if let Some(path) = matches.get_one::<String>("text-file") {
        let text = read_input(path);
        let result = run_text(&engine, &text, &source_url, enhanced).await;
        print_analysis(&result, as_json);
    } else if let Some(image_url) = matches.get_one::<String>("image-url") {
        let result = engine.analyze_image(image_url, &source_url);
        print_analysis(&result, as_json);
    } else if let Some(page_url) = matches.get_one::<String>("page-url") {
        let result = engine.analyze_page(&normalize_url(page_url));
        print_analysis(&result, as_json);
    } else if let Some(link_url) = matches.get_one::<String>("link-url") {
        let result = engine.analyze_link(&normalize_url(link_url));
        print_analysis(&result, as_json);
    } else if let Some(path) = matches.get_one::<String>("email-file") {
        let email = read_input(path);
        let result = engine.analyze_email(&email);
        print_email(&result, as_json);
    } else {
        eprintln!("Nothing to analyze. Pass --text, --text-file, --image-url, --page-url, --link-url, or --email-file.");
        process::exit(2);
    }
}

async fn run_text(
    engine: &GuardianEngine,
    text: &str,
    source_url: &str,
    enhanced: bool,
) -> AnalysisResult {
    if enhanced {
        engine.analyze_text_enhanced(text, source_url).await
    } else {
        engine.analyze_text(text, source_url)
    }
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    if std::path::Path::new(path).exists() {
        Config::from_file(path)
    } else {
        log::warn!("Configuration file '{path}' not found, using default configuration");
        Ok(Config::default())
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Edit the category lists and vocabularies to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {e}");
            process::exit(1);
        }
        buffer
    } else {
        match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {path}: {e}");
                process::exit(1);
            }
        }
    }
}

/// Bare "example.com" style input gets a scheme so URL parsing has a chance.
fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn print_analysis(result: &AnalysisResult, as_json: bool) {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result).unwrap());
        return;
    }

    let label = match result.score {
        0..=2 => "Very Low - Likely Human",
        3..=4 => "Low - Probably Human",
        5..=6 => "Medium - Uncertain",
        7..=8 => "High - Likely AI",
        _ => "Very High - Probably AI",
    };

    println!("AI likelihood ({}): {}/10 - {label}", result.content_type, result.score);
    if result.is_pro {
        println!("  (remote model analysis)");
    }
    if !result.indicators.is_empty() {
        println!("What we found:");
        for indicator in &result.indicators {
            println!("  • {indicator}");
        }
    }
    if !result.details.is_empty() {
        println!("Details:");
        for detail in &result.details {
            println!("  • {detail}");
        }
    }
}

fn print_email(result: &EmailRiskAnalysis, as_json: bool) {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result).unwrap());
        return;
    }

    let label = if result.risk_level >= 7 {
        "HIGH RISK - Likely Scam"
    } else if result.risk_level >= 4 {
        "MEDIUM RISK - Be Cautious"
    } else if result.risk_level >= 2 {
        "LOW-MEDIUM RISK"
    } else {
        "LOW RISK"
    };

    println!("Scam risk: {}/10 - {label}", result.risk_level);
    if !result.red_flags.is_empty() {
        println!("Red flags:");
        for flag in &result.red_flags {
            println!("  🚨 {flag}");
        }
    }
    if !result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  ⚠️  {warning}");
        }
    }
    if !result.safe_indicators.is_empty() {
        println!("Positive signs:");
        for indicator in &result.safe_indicators {
            println!("  ✅ {indicator}");
        }
    }
    if !result.links.is_empty() {
        println!("Links found ({}):", result.links.len());
        for link in &result.links {
            println!("  {link}");
        }
    }
    println!("What you should do:");
    for recommendation in &result.recommendations {
        println!("  • {recommendation}");
    }
}
