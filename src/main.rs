use clap::Parser;
use mailcheck::utils::logger;
use mailcheck::{validate_email, validate_value, CliConfig};

const SAMPLE_CANDIDATES: &[&str] = &[
    "user@example.com",
    "test.email@domain.co.uk",
    "first+tag@sub.domain.org",
    "invalid.email",
    "@domain.com",
    "user@",
    "user@domain",
    "",
];

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mailcheck CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let sample_mode = config.candidates.is_empty();
    let candidates: Vec<String> = if sample_mode {
        tracing::info!("No candidates given, checking the built-in sample set");
        SAMPLE_CANDIDATES.iter().map(|s| s.to_string()).collect()
    } else {
        config.candidates.clone()
    };

    let mut invalid = 0usize;
    for candidate in &candidates {
        let valid = if config.json {
            match serde_json::from_str(candidate) {
                Ok(value) => validate_value(&value),
                Err(e) => {
                    tracing::debug!("Candidate is not valid JSON ({}), treating as invalid", e);
                    false
                }
            }
        } else {
            validate_email(candidate)
        };

        if valid {
            println!("✅ {:?}", candidate);
        } else {
            invalid += 1;
            println!("❌ {:?}", candidate);
        }
    }

    println!(
        "{} of {} candidates look like email addresses",
        candidates.len() - invalid,
        candidates.len()
    );

    if !sample_mode && invalid > 0 {
        std::process::exit(1);
    }
}
