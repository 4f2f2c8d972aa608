use clap::Parser;
use jsonld_extract::{Cli, JsonLdError, JsonLdExtract, OutputFormatter, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let extractor = match JsonLdExtract::from_cli(&cli) {
        Ok(extractor) => extractor,
        Err(e) => {
            print_startup_error(&e, &cli);
            return exit_code_for(&e);
        }
    };

    match extractor.run(cli.name_filter(), cli.presentation_mode()) {
        // Finding nothing is still a success.
        Ok(_) => 0,
        Err(e) => {
            extractor.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &JsonLdError) -> i32 {
    match error {
        JsonLdError::Config { .. } => 2,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "jsonld.toml".to_string());

    match JsonLdExtract::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  jsonld-extract --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &JsonLdError, cli: &Cli) {
    let formatter = OutputFormatter::new(0, cli.quiet);
    formatter.print_user_friendly_error(error);
}
