//! Alias Forge - anonymous username generation
//!
//! A simple CLI tool for generating randomized usernames from themed word
//! pairs or random characters, unique within each batch.

use std::path::Path;
use std::process;
use std::time::Duration;

use indicatif::ProgressBar;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Select, Text};

use alias_forge::generator::themes;
use alias_forge::{
    export, BatchCollector, BatchRequest, BatchResult, CaseRule, CharsetSpec, GenerationMethod,
    Result, Separator, MAX_COUNT, MAX_LENGTH, MIN_COUNT, MIN_LENGTH,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-V" => {
                println!("alias-forge {}", alias_forge::VERSION);
                return;
            }
            other => {
                eprintln!("❌ Unknown argument: {}", other);
                eprintln!("💡 Run 'alias-forge --help' for usage");
                process::exit(1);
            }
        }
    }

    if let Err(e) = run() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main interactive workflow
fn run() -> Result<()> {
    println!("🎭 Alias Forge - anonymous username generation");
    println!("══════════════════════════════════════════════");
    println!();

    let request = prompt_request()?;
    let collector = BatchCollector::new(&request)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = collector.run_with_progress(&mut rand::thread_rng(), |p| {
        spinner.set_message(format!(
            "Generating... {}/{} unique ({} attempts)",
            p.unique, p.target, p.attempts
        ));
    });
    spinner.finish_and_clear();

    display_batch(&result);
    maybe_save(&result)?;

    Ok(())
}

/// Collect a batch request interactively
fn prompt_request() -> Result<BatchRequest> {
    let defaults = BatchRequest::default();

    let method = match Select::new(
        "Generation method:",
        vec![
            "Adjective + Noun",
            "Adjective + Noun + Number",
            "Random characters",
        ],
    )
    .prompt()?
    {
        "Adjective + Noun" => GenerationMethod::AdjectiveNoun,
        "Adjective + Noun + Number" => GenerationMethod::AdjectiveNounNumber,
        _ => GenerationMethod::RandomChars,
    };

    let count = CustomType::<usize>::new("How many usernames?")
        .with_default(defaults.count)
        .with_validator(|count: &usize| {
            if (MIN_COUNT..=MAX_COUNT).contains(count) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("enter a number between {} and {}", MIN_COUNT, MAX_COUNT).into(),
                ))
            }
        })
        .with_error_message("Please enter a number")
        .prompt()?;

    let (theme, separator) = if method.is_word_based() {
        let theme = Select::new("Theme:", themes::theme_names()).prompt()?;
        let separator = match Select::new("Separator:", vec!["none", "_", "-", "."]).prompt()? {
            "_" => Separator::Underscore,
            "-" => Separator::Hyphen,
            "." => Separator::Dot,
            _ => Separator::None,
        };
        (theme.to_string(), separator)
    } else {
        (defaults.theme.clone(), defaults.separator)
    };

    let charset = if method.is_word_based() {
        defaults.charset
    } else {
        prompt_charset(defaults.charset)?
    };

    // TitleCase preselected
    let case_rule = match Select::new(
        "Capitalization:",
        vec!["lowercase", "UPPERCASE", "TitleCase", "Original"],
    )
    .with_starting_cursor(2)
    .prompt()?
    {
        "lowercase" => CaseRule::Lowercase,
        "UPPERCASE" => CaseRule::Uppercase,
        "TitleCase" => CaseRule::TitleCase,
        _ => CaseRule::Original,
    };

    Ok(BatchRequest {
        method,
        count,
        theme,
        separator,
        case_rule,
        charset,
    })
}

/// Collect character pool options for random-characters generation
fn prompt_charset(defaults: CharsetSpec) -> Result<CharsetSpec> {
    let length = CustomType::<usize>::new("Username length:")
        .with_default(defaults.length)
        .with_validator(|length: &usize| {
            if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("enter a length between {} and {}", MIN_LENGTH, MAX_LENGTH).into(),
                ))
            }
        })
        .with_error_message("Please enter a number")
        .prompt()?;

    let spec = CharsetSpec {
        lowercase: Confirm::new("Include lowercase letters?")
            .with_default(defaults.lowercase)
            .prompt()?,
        uppercase: Confirm::new("Include uppercase letters?")
            .with_default(defaults.uppercase)
            .prompt()?,
        digits: Confirm::new("Include digits?")
            .with_default(defaults.digits)
            .prompt()?,
        symbols: Confirm::new("Include symbols?")
            .with_default(defaults.symbols)
            .prompt()?,
        length,
    };

    if spec.is_empty_selection() {
        println!("⚠️  No character types selected - falling back to lowercase letters + digits");
    }
    if spec.symbols {
        println!("💡 Some platforms don't allow symbols in usernames");
    }

    Ok(spec)
}

/// Display the batch in a numbered two-column grid plus a copyable block
fn display_batch(result: &BatchResult) {
    println!();
    println!("🎨 Generated Usernames ({}):", result.usernames.len());
    println!("═══════════════════════════");

    for (i, name) in result.usernames.iter().enumerate() {
        print!("{:3}. {:<28}", i + 1, name);
        if (i + 1) % 2 == 0 {
            println!();
        }
    }
    if result.usernames.len() % 2 != 0 {
        println!();
    }

    println!();
    println!("📋 Copy list:");
    println!("─────────────");
    println!("{}", result.to_text());

    if !result.target_met() {
        println!();
        println!(
            "⚠️  Could only generate {} unique usernames out of {} requested ({}).",
            result.usernames.len(),
            result.requested,
            result.stop_reason
        );
        println!("💡 Try increasing the length, adding character types, or choosing another theme.");
    }

    println!();
    println!("📈 Summary:");
    println!("   🎯 Requested: {}", result.requested);
    println!("   ✨ Unique: {}", result.usernames.len());
    println!("   🔁 Attempts: {}", result.attempts);
    println!("   ⏱️  Time: {:.2}s", result.elapsed.as_secs_f32());
}

/// Offer to save the batch to a timestamped file
fn maybe_save(result: &BatchResult) -> Result<()> {
    println!();
    let save = Confirm::new("Save this batch to a file?")
        .with_default(false)
        .prompt()?;
    if !save {
        return Ok(());
    }

    let format = Select::new("Format:", vec!["txt", "json"]).prompt()?;
    let default_name = export::default_file_name(format);
    let file_name = Text::new("File name:")
        .with_default(&default_name)
        .prompt()?;

    let path = Path::new(&file_name);
    match format {
        "json" => export::save_json(result, path)?,
        _ => export::save_txt(result, path)?,
    }

    println!("💾 Saved to {}", file_name);
    Ok(())
}

/// Print help information
fn print_help() {
    println!("🎭 Alias Forge - anonymous username generation");
    println!("══════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    alias-forge              # Start an interactive session");
    println!("    alias-forge --help       # Show this help");
    println!("    alias-forge --version    # Show the version");
    println!();
    println!("FEATURES:");
    println!("    • Adjective + noun pairs from themed word lists (Default, Fantasy, Sci-Fi, Nature)");
    println!("    • Optional random number suffix (1-999)");
    println!("    • Fully random usernames from a configurable character pool");
    println!("    • Separators, capitalization rules, uniqueness within each batch");
    println!("    • Export to timestamped .txt or .json files");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
