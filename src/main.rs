use clap::Parser;
use std::process;
use storyboard_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Storyboard Processor - CSV to Presentation Feed Converter");
    println!("=========================================================");
    println!();
    println!("Convert spreadsheet-exported CSV feeds into the JSON documents");
    println!("consumed by timeline and slide-deck renderers.");
    println!();
    println!("USAGE:");
    println!("    storyboard-processor <COMMAND> <SOURCE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    timeline    Build a timeline document from a positional CSV feed");
    println!("    slides      Build a slide-deck document from a positional CSV feed");
    println!("    rows        Map a header-led CSV feed into named rows");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Build a timeline document from a local feed:");
    println!("    storyboard-processor timeline events.csv --pretty");
    println!();
    println!("    # Build a slide deck from a published spreadsheet:");
    println!("    storyboard-processor slides https://example.com/deck.csv -o deck.json");
    println!();
    println!("    # Inspect a feed as named rows:");
    println!("    storyboard-processor rows events.csv --pretty");
    println!();
    println!("For detailed help on any command, use:");
    println!("    storyboard-processor <COMMAND> --help");
}
