use billet_renamer::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(stats) => {
            // Per-document failures were already reported; a fully failed
            // batch still exits nonzero so scripts can react
            if stats.documents > 0 && stats.failed == stats.documents {
                process::exit(1);
            }
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
    println!("Billet Renamer - DSB Self-Print Ticket Renamer");
    println!("==============================================");
    println!();
    println!("Parse DSB Print Selv-billet PDFs and rename them to canonical,");
    println!("sortable filenames derived from the ticket contents.");
    println!();
    println!("USAGE:");
    println!("    billet-renamer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    rename      Parse tickets and rename the documents (main command)");
    println!("    inspect     Parse tickets and print the proposed names, touching nothing");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Rename all tickets in the downloads folder:");
    println!("    billet-renamer rename ~/Downloads");
    println!();
    println!("    # See what would happen first:");
    println!("    billet-renamer rename --dry-run ticket1.pdf ticket2.pdf");
    println!();
    println!("    # Supply a reference date when a document lacks one:");
    println!("    billet-renamer rename --date-hint 2023-12-20 ticket.pdf");
    println!();
    println!("    # Inspect the parsed record without renaming:");
    println!("    billet-renamer inspect ticket.pdf");
    println!();
    println!("For detailed help on any command, use:");
    println!("    billet-renamer <COMMAND> --help");
}
