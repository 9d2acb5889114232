use clap::Parser;
use daihon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// A diagram-to-script compilation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the diagram CSV export
    input_path: Option<String>,
    /// Path the markdown script document is written to
    output_path: Option<String>,

    /// Script author whose comments carry hide/jump/body directives
    #[arg(short, long)]
    author: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_conversion(input_path: String, output_path: String, author: String) {
    let total_start = Instant::now();

    // --- 1. File Loading and Conversion ---
    let load_start = Instant::now();
    let export = LucidCsvExport::from_path(&input_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read diagram export '{}': {}",
            &input_path, e
        ))
    });
    let diagram = export
        .into_diagram()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert diagram: {}", e)));
    let load_duration = load_start.elapsed();

    println!("Loaded {} shapes from '{}'", diagram.shapes.len(), input_path);

    // --- 2. Compilation ---
    println!("\nStarting Daihon Script Compilation...");
    let compile_start = Instant::now();
    let compiler = ScriptCompiler::builder(diagram, author).build();
    let artifacts = compiler.compile();
    let compile_duration = compile_start.elapsed();

    println!(
        "Compilation Successful! {} sections generated in {:?}",
        artifacts.sections.len(),
        compile_duration
    );
    for section in &artifacts.sections {
        println!(
            "  -> Section '{}' ({} key questions)",
            section.title,
            section.decisions.len()
        );
    }

    // Dangling references are collected, not fatal; surface them here.
    if !artifacts.dangling.is_empty() {
        println!("\n{} connection(s) skipped:", artifacts.dangling.len());
        for error in &artifacts.dangling {
            println!("  -> {}", error);
        }
    }

    // --- 3. Output ---
    let write_start = Instant::now();
    fs::write(&output_path, &artifacts.document).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to write script document '{}': {}",
            &output_path, e
        ))
    });
    let write_duration = write_start.elapsed();
    println!("\nWrote script document to '{}'", output_path);

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("Loading & Conversion: {:?}", load_duration);
    println!("Compilation:          {:?}", compile_duration);
    println!("Output:               {:?}", write_duration);
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let input_path = cli.input_path.unwrap_or_else(|| {
        exit_with_error("Input path is required in non-interactive mode.");
    });
    let output_path = cli.output_path.unwrap_or_else(|| {
        exit_with_error("Output path is required in non-interactive mode.");
    });
    let author = cli.author.unwrap_or_else(|| {
        exit_with_error("An author is required in non-interactive mode (--author).");
    });

    run_conversion(input_path, output_path, author);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Daihon Interactive Mode ---");

    let input_path = prompt_for_input("Enter diagram export path", Some("data/diagram.csv"));
    let output_path = prompt_for_input("Enter output script path", Some("data/script.md"));
    let author = prompt_for_input("Enter script author name", None);

    if author.is_empty() {
        exit_with_error("An author is required to interpret diagram comments.");
    }

    run_conversion(input_path, output_path, author);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
