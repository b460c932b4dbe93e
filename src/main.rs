use std::env::args_os;
use std::io::{stdin, stdout};

use grayscale_reduction::{
    prompt_for_input_file, sweep_image_file, Arguments, CLIParser, Result, SweepOutcome,
};

fn run(arguments: &Arguments) -> Result<SweepOutcome> {
    let input_file = match arguments.input_file() {
        Some(input_file) => input_file.to_path_buf(),
        None => prompt_for_input_file(&mut stdin().lock(), &mut stdout())?,
    };
    println!("\nProcessing Image: {}", input_file.display());
    sweep_image_file(arguments, &input_file)
}

fn print_outcome(arguments: &Arguments, outcome: &SweepOutcome) {
    for entry in &outcome.entries {
        println!(
            "{}: {}, Execution Time: {:.6} seconds",
            arguments.mode().parameter_label(),
            entry.timing.parameter,
            entry.timing.seconds()
        );
    }
    println!(
        "\nSaved comparison image: {}",
        outcome.report_paths.comparison_image.display()
    );
    println!(
        "Saved performance plot: {}",
        outcome.report_paths.performance_plot.display()
    );
}

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(outcome) => print_outcome(&arguments, &outcome),
        Err(e) => eprintln!("Sweep failed because of: {}", e),
    }
}
