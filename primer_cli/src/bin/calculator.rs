//! `calculator` - Read two numbers and an operation code (1-4), print the result

use clap::Parser;

use primer_cli::{main_with, programs, CommonArgs};

#[derive(Parser)]
#[command(name = "calculator", version, about = "Read two numbers and an operation code (1-4), print the result")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    main_with("calculator", &cli.common, programs::calculator)
}
