//! `inf_nan` - Print the IEEE-754 results of dividing by zero

use clap::Parser;

use primer_cli::{main_with, programs, CommonArgs};

#[derive(Parser)]
#[command(name = "inf_nan", version, about = "Print the IEEE-754 results of dividing by zero")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    main_with("inf_nan", &cli.common, programs::inf_nan)
}
