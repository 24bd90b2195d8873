//! `gravity` - Print the height of a dropped ball at each sample time

use clap::Parser;

use primer_cli::{main_with, programs, CommonArgs};

#[derive(Parser)]
#[command(name = "gravity", version, about = "Print the height of a dropped ball at each sample time")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    main_with("gravity", &cli.common, programs::gravity)
}
