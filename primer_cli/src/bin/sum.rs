//! `sum` - Read two integers, print their sum

use clap::Parser;

use primer_cli::{main_with, programs, CommonArgs};

#[derive(Parser)]
#[command(name = "sum", version, about = "Read two integers, print their sum")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    main_with("sum", &cli.common, programs::sum)
}
