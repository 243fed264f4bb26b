use clap::Parser;
use gridbind::cli::{execute, init_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = execute(&cli)?;
    println!("{}", output);
    Ok(())
}
