use anyhow::Result;
use clap::Parser;
use sif_decoder::{CLIArgs, Problem};

fn main() -> Result<()> {
    env_logger::init();

    let args = CLIArgs::parse();
    let problem = Problem::try_from(args.problem.as_deref())?;
    let image = sif_decoder::read_image(&args.input_path, args.width, args.height)?;

    match problem {
        Problem::Checksum => println!("Answer: {}", image.checksum()?),
        Problem::Render => print!("{}", image),
    }

    Ok(())
}
