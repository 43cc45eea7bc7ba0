use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;

use img_conv::converter::Converter;

#[derive(Parser, Debug)]
#[command(name = "img-conv")]
#[command(version, about = "Convert a single image between PNG and JPEG")]
struct Args {}

fn main() -> miette::Result<()> {
    Args::parse();

    print!("Type file path: ");
    io::stdout().flush().into_diagnostic()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).into_diagnostic()?;
    let source = PathBuf::from(line.trim());

    match Converter::to_desktop().and_then(|c| c.convert(&source)) {
        Ok(dest) => println!(
            "Convertation completed! Result saved on path: {}",
            dest.display()
        ),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
