use std::path::PathBuf;

use anyhow::{Context, Result};
use smm_acc_kernelgen::config::DEFAULT_KERNELS_FOLDER;
use smm_acc_kernelgen::{GenError, Generator, GeneratorConfig, logger};

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Generate(PathBuf),
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> std::result::Result<Command, GenError> {
    let mut folder = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(GenError::Usage(format!("unknown option '{}'", flag)));
            }
            _ if folder.is_some() => {
                return Err(GenError::Usage(format!("unexpected argument '{}'", arg)));
            }
            _ => folder = Some(PathBuf::from(&arg)),
        }
    }
    Ok(Command::Generate(folder.unwrap_or_else(|| PathBuf::from(DEFAULT_KERNELS_FOLDER))))
}

fn print_help() {
    println!(
        "Pack CUDA/HIP kernels for JIT'ing\n\n\
         usage: generate_kernels [-h] [KERNELS_FOLDER]\n\n\
         positional arguments:\n  \
         KERNELS_FOLDER  directory with the kernel header files. Default: {}\n\n\
         options:\n  \
         -h, --help      show this help message and exit",
        DEFAULT_KERNELS_FOLDER
    );
}

fn main() -> Result<()> {
    logger::init(logger::DEFAULT_LEVEL);

    let folder = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Generate(folder) => folder,
    };

    let generator = Generator::new(GeneratorConfig::with_folder(folder));
    generator.generate().with_context(|| {
        format!("failed to pack kernels from {}", generator.config().kernels_folder.display())
    })?;
    Ok(())
}
