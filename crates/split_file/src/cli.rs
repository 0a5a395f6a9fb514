use clap::Parser;
use split_file::SplitConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "split_file", version)]
#[command(
    about = "Split a `.split` file into the files named by its `// FILE: <name>` markers. \
             Text before the first marker is written to the input path without its extension."
)]
pub struct Cli {
    /// Path to the `.split` file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Write every output relative to this directory instead of the working directory.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the files that would be written without writing them.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> SplitConfig {
        SplitConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            dry_run: self.dry_run,
        }
    }
}
