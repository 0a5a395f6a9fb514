// crates/split_file/src/config.rs

use std::path::PathBuf;

/// Everything one run of the splitter needs, resolved up front so the
/// library never reads `argv` or the working directory on its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitConfig {
    /// Path of the `.split` file to read.
    pub input: PathBuf,
    /// Base directory for every output. `None` keeps the preamble next to the
    /// input and resolves target names against the working directory.
    pub output_dir: Option<PathBuf>,
    /// Report the planned outputs without writing them.
    pub dry_run: bool,
}

impl SplitConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SplitConfig::new("a.split");
        assert_eq!(config.input, PathBuf::from("a.split"));
        assert_eq!(config.output_dir, None);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SplitConfig::new("a.split")
            .with_output_dir("out")
            .with_dry_run(true);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert!(config.dry_run);
    }
}
