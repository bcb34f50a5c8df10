//! Argument groups shared by the command-line programs.

use stderrlog::Timestamp;

use crate::config::VectorizerConfig;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// Installs the stderr logger. `default` is used when no `-v` is given.
    pub fn setup_logging(&self, default: u8) -> Result<(), Box<dyn std::error::Error>> {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        let log_level = match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

/// Vectorizer options arg group.
#[derive(clap::Args, Debug)]
pub struct VectorizerArgs {
    /// Look up the last space-separated token of unknown multi-word tokens
    #[arg(long)]
    pub use_last_word: bool,

    /// Train and use the suffix table for unknown words
    #[arg(long)]
    pub use_suffixes: bool,

    /// Suffixes ending fewer distinct words than this value are discarded
    #[arg(long, default_value = "10")]
    pub min_suffix_count: usize,

    /// The maximum suffix length in characters
    #[arg(long, default_value = "5")]
    pub max_suffix_length: usize,
}

impl From<&VectorizerArgs> for VectorizerConfig {
    fn from(args: &VectorizerArgs) -> Self {
        Self::new()
            .use_last_word(args.use_last_word)
            .use_suffixes(args.use_suffixes)
            .min_suffix_count(args.min_suffix_count)
            .max_suffix_length(args.max_suffix_length)
    }
}
