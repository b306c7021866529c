//! Menu settings and the argument parser for the `queue-menu` binary.
//!
//! ```text
//! queue-menu [--prompt=<text>] [--log=<filter>] [--no-banner]
//! queue-menu --help | -h
//! ```

use super::{MenuError, Operation};

pub const DEFAULT_PROMPT: &str = "Input: ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Written before every line is read.
    pub prompt: String,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Print the list of operations once at startup.
    pub banner: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            banner: true,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(MenuConfig),
    Help,
}

impl MenuConfig {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Invocation, MenuError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = MenuConfig::default();
        for arg in args {
            let flag = arg.as_ref();
            if flag == "--help" || flag == "-h" {
                return Ok(Invocation::Help);
            }
            if flag == "--no-banner" {
                config.banner = false;
                continue;
            }
            if let Some(rest) = flag.strip_prefix("--prompt=") {
                config.prompt = rest.to_string();
                continue;
            }
            if let Some(rest) = flag.strip_prefix("--log=") {
                if rest.is_empty() {
                    return Err(MenuError::Usage("--log requires a filter".to_string()));
                }
                config.log_filter = rest.to_string();
                continue;
            }
            return Err(MenuError::Usage(format!("unknown argument '{}'", flag)));
        }
        Ok(Invocation::Run(config))
    }

    pub fn usage(exe: &str) -> String {
        let mut text = format!(
            "usage: {} [--prompt=<text>] [--log=<filter>] [--no-banner]\n\n",
            exe
        );
        text.push_str("Reads one command per line from stdin until end of input.\n\n");
        text.push_str(&Self::operations_help());
        text
    }

    pub fn operations_help() -> String {
        let mut text = String::from("operations:\n");
        for op in Operation::ALL.iter() {
            text.push_str("  ");
            text.push_str(op.usage());
            text.push('\n');
        }
        text
    }
}
