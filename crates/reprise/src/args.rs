//! Command line arguments of the test harness.

use crate::exit_status::ExitStatus;
use anyhow::Context as _;
use getopts::Options;
use std::{path::Path, str::FromStr};

/// Command line arguments.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) list: bool,
    pub(crate) color: ColorConfig,
    pub(crate) format: OutputFormat,
    pub(crate) test_threads: Option<usize>,
    pub(crate) filter_pattern: Option<String>,
}

impl Args {
    /// Parse command line arguments.
    pub(crate) fn from_env() -> Result<Self, ExitStatus> {
        let args: Vec<_> = std::env::args().collect();
        let parser = Parser::new(&args[..]);
        match parser.parse() {
            Ok(Some(args)) => Ok(args),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {:#}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ColorConfig {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => anyhow::bail!(
                "argument for --color must be auto, always, or never (was {})",
                v
            ),
        }
    }
}

/// How the progress of a test run is reported.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum OutputFormat {
    /// Human readable output on stdout.
    Pretty,
    /// Records emitted through the `log` facade.
    Log,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(OutputFormat::Pretty),
            "log" => Ok(OutputFormat::Log),
            v => anyhow::bail!("argument for --format must be pretty or log (was {})", v),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List all test suites");
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );
        opts.optopt(
            "",
            "format",
            "Configure the reporter:
                pretty = print one line per case (default);
                log    = emit records through the log facade;",
            "pretty|log",
        );
        opts.optopt(
            "",
            "test-threads",
            "Number of threads used for running suites in parallel",
            "n_threads",
        );

        // The following options and flags are reserved for keeping the compatibility with
        // the built-in test harness.
        opts.optflag("", "ignored", "");
        opts.optflag("", "test", "");
        opts.optflag("", "bench", "");
        opts.optflag("", "nocapture", "");
        opts.optflag("", "exact", "");
        opts.optflag("q", "quiet", "");
        opts.optopt("", "logfile", "", "PATH");
        opts.optmulti("", "skip", "", "FILTER");
        opts.optopt("Z", "", "", "unstable-options");

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.get(0).map_or("test", String::as_str);
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS] [FILTER]", progname);
        eprintln!(
            r#"{usage}
The FILTER string is accepted for compatibility with the built-in test
harness but is currently ignored; every suite is run."#,
            usage = self.opts.usage(&message)
        );
    }

    fn parse(&self) -> anyhow::Result<Option<Args>> {
        let args = &self.args[..];

        let matches = self
            .opts
            .parse(args.get(1..).unwrap_or(args))
            .context("failed to parse command line")?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        let list = matches.opt_present("list");
        let color = matches
            .opt_str("color")
            .map(|s| s.parse::<ColorConfig>())
            .transpose()?
            .unwrap_or(ColorConfig::Auto);
        let format = matches
            .opt_str("format")
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or(OutputFormat::Pretty);
        let test_threads = match matches.opt_str("test-threads") {
            Some(n) => match n.parse::<usize>() {
                Ok(0) | Err(..) => anyhow::bail!(
                    "argument for --test-threads must be a positive integer (was {})",
                    n
                ),
                Ok(n) => Some(n),
            },
            None => None,
        };
        let filter_pattern = matches.free.get(0).cloned();

        Ok(Some(Args {
            list,
            color,
            format,
            test_threads,
            filter_pattern,
        }))
    }
}
