use super::{Outcome, Reporter, ScopeDesc, ScopeSummary, Summary};
use crate::{
    args::{Args, ColorConfig},
    test::TestSuite,
};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, StandardStreamLock, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if self.spec.is_some() {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn status(summary: &ScopeSummary) -> Colored<&'static str> {
    if !summary.is_passed() {
        colored("FAILED").fg(Color::Red)
    } else if summary.is_skipped() {
        colored("skipped").fg(Color::Yellow)
    } else {
        colored("ok").fg(Color::Green)
    }
}

pub(crate) struct ConsoleReporter {
    stream: StandardStream,
}

impl ConsoleReporter {
    pub(crate) fn new(args: &Args) -> Self {
        Self {
            stream: StandardStream::stdout(match args.color {
                ColorConfig::Auto => ColorChoice::Auto,
                ColorConfig::Always => ColorChoice::Always,
                ColorConfig::Never => ColorChoice::Never,
            }),
        }
    }

    fn print_scope_summary(
        &self,
        w: &mut StandardStreamLock<'_>,
        summary: &ScopeSummary,
    ) -> io::Result<()> {
        write!(w, "test {} ... ", summary.name())?;
        status(summary).fmt_colored(w)?;
        writeln!(w)?;
        Ok(())
    }

    fn print_summary(&self, w: &mut StandardStreamLock<'_>, summary: &Summary) -> io::Result<()> {
        let failures: Vec<_> = summary.failures().collect();
        if !failures.is_empty() {
            writeln!(w)?;
            writeln!(w, "failures:")?;
            for scope in &failures {
                match scope.outcome() {
                    Outcome::Failed {
                        location: Some(location),
                        reason,
                    } => {
                        writeln!(w, "---- {} at {} ----", scope.name(), location)?;
                        writeln!(w, "{}", reason)?;
                    }
                    Outcome::Failed {
                        location: None,
                        reason,
                    } => {
                        writeln!(w, "---- {} ----", scope.name())?;
                        writeln!(w, "{}", reason)?;
                    }
                    Outcome::Panicked(unwind) => {
                        writeln!(w, "---- {} ----", scope.name())?;
                        writeln!(w, "{}", unwind)?;
                    }
                    Outcome::Passed | Outcome::Skipped { .. } => continue,
                }
                writeln!(w)?;
            }

            writeln!(w)?;
            writeln!(w, "failures:")?;
            for scope in &failures {
                writeln!(w, "    {}", scope.name())?;
            }
        }

        let status = if summary.is_passed() {
            colored("ok").fg(Color::Green)
        } else {
            colored("FAILED").fg(Color::Red)
        };
        writeln!(w)?;
        write!(w, "test result: ")?;
        status.fmt_colored(w)?;
        write!(w, ".")?;
        writeln!(
            w,
            " {passed} passed; {failed} failed; {skipped} skipped",
            passed = summary.passed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
        )?;

        Ok(())
    }
}

impl Reporter for ConsoleReporter {
    fn test_run_starting(&self, suites: &[&TestSuite]) {
        let mut w = self.stream.lock();
        let suffix = if suites.len() == 1 { "" } else { "s" };
        let _ = writeln!(w, "running {} suite{}", suites.len(), suffix);
    }

    fn test_run_ended(&self, summary: &Summary) {
        let mut w = self.stream.lock();
        let _ = self.print_summary(&mut w, summary);
    }

    fn scope_starting(&self, _: &ScopeDesc) {}

    fn scope_ended(&self, summary: &ScopeSummary) {
        let mut w = self.stream.lock();
        let _ = self.print_scope_summary(&mut w, summary);
    }
}
