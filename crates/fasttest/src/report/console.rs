use super::color::{
    Color,
    colored,
    write_colored,
};
use crate::{
    registry::RegistryManager,
    test::TestEntity,
};
use derive_new::new;
use std::{
    cell::Ref,
    io::{
        self,
        Write,
    },
};
use tracing::warn;

#[derive(Debug, Clone, Copy)]
enum Section {
    Passed,
    Failed,
    Skipped,
    Errors,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Passed => "PASSED",
            Section::Failed => "FAILED",
            Section::Skipped => "SKIPPED",
            Section::Errors => "ERRORS",
        }
    }
    fn color(self) -> Color {
        match self {
            Section::Passed => Color::Green,
            Section::Failed => Color::Red,
            Section::Skipped => Color::Yellow,
            Section::Errors => Color::Purple,
        }
    }
    /// Failed and errored tests are listed even without `verbose`.
    fn always_listed(self) -> bool {
        matches!(self, Section::Failed | Section::Errors)
    }
    fn message(
        self,
        test: &TestEntity,
    ) -> Option<String> {
        match self {
            Section::Passed => None,
            Section::Failed => Some(test.failure_reason().to_string()),
            Section::Skipped => Some(test.skipped_reason().to_string()),
            Section::Errors => Some(match test.panic_location() {
                Some(location) => format!("{}\t({location})", test.error_message()),
                None => test.error_message().to_string(),
            }),
        }
    }
}

fn millis(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Human readable summary of a finished scenario.
///
/// ```text
/// UNIT TEST SUMMARY [Arithmetic] [0.012 ms] :
///     PASSED: 1/2
///     FAILED: 1/2
///         [subtraction] [0.004 ms]
///         Message: ...
/// ```
#[derive(Debug, Clone, Copy, new)]
pub struct ConsoleReporter<'a> {
    manager: &'a RegistryManager,
    #[new(value = "true")]
    ansi: bool,
}

impl ConsoleReporter<'_> {
    pub fn with_ansi(
        mut self,
        ansi: bool,
    ) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn render(
        &self,
        verbose: bool,
    ) -> String {
        let mut out = Vec::new();
        if let Err(err) = self.write_to(&mut out, verbose) {
            warn!(%err, "failed to render report");
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    pub fn print(
        &self,
        verbose: bool,
    ) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), verbose)
    }

    pub fn write_to(
        &self,
        out: &mut impl Write,
        verbose: bool,
    ) -> io::Result<()> {
        let manager = self.manager;
        writeln!(
            out,
            "{}",
            colored(
                Color::Cyan,
                format_args!(
                    "UNIT TEST SUMMARY [{}] [{:.3} ms] : ",
                    manager.id(),
                    millis(manager.all_tests_exec_time()),
                ),
                self.ansi,
            )
        )?;
        self.write_section(out, Section::Passed, &manager.passed_tests(), verbose)?;
        self.write_section(out, Section::Failed, &manager.failed_tests(), verbose)?;
        self.write_section(out, Section::Skipped, &manager.skipped_tests(), verbose)?;
        self.write_section(out, Section::Errors, &manager.with_error_tests(), verbose)
    }

    fn write_section(
        &self,
        out: &mut impl Write,
        section: Section,
        tests: &[Ref<'_, TestEntity>],
        verbose: bool,
    ) -> io::Result<()> {
        if tests.is_empty() {
            return Ok(());
        }
        let color = section.color();
        write_colored(
            out,
            color,
            self.ansi,
            format_args!(
                "\t{}: {}/{}\n",
                section.title(),
                tests.len(),
                self.manager.all_tests_count()
            ),
        )?;
        if !(verbose || section.always_listed()) {
            return Ok(());
        }
        for test in tests {
            write_colored(
                out,
                color,
                self.ansi,
                format_args!(
                    "\t\t[{}] [{:.3} ms]\n",
                    test.label(),
                    millis(test.exec_time())
                ),
            )?;
            if let Some(message) = section.message(test) {
                write_colored(
                    out,
                    color,
                    self.ansi,
                    format_args!("\t\tMessage: {message}\n"),
                )?;
            }
        }
        Ok(())
    }
}
