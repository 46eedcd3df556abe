use clap::Parser;
use fasttest::{
    Color,
    ConfigError,
    ConsoleObserver,
    ConsoleReporter,
    ReportFormat,
    RunSummary,
    RunnerConfig,
    TestRunner,
    TracingObserver,
    colored_print,
    init_tracing,
    install_panic_hook,
};
use std::{
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
};

mod scenarios;

#[derive(Parser, Debug)]
#[command(name = "fasttest-demo")]
#[command(about = "Run the sample fasttest scenarios and print their report")]
struct Args {
    /// Scenarios to run, all when empty
    scenarios: Vec<String>,

    /// Config file, instead of searching for fasttest.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// List passed and skipped tests too
    #[arg(short, long)]
    verbose: bool,

    /// Print every test while it runs
    #[arg(long)]
    observe: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn runner_config(&self) -> Result<RunnerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = RunnerConfig::from_file(path)?;
                config.apply_env(|key| std::env::var(key).ok())?;
                config
            },
            None => RunnerConfig::load()?,
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        config.verbose |= self.verbose;
        if self.no_color {
            config.enable_ansi = false;
            config.log.enable_ansi = false;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match args.runner_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fasttest-demo: {err}");
            return ExitCode::from(2);
        },
    };
    init_tracing(&config.log);
    install_panic_hook(config.panic.clone());

    let mut runner = TestRunner::new();
    runner.add_observer(Rc::new(TracingObserver));
    if args.observe {
        runner.add_observer(Rc::new(ConsoleObserver::default()));
    }
    scenarios::register(&mut runner);

    if args.scenarios.is_empty() {
        runner.run_all();
    } else {
        for name in &args.scenarios {
            if runner.run_scenario(&name.as_str().into()).is_none() {
                eprintln!("fasttest-demo: unknown scenario {name}");
                return ExitCode::from(2);
            }
        }
    }

    let ran: Vec<_> = runner.managers().filter(|m| m.has_run()).collect();
    let summaries: Vec<RunSummary> =
        ran.iter().map(|m| RunSummary::from_manager(m)).collect();
    match config.format {
        ReportFormat::Text => {
            for manager in &ran {
                let reporter =
                    ConsoleReporter::new(manager).with_ansi(config.enable_ansi);
                if let Err(err) = reporter.print(config.verbose) {
                    eprintln!("fasttest-demo: failed to print report: {err}");
                }
            }
        },
        ReportFormat::Json => match serde_json::to_string_pretty(&summaries) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("fasttest-demo: failed to serialize report: {err}");
                return ExitCode::from(2);
            },
        },
    }

    let failing = summaries.iter().filter(|s| !s.is_success()).count();
    tracing::info!(scenarios = summaries.len(), failing, "run finished");
    if failing == 0 {
        ExitCode::SUCCESS
    } else {
        if config.format == ReportFormat::Text {
            let color = if config.enable_ansi { Color::Red } else { Color::Default };
            if let Err(err) =
                colored_print!(color, "{failing} scenario(s) with failures\n")
            {
                eprintln!("fasttest-demo: {err}");
            }
        }
        ExitCode::FAILURE
    }
}
