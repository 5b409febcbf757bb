//! Demo: a small greeter wired through optreg.
//!
//! Try:
//! ```sh
//! cargo run --example optreg_demo -- --help
//! cargo run --example optreg_demo -- --name=alice -v extra args
//! cargo run --example optreg_demo -- --ratio 0.75
//! ```

use std::process::ExitCode;

use optreg::{ArgOutcome, Cfg, CfgOption, Severity};

fn main() -> ExitCode {
    let mut cfg = Cfg::new()
        .name("optreg_demo")
        .version(env!("CARGO_PKG_VERSION"))
        .author("The optreg developers")
        .copyright("MIT licensed");

    cfg.add(CfgOption::bool("verbose").describe("Enable chatty output."));
    cfg.add(
        CfgOption::string("name")
            .allow_values(["alice", "bob"])
            .describe("Who to greet."),
    );
    cfg.add(
        CfgOption::double("ratio")
            .range(0.0, 1.0)
            .describe("Enthusiasm, from flat to ecstatic."),
    );
    cfg.shorthand('v', "verbose");
    cfg.shorthand('n', "name");

    // File first (defaults), arguments second (overrides).
    match cfg.from_file("optreg_demo.conf", false) {
        Ok(warnings) => {
            for w in warnings {
                eprintln!("warning: {w}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let positionals = match cfg.from_arguments(std::env::args()) {
        Ok(ArgOutcome::Help(text)) | Ok(ArgOutcome::Version(text)) => {
            println!("{text}");
            return ExitCode::SUCCESS;
        }
        Ok(ArgOutcome::Parsed { positionals }) => positionals,
        Err(err) => {
            eprintln!("error: {err}");
            return match err.severity() {
                Severity::Usage => ExitCode::FAILURE,
                _ => ExitCode::from(2),
            };
        }
    };

    for key in ["verbose", "name", "ratio"] {
        if let Some(opt) = cfg.get(key)
            && !opt.is_valid()
        {
            eprintln!("error: invalid value for '{key}'");
            return ExitCode::FAILURE;
        }
    }

    let name = cfg.get("name").map(|o| o.as_str()).unwrap_or_default();
    let greeting = if name.is_empty() { "hello" } else { name };
    println!("greetings, {greeting}!");

    if cfg.get("verbose").is_some_and(|o| o.as_bool()) {
        println!("ratio: {}", cfg.get("ratio").map(|o| o.as_f64()).unwrap_or(0.0));
        println!("positionals: {positionals:?}");
    }

    ExitCode::SUCCESS
}
