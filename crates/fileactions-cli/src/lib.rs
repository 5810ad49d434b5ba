//! Command-line inspector for file action resolution.
//!
//! Loads a scenario describing registered apps, capabilities, the current
//! route and a selection, then prints the resolved actions. With `--open`
//! the default action runs against a recording host.

pub mod args;
pub mod error;
pub mod host;
pub mod report;
pub mod scenario;

pub use args::Args;
pub use error::{CliError, CliResult};
pub use host::RecordingHost;
pub use report::Report;
pub use scenario::{AppliesTo, Scenario, SystemActionSpec};

use fileactions::{AppConfig, IdentityTranslator};

/// Resolve a scenario and return the text to print.
pub fn run(args: &Args, config: &AppConfig) -> CliResult<String> {
    let scenario = Scenario::load(&args.scenario)?;
    let resolver = scenario.build_resolver()?;
    let ctx = scenario.context(config);
    let translator = IdentityTranslator;

    let report = Report::build(
        &resolver,
        &ctx,
        scenario.current_folder.as_ref(),
        &translator,
    );
    let mut out = report.render();

    if args.open {
        let recorder = RecordingHost::new(args.block_popups);
        let host = recorder.host(&translator);
        let action =
            resolver.trigger_default_action(&ctx, scenario.current_folder.as_ref(), &host)?;
        out.push_str(&format!("triggered: {}\n", action.id));
        for entry in recorder.entries() {
            out.push_str(&format!("  {}\n", entry));
        }
    }

    Ok(out)
}
