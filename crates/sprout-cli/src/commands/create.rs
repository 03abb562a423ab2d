//! The interactive component-creation flow.
//!
//! Responsibility: wire the prompt adapter into the core collector, show
//! progress, and hand the collected spec to the core generate service.
//! No business logic lives here.

use tracing::{debug, info, instrument};

use sprout_adapters::{LocalFilesystem, SimpleFormatter};
use sprout_core::application::{AnswerCollector, GenerateService};

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the interactive flow.
///
/// Sequence:
/// 1. Print the banner
/// 2. Collect the five answers (name, kind, connected, extension, directory)
/// 3. Announce what is about to be created and where
/// 4. Build, format, and write the component file
/// 5. Report the destination path
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    #[cfg(not(feature = "interactive"))]
    {
        let _ = (global, config, output);
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    #[cfg(feature = "interactive")]
    {
        output.banner()?;

        // 2. Collect answers through the terminal prompt.
        let prompt = crate::prompt::TermPrompt::new(global.no_color || !output.supports_color());
        let collector =
            AnswerCollector::new(Box::new(prompt)).with_connected_default(config.defaults.connected);

        let spec = collector.collect().map_err(|e| {
            if e.is_cancelled() {
                CliError::Cancelled
            } else {
                CliError::Core(e)
            }
        })?;

        debug!(
            name = spec.name(),
            kind = %spec.kind(),
            connected = spec.connected(),
            extension = %spec.extension(),
            directory = spec.directory(),
            "Answers collected"
        );

        // 3. Announce before writing.
        output.progress(&format!(
            "Creating a {}{} component at {}...",
            if spec.connected() { "connected " } else { "" },
            spec.kind(),
            spec.file_path(),
        ))?;

        // 4. Build, format, write.
        let service = GenerateService::new(
            Box::new(SimpleFormatter::new()),
            Box::new(LocalFilesystem::new()),
        );
        let path = service.generate(&spec).map_err(CliError::Core)?;

        info!(path = %path.display(), "Component created");

        // 5. Report.
        output.success(&format!("Created {}", path.display()))?;

        Ok(())
    }
}
