use owo_colors::OwoColorize;
use std::process;
use sysdig_sbom_export::cli::Args;
use sysdig_sbom_export::prelude::*;

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    // Resolve configuration before any network access
    let config = ExportConfig::load(&args.config, args.region.as_deref())?;

    let progress_reporter = StderrProgressReporter::new();

    if args.dry_run {
        report_dry_run(&config, &progress_reporter);
        return Ok(());
    }

    // Create adapters (Dependency Injection)
    let client = SysdigClient::new(config.endpoints().clone(), config.api_token())?;
    let use_case = ExportSbomsUseCase::new(client, &progress_reporter);

    // Output is only written once the whole run succeeded
    let writer = FileSystemWriter::new(args.output);
    use_case.export_to(ExportRequest::new(), &JsonFormatter::new(), &writer)?;

    Ok(())
}

fn report_dry_run(config: &ExportConfig, progress_reporter: &StderrProgressReporter) {
    let endpoints = config.endpoints();
    progress_reporter.report(&format!("🌐 Region: {}", config.region()));
    progress_reporter.report(&format!(
        "   Runtime results: {}",
        endpoints.runtime_results_url()
    ));
    progress_reporter.report(&format!(
        "   SBOMs:           {}",
        endpoints.sbom_url_template()
    ));
    progress_reporter
        .report_completion("Success: Configuration validated. No requests were sent.");
}
