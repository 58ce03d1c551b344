use dep_report::adapters::inbound::tool::{
    FileDependenciesArgs, FileDependenciesTool, ToolDefinition, ToolResponse,
};
use dep_report::adapters::outbound::console::StderrProgressReporter;
use dep_report::adapters::outbound::filesystem::{
    FileSystemReportSink, FileSystemWriter, IndexedDependencyProvider, StdoutPresenter,
    DEFAULT_INDEX_FILE_NAME,
};
use dep_report::adapters::outbound::formatters::XmlDocumentFormatter;
use dep_report::application::dto::ReportOptions;
use dep_report::application::use_cases::AnalyzeDependenciesUseCase;
use dep_report::cli::Args;
use dep_report::config::{discover_config, load_config_from_path, ConfigFile};
use dep_report::dependency_report::policies::ReportLocation;
use dep_report::ports::outbound::{OutputPresenter, ProgressReporter};
use dep_report::shared::error::{DependencyReportError, ExitCode};
use dep_report::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(ExitCode::Success) => {}
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Initialize logging; `RUST_LOG` wins unless `--verbose` is given
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("dep_report=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let presenter: Box<dyn OutputPresenter> = match args.output.as_deref() {
        Some(output_path) => Box::new(FileSystemWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };

    if args.describe_tool {
        presenter.present(&ToolDefinition::file_dependencies().to_json())?;
        return Ok(ExitCode::Success);
    }

    let Some(file_path) = args.file.clone() else {
        return Err(DependencyReportError::Validation {
            message: "A file to analyze is required".to_string(),
        }
        .into());
    };

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = validate_project_path(Path::new(project_dir))?;

    let config = load_config(&args, &project_path)?;
    let index_path = resolve_index_path(&args, &config, &project_path);
    let options = build_report_options(&args, &config, &project_path)?;
    tracing::debug!(
        "Project: {}, index: {}, options: {:?}",
        project_path.display(),
        index_path.display(),
        options
    );

    // Create adapters (Dependency Injection)
    let dependency_provider = IndexedDependencyProvider::from_file(&project_path, &index_path)?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = AnalyzeDependenciesUseCase::new(
        dependency_provider,
        XmlDocumentFormatter::new(),
        FileSystemReportSink::new(),
        progress_reporter,
        options,
    );
    let tool = FileDependenciesTool::new(use_case);

    match tool.handle(FileDependenciesArgs { file_path }) {
        ToolResponse::Success { text } => {
            presenter.present(&text)?;
            Ok(ExitCode::Success)
        }
        ToolResponse::Error { message } => {
            StderrProgressReporter::new().report_error(&format!("\n❌ {}\n", message));
            Ok(ExitCode::ApplicationError)
        }
    }
}

/// Loads the explicit config file or discovers one in the project directory
fn load_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    match args.config.as_deref() {
        Some(config_path) => load_config_from_path(Path::new(config_path)),
        None => Ok(discover_config(project_path)?.unwrap_or_default()),
    }
}

/// CLI value, then config value (relative to the project), then the default
fn resolve_index_path(args: &Args, config: &ConfigFile, project_path: &Path) -> PathBuf {
    if let Some(index) = args.index.as_deref() {
        return PathBuf::from(index);
    }
    match config.index_file.as_deref() {
        Some(index) => project_path.join(index),
        None => project_path.join(DEFAULT_INDEX_FILE_NAME),
    }
}

fn build_report_options(
    args: &Args,
    config: &ConfigFile,
    project_path: &Path,
) -> Result<ReportOptions> {
    let cli_location = match (args.report_path.as_deref(), args.report_dir.as_deref()) {
        (Some(path), _) => Some(ReportLocation::fixed(PathBuf::from(path))),
        (None, Some(dir)) => Some(ReportLocation::per_invocation(PathBuf::from(dir))),
        (None, None) => None,
    };

    let location = cli_location.unwrap_or_else(|| {
        match (config.report_path.as_deref(), config.report_dir.as_deref()) {
            (Some(path), _) => ReportLocation::fixed(project_path.join(path)),
            (None, Some(dir)) => ReportLocation::per_invocation(project_path.join(dir)),
            (None, None) => ReportLocation::default(),
        }
    });

    let summary_order = match args.summary_order {
        Some(order) => order,
        None => config.summary_order()?.unwrap_or_default(),
    };

    Ok(ReportOptions::new(location, summary_order))
}

/// Validates the project directory and returns its canonical path
fn validate_project_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(DependencyReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DependencyReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DependencyReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DependencyReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // Index entries are resolved against this path
    path.canonicalize().map_err(|e| {
        DependencyReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        }
        .into()
    })
}
