use crate::application::dto::{ReportEnvelope, ReportOptions, ReportRequest, ReportResponse};
use crate::dependency_report::domain::{DependencyMap, FileId};
use crate::dependency_report::services::{DocumentBuilder, SummaryBuilder};
use crate::ports::inbound::DependencyReportPort;
use crate::ports::outbound::{
    DependencyProvider, DocumentSerializer, PersistOutcome, ProgressReporter, ReportSink,
};
use crate::shared::Result;
use std::path::Path;

/// AnalyzeDependenciesUseCase - Core use case for dependency reports
///
/// This use case orchestrates the report workflow using generic dependency
/// injection for all infrastructure dependencies: the dependency engine
/// computes the map, the core builds the document and summary, and the
/// serialized document is persisted on a best-effort side channel.
///
/// # Type Parameters
/// * `P` - DependencyProvider implementation
/// * `D` - DocumentSerializer implementation
/// * `S` - ReportSink implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<P, D, S, PR> {
    dependency_provider: P,
    document_serializer: D,
    report_sink: S,
    progress_reporter: PR,
    options: ReportOptions,
}

impl<P, D, S, PR> AnalyzeDependenciesUseCase<P, D, S, PR>
where
    P: DependencyProvider,
    D: DocumentSerializer,
    S: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(
        dependency_provider: P,
        document_serializer: D,
        report_sink: S,
        progress_reporter: PR,
        options: ReportOptions,
    ) -> Self {
        Self {
            dependency_provider,
            document_serializer,
            report_sink,
            progress_reporter,
            options,
        }
    }

    /// Executes the dependency report use case
    ///
    /// Only failures while resolving the target or obtaining its dependency
    /// data are returned as errors. Once the map is available the report is
    /// always produced.
    ///
    /// # Arguments
    /// * `request` - Request carrying the project-relative file path
    ///
    /// # Returns
    /// ReportResponse containing the envelope, the document and the
    /// persistence outcome
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Obtain dependency data from the engine
        let (root, map) = self.collect_dependencies(&request)?;

        // Step 2: Build and serialize the document
        let document = DocumentBuilder::build(&map);
        let document_text = self.document_serializer.serialize(&document);

        // Step 3: Persist the side-channel copy (outcome never alters the response)
        let destination = self.options.location.resolve();
        let persist_outcome = self.persist_document(&document_text, &destination);

        // Step 4: Summary and envelope
        let summary = SummaryBuilder::build(&map, &request.file_path, self.options.summary_order);
        let envelope = ReportEnvelope::new(
            request.file_path,
            map.total_dependency_count(),
            map.len(),
            destination.display().to_string(),
            summary,
            document_text,
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Dependency report ready for {}: {} file(s), {} dependencies",
            root,
            envelope.files_analyzed,
            envelope.dependencies_count
        ));

        Ok(ReportResponse::new(envelope, document, persist_outcome))
    }

    /// Resolves the target and computes its dependency map, reporting progress
    fn collect_dependencies(&self, request: &ReportRequest) -> Result<(FileId, DependencyMap)> {
        self.progress_reporter
            .report(&format!("🔍 Resolving target file: {}", request.file_path));

        let root = self.dependency_provider.resolve(&request.file_path)?;

        self.progress_reporter
            .report("📊 Computing forward dependencies...");

        let map = self.dependency_provider.compute_dependencies(&root)?;

        self.progress_reporter.report(&format!(
            "   - Files analyzed: {}",
            map.len()
        ));
        self.progress_reporter.report(&format!(
            "   - Total dependencies: {}",
            map.total_dependency_count()
        ));

        Ok((root, map))
    }

    /// Hands the document to the sink and logs the outcome
    fn persist_document(&self, document_text: &str, destination: &Path) -> PersistOutcome {
        let outcome = self.report_sink.persist(document_text, destination);
        match &outcome {
            PersistOutcome::Written => {
                tracing::debug!("Persisted dependency document to {}", destination.display());
            }
            PersistOutcome::Failed(reason) => {
                tracing::debug!(
                    "Skipped dependency document at {}: {}",
                    destination.display(),
                    reason
                );
            }
        }
        outcome
    }
}

impl<P, D, S, PR> DependencyReportPort for AnalyzeDependenciesUseCase<P, D, S, PR>
where
    P: DependencyProvider,
    D: DocumentSerializer,
    S: ReportSink,
    PR: ProgressReporter,
{
    fn analyze(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.execute(request)
    }
}
