/// Filesystem adapters for file I/O operations
mod file_writer;
mod index_reader;
mod report_sink;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use index_reader::{IndexedDependencyProvider, DEFAULT_INDEX_FILE_NAME};
pub use report_sink::FileSystemReportSink;
