pub mod report_writer;
pub mod sbom_reader;

pub use report_writer::FileSystemWriter;
pub use sbom_reader::SbomDirectoryReader;
