pub mod generate_report;

pub use generate_report::{
    GenerateReportUseCase, ReportRequest, ReportResponse, DEFAULT_CONCURRENCY,
};
