use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::io::Write;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load, writing the report to `out`.
    ///
    /// Input errors stop at this boundary: the diagnostic is written to `out`
    /// and the run continues with no records. Anything else is returned.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::info!("Starting age report");

        // Extract
        let (records, input_error) = match self.pipeline.extract() {
            Ok(records) => (records, None),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Input rejected ({:?}): {}", e.category(), e);
                tracing::debug!("Suggestion: {}", e.recovery_suggestion());
                let message = e.user_friendly_message();
                writeln!(out, "{}", message)?;
                (Vec::new(), Some(message))
            }
            Err(e) => return Err(e),
        };
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let result = self.pipeline.transform(records)?;
        if result.is_empty() {
            tracing::warn!("No records to report");
        }
        tracing::info!(
            "Transformed {} records, average age {:.2}",
            result.rows.len(),
            result.average_age
        );

        out.write_all(self.pipeline.render(&result).as_bytes())?;

        // Load
        let exported = if input_error.is_some() {
            tracing::warn!("Skipping export, input was rejected");
            Vec::new()
        } else {
            self.pipeline.load(&result)?
        };
        for path in &exported {
            tracing::info!("Exported report to: {}", path);
        }

        Ok(RunSummary {
            records: result.rows.len(),
            average_age: result.average_age,
            input_error,
            exported,
        })
    }
}
