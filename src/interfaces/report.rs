use crate::application::engine::PayoutReport;
use crate::error::Result;
use std::io::Write;

const DELIMITER: &str = "-----------";

/// Writes a [`PayoutReport`] as the console report or as JSON.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Donations per organization, then net payouts per worker, each
    /// section framed by delimiter lines.
    pub fn write_text(&mut self, report: &PayoutReport) -> Result<()> {
        self.heading("DONATIONS")?;
        for (organization, amount) in &report.donations {
            writeln!(self.writer, "{organization}: {amount}")?;
        }
        self.heading("TUTOR PAYOUTS")?;
        for (name, amount) in report.net.iter() {
            writeln!(self.writer, "{name}: {amount}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, report: &PayoutReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{DELIMITER}")?;
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{DELIMITER}")?;
        Ok(())
    }
}
