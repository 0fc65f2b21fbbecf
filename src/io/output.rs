use std::io::Write;

use clap::ValueEnum;

use crate::core::{AnalysisReport, MlOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_rules(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let rules = &report.rule_results;
        writeln!(
            self.writer,
            "{} OVERALL RISK: {}",
            rules.risk_emoji,
            rules.risk_level.label()
        )?;
        writeln!(self.writer, "────────────────────────────")?;

        if rules.conditions.is_empty() {
            writeln!(self.writer, "No conditions flagged")?;
        } else {
            for (condition, factor) in rules.conditions.iter().zip(rules.risk_factors.iter()) {
                writeln!(self.writer, "• {} ({})", condition, factor)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_prediction(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        match &report.ml_results {
            MlOutcome::Predicted(prediction) => {
                writeln!(
                    self.writer,
                    "Classifier: {} ({:.1}% confidence)",
                    prediction.predicted_risk.label(),
                    prediction.confidence
                )?;
            }
            MlOutcome::Unavailable { error } => {
                writeln!(self.writer, "Classifier: unavailable ({})", error)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "RECOMMENDATIONS")?;
        writeln!(self.writer, "────────────────────────────")?;
        for recommendation in &report.rule_results.recommendations {
            writeln!(self.writer, "• {}", recommendation)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_rules(report)?;
        self.write_prediction(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}
