use cronexp_core::config::{OutputConfig, OutputFormat};
use cronexp_parser::ScheduleRecord;

/// Render `record` the way `output` asks for, newline-terminated.
pub fn render(record: &ScheduleRecord, output: &OutputConfig) -> anyhow::Result<String> {
    match output.format {
        OutputFormat::Table => Ok(record.render_table(output.label_width)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(record)?;
            json.push('\n');
            Ok(json)
        }
    }
}
