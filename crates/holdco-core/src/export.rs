use crate::{models::Company, Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }
}

/// Writes a company listing out for the investment team
pub struct Exporter;

impl Exporter {
    /// Export companies to a file, format picked from the extension
    pub fn export_to_file<P: AsRef<Path>>(companies: &[&Company], path: P) -> Result<()> {
        let path = path.as_ref();

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ExportFormat::from_extension)
            .ok_or_else(|| {
                Error::ConfigError(
                    "Could not determine export format from extension. Use .json, .csv, or .md"
                        .to_string(),
                )
            })?;

        Self::export_to_file_with_format(companies, path, format)
    }

    pub fn export_to_file_with_format<P: AsRef<Path>>(
        companies: &[&Company],
        path: P,
        format: ExportFormat,
    ) -> Result<()> {
        let content = match format {
            ExportFormat::Json => Self::to_json(companies)?,
            ExportFormat::Csv => Self::to_csv(companies),
            ExportFormat::Markdown => Self::to_markdown(companies),
        };

        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    pub fn to_json(companies: &[&Company]) -> Result<String> {
        Ok(serde_json::to_string_pretty(companies)?)
    }

    pub fn to_csv(companies: &[&Company]) -> String {
        let mut output = String::new();

        output.push_str("ID,Name,Category,TIPS,CEO,Founded,Business,Room,Homepage\n");

        for company in companies {
            output.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                Self::escape_csv(&company.id),
                Self::escape_csv(&company.name),
                company.category,
                if company.tips { "Y" } else { "N" },
                Self::escape_csv(&company.ceo),
                Self::format_date(company),
                Self::escape_csv(&company.business),
                Self::escape_csv(&company.room),
                Self::escape_csv(&company.homepage),
            ));
        }

        output
    }

    pub fn to_markdown(companies: &[&Company]) -> String {
        let mut output = String::new();

        output.push_str("# 기업 목록\n\n");
        output.push_str(&format!("총 {}개 기업\n\n", companies.len()));

        if companies.is_empty() {
            output.push_str("조건에 맞는 기업이 없습니다.\n");
            return output;
        }

        output.push_str("| 기업명 | 구분 | 대표 | 설립일 | 사업분야 |\n");
        output.push_str("|---|---|---|---|---|\n");

        for company in companies {
            let name = if company.tips {
                format!("{} (TIPS)", company.name)
            } else {
                company.name.clone()
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown(&name),
                company.category.label(),
                Self::escape_markdown(&company.ceo),
                Self::format_date(company),
                Self::escape_markdown(&company.business),
            ));
        }

        output
    }

    fn format_date(company: &Company) -> String {
        company
            .founded
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Escape CSV special characters
    fn escape_csv(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    fn escape_markdown(s: &str) -> String {
        s.replace('|', "\\|").replace('\n', " ")
    }
}
