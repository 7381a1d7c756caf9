// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use comfy_table::{CellAlignment, Table, presets::UTF8_FULL};
use mdscope_engine::CensusReport;
use mdscope_engine::session::Outcome;
use std::fmt::Write;

const TOTAL_LABEL: &str = "总计";

pub fn print_clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Render a census report in the requested format.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn render(report: &CensusReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
        OutputFormat::Md => render_markdown(report),
        OutputFormat::Html => render_html(report),
    })
}

fn render_table(report: &CensusReport) -> String {
    if report.is_empty() {
        return format!("未在 {} 中找到 Markdown 文件\n", report.root.display());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["目录路径", "Markdown文件数量"]);
    for entry in &report.entries {
        table.add_row(vec![entry.directory.clone(), entry.count.to_string()]);
    }
    table.add_row(vec![TOTAL_LABEL.to_string(), report.total.to_string()]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    format!(
        "{table}\n[mdscope] {} 个目录, 共 {} 个 Markdown 文件\n",
        report.entries.len(),
        report.total
    )
}

fn render_csv(report: &CensusReport) -> String {
    let mut out = String::from("directory,count\n");
    for entry in &report.entries {
        let dir = &entry.directory;
        if dir.contains(',') || dir.contains('"') || dir.contains('\n') {
            let escaped = dir.replace('"', "\"\"");
            let _ = writeln!(out, "\"{escaped}\",{}", entry.count);
        } else {
            let _ = writeln!(out, "{dir},{}", entry.count);
        }
    }
    let _ = writeln!(out, "TOTAL,{}", report.total);
    out
}

fn render_markdown(report: &CensusReport) -> String {
    let mut out = String::from("### Markdown 文件统计\n\n| 目录路径 | 数量 |\n|:---|---:|\n");
    for entry in &report.entries {
        let dir = entry.directory.replace('|', "\\|");
        let _ = writeln!(out, "| {dir} | {} |", entry.count);
    }
    let _ = writeln!(out, "| **{TOTAL_LABEL}** | **{}** |", report.total);
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HTML_STYLE: &str = "body{font-family:Arial,sans-serif;margin:20px;background:#f5f5f5}\
h1{color:#333;text-align:center}\
.container{max-width:1200px;margin:0 auto;background:#fff;padding:20px;border-radius:8px;box-shadow:0 0 10px rgba(0,0,0,.1)}\
table{width:100%;border-collapse:collapse;margin:20px 0}\
th,td{padding:12px;text-align:left;border-bottom:1px solid #ddd}\
th{background:#4CAF50;color:#fff}\
tr:hover{background:#f5f5f5}\
.total-row{font-weight:bold;background:#f2f2f2}";

fn render_html(report: &CensusReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"zh-CN\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"UTF-8\">");
    let _ = writeln!(out, "<title>Markdown文件统计报告</title>");
    let _ = writeln!(out, "<style>{HTML_STYLE}</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<div class=\"container\">");
    let _ = writeln!(out, "<h1>Markdown文件统计报告</h1>");
    let _ = writeln!(
        out,
        "<p>{} · {}</p>",
        escape_html(&report.root.display().to_string()),
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "<table>");
    let _ = writeln!(out, "<tr><th>目录路径</th><th>Markdown文件数量</th></tr>");
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.directory),
            entry.count
        );
    }
    let _ = writeln!(
        out,
        "<tr class=\"total-row\"><td>{TOTAL_LABEL}</td><td>{}</td></tr>",
        report.total
    );
    let _ = writeln!(out, "</table>");
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

/// One-line summary of how a commit session ended, for the log.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NoFiles => "no markdown files found".to_string(),
        Outcome::NothingSelected => "no valid file selected".to_string(),
        Outcome::Written { path, messages } => {
            format!("{} messages written to {}", messages.len(), path.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use mdscope_engine::{CommitMessage, DirCount};
    use std::path::PathBuf;

    fn report() -> CensusReport {
        CensusReport {
            root: PathBuf::from("/repo"),
            generated_at: Local::now(),
            entries: vec![
                DirCount {
                    directory: "Java基础".into(),
                    count: 3,
                },
                DirCount {
                    directory: "a,b<c>|d".into(),
                    count: 1,
                },
            ],
            total: 4,
        }
    }

    #[test]
    fn csv_quotes_commas() {
        let out = render(&report(), OutputFormat::Csv).unwrap();
        assert_eq!(out, "directory,count\nJava基础,3\n\"a,b<c>|d\",1\nTOTAL,4\n");
    }

    #[test]
    fn markdown_escapes_pipes() {
        let out = render(&report(), OutputFormat::Md).unwrap();
        assert!(out.contains("| a,b<c>\\|d | 1 |"));
        assert!(out.contains("| **总计** | **4** |"));
    }

    #[test]
    fn html_escapes_and_totals() {
        let out = render(&report(), OutputFormat::Html).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<td>a,b&lt;c&gt;|d</td>"));
        assert!(out.contains("<tr class=\"total-row\"><td>总计</td><td>4</td></tr>"));
    }

    #[test]
    fn json_carries_entries_and_total() {
        let out = render(&report(), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["total"], 4);
        assert_eq!(v["entries"][0]["directory"], "Java基础");
        assert_eq!(v["entries"][0]["count"], 3);
    }

    #[test]
    fn yaml_lists_directories() {
        let out = render(&report(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("directory: Java基础"));
        assert!(out.contains("total: 4"));
    }

    #[test]
    fn table_has_total_row() {
        let out = render(&report(), OutputFormat::Table).unwrap();
        assert!(out.contains("Java基础"));
        assert!(out.contains(TOTAL_LABEL));
        assert!(out.contains("2 个目录, 共 4 个 Markdown 文件"));
    }

    #[test]
    fn empty_table_says_so() {
        let mut empty = report();
        empty.entries.clear();
        empty.total = 0;
        let out = render(&empty, OutputFormat::Table).unwrap();
        assert!(out.contains("未在 /repo 中找到 Markdown 文件"));
    }

    #[test]
    fn outcome_summaries() {
        assert_eq!(describe_outcome(&Outcome::NoFiles), "no markdown files found");
        let written = Outcome::Written {
            path: PathBuf::from("out.txt"),
            messages: vec![CommitMessage::new("Git", "添加", "笔记")],
        };
        assert_eq!(describe_outcome(&written), "1 messages written to out.txt");
    }
}
