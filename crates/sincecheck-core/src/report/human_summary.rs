//! Human-readable summary renderer for check reports.

use crate::report::model::CheckReport;

/// Render a text summary of a [`CheckReport`].
///
/// Informational only; consumers that match on output use
/// [`CheckReport::lines`].
pub fn render_human_summary(report: &CheckReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("## @since check: module {}\n\n", report.module));

    out.push_str("| Version | Role | Elements | Digest |\n|---|---|---|---|\n");
    for entry in &report.analyzed {
        out.push_str(&format!(
            "| {} | analyzed | {} | `{}` |\n",
            entry.version,
            entry.elements,
            short(&entry.digest)
        ));
    }
    out.push_str(&format!(
        "| {} | verify | {} | `{}` |\n\n",
        report.verify.version,
        report.verify.elements,
        short(&report.verify.digest)
    ));

    if report.passed() {
        out.push_str(&format!(
            "_All {} elements carry the expected @since version._\n",
            report.elements_checked
        ));
        return out;
    }

    out.push_str(&format!(
        "### Diagnostics ({}, {} missing)\n\n",
        report.diagnostics.len(),
        report.missing_count()
    ));
    for line in report.lines() {
        out.push_str(&format!("- {}\n", line));
    }
    out.push_str(&format!(
        "\n**FAILED**: {} of {} elements have a wrong @since version\n",
        report.diagnostics.len(),
        report.elements_checked
    ));

    out
}

/// First 12 characters of a digest
fn short(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
