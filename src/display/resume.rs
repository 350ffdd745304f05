//! Resume display formatting
//!
//! Formats resumes for terminal output in table and detail views.

use crate::models::Resume;

/// Format a list of resumes as a table
pub fn format_resume_list(resumes: &[Resume]) -> String {
    if resumes.is_empty() {
        return "No resumes found.".to_string();
    }

    let id_width = resumes
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let title_width = resumes
        .iter()
        .map(|r| r.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<title_width$}  {:<8}  {:<16}  {}\n",
        "ID",
        "Title",
        "Status",
        "Updated",
        "Notes",
        id_width = id_width,
        title_width = title_width,
    ));

    output.push_str(&format!(
        "{:-<id_width$}  {:-<title_width$}  {:-<8}  {:-<16}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        id_width = id_width,
        title_width = title_width,
    ));

    for resume in resumes {
        let notes = if resume.is_complete() {
            String::new()
        } else {
            format!("{} unreadable", resume.warnings.len())
        };

        output.push_str(&format!(
            "{:<id_width$}  {:<title_width$}  {:<8}  {:<16}  {}\n",
            resume.id.to_string(),
            resume.title,
            resume.status.to_string(),
            resume.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            notes,
            id_width = id_width,
            title_width = title_width,
        ));
    }

    output
}

/// Format a single resume's details, content included
pub fn format_resume_details(resume: &Resume) -> String {
    let mut output = String::new();

    output.push_str(&format!("Resume: {}\n", resume.title));
    output.push_str(&format!("  ID:       {}\n", resume.id));
    output.push_str(&format!("  Owner:    {}\n", resume.owner_id));
    output.push_str(&format!("  Status:   {}\n", resume.status));
    output.push_str(&format!(
        "  Created:  {}\n",
        resume.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        resume.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');

    let content = serde_json::to_string_pretty(resume.content.as_map())
        .unwrap_or_else(|_| "{}".to_string());
    output.push_str(&content);
    output.push('\n');

    output
}

/// One line per PII field that came back in its stored form
pub fn format_warnings(resume: &Resume) -> Vec<String> {
    resume
        .warnings
        .iter()
        .map(|issue| format!("warning: {} {}", resume.id, issue))
        .collect()
}
