//! HTML and Markdown table rendering.

use super::row::ReportRow;
use super::ReportError;
use crate::store::RepoRecord;
use chrono::{DateTime, Utc};
use handlebars::{no_escape, Handlebars};
use serde_json::json;

/// HTML report: one flat table in fixed column order plus a generation
/// footer.
const HTML_TEMPLATE: &str = r#"<table><tr><th>Name</th><th>Dependencies</th><th>License</th><th>Age (Years)</th><th>Stars</th><th>Issues</th><th>Last Commit</th></tr>
{{#each rows}}<tr><td><a href="{{repo_url}}">{{name}}</a></td><td>{{dependencies}}</td><td>{{license}}</td><td>{{age_years}}</td><td>{{stars}}</td><td>{{issues}}</td><td>{{last_commit}}</td></tr>
{{/each}}</table>
<p>Last Updated At: {{generated_at}}</p>
"#;

/// Markdown report: pipe table with shields.io badges for stars and issues.
const MARKDOWN_TEMPLATE: &str = r"| Name | Dependencies | License | Age (Years) | Stars | Issues | Last Commit |
|------|--------------|---------|-------------|-------|--------|-------------|
{{#each rows}}| [{{name}}]({{repo_url}}) | {{dependencies}} | {{license}} | {{age_years}} | ![Stars](https://img.shields.io/github/stars/{{full_name}}?style=social) | ![Issues](https://img.shields.io/github/issues/{{full_name}}) | {{last_commit}} |
{{/each}}
_Last Updated At: {{generated_at}}_
";

/// Format of the generation-timestamp footer.
const FOOTER_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Renders record sequences into report documents.
///
/// Both renderers are pure functions of `(records, now)`: rows appear in
/// input order and the footer timestamp comes from the injected `now`, so
/// output is fully deterministic for fixed inputs.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    /// Creates a renderer with both table templates registered.
    ///
    /// The registry uses strict mode (missing variables are errors) and no
    /// HTML escaping; cells are derived strings, not markup.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if a template constant fails to register.
    pub fn new() -> Result<Self, ReportError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_template_string("html_report", HTML_TEMPLATE)?;
        handlebars.register_template_string("markdown_report", MARKDOWN_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Renders the HTML table for `records`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if template rendering fails.
    pub fn render_html(
        &self,
        records: &[RepoRecord],
        now: DateTime<Utc>,
    ) -> Result<String, ReportError> {
        self.render("html_report", records, now)
    }

    /// Renders the Markdown table for `records`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if template rendering fails.
    pub fn render_markdown(
        &self,
        records: &[RepoRecord],
        now: DateTime<Utc>,
    ) -> Result<String, ReportError> {
        self.render("markdown_report", records, now)
    }

    fn render(
        &self,
        template: &str,
        records: &[RepoRecord],
        now: DateTime<Utc>,
    ) -> Result<String, ReportError> {
        let rows: Vec<ReportRow> = records
            .iter()
            .map(|record| ReportRow::from_record(record, now))
            .collect();

        let data = json!({
            "rows": rows,
            "generated_at": now.format(FOOTER_FORMAT).to_string(),
        });

        Ok(self.handlebars.render(template, &data)?)
    }
}
