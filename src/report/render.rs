use chrono::TimeDelta;
use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

use crate::utils::time::format_duration;

use super::aggregate::{ProjectIndex, Tracking};

/// Plain table: users are columns, projects are rows.
pub const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html><html><body>
<table>
    <tr>
        {{#each header}}
        <th>{{this}}</th>
        {{/each}}
    </tr>
    {{#each rows}}
    <tr>
        {{#each this}}
        <td>{{this}}</td>
        {{/each}}
    </tr>
    {{/each}}
</table>
</body></html>
"#;

const TEMPLATE_NAME: &str = "report";

/// Content of the top left cell.
const CORNER: &str = "-";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationFormat {
    /// Number of seconds as returned by the API.
    #[default]
    Seconds,
    /// Compact hours, minutes, seconds, e.g. `1h2m3s`.
    Human,
}

impl DurationFormat {
    /// Whole values print without a fractional part. `Human` rounds to the nearest second and
    /// falls back to the raw number when it does not fit into a [TimeDelta].
    fn format(self, seconds: f64) -> String {
        match self {
            DurationFormat::Seconds => seconds.to_string(),
            DurationFormat::Human => TimeDelta::try_seconds(seconds.round() as i64)
                .map(format_duration)
                .unwrap_or_else(|| seconds.to_string()),
        }
    }
}

/// Cells of the report, ready to be put into a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// A user without time on a project gets an empty cell.
    pub fn build(tracking: &Tracking, projects: &ProjectIndex, format: DurationFormat) -> Self {
        let header: Vec<String> = std::iter::once(CORNER.to_string())
            .chain(tracking.values().map(|entry| entry.name.clone()))
            .collect();

        let rows: Vec<Vec<String>> = projects
            .iter()
            .map(|(project_id, project_name)| {
                std::iter::once(project_name.clone())
                    .chain(tracking.values().map(|entry| {
                        entry
                            .projects
                            .get(project_id)
                            .map(|duration| format.format(*duration))
                            .unwrap_or_default()
                    }))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { header, rows }
    }
}

pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    pub fn new(template: &str) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(TEMPLATE_NAME, template)?;
        Ok(Self { handlebars })
    }

    pub fn with_default_template() -> Result<Self, RenderError> {
        Self::new(REPORT_TEMPLATE)
    }

    pub fn render(&self, table: &ReportTable) -> Result<String, RenderError> {
        Ok(self.handlebars.render(TEMPLATE_NAME, table)?)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::report::aggregate::{ProjectIndex, Tracking, TrackingEntry};

    use super::{DurationFormat, RenderError, ReportRenderer, ReportTable};

    fn entry(user_id: u64, name: &str, projects: &[(u64, f64)]) -> (u64, TrackingEntry) {
        (
            user_id,
            TrackingEntry {
                user_id,
                name: name.into(),
                projects: projects.iter().copied().collect(),
            },
        )
    }

    fn project_index(projects: &[(u64, &str)]) -> ProjectIndex {
        projects
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect()
    }

    /// Text of every `tag` cell, in document order.
    fn cells(html: &str, tag: &str) -> Vec<String> {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        html.split(open.as_str())
            .skip(1)
            .filter_map(|part| part.split_once(close.as_str()))
            .map(|(cell, _)| cell.trim().to_string())
            .collect()
    }

    #[test]
    fn test_table_single_user() {
        let tracking = Tracking::from([entry(1, "Ann", &[(10, 5.0)])]);
        let projects = project_index(&[(10, "Design")]);

        let table = ReportTable::build(&tracking, &projects, DurationFormat::Seconds);

        assert_eq!(table.header, vec!["-", "Ann"]);
        assert_eq!(table.rows, vec![vec!["Design", "5"]]);
    }

    #[test]
    fn test_table_missing_durations_are_blank() {
        let tracking = Tracking::from([
            entry(1, "Ann", &[(10, 5.0)]),
            entry(2, "Bob", &[(20, 7.0), (10, 1.0)]),
        ]);
        let projects = project_index(&[(10, "Design"), (20, "Backend")]);

        let table = ReportTable::build(&tracking, &projects, DurationFormat::Seconds);

        assert_eq!(table.header, vec!["-", "Ann", "Bob"]);
        assert_eq!(
            table.rows,
            vec![vec!["Design", "5", "1"], vec!["Backend", "", "7"]]
        );
    }

    #[test]
    fn test_table_human_durations() {
        let tracking = Tracking::from([entry(1, "Ann", &[(10, 3723.0), (20, -3723.0)])]);
        let projects = project_index(&[(10, "Design"), (20, "Refunds")]);

        let table = ReportTable::build(&tracking, &projects, DurationFormat::Human);

        assert_eq!(
            table.rows,
            vec![vec!["Design", "1h2m3s"], vec!["Refunds", "-1h2m3s"]]
        );
    }

    #[test]
    fn test_table_fractional_durations() {
        let tracking = Tracking::from([entry(1, "Ann", &[(10, 12.5), (20, 3723.4)])]);
        let projects = project_index(&[(10, "Design"), (20, "Backend")]);

        let seconds = ReportTable::build(&tracking, &projects, DurationFormat::Seconds);
        let human = ReportTable::build(&tracking, &projects, DurationFormat::Human);

        assert_eq!(
            seconds.rows,
            vec![vec!["Design", "12.5"], vec!["Backend", "3723.4"]]
        );
        assert_eq!(
            human.rows,
            vec![vec!["Design", "13s"], vec!["Backend", "1h2m3s"]]
        );
    }

    #[test]
    fn test_table_human_duration_out_of_range() {
        let tracking = Tracking::from([entry(1, "Ann", &[(10, 1e17)])]);
        let projects = project_index(&[(10, "Design")]);

        let table = ReportTable::build(&tracking, &projects, DurationFormat::Human);

        assert_eq!(table.rows, vec![vec!["Design", "100000000000000000"]]);
    }

    #[test]
    fn test_table_empty() {
        let table = ReportTable::build(&IndexMap::new(), &IndexMap::new(), DurationFormat::Seconds);

        assert_eq!(table.header, vec!["-"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_render_html() -> Result<(), RenderError> {
        let tracking = Tracking::from([
            entry(1, "Ann", &[(10, 5.0)]),
            entry(2, "Bob", &[(20, 7.0)]),
        ]);
        let projects = project_index(&[(10, "Design"), (20, "Backend")]);
        let table = ReportTable::build(&tracking, &projects, DurationFormat::Seconds);

        let html = ReportRenderer::with_default_template()?.render(&table)?;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("<style"));
        assert_eq!(cells(&html, "th"), vec!["-", "Ann", "Bob"]);
        assert_eq!(cells(&html, "td"), vec!["Design", "5", "", "Backend", "", "7"]);
        assert_eq!(html.matches("<tr>").count(), 3);
        Ok(())
    }

    #[test]
    fn test_render_escapes_names() -> Result<(), RenderError> {
        let tracking = Tracking::from([entry(1, "<b>Ann</b>", &[(10, 5.0)])]);
        let projects = project_index(&[(10, "R&D")]);
        let table = ReportTable::build(&tracking, &projects, DurationFormat::Seconds);

        let html = ReportRenderer::with_default_template()?.render(&table)?;

        assert!(html.contains("&lt;b&gt;Ann&lt;/b&gt;"));
        assert!(html.contains("R&amp;D"));
        Ok(())
    }

    #[test]
    fn test_custom_template() -> Result<(), RenderError> {
        let renderer = ReportRenderer::new("{{#each header}}[{{this}}]{{/each}}")?;
        let tracking = Tracking::from([entry(1, "Ann", &[])]);

        let rendered = renderer.render(&ReportTable::build(
            &tracking,
            &ProjectIndex::new(),
            DurationFormat::Seconds,
        ))?;

        assert_eq!(rendered, "[-][Ann]");
        Ok(())
    }

    #[test]
    fn test_invalid_template() {
        let result = ReportRenderer::new("{{#each header}}");
        assert!(matches!(result, Err(RenderError::Template(_))));
    }
}
