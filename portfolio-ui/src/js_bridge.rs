//! Google Charts calls via `js_sys::eval()`.
//!
//! The charting library is loaded by the hosting page. Rendering polls until
//! `google.visualization` and the container element both exist, then draws.
//! Wait loops are bounded and a single pie chart loop serves every redraw.
//! Data and options cross the boundary as JSON string literals.

use portfolio_core::vote::PieChartOptions;
use serde_json::Value;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[portfolio] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    // A JSON string is a valid JS string literal.
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Polls at 100 ms before a chart wait loop gives up.
pub const MAX_CHART_POLLS: u32 = 300;

/// Ask the Google Charts loader for the `corechart` package if the page has
/// the loader but not the visualization classes yet.
pub fn init_charts() {
    call_js(&format!(
        r#"
        (function() {{
            var tries = 0;
            var waitForLoader = setInterval(function() {{
                if (typeof google === 'undefined' || !google.charts) {{
                    if (++tries >= {MAX_CHART_POLLS}) {{
                        clearInterval(waitForLoader);
                        console.warn('[portfolio] Google Charts loader not found');
                    }}
                    return;
                }}
                clearInterval(waitForLoader);
                if (!google.visualization || !google.visualization.PieChart) {{
                    google.charts.load('current', {{ packages: ['corechart'] }});
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Build the script that draws a pie chart into `container_id`.
///
/// The chart request is stored on `window.__portfolioPieChart`, replacing any
/// request still waiting. One wait loop at a time draws the latest request
/// once `google.visualization` and the container exist, and stops after
/// [`MAX_CHART_POLLS`] attempts.
pub fn pie_chart_script(container_id: &str, rows: &Value, options: &PieChartOptions) -> String {
    let id = js_string(container_id);
    let rows_json = js_string(&rows.to_string());
    let options_json = js_string(&serde_json::to_string(options).unwrap_or_else(|_| "{}".to_string()));
    format!(
        r#"
        (function() {{
            window.__portfolioPieChart = {{ id: {id}, rows: {rows_json}, options: {options_json} }};
            if (window.__portfolioPiePoll) {{
                return;
            }}
            var tries = 0;
            window.__portfolioPiePoll = setInterval(function() {{
                var pending = window.__portfolioPieChart;
                var ready = typeof google !== 'undefined' &&
                    google.visualization &&
                    google.visualization.PieChart &&
                    document.getElementById(pending.id);
                if (!ready && ++tries < {MAX_CHART_POLLS}) {{
                    return;
                }}
                clearInterval(window.__portfolioPiePoll);
                window.__portfolioPiePoll = null;
                delete window.__portfolioPieChart;
                if (!ready) {{
                    console.warn('[portfolio] pie chart not drawn: charts or container missing');
                    return;
                }}
                try {{
                    var data = google.visualization.arrayToDataTable(JSON.parse(pending.rows));
                    var chart = new google.visualization.PieChart(document.getElementById(pending.id));
                    chart.draw(data, JSON.parse(pending.options));
                }} catch(e) {{ console.error('[portfolio] pie chart error:', e); }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render a pie chart once the charting library and container are ready.
pub fn render_pie_chart(container_id: &str, rows: &Value, options: &PieChartOptions) {
    call_js(&pie_chart_script(container_id, rows, options));
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::vote::VoteTally;

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("chart-container"), "\"chart-container\"");
        assert_eq!(js_string(r#"it's "x""#), r#""it's \"x\"""#);
    }

    #[test]
    fn test_pie_chart_script_embeds_rows_and_options() {
        let rows = VoteTally::new(3, 5).chart_rows();
        let script = pie_chart_script("chart-container", &rows, &PieChartOptions::default());
        assert!(script.contains(r#"id: "chart-container""#));
        assert!(script.contains(r#"rows: "[[\"Dog\",\"Votes\"],[\"Teddy\",3],[\"Zoe\",5]]""#));
        assert!(script.contains(r#"\"fontSize\":16"#));
        assert!(script.contains("google.visualization.PieChart"));
    }

    #[test]
    fn test_pie_chart_script_reuses_one_bounded_loop() {
        let rows = VoteTally::new(4, 5).chart_rows();
        let script = pie_chart_script("chart-container", &rows, &PieChartOptions::default());
        assert!(script.contains(r#"window.__portfolioPieChart = { id: "chart-container""#));
        assert!(script.contains("if (window.__portfolioPiePoll) {"));
        assert!(script.contains(&format!("++tries < {}", MAX_CHART_POLLS)));
        assert_eq!(script.matches("setInterval(").count(), 1);
        assert_eq!(script.matches("clearInterval(window.__portfolioPiePoll)").count(), 1);
    }
}
