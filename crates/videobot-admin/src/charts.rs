//! Dashboard charts
//!
//! Chart definitions are plain data; drawing goes through Chart.js, which
//! the page loads with a `<script>` tag.

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Chart.js interop
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js widget.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Named chart slots on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    Sales,
    Products,
}

impl ChartSlot {
    pub fn canvas_id(&self) -> &'static str {
        match self {
            Self::Sales => "salesChart",
            Self::Products => "productsChart",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Products => "products",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(rename = "borderColor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(rename = "backgroundColor")]
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// Everything needed to (re)draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub slot: ChartSlot,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Weekly sales line. Placeholder numbers until the backend reports them.
    pub fn weekly_sales() -> Self {
        Self {
            slot: ChartSlot::Sales,
            kind: ChartKind::Line,
            labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .map(String::from)
                .to_vec(),
            datasets: vec![Dataset {
                label: Some("Sales".to_string()),
                data: vec![12.0, 19.0, 3.0, 5.0, 2.0, 3.0, 8.0],
                border_color: Some("rgb(13, 110, 253)".to_string()),
                background_color: vec!["rgba(13, 110, 253, 0.1)".to_string()],
                tension: Some(0.4),
            }],
        }
    }

    /// Share of sales per product. Placeholder numbers as well.
    pub fn product_share() -> Self {
        Self {
            slot: ChartSlot::Products,
            kind: ChartKind::Doughnut,
            labels: ["Product A", "Product B", "Product C"]
                .map(String::from)
                .to_vec(),
            datasets: vec![Dataset {
                label: None,
                data: vec![30.0, 25.0, 45.0],
                border_color: None,
                background_color: vec![
                    "rgba(13, 110, 253, 0.8)".to_string(),
                    "rgba(25, 135, 84, 0.8)".to_string(),
                    "rgba(255, 193, 7, 0.8)".to_string(),
                ],
                tension: None,
            }],
        }
    }

    /// Chart.js configuration object.
    pub fn to_config(&self) -> serde_json::Value {
        let plugins = match self.kind {
            ChartKind::Line => json!({ "legend": { "display": false } }),
            ChartKind::Doughnut => json!({ "legend": { "position": "bottom" } }),
        };
        let mut options = json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": plugins,
        });
        if self.kind == ChartKind::Line {
            options["scales"] = json!({ "y": { "beginAtZero": true } });
        }

        json!({
            "type": self.kind,
            "data": { "labels": self.labels, "datasets": self.datasets },
            "options": options,
        })
    }
}

/// Draw `spec` on `canvas`, destroying `previous` first.
///
/// When Chart.js is missing or rejects the config this logs and returns
/// `None`.
pub fn redraw(
    canvas: &web_sys::HtmlCanvasElement,
    previous: Option<Chart>,
    spec: &ChartSpec,
) -> Option<Chart> {
    if let Some(chart) = previous {
        chart.destroy();
    }

    let config = match js_sys::JSON::parse(&spec.to_config().to_string()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(chart = spec.slot.name(), error = ?e, "chart config rejected by JSON.parse");
            return None;
        }
    };
    match Chart::new(canvas, &config) {
        Ok(chart) => Some(chart),
        Err(e) => {
            tracing::error!(chart = spec.slot.name(), error = ?e, "failed to draw chart");
            None
        }
    }
}

/// Tear a widget down without drawing a replacement.
pub fn release(chart: Option<Chart>) {
    if let Some(chart) = chart {
        chart.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_text_is_plain_json() {
        for spec in [ChartSpec::weekly_sales(), ChartSpec::product_share()] {
            let text = spec.to_config().to_string();
            let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, spec.to_config());
        }
    }

    #[test]
    fn line_chart_config_shape() {
        let config = ChartSpec::weekly_sales().to_config();
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 7);
        assert_eq!(config["data"]["datasets"][0]["tension"], 0.4);
        assert_eq!(config["data"]["datasets"][0]["borderColor"], "rgb(13, 110, 253)");
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn doughnut_config_has_no_scales() {
        let config = ChartSpec::product_share().to_config();
        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "bottom");
        assert!(config["options"].get("scales").is_none());
        assert!(config["data"]["datasets"][0].get("label").is_none());
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"].as_array().unwrap().len(),
            3
        );
    }
}
