//! Square drawing area for the vote pie chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the pie chart is drawn into
    pub id: String,
    /// Whether a tally has arrived from `/dog-data`
    pub has_tally: bool,
    /// Side length of the chart area in pixels
    #[props(default = 320)]
    pub size: u32,
}

/// The pie chart area, with a note underneath until the first tally arrives.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let chart_style = format!(
        "width: 100%; max-width: {size}px; height: {size}px;",
        size = props.size
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{chart_style}",
        }
        if !props.has_tally {
            p {
                style: "color: #666; font-style: italic;",
                "Counting votes..."
            }
        }
    }
}
