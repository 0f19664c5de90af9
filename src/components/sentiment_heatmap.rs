//! Sentiment heatmap panel.
//!
//! Renders one colored cell per label with dominant-sentiment hue and
//! volume-scaled opacity, plus a hover tooltip with the raw counts and a
//! fixed legend. Cells recompute whenever the input pairs change.

use leptos::prelude::*;

use crate::util::sentiment::{
    SentimentCounts, build_heatmap_cells, cell_color, dominant, text_color,
};

/// Heatmap over `(label, counts)` pairs, in input order.
#[component]
pub fn SentimentHeatmap(
    #[prop(into)] data: Signal<Vec<(String, SentimentCounts)>>,
    #[prop(default = "SENTIMENT ANALYSIS".to_owned())] title: String,
) -> impl IntoView {
    view! {
        <section class="heatmap">
            <header class="heatmap__header">
                <span class="heatmap__title">{title}</span>
            </header>
            <div class="heatmap__grid">
                {move || {
                    let cells = build_heatmap_cells(&data.get());
                    if cells.is_empty() {
                        return view! {
                            <p class="heatmap__empty">"No sentiment data yet."</p>
                        }
                        .into_any();
                    }
                    cells
                        .into_iter()
                        .map(|cell| {
                            let style = format!(
                                "background-color: {}; color: {}",
                                cell_color(&cell),
                                text_color(&cell)
                            );
                            let total = cell.counts.total();
                            let dominant_label = dominant(cell.counts).label();
                            view! {
                                <div class="heatmap__cell" style=style>
                                    <span class="heatmap__cell-label">{cell.label.clone()}</span>
                                    <span class="heatmap__cell-total">{total}</span>
                                    <span class="heatmap__cell-dominant">{dominant_label}</span>
                                    <div class="heatmap__tooltip">
                                        <span class="heatmap__tooltip-title">{cell.label.clone()}</span>
                                        <span class="heatmap__tooltip-positive">
                                            {format!("Positive: {}", cell.counts.positive)}
                                        </span>
                                        <span class="heatmap__tooltip-negative">
                                            {format!("Negative: {}", cell.counts.negative)}
                                        </span>
                                        <span class="heatmap__tooltip-neutral">
                                            {format!("Neutral: {}", cell.counts.neutral)}
                                        </span>
                                        <span class="heatmap__tooltip-total">{format!("Total: {total}")}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <footer class="heatmap__legend">
                <span class="heatmap__legend-item heatmap__legend-item--positive">"Positive"</span>
                <span class="heatmap__legend-item heatmap__legend-item--negative">"Negative"</span>
                <span class="heatmap__legend-item heatmap__legend-item--neutral">"Neutral"</span>
            </footer>
        </section>
    }
}
