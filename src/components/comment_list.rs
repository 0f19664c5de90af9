//! Stakeholder comment list with sentiment badges and score chips.

#[cfg(test)]
#[path = "comment_list_test.rs"]
mod comment_list_test;

use leptos::prelude::*;

use crate::net::types::CommentRecord;
use crate::util::sentiment::{Sentiment, classify_label};

/// Badge styling for a free-form sentiment label.
fn sentiment_badge_class(label: Option<&str>) -> &'static str {
    match classify_label(label) {
        Some(Sentiment::Negative) => "comment-badge comment-badge--negative",
        Some(Sentiment::Positive) => "comment-badge comment-badge--positive",
        Some(Sentiment::Neutral) => "comment-badge comment-badge--neutral",
        None => "comment-badge comment-badge--unknown",
    }
}

/// Chip styling for a numeric-as-string sentiment score: below -0.2 reads
/// negative, above 0.2 positive, in between neutral, unparseable unknown.
fn score_chip_class(score: Option<&str>) -> &'static str {
    let Some(numeric) = score.and_then(|s| s.trim().parse::<f64>().ok()) else {
        return "comment-score comment-score--unknown";
    };
    if numeric <= -0.2 {
        "comment-score comment-score--negative"
    } else if numeric >= 0.2 {
        "comment-score comment-score--positive"
    } else {
        "comment-score comment-score--neutral"
    }
}

fn badge_text(label: Option<&str>) -> String {
    label
        .filter(|l| !l.trim().is_empty())
        .map_or_else(|| "Sentiment unknown".to_owned(), str::to_owned)
}

/// Rendered list of one draft's comments, newest-first per backend order.
#[component]
pub fn CommentList(comments: Vec<CommentRecord>) -> impl IntoView {
    view! {
        <ul class="comment-list">
            {comments
                .into_iter()
                .map(|record| {
                    let badge_class = sentiment_badge_class(record.sentiment_analysis.as_deref());
                    let badge = badge_text(record.sentiment_analysis.as_deref());
                    let chip_class = score_chip_class(record.sentiment_score.as_deref());
                    let score = record.sentiment_score.clone();
                    let keywords = record.sentiment_keywords.clone();
                    view! {
                        <li class="comment-list__item">
                            <p class="comment-list__text">{record.comment.clone()}</p>
                            <div class="comment-list__meta">
                                <span class=badge_class>{badge}</span>
                                {score
                                    .map(|value| {
                                        view! {
                                            <span class=chip_class>{format!("Score: {value}")}</span>
                                        }
                                    })}
                                {keywords
                                    .map(|value| {
                                        view! {
                                            <span class="comment-list__keywords">
                                                {format!("Keywords: {value}")}
                                            </span>
                                        }
                                    })}
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
