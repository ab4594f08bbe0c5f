use dioxus::prelude::*;

/// A single headline number.
#[component]
pub fn SummaryCard(
    label: String,
    value: String,
    /// Extra class for colouring, e.g. `"warning"`.
    #[props(default)]
    tone: String,
) -> Element {
    rsx! {
        div {
            class: "summary-card {tone}",
            div { class: "summary-value", "{value}" }
            div { class: "summary-label", "{label}" }
        }
    }
}

/// Whole rupees with thousands separators, e.g. `₹120,000`.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}
