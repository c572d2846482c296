use crate::config::Benchmarks;
use crate::core::advisor::Advice;
use crate::models::breakdown::EmissionBreakdown;
use crate::models::meal::MealSlot;
use crate::models::submission::Submission;
use crate::utils::colors::{RESET, color_for_total, colorize_component};
use crate::utils::formatting::{bold, italic};
use crate::utils::kg2readable;

const LABEL_W: usize = 24;

fn component_line(label: &str, kg: f64) -> String {
    let value = colorize_component(&format!("{:>6}", kg2readable(kg)), kg);
    format!("  {:<width$}{} kg CO₂/day\n", label, value, width = LABEL_W)
}

/// Echo of the submitted form.
pub fn render_inputs(s: &Submission) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Level of study: {}\n", s.education.to_db_str()));
    if !s.city.is_empty() {
        out.push_str(&format!("  City:           {}\n", s.city));
    }
    out.push_str(&format!(
        "  Commute:        {} km, {}\n",
        s.distance_km,
        s.transport.label()
    ));

    for slot in MealSlot::ALL {
        let line = match s.meal(slot) {
            None => "skipped".to_string(),
            Some(m) if m.items.is_empty() => "nothing selected".to_string(),
            Some(m) => {
                let items: Vec<&str> = m.items.iter().map(|i| i.label()).collect();
                let organic = if m.organic { " (organic)" } else { "" };
                format!("{}{}", items.join(", "), organic)
            }
        };
        out.push_str(&format!("  {:<15} {}\n", format!("{}:", slot.label()), line));
    }

    out.push_str(&format!(
        "  Devices:        laptop {}h, mobile {}h\n",
        s.laptop_hours, s.mobile_hours
    ));
    match s.ai_hours {
        Some(h) => out.push_str(&format!("  AI usage:       {}h\n", h)),
        None => out.push_str("  AI usage:       none\n"),
    }
    out
}

/// Per-component results and the total, two decimals.
pub fn render_breakdown(b: &EmissionBreakdown, recommended: f64) -> String {
    let mut out = String::new();
    out.push_str(&component_line("Transport emissions:", b.transport));
    out.push_str(&component_line("Food emissions:", b.diet));
    out.push_str(&component_line("Device emissions:", b.device));
    out.push_str(&component_line("AI-related emissions:", b.ai));

    let color = color_for_total(b.total, recommended);
    out.push_str(&format!(
        "  {} {}{}{} kg CO₂\n",
        bold("Total daily footprint:"),
        color,
        kg2readable(b.total),
        RESET
    ));
    out
}

pub fn render_benchmarks(benchmarks: &Benchmarks) -> String {
    format!(
        "  Average student footprint:     {:.1} kg CO₂/day\n  Recommended sustainable level: {:.1} kg CO₂/day\n",
        benchmarks.average, benchmarks.recommended
    )
}

/// Headline followed by one bullet per suggestion.
pub fn render_advice(advice: &Advice) -> String {
    let mut out = format!("{}\n", advice.headline());
    for s in advice.suggestions() {
        out.push_str(&format!("  - {}\n", s.message()));
    }
    out
}

pub fn disclaimer() -> String {
    italic("Data stored locally. Estimates are indicative and for awareness purposes.")
}
