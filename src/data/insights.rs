pub const TITLE: &str = "Business Insights";

pub const FINDINGS: [&str; 6] = [
    "Peak demand occurs during evening hours (5 PM – 9 PM).",
    "Weekend trips are significantly higher than weekdays.",
    "Demand increased steadily from April to September.",
    "Strong daily seasonality observed.",
    "Certain bases handle higher trip volumes.",
    "High pickup concentration in Manhattan area.",
];

pub const RECOMMENDATIONS_TITLE: &str = "Recommendations:";

pub const RECOMMENDATIONS: [&str; 4] = [
    "Increase driver allocation during evening peak hours.",
    "Optimize pricing strategies for weekends.",
    "Improve fleet distribution based on heatmap demand zones.",
    "Use demand forecasting for dynamic driver scheduling.",
];
