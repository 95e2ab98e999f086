use crate::chart::color::ColorAssigner;
use crate::models::Distribution;
use crate::utils::format::truncate_label;
use serde::Serialize;
use serde_json::Value;

/// Default truncation length for chart labels.
pub const CHART_LABEL_LEN: usize = 15;

/// One normalized chart slice, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    /// Truncated display label.
    pub label: String,
    /// Untruncated label: the identity used for tooltips, keys, and color
    /// assignment. Truncation never feeds back into identity.
    pub full_label: String,
    pub value: f64,
    pub color: String,
}

/// Normalize loosely-typed records into chart data.
///
/// Records missing `label_key`, or whose `value_key` is absent or
/// non-numeric, are dropped with a warning; one bad record must not blank
/// the whole chart. An empty input yields an empty output, and the
/// presentation layer owns the empty-state message.
pub fn normalize(
    records: &[Value],
    label_key: &str,
    value_key: &str,
    max_label_len: usize,
    colors: &ColorAssigner,
) -> Vec<ChartDatum> {
    let mut data = Vec::with_capacity(records.len());

    for record in records {
        let label = match record.get(label_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => {
                log::warn!("Dropping chart record without '{label_key}': {record}");
                continue;
            }
            Some(other) => other.to_string(),
        };

        let value = match record.get(value_key).and_then(Value::as_f64) {
            Some(v) => v,
            None => {
                log::warn!("Dropping chart record with non-numeric '{value_key}': {record}");
                continue;
            }
        };

        data.push(datum(&label, value, max_label_len, colors));
    }

    data
}

/// Normalize a category distribution into chart data.
pub fn from_distribution(
    dist: &Distribution,
    max_label_len: usize,
    colors: &ColorAssigner,
) -> Vec<ChartDatum> {
    dist.iter()
        .map(|(category, count)| datum(category, count as f64, max_label_len, colors))
        .collect()
}

fn datum(full_label: &str, value: f64, max_label_len: usize, colors: &ColorAssigner) -> ChartDatum {
    ChartDatum {
        label: truncate_label(full_label, max_label_len),
        // Color comes from the untruncated label: two distinct long labels
        // that truncate identically must still get independent colors.
        color: colors.color_for(full_label).to_string(),
        full_label: full_label.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colors() -> ColorAssigner {
        ColorAssigner::default()
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(&[], "label", "value", 15, &colors()), vec![]);
    }

    #[test]
    fn test_normalize_basic_records() {
        let records = vec![
            json!({"model": "gpt-4", "count": 74}),
            json!({"model": "mixtral", "count": 66}),
        ];

        let data = normalize(&records, "model", "count", 15, &colors());
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].label, "gpt-4");
        assert_eq!(data[0].full_label, "gpt-4");
        assert_eq!(data[0].value, 74.0);
        assert_eq!(data[1].label, "mixtral");
    }

    #[test]
    fn test_normalize_drops_bad_records() {
        let records = vec![
            json!({"model": "gpt-4", "count": 74}),
            json!({"model": "broken"}),
            json!({"model": "also-broken", "count": "many"}),
            json!({"count": 12}),
            json!({"model": "gpt-3.5", "count": 49}),
        ];

        let data = normalize(&records, "model", "count", 15, &colors());
        let labels: Vec<&str> = data.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["gpt-4", "gpt-3.5"]);
    }

    #[test]
    fn test_normalize_truncates_but_keeps_identity() {
        let records = vec![json!({"model": "a-very-long-model-name-indeed", "count": 1})];

        let data = normalize(&records, "model", "count", 15, &colors());
        assert_eq!(data[0].label, "a-very-long-mod...");
        assert_eq!(data[0].full_label, "a-very-long-model-name-indeed");
    }

    #[test]
    fn test_color_computed_from_untruncated_label() {
        // Both labels truncate to the same prefix; their colors must come
        // from the full labels, matching a direct assignment.
        let assigner = colors();
        let records = vec![
            json!({"label": "shared-prefix-abcdef-one", "value": 1}),
            json!({"label": "shared-prefix-abcdef-two", "value": 2}),
        ];

        let data = normalize(&records, "label", "value", 15, &assigner);
        assert_eq!(data[0].label, data[1].label);
        assert_eq!(data[0].color, assigner.color_for("shared-prefix-abcdef-one"));
        assert_eq!(data[1].color, assigner.color_for("shared-prefix-abcdef-two"));
    }

    #[test]
    fn test_normalize_stringifies_non_string_labels() {
        let records = vec![json!({"label": 42, "value": 7})];
        let data = normalize(&records, "label", "value", 15, &colors());
        assert_eq!(data[0].label, "42");
    }

    #[test]
    fn test_from_distribution() {
        let dist: Distribution = [("gpt-4", 74), ("mixtral", 66)].into_iter().collect();
        let data = from_distribution(&dist, 15, &colors());

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].full_label, "gpt-4");
        assert_eq!(data[0].value, 74.0);
        assert_eq!(data[1].full_label, "mixtral");
    }
}
