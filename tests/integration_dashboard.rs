use chatlens::analysis::{
    ConversationFilter, analyze_conversations, assemble_breakdown, assemble_overview,
    assemble_token_usage, percentage_of, rank,
};
use chatlens::api::{MetricsSource, MockMetricsSource, fetch_dashboard};
use chatlens::chart::{ColorAssigner, normalize};
use chatlens::output::OutputFormat;
use chatlens::utils::format_percentage;

/// End-to-end: fetch the demo snapshot, assemble the model distribution,
/// and check the documented shares and ranking.
#[tokio::test]
async fn test_model_distribution_end_to_end() {
    let source = MockMetricsSource::new();
    let data = fetch_dashboard(&source).await.unwrap();
    let models = &data.engagement.model_usage_distribution;

    assert_eq!(models.total(), 250);
    assert_eq!(format_percentage(percentage_of(74, 250)), "29.6%");

    let top = rank(models, 2);
    assert_eq!(top[0].key, "gpt-4");
    assert_eq!(top[0].count, 74);
    assert_eq!(top[1].key, "mixtral");
    assert_eq!(top[1].count, 66);

    let breakdown = assemble_breakdown(models, 15, &ColorAssigner::default());
    let table = breakdown.to_table();
    assert!(table.contains("29.6%"));
    assert!(table.contains("gpt-4"));
}

#[tokio::test]
async fn test_overview_assembly_from_mock() {
    let source = MockMetricsSource::new();
    let data = fetch_dashboard(&source).await.unwrap();
    let summary = assemble_overview(&data.platform, &data.engagement);

    assert_eq!(summary.total_users, 10);
    assert_eq!(summary.active_conversations, 127);
    assert_eq!(summary.inactive_conversations, 123);
    assert!((summary.active_share - 127.0 / 250.0).abs() < 1e-12);

    let json = summary.to_json().unwrap();
    assert!(json.contains("\"total_users\": 10"));
}

#[tokio::test]
async fn test_token_usage_assembly_from_mock() {
    let source = MockMetricsSource::new();
    let tokens = source.token_analysis().await.unwrap();
    let view = assemble_token_usage(&tokens).unwrap();

    assert_eq!(view.total_tokens, 695009);
    assert_eq!(view.daily_trend.len(), 1);
    assert_eq!(view.daily_trend[0].value, 695009);

    let table = view.to_table();
    assert!(table.contains("695K"));
    assert!(table.contains("67.1%") || table.contains("0.671"));
}

#[tokio::test]
async fn test_conversation_filtering_from_mock() {
    let source = MockMetricsSource::new();
    let details = source.conversation_details().await.unwrap();

    let all = analyze_conversations(&details, &ConversationFilter::default());
    assert_eq!(all.len(), 2);

    let gpt4_only = analyze_conversations(
        &details,
        &ConversationFilter {
            model_name: Some("gpt-4".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(gpt4_only.len(), 1);
    assert_eq!(gpt4_only[0].guardrails_status, "yes");

    let table = gpt4_only.to_table();
    assert!(table.contains("0ba2ccd8..."));
    assert!(table.contains("Policy violation"));
}

#[test]
fn test_normalize_empty_records() {
    let data = normalize(&[], "label", "value", 15, &ColorAssigner::default());
    assert!(data.is_empty());
}

/// Color assignments must be identical across separately-built assigners
/// with the same palette (determinism across "runs").
#[test]
fn test_color_assignment_stable_across_assigners() {
    let first = ColorAssigner::default();
    let second = ColorAssigner::default();

    for key in ["gpt-4", "gpt-3.5", "lamma", "mixtral", ""] {
        assert_eq!(first.color_for(key), second.color_for(key));
    }
}
