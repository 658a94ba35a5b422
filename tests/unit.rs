//! Unit tests for answer coercion, validation, configuration and error messages.
mod common;
use common::*;
use shinsa::prelude::*;

fn node(answer_type: AnswerType) -> FlowNode {
    FlowNode::from(gateway("q", answer_type, &[]))
}

#[test]
fn test_coerce_boolean_tokens() {
    for yes in ["yes", "Y", " TRUE ", "Yes"] {
        assert_eq!(coerce(AnswerType::Boolean, yes), Some(TypedValue::Bool(true)));
    }
    for no in ["no", "n", "False", " NO"] {
        assert_eq!(coerce(AnswerType::Boolean, no), Some(TypedValue::Bool(false)));
    }
    assert_eq!(coerce(AnswerType::Boolean, "1"), None);
    assert_eq!(coerce(AnswerType::Boolean, "maybe"), None);
}

#[test]
fn test_coerce_numbers() {
    assert_eq!(coerce(AnswerType::Integer, " 42 "), Some(TypedValue::Integer(42)));
    assert_eq!(coerce(AnswerType::Integer, "4.5"), None);
    assert_eq!(coerce(AnswerType::Integer, "forty"), None);
    assert_eq!(coerce(AnswerType::Decimal, "4.5"), Some(TypedValue::Decimal(4.5)));
    assert_eq!(coerce(AnswerType::Decimal, "-3"), Some(TypedValue::Decimal(-3.0)));
    assert_eq!(coerce(AnswerType::Decimal, "NaN"), None);
    assert_eq!(coerce(AnswerType::Decimal, "inf"), None);
}

#[test]
fn test_coerce_dates_keep_original_text() {
    assert_eq!(
        coerce(AnswerType::Date, "1985-03-14"),
        Some(TypedValue::Date("1985-03-14".to_string()))
    );
    assert_eq!(
        coerce(AnswerType::Date, " Mar 14, 1985 "),
        Some(TypedValue::Date("Mar 14, 1985".to_string()))
    );
    assert_eq!(coerce(AnswerType::Date, "yesterday"), None);
}

#[test]
fn test_coerce_text_and_empty_input() {
    assert_eq!(
        coerce(AnswerType::Text, "  hello "),
        Some(TypedValue::Text("hello".to_string()))
    );
    assert_eq!(
        coerce(AnswerType::Select, "Domestic"),
        Some(TypedValue::Text("Domestic".to_string()))
    );
    for answer_type in [
        AnswerType::Boolean,
        AnswerType::Integer,
        AnswerType::Decimal,
        AnswerType::Date,
        AnswerType::Text,
        AnswerType::Select,
    ] {
        assert_eq!(coerce(answer_type, ""), None, "{} accepted empty input", answer_type);
        assert_eq!(coerce(answer_type, " \t"), None);
    }
}

#[test]
fn test_typed_value_numeric_reading() {
    assert_eq!(TypedValue::Integer(7).as_number(), Some(7.0));
    assert_eq!(TypedValue::Text("12.5".into()).as_number(), Some(12.5));
    assert_eq!(TypedValue::Date("2020-01-01".into()).as_number(), None);
    assert_eq!(TypedValue::Bool(true).as_number(), None);
    assert_eq!(TypedValue::Bool(false).as_bool(), Some(false));
    assert_eq!(TypedValue::Text("New York".into()).folded(), "new york");
}

#[test]
fn test_validate_answer_per_type() {
    assert_eq!(
        validate_answer(&node(AnswerType::Boolean), "maybe"),
        Err(AnswerRejection::NotBoolean)
    );
    assert_eq!(
        validate_answer(&node(AnswerType::Integer), "1.5"),
        Err(AnswerRejection::NotInteger)
    );
    assert_eq!(
        validate_answer(&node(AnswerType::Decimal), "lots"),
        Err(AnswerRejection::NotDecimal)
    );
    assert_eq!(
        validate_answer(&node(AnswerType::Date), "soon"),
        Err(AnswerRejection::NotDate)
    );
    assert_eq!(
        validate_answer(&node(AnswerType::Text), "  "),
        Err(AnswerRejection::Empty)
    );
    assert_eq!(
        validate_answer(&node(AnswerType::Integer), "30"),
        Ok(TypedValue::Integer(30))
    );
}

#[test]
fn test_validate_select_options() {
    let mut select = node(AnswerType::Select);
    assert!(validate_answer(&select, "anything").is_ok());

    select.options = vec!["Domestic".to_string(), "International".to_string()];
    assert_eq!(
        validate_answer(&select, " international "),
        Ok(TypedValue::Text("international".to_string()))
    );
    let rejection = validate_answer(&select, "Orbit").unwrap_err();
    assert_eq!(
        rejection.to_string(),
        "please choose one of: Domestic, International"
    );
}

#[test]
fn test_navigator_config_from_json() {
    let config = NavigatorConfig::from_json_str(
        r#"{ "unclear_limit": 3, "agent_keywords": ["Call Me"] }"#,
    )
    .unwrap();
    assert_eq!(config.unclear_limit, 3);
    assert!(config.matches_agent_keyword("please call me tomorrow"));
    assert!(!config.matches_agent_keyword("calling"));

    let defaults = NavigatorConfig::from_json_str("{}").unwrap();
    assert_eq!(defaults, NavigatorConfig::default());
    assert_eq!(defaults.unclear_limit, 2);
    assert!(!defaults.matches_agent_keyword("speak to an agent"));

    assert!(matches!(
        NavigatorConfig::from_json_str("{ \"unclear_limit\": -1 }"),
        Err(FlowError::JsonParseError(_))
    ));
}

#[test]
fn test_blank_keywords_never_match() {
    let config = NavigatorConfig::default().with_agent_keywords(["", "   "]);
    assert!(!config.matches_agent_keyword("anything at all"));
}

#[test]
fn test_shipped_navigator_config_parses() {
    let config =
        NavigatorConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/navigator.json"))
            .unwrap();
    assert!(config.matches_agent_keyword("Can I talk to a person?"));
}

#[test]
fn test_flow_definition_accepts_aliases_and_defaults() {
    let flow = FlowDefinition::from_json_str(
        r#"{
            "root_nodes": ["q1"],
            "nodes": [
                { "id": "q1", "type": "gateway", "question": "Smoke?", "answer_type": "bool",
                  "children": ["q2"] },
                { "id": "q2", "type": "follow-on", "question": "How many?", "answer_type": "int",
                  "trigger": "q1 == yes" }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(flow.nodes[0].answer_type, AnswerType::Boolean);
    assert_eq!(flow.nodes[0].section, "");
    assert_eq!(flow.nodes[1].kind, NodeKind::FollowOn);
    assert_eq!(flow.nodes[1].answer_type, AnswerType::Integer);
    assert!(flow.nodes[1].options.is_empty());
}

#[test]
fn test_flow_loading_errors() {
    assert!(matches!(
        FlowDefinition::from_json_str("[1, 2"),
        Err(FlowError::JsonParseError(_))
    ));
    let err = FlowDefinition::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, FlowError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_trigger_expression_display_and_references() {
    let expr = TriggerExpression::parse("age >= 18 and smoker == 'yes' OR true");
    assert_eq!(expr.groups.len(), 2);
    assert_eq!(expr.referenced_nodes(), vec!["age", "smoker"]);
    assert!(!expr.is_empty());
    assert!(TriggerExpression::parse(" ").is_empty());
}

#[test]
fn test_navigation_error_messages() {
    let err = NavigationError::InvalidTransition {
        operation: "submit_review",
        view: ViewState::Wizard,
    };
    assert_eq!(
        err.to_string(),
        "Operation 'submit_review' is not allowed while the session is in the WIZARD view"
    );
    assert_eq!(ViewState::ThankYou.to_string(), "THANK_YOU");
    assert!(ViewState::AgentExit.is_terminal());
    assert!(!ViewState::Review.is_terminal());
}
