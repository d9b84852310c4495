//! Unit tests for core settei types.
mod common;
use settei::error::{GraphConfigError, TemplateError};
use settei::prelude::*;

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Number(42.0)), "42");
    assert_eq!(format!("{}", Value::Number(2.5)), "2.5");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Text("1:1".to_string())), "1:1");
    assert_eq!(
        format!(
            "{}",
            Value::List(vec![Value::Number(5.0), Value::Number(10.0)])
        ),
        "[5, 10]"
    );
    assert_eq!(format!("{}", Value::Null), "null");
}

#[test]
fn test_context_missing_key_reads_as_null() {
    let context = Context::new().with("workflow", "txt2img");
    assert_eq!(context.get("nonexistent"), &Value::Null);
    assert!(context.get("nonexistent").is_null());
    assert_eq!(context.text("workflow"), Some("txt2img"));
    assert_eq!(context.number("workflow"), None);
    assert!(!context.flag("nonexistent"));
}

#[test]
fn test_node_config_builders() {
    let config = NodeConfig::visible()
        .with_range(1.0, 20.0)
        .with_step(0.5)
        .with_default(7.0)
        .with_options(["a", "b"])
        .with_presets(["512x512"]);

    assert!(config.when);
    assert_eq!(config.min, Some(1.0));
    assert_eq!(config.max, Some(20.0));
    assert_eq!(config.step, Some(0.5));
    assert_eq!(config.default, Some(Value::Number(7.0)));
    assert_eq!(config.options.len(), 2);
    assert_eq!(config.presets, vec!["512x512".to_string()]);

    assert!(!NodeConfig::hidden().when);
}

#[test]
fn test_ecosystem_parse_round_trip() {
    for name in ["sd1", "sdxl", "flux", "kling"] {
        let ecosystem = Ecosystem::parse(name).unwrap();
        assert_eq!(ecosystem.as_str(), name);
    }
    assert!(matches!(
        Ecosystem::parse("midjourney"),
        Err(GraphConfigError::UnknownEcosystem(name)) if name == "midjourney"
    ));
}

#[test]
fn test_workflow_parse_and_classification() {
    assert_eq!(Workflow::parse("txt2img"), Some(Workflow::Txt2Img));
    assert_eq!(Workflow::parse("face_fix"), Some(Workflow::FaceFix));
    assert_eq!(Workflow::parse("bogus"), None);

    assert!(Workflow::Img2Img.is_img2img_like());
    assert!(Workflow::FaceFix.is_img2img_like());
    assert!(Workflow::HiresFix.is_img2img_like());
    assert!(!Workflow::Txt2Img.is_img2img_like());
    assert!(!Workflow::Img2Vid.is_img2img_like());
}

#[test]
fn test_rank_outcome_accessors() {
    let ranked = RankOutcome::Ranked(6.1);
    assert_eq!(ranked.value(), Some(6.1));
    assert!(!ranked.is_disqualified());
    assert_eq!(format!("{}", ranked), "6.1");

    let disqualified = RankOutcome::Disqualified;
    assert_eq!(disqualified.value(), None);
    assert!(disqualified.is_disqualified());
    assert_eq!(format!("{}", disqualified), "disqualified");
}

#[test]
fn test_error_display() {
    let err = GraphConfigError::UnknownDependency {
        node_key: "denoise".to_string(),
        dep_key: "workfow".to_string(),
    };
    assert!(err.to_string().contains("denoise"));
    assert!(err.to_string().contains("workfow"));

    let template_err = TemplateError::EmptyMessages;
    assert!(template_err.to_string().contains("at least one message"));
}
