//! End-to-end tests: ecosystem graphs computed over workflow switches,
//! template resolution feeding a judged score into the ranking pass.
mod common;
use common::vars;
use settei::prelude::*;

fn image_context(ecosystem: Ecosystem, workflow: &str) -> Context {
    Context::new()
        .with("ecosystem", ecosystem.as_str())
        .with("workflow", workflow)
        .with("aspect_ratio", "1:1")
}

#[test]
fn test_sd1_uses_the_smaller_aspect_ratio_set() {
    let graph = graph_for(Ecosystem::Sd1).unwrap();
    let form = graph.compute(
        &image_context(Ecosystem::Sd1, "txt2img"),
        &Extras::default(),
        None,
    );

    let sd1_options = &form.get("aspect_ratio").unwrap().options;
    assert_eq!(
        sd1_options,
        &vec![
            Value::Text("1:1".into()),
            Value::Text("2:3".into()),
            Value::Text("3:2".into()),
        ]
    );

    let sdxl = graph_for(Ecosystem::Sdxl).unwrap();
    let sdxl_form = sdxl.compute(
        &image_context(Ecosystem::Sdxl, "txt2img"),
        &Extras::default(),
        None,
    );
    assert!(sdxl_form.get("aspect_ratio").unwrap().options.len() > sd1_options.len());
}

#[test]
fn test_sd1_overrides_keep_base_layout_order() {
    let sd1 = graph_for(Ecosystem::Sd1).unwrap();
    let base_keys: Vec<_> = settei::ecosystems::base_graph().unwrap().keys().map(str::to_string).collect();
    let sd1_keys: Vec<_> = sd1.keys().map(str::to_string).collect();
    assert_eq!(base_keys, sd1_keys);
}

#[test]
fn test_denoise_visibility_follows_workflow_incrementally() {
    let graph = graph_for(Ecosystem::Sdxl).unwrap();
    let extras = Extras::default();

    let context = image_context(Ecosystem::Sdxl, "txt2img");
    let form = graph.compute(&context, &extras, None);
    assert!(!form.get("denoise").unwrap().when);
    assert!(form.get("aspect_ratio").unwrap().when);

    for workflow in ["img2img", "face_fix", "hires_fix"] {
        let context = context.clone().with("workflow", workflow);
        let next = graph.compute(&context, &extras, Some(&form));
        assert!(next.get("denoise").unwrap().when, "workflow {}", workflow);
        // The ratio follows the source image in these workflows.
        assert!(!next.get("aspect_ratio").unwrap().when);
        // Nodes without a workflow dependency are carried forward untouched.
        assert_eq!(next.get("steps"), form.get("steps"));
        assert_eq!(next.get("cfg_scale"), form.get("cfg_scale"));
    }
}

#[test]
fn test_resolution_presets_follow_the_aspect_ratio_field() {
    let graph = graph_for(Ecosystem::Sdxl).unwrap();
    let extras = Extras::default();

    let context = image_context(Ecosystem::Sdxl, "txt2img");
    let form = graph.compute(&context, &extras, None);
    assert_eq!(
        form.get("resolution").unwrap().presets,
        vec!["1024x1024".to_string()]
    );

    let context = context.with("aspect_ratio", "16:9");
    let form = graph.compute(&context, &extras, Some(&form));
    assert_eq!(
        form.get("resolution").unwrap().presets,
        vec!["1024x576".to_string()]
    );

    // SD1 scales the same ratio down to the 512 grid.
    let sd1 = graph_for(Ecosystem::Sd1).unwrap();
    let sd1_form = sd1.compute(
        &image_context(Ecosystem::Sd1, "txt2img").with("aspect_ratio", "3:2"),
        &extras,
        None,
    );
    assert_eq!(
        sd1_form.get("resolution").unwrap().presets,
        vec!["512x320".to_string()]
    );
}

#[test]
fn test_flux_hides_cfg_and_negative_prompt_behind_guidance() {
    let graph = graph_for(Ecosystem::Flux).unwrap();
    let form = graph.compute(
        &image_context(Ecosystem::Flux, "txt2img"),
        &Extras::default(),
        None,
    );

    assert!(!form.get("cfg_scale").unwrap().when);
    assert!(!form.get("negative_prompt").unwrap().when);
    let guidance = form.get("guidance").unwrap();
    assert!(guidance.when);
    assert_eq!(guidance.default, Some(Value::Number(3.5)));
}

#[test]
fn test_kling_video_graph() {
    let graph = graph_for(Ecosystem::Kling).unwrap();
    let extras = Extras::default();

    let context = Context::new()
        .with("ecosystem", "kling")
        .with("workflow", "txt2vid");
    let form = graph.compute(&context, &extras, None);

    assert!(form.get("steps").is_none());
    assert!(form.get("denoise").is_none());
    assert_eq!(
        form.get("duration").unwrap().options,
        vec![Value::Number(5.0), Value::Number(10.0)]
    );
    assert!(!form.get("source_image").unwrap().when);

    let context = context.with("workflow", "img2vid");
    let form = graph.compute(&context, &extras, Some(&form));
    assert!(form.get("source_image").unwrap().when);
    assert!(!form.get("aspect_ratio").unwrap().when);
}

#[test]
fn test_batch_size_cap_comes_from_extras() {
    let graph = graph_for(Ecosystem::Sdxl).unwrap();
    let extras = Extras::default().with("max_batch", 8.0);
    let form = graph.compute(
        &image_context(Ecosystem::Sdxl, "txt2img"),
        &extras,
        None,
    );
    assert_eq!(form.get("batch_size").unwrap().max, Some(8.0));
}

#[test]
fn test_template_to_score_pipeline() {
    let raw = r#"{ "messages": [
        { "role": "system", "content": "Judge entries for {{contest}} on theme, aesthetic, humor, and wittiness, each 0-10." },
        { "role": "user", "content": [
            { "type": "text", "text": "Entry: {{title}}" },
            { "type": "image_url", "image_url": { "url": "{{image}}" } }
        ]}
    ]}"#;

    let template = parse_template(raw).unwrap();
    let resolved = resolve_template(
        &template,
        &vars(&[
            ("contest", "Meme Monday"),
            ("title", "Entry One"),
            ("image", "https://cdn.example/e1.png"),
        ]),
    );
    assert!(resolved.unresolved.is_empty());
    assert_eq!(resolved.messages.len(), 2);

    // The judge (external) returns a four-dimension score; ranking is ours.
    let judged = Score {
        theme: 8.0,
        aesthetic: 6.0,
        humor: 4.0,
        wittiness: 2.0,
    };
    let outcome = calculate_weighted_score(&judged);
    assert!((outcome.value().unwrap() - 6.1).abs() < 1e-9);

    let off_theme = Score {
        theme: 1.0,
        aesthetic: 9.0,
        humor: 9.0,
        wittiness: 9.0,
    };
    assert!(calculate_weighted_score(&off_theme).is_disqualified());
}
