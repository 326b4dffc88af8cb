use quizflow::app::FlowController;
use quizflow::config::FlowConfig;
use quizflow::content::ContentPack;
use quizflow::engine::{ExplicitCheck, Quiz};
use quizflow::models::Question;
use quizflow::{error, QuizFlowError};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::Instant;

#[test]
fn test_user_friendly_messages() {
    let msg = error::user_friendly_message(&QuizFlowError::ConfigError("bad delay".into()));
    assert!(msg.contains("bad delay"));
    assert!(msg.contains("quizflow.toml"));

    let msg = error::user_friendly_message(&QuizFlowError::ContentError("no questions".into()));
    assert!(msg.contains("content_path"));

    let msg = error::user_friendly_message(&QuizFlowError::TuiError("no tty".into()));
    assert!(msg.to_lowercase().contains("terminal"));
}

#[test]
fn test_invalid_delay_in_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quizflow.toml");
    fs::write(&path, "feedback_delay = \"5m\"\n").unwrap();

    match FlowConfig::load_from(&path) {
        Err(QuizFlowError::ConfigError(msg)) => assert!(msg.contains("feedback_delay")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_unparseable_delay_in_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quizflow.toml");
    fs::write(&path, "welcome_delay = \"soon\"\n").unwrap();

    assert!(matches!(
        FlowConfig::load_from(&path),
        Err(QuizFlowError::ConfigError(_))
    ));
}

#[test]
fn test_missing_content_pack_reported() {
    let dir = TempDir::new().unwrap();
    let config = FlowConfig::default().with_content_path(dir.path().join("missing.toml"));

    assert!(matches!(config.content(), Err(QuizFlowError::ContentError(_))));
}

#[test]
fn test_content_pack_with_unknown_answer_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pack.json");
    let mut pack = ContentPack::builtin();
    pack.practice[0].correct = "none of these".to_string();
    fs::write(&path, serde_json::to_string(&pack).unwrap()).unwrap();

    let config = FlowConfig::default().with_content_path(path);
    assert!(matches!(config.content(), Err(QuizFlowError::ContentError(_))));
}

#[test]
fn test_empty_quiz_rejected() {
    assert!(matches!(
        Quiz::new(Vec::<Question>::new().into(), ExplicitCheck),
        Err(QuizFlowError::ContentError(_))
    ));

    let mut pack = ContentPack::builtin();
    pack.placement.clear();
    let result = FlowController::new(pack, FlowConfig::default(), Instant::now());
    assert!(matches!(result, Err(QuizFlowError::ContentError(_))));
}

#[test]
fn test_question_without_options_rejected_up_front() {
    let mut pack = ContentPack::builtin();
    pack.placement[0] = Question::new("q", Vec::<String>::new(), "x");

    let result = FlowController::new(pack, FlowConfig::default(), Instant::now());
    assert!(matches!(result, Err(QuizFlowError::ContentError(_))));
}

#[test]
fn test_valid_custom_pack_keeps_stage_and_screen_in_step() {
    let mut pack = ContentPack::builtin();
    pack.placement.truncate(1);
    let now = Instant::now();
    let mut flow = FlowController::new(pack, FlowConfig::default(), now).unwrap();

    flow.tick(now + Duration::from_secs(60)).unwrap();
    assert_eq!(flow.stage(), flow.screen().stage());
}
