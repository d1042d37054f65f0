// tests/session.rs
use lsystem_sketch::{
    DrawCommand, LSystemDefinition, LSystemError, LSystemSession, Parameters, RuleTable,
    SessionConfig, TurtleInterpreter,
};

fn plant_session() -> LSystemSession {
    LSystemSession::new(LSystemDefinition::fractal_plant(), Parameters::default()).unwrap()
}

#[test]
fn test_step_halves_length_and_counts() {
    let mut session = plant_session();
    assert_eq!(session.generation(), 0);
    assert_eq!(session.sentence().as_str(), "F");

    for n in 1..=4u32 {
        session.step_generation().unwrap();
        assert_eq!(session.generation(), n);
        assert_eq!(
            session.parameters().step_length,
            200.0 * 0.5f32.powi(n as i32)
        );
    }
}

#[test]
fn test_step_returns_new_sentence() {
    let mut session = plant_session();
    let next = session.step_generation().unwrap().clone();
    assert_eq!(next.as_str(), "FF+[+F-F-F]-[-F+F+F]");
    assert_eq!(session.sentence(), &next);
}

#[test]
fn test_reset_and_restart() {
    let mut session = plant_session();
    session.step_generation().unwrap();
    session.step_generation().unwrap();

    session.restart();
    assert_eq!(session.generation(), 0);
    assert_eq!(session.sentence().as_str(), "F");
    assert_eq!(session.parameters().step_length, 200.0);

    let rules = RuleTable::from_pairs([("X", "F[+X]F[-X]+X"), ("F", "FF")]).unwrap();
    session.reset("X", rules, Parameters::new(100.0, 20.0)).unwrap();
    assert_eq!(session.sentence().as_str(), "X");
    assert_eq!(session.parameters(), Parameters::new(100.0, 20.0));
    session.step_generation().unwrap();
    assert_eq!(session.sentence().as_str(), "F[+X]F[-X]+X");
}

#[test]
fn test_invalid_parameters_rejected() {
    let err = LSystemSession::new(LSystemDefinition::default(), Parameters::new(0.0, 30.0))
        .unwrap_err();
    assert!(err.is_configuration());

    let mut session = plant_session();
    assert_eq!(
        session.set_length(-1.0),
        Err(LSystemError::InvalidStepLength(-1.0))
    );
    assert!(session.set_angle(f32::NAN).is_err());
    assert!(
        session
            .reset("F", RuleTable::new(), Parameters::new(f32::INFINITY, 30.0))
            .is_err()
    );
    // Failed calls leave state alone.
    assert_eq!(session.parameters(), Parameters::default());
}

#[test]
fn test_setters_keep_sentence() {
    let mut session = plant_session();
    session.step_generation().unwrap();
    let before = session.sentence().clone();

    session.set_angle(-45.0).unwrap();
    session.set_length(64.0).unwrap();
    assert_eq!(session.sentence(), &before);
    assert_eq!(session.generation(), 1);
    assert_eq!(session.parameters().turn_angle, -45.0);

    let interpreter = TurtleInterpreter::default();
    let rendering = session.render(&interpreter).unwrap();
    assert!((rendering.commands[0].length() - 64.0).abs() < 1e-3);

    session.step_generation().unwrap();
    assert_eq!(session.parameters().step_length, 32.0);
}

#[test]
fn test_generation_limit_keeps_state() {
    let mut session = LSystemSession::with_config(
        LSystemDefinition::fractal_plant(),
        Parameters::default(),
        SessionConfig {
            max_sentence_len: 100,
        },
    )
    .unwrap();

    session.step_generation().unwrap(); // 20 symbols
    let err = session.step_generation().unwrap_err();
    assert!(matches!(err, LSystemError::GenerationLimit { max: 100, .. }));
    assert_eq!(session.generation(), 1);
    assert_eq!(session.parameters().step_length, 100.0);
}

#[test]
fn test_render_to_clears_sink() {
    let interpreter = TurtleInterpreter::default();
    let mut sink: Vec<DrawCommand> = Vec::new();

    let mut session = plant_session();
    session.step_generation().unwrap();
    let summary = session.render_to(&interpreter, &mut sink).unwrap();
    assert_eq!(summary.segments, 8);
    assert_eq!(sink.len(), 8);

    // A malformed rule produces an unmatched ']'; the sink ends up empty.
    let rules = RuleTable::from_pairs([("F", "F]F")]).unwrap();
    session.reset("F", rules, Parameters::default()).unwrap();
    session.step_generation().unwrap();
    let err = session.render_to(&interpreter, &mut sink).unwrap_err();
    assert_eq!(err, LSystemError::UnmatchedPop { index: 1 });
    assert!(sink.is_empty());
}
