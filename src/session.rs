//! The driver: owns the current generation and its drawing parameters.
//!
//! A presentation layer holds one [`LSystemSession`], calls
//! [`step_generation`](LSystemSession::step_generation) or
//! [`reset`](LSystemSession::reset) in response to user actions, and renders
//! the current sentence after each transition.

use crate::drawing::RenderSink;
use crate::error::{LSystemError, Result};
use crate::interpreter::{RenderSummary, Rendering, TurtleInterpreter};
use crate::rules::{self, LSystemDefinition, RuleTable, Sentence};
use crate::turtle::{self, Parameters};

/// Limits applied by the session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Largest sentence (in symbols) a generation step may produce.
    pub max_sentence_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sentence_len: 1 << 22,
        }
    }
}

/// Current sentence, generation count and step length of one L-System.
#[derive(Clone, Debug)]
pub struct LSystemSession {
    definition: LSystemDefinition,
    initial_params: Parameters,
    sentence: Sentence,
    params: Parameters,
    config: SessionConfig,
}

impl LSystemSession {
    pub fn new(definition: LSystemDefinition, initial_params: Parameters) -> Result<Self> {
        Self::with_config(definition, initial_params, SessionConfig::default())
    }

    pub fn with_config(
        definition: LSystemDefinition,
        initial_params: Parameters,
        config: SessionConfig,
    ) -> Result<Self> {
        initial_params.validate()?;
        let initial_params = Parameters {
            generation_count: 0,
            ..initial_params
        };
        Ok(Self {
            sentence: definition.axiom.clone(),
            definition,
            initial_params,
            params: initial_params,
            config,
        })
    }

    /// Starts over from `axiom` with new rules and parameters.
    ///
    /// Invalid parameters are rejected and leave the session untouched.
    pub fn reset(
        &mut self,
        axiom: impl Into<Sentence>,
        rules: RuleTable,
        initial_params: Parameters,
    ) -> Result<()> {
        initial_params.validate()?;
        self.definition = LSystemDefinition::new(axiom, rules);
        self.initial_params = Parameters {
            generation_count: 0,
            ..initial_params
        };
        self.restart();
        Ok(())
    }

    /// Returns to generation 0 of the current definition.
    pub fn restart(&mut self) {
        self.sentence = self.definition.axiom.clone();
        self.params = self.initial_params;
        tracing::debug!(axiom = %self.sentence, "session reset");
    }

    /// Rewrites the sentence once and halves the step length.
    ///
    /// If the next sentence would exceed [`SessionConfig::max_sentence_len`],
    /// nothing changes and [`LSystemError::GenerationLimit`] is returned.
    pub fn step_generation(&mut self) -> Result<&Sentence> {
        let len = rules::generated_len(&self.sentence, &self.definition.rules);
        if len > self.config.max_sentence_len {
            return Err(LSystemError::GenerationLimit {
                len,
                max: self.config.max_sentence_len,
            });
        }

        self.sentence = rules::generate(&self.sentence, &self.definition.rules);
        self.params.step_length *= 0.5;
        self.params.generation_count += 1;

        tracing::debug!(
            generation = self.params.generation_count,
            symbols = len,
            step_length = self.params.step_length,
            "generation step"
        );
        Ok(&self.sentence)
    }

    /// Changes the turn angle (degrees) used by later renders.
    pub fn set_angle(&mut self, angle: f32) -> Result<()> {
        turtle::validate_angle(angle)?;
        self.params.turn_angle = angle;
        Ok(())
    }

    /// Changes the step length used by the next render.
    ///
    /// Later generations keep halving from this value.
    pub fn set_length(&mut self, length: f32) -> Result<()> {
        turtle::validate_step_length(length)?;
        self.params.step_length = length;
        Ok(())
    }

    /// Renders the current sentence with the current parameters.
    pub fn render(&self, interpreter: &TurtleInterpreter) -> Result<Rendering> {
        interpreter.render(&self.sentence, self.params)
    }

    /// Clears `sink` and draws the current sentence into it.
    ///
    /// If the sentence is malformed the sink is cleared again, so it never
    /// shows half a drawing.
    pub fn render_to<S: RenderSink + ?Sized>(
        &self,
        interpreter: &TurtleInterpreter,
        sink: &mut S,
    ) -> Result<RenderSummary> {
        sink.clear();
        interpreter
            .render_into(&self.sentence, self.params, sink)
            .inspect_err(|_| sink.clear())
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn parameters(&self) -> Parameters {
        self.params
    }

    pub fn generation(&self) -> u32 {
        self.params.generation_count
    }

    pub fn definition(&self) -> &LSystemDefinition {
        &self.definition
    }
}
