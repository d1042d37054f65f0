//! Interpreter that converts an L-System sentence into line segments.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::render`] with a [`Sentence`] and [`Parameters`].

use crate::drawing::{DrawCommand, RenderSink};
use crate::error::{LSystemError, Result};
use crate::rules::Sentence;
use crate::turtle::{Parameters, TurtleOp, TurtleState};
use glam::Vec2;
use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Where the turtle starts. Default: bottom-centre of a 720x400 viewport.
    pub origin: Vec2,
    /// Starting heading in radians. Default `-PI/2`: straight up with y pointing down.
    pub initial_heading: f32,
    /// Maximum number of nested `[` open at once.
    pub max_stack_depth: usize,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::new(360.0, 400.0),
            initial_heading: -FRAC_PI_2,
            max_stack_depth: 1024,
        }
    }
}

impl TurtleConfig {
    pub fn initial_state(&self) -> TurtleState {
        TurtleState::new(self.origin, self.initial_heading)
    }
}

/// Everything a render produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendering {
    /// Segments in scan order.
    pub commands: Vec<DrawCommand>,
    /// Cursor after the last symbol.
    pub final_state: TurtleState,
    /// Branches still open when the sentence ended.
    pub open_branches: usize,
}

/// Outcome of streaming a render into a [`RenderSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSummary {
    pub segments: usize,
    pub final_state: TurtleState,
    pub open_branches: usize,
}

/// Interprets L-System sentences as 2D turtle drawings.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
}

impl Default for TurtleInterpreter {
    /// Default configuration with the standard symbols registered.
    fn default() -> Self {
        let mut interpreter = Self::new(TurtleConfig::default());
        interpreter.populate_standard_symbols();
        interpreter
    }
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers `F`, `+`, `-`, `[` and `]`. Every other symbol stays ignored.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Draw),
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Looks up the operation bound to `symbol`.
    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Interprets `sentence` and collects the segments it draws.
    ///
    /// Invalid parameters are rejected before any symbol is read. An unmatched
    /// `]` aborts the whole render: no partial command list is returned.
    pub fn render(&self, sentence: &Sentence, params: Parameters) -> Result<Rendering> {
        let mut commands = Vec::new();
        let (final_state, open_branches) =
            self.walk(sentence, params, |command| commands.push(command))?;

        tracing::debug!(
            segments = commands.len(),
            open_branches,
            "rendered {} symbols",
            sentence.len()
        );

        Ok(Rendering {
            commands,
            final_state,
            open_branches,
        })
    }

    /// Streams the segments of `sentence` into `sink` as they are produced.
    ///
    /// On error the sink may already hold the segments drawn before the
    /// offending symbol.
    pub fn render_into<S: RenderSink + ?Sized>(
        &self,
        sentence: &Sentence,
        params: Parameters,
        sink: &mut S,
    ) -> Result<RenderSummary> {
        let mut segments = 0;
        let (final_state, open_branches) = self.walk(sentence, params, |command| {
            sink.line(&command);
            segments += 1;
        })?;

        Ok(RenderSummary {
            segments,
            final_state,
            open_branches,
        })
    }

    /// Single left-to-right pass over the sentence.
    ///
    /// The cursor is the only mutable state; `[`/`]` snapshot and restore it.
    fn walk<F>(
        &self,
        sentence: &Sentence,
        params: Parameters,
        mut emit: F,
    ) -> Result<(TurtleState, usize)>
    where
        F: FnMut(DrawCommand),
    {
        params.validate()?;
        let angle = params.turn_angle_radians();
        let mut turtle = self.config.initial_state();
        let mut stack: Vec<TurtleState> = Vec::new();

        for (index, symbol) in sentence.symbols().enumerate() {
            match self.op(symbol) {
                TurtleOp::Draw => {
                    let start = turtle.advance(params.step_length);
                    emit(DrawCommand::new(start, turtle.position));
                }
                TurtleOp::Move => {
                    turtle.advance(params.step_length);
                }
                TurtleOp::Turn(s) => turtle.turn(angle * s),
                TurtleOp::TurnAround => turtle.turn(PI),
                TurtleOp::Push => {
                    if stack.len() >= self.config.max_stack_depth {
                        tracing::warn!(index, "branch stack overflow, aborting render");
                        return Err(LSystemError::StackOverflow {
                            index,
                            depth: self.config.max_stack_depth,
                        });
                    }
                    stack.push(turtle);
                }
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => {
                        tracing::warn!(index, "unmatched ']', aborting render");
                        return Err(LSystemError::UnmatchedPop { index });
                    }
                },
                TurtleOp::Ignore => {}
            }
        }

        Ok((turtle, stack.len()))
    }
}
