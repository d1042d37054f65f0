//! # lsystem-sketch
//!
//! Lindenmayer-system rewriting and 2D turtle interpretation.
//!
//! A [`RuleTable`] rewrites a [`Sentence`] one generation at a time; a
//! [`TurtleInterpreter`] walks the result and produces [`DrawCommand`] line
//! segments, using a stack of saved cursors for `[`/`]` branches. The
//! [`LSystemSession`] ties both together for an interactive front end, which
//! stays outside this crate and only consumes the produced data.

pub mod drawing;
pub mod error;
pub mod interpreter;
pub mod rules;
pub mod session;
pub mod turtle;

pub use drawing::*;
pub use error::*;
pub use interpreter::*;
pub use rules::*;
pub use session::*;
pub use turtle::*;
