//! ES5 lowering passes that run after class syntax has been desugared.
//!
//! The only pass today is [`ConvertSuperConstructorCalls`], which turns the
//! `super(...)` calls left behind in lowered constructors into explicit calls
//! on the superclass:
//!
//! ```javascript
//! function Child(a) { super(a); }
//! $jscomp.inherits(Child, Parent);
//! ```
//!
//! becomes
//!
//! ```javascript
//! function Child(a) { Parent.call(this, a); }
//! $jscomp.inherits(Child, Parent);
//! ```

pub mod change;
pub use change::{ChangeTracker, CodeChangeHandler};

pub mod error;
pub use error::TranspileError;

pub mod options;
pub use options::TranspileOptions;

pub mod pass;
pub use pass::{CompilerPass, HotSwapCompilerPass};

pub mod transforms;
pub use transforms::super_constructor_calls::ConvertSuperConstructorCalls;
