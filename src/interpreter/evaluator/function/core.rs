use tracing::debug;

use crate::{
    ast::Expr,
    error::{Arity, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::math,
            utils::check_arity,
        },
        value::lazy::{
            ArgumentMode::{self, Deferred, Eager},
            LazyValue,
        },
    },
};

/// Handler for an eager math built-in; receives the evaluated arguments.
type MathFn = fn(&[f64]) -> EvalResult<f64>;

/// The built-ins that take deferred arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// `if(cond, then, else)`
    If,
    /// `for(count, body)`
    For,
    /// `while(cond, body)`
    While,
}

/// How a built-in is carried out.
#[derive(Clone, Copy)]
enum Handler {
    Math(MathFn),
    Control(Control),
}

/// Every argument eager.
const EAGER: &[ArgumentMode] = &[];

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a lowercase name,
/// - an arity specification,
/// - the argument modes, listed per position (positions past the end of the
///   list are eager),
/// - the handler.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                modes: $modes:expr,
                handler: $handler:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            arity:   Arity,
            modes:   &'static [ArgumentMode],
            handler: Handler,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, modes: $modes, handler: $handler },
            )*
        ];
        /// Names of all built-in functions, in lowercase.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "max"     => { arity: Arity::Exactly(2),    modes: EAGER, handler: Handler::Math(math::max) },
    "min"     => { arity: Arity::Exactly(2),    modes: EAGER, handler: Handler::Math(math::min) },
    "abs"     => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::abs) },
    "sqrt"    => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::sqrt) },
    "pow"     => { arity: Arity::Exactly(2),    modes: EAGER, handler: Handler::Math(math::pow) },
    "sin"     => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::sin) },
    "cos"     => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::cos) },
    "tan"     => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::tan) },
    "log"     => { arity: Arity::Between(1, 2), modes: EAGER, handler: Handler::Math(math::log) },
    "exp"     => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::exp) },
    "round"   => { arity: Arity::Between(1, 2), modes: EAGER, handler: Handler::Math(math::round) },
    "ceil"    => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::ceil) },
    "ceiling" => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::ceil) },
    "floor"   => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::floor) },
    "sign"    => { arity: Arity::Exactly(1),    modes: EAGER, handler: Handler::Math(math::sign) },
    "if"      => {
        arity: Arity::Exactly(3),
        modes: &[Eager, Deferred, Deferred],
        handler: Handler::Control(Control::If),
    },
    "for"     => {
        arity: Arity::Exactly(2),
        modes: &[Eager, Deferred],
        handler: Handler::Control(Control::For),
    },
    "while"   => {
        arity: Arity::Exactly(2),
        modes: &[Deferred, Deferred],
        handler: Handler::Control(Control::While),
    },
}

impl BuiltinDef {
    /// Finds the built-in called `name`, ignoring ASCII case.
    fn lookup(name: &str) -> Option<&'static Self> {
        BUILTIN_TABLE.iter().find(|def| def.name.eq_ignore_ascii_case(name))
    }

    fn mode(&self, index: usize) -> ArgumentMode {
        self.modes.get(index).copied().unwrap_or(Eager)
    }
}

/// Returns `true` if `name` is dispatched as a built-in rather than looked up
/// in the host registry.
///
/// # Example
/// ```
/// use formulae::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("SQRT"));
/// assert!(!is_builtin("hypot"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BuiltinDef::lookup(name).is_some()
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// Built-in names are matched case-insensitively and always win over the
    /// registry. Any other name is looked up case-sensitively among the host's
    /// registered functions.
    ///
    /// The argument count is checked before any argument is evaluated.
    ///
    /// # Errors
    /// - `ArityMismatch` if the argument count is not accepted.
    /// - `UnknownFunction` if the name is neither built in nor registered.
    /// - Any error raised while evaluating an argument or running the call.
    pub fn eval_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let Some(def) = BuiltinDef::lookup(name) else {
            return self.call_registered(name, arguments);
        };

        check_arity(name, def.arity, arguments.len())?;

        let mut values = Vec::with_capacity(arguments.len());
        for (index, argument) in arguments.iter().enumerate() {
            values.push(self.eval_argument(argument, def.mode(index))?);
        }

        match def.handler {
            Handler::Math(handler) => {
                let values = values.iter()
                                   .map(|value| value.force(self))
                                   .collect::<EvalResult<Vec<_>>>()?;
                handler(&values)
            },
            Handler::Control(Control::If) => self.eval_if(&values),
            Handler::Control(Control::For) => self.eval_for(&values),
            Handler::Control(Control::While) => self.eval_while(&values),
        }
    }

    /// Evaluates one call argument in the requested mode.
    ///
    /// Eager arguments are evaluated now and wrapped as `Immediate`; deferred
    /// ones are returned untouched.
    pub fn eval_argument<'a>(&mut self,
                             argument: &'a Expr,
                             mode: ArgumentMode)
                             -> EvalResult<LazyValue<'a>> {
        match mode {
            Eager => Ok(LazyValue::Immediate(self.eval(argument)?)),
            Deferred => Ok(LazyValue::Deferred(argument)),
        }
    }

    /// Calls a host-registered function.
    ///
    /// All arguments are evaluated eagerly, left to right, after the arity has
    /// been verified against the registered count.
    fn call_registered(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let functions = self.functions;
        let function =
            functions.get(name)
                     .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_owned() })?;

        check_arity(name, Arity::Exactly(function.arity()), arguments.len())?;

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        debug!(name, ?values, "calling registered function");
        Ok(function.call(&values))
    }
}
