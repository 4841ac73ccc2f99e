/// The environment module defines the host-owned state a formula runs
/// against.
///
/// Variables and registered functions live in plain maps owned by the host.
/// The evaluator borrows them for the duration of an evaluation and never
/// copies them, so every write is visible to the host afterwards.
///
/// # Responsibilities
/// - Declares the variable map and function registry types.
/// - Wraps host closures with their declared arity.
/// - Offers an owned bundle of both maps for convenience.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates statements and expressions,
/// dispatches function calls, and runs the control-flow built-ins over
/// deferred arguments. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind to an `f64`.
/// - Delivers call arguments eagerly or deferred as each built-in declares.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes formula source for the parser.
///
/// The scanner is pulled one token at a time by the parser; it never produces
/// a token list of its own.
///
/// # Responsibilities
/// - Strips whitespace from the raw source.
/// - Recognizes numbers, identifiers, quoted sub-formulas and operators.
/// - Rejects characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over a fixed precedence grammar.
/// Statements that start with `name =` become assignments; everything else is
/// an expression.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with their position.
/// - Parses quoted sub-formulas into nested programs.
pub mod parser;
/// The value module defines what a built-in receives as arguments.
///
/// # Responsibilities
/// - Defines the `LazyValue` sum type of immediate and deferred arguments.
/// - Declares the argument delivery modes.
pub mod value;
