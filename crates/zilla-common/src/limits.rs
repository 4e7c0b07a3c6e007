//! Centralized limits and thresholds for the compiler.

/// Maximum nesting depth for expression translation.
///
/// Each nested expression adds a frame to the translator's call stack; past
/// this depth translation bails out with a diagnostic instead of overflowing.
///
/// ```javascript
/// f(f(f(f(f(f(f(f(f(f(f(f(/* ... */))))))))))));
/// a + (b + (c + (d + /* ... hundreds of levels ... */)));
/// ```
pub const MAX_EXPRESSION_DEPTH: u32 = 500;

/// Maximum expression nesting accepted when building a program tree from an
/// already-parsed JSON value.
///
/// Trees loaded from text hit `serde_json`'s own recursion limit (128 levels)
/// first, so this only bounds values built in memory.
pub const MAX_TREE_LOAD_DEPTH: u32 = 600;

/// Maximum expression nesting written into a statement's line comment.
/// Deeper subexpressions render as `…`.
pub const MAX_RENDER_DEPTH: u32 = 64;

/// Initial capacity of the output buffer, in bytes.
pub const INITIAL_CODE_CAPACITY: usize = 4 * 1024;
