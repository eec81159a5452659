/// Marker counted once per line it appears on.
pub const DEFAULT_TEST_MARKER: &str = "@Test";

/// `class <Child> ... extends <Parent><boundary>` on a single line.
///
/// Identifier runs allow `+` and `-` on top of word characters. The parent
/// must be followed by a non-identifier character, so a declaration that
/// ends the line without a trailing brace is not picked up.
pub const DEFAULT_EXTENDS_PATTERN: &str =
    r"class ([a-zA-Z0-9_+-]*).*extends ([a-zA-Z0-9_+-]*)[^a-zA-Z0-9_+-]";

/// Java and Scala sources.
pub fn default_extensions() -> Vec<String> {
    vec![".java".to_string(), ".scala".to_string()]
}
