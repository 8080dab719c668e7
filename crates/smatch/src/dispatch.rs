//! Entry points: explicit matching and operand-role resolution.

use smatch_value::Value;

use crate::equivalence::equivalent;
use crate::Pattern;

/// Test `subject` against `pattern`.
///
/// # Example
///
/// ```text
/// assert!(matches(&Value::Int(2), any([1, 2, 3])));
/// assert!(matches(&Value::Int(2), 2));
/// ```
pub fn matches(subject: &Value, pattern: impl Into<Pattern>) -> bool {
    pattern.into().test(subject)
}

/// Symmetric smart-match of two operands.
///
/// Whichever operand is a matcher is the rule and the other the subject,
/// with the right operand taking priority. When both are matchers the left
/// one is tested as a value (see [`crate::Matcher::to_value`]). Two plain
/// values fall back to equivalence with `right` as the pattern.
pub fn smartmatch(left: impl Into<Pattern>, right: impl Into<Pattern>) -> bool {
    match (left.into(), right.into()) {
        (Pattern::Matcher(subject), Pattern::Matcher(rule)) => {
            tracing::trace!(
                rule = rule.label(),
                subject = subject.label(),
                "right operand is the rule, left matcher is the subject"
            );
            rule.test(&subject.to_value())
        }
        (Pattern::Value(subject), Pattern::Matcher(rule)) => {
            tracing::trace!(rule = rule.label(), "right operand is the rule");
            rule.test(&subject)
        }
        (Pattern::Matcher(rule), Pattern::Value(subject)) => {
            tracing::trace!(rule = rule.label(), "left operand is the rule");
            rule.test(&subject)
        }
        (Pattern::Value(l), Pattern::Value(r)) => {
            tracing::trace!("no matcher operand, comparing by equivalence");
            equivalent(&r, &l)
        }
    }
}

#[cfg(test)]
mod tests;
