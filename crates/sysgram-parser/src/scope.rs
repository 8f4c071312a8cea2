//! Package scope tracking by brace depth.

/// An open package and the brace depth accumulated since it was opened.
#[derive(Debug)]
struct Scope {
    package: String,
    depth: i32,
}

/// Stack of open package scopes.
///
/// Each scope counts `{` minus `}` seen while it is on top. A scope closes
/// when its counter drops to zero or below; a negative remainder is carried
/// to the enclosing scope, so one line can close several packages.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    /// Open a new package scope with a zero counter.
    pub(crate) fn push(&mut self, package: impl Into<String>) {
        self.scopes.push(Scope {
            package: package.into(),
            depth: 0,
        });
    }

    /// Name of the innermost open package.
    pub(crate) fn current(&self) -> Option<&str> {
        self.scopes.last().map(|scope| scope.package.as_str())
    }

    /// Brace depth of the innermost open package.
    pub(crate) fn current_depth(&self) -> Option<i32> {
        self.scopes.last().map(|scope| scope.depth)
    }

    /// Number of open scopes.
    pub(crate) fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Apply the brace balance of `text` to the innermost scope.
    pub(crate) fn apply_braces(&mut self, text: &str) {
        self.apply_delta(brace_delta(text));
    }

    /// Add `delta` to the innermost scope and close every exhausted scope.
    pub(crate) fn apply_delta(&mut self, delta: i32) {
        let Some(top) = self.scopes.last_mut() else {
            return;
        };
        top.depth += delta;

        while let Some(top) = self.scopes.last() {
            if top.depth > 0 {
                break;
            }
            let leftover = top.depth;
            self.scopes.pop();
            if leftover < 0 {
                if let Some(outer) = self.scopes.last_mut() {
                    outer.depth += leftover;
                }
            }
        }
    }
}

/// Count of `{` minus count of `}`.
pub(crate) fn brace_delta(text: &str) -> i32 {
    text.chars().fold(0, |delta, ch| match ch {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("part a {"), 1);
        assert_eq!(brace_delta("} }"), -2);
        assert_eq!(brace_delta("{ }"), 0);
    }

    #[test]
    fn test_scope_opens_and_closes() {
        let mut stack = ScopeStack::default();
        stack.push("P");
        stack.apply_delta(1);
        assert_eq!(stack.current(), Some("P"));
        assert_eq!(stack.current_depth(), Some(1));

        stack.apply_delta(-1);
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn test_scope_without_body_closes_immediately() {
        let mut stack = ScopeStack::default();
        stack.push("Empty");
        stack.apply_delta(0);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_deficit_propagates_to_outer_scope() {
        let mut stack = ScopeStack::default();
        stack.push("Outer");
        stack.apply_delta(1);
        stack.push("Inner");
        stack.apply_delta(1);
        assert_eq!(stack.len(), 2);

        stack.apply_braces("}}");
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_partial_close_keeps_outer() {
        let mut stack = ScopeStack::default();
        stack.push("Outer");
        stack.apply_delta(2);
        stack.push("Inner");
        stack.apply_delta(1);

        stack.apply_braces("}}");
        assert_eq!(stack.current(), Some("Outer"));
        assert_eq!(stack.current_depth(), Some(1));
    }

    #[test]
    fn test_closing_braces_without_scope_are_ignored() {
        let mut stack = ScopeStack::default();
        stack.apply_delta(-3);
        assert_eq!(stack.current(), None);
    }
}
