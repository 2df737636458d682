//! Predicate-driven call-site collection.
//!
//! A depth-first walk over one file's AST that gathers every call
//! expression matching a predicate, in source order. A matched call's
//! subtree is not descended into: a recognized call cannot itself contain
//! another valid call site at the same semantic level, so the walk collects
//! the first match per branch and does not recurse past it.

use swc_ecma_ast::{CallExpr, Module};
use swc_ecma_visit::{Visit, VisitWith};

struct CallCollector<F> {
    matches: F,
    found: Vec<CallExpr>,
}

impl<F> Visit for CallCollector<F>
where
    F: Fn(&CallExpr) -> bool,
{
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if (self.matches)(node) {
            self.found.push(node.clone());
            return;
        }
        node.visit_children_with(self);
    }
}

/// Collect all top-level matches of `matches` in `module`, in source order.
pub fn collect_calls<F>(module: &Module, matches: F) -> Vec<CallExpr>
where
    F: Fn(&CallExpr) -> bool,
{
    let mut collector = CallCollector {
        matches,
        found: Vec::new(),
    };
    module.visit_with(&mut collector);
    collector.found
}
