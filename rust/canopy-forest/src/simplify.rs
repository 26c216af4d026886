//! Tree simplification: fold a derivation tree into a reduced constituency tree.
//!
//! The walk keeps three explicit stacks:
//!
//! - `output`: child lists under construction; the bottom list collects the root.
//! - `pushed`: one flag per entered nonterminal, set when it opened a phrase.
//! - `scope`: the categories of the open phrases, above a `None` sentinel.
//!
//! `output` and `scope` always have the same height.
//!
//! When a phrase closes with a single phrase child, one of two rewrites may
//! apply. *Collapse-child*: the child has the parent's category, or the
//! category the parent overrides; the child's children move up. *Replace-parent*:
//! the child overrides the parent's category; the child takes the parent's place.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::canonical::{CanonicalToken, canonicalize};
use crate::category::Category;
use crate::derivation::{DerivationNode, Internal, Leaf, Step};
use crate::descriptor::describe;
use crate::error::ForestError;
use crate::meaning::MeaningResolver;
use crate::token::Token;

/// A node of the simplified tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimplifiedNode {
    Phrase(Phrase),
    Terminal(CanonicalToken),
}

impl SimplifiedNode {
    /// The terminal tokens under this node, left to right.
    pub fn terminals(&self) -> Vec<&CanonicalToken> {
        let mut terminals = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                SimplifiedNode::Terminal(token) => terminals.push(token),
                SimplifiedNode::Phrase(phrase) => stack.extend(phrase.children.iter().rev()),
            }
        }
        terminals
    }
}

/// A phrase of the simplified tree, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub category: Category,
    pub children: Vec<SimplifiedNode>,
}

impl Phrase {
    pub fn new(category: Category, children: Vec<SimplifiedNode>) -> Self {
        Self { category, children }
    }

    pub fn name(&self) -> &'static str {
        self.category.display_name()
    }
}

impl Serialize for Phrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Phrase", 4)?;
        state.serialize_field("k", "NONTERMINAL")?;
        state.serialize_field("n", self.name())?;
        state.serialize_field("i", &self.category)?;
        state.serialize_field("p", &self.children)?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rewrite {
    CollapseChild,
    ReplaceParent,
}

impl Rewrite {
    fn select(parent: Category, child: Category) -> Option<Self> {
        if child == parent || parent.overrides() == Some(child) {
            Some(Rewrite::CollapseChild)
        } else if child.overrides() == Some(parent) {
            Some(Rewrite::ReplaceParent)
        } else {
            None
        }
    }
}

/// The state of one simplification walk.
pub struct Simplifier<'a, R: ?Sized> {
    tokens: &'a [Token],
    resolver: &'a R,
    output: Vec<Vec<SimplifiedNode>>,
    pushed: Vec<bool>,
    scope: Vec<Option<Category>>,
}

impl<'a, R> Simplifier<'a, R>
where
    R: MeaningResolver + ?Sized,
{
    pub fn new(tokens: &'a [Token], resolver: &'a R) -> Self {
        Self {
            tokens,
            resolver,
            output: vec![Vec::new()],
            pushed: Vec::new(),
            scope: vec![None],
        }
    }

    /// The innermost open phrase category, if any.
    pub fn current_scope(&self) -> Option<Category> {
        self.scope.last().copied().flatten()
    }

    /// Number of open phrases.
    pub fn depth(&self) -> usize {
        self.scope.len() - 1
    }

    fn opens(&self, node: &Internal) -> Option<Category> {
        if node.interior || (node.optional && node.children.is_empty()) {
            return None;
        }
        let category = Category::reduce(node.first())?;
        if category.subject_to().is_some() && category.subject_to() == self.current_scope() {
            tracing::trace!(%category, nonterminal = %node.nonterminal, "already in scope");
            return None;
        }
        Some(category)
    }

    pub fn enter(&mut self, node: &Internal) {
        match self.opens(node) {
            Some(category) => {
                self.output.push(Vec::new());
                self.scope.push(Some(category));
                self.pushed.push(true);
            }
            None => self.pushed.push(false),
        }
    }

    pub fn leaf(&mut self, leaf: &Leaf) -> Result<(), ForestError> {
        let token = self.tokens.get(leaf.token).ok_or(ForestError::TokenOutOfRange {
            index: leaf.token,
            len: self.tokens.len(),
        })?;
        let meaning = self.resolver.resolve(token, &leaf.terminal).into_meaning();
        let (descriptor, _) = describe(token, Some(&leaf.terminal), meaning.as_ref())?;
        self.top()?.push(SimplifiedNode::Terminal(canonicalize(&descriptor)));
        Ok(())
    }

    pub fn exit(&mut self) -> Result<(), ForestError> {
        let pushed = self
            .pushed
            .pop()
            .ok_or_else(|| ForestError::Unbalanced("exit without enter".into()))?;
        if !pushed {
            return Ok(());
        }
        let (Some(children), Some(Some(category))) = (self.output.pop(), self.scope.pop()) else {
            return Err(ForestError::Unbalanced("no open phrase to close".into()));
        };
        if children.is_empty() {
            tracing::trace!(%category, "dropping empty phrase");
            return Ok(());
        }
        let phrase = fold(category, children);
        self.top()?.push(SimplifiedNode::Phrase(phrase));
        Ok(())
    }

    pub fn finish(mut self) -> Result<SimplifiedNode, ForestError> {
        if !self.pushed.is_empty() || self.output.len() != 1 {
            return Err(ForestError::Unbalanced(format!(
                "{} nonterminals still open",
                self.pushed.len()
            )));
        }
        let mut roots = self.output.pop().unwrap_or_default();
        match roots.len() {
            0 => Err(ForestError::MissingRoot),
            1 => roots.pop().ok_or(ForestError::MissingRoot),
            count => Err(ForestError::MultipleRoots { count }),
        }
    }

    fn top(&mut self) -> Result<&mut Vec<SimplifiedNode>, ForestError> {
        self.output
            .last_mut()
            .ok_or_else(|| ForestError::Unbalanced("output stack is empty".into()))
    }
}

fn fold(category: Category, mut children: Vec<SimplifiedNode>) -> Phrase {
    if children.len() != 1 {
        return Phrase::new(category, children);
    }
    match children.pop() {
        Some(SimplifiedNode::Phrase(child)) => match Rewrite::select(category, child.category) {
            Some(Rewrite::CollapseChild) => {
                tracing::trace!(%category, child = %child.category, "collapsing child");
                Phrase::new(category, child.children)
            }
            Some(Rewrite::ReplaceParent) => {
                tracing::trace!(%category, child = %child.category, "child replaces parent");
                child
            }
            None => Phrase::new(category, vec![SimplifiedNode::Phrase(child)]),
        },
        Some(terminal) => Phrase::new(category, vec![terminal]),
        None => Phrase::new(category, children),
    }
}

/// Simplify the derivation tree of a sentence.
///
/// Returns `Ok(None)` when there is no tree (the parse failed).
pub fn simplify<R>(
    tokens: &[Token],
    tree: Option<&DerivationNode>,
    resolver: &R,
) -> Result<Option<SimplifiedNode>, ForestError>
where
    R: MeaningResolver + ?Sized,
{
    let Some(tree) = tree else {
        return Ok(None);
    };
    let mut simplifier = Simplifier::new(tokens, resolver);
    for step in tree.walk() {
        match step {
            Step::Enter(node) => simplifier.enter(node),
            Step::Leaf(leaf) => simplifier.leaf(leaf)?,
            Step::Exit(_) => simplifier.exit()?,
        }
    }
    simplifier.finish().map(Some)
}
