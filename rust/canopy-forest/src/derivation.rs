//! Derivation trees produced by the grammar engine.
//!
//! A tree is either a [`Leaf`], a token matched to a terminal, or an
//! [`Internal`] node tagged with a grammar nonterminal. Trees are walked with
//! [`DerivationNode::walk`], an explicit-stack iterator of enter/leaf/exit
//! steps shared by the annotator and the simplifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::terminal::Terminal;

/// A token leaf: the position of the token in its sentence and the terminal it matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub token: usize,
    pub terminal: Terminal,
}

/// A nonterminal node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internal {
    /// The full nonterminal name, e.g. `Nl_et_nf_kk`.
    pub nonterminal: String,
    /// A grammar-internal helper production.
    #[serde(default)]
    pub interior: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub children: Vec<DerivationNode>,
}

impl Internal {
    /// The nonterminal without its variants: `Nl_et_nf_kk` becomes `Nl`.
    pub fn first(&self) -> &str {
        self.nonterminal
            .split_once('_')
            .map_or(self.nonterminal.as_str(), |(first, _)| first)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationNode {
    Leaf(Leaf),
    Internal(Internal),
}

impl DerivationNode {
    pub fn leaf(token: usize, terminal: impl Into<Terminal>) -> Self {
        DerivationNode::Leaf(Leaf {
            token,
            terminal: terminal.into(),
        })
    }

    pub fn internal(nonterminal: impl Into<String>, children: Vec<DerivationNode>) -> Self {
        DerivationNode::Internal(Internal {
            nonterminal: nonterminal.into(),
            interior: false,
            optional: false,
            children,
        })
    }

    /// A grammar-internal helper node; transparent in the simplified tree.
    pub fn interior(nonterminal: impl Into<String>, children: Vec<DerivationNode>) -> Self {
        DerivationNode::Internal(Internal {
            nonterminal: nonterminal.into(),
            interior: true,
            optional: false,
            children,
        })
    }

    pub fn optional(nonterminal: impl Into<String>, children: Vec<DerivationNode>) -> Self {
        DerivationNode::Internal(Internal {
            nonterminal: nonterminal.into(),
            interior: false,
            optional: true,
            children,
        })
    }

    /// Walk the tree depth first, left to right.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Pending::Node(self)],
        }
    }

    /// Token positions of all leaves, in tree order.
    pub fn token_positions(&self) -> Vec<usize> {
        self.walk()
            .filter_map(|step| match step {
                Step::Leaf(leaf) => Some(leaf.token),
                Step::Enter(_) | Step::Exit(_) => None,
            })
            .collect()
    }
}

/// One step of a tree walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<'a> {
    /// Entering a nonterminal, before any of its children.
    Enter(&'a Internal),
    Leaf(&'a Leaf),
    /// Leaving a nonterminal, after all of its children.
    Exit(&'a Internal),
}

enum Pending<'a> {
    Node(&'a DerivationNode),
    Close(&'a Internal),
}

/// Iterator over the [`Step`]s of a derivation tree.
pub struct Walk<'a> {
    stack: Vec<Pending<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Pending::Node(DerivationNode::Leaf(leaf)) => Some(Step::Leaf(leaf)),
            Pending::Node(DerivationNode::Internal(internal)) => {
                self.stack.push(Pending::Close(internal));
                self.stack
                    .extend(internal.children.iter().rev().map(Pending::Node));
                Some(Step::Enter(internal))
            }
            Pending::Close(internal) => Some(Step::Exit(internal)),
        }
    }
}

/// An indented text dump, one node per line.
impl fmt::Display for DerivationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0usize;
        for step in self.walk() {
            match step {
                Step::Enter(internal) => {
                    write!(f, "{:indent$}{}", "", internal.nonterminal, indent = depth * 2)?;
                    if internal.interior {
                        write!(f, " (interior)")?;
                    }
                    if internal.optional {
                        write!(f, " (optional)")?;
                    }
                    writeln!(f)?;
                    depth += 1;
                }
                Step::Leaf(leaf) => {
                    writeln!(
                        f,
                        "{:indent$}{} @{}",
                        "",
                        leaf.terminal,
                        leaf.token,
                        indent = depth * 2
                    )?;
                }
                Step::Exit(_) => depth = depth.saturating_sub(1),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DerivationNode {
        DerivationNode::internal(
            "S0",
            vec![DerivationNode::internal(
                "Setning_et",
                vec![
                    DerivationNode::leaf(0, "pfn_et_nf"),
                    DerivationNode::interior("SetningSo", vec![DerivationNode::leaf(1, "so_0_et_p1")]),
                    DerivationNode::leaf(2, "grm"),
                ],
            )],
        )
    }

    #[test]
    fn test_walk_order() {
        let tree = sample();
        let steps: Vec<String> = tree
            .walk()
            .map(|step| match step {
                Step::Enter(internal) => format!("+{}", internal.nonterminal),
                Step::Leaf(leaf) => format!("{}", leaf.token),
                Step::Exit(internal) => format!("-{}", internal.first()),
            })
            .collect();
        assert_eq!(
            steps,
            [
                "+S0",
                "+Setning_et",
                "0",
                "+SetningSo",
                "1",
                "-SetningSo",
                "2",
                "-Setning",
                "-S0"
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        assert_eq!(sample().token_positions(), vec![0, 1, 2]);
    }

    #[test]
    fn test_display_dump() {
        assert_eq!(
            sample().to_string(),
            "S0\n  Setning_et\n    pfn_et_nf @0\n    SetningSo (interior)\n      so_0_et_p1 @1\n    grm @2\n"
        );
    }

    #[test]
    fn test_deserializes_from_json() {
        let tree: DerivationNode = serde_json::from_str(
            r#"{"internal":{"nonterminal":"S0","children":[{"leaf":{"token":0,"terminal":"grm"}}]}}"#,
        )
        .unwrap();
        assert_eq!(
            tree,
            DerivationNode::internal("S0", vec![DerivationNode::leaf(0, "grm")])
        );
    }
}
