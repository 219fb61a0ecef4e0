//! The rule catalog.
//!
//! Every rule is listed once in [`RULES`]. Adding a rule requires only a new
//! entry there. The kind index that the pipelines dispatch through is
//! derived from the catalog on first use.

use std::fmt;
use std::sync::OnceLock;

use kerf_ir::{SyntaxKind, SyntaxNode};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::context::Context;
use crate::rule::{FormatRule, LintRule, RuleContext, VisitAction};
use crate::rules::{
    AlwaysUseLowerCamelCase, DoNotUseSemicolons, NeverForceUnwrap,
    NeverUseImplicitlyUnwrappedOptionals, NoLeadingUnderscores, NoParensAroundConditions,
    ReturnVoidInsteadOfEmptyTuple, TypeNamesShouldBeCapitalized,
};

pub type LintFn = fn(&SyntaxNode, &mut RuleContext<'_, '_>) -> VisitAction;
pub type RewriteFn = fn(SyntaxNode, &Context<'_>) -> SyntaxNode;

/// A catalog entry: a rule's identity plus its entry points.
#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub opt_in: bool,
    pub kinds: &'static [SyntaxKind],
    pub lint: LintFn,
    /// Present for format rules only.
    pub rewrite: Option<RewriteFn>,
}

impl RuleDescriptor {
    pub const fn lint<R: LintRule>() -> Self {
        RuleDescriptor {
            name: R::NAME,
            opt_in: R::OPT_IN,
            kinds: R::KINDS,
            lint: R::visit,
            rewrite: None,
        }
    }

    pub const fn format<R: FormatRule>() -> Self {
        RuleDescriptor {
            name: R::NAME,
            opt_in: R::OPT_IN,
            kinds: R::KINDS,
            lint: R::visit,
            rewrite: Some(R::rewrite),
        }
    }

    #[inline]
    pub fn is_interested_in(&self, kind: SyntaxKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("name", &self.name)
            .field("opt_in", &self.opt_in)
            .field("kinds", &self.kinds)
            .field("format", &self.rewrite.is_some())
            .finish()
    }
}

/// All rules, in dispatch order.
pub static RULES: &[RuleDescriptor] = &[
    RuleDescriptor::lint::<AlwaysUseLowerCamelCase>(),
    RuleDescriptor::format::<DoNotUseSemicolons>(),
    RuleDescriptor::lint::<NeverForceUnwrap>(),
    RuleDescriptor::lint::<NeverUseImplicitlyUnwrappedOptionals>(),
    RuleDescriptor::lint::<NoLeadingUnderscores>(),
    RuleDescriptor::format::<NoParensAroundConditions>(),
    RuleDescriptor::format::<ReturnVoidInsteadOfEmptyTuple>(),
    RuleDescriptor::lint::<TypeNamesShouldBeCapitalized>(),
];

/// Node kind to the positions in [`RULES`] of the rules interested in it.
pub struct RuleIndex {
    by_kind: FxHashMap<SyntaxKind, SmallVec<[usize; 4]>>,
}

impl RuleIndex {
    pub fn new(rules: &[RuleDescriptor]) -> Self {
        let mut by_kind: FxHashMap<SyntaxKind, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (index, rule) in rules.iter().enumerate() {
            for &kind in rule.kinds {
                let entry = by_kind.entry(kind).or_default();
                if !entry.contains(&index) {
                    entry.push(index);
                }
            }
        }
        RuleIndex { by_kind }
    }

    /// Catalog positions of rules interested in `kind`, in catalog order.
    #[inline]
    pub fn rules_for(&self, kind: SyntaxKind) -> &[usize] {
        self.by_kind.get(&kind).map(SmallVec::as_slice).unwrap_or(&[])
    }
}

static GLOBAL_RULE_INDEX: OnceLock<RuleIndex> = OnceLock::new();

/// The index over [`RULES`], built on first use.
pub fn rule_index() -> &'static RuleIndex {
    GLOBAL_RULE_INDEX.get_or_init(|| RuleIndex::new(RULES))
}

/// Look a rule up by name.
pub fn find_rule(name: &str) -> Option<&'static RuleDescriptor> {
    RULES.iter().find(|rule| rule.name == name)
}

#[cfg(test)]
mod tests;
