//! Per-intent category quotas.
//!
//! Selection walks the rows of an intent's table in order, taking up to
//! `cap` unused habits of the row's category. Weak support swaps in the
//! row's `weak_cap`, which is how a relational slot is made.

use habitus_types::{Category, Intent, SupportLevel};

/// How many habits a quota row may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotaCap {
    Fixed(usize),
    /// The desired count minus a reserved number of slots.
    DesiredMinus(usize),
}

impl QuotaCap {
    pub fn resolve(self, desired: usize) -> usize {
        match self {
            QuotaCap::Fixed(n) => n,
            QuotaCap::DesiredMinus(k) => desired.saturating_sub(k),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotaRule {
    pub category: Category,
    pub cap: QuotaCap,
    pub weak_cap: QuotaCap,
}

impl QuotaRule {
    const fn new(category: Category, cap: QuotaCap, weak_cap: QuotaCap) -> Self {
        Self {
            category,
            cap,
            weak_cap,
        }
    }

    /// Cap for one selection.
    pub fn cap_for(&self, desired: usize, support: SupportLevel) -> usize {
        if support.is_weak() {
            self.weak_cap.resolve(desired)
        } else {
            self.cap.resolve(desired)
        }
    }
}

use QuotaCap::{DesiredMinus, Fixed};

const FAITH_BASED: &[QuotaRule] = &[
    QuotaRule::new(Category::Spiritual, DesiredMinus(0), DesiredMinus(1)),
    QuotaRule::new(Category::Relational, Fixed(0), Fixed(1)),
];

const WELLNESS: &[QuotaRule] = &[
    QuotaRule::new(Category::Physical, Fixed(3), Fixed(3)),
    QuotaRule::new(Category::Mental, Fixed(2), Fixed(2)),
    QuotaRule::new(Category::Relational, Fixed(0), Fixed(1)),
];

const BOTH: &[QuotaRule] = &[
    QuotaRule::new(Category::Spiritual, Fixed(3), Fixed(3)),
    QuotaRule::new(Category::Physical, Fixed(2), Fixed(1)),
    QuotaRule::new(Category::Mental, Fixed(1), Fixed(1)),
    QuotaRule::new(Category::Relational, Fixed(0), Fixed(1)),
];

pub fn quota_table(intent: Intent) -> &'static [QuotaRule] {
    match intent {
        Intent::FaithBased => FAITH_BASED,
        Intent::Wellness => WELLNESS,
        Intent::Both => BOTH,
    }
}

/// Most habits of `category` any selection for `intent` can hold when at
/// most `max_desired` habits are requested. Zero for categories outside the
/// intent's table.
pub fn category_ceiling(intent: Intent, category: Category, max_desired: usize) -> usize {
    quota_table(intent)
        .iter()
        .filter(|rule| rule.category == category)
        .map(|rule| {
            rule.cap
                .resolve(max_desired)
                .max(rule.weak_cap.resolve(max_desired))
        })
        .sum::<usize>()
        .min(max_desired)
}
