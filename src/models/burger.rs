use crate::models::{Ingredient, Money};

/// Most added ingredients a classic burger takes.
const CLASSIC_MAX_ADDITIONS: usize = 4;

/// Most added ingredients a healthy burger takes.
const HEALTHY_MAX_ADDITIONS: usize = 6;

/// Every healthy burger is served on this bun.
const HEALTHY_BUN: &str = "Integral";

/// Sides every premium burger ships with, in cents.
const PREMIUM_SIDES: [(&str, i64); 2] = [("Fries", 350), ("Drink", 250)];

/// The three burger variants on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Healthy,
    Premium,
}

impl Variant {
    /// Cap on added ingredients for variants that accept them; `None` for
    /// the locked premium variant.
    pub fn max_additions(self) -> Option<usize> {
        match self {
            Variant::Classic => Some(CLASSIC_MAX_ADDITIONS),
            Variant::Healthy => Some(HEALTHY_MAX_ADDITIONS),
            Variant::Premium => None,
        }
    }

    /// Whether the variant refuses added ingredients outright.
    pub fn locked(self) -> bool {
        matches!(self, Variant::Premium)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Healthy => "Healthy",
            Variant::Premium => "Premium",
        }
    }
}

/// Outcome of one add attempt. A rejection is a normal outcome, not an
/// error; the interface layer decides what notice to print for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The ingredient was appended.
    Added,
    /// The variant's cap was already reached.
    RejectedFull,
    /// The variant takes no added ingredients at all.
    RejectedLocked,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// A priced burger: bun, protein and base price fixed at construction, plus
/// an ordered list of added ingredients that only grows through the
/// policy-gated [`Burger::try_add`].
#[derive(Debug, Clone)]
pub struct Burger {
    variant: Variant,
    bun: String,
    protein: String,
    base_price: Money,
    additions: Vec<Ingredient>,
}

impl Burger {
    fn new(
        variant: Variant,
        bun: impl Into<String>,
        protein: impl Into<String>,
        base_price: Money,
    ) -> Self {
        Self {
            variant,
            bun: bun.into(),
            protein: protein.into(),
            base_price,
            additions: Vec::new(),
        }
    }

    /// A classic burger: any bun, up to four added ingredients.
    pub fn classic(
        bun: impl Into<String>,
        protein: impl Into<String>,
        base_price: Money,
    ) -> Self {
        Self::new(Variant::Classic, bun, protein, base_price)
    }

    /// A healthy burger: always on the integral bun, up to six added
    /// ingredients. No bun parameter on purpose.
    pub fn healthy(protein: impl Into<String>, base_price: Money) -> Self {
        Self::new(Variant::Healthy, HEALTHY_BUN, protein, base_price)
    }

    /// A premium burger: ships with fries and a drink, takes nothing else.
    ///
    /// The sides are appended directly, bypassing the gate that locks this
    /// variant against user additions.
    pub fn premium(
        bun: impl Into<String>,
        protein: impl Into<String>,
        base_price: Money,
    ) -> Self {
        let mut burger = Self::new(Variant::Premium, bun, protein, base_price);
        for (name, cents) in PREMIUM_SIDES {
            burger
                .additions
                .push(Ingredient::new(name, Money::from_cents(cents)));
        }
        burger
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn bun(&self) -> &str {
        &self.bun
    }

    pub fn protein(&self) -> &str {
        &self.protein
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Added ingredients in insertion order.
    pub fn additions(&self) -> &[Ingredient] {
        &self.additions
    }

    /// Try to add an ingredient, applying the variant's gate.
    ///
    /// On rejection the burger is left untouched.
    pub fn try_add(&mut self, ingredient: Ingredient) -> AddOutcome {
        if self.variant.locked() {
            return AddOutcome::RejectedLocked;
        }
        if let Some(max) = self.variant.max_additions() {
            if self.additions.len() >= max {
                return AddOutcome::RejectedFull;
            }
        }

        self.additions.push(ingredient);
        AddOutcome::Added
    }

    /// Exact sum of the added ingredients' prices.
    pub fn additions_subtotal(&self) -> Money {
        self.additions.iter().map(|i| i.price).sum()
    }

    /// Base price plus all added ingredients.
    pub fn total_price(&self) -> Money {
        self.base_price + self.additions_subtotal()
    }

    /// Multi-line report: header, base price, added ingredients with their
    /// subtotal (omitted entirely when there are none), total. No trailing
    /// newline.
    pub fn render_details(&self) -> String {
        let mut details = format!("Burger on {} bun with {}\n", self.bun, self.protein);
        details.push_str(&format!("Base price: {}\n", self.base_price));

        if !self.additions.is_empty() {
            details.push_str("Added ingredients:\n");
            for ingredient in &self.additions {
                details.push_str(&format!("- {}: {}\n", ingredient.name, ingredient.price));
            }
            details.push_str(&format!(
                "Additions subtotal: {}\n",
                self.additions_subtotal()
            ));
        }

        details.push_str(&format!("Total price: {}", self.total_price()));
        details
    }
}
