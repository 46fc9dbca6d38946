//! The fixed sample menu printed by the `menu` subcommand.

use crate::models::{Burger, Ingredient, Money};

/// Build the three showcase burgers with their standard toppings.
pub fn sample_burgers() -> Vec<(&'static str, Burger)> {
    let mut classic = Burger::classic("Normal", "Res", Money::from_major_minor(10, 0));
    add_all(
        &mut classic,
        vec![
            Ingredient::new("Lettuce", Money::from_cents(50)),
            Ingredient::new("Tomato", Money::from_cents(75)),
            Ingredient::new("Cheese", Money::from_cents(150)),
            Ingredient::new("Bacon", Money::from_cents(200)),
        ],
    );

    let mut healthy = Burger::healthy("Chicken", Money::from_major_minor(12, 0));
    add_all(
        &mut healthy,
        vec![
            Ingredient::new("Avocado", Money::from_cents(200)),
            Ingredient::new("Spinach", Money::from_cents(100)),
        ],
    );

    let premium = Burger::premium("Brioche", "Res Angus", Money::from_major_minor(18, 0));

    vec![
        ("Classic burger", classic),
        ("Healthy burger", healthy),
        ("Premium burger", premium),
    ]
}

/// The sample toppings all fit under their variant's cap.
fn add_all(burger: &mut Burger, toppings: Vec<Ingredient>) {
    for topping in toppings {
        let outcome = burger.try_add(topping);
        debug_assert!(outcome.is_added());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_totals() {
        let burgers = sample_burgers();
        assert_eq!(burgers.len(), 3);

        assert_eq!(burgers[0].1.total_price(), Money::from_cents(1475));
        assert_eq!(burgers[1].1.total_price(), Money::from_cents(1500));
        assert_eq!(burgers[2].1.total_price(), Money::from_cents(2400));
    }

    #[test]
    fn test_sample_healthy_is_on_integral_bun() {
        let burgers = sample_burgers();
        assert_eq!(burgers[1].1.bun(), "Integral");
    }

    #[test]
    fn test_sample_premium_carries_only_its_sides() {
        let burgers = sample_burgers();
        let names: Vec<&str> = burgers[2]
            .1
            .additions()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fries", "Drink"]);
    }
}
