use burger_maker_rs::models::{Burger, Ingredient, Money};

fn topping(name: &str, cents: i64) -> Ingredient {
    Ingredient::new(name, Money::from_cents(cents))
}

#[test]
fn test_classic_report_full_text() {
    let mut burger = Burger::classic("Normal", "Res", Money::from_major_minor(10, 0));
    burger.try_add(topping("Lettuce", 50));
    burger.try_add(topping("Tomato", 75));
    burger.try_add(topping("Cheese", 150));
    burger.try_add(topping("Bacon", 200));

    let expected = "Burger on Normal bun with Res\n\
                    Base price: $10.00\n\
                    Added ingredients:\n\
                    - Lettuce: $0.50\n\
                    - Tomato: $0.75\n\
                    - Cheese: $1.50\n\
                    - Bacon: $2.00\n\
                    Additions subtotal: $4.75\n\
                    Total price: $14.75";

    assert_eq!(burger.render_details(), expected);
}

#[test]
fn test_report_without_additions_omits_section() {
    let burger = Burger::classic("Normal", "Res", Money::from_major_minor(10, 0));

    let expected = "Burger on Normal bun with Res\n\
                    Base price: $10.00\n\
                    Total price: $10.00";

    assert_eq!(burger.render_details(), expected);
}

#[test]
fn test_premium_report_lists_its_sides() {
    let burger = Burger::premium("Brioche", "Res Angus", Money::from_major_minor(18, 0));

    let expected = "Burger on Brioche bun with Res Angus\n\
                    Base price: $18.00\n\
                    Added ingredients:\n\
                    - Fries: $3.50\n\
                    - Drink: $2.50\n\
                    Additions subtotal: $6.00\n\
                    Total price: $24.00";

    assert_eq!(burger.render_details(), expected);
}

#[test]
fn test_healthy_report_names_the_integral_bun() {
    let mut burger = Burger::healthy("Chicken", Money::from_major_minor(12, 0));
    burger.try_add(topping("Avocado", 200));

    let details = burger.render_details();
    assert!(details.starts_with("Burger on Integral bun with Chicken\n"));
    assert!(details.ends_with("Total price: $14.00"));
}
