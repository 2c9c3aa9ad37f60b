use budget_ledger::{Category, LedgerError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn funded(name: &str, amount: Decimal) -> Category {
    let mut category = Category::new(name);
    category.deposit(amount, "initial deposit");
    category
}

#[test]
fn balance_tracks_every_entry() {
    let mut food = funded("Food", dec!(1000));
    assert!(food.withdraw(dec!(10.15), "groceries"));
    assert_eq!(food.balance(), dec!(989.85));

    let sum: Decimal = food.entries().iter().map(|entry| entry.amount()).sum();
    assert_eq!(food.balance(), sum);
}

#[test]
fn many_small_withdrawals_do_not_drift() {
    let mut coffee = funded("Coffee", dec!(100));
    for _ in 0..1000 {
        assert!(coffee.withdraw(dec!(0.1), "espresso"));
    }
    assert_eq!(coffee.balance(), Decimal::ZERO);
    assert!(!coffee.withdraw(dec!(0.01), "one more"));
}

#[test]
fn oversized_withdrawal_leaves_ledger_unchanged() {
    let mut food = funded("Food", dec!(1000));
    assert!(food.withdraw(dec!(10.15), "groceries"));
    let before = food.entries().to_vec();

    assert!(!food.withdraw(dec!(100000), ""));
    assert_eq!(food.entries(), before.as_slice());
    assert_eq!(food.balance(), dec!(989.85));
}

#[test]
fn transfer_moves_funds_and_labels_both_sides() {
    let mut food = funded("Food", dec!(100));
    let mut clothing = Category::new("Clothing");

    assert!(food.transfer(dec!(50), &mut clothing));

    assert_eq!(food.balance(), dec!(50));
    assert_eq!(clothing.balance(), dec!(50));
    assert_eq!(food.len(), 2);
    assert_eq!(clothing.len(), 1);

    let outgoing = food.entries().last().unwrap();
    assert_eq!(outgoing.amount(), dec!(-50));
    assert_eq!(outgoing.description(), "Transfer to Clothing");

    let incoming = clothing.entries().last().unwrap();
    assert_eq!(incoming.amount(), dec!(50));
    assert_eq!(incoming.description(), "Transfer from Food");
}

#[test]
fn failed_transfer_touches_neither_ledger() {
    let mut food = funded("Food", dec!(20));
    let mut clothing = funded("Clothing", dec!(5));

    assert!(!food.transfer(dec!(20.01), &mut clothing));
    assert_eq!(food.len(), 1);
    assert_eq!(clothing.len(), 1);
    assert_eq!(food.balance(), dec!(20));
    assert_eq!(clothing.balance(), dec!(5));

    let err = food.try_transfer(dec!(21), &mut clothing).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
    assert_eq!(food.len(), 1);
    assert_eq!(clothing.len(), 1);
}

#[test]
fn transfer_of_whole_balance_is_allowed() {
    let mut food = funded("Food", dec!(42.42));
    let mut savings = Category::new("Savings");
    assert!(food.transfer(dec!(42.42), &mut savings));
    assert_eq!(food.balance(), Decimal::ZERO);
    assert_eq!(savings.balance(), dec!(42.42));
}

#[test]
fn same_named_categories_stay_independent() {
    let mut first = funded("Food", dec!(10));
    let mut second = Category::new("Food");
    assert!(first.transfer(dec!(4), &mut second));
    assert_eq!(first.balance(), dec!(6));
    assert_eq!(second.balance(), dec!(4));
    assert_eq!(second.entries()[0].description(), "Transfer from Food");
}

#[test]
fn queries_are_idempotent() {
    let mut food = funded("Food", dec!(12.34));
    food.withdraw(dec!(2.34), "snack");
    assert_eq!(food.balance(), food.balance());
    assert_eq!(food.to_string(), food.to_string());
}

#[test]
fn error_message_names_category_and_amounts() {
    let mut fuel = funded("Fuel", dec!(5));
    let err = fuel.try_withdraw(dec!(7.5), "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Insufficient funds in `Fuel`: requested 7.5, available 5"
    );
}

#[test]
fn categories_serialize_with_string_amounts() {
    let mut food = funded("Food", dec!(1000));
    food.withdraw(dec!(10.15), "groceries");
    let json = serde_json::to_value(&food).unwrap();
    assert_eq!(json["name"], "Food");
    assert_eq!(json["ledger"][1]["amount"], "-10.15");
    assert_eq!(json["ledger"][1]["description"], "groceries");
}
