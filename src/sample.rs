//! Demo ledger seeding
//!
//! Populates an empty store with a few months of realistic records so every
//! report has something to show. Used by the `demo` subcommand and as a
//! fixture in integration tests.

use chrono::{Datelike, NaiveDate};

use crate::error::FinFlowResult;
use crate::models::{
    Debt, ExpenseCategory, ExpenseKind, ExpenseRecord, Goal, GoalCategory, IncomeRecord, Money,
    SavingsRecord, EMERGENCY_FUND_TYPE,
};
use crate::storage::Storage;

/// Seed demo data into an empty store. Does nothing when income or expense
/// records already exist. Returns whether seeding happened.
pub fn seed_demo_data(storage: &Storage, today: NaiveDate) -> FinFlowResult<bool> {
    if storage.has_any_records()? {
        return Ok(false);
    }

    let year = today.year();
    let mut months = vec![2, 3];
    if !months.contains(&today.month()) {
        months.push(today.month());
    }

    for &month in &months {
        seed_income(storage, year, month)?;
        seed_expenses(storage, year, month)?;
        seed_savings(storage, year, month)?;
    }

    seed_budgets(storage)?;
    seed_goals(storage, year)?;
    seed_debts(storage)?;

    storage.save_all()?;
    Ok(true)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn seed_income(storage: &Storage, year: i32, month: u32) -> FinFlowResult<()> {
    storage.income.insert(
        IncomeRecord::new(
            date(year, month, 1),
            "Employer Corp",
            "Salary",
            Money::from_units(4500),
        )
        .with_payment_method("Bank Transfer")
        .with_notes("Monthly salary"),
    )?;
    storage.income.insert(
        IncomeRecord::new(
            date(year, month, 10),
            "Freelance Client",
            "Freelance",
            Money::from_units(650),
        )
        .with_payment_method("PayPal")
        .with_notes("Design project"),
    )?;
    storage.income.insert(
        IncomeRecord::new(
            date(year, month, 15),
            "Dividends",
            "Investment",
            Money::from_units(280),
        )
        .with_payment_method("Bank Transfer")
        .with_notes("Q dividend"),
    )?;
    Ok(())
}

fn seed_expenses(storage: &Storage, year: i32, month: u32) -> FinFlowResult<()> {
    let seeds: [(ExpenseCategory, &str, i64, ExpenseKind, &str); 10] = [
        (ExpenseCategory::Housing, "Rent", 1200, ExpenseKind::Fixed, "Bank Transfer"),
        (ExpenseCategory::Food, "Groceries", 200, ExpenseKind::Variable, "Credit Card"),
        (ExpenseCategory::Food, "Restaurant", 80, ExpenseKind::Variable, "Cash"),
        (ExpenseCategory::Transport, "Fuel", 70, ExpenseKind::Variable, "Cash"),
        (ExpenseCategory::Utilities, "Internet", 55, ExpenseKind::Fixed, "Bank Transfer"),
        (ExpenseCategory::Utilities, "Electricity", 85, ExpenseKind::Fixed, "Bank Transfer"),
        (ExpenseCategory::Health, "Gym", 45, ExpenseKind::Fixed, "Credit Card"),
        (ExpenseCategory::Entertainment, "Streaming", 28, ExpenseKind::Fixed, "Credit Card"),
        (ExpenseCategory::Shopping, "Clothing", 150, ExpenseKind::Variable, "Credit Card"),
        (ExpenseCategory::Education, "Course", 99, ExpenseKind::Variable, "PayPal"),
    ];

    for (index, (category, subcategory, units, kind, payment)) in seeds.iter().enumerate() {
        let day = (index as u32) * 2 + 2;
        storage.expenses.insert(
            ExpenseRecord::new(
                date(year, month, day),
                *category,
                Money::from_units(*units),
                *kind,
            )
            .with_subcategory(*subcategory)
            .with_payment_method(*payment),
        )?;
    }
    Ok(())
}

fn seed_savings(storage: &Storage, year: i32, month: u32) -> FinFlowResult<()> {
    storage.savings.insert(
        SavingsRecord::new(date(year, month, 1), EMERGENCY_FUND_TYPE, Money::from_units(500))
            .with_account("HYSA")
            .with_notes("Monthly auto-save"),
    )?;
    storage.savings.insert(
        SavingsRecord::new(date(year, month, 1), "Retirement", Money::from_units(300))
            .with_account("401(k)")
            .with_notes("Employer matched"),
    )?;
    storage.savings.insert(
        SavingsRecord::new(date(year, month, 5), "Investment", Money::from_units(350))
            .with_account("Brokerage")
            .with_notes("Index fund"),
    )?;
    Ok(())
}

fn seed_budgets(storage: &Storage) -> FinFlowResult<()> {
    let limits = [
        (ExpenseCategory::Housing, 1200),
        (ExpenseCategory::Food, 350),
        (ExpenseCategory::Transport, 100),
        (ExpenseCategory::Utilities, 150),
        (ExpenseCategory::Health, 80),
        (ExpenseCategory::Entertainment, 80),
        (ExpenseCategory::Shopping, 200),
        (ExpenseCategory::Education, 150),
        (ExpenseCategory::PersonalCare, 50),
        (ExpenseCategory::Other, 100),
    ];

    for (category, units) in limits {
        storage.budgets.set_limit(category, Money::from_units(units))?;
    }
    Ok(())
}

fn seed_goals(storage: &Storage, year: i32) -> FinFlowResult<()> {
    storage.goals.insert(
        Goal::new(
            "Emergency Fund",
            Money::from_units(15000),
            date(year, 12, 31),
            GoalCategory::EmergencyFund,
        )
        .with_saved(Money::from_units(8500)),
    )?;
    storage.goals.insert(
        Goal::new(
            "Summer Vacation",
            Money::from_units(3000),
            date(year, 7, 1),
            GoalCategory::Vacation,
        )
        .with_saved(Money::from_units(1200)),
    )?;
    storage.goals.insert(
        Goal::new(
            "New Laptop",
            Money::from_units(2000),
            date(year, 6, 1),
            GoalCategory::Other,
        )
        .with_saved(Money::from_units(800)),
    )?;
    Ok(())
}

fn seed_debts(storage: &Storage) -> FinFlowResult<()> {
    storage.debts.insert(
        Debt::new("Credit Card", Money::from_units(2400), 22.0, Money::from_units(50))
            .with_lender("Bank A")
            .with_extra_payment(Money::from_units(200)),
    )?;
    storage.debts.insert(
        Debt::new(
            "Student Loan",
            Money::from_units(18000),
            5.5,
            Money::from_units(210),
        )
        .with_lender("Gov. Fund"),
    )?;
    Ok(())
}
