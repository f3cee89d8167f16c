//! # Seed Data
//!
//! The demo pharmacy the terminal starts with: ten medicines, five
//! customers, a week of daily sales and today's dashboard figures.
//! Everything is in memory and is lost when the process exits.
//!
//! Seeded rows keep short ids (`"1"`, `"2"`, ...). Rows created at runtime
//! get UUIDs.

use chrono::NaiveDate;
use medipos_core::types::{Customer, Product, SalesReport, TopSeller};
use medipos_core::Money;

/// (id, name, batch, stock, expiry, price cents, category)
const MEDICINES: &[(&str, &str, &str, i64, NaiveDate, i64, &str)] = &[
    ("1", "Paracetamol 500mg", "B001", 150, ymd(2025, 12, 31), 599, "Pain Relief"),
    ("2", "Amoxicillin 250mg", "B002", 80, ymd(2025, 11, 15), 1250, "Antibiotics"),
    ("3", "Ibuprofen 400mg", "B003", 200, ymd(2025, 10, 20), 799, "Pain Relief"),
    ("4", "Cetirizine 10mg", "B004", 120, ymd(2025, 9, 18), 850, "Allergy"),
    ("5", "Omeprazole 20mg", "B005", 90, ymd(2023, 8, 10), 1599, "Digestive Health"),
    ("6", "Aspirin 75mg", "B006", 250, ymd(2024, 6, 22), 450, "Pain Relief"),
    ("7", "Metformin 500mg", "B007", 60, ymd(2024, 5, 11), 1875, "Diabetes"),
    ("8", "Atorvastatin 10mg", "B008", 45, ymd(2023, 7, 14), 2499, "Cardiovascular"),
    ("9", "Folic Acid 5mg", "B009", 180, ymd(2025, 4, 30), 625, "Vitamins"),
    ("10", "Diazepam 5mg", "B010", 30, ymd(2024, 1, 15), 2250, "Mental Health"),
];

/// (id, name, phone, email, address)
const CUSTOMERS: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "John Doe", "555-123-4567", "john.doe@example.com", "123 Main St, Anytown"),
    ("2", "Jane Smith", "555-987-6543", "jane.smith@example.com", "456 Oak Ave, Somewhere"),
    ("3", "Robert Johnson", "555-567-8901", "robert.j@example.com", "789 Pine Rd, Nowhere"),
    ("4", "Lisa Anderson", "555-234-5678", "lisa.a@example.com", "101 Elm St, Everywhere"),
    ("5", "Michael Brown", "555-345-6789", "michael.b@example.com", "202 Cedar Ln, Somewhere Else"),
];

/// (id, date, orders, sales cents)
const DAILY_SALES: &[(&str, NaiveDate, i64, i64)] = &[
    ("1", ymd(2023, 5, 1), 32, 125_075),
    ("2", ymd(2023, 5, 2), 28, 98_050),
    ("3", ymd(2023, 5, 3), 35, 145_025),
    ("4", ymd(2023, 5, 4), 30, 112_000),
    ("5", ymd(2023, 5, 5), 42, 168_075),
    ("6", ymd(2023, 5, 6), 38, 152_050),
    ("7", ymd(2023, 5, 7), 25, 95_025),
];

/// (product id, name, units sold today)
const TOP_SELLERS: &[(&str, &str, i64)] = &[
    ("1", "Paracetamol 500mg", 45),
    ("3", "Ibuprofen 400mg", 38),
    ("4", "Cetirizine 10mg", 32),
    ("9", "Folic Acid 5mg", 28),
];

const TODAYS_REVENUE_CENTS: i64 = 245_075;

/// Builds a date for the const tables above. An impossible date fails the
/// build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

pub fn products() -> Vec<Product> {
    MEDICINES
        .iter()
        .map(|&(id, name, batch_no, stock, expiry, price_cents, category)| Product {
            id: id.to_string(),
            name: name.to_string(),
            batch_no: batch_no.to_string(),
            stock,
            expiry,
            price_cents,
            category: category.to_string(),
        })
        .collect()
}

pub fn customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|&(id, name, phone, email, address)| Customer {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: Some(email.to_string()),
            address: Some(address.to_string()),
        })
        .collect()
}

pub fn sales_reports() -> Vec<SalesReport> {
    DAILY_SALES
        .iter()
        .map(|&(id, date, total_orders, total_sales_cents)| SalesReport {
            id: id.to_string(),
            date,
            total_orders,
            total_sales_cents,
        })
        .collect()
}

pub fn top_sellers() -> Vec<TopSeller> {
    TOP_SELLERS
        .iter()
        .map(|&(product_id, name, units_sold)| TopSeller {
            product_id: product_id.to_string(),
            name: name.to_string(),
            units_sold,
        })
        .collect()
}

pub fn todays_revenue() -> Money {
    Money::from_cents(TODAYS_REVENUE_CENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use medipos_core::validation::validate_product;

    #[test]
    fn test_seed_dates() {
        assert_eq!(ymd(2025, 12, 31), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert!(products().iter().all(|p| p.expiry.year() >= 2023));

        let days: Vec<u32> = sales_reports().iter().map(|r| r.date.day()).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(sales_reports().iter().all(|r| r.date.year() == 2023 && r.date.month() == 5));
    }

    #[test]
    fn test_seed_products_pass_validation() {
        for product in products() {
            assert!(validate_product(&product).is_ok(), "{}", product.name);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<String> = products().into_iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(customers().len(), 5);
    }

    #[test]
    fn test_top_sellers_exist_in_catalog() {
        let products = products();
        for seller in top_sellers() {
            let product = products.iter().find(|p| p.id == seller.product_id).unwrap();
            assert_eq!(product.name, seller.name);
        }
    }
}
