//! Price formatting shared by the listing cards and the comparison table.

use crate::models::{ListingStatus, PropertyRecord};

/// `$X.XM`, `$XK` or `$X`.
///
/// The quotient is rounded as the `f64` it becomes, half up, so 1 150 000
/// (1.149999… in binary) shows as `$1.1M` while 1 250 000 shows as `$1.3M`.
pub fn compact_price(price: u64) -> String {
    if price >= 1_000_000 {
        format!("${}M", fixed(price as f64 / 1e6, 1))
    } else if price >= 1_000 {
        format!("${}K", fixed(price as f64 / 1e3, 0))
    } else {
        format!("${}", price)
    }
}

/// Round a non-negative value to `decimals` places, ties away from zero,
/// judged on its exact binary expansion.
fn fixed(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", decimals + 20, value);
    let (whole, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    if frac.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Whole dollars with thousands separators, e.g. `$2,500`.
pub fn currency(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Card price: `Price on Request` for zero, `/mo` suffix for rentals.
pub fn listing_price(record: &PropertyRecord) -> String {
    if record.price == 0 {
        return "Price on Request".to_string();
    }
    let formatted = currency(record.price);
    match record.status {
        Some(ListingStatus::ForRent) => format!("{}/mo", formatted),
        _ => formatted,
    }
}
