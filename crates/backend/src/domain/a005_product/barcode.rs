//! Cosmetic EAN-13 codes for products entered without a barcode.
//!
//! `899` is the GS1 prefix for Indonesia; the body is random and the code is
//! never looked up anywhere, it only has to scan.

use rand::Rng;

const PREFIX: &str = "899";

/// EAN-13 check digit over the first 12 digits
pub fn check_digit(digits: &[u8; 12]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = [0u8; 12];
    for (slot, ch) in digits.iter_mut().zip(PREFIX.bytes()) {
        *slot = ch - b'0';
    }
    for slot in digits.iter_mut().skip(PREFIX.len()) {
        *slot = rng.gen_range(0..10);
    }
    let check = check_digit(&digits);
    digits
        .iter()
        .chain(std::iter::once(&check))
        .map(|d| char::from(b'0' + d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digit() {
        // 4006381333931
        assert_eq!(check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        // 8991234567891
        assert_eq!(check_digit(&[8, 9, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9]), 1);
    }

    #[test]
    fn generated_codes_validate() {
        for _ in 0..50 {
            let code = generate();
            assert_eq!(code.len(), 13);
            assert!(code.starts_with("899"));
            let digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
            let body: [u8; 12] = digits[..12].try_into().unwrap();
            assert_eq!(check_digit(&body), digits[12]);
        }
    }
}
