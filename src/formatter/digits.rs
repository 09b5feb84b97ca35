//! Decimal digit strings for exact rounding and scaling.
//!
//! Values are taken from the shortest round-trip representation of the
//! `f64`, so `4.645` rounds to `4.65` where binary arithmetic would give
//! `4.64`.

/// Decimal value `0.d1 d2 ... dn × 10^point` of a non-negative number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    /// No leading or trailing zeros. Empty means zero.
    digits: Vec<u8>,
    /// Number of digits before the decimal point; may be negative.
    point: i32,
}

impl Digits {
    /// Digits of `|value|`. The value must be finite.
    pub fn from_f64(value: f64) -> Digits {
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut result = Digits {
            digits,
            point: exponent + 1,
        };
        result.normalize();
        result
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Exponent of the leading digit (`1234 → 3`, `0.05 → -2`).
    pub fn exponent(&self) -> i32 {
        self.point - 1
    }

    /// Multiply by `10^places`.
    pub fn shift(&mut self, places: i32) {
        if !self.is_zero() {
            self.point += places;
        }
    }

    /// Round half away from zero to `places` fraction digits.
    pub fn round_fraction(&mut self, places: usize) {
        let keep = self.point as i64 + places as i64;
        self.round_at(keep);
    }

    /// Round half away from zero to `count` significant digits.
    pub fn round_significant(&mut self, count: usize) {
        self.round_at(count as i64);
    }

    fn round_at(&mut self, keep: i64) {
        if keep < 0 {
            self.digits.clear();
            self.normalize();
            return;
        }
        let keep = keep as usize;
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut index = keep;
            loop {
                if index == 0 {
                    self.digits.insert(0, 1);
                    self.point += 1;
                    break;
                }
                index -= 1;
                if self.digits[index] == 9 {
                    self.digits[index] = 0;
                } else {
                    self.digits[index] += 1;
                    break;
                }
            }
        }
        self.normalize();
    }

    /// Digits before the decimal point; empty for values below one.
    pub fn integer_digits(&self) -> String {
        if self.is_zero() || self.point <= 0 {
            return String::new();
        }
        let point = self.point as usize;
        let mut text: String = self
            .digits
            .iter()
            .take(point)
            .map(|&d| char::from(b'0' + d))
            .collect();
        while text.len() < point {
            text.push('0');
        }
        text
    }

    /// Digits after the decimal point, without trailing zeros.
    pub fn fraction_digits(&self) -> String {
        let len = self.digits.len() as i32;
        if self.is_zero() || self.point >= len {
            return String::new();
        }
        let mut text = String::new();
        for _ in self.point..0 {
            text.push('0');
        }
        let skip = self.point.max(0) as usize;
        text.extend(self.digits.iter().skip(skip).map(|&d| char::from(b'0' + d)));
        text
    }

    /// The first `count` significant digits, zero padded.
    pub fn significant_digits(&self, count: usize) -> String {
        let mut text: String = self
            .digits
            .iter()
            .take(count)
            .map(|&d| char::from(b'0' + d))
            .collect();
        while text.len() < count {
            text.push('0');
        }
        text
    }

    fn normalize(&mut self) {
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.point -= leading as i32;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 1;
        }
    }
}

/// Insert `separator` between digit groups. `sizes` lists group sizes from
/// the decimal point outward; the last size repeats.
pub(crate) fn group_digits(integer: &str, sizes: &[usize], separator: char) -> String {
    let Some(&last_size) = sizes.last() else {
        return integer.to_string();
    };
    if last_size == 0 {
        return integer.to_string();
    }

    let chars: Vec<char> = integer.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    let mut index = 0;
    while end > 0 {
        let size = sizes.get(index).copied().unwrap_or(last_size).max(1);
        let start = end.saturating_sub(size);
        groups.push(chars[start..end].iter().collect());
        end = start;
        index += 1;
    }
    groups.reverse();
    groups.join(&separator.to_string())
}
