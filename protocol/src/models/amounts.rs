//! Currency amounts.
//!
//! The ledger has exactly two amount shapes on the wire:
//!
//! - XRP, as a string of integer drops: `"1000000"` is one XRP.
//! - Issued currency, as `{"currency": "USD", "issuer": "r...", "value": "1.5"}`.
//!
//! Everything is validated on the way in, so a constructed [`Amount`] always
//! has one of those two shapes. No floating point anywhere near money.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use super::required::IntoFieldValue;
use super::wire::{expect_object, FieldReader, WireValue};
use crate::config::{
    DROPS_PER_XRP, HEX_CURRENCY_CODE_LENGTH, ISO_CURRENCY_CODE_LENGTH, MAX_DROPS, XRP_CURRENCY_CODE,
    XRP_DECIMALS,
};
use crate::error::DeserializationError;

/// Errors from parsing or constructing amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Not a canonical non-negative integer string.
    #[error("invalid drops value `{0}`")]
    InvalidDrops(String),

    /// More than the total XRP supply.
    #[error("{0} drops exceeds the total XRP supply")]
    TooManyDrops(u64),

    /// Not a decimal XRP value with at most six fractional digits.
    #[error("invalid XRP value `{0}`")]
    InvalidXrp(String),

    /// Neither a 3-character code nor 40 hex digits, or the reserved `XRP`.
    #[error("invalid currency code `{0}`")]
    InvalidCurrency(String),

    /// Not a decimal number (with optional exponent).
    #[error("invalid issued currency value `{0}`")]
    InvalidValue(String),

    /// The issuer is empty.
    #[error("issued currency amount requires an issuer")]
    MissingIssuer,
}

// ---------------------------------------------------------------------------
// Drops
// ---------------------------------------------------------------------------

/// An amount of XRP in drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Drops(u64);

impl Drops {
    /// Creates a drops amount, rejecting anything above the total supply.
    pub fn new(drops: u64) -> Result<Self, AmountError> {
        if drops > MAX_DROPS {
            return Err(AmountError::TooManyDrops(drops));
        }
        Ok(Self(drops))
    }

    /// Returns the raw drop count.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Converts a decimal XRP string (`"1.5"`) to drops.
    pub fn from_xrp(xrp: &str) -> Result<Self, AmountError> {
        let invalid = || AmountError::InvalidXrp(xrp.to_string());
        let (whole, fraction) = match xrp.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (xrp, ""),
        };
        if whole.is_empty()
            || fraction.len() > XRP_DECIMALS
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<width$}", fraction, width = XRP_DECIMALS)
                .parse()
                .map_err(|_| invalid())?
        };
        let drops = whole
            .checked_mul(DROPS_PER_XRP)
            .and_then(|d| d.checked_add(fraction))
            .ok_or_else(invalid)?;
        Self::new(drops)
    }

    /// Renders the amount as decimal XRP with trailing zeros trimmed.
    pub fn to_xrp(self) -> String {
        let whole = self.0 / DROPS_PER_XRP;
        let fraction = self.0 % DROPS_PER_XRP;
        if fraction == 0 {
            return whole.to_string();
        }
        let fraction = format!("{:0>width$}", fraction, width = XRP_DECIMALS);
        format!("{}.{}", whole, fraction.trim_end_matches('0'))
    }
}

impl FromStr for Drops {
    type Err = AmountError;

    /// Parses the canonical wire form: digits only, no sign, no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(AmountError::InvalidDrops(s.to_string()));
        }
        let drops: u64 = s
            .parse()
            .map_err(|_| AmountError::InvalidDrops(s.to_string()))?;
        Self::new(drops)
    }
}

impl fmt::Display for Drops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl WireValue for Drops {
    fn to_wire(&self) -> Value {
        Value::String(self.0.to_string())
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let text = value
            .as_str()
            .ok_or_else(|| DeserializationError::invalid(field, value, "expected a drops string"))?;
        text.parse()
            .map_err(|e: AmountError| DeserializationError::invalid(field, value, e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// IssuedCurrencyAmount
// ---------------------------------------------------------------------------

/// An amount of a token issued by an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssuedCurrencyAmount {
    currency: String,
    issuer: String,
    value: String,
}

impl IssuedCurrencyAmount {
    /// Creates an issued currency amount after checking the currency code
    /// and the decimal value.
    pub fn new(
        currency: impl Into<String>,
        issuer: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, AmountError> {
        let currency = currency.into();
        let issuer = issuer.into();
        let value = value.into();

        if !is_valid_currency_code(&currency) {
            return Err(AmountError::InvalidCurrency(currency));
        }
        if issuer.is_empty() {
            return Err(AmountError::MissingIssuer);
        }
        if !is_decimal_value(&value) {
            return Err(AmountError::InvalidValue(value));
        }
        Ok(Self {
            currency,
            issuer,
            value,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A 3-character code other than `XRP`, or a 40-digit hex code.
fn is_valid_currency_code(code: &str) -> bool {
    if code.len() == ISO_CURRENCY_CODE_LENGTH {
        return code != XRP_CURRENCY_CODE && code.bytes().all(|b| b.is_ascii_graphic());
    }
    code.len() == HEX_CURRENCY_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `-?digits(.digits)?([eE][+-]?digits)?`, also allowing `.5` and `5.`.
fn is_decimal_value(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = !(whole.is_empty() && fraction.is_empty()) && digits(whole) && digits(fraction);
    let exponent_ok = match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && digits(exp)
        }
    };
    mantissa_ok && exponent_ok
}

impl WireValue for IssuedCurrencyAmount {
    fn to_wire(&self) -> Value {
        let mut map = Map::new();
        map.insert("currency".to_string(), Value::String(self.currency.clone()));
        map.insert("issuer".to_string(), Value::String(self.issuer.clone()));
        map.insert("value".to_string(), Value::String(self.value.clone()));
        Value::Object(map)
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let object = expect_object(field, value)?;
        let mut reader = FieldReader::nested(object, field);
        let currency: String = reader.require("currency", "currency", value)?;
        let issuer: String = reader.require("issuer", "issuer", value)?;
        let amount: String = reader.require("value", "value", value)?;
        reader.finish()?;
        Self::new(currency, issuer, amount)
            .map_err(|e| DeserializationError::invalid(field, value, e.to_string()))
    }
}

impl fmt::Display for IssuedCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.value, self.currency, self.issuer)
    }
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// Either XRP or an issued currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Amount {
    Xrp(Drops),
    Issued(IssuedCurrencyAmount),
}

impl Amount {
    /// Shorthand for an XRP amount literal. Panics on values above the
    /// total supply; untrusted input goes through `Amount::try_from` or
    /// [`Drops::new`].
    pub fn xrp(drops: u64) -> Self {
        assert!(drops <= MAX_DROPS, "{} drops exceeds the total XRP supply", drops);
        Amount::Xrp(Drops(drops))
    }

    /// Shorthand for an issued currency amount.
    pub fn issued(
        currency: impl Into<String>,
        issuer: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, AmountError> {
        IssuedCurrencyAmount::new(currency, issuer, value).map(Amount::Issued)
    }

    /// Returns `true` for the network's base currency.
    pub fn is_xrp(&self) -> bool {
        matches!(self, Amount::Xrp(_))
    }

    pub fn as_issued(&self) -> Option<&IssuedCurrencyAmount> {
        match self {
            Amount::Issued(issued) => Some(issued),
            Amount::Xrp(_) => None,
        }
    }
}

impl From<Drops> for Amount {
    fn from(drops: Drops) -> Self {
        Amount::Xrp(drops)
    }
}

impl TryFrom<u64> for Amount {
    type Error = AmountError;

    fn try_from(drops: u64) -> Result<Self, Self::Error> {
        Drops::new(drops).map(Amount::Xrp)
    }
}

impl From<IssuedCurrencyAmount> for Amount {
    fn from(issued: IssuedCurrencyAmount) -> Self {
        Amount::Issued(issued)
    }
}

impl IntoFieldValue<Amount> for Drops {
    fn into_field_value(self) -> Amount {
        Amount::Xrp(self)
    }
}

impl IntoFieldValue<Amount> for IssuedCurrencyAmount {
    fn into_field_value(self) -> Amount {
        Amount::Issued(self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Xrp(drops) => write!(f, "{} XRP", drops.to_xrp()),
            Amount::Issued(issued) => write!(f, "{}", issued),
        }
    }
}

impl WireValue for Amount {
    fn to_wire(&self) -> Value {
        match self {
            Amount::Xrp(drops) => drops.to_wire(),
            Amount::Issued(issued) => issued.to_wire(),
        }
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        match value {
            Value::String(_) => Drops::from_wire(field, value).map(Amount::Xrp),
            Value::Object(_) => IssuedCurrencyAmount::from_wire(field, value).map(Amount::Issued),
            _ => Err(DeserializationError::invalid(
                field,
                value,
                "expected a drops string or an issued currency object",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ISSUER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    #[test]
    fn drops_parse_is_canonical() {
        assert_eq!("0".parse::<Drops>().unwrap().value(), 0);
        assert_eq!("1000000".parse::<Drops>().unwrap().value(), 1_000_000);
        assert!("".parse::<Drops>().is_err());
        assert!("007".parse::<Drops>().is_err());
        assert!("-5".parse::<Drops>().is_err());
        assert!("1.5".parse::<Drops>().is_err());
        assert!("100000000000000001".parse::<Drops>().is_err());
    }

    #[test]
    fn xrp_to_drops_and_back() {
        assert_eq!(Drops::from_xrp("1").unwrap().value(), 1_000_000);
        assert_eq!(Drops::from_xrp("1.5").unwrap().value(), 1_500_000);
        assert_eq!(Drops::from_xrp("0.000001").unwrap().value(), 1);
        assert!(Drops::from_xrp("0.0000001").is_err());
        assert!(Drops::from_xrp("abc").is_err());
        assert!(Drops::from_xrp(".5").is_err());

        assert_eq!(Drops::new(1_500_000).unwrap().to_xrp(), "1.5");
        assert_eq!(Drops::new(2_000_000).unwrap().to_xrp(), "2");
        assert_eq!(Drops::new(1).unwrap().to_xrp(), "0.000001");
    }

    #[test]
    fn currency_codes() {
        assert!(is_valid_currency_code("USD"));
        assert!(!is_valid_currency_code("XRP"));
        assert!(!is_valid_currency_code("US"));
        assert!(is_valid_currency_code(
            "0158415500000000C1F76FF6ECB0BAC600000000"
        ));
        assert!(!is_valid_currency_code(
            "0158415500000000C1F76FF6ECB0BAC60000000Z"
        ));
    }

    #[test]
    fn decimal_values() {
        for ok in ["1", "-1", "1.25", ".5", "5.", "1e10", "1.5E-3", "-2e+4"] {
            assert!(is_decimal_value(ok), "{} should parse", ok);
        }
        for bad in ["", "-", ".", "1e", "abc", "1.2.3", "1e1.5", "--1"] {
            assert!(!is_decimal_value(bad), "{} should not parse", bad);
        }
    }

    #[test]
    fn amount_wire_shapes() {
        let xrp = Amount::xrp(25);
        assert!(xrp.is_xrp());
        assert_eq!(xrp.to_wire(), json!("25"));

        let usd = Amount::issued("USD", ISSUER, "10").unwrap();
        assert!(!usd.is_xrp());
        assert_eq!(
            usd.to_wire(),
            json!({"currency": "USD", "issuer": ISSUER, "value": "10"})
        );
        assert_eq!(Amount::from_wire("Amount", &usd.to_wire()).unwrap(), usd);
    }

    #[test]
    fn amount_rejects_other_shapes() {
        let err = Amount::from_wire("Amount", &json!(25)).unwrap_err();
        assert_eq!(err.field(), Some("Amount"));

        let err = Amount::from_wire(
            "SendMax",
            &json!({"currency": "USD", "issuer": ISSUER, "value": "1", "extra": 1}),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("SendMax.extra"));

        let err = Amount::from_wire("Amount", &json!({"currency": "XRP", "issuer": ISSUER, "value": "1"}))
            .unwrap_err();
        assert!(matches!(err, DeserializationError::InvalidValue { .. }));
    }

    #[test]
    fn try_from_drops_is_bounded() {
        assert_eq!(Amount::try_from(25u64), Ok(Amount::xrp(25)));
        assert_eq!(Amount::try_from(MAX_DROPS), Ok(Amount::xrp(MAX_DROPS)));
        assert_eq!(
            Amount::try_from(MAX_DROPS + 1),
            Err(AmountError::TooManyDrops(MAX_DROPS + 1))
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(Amount::xrp(1_250_000).to_string(), "1.25 XRP");
        assert_eq!(
            Amount::issued("EUR", ISSUER, "3").unwrap().to_string(),
            format!("3 EUR/{}", ISSUER)
        );
    }
}
