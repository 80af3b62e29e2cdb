//! Procurement request phrasing.
//!
//! Requests follow one fixed template, matched case-insensitively:
//!
//! ```text
//! [please] <verb> [<quantity>] <item> [. or !]
//! verb = order | buy | purchase | get | acquire | request
//! ```
//!
//! There is no language understanding beyond this template. Anything that
//! does not start with a recognised verb yields [`RequestParseError::NoItem`].

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{ItemName, Quantity};

static REQUEST_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:please\s+)?(?:order|buy|purchase|get|acquire|request)(?:\s+(?P<quantity>[-+]?\s*\d\S*))?(?:\s+(?P<item>.*?))?[\s.!]*$",
    )
    .expect("request template regex")
});

/// Articles dropped from the front of an item when no quantity was given.
/// An article on its own never names an item.
const ARTICLES: [&str; 2] = ["a", "an"];

/// Item and quantity extracted from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Lower-cased item with whitespace runs collapsed.
    pub item: ItemName,
    /// Requested quantity; [`Quantity::DEFAULT`] when the request names none.
    pub quantity: Quantity,
}

/// Why a request could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestParseError {
    /// The text does not follow the template, or names no item.
    #[error("no item recognized")]
    NoItem,

    /// The quantity token is zero or negative.
    #[error("quantity must be positive, got '{token}'")]
    NonPositiveQuantity {
        /// The quantity token as written.
        token: String,
    },

    /// The quantity token is not a plain integer, or does not fit in `u32`.
    #[error("malformed quantity '{token}'")]
    MalformedQuantity {
        /// The quantity token as written.
        token: String,
    },
}

/// Extracts the item and quantity from `text`.
///
/// ```
/// use pipeline::parse_request;
///
/// let parsed = parse_request("Order 3 Laptops").unwrap();
/// assert_eq!(parsed.item.as_str(), "laptops");
/// assert_eq!(parsed.quantity.as_u32(), 3);
/// ```
pub fn parse_request(text: &str) -> Result<ParsedRequest, RequestParseError> {
    let captures = REQUEST_TEMPLATE
        .captures(text.trim())
        .ok_or(RequestParseError::NoItem)?;

    let quantity = match captures.name("quantity") {
        Some(token) => parse_quantity(token.as_str())?,
        None => Quantity::DEFAULT,
    };

    let raw_item = captures.name("item").map_or("", |m| m.as_str());
    let mut words: Vec<String> = raw_item
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if let [only] = words.as_slice() {
        if ARTICLES.contains(&only.as_str()) {
            return Err(RequestParseError::NoItem);
        }
    }
    let leading_article = words
        .first()
        .is_some_and(|word| ARTICLES.contains(&word.as_str()));
    if captures.name("quantity").is_none() && leading_article {
        words.remove(0);
    }

    let item = ItemName::new(words.join(" ")).ok_or(RequestParseError::NoItem)?;
    Ok(ParsedRequest { item, quantity })
}

fn parse_quantity(token: &str) -> Result<Quantity, RequestParseError> {
    let (sign, digits) = match token.strip_prefix(|c| c == '-' || c == '+') {
        Some(rest) => (token.chars().next(), rest),
        None => (None, token),
    };
    let detached_sign = digits.starts_with(char::is_whitespace);
    let digits = digits.trim_start();
    let all_digits = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    if sign == Some('-') && all_digits {
        return Err(RequestParseError::NonPositiveQuantity {
            token: token.to_string(),
        });
    }
    if detached_sign || !all_digits {
        return Err(RequestParseError::MalformedQuantity {
            token: token.to_string(),
        });
    }

    let count: u32 = digits
        .parse()
        .map_err(|_| RequestParseError::MalformedQuantity {
            token: token.to_string(),
        })?;
    if count == 0 {
        return Err(RequestParseError::NonPositiveQuantity {
            token: token.to_string(),
        });
    }
    Ok(Quantity::new(count))
}
