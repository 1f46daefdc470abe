use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{error::StoreError, text::star_row};

/// Star rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, StoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StoreError::InvalidRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Ratings of 4 and 5 count as satisfied.
    pub fn is_positive(&self) -> bool {
        self.0 >= 4
    }

    pub fn stars(&self) -> String {
        star_row(self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub customer_name: String,
    pub email: String,
    pub device: String,
    pub rating: Rating,
    pub review_text: String,
    pub date: NaiveDate,
}

/// Raw form contents before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub customer_name: String,
    pub email: String,
    pub device: String,
    pub rating: u8,
    pub review_text: String,
}

impl ReviewDraft {
    /// Checks required fields the way a browser form would, then stamps the record.
    pub fn into_review(self, id: u64, date: NaiveDate) -> Result<Review, StoreError> {
        let customer_name = required(self.customer_name, "name")?;
        let email = required(self.email, "email")?;
        if !is_plausible_email(&email) {
            return Err(StoreError::InvalidEmail(email));
        }
        let device = required(self.device, "device")?;
        if self.rating == 0 {
            return Err(StoreError::MissingField("rating"));
        }
        let rating = Rating::new(self.rating)?;
        let review_text = required(self.review_text, "review")?;

        Ok(Review {
            id,
            customer_name,
            email,
            device,
            rating,
            review_text,
            date,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(StoreError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Review list selector: everything, or one exact device name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceFilter {
    #[default]
    All,
    Device(String),
}

impl DeviceFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            DeviceFilter::All => true,
            DeviceFilter::Device(name) => review.device == *name,
        }
    }
}

impl fmt::Display for DeviceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFilter::All => f.write_str("All devices"),
            DeviceFilter::Device(name) => f.write_str(name),
        }
    }
}

/// Records matching `filter`, in their original order.
pub fn filter_by_device<'a>(reviews: &'a [Review], filter: &DeviceFilter) -> Vec<&'a Review> {
    reviews
        .iter()
        .filter(|review| filter.matches(review))
        .collect()
}

/// Issues time-based review identifiers that never repeat or go backwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewIds {
    last: u64,
}

impl ReviewIds {
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    pub fn next(&mut self, now_millis: u64) -> u64 {
        self.last = now_millis.max(self.last + 1);
        self.last
    }
}
