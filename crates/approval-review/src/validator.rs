//! Request validation
//!
//! Runs before any provider call. Lengths are counted in characters after
//! trimming surrounding whitespace.

use crate::config::DEFAULT_MAX_CONTENT_LENGTH;
use crate::error::{Field, ValidationError, ValidationKind};
use crate::model::ReviewRequest;

/// Length limits applied to incoming requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewLimits {
    pub product_name_min: usize,
    pub product_name_max: usize,
    pub sales_page_min: usize,
    pub sales_page_max: usize,
}

impl Default for ReviewLimits {
    fn default() -> Self {
        Self {
            product_name_min: 1,
            product_name_max: 200,
            sales_page_min: 10,
            sales_page_max: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ReviewLimits {
    /// Default limits with a custom sales page maximum
    pub fn with_max_content_length(max: usize) -> Self {
        Self {
            sales_page_max: max,
            ..Self::default()
        }
    }
}

/// Validate raw request fields into a [`ReviewRequest`].
///
/// The product name is checked before the sales page, so the first violated
/// field is reported.
pub fn validate_review(
    product_name: Option<&str>,
    sales_page: Option<&str>,
    limits: &ReviewLimits,
) -> Result<ReviewRequest, ValidationError> {
    let product_name = check_field(
        Field::ProductName,
        product_name,
        limits.product_name_min,
        limits.product_name_max,
    )?;
    let sales_page = check_field(
        Field::SalesPage,
        sales_page,
        limits.sales_page_min,
        limits.sales_page_max,
    )?;

    Ok(ReviewRequest::new(product_name, sales_page))
}

fn check_field(
    field: Field,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value
        .ok_or_else(|| ValidationError::new(field, ValidationKind::Missing))?
        .trim();

    if value.is_empty() {
        return Err(ValidationError::new(field, ValidationKind::Empty));
    }

    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(field, ValidationKind::TooShort { min }));
    }
    if len > max {
        return Err(ValidationError::new(field, ValidationKind::TooLong { max }));
    }

    Ok(value.to_string())
}
