//! Limit/offset pagination shared by every list endpoint.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 1000;

/// Query parameters accepted by list endpoints.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
pub struct PageParams {
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

impl PageParams {
    /// Clamp raw query input into a usable (limit, offset) pair.
    pub fn clamp(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

/// Echoed back alongside list results so clients can page without a second
/// count query.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Total number of items available
    pub total: i64,
    /// Number of items requested (limit)
    pub limit: i64,
    /// Number of items skipped (offset)
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_absent() {
        assert_eq!(PageParams::default().clamp(), (DEFAULT_LIMIT, 0));
    }

    #[test]
    fn limit_is_clamped_to_bounds() {
        let params = PageParams {
            limit: Some(5000),
            offset: Some(-3),
        };
        assert_eq!(params.clamp(), (MAX_LIMIT, 0));

        let params = PageParams {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(params.clamp(), (1, 0));
    }
}
