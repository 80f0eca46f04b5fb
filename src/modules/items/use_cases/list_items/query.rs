use crate::modules::items::core::errors::ApplicationError;

pub const DEFAULT_LIMIT: usize = 10;

/// Empty input falls back to `default`. Zero is a valid limit and means "no limit".
pub fn parse_limit(raw: &str, default: usize) -> Result<usize, ApplicationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }

    let limit: i64 = raw
        .parse()
        .map_err(|_| ApplicationError::InvalidArgument("invalid limit parameter".into()))?;
    if limit < 0 {
        return Err(ApplicationError::InvalidArgument("invalid limit value".into()));
    }

    usize::try_from(limit)
        .map_err(|_| ApplicationError::InvalidArgument("invalid limit value".into()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemsQuery {
    pub query: String,
    pub limit: usize,
}

impl ListItemsQuery {
    pub fn new(query: Option<&str>, limit: Option<&str>, default_limit: usize) -> Result<Self, ApplicationError> {
        Ok(Self {
            query: query.unwrap_or_default().trim().to_string(),
            limit: parse_limit(limit.unwrap_or_default(), default_limit)?,
        })
    }
}
