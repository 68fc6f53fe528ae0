//! Argument groups shared by several resource commands.

use crate::api::PageParams;
use crate::error::Error;
use clap::Args;

#[derive(Args, Debug, Clone, Copy)]
pub struct IdArg {
    /// Resource ID
    #[arg(short = 'i', long)]
    pub id: i64,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page number
    #[arg(short = 'p', long)]
    pub page: Option<u32>,
    /// Page size
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl From<PageArgs> for PageParams {
    fn from(args: PageArgs) -> Self {
        Self {
            page: args.page,
            page_size: args.page_size,
        }
    }
}

/// Split a comma-separated list, dropping empty entries.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated list of integer IDs.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] naming the first entry that is not an integer.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, Error> {
    split_list(raw)
        .iter()
        .map(|part| {
            part.parse::<i64>()
                .map_err(|e| Error::InvalidInput(format!("invalid integer {part:?}: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_skips_empty() {
        assert_eq!(split_list(" a, b,,c ,"), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("1, 2,3").unwrap(), vec![1, 2, 3]);
        let err = parse_id_list("1,x").unwrap_err();
        assert!(err.to_string().contains("\"x\""));
    }
}
