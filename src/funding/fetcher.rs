//! Paginated retrieval of raw fills
use crate::apis::fills::{FillsPage, RawFill};
use crate::arguments::is_debug_fills_enabled;
use crate::errors::FundingError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;

/// Anything that can serve one page of fills
#[async_trait]
pub trait FillSource: Send + Sync {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<FillsPage, FundingError>;
}

/// Fetch every page sequentially, starting at offset 0.
///
/// Stops when the server reports `hasMore == false`, or once the next offset
/// passes `max_offset` even if the server keeps reporting more pages. In the
/// latter case the fills gathered so far are returned and only a warning is
/// logged. Any page failure aborts the whole fetch.
pub async fn fetch_all<S>(
    source: &S,
    page_size: usize,
    max_offset: usize,
) -> Result<Vec<RawFill>, FundingError>
where
    S: FillSource + ?Sized,
{
    if page_size == 0 {
        return Err(FundingError::Config("page size must be > 0".to_string()));
    }

    let mut fills = Vec::new();
    let mut offset = 0usize;
    let mut pages = 0usize;

    loop {
        let page = source.fetch_page(page_size, offset).await?;
        pages += 1;

        if is_debug_fills_enabled() {
            logger::debug(
                LogTag::Fills,
                &format!(
                    "Page {} at offset {}: {} fills (server total {}, has_more={})",
                    pages,
                    offset,
                    page.fills.len(),
                    page.total,
                    page.has_more
                ),
            );
        }

        fills.extend(page.fills);

        if !page.has_more {
            break;
        }

        offset += page_size;
        if offset > max_offset {
            logger::warning(
                LogTag::Fills,
                &format!(
                    "Reached maximum offset limit ({}), stopping with {} fills",
                    max_offset,
                    fills.len()
                ),
            );
            break;
        }
    }

    logger::info(
        LogTag::Fills,
        &format!("Fetched {} fills in {} pages", fills.len(), pages),
    );

    Ok(fills)
}
