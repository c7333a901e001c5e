//! Turns a reference page into a renderable page of catalog rows.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{ApiResult, CatalogApi};

/// One renderable table row.
///
/// `seq_no` is the entry's 1-based position in the whole remote
/// collection (page offset plus position within the page). Entries
/// dropped by the sprite filter leave a gap; surviving rows keep their
/// original numbers.
#[derive(Debug, Clone)]
pub struct PageRow {
    pub seq_no: u64,
    pub name: String,
    pub detail_url: String,
    pub sprite_url: String,
}

/// A fetched, filtered page ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub reference: u64,
    pub offset: u64,
    pub total_count: u64,
    pub rows: Vec<PageRow>,
}

/// Fetches one page of list entries and enriches each with its sprite.
pub struct PageDataLoader<C: CatalogApi> {
    api: Arc<C>,
    page_size: u64,
}

impl<C: CatalogApi> PageDataLoader<C> {
    pub fn new(api: Arc<C>, page_size: u64) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
        }
    }

    pub fn api(&self) -> &Arc<C> {
        &self.api
    }

    /// Load the page for `reference`.
    ///
    /// A list-fetch failure propagates. Per-entry detail failures are
    /// logged and the entry dropped, the same as entries whose detail
    /// carries no front sprite; order is otherwise preserved.
    pub async fn load(&self, reference: u64) -> ApiResult<LoadedPage> {
        let offset = reference.saturating_sub(1) * self.page_size;
        let list = self.api.list_page(offset, self.page_size).await?;

        let mut rows = Vec::with_capacity(list.results.len());
        for (index, entry) in list.results.iter().enumerate() {
            let seq_no = offset + index as u64 + 1;
            match self.api.fetch_detail(&entry.url).await {
                Ok(detail) => match detail.sprites.front_default {
                    Some(sprite_url) => rows.push(PageRow {
                        seq_no,
                        name: entry.name.clone(),
                        detail_url: entry.url.clone(),
                        sprite_url,
                    }),
                    None => {
                        debug!("dropping {} (no front sprite)", entry.name);
                    }
                },
                Err(e) => {
                    warn!("detail fetch failed for {}: {}", entry.name, e);
                }
            }
        }

        debug!(
            "loaded page {} (offset {}): {} of {} entries kept",
            reference,
            offset,
            rows.len(),
            list.results.len()
        );

        Ok(LoadedPage {
            reference,
            offset,
            total_count: list.count,
            rows,
        })
    }
}
