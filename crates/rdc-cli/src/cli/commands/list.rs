//! `rdc list <url> --filter k=v ...` – fetch one page of a list endpoint.

use anyhow::Result;
use rdc_core::{Filter, PaginatedResult};

use super::{operation_name, Context};

pub async fn run_list(
    ctx: &Context,
    url: &str,
    filters: Vec<(String, Option<String>)>,
    op: Option<String>,
) -> Result<()> {
    let op = operation_name(op, "fetch", url);
    let filter: Filter = filters.into_iter().collect();
    let page: PaginatedResult<serde_json::Value> = ctx.api.list(url, &filter, &op).await?;
    println!("{}", page_summary(&page));
    for item in &page.data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

fn page_summary<T>(page: &PaginatedResult<T>) -> String {
    let mut nav = Vec::new();
    if page.has_prev {
        nav.push("prev");
    }
    if page.has_next {
        nav.push("next");
    }
    let nav = if nav.is_empty() {
        String::new()
    } else {
        format!(" [{}]", nav.join(", "))
    };
    format!(
        "page {}/{} ({} of {} items, limit {}){}",
        page.page,
        page.total_pages,
        page.data.len(),
        page.total,
        page.limit,
        nav
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line() {
        let page = PaginatedResult {
            data: vec![1, 2],
            total: 12,
            page: 2,
            limit: 2,
            total_pages: 6,
            has_next: true,
            has_prev: true,
        };
        assert_eq!(
            page_summary(&page),
            "page 2/6 (2 of 12 items, limit 2) [prev, next]"
        );
    }

    #[test]
    fn summary_single_page() {
        let page: PaginatedResult<u8> = PaginatedResult {
            data: vec![],
            total: 0,
            page: 1,
            limit: 20,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        };
        assert_eq!(page_summary(&page), "page 1/0 (0 of 0 items, limit 20)");
    }
}
