//! Notice extraction from board page markup.
//!
//! Board pages render their listings inside a single `div.type-table`
//! container holding a table of rows. Each notice row carries its title and
//! link in an anchor under the subject column:
//!
//! ```text
//! <div class="type-table">
//!   <table><tbody>
//!     <tr>
//!       <td class="num">12</td>
//!       <td class="subject"><a href="/board/123">Title<span class="mark">NEW</span></a></td>
//!     </tr>
//!   </tbody></table>
//! </div>
//! ```
//!
//! Title and href are taken from the same anchor in a single walk over the
//! rows, so the pairing cannot drift even when the page mixes in rows
//! without a subject anchor (headers, pinned separators). Inline
//! `span.mark` badges are excluded from the title text.
//!
//! The selectors are fixed to this layout. Academic-notice and
//! department-notice pages that use different markup are not yet normalized
//! here.

use crate::models::Notice;
use once_cell::sync::Lazy;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, instrument};

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.type-table").unwrap());
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody > tr").unwrap());
static SUBJECT_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.subject > a").unwrap());

/// Extract all notices from a board page, in document order.
///
/// Returns an error when the page has no `div.type-table` container; a page
/// whose structure has drifted that far is treated as a fatal condition
/// rather than an empty result.
#[instrument(level = "info", skip_all)]
pub fn extract_notices(html: &str) -> Result<Vec<Notice>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or("no type-table container in page markup")?;

    let mut notices = Vec::new();
    for row in table.select(&ROW_SELECTOR) {
        let Some(anchor) = row.select(&SUBJECT_LINK_SELECTOR).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let title = title_text(anchor);
        if title.is_empty() {
            continue;
        }

        notices.push(Notice {
            title,
            href: href.to_string(),
        });
    }

    debug!(count = notices.len(), "Extracted notices from page");
    Ok(notices)
}

/// Collect the anchor's text with every `span.mark` badge subtree excluded,
/// trimmed of surrounding whitespace.
fn title_text(anchor: ElementRef<'_>) -> String {
    let mut text = String::new();
    collect_text(*anchor, &mut text);
    text.trim().to_string()
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text),
            Node::Element(element) => {
                if element.name() == "span" && element.classes().any(|c| c == "mark") {
                    continue;
                }
                collect_text(child, out);
            }
            _ => {}
        }
    }
}
