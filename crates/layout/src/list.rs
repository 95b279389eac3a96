//! Flattening of list trees into render-ready rows.

use quire_idf::{ItemId, List, ListSymbol, TextStr};

/// One visible row of a flattened list.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub level: usize,
    pub text: TextStr,
    pub symbol: ListSymbol,
}

impl FlatRow {
    pub fn new(level: usize, text: impl Into<TextStr>, symbol: ListSymbol) -> Self {
        Self {
            level,
            text: text.into(),
            symbol,
        }
    }
}

/// Flattens `list` into rows in depth-first pre-order.
///
/// Items without content emit no row, and their children stay on the item's
/// own level. Children of content-bearing items move one level deeper.
///
/// Traversal uses an explicit stack, so depth is bounded by heap rather than
/// by the call stack. The returned rows own their data.
pub fn flatten(list: &List) -> Vec<FlatRow> {
    let mut rows = Vec::with_capacity(list.len());
    let mut stack: Vec<(ItemId, usize)> = list.roots().iter().rev().map(|&id| (id, 0)).collect();

    while let Some((id, level)) = stack.pop() {
        let item = list.item(id);
        let child_level = match &item.content {
            Some(text) => {
                rows.push(FlatRow::new(level, text.clone(), resolve_symbol(list, id)));
                level + 1
            }
            None => level,
        };
        stack.extend(item.children().iter().rev().map(|&child| (child, child_level)));
    }
    rows
}

/// Resolves the symbol an item is drawn with.
///
/// `Inherit` takes the parent's symbol verbatim, except that an unnumbered
/// `Numbered` parent yields the item's 1-based position among all of the
/// parent's children. A root item that inherits keeps the `Inherit` marker.
pub fn resolve_symbol(list: &List, id: ItemId) -> ListSymbol {
    let item = list.item(id);
    if item.symbol != ListSymbol::Inherit {
        return item.symbol.clone();
    }
    match list.parent_of(id) {
        Some(parent) => match &parent.symbol {
            ListSymbol::Numbered(None) => ListSymbol::Numbered(Some((item.position() + 1).to_string())),
            other => other.clone(),
        },
        None => ListSymbol::Inherit,
    }
}
