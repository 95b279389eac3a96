//! List trees stored in a flat arena.
//!
//! Items reference their parent and children by [`ItemId`]. The parent link is
//! lookup-only; the arena owns every item, so dropping a [`List`] is a plain
//! `Vec` drop regardless of depth.

use crate::TextStr;
use serde::{Deserialize, Serialize};

/// The marker drawn beside a list row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSymbol {
    #[default]
    None,
    /// Take the symbol from the parent item when flattened.
    Inherit,
    Bullet,
    /// A numbered marker. `None` asks children that inherit to number themselves.
    Numbered(Option<TextStr>),
    Custom(TextStr),
}

/// Horizontal indentation for one nesting level, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indent {
    /// Space before the symbol.
    pub pre: f32,
    /// Space between the symbol and the text.
    pub past: f32,
}

impl Indent {
    pub fn new(pre: f32, past: f32) -> Self {
        Self { pre, past }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the list tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Option<TextStr>,
    pub symbol: ListSymbol,
    children: Vec<ItemId>,
    parent: Option<ItemId>,
    /// Position within the parent's children (or within the roots).
    position: usize,
}

impl ListItem {
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    pub fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// An item with neither content nor children contributes nothing.
    pub fn is_noop(&self) -> bool {
        self.content.is_none() && self.children.is_empty()
    }
}

/// An owned builder tree, inserted into a [`List`] top-down with [`List::push`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntry {
    content: Option<TextStr>,
    symbol: ListSymbol,
    children: Vec<ListEntry>,
}

impl ListEntry {
    pub fn text(content: impl Into<TextStr>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// An entry without content; its children are leveled as if they were its siblings.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn symbol(mut self, symbol: ListSymbol) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn bullet(self) -> Self {
        self.symbol(ListSymbol::Bullet)
    }

    pub fn inherit(self) -> Self {
        self.symbol(ListSymbol::Inherit)
    }

    pub fn numbered(self) -> Self {
        self.symbol(ListSymbol::Numbered(None))
    }

    pub fn child(mut self, child: ListEntry) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ListEntry>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Root items plus the per-level indentation table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<ListItem>,
    roots: Vec<ItemId>,
    indents: Vec<Indent>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indents(indents: impl IntoIterator<Item = Indent>) -> Self {
        Self {
            indents: indents.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    /// Ids are only valid for the list that issued them, and `clear`
    /// invalidates all of them.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this list. Use [`get`](Self::get) for
    /// ids of uncertain origin.
    pub fn item(&self, id: ItemId) -> &ListItem {
        &self.items[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this list.
    pub fn item_mut(&mut self, id: ItemId) -> &mut ListItem {
        &mut self.items[id.0]
    }

    pub fn get(&self, id: ItemId) -> Option<&ListItem> {
        self.items.get(id.0)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        id.0 < self.items.len()
    }

    pub fn parent_of(&self, id: ItemId) -> Option<&ListItem> {
        self.item(id).parent.map(|p| self.item(p))
    }

    /// Total number of items in the arena, including content-less ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn indents(&self) -> &[Indent] {
        &self.indents
    }

    pub fn set_indents(&mut self, indents: Vec<Indent>) {
        self.indents = indents;
    }

    /// Indentation for `level`; levels beyond the table reuse its last entry.
    pub fn indent_for(&self, level: usize) -> Indent {
        self.indents
            .get(level)
            .or_else(|| self.indents.last())
            .copied()
            .unwrap_or_default()
    }

    pub fn push_root(&mut self, content: Option<TextStr>, symbol: ListSymbol) -> ItemId {
        let id = self.alloc(content, symbol, None, self.roots.len());
        self.roots.push(id);
        id
    }

    /// # Panics
    ///
    /// Panics if `parent` does not belong to this list.
    pub fn push_child(&mut self, parent: ItemId, content: Option<TextStr>, symbol: ListSymbol) -> ItemId {
        let position = self.items[parent.0].children.len();
        let id = self.alloc(content, symbol, Some(parent), position);
        self.items[parent.0].children.push(id);
        id
    }

    /// Inserts a builder tree as a new root and returns the root's id.
    pub fn push(&mut self, entry: ListEntry) -> ItemId {
        let root = self.push_root(entry.content, entry.symbol);
        let mut pending: Vec<(ItemId, Vec<ListEntry>)> = vec![(root, entry.children)];
        while let Some((parent, children)) = pending.pop() {
            for child in children {
                let id = self.push_child(parent, child.content, child.symbol);
                if !child.children.is_empty() {
                    pending.push((id, child.children));
                }
            }
        }
        root
    }

    /// Removes every item. Previously flattened rows are unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
        self.roots.clear();
    }

    fn alloc(&mut self, content: Option<TextStr>, symbol: ListSymbol, parent: Option<ItemId>, position: usize) -> ItemId {
        let id = ItemId(self.items.len());
        self.items.push(ListItem {
            content,
            symbol,
            children: Vec::new(),
            parent,
            position,
        });
        id
    }
}
