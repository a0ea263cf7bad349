//! 菜单浏览状态

use crate::catalog::{Catalog, CatalogItem, Category};
use crate::tui::state::selection::SelectionState;

/// 分类标签页 + 当前分类内的选中项
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// 当前分类
    pub category: Category,
    /// 分类内列表选择
    pub items: SelectionState,
}

impl BrowseState {
    /// 打开菜单时的初始状态（默认分类）
    pub fn new(catalog: &Catalog) -> Self {
        let category = Category::default();
        Self {
            category,
            items: SelectionState::with_count(catalog.items_in(category).len()),
        }
    }

    /// 切换到指定分类并重置选中项
    pub fn switch_to(&mut self, category: Category, catalog: &Catalog) {
        self.category = category;
        self.items = SelectionState::with_count(catalog.items_in(category).len());
    }

    /// 下一个分类
    pub fn next_tab(&mut self, catalog: &Catalog) {
        self.switch_to(Category::from_index(self.category.index() + 1), catalog);
    }

    /// 上一个分类
    pub fn prev_tab(&mut self, catalog: &Catalog) {
        let len = Category::ALL.len();
        self.switch_to(Category::from_index(self.category.index() + len - 1), catalog);
    }

    /// 当前选中的菜品
    pub fn selected_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogItem> {
        let index = self.items.selected()?;
        catalog.items_in(self.category).get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::selection::Selectable;

    #[test]
    fn test_tabs_reset_selection() {
        let catalog = Catalog::default();
        let mut browse = BrowseState::new(&catalog);
        assert_eq!(browse.category, Category::Mains);

        browse.items.next();
        assert_eq!(browse.selected_item(&catalog).unwrap().id, "main2");

        browse.next_tab(&catalog);
        assert_eq!(browse.category, Category::Desserts);
        assert_eq!(browse.selected_item(&catalog).unwrap().id, "dessert1");

        browse.prev_tab(&catalog);
        browse.prev_tab(&catalog);
        assert_eq!(browse.category, Category::Appetizers);
        browse.prev_tab(&catalog);
        assert_eq!(browse.category, Category::Drinks);
    }
}
