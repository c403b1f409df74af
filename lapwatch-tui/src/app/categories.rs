use crate::config::CategorySeed;
use crate::types::HexColor;

/// Stable handle laps keep for their category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: HexColor,
}

/// Append-only list of categories. Entries are edited in place and never removed.
#[derive(Debug, Default)]
pub struct CategoryBook {
    categories: Vec<Category>,
    next_id: u32,
}

impl CategoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: &[CategorySeed]) -> Self {
        let mut book = Self::new();
        for seed in seeds {
            if book.create(&seed.name, seed.color.clone()).is_none() {
                tracing::warn!("skipping configured category with a blank name");
            }
        }
        book
    }

    /// Append a category. A name that is blank after trimming creates nothing.
    pub fn create(&mut self, name: &str, color: HexColor) -> Option<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = CategoryId(self.next_id);
        self.next_id += 1;
        self.categories.push(Category {
            id,
            name: name.to_string(),
            color,
        });
        Some(id)
    }

    /// Recolor the category at `index`. The name is left alone.
    pub fn update_color(&mut self, index: usize, color: HexColor) -> bool {
        match self.categories.get_mut(index) {
            Some(category) => {
                category.color = color;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hex;

    #[test]
    fn blank_names_create_nothing() {
        let mut book = CategoryBook::new();
        assert_eq!(book.create("", hex("#ff0000")), None);
        assert_eq!(book.create("   ", hex("#ff0000")), None);
        assert!(book.is_empty());
    }

    #[test]
    fn names_are_trimmed() {
        let mut book = CategoryBook::new();
        let id = book.create("  Study  ", hex("#FF0000")).unwrap();
        let category = book.get(id).unwrap();
        assert_eq!(category.name, "Study");
        assert_eq!(category.color.as_str(), "#FF0000");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn ids_stay_unique() {
        let mut book = CategoryBook::new();
        let a = book.create("a", hex("#111")).unwrap();
        let b = book.create("b", hex("#222")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn update_color_touches_only_target() {
        let mut book = CategoryBook::new();
        book.create("a", hex("#111")).unwrap();
        book.create("b", hex("#222")).unwrap();

        assert!(book.update_color(1, hex("#333")));

        assert_eq!(book.get_index(0).unwrap().color.as_str(), "#111");
        assert_eq!(book.get_index(1).unwrap().color.as_str(), "#333");
        assert_eq!(book.get_index(1).unwrap().name, "b");
    }

    #[test]
    fn update_color_out_of_range_is_ignored() {
        let mut book = CategoryBook::new();
        assert!(!book.update_color(0, hex("#333")));
    }

    #[test]
    fn blank_seeds_are_skipped() {
        let seeds = vec![
            CategorySeed {
                name: " ".to_string(),
                color: hex("#111"),
            },
            CategorySeed {
                name: "Break".to_string(),
                color: hex("#66CCFF"),
            },
        ];
        let book = CategoryBook::from_seeds(&seeds);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get_index(0).unwrap().name, "Break");
    }
}
