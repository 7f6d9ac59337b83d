//! Catalog category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu category of a catalog item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    MainCourse,
    Appetizer,
    Dessert,
    Drink,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::MainCourse,
        Category::Appetizer,
        Category::Dessert,
        Category::Drink,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::MainCourse => "Main Course",
            Category::Appetizer => "Appetizer",
            Category::Dessert => "Dessert",
            Category::Drink => "Drink",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_encoding() {
        let json = serde_json::to_string(&Category::MainCourse).unwrap();
        assert_eq!(json, "\"MAIN_COURSE\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::MainCourse);
    }
}
